use heroscope_api::Style;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Icon names present in every style of the fixture bundle.
pub const ICONS: &[&str] = &[
    "academic-cap",
    "arrow-long-right",
    "arrow-right",
    "arrow-right-circle",
    "bell",
    "home",
    "home-modern",
    "x-mark",
];

fn svg_source(style: Style) -> String {
    let (view_box, attrs) = match style {
        Style::Outline => (
            "0 0 24 24",
            r#"fill="none" stroke-width="1.5" stroke="currentColor""#,
        ),
        Style::Solid => ("0 0 24 24", r#"fill="currentColor""#),
        Style::Mini => ("0 0 20 20", r#"fill="currentColor""#),
        Style::Micro => ("0 0 16 16", r#"fill="currentColor""#),
    };
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" {attrs} viewBox=\"{view_box}\" aria-hidden=\"true\" data-slot=\"icon\">\n  \
         <path stroke-linecap=\"round\"\n        stroke-linejoin=\"round\" d=\"M6 18 18 6M6 6l12 12\"/>\n\
         </svg>\n"
    )
}

/// Writes a bundle in the Heroicons package layout into a fresh temp dir.
pub fn heroicons_fixture() -> TempDir {
    let temp = tempfile::tempdir().unwrap();
    for style in Style::ALL {
        let dir = temp.path().join(style.subdir());
        fs::create_dir_all(&dir).unwrap();
        for name in ICONS {
            fs::write(dir.join(format!("{name}.svg")), svg_source(style)).unwrap();
        }
        // Noise the index must skip
        fs::write(dir.join("LICENSE"), "MIT").unwrap();
        fs::create_dir_all(dir.join("sub-collection.svg")).unwrap();
    }
    temp
}

pub fn write_icon(root: &Path, style: Style, name: &str, content: &str) {
    fs::write(root.join(style.subdir()).join(format!("{name}.svg")), content).unwrap();
}
