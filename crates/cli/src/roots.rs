use heroscope_api::Style;
use heroscope_core::IconEngine;
use heroscope_runtime::AssetRoot;

pub fn run(root: AssetRoot) -> Result<(), Box<dyn std::error::Error>> {
    println!("Asset root: {} (from {})", root.path.display(), root.source);

    let engine = IconEngine::new(root.path);
    for style in Style::ALL {
        let dir = engine.index().style_dir(style);
        match engine.list_names(style) {
            Ok(names) => println!("{:<8} {} ({} icons)", style, dir.display(), names.len()),
            Err(e) => println!("{:<8} {} ({})", style, dir.display(), e),
        }
    }
    Ok(())
}
