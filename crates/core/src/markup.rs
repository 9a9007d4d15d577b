//! Canonical, copy-ready SVG output.
//!
//! Sources are scanned with regular expressions rather than parsed into a
//! tree. Only the root `<svg>` element and the tags directly inside it are
//! looked at, and the output layout is fixed:
//!
//! ```text
//! <svg {attributes}>
//!   {tag}
//!   {tag}
//! </svg>
//! ```

use heroscope_api::{IconError, Result, Style};
use once_cell::sync::Lazy;
use regex::Regex;

static ROOT_ELEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<svg\b([^>]*)>([\s\S]*?)</svg>").expect("root element pattern is valid")
});
static ARIA_HIDDEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\s+aria-hidden="[^"]*""#).expect("aria-hidden pattern is valid"));
static DATA_SLOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\s+data-slot="[^"]*""#).expect("data-slot pattern is valid"));
static CLASS_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\bclass=""#).expect("class pattern is valid"));
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));
static SELF_CLOSING_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*/>$").expect("self-closing pattern is valid"));
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Reformat raw SVG source for `style`.
///
/// `aria-hidden` and `data-slot` are dropped from the root element, and a
/// `class` with the style's default size is added when none is present.
/// Every tag inside the root (closing tags included) is kept in document
/// order on its own indented line.
pub fn canonicalize_svg(raw: &str, style: Style) -> Result<String> {
    let captures = ROOT_ELEMENT.captures(raw).ok_or(IconError::InvalidMarkup)?;
    let raw_attrs = captures.get(1).map_or("", |m| m.as_str());
    let inner = captures.get(2).map_or("", |m| m.as_str());

    let stripped = ARIA_HIDDEN.replace_all(raw_attrs, "");
    let stripped = DATA_SLOT.replace_all(&stripped, "");
    let mut attrs = collapse_whitespace(&stripped);

    if !CLASS_ATTR.is_match(&attrs) {
        // Exactly one space between `<svg` and the first attribute, even
        // when `class` is the only one: `<svg class="size-6">`.
        if !attrs.is_empty() {
            attrs.push(' ');
        }
        attrs.push_str(&format!("class=\"{}\"", style.default_class()));
    }

    let mut out = format!("<svg {attrs}>");
    for tag in TAG.find_iter(inner) {
        out.push_str("\n  ");
        out.push_str(&canonical_child_tag(tag.as_str()));
    }
    out.push_str("\n</svg>");
    Ok(out)
}

fn collapse_whitespace(value: &str) -> String {
    WHITESPACE_RUN.replace_all(value, " ").trim().to_string()
}

fn canonical_child_tag(tag: &str) -> String {
    let collapsed = collapse_whitespace(tag);
    SELF_CLOSING_END.replace(&collapsed, " />").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEROICON_OUTLINE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor" aria-hidden="true" data-slot="icon">
  <path stroke-linecap="round" stroke-linejoin="round" d="M6 18 18 6M6 6l12 12"/>
</svg>
"#;

    #[test]
    fn test_strips_presentation_attributes_on_empty_root() {
        let raw = r#"<svg xmlns="..." aria-hidden="true" data-slot="icon"></svg>"#;
        assert_eq!(
            canonicalize_svg(raw, Style::Outline).unwrap(),
            "<svg xmlns=\"...\" class=\"size-6\">\n</svg>"
        );
    }

    #[test]
    fn test_canonical_heroicon() {
        let svg = canonicalize_svg(HEROICON_OUTLINE, Style::Outline).unwrap();
        assert_eq!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" fill=\"none\" viewBox=\"0 0 24 24\" \
             stroke-width=\"1.5\" stroke=\"currentColor\" class=\"size-6\">\n  \
             <path stroke-linecap=\"round\" stroke-linejoin=\"round\" d=\"M6 18 18 6M6 6l12 12\" />\n\
             </svg>"
        );
    }

    #[test]
    fn test_default_class_follows_style() {
        let raw = r#"<svg viewBox="0 0 16 16"><path d="M1 1"/></svg>"#;
        assert!(
            canonicalize_svg(raw, Style::Micro)
                .unwrap()
                .starts_with("<svg viewBox=\"0 0 16 16\" class=\"size-4\">")
        );
        assert!(
            canonicalize_svg(raw, Style::Mini)
                .unwrap()
                .contains("class=\"size-5\"")
        );
        assert!(
            canonicalize_svg(raw, Style::Solid)
                .unwrap()
                .contains("class=\"size-6\"")
        );
    }

    #[test]
    fn test_existing_class_is_kept() {
        let raw = r#"<svg class="w-4 h-4" viewBox="0 0 20 20"></svg>"#;
        assert_eq!(
            canonicalize_svg(raw, Style::Mini).unwrap(),
            "<svg class=\"w-4 h-4\" viewBox=\"0 0 20 20\">\n</svg>"
        );
    }

    #[test]
    fn test_root_without_attributes_gets_single_space() {
        assert_eq!(
            canonicalize_svg("<svg></svg>", Style::Outline).unwrap(),
            "<svg class=\"size-6\">\n</svg>"
        );
    }

    #[test]
    fn test_whitespace_and_case_variations_are_stable() {
        let a = "<svg   viewBox=\"0 0 24 24\"\r\n   fill=\"none\">\r\n<path   d=\"M1 1\"   /></svg>";
        let b = "\n\n  <SVG viewBox=\"0 0 24 24\" fill=\"none\"><path d=\"M1 1\"/>\n</SVG>  ";
        let expected = "<svg viewBox=\"0 0 24 24\" fill=\"none\" class=\"size-6\">\n  <path d=\"M1 1\" />\n</svg>";
        assert_eq!(canonicalize_svg(a, Style::Outline).unwrap(), expected);
        assert_eq!(canonicalize_svg(b, Style::Outline).unwrap(), expected);
    }

    #[test]
    fn test_child_tags_keep_document_order() {
        let raw = r#"<svg viewBox="0 0 20 20"><g   fill="red"><path d="A"/><circle r="2" /></g></svg>"#;
        assert_eq!(
            canonicalize_svg(raw, Style::Mini).unwrap(),
            "<svg viewBox=\"0 0 20 20\" class=\"size-5\">\n  \
             <g fill=\"red\">\n  \
             <path d=\"A\" />\n  \
             <circle r=\"2\" />\n  \
             </g>\n\
             </svg>"
        );
    }

    #[test]
    fn test_repeated_runs_are_byte_identical() {
        let first = canonicalize_svg(HEROICON_OUTLINE, Style::Outline).unwrap();
        let second = canonicalize_svg(&first, Style::Outline).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_root_is_invalid_markup() {
        for raw in ["", "<path d=\"M1\"/>", "<svg viewBox=\"0 0 1 1\">", "<svgfoo></svgfoo>"] {
            let err = canonicalize_svg(raw, Style::Outline).unwrap_err();
            assert!(matches!(err, IconError::InvalidMarkup), "raw: {raw:?}");
        }
        assert_eq!(
            canonicalize_svg("", Style::Outline).unwrap_err().to_string(),
            "Invalid SVG source: missing <svg> root element."
        );
    }
}
