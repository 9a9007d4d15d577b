//! Human-readable renderings shown next to structured results.

use heroscope_api::{ListResult, SearchResult};

pub fn format_list_text(result: &ListResult) -> String {
    let mut lines = vec![format!(
        "Found {} icon variants across {} style(s).",
        result.total,
        result.styles.len()
    )];

    for style in &result.styles {
        let names = result
            .icons_by_style
            .get(style)
            .map(Vec::as_slice)
            .unwrap_or_default();
        lines.push(format!("{} ({}): {}", style, names.len(), names.join(", ")));
    }

    lines.join("\n")
}

pub fn format_search_text(result: &SearchResult) -> String {
    if result.total == 0 {
        return format!("No icons found for \"{}\".", result.query);
    }

    let mut lines = vec![format!(
        "Found {} matches for \"{}\" across {} style(s).",
        result.total,
        result.query,
        result.styles.len()
    )];
    lines.extend(
        result
            .icons
            .iter()
            .map(|icon| format!("{}: {}", icon.style, icon.name)),
    );

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use heroscope_api::{IconVariant, ScoredIcon, Style};
    use indexmap::IndexMap;

    #[test]
    fn test_list_text() {
        let mut icons_by_style = IndexMap::new();
        icons_by_style.insert(Style::Outline, vec!["bell".to_string(), "cake".to_string()]);
        icons_by_style.insert(Style::Micro, vec![]);
        let result = ListResult {
            icons: vec![
                IconVariant {
                    name: "bell".to_string(),
                    style: Style::Outline,
                },
                IconVariant {
                    name: "cake".to_string(),
                    style: Style::Outline,
                },
            ],
            icons_by_style,
            styles: vec![Style::Outline, Style::Micro],
            total: 2,
        };

        assert_eq!(
            format_list_text(&result),
            "Found 2 icon variants across 2 style(s).\noutline (2): bell, cake\nmicro (0): "
        );
    }

    #[test]
    fn test_search_text_empty() {
        let result = SearchResult::empty("missing", vec![Style::Outline]);
        assert_eq!(format_search_text(&result), "No icons found for \"missing\".");
    }

    #[test]
    fn test_search_text_matches() {
        let result = SearchResult {
            icons: vec![
                ScoredIcon {
                    name: "academic-cap".to_string(),
                    style: Style::Outline,
                    score: 136,
                },
                ScoredIcon {
                    name: "academic-cap".to_string(),
                    style: Style::Solid,
                    score: 136,
                },
            ],
            query: "academic-cap".to_string(),
            styles: Style::ALL.to_vec(),
            total: 2,
        };

        assert_eq!(
            format_search_text(&result),
            "Found 2 matches for \"academic-cap\" across 4 style(s).\n\
             outline: academic-cap\n\
             solid: academic-cap"
        );
    }
}
