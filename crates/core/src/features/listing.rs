use heroscope_api::{IconVariant, ListResult, Result, Style};
use indexmap::IndexMap;

use crate::asset::AssetIndex;

/// Enumerate icons for one style, or for every style in enumeration order.
pub fn list_all(index: &AssetIndex, style: Option<Style>) -> Result<ListResult> {
    let styles = Style::scope(style);
    let mut icons_by_style = IndexMap::with_capacity(styles.len());
    let mut icons = Vec::new();

    for &style in &styles {
        let names = index.list_names(style)?;
        icons.extend(names.iter().map(|name| IconVariant {
            name: name.clone(),
            style,
        }));
        icons_by_style.insert(style, names);
    }

    Ok(ListResult {
        total: icons.len(),
        icons,
        icons_by_style,
        styles,
    })
}
