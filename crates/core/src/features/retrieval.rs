use heroscope_api::{IconError, Result, RetrievedIcon, Style};
use std::sync::Arc;
use tracing::debug;

use crate::asset::AssetIndex;
use crate::markup::canonicalize_svg;

/// Canonical SVG source of `name` in `style`.
///
/// Resolution failures and malformed markup propagate unchanged and leave
/// the markup cache untouched.
pub fn retrieve(index: &AssetIndex, name: &str, style: Option<Style>) -> Result<RetrievedIcon> {
    let resolved = index.resolve_path(name, style)?;

    let svg = match index.cache().markup(&resolved.path) {
        Some(svg) => svg,
        None => {
            debug!("Reading {}", resolved.path.display());
            let raw = index
                .store()
                .read_to_string(&resolved.path)
                .map_err(|e| IconError::io(&resolved.path, e))?;
            let svg: Arc<str> = Arc::from(canonicalize_svg(&raw, resolved.style)?);
            index
                .cache()
                .store_markup(resolved.path.clone(), Arc::clone(&svg));
            svg
        }
    };

    Ok(RetrievedIcon {
        name: resolved.name,
        style: resolved.style,
        svg: svg.to_string(),
    })
}
