use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::style::Style;

/// A single icon in a single style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconVariant {
    pub name: String,
    pub style: Style,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredIcon {
    pub name: String,
    pub style: Style,
    pub score: u32,
}

/// Enumeration of the icon index, grouped and flattened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResult {
    /// Style-major, alphabetical within each style
    pub icons: Vec<IconVariant>,
    pub icons_by_style: IndexMap<Style, Vec<String>>,
    pub styles: Vec<Style>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub icons: Vec<ScoredIcon>,
    /// The trimmed query text
    pub query: String,
    pub styles: Vec<Style>,
    pub total: usize,
}

impl SearchResult {
    pub fn empty(query: impl Into<String>, styles: Vec<Style>) -> Self {
        Self {
            icons: Vec::new(),
            query: query.into(),
            styles,
            total: 0,
        }
    }
}

/// Canonical SVG source of one icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievedIcon {
    pub name: String,
    pub style: Style,
    pub svg: String,
}
