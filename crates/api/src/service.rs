use crate::error::Result;
use crate::models::{ListResult, RetrievedIcon, SearchResult, Style};

/// Query surface over a bundled icon collection.
///
/// Implementations are synchronous; async hosts are expected to move calls
/// onto a blocking worker.
pub trait IconService: Send + Sync {
    /// Enumerate icons, optionally restricted to one style.
    fn list_icons(&self, style: Option<Style>) -> Result<ListResult>;

    /// Ranked fuzzy search over icon names. A blank query matches nothing.
    fn search_icons(&self, query: &str, style: Option<Style>) -> Result<SearchResult>;

    /// Canonical SVG source for one icon. `style` is mandatory; `None`
    /// yields [`crate::IconError::StyleRequired`].
    fn retrieve_icon(&self, name: &str, style: Option<Style>) -> Result<RetrievedIcon>;

    /// Drop every memoized listing, path and markup entry.
    fn clear_caches(&self);
}
