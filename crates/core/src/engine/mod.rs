//! Icon engine: the single entry point clients talk to.
//!
//! Wraps an [`AssetIndex`] and exposes listing, search and retrieval. The
//! engine is synchronous; async clients (MCP) move calls onto a blocking
//! worker.

use heroscope_api::{IconService, ListResult, Result, RetrievedIcon, SearchResult, Style};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::asset::{AssetIndex, AssetStore, FsAssetStore, ResolvedIcon};
use crate::cache::IconCache;
use crate::features;

pub struct IconEngine {
    index: AssetIndex,
    cache: Arc<IconCache>,
}

impl IconEngine {
    /// Engine over an asset root on disk, with its own caches.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_store(root, Arc::new(FsAssetStore))
    }

    pub fn with_store(root: impl Into<PathBuf>, store: Arc<dyn AssetStore>) -> Self {
        Self::with_parts(root, store, Arc::new(IconCache::new()))
    }

    /// Engines built over the same `cache` share memoized results; entries
    /// are keyed by asset root, so different roots never collide.
    pub fn with_parts(
        root: impl Into<PathBuf>,
        store: Arc<dyn AssetStore>,
        cache: Arc<IconCache>,
    ) -> Self {
        let index = AssetIndex::new(root, store, Arc::clone(&cache));
        Self { index, cache }
    }

    pub fn root(&self) -> &Path {
        self.index.root()
    }

    pub fn index(&self) -> &AssetIndex {
        &self.index
    }

    pub fn cache(&self) -> &Arc<IconCache> {
        &self.cache
    }

    pub fn list_names(&self, style: Style) -> Result<Vec<String>> {
        self.index.list_names(style)
    }

    pub fn resolve_path(&self, name: &str, style: Option<Style>) -> Result<ResolvedIcon> {
        self.index.resolve_path(name, style)
    }

    pub fn list_all(&self, style: Option<Style>) -> Result<ListResult> {
        features::list_all(&self.index, style)
    }

    pub fn search(&self, query: &str, style: Option<Style>) -> Result<SearchResult> {
        features::search(&self.index, query, style)
    }

    pub fn retrieve(&self, name: &str, style: Option<Style>) -> Result<RetrievedIcon> {
        features::retrieve(&self.index, name, style)
    }

    pub fn clear_caches(&self) {
        debug!("Clearing icon caches");
        self.cache.clear();
    }
}

impl IconService for IconEngine {
    fn list_icons(&self, style: Option<Style>) -> Result<ListResult> {
        self.list_all(style)
    }

    fn search_icons(&self, query: &str, style: Option<Style>) -> Result<SearchResult> {
        self.search(query, style)
    }

    fn retrieve_icon(&self, name: &str, style: Option<Style>) -> Result<RetrievedIcon> {
        self.retrieve(name, style)
    }

    fn clear_caches(&self) {
        IconEngine::clear_caches(self)
    }
}
