//! Process-lifetime memoization for the asset index.
//!
//! Three tiers, all append-only until [`IconCache::clear`]:
//! - style listings keyed by (asset root, style)
//! - resolved file paths keyed by (asset root, style, normalized name)
//! - canonical markup keyed by resolved file path
//!
//! Every cached value is a pure function of its key, so concurrent
//! population is harmless: the last writer wins with an identical value.

use dashmap::DashMap;
use heroscope_api::Style;
use std::path::{Path, PathBuf};
use std::sync::Arc;

type NamesKey = (PathBuf, Style);
type PathKey = (PathBuf, Style, String);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub listings: usize,
    pub paths: usize,
    pub markup: usize,
}

#[derive(Debug, Default)]
pub struct IconCache {
    names: DashMap<NamesKey, Arc<[String]>>,
    paths: DashMap<PathKey, PathBuf>,
    markup: DashMap<PathBuf, Arc<str>>,
}

impl IconCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self, root: &Path, style: Style) -> Option<Arc<[String]>> {
        self.names
            .get(&(root.to_path_buf(), style))
            .map(|entry| Arc::clone(entry.value()))
    }

    pub fn store_names(&self, root: &Path, style: Style, names: Arc<[String]>) {
        self.names.insert((root.to_path_buf(), style), names);
    }

    pub fn path(&self, root: &Path, style: Style, name: &str) -> Option<PathBuf> {
        self.paths
            .get(&(root.to_path_buf(), style, name.to_string()))
            .map(|entry| entry.value().clone())
    }

    pub fn store_path(&self, root: &Path, style: Style, name: &str, path: PathBuf) {
        self.paths
            .insert((root.to_path_buf(), style, name.to_string()), path);
    }

    pub fn markup(&self, path: &Path) -> Option<Arc<str>> {
        self.markup.get(path).map(|entry| Arc::clone(entry.value()))
    }

    pub fn store_markup(&self, path: PathBuf, svg: Arc<str>) {
        self.markup.insert(path, svg);
    }

    /// Drop all three tiers.
    pub fn clear(&self) {
        self.names.clear();
        self.paths.clear();
        self.markup.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            listings: self.names.len(),
            paths: self.paths.len(),
            markup: self.markup.len(),
        }
    }
}
