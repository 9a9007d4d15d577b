//! Storage capability used by the asset index.
//!
//! The engine only ever needs three primitives, so the filesystem sits behind
//! [`AssetStore`] and tests can swap in [`MemoryAssetStore`].

use dashmap::DashMap;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use walkdir::WalkDir;

/// One direct child of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub file_name: String,
    pub is_file: bool,
}

pub trait AssetStore: Send + Sync {
    /// Direct children of `dir`, in no particular order.
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<AssetEntry>>;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    fn exists(&self, path: &Path) -> bool;
}

/// Disk-backed store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsAssetStore;

impl AssetStore for FsAssetStore {
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<AssetEntry>> {
        let mut entries = Vec::new();
        // Symlinks are not followed, so a linked file is not reported as a file.
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry?;
            entries.push(AssetEntry {
                file_name: entry.file_name().to_string_lossy().into_owned(),
                is_file: entry.file_type().is_file(),
            });
        }
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// How many times each primitive of a [`MemoryAssetStore`] was called.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StoreAccessCounts {
    pub list_entries: usize,
    pub read_to_string: usize,
    pub exists: usize,
}

/// In-memory store keyed by full file path.
///
/// Directories are implied by the files beneath them. Every call is counted,
/// which lets tests assert how often the index touches storage.
#[derive(Debug, Default)]
pub struct MemoryAssetStore {
    files: DashMap<PathBuf, String>,
    list_calls: AtomicUsize,
    read_calls: AtomicUsize,
    exists_calls: AtomicUsize,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    pub fn remove(&self, path: &Path) -> Option<String> {
        self.files.remove(path).map(|(_, content)| content)
    }

    pub fn access_counts(&self) -> StoreAccessCounts {
        StoreAccessCounts {
            list_entries: self.list_calls.load(Ordering::Relaxed),
            read_to_string: self.read_calls.load(Ordering::Relaxed),
            exists: self.exists_calls.load(Ordering::Relaxed),
        }
    }

    pub fn reset_access_counts(&self) {
        self.list_calls.store(0, Ordering::Relaxed);
        self.read_calls.store(0, Ordering::Relaxed);
        self.exists_calls.store(0, Ordering::Relaxed);
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.files
            .iter()
            .any(|entry| entry.key() != path && entry.key().starts_with(path))
    }
}

impl AssetStore for MemoryAssetStore {
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<AssetEntry>> {
        self.list_calls.fetch_add(1, Ordering::Relaxed);

        // name -> is_file; a BTreeMap dedupes directories shared by many files
        let mut children: BTreeMap<String, bool> = BTreeMap::new();
        for entry in self.files.iter() {
            let Ok(rest) = entry.key().strip_prefix(dir) else {
                continue;
            };
            let mut components = rest.components();
            let Some(first) = components.next() else {
                continue;
            };
            let is_file = components.next().is_none();
            let name = first.as_os_str().to_string_lossy().into_owned();
            children
                .entry(name)
                .and_modify(|existing| *existing &= is_file)
                .or_insert(is_file);
        }

        if children.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", dir.display()),
            ));
        }

        Ok(children
            .into_iter()
            .map(|(file_name, is_file)| AssetEntry { file_name, is_file })
            .collect())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.read_calls.fetch_add(1, Ordering::Relaxed);
        self.files
            .get(path)
            .map(|content| content.value().clone())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no such file: {}", path.display()),
                )
            })
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_calls.fetch_add(1, Ordering::Relaxed);
        self.files.contains_key(path) || self.is_dir(path)
    }
}
