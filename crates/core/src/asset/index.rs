//! Per-style icon index over an asset root.

use heroscope_api::{IconError, Result, Style};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use super::ASSET_EXTENSION;
use super::store::AssetStore;
use crate::cache::IconCache;
use crate::naming::{compare_names, is_valid_icon_name, normalize_icon_name};

/// A concrete asset located on storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIcon {
    pub path: PathBuf,
    pub name: String,
    pub style: Style,
}

/// Lists and resolves icons under one asset root.
///
/// The root holds one sub-collection directory per [`Style`]; see
/// [`Style::subdir`]. All lookups go through the shared [`IconCache`].
pub struct AssetIndex {
    root: PathBuf,
    store: Arc<dyn AssetStore>,
    cache: Arc<IconCache>,
}

impl AssetIndex {
    pub fn new(root: impl Into<PathBuf>, store: Arc<dyn AssetStore>, cache: Arc<IconCache>) -> Self {
        Self {
            root: root.into(),
            store,
            cache,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn store(&self) -> &dyn AssetStore {
        self.store.as_ref()
    }

    pub fn cache(&self) -> &IconCache {
        &self.cache
    }

    pub fn style_dir(&self, style: Style) -> PathBuf {
        self.root.join(style.subdir())
    }

    /// Alphabetical icon names available in `style`.
    ///
    /// The directory is scanned once per (root, style); later calls hand
    /// out a copy of the cached listing.
    pub fn list_names(&self, style: Style) -> Result<Vec<String>> {
        if let Some(cached) = self.cache.names(&self.root, style) {
            return Ok(cached.to_vec());
        }

        let dir = self.style_dir(style);
        debug!("Scanning {} icons in {}", style, dir.display());
        let entries = self
            .store
            .list_entries(&dir)
            .map_err(|e| IconError::io(&dir, e))?;

        let suffix = format!(".{ASSET_EXTENSION}");
        let mut names: Vec<String> = entries
            .into_iter()
            .filter(|entry| entry.is_file)
            .filter_map(|entry| entry.file_name.strip_suffix(&suffix).map(str::to_string))
            .collect();
        names.sort_by(|a, b| compare_names(a, b));

        debug!("Indexed {} {} icons", names.len(), style);
        self.cache
            .store_names(&self.root, style, Arc::from(names.clone()));
        Ok(names)
    }

    /// Map a user-supplied name onto the asset file for `style`.
    ///
    /// Fails with [`IconError::StyleRequired`] when no style is given, with
    /// [`IconError::InvalidIconName`] when the normalized name is empty or
    /// has characters outside `[a-z0-9-]`, and with
    /// [`IconError::IconNotFound`] when no such file exists. Only successful
    /// resolutions are cached.
    pub fn resolve_path(&self, name: &str, style: Option<Style>) -> Result<ResolvedIcon> {
        let style = style.ok_or(IconError::StyleRequired)?;

        let normalized = normalize_icon_name(name);
        if !is_valid_icon_name(&normalized) {
            return Err(IconError::InvalidIconName(name.to_string()));
        }

        if let Some(path) = self.cache.path(&self.root, style, &normalized) {
            return Ok(ResolvedIcon {
                path,
                name: normalized,
                style,
            });
        }

        let path = self
            .style_dir(style)
            .join(format!("{normalized}.{ASSET_EXTENSION}"));
        if !self.store.exists(&path) {
            return Err(IconError::IconNotFound {
                name: normalized,
                style,
            });
        }

        debug!("Resolved {} icon {} to {}", style, normalized, path.display());
        self.cache
            .store_path(&self.root, style, &normalized, path.clone());
        Ok(ResolvedIcon {
            path,
            name: normalized,
            style,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::MemoryAssetStore;

    const ROOT: &str = "/assets/heroicons";

    fn fixture() -> (AssetIndex, Arc<MemoryAssetStore>) {
        let store = Arc::new(MemoryAssetStore::new());
        for (subdir, file) in [
            ("24/outline", "x-mark.svg"),
            ("24/outline", "academic-cap.svg"),
            ("24/outline", "arrow-up.svg"),
            ("24/outline", "README.md"),
            ("24/outline", "nested/ignored.svg"),
            ("20/solid", "bell.svg"),
        ] {
            store.insert(format!("{ROOT}/{subdir}/{file}"), "<svg></svg>");
        }
        let index = AssetIndex::new(ROOT, store.clone(), Arc::new(IconCache::new()));
        (index, store)
    }

    #[test]
    fn test_list_names_filters_and_sorts() {
        let (index, _) = fixture();
        let names = index.list_names(Style::Outline).unwrap();
        assert_eq!(names, vec!["academic-cap", "arrow-up", "x-mark"]);
    }

    #[test]
    fn test_list_names_uses_locale_order_for_loose_names() {
        let store = Arc::new(MemoryAssetStore::new());
        for file in ["Bell.svg", "bell.svg", "a-b.svg", "a_b.svg", "a1.svg"] {
            store.insert(format!("/loose/16/solid/{file}"), "<svg></svg>");
        }
        let index = AssetIndex::new("/loose", store, Arc::new(IconCache::new()));

        assert_eq!(
            index.list_names(Style::Micro).unwrap(),
            vec!["a_b", "a-b", "a1", "bell", "Bell"]
        );
    }

    #[test]
    fn test_list_names_scans_once() {
        let (index, store) = fixture();
        let first = index.list_names(Style::Outline).unwrap();
        let second = index.list_names(Style::Outline).unwrap();

        assert_eq!(first, second);
        assert_eq!(store.access_counts().list_entries, 1);

        index.cache().clear();
        index.list_names(Style::Outline).unwrap();
        assert_eq!(store.access_counts().list_entries, 2);
    }

    #[test]
    fn test_list_names_missing_dir_is_io_error() {
        let (index, _) = fixture();
        let err = index.list_names(Style::Micro).unwrap_err();
        assert!(matches!(err, IconError::Io { .. }));
        assert!(index.cache().names(index.root(), Style::Micro).is_none());
    }

    #[test]
    fn test_resolve_path_normalizes_and_caches() {
        let (index, store) = fixture();
        let first = index.resolve_path("Academic Cap", Some(Style::Outline)).unwrap();
        let second = index.resolve_path("academic-cap", Some(Style::Outline)).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.name, "academic-cap");
        assert_eq!(
            first.path,
            PathBuf::from(format!("{ROOT}/24/outline/academic-cap.svg"))
        );
        assert_eq!(store.access_counts().exists, 1);
    }

    #[test]
    fn test_resolve_path_requires_style() {
        let (index, _) = fixture();
        let err = index.resolve_path("academic-cap", None).unwrap_err();
        assert!(matches!(err, IconError::StyleRequired));
        assert_eq!(err.to_string(), "Style is required.");
    }

    #[test]
    fn test_resolve_path_rejects_traversal() {
        let (index, store) = fixture();
        for name in ["acad../cap", "../24/solid/bell", "", "   ", "x/mark"] {
            let err = index.resolve_path(name, Some(Style::Outline)).unwrap_err();
            assert!(matches!(err, IconError::InvalidIconName(_)), "name: {name:?}");
        }
        assert_eq!(store.access_counts().exists, 0);

        let err = index
            .resolve_path("acad../cap", Some(Style::Outline))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid icon name \"acad../cap\".");
    }

    #[test]
    fn test_resolve_path_not_found_is_not_cached() {
        let (index, store) = fixture();
        let err = index.resolve_path("bell", Some(Style::Outline)).unwrap_err();
        assert_eq!(err.to_string(), "Icon \"bell\" not found in style \"outline\".");

        let _ = index.resolve_path("bell", Some(Style::Outline));
        assert_eq!(store.access_counts().exists, 2);
        assert_eq!(index.cache().stats().paths, 0);
    }
}
