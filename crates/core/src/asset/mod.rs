//! Asset layer: storage access and the cached per-style icon index.
//!
//! ```text
//! ┌──────────────┐   miss   ┌──────────────────┐
//! │  AssetIndex  │ ───────▶ │  dyn AssetStore  │
//! │  (IconCache) │ ◀─────── │  (fs / memory)   │
//! └──────────────┘          └──────────────────┘
//! ```

pub mod index;
pub mod store;

pub use index::{AssetIndex, ResolvedIcon};
pub use store::{AssetEntry, AssetStore, FsAssetStore, MemoryAssetStore, StoreAccessCounts};

/// File extension of every icon asset.
pub const ASSET_EXTENSION: &str = "svg";
