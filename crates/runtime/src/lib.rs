pub mod config;

use heroscope_api::IconService;
use heroscope_core::IconEngine;
use std::path::PathBuf;
use std::sync::Arc;

pub use config::{ASSET_ROOT_ENV, AssetRoot, AssetRootSource, ConfigError, resolve_asset_root};

/// Bootstraps the default engine: filesystem storage and fresh caches.
pub fn build_default_engine(root: PathBuf) -> Arc<dyn IconService> {
    tracing::debug!("Serving icons from {}", root.display());
    Arc::new(IconEngine::new(root))
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module; keep the guard alive.
pub fn init_logging(component: &str, to_stderr: bool) -> impl Drop + use<> {
    heroscope_core::logging::init_logging(component, to_stderr)
}
