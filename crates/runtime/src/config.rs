//! Locating the icon asset root.
//!
//! The first source that is set wins: an explicit path (CLI flag), then the
//! `HEROSCOPE_ASSET_ROOT` environment variable. When neither is set, the
//! nearest `node_modules/heroicons` above the working directory is used, which
//! is where npm installs the package.

use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ASSET_ROOT_ENV: &str = "HEROSCOPE_ASSET_ROOT";

const PACKAGE_DIR: [&str; 2] = ["node_modules", "heroicons"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Icon asset root not found. Tried: {}", display_paths(.tried))]
    AssetRootNotFound { tried: Vec<PathBuf> },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetRootSource {
    Explicit,
    Environment,
    NodeModules,
}

impl fmt::Display for AssetRootSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetRootSource::Explicit => f.write_str("--asset-root"),
            AssetRootSource::Environment => write!(f, "${ASSET_ROOT_ENV}"),
            AssetRootSource::NodeModules => f.write_str("node_modules"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRoot {
    pub path: PathBuf,
    pub source: AssetRootSource,
}

/// Resolve the asset root from the process environment.
pub fn resolve_asset_root(explicit: Option<&Path>) -> Result<AssetRoot, ConfigError> {
    let from_env = std::env::var_os(ASSET_ROOT_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);
    let cwd = std::env::current_dir().ok();
    resolve_from(explicit, from_env.as_deref(), cwd.as_deref())
}

/// Resolution with every input passed in, so it can be tested without
/// touching the real environment.
pub fn resolve_from(
    explicit: Option<&Path>,
    from_env: Option<&Path>,
    cwd: Option<&Path>,
) -> Result<AssetRoot, ConfigError> {
    let configured = explicit
        .map(|path| (path, AssetRootSource::Explicit))
        .or_else(|| from_env.map(|path| (path, AssetRootSource::Environment)));

    // A configured path is authoritative; never fall back past it.
    if let Some((path, source)) = configured {
        return if path.is_dir() {
            debug!("Asset root {} from {}", path.display(), source);
            Ok(AssetRoot {
                path: path.to_path_buf(),
                source,
            })
        } else {
            Err(ConfigError::AssetRootNotFound {
                tried: vec![path.to_path_buf()],
            })
        };
    }

    let mut tried = Vec::new();
    for dir in cwd.into_iter().flat_map(Path::ancestors) {
        let candidate = PACKAGE_DIR.iter().fold(dir.to_path_buf(), |acc, part| acc.join(part));
        if candidate.is_dir() {
            debug!("Asset root {} from node_modules", candidate.display());
            return Ok(AssetRoot {
                path: candidate,
                source: AssetRootSource::NodeModules,
            });
        }
        tried.push(candidate);
    }

    Err(ConfigError::AssetRootNotFound { tried })
}
