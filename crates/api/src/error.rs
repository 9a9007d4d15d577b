use std::path::PathBuf;

use crate::models::Style;

/// Failures surfaced by icon listing, search and retrieval.
///
/// Messages are shown verbatim to callers, so they are phrased as complete
/// sentences.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("Unsupported style \"{0}\". Supported styles: {styles}.", styles = Style::supported_list())]
    InvalidStyle(String),
    #[error("Style is required.")]
    StyleRequired,
    #[error("Invalid icon name \"{0}\".")]
    InvalidIconName(String),
    #[error("Icon \"{name}\" not found in style \"{style}\".")]
    IconNotFound { name: String, style: Style },
    #[error("Invalid SVG source: missing <svg> root element.")]
    InvalidMarkup,
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IconError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IconError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IconError>;
