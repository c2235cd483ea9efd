use std::path::{Path, PathBuf};

use chr_junk_core::{ErrorKind, TileError};

/// Errors that can occur while composing images or writing metadata.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Tile(#[from] TileError),

    #[error("Failed to write image {}: {reason}", .path.display())]
    Image { path: PathBuf, reason: String },

    #[error("JSON writing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML writing error: {0}")]
    Xml(String),

    #[error("Unsupported metadata format '{0}'. Supported formats are 'json' and 'xml'.")]
    UnsupportedFormat(String),

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
}

impl ExportError {
    pub fn image(path: &Path, reason: impl ToString) -> Self {
        Self::Image {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn xml(reason: impl ToString) -> Self {
        Self::Xml(reason.to_string())
    }

    pub fn invalid_layout(msg: impl Into<String>) -> Self {
        Self::InvalidLayout(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Tile(e) => e.kind(),
            Self::UnsupportedFormat(_) => ErrorKind::Config,
            Self::InvalidLayout(_) => ErrorKind::Format,
            Self::Io(_) | Self::Image { .. } | Self::Json(_) | Self::Xml(_) => ErrorKind::Io,
        }
    }
}
