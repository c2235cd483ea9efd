use thiserror::Error;

use chr_junk_core::{ErrorKind, TileError};
use chr_junk_export::ExportError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// ROM reading or tile decoding failed
    #[error(transparent)]
    Tile(#[from] TileError),

    /// Image or metadata output failed
    #[error(transparent)]
    Export(#[from] ExportError),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Config,
            Self::Tile(e) => e.kind(),
            Self::Export(e) => e.kind(),
        }
    }
}
