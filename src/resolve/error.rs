//! Error types for loading located source files.

use std::path::PathBuf;
use thiserror::Error;

/// Failure reported by a [`SourceLoader`](super::SourceLoader).
///
/// Resolution itself never fails: an unknown symbol is `None`. This type
/// only covers what happens after a file was found.
#[derive(Debug, Error)]
pub enum LoadError {
    /// IO error while reading the located file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The loader rejected or could not execute the file.
    #[error("Failed to load '{symbol}' from {}: {message}", .path.display())]
    Failed {
        symbol: String,
        path: PathBuf,
        message: String,
    },
}

impl LoadError {
    /// Create a loader failure.
    pub fn failed(
        symbol: impl Into<String>,
        path: impl Into<PathBuf>,
        message: impl Into<String>,
    ) -> Self {
        Self::Failed {
            symbol: symbol.into(),
            path: path.into(),
            message: message.into(),
        }
    }
}
