//! CLI error types.

use std::path::PathBuf;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("Missing {}", .0.display())]
    MissingInput(PathBuf),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
