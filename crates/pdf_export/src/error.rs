//! Error types for export operations

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The rendering backend failed; the message is shown to the user as-is
    #[error("{0}")]
    Backend(String),

    #[error("An export is already in progress")]
    Busy,
}

pub type Result<T> = std::result::Result<T, ExportError>;
