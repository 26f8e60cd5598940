//! Error types for document model operations

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocModelError {
    #[error("Unknown paper format: {0}")]
    UnknownPaperFormat(String),

    #[error("Unknown orientation: {0}")]
    UnknownOrientation(String),

    #[error("Invalid page id: {0}")]
    InvalidPageId(String),
}

pub type Result<T> = std::result::Result<T, DocModelError>;
