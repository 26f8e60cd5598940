//! Destination prompt

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A named file type filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogFilter {
    pub name: String,
    pub extensions: Vec<String>,
}

/// Options for a native save dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDialogOptions {
    /// Suggested file name or path
    pub default_path: String,
    pub filters: Vec<DialogFilter>,
}

/// Native "save as" picker
#[async_trait]
pub trait SaveDialog: Send + Sync {
    /// Ask the user for a destination. `None` or an empty path means the
    /// user cancelled.
    async fn save(&self, options: SaveDialogOptions) -> Option<String>;
}
