//! Export configuration

use crate::{DialogFilter, SaveDialogOptions};
use serde::{Deserialize, Serialize};

/// Options controlling the export flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportConfig {
    /// File name suggested by the save dialog
    #[serde(default = "default_file_name")]
    pub default_file_name: String,
    /// Label of the dialog's file type filter
    #[serde(default = "default_filter_name")]
    pub filter_name: String,
    /// Extensions accepted by the dialog filter
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Reject a new export while another one is in flight
    #[serde(default)]
    pub reject_concurrent: bool,
}

fn default_file_name() -> String {
    "document.pdf".to_string()
}

fn default_filter_name() -> String {
    "PDF".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["pdf".to_string()]
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_file_name: default_file_name(),
            filter_name: default_filter_name(),
            extensions: default_extensions(),
            reject_concurrent: false,
        }
    }
}

impl ExportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the suggested file name
    pub fn with_default_file_name(mut self, name: impl Into<String>) -> Self {
        self.default_file_name = name.into();
        self
    }

    /// Serialize exports: a second attempt fails with `ExportError::Busy`
    pub fn rejecting_concurrent(mut self) -> Self {
        self.reject_concurrent = true;
        self
    }

    /// Options passed to the save dialog
    pub fn dialog_options(&self) -> SaveDialogOptions {
        SaveDialogOptions {
            default_path: self.default_file_name.clone(),
            filters: vec![DialogFilter {
                name: self.filter_name.clone(),
                extensions: self.extensions.clone(),
            }],
        }
    }
}
