//! Results reported back to the UI

use serde::{Deserialize, Serialize};

pub const SAVED_MESSAGE: &str = "PDF saved successfully";
pub const CANCELLED_MESSAGE: &str = "Operation cancelled by user";

/// How a save attempt ended, short of a backend failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "ExportResult")]
pub enum ExportOutcome {
    /// The backend wrote the PDF; `path` is where it ended up
    Saved { path: String },
    /// The user dismissed the destination prompt
    Cancelled,
}

impl ExportOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExportOutcome::Saved { .. })
    }

    pub fn message(&self) -> &'static str {
        match self {
            ExportOutcome::Saved { .. } => SAVED_MESSAGE,
            ExportOutcome::Cancelled => CANCELLED_MESSAGE,
        }
    }

    pub fn path(&self) -> Option<&str> {
        match self {
            ExportOutcome::Saved { path } => Some(path),
            ExportOutcome::Cancelled => None,
        }
    }
}

/// Flat result shape consumed by the frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportResult {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl From<ExportOutcome> for ExportResult {
    fn from(outcome: ExportOutcome) -> Self {
        Self {
            success: outcome.is_success(),
            message: outcome.message().to_string(),
            path: outcome.path().map(str::to_string),
        }
    }
}

/// Result of sending a document to a printer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintResult {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub job_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_result() {
        let result = ExportResult::from(ExportOutcome::Cancelled);
        assert_eq!(
            result,
            ExportResult {
                success: false,
                message: "Operation cancelled by user".to_string(),
                path: None,
            }
        );
    }

    #[test]
    fn test_saved_result() {
        let result = ExportResult::from(ExportOutcome::Saved {
            path: "/home/user/doc.pdf".to_string(),
        });
        assert!(result.success);
        assert_eq!(result.message, "PDF saved successfully");
        assert_eq!(result.path.as_deref(), Some("/home/user/doc.pdf"));
    }

    #[test]
    fn test_outcome_serializes_flat() {
        let json = serde_json::to_value(ExportOutcome::Cancelled).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "message": "Operation cancelled by user" })
        );

        let json = serde_json::to_value(ExportOutcome::Saved { path: "/tmp/a.pdf".to_string() }).unwrap();
        assert_eq!(json["path"], "/tmp/a.pdf");
        assert_eq!(json["success"], true);
    }

    #[test]
    fn test_print_result_without_job_id() {
        let result: PrintResult =
            serde_json::from_str(r#"{"success":true,"message":"Document sent to printer: Office"}"#).unwrap();
        assert!(result.job_id.is_none());
    }
}
