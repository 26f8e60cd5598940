//! Rendering backend seam
//!
//! The backend turns an [`ExportRequest`] into a PDF file or a print job.
//! It lives outside this crate; [`CommandBackend`] adapts any command-style
//! IPC channel (such as a webview `invoke`) to the [`PdfBackend`] trait.

use crate::{ExportRequest, PrintResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

/// Command that renders pages and writes the merged PDF to a path
pub const SAVE_PDF_PAGES_COMMAND: &str = "save_pdf_pages_to_path";

/// Command that renders pages and sends them to a printer
pub const PRINT_PAGES_COMMAND: &str = "print_document_pages";

/// External PDF renderer
#[async_trait]
pub trait PdfBackend: Send + Sync {
    /// Render the request into a PDF at `destination`.
    ///
    /// Returns the final path, which the backend may have normalized.
    async fn save_pages_to_path(
        &self,
        request: ExportRequest,
        destination: String,
    ) -> Result<String, String>;

    /// Render the request and send it to `request.printer_id` (or the
    /// system default printer)
    async fn print_pages(&self, request: ExportRequest) -> Result<PrintResult, String>;
}

/// Named command channel with JSON arguments and results
#[async_trait]
pub trait CommandInvoker: Send + Sync {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, String>;
}

/// [`PdfBackend`] issuing commands over a [`CommandInvoker`]
#[derive(Debug, Clone)]
pub struct CommandBackend<I> {
    invoker: I,
}

impl<I: CommandInvoker> CommandBackend<I> {
    pub fn new(invoker: I) -> Self {
        Self { invoker }
    }

    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    async fn call<T: DeserializeOwned>(&self, command: &str, args: Value) -> Result<T, String> {
        tracing::debug!("Invoking backend command '{}'", command);
        let value = self.invoker.invoke(command, args).await?;
        serde_json::from_value(value)
            .map_err(|e| format!("Invalid response from '{}': {}", command, e))
    }
}

fn request_value(request: &ExportRequest) -> Result<Value, String> {
    serde_json::to_value(request).map_err(|e| format!("Failed to encode request: {}", e))
}

#[async_trait]
impl<I: CommandInvoker> PdfBackend for CommandBackend<I> {
    async fn save_pages_to_path(
        &self,
        request: ExportRequest,
        destination: String,
    ) -> Result<String, String> {
        let args = json!({
            "request": request_value(&request)?,
            "destinationPath": destination,
        });
        self.call(SAVE_PDF_PAGES_COMMAND, args).await
    }

    async fn print_pages(&self, request: ExportRequest) -> Result<PrintResult, String> {
        let args = json!({ "request": request_value(&request)? });
        self.call(PRINT_PAGES_COMMAND, args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{Page, PrintSettings};
    use tokio::sync::Mutex;

    struct FakeInvoker {
        calls: Mutex<Vec<(String, Value)>>,
        response: Result<Value, String>,
    }

    impl FakeInvoker {
        fn responding(response: Result<Value, String>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                response,
            }
        }
    }

    #[async_trait]
    impl CommandInvoker for FakeInvoker {
        async fn invoke(&self, command: &str, args: Value) -> Result<Value, String> {
            self.calls.lock().await.push((command.to_string(), args));
            self.response.clone()
        }
    }

    fn request() -> ExportRequest {
        ExportRequest::new(
            &[Page::with_content("<p>a</p>"), Page::with_content("<p>b</p>")],
            &PrintSettings::default(),
        )
    }

    #[tokio::test]
    async fn test_save_command_arguments() {
        let backend = CommandBackend::new(FakeInvoker::responding(Ok(json!("/out/doc.pdf"))));

        let path = backend
            .save_pages_to_path(request(), "/out/doc.pdf".to_string())
            .await
            .unwrap();
        assert_eq!(path, "/out/doc.pdf");

        let calls = backend.invoker().calls.lock().await;
        assert_eq!(calls.len(), 1);
        let (command, args) = &calls[0];
        assert_eq!(command, SAVE_PDF_PAGES_COMMAND);
        assert_eq!(args["destinationPath"], "/out/doc.pdf");
        assert_eq!(args["request"]["pages"], json!(["<p>a</p>", "<p>b</p>"]));
        assert_eq!(args["request"]["config"]["scale"], 1.0);
        assert!(args["request"].get("printer_id").is_none());
    }

    #[tokio::test]
    async fn test_backend_error_passes_through() {
        let backend = CommandBackend::new(FakeInvoker::responding(Err("disk full".to_string())));

        let err = backend
            .save_pages_to_path(request(), "/out/doc.pdf".to_string())
            .await
            .unwrap_err();
        assert_eq!(err, "disk full");
    }

    #[tokio::test]
    async fn test_unexpected_response_is_an_error() {
        let backend = CommandBackend::new(FakeInvoker::responding(Ok(json!({ "path": 3 }))));

        let err = backend
            .save_pages_to_path(request(), "/out/doc.pdf".to_string())
            .await
            .unwrap_err();
        assert!(err.starts_with("Invalid response from 'save_pdf_pages_to_path'"));
    }

    #[tokio::test]
    async fn test_print_command() {
        let backend = CommandBackend::new(FakeInvoker::responding(Ok(json!({
            "success": true,
            "message": "Document sent to printer: Office",
            "job_id": "Office-42"
        }))));

        let result = backend
            .print_pages(request().with_printer(Some("Office".to_string())))
            .await
            .unwrap();
        assert!(result.success);
        assert_eq!(result.job_id.as_deref(), Some("Office-42"));

        let calls = backend.invoker().calls.lock().await;
        assert_eq!(calls[0].0, PRINT_PAGES_COMMAND);
        assert_eq!(calls[0].1["request"]["printer_id"], "Office");
    }
}
