//! PDF Exporter - Drives a save or print attempt end to end
//!
//! A save attempt prompts for a destination, snapshots the pages into an
//! [`ExportRequest`], hands it to the backend, and reports the outcome.
//!
//! Cancelling the prompt is a normal outcome and is returned as
//! [`ExportOutcome::Cancelled`]. A backend failure is returned as an error
//! and also kept as the last error for display. No attempt is retried.
//!
//! Exports are not serialized unless [`ExportConfig::reject_concurrent`] is
//! set: two overlapping attempts share the in-flight flag and last error.

use crate::{
    ExportConfig, ExportError, ExportOutcome, ExportRequest, PdfBackend, PrintResult, Result,
    SaveDialog,
};
use doc_model::{Page, PaperTable, PrintSettings};
use layout_engine::{PrintDocument, StyleHost};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Snapshot of the exporter state for the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportStatus {
    /// Whether an export is in flight
    pub is_loading: bool,
    /// Error message from the last failed attempt (if any)
    pub last_error: Option<String>,
}

/// Clears the in-flight flag when the attempt ends, however it ends
struct LoadingGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// Export orchestrator over a save dialog and a rendering backend
pub struct PdfExporter<D, B> {
    dialog: D,
    backend: B,
    config: ExportConfig,
    is_loading: AtomicBool,
    last_error: RwLock<Option<String>>,
}

impl<D: SaveDialog, B: PdfBackend> PdfExporter<D, B> {
    pub fn new(dialog: D, backend: B) -> Self {
        Self::with_config(dialog, backend, ExportConfig::default())
    }

    pub fn with_config(dialog: D, backend: B, config: ExportConfig) -> Self {
        Self {
            dialog,
            backend,
            config,
            is_loading: AtomicBool::new(false),
            last_error: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn dialog(&self) -> &D {
        &self.dialog
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Check if an export is in flight
    pub fn is_loading(&self) -> bool {
        self.is_loading.load(Ordering::SeqCst)
    }

    /// Error message from the last failed attempt
    pub async fn last_error(&self) -> Option<String> {
        self.last_error.read().await.clone()
    }

    pub async fn status(&self) -> ExportStatus {
        ExportStatus {
            is_loading: self.is_loading(),
            last_error: self.last_error().await,
        }
    }

    /// Save pages as a single PDF at a user-chosen destination
    pub async fn save_as_pdf(
        &self,
        pages: &[Page],
        settings: &PrintSettings,
        paper: &PaperTable,
    ) -> Result<ExportOutcome> {
        let _loading = self.begin()?;
        *self.last_error.write().await = None;

        let request = ExportRequest::new(pages, settings);
        let sheet = paper.oriented(settings.format, settings.orientation);
        tracing::info!(
            "Exporting {} page(s) as {} {} ({}x{}mm)",
            request.pages.len(),
            settings.format,
            settings.orientation,
            sheet.width_mm,
            sheet.height_mm
        );

        let destination = match self.dialog.save(self.config.dialog_options()).await {
            Some(path) if !path.is_empty() => path,
            _ => {
                tracing::info!("PDF export cancelled by user");
                return Ok(ExportOutcome::Cancelled);
            }
        };

        match self.backend.save_pages_to_path(request, destination).await {
            Ok(path) => {
                tracing::info!("PDF saved to {}", path);
                Ok(ExportOutcome::Saved { path })
            }
            Err(message) => Err(self.fail(message).await),
        }
    }

    /// Save every page of a document
    pub async fn save_document<H: StyleHost>(&self, doc: &PrintDocument<H>) -> Result<ExportOutcome> {
        self.save_as_pdf(doc.pages(), doc.settings(), doc.paper()).await
    }

    /// Send pages to a printer without prompting
    pub async fn print_pages(
        &self,
        pages: &[Page],
        settings: &PrintSettings,
        printer_id: Option<String>,
    ) -> Result<PrintResult> {
        let _loading = self.begin()?;
        *self.last_error.write().await = None;

        let request = ExportRequest::new(pages, settings).with_printer(printer_id);
        tracing::info!(
            "Printing {} page(s) on {}",
            request.pages.len(),
            request.printer_id.as_deref().unwrap_or("default printer")
        );

        match self.backend.print_pages(request).await {
            Ok(result) => {
                if !result.success {
                    tracing::warn!("Printer rejected job: {}", result.message);
                }
                Ok(result)
            }
            Err(message) => Err(self.fail(message).await),
        }
    }

    /// Mark an attempt as started
    fn begin(&self) -> Result<LoadingGuard<'_>> {
        if self.config.reject_concurrent {
            if self
                .is_loading
                .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
                .is_err()
            {
                tracing::warn!("Rejecting export: another export is in progress");
                return Err(ExportError::Busy);
            }
        } else if self.is_loading.swap(true, Ordering::SeqCst) {
            tracing::warn!("Export started while another export is in progress");
        }

        Ok(LoadingGuard {
            flag: &self.is_loading,
        })
    }

    async fn fail(&self, message: String) -> ExportError {
        tracing::warn!("Export failed: {}", message);
        *self.last_error.write().await = Some(message.clone());
        ExportError::Backend(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::{Mutex, Notify};

    struct FixedDialog(Option<String>);

    #[async_trait]
    impl SaveDialog for FixedDialog {
        async fn save(&self, _options: crate::SaveDialogOptions) -> Option<String> {
            self.0.clone()
        }
    }

    /// Dialog that waits for a signal before answering
    struct GatedDialog {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl SaveDialog for GatedDialog {
        async fn save(&self, _options: crate::SaveDialogOptions) -> Option<String> {
            self.gate.notified().await;
            Some("/tmp/gated.pdf".to_string())
        }
    }

    #[derive(Default)]
    struct EchoBackend {
        requests: Mutex<Vec<ExportRequest>>,
    }

    #[async_trait]
    impl PdfBackend for EchoBackend {
        async fn save_pages_to_path(
            &self,
            request: ExportRequest,
            destination: String,
        ) -> std::result::Result<String, String> {
            self.requests.lock().await.push(request);
            Ok(destination)
        }

        async fn print_pages(&self, request: ExportRequest) -> std::result::Result<PrintResult, String> {
            let printer = request.printer_id.clone().unwrap_or_default();
            self.requests.lock().await.push(request);
            Ok(PrintResult {
                success: true,
                message: format!("Document sent to printer: {}", printer),
                job_id: Some("7".to_string()),
            })
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl PdfBackend for FailingBackend {
        async fn save_pages_to_path(
            &self,
            _request: ExportRequest,
            _destination: String,
        ) -> std::result::Result<String, String> {
            Err("Error generating PDF".to_string())
        }

        async fn print_pages(&self, _request: ExportRequest) -> std::result::Result<PrintResult, String> {
            Err("No default printer found".to_string())
        }
    }

    fn pages() -> Vec<Page> {
        vec![Page::with_content("<p>one</p>")]
    }

    #[tokio::test]
    async fn test_initial_status() {
        let exporter = PdfExporter::new(FixedDialog(None), EchoBackend::default());
        assert_eq!(
            exporter.status().await,
            ExportStatus {
                is_loading: false,
                last_error: None
            }
        );
    }

    #[tokio::test]
    async fn test_empty_path_counts_as_cancel() {
        let exporter = PdfExporter::new(FixedDialog(Some(String::new())), EchoBackend::default());

        let outcome = exporter
            .save_as_pdf(&pages(), &PrintSettings::default(), PaperTable::standard())
            .await
            .unwrap();

        assert_eq!(outcome, ExportOutcome::Cancelled);
        assert!(exporter.backend().requests.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_only_empty_path_counts_as_cancel() {
        let exporter = PdfExporter::new(FixedDialog(Some(" ".to_string())), EchoBackend::default());

        let outcome = exporter
            .save_as_pdf(&pages(), &PrintSettings::default(), PaperTable::standard())
            .await
            .unwrap();

        assert_eq!(outcome.path(), Some(" "));
        assert_eq!(exporter.backend().requests.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_success_clears_previous_error() {
        let exporter = PdfExporter::new(FixedDialog(Some("/tmp/a.pdf".to_string())), EchoBackend::default());
        *exporter.last_error.write().await = Some("old".to_string());

        let outcome = exporter
            .save_as_pdf(&pages(), &PrintSettings::default(), PaperTable::standard())
            .await
            .unwrap();

        assert_eq!(outcome.path(), Some("/tmp/a.pdf"));
        assert_eq!(exporter.last_error().await, None);
    }

    #[tokio::test]
    async fn test_print_passes_printer_id() {
        let exporter = PdfExporter::new(FixedDialog(None), EchoBackend::default());

        let result = exporter
            .print_pages(&pages(), &PrintSettings::default(), Some("Office".to_string()))
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(result.message, "Document sent to printer: Office");
        let requests = exporter.backend().requests.lock().await;
        assert_eq!(requests[0].printer_id.as_deref(), Some("Office"));
        assert_eq!(requests[0].config.scale, 1.0);
    }

    #[tokio::test]
    async fn test_print_failure_sets_last_error() {
        let exporter = PdfExporter::new(FixedDialog(None), FailingBackend);

        let err = exporter
            .print_pages(&pages(), &PrintSettings::default(), None)
            .await
            .unwrap_err();

        assert_eq!(err, ExportError::Backend("No default printer found".to_string()));
        assert_eq!(exporter.last_error().await.as_deref(), Some("No default printer found"));
        assert!(!exporter.is_loading());
    }

    #[tokio::test]
    async fn test_in_flight_while_prompting() {
        let gate = Arc::new(Notify::new());
        let exporter = PdfExporter::new(
            GatedDialog { gate: Arc::clone(&gate) },
            EchoBackend::default(),
        );
        let pages = pages();
        let settings = PrintSettings::default();

        let (outcome, seen_loading) = tokio::join!(
            exporter.save_as_pdf(&pages, &settings, PaperTable::standard()),
            async {
                let loading = exporter.is_loading();
                gate.notify_one();
                loading
            }
        );

        assert!(seen_loading);
        assert!(outcome.unwrap().is_success());
        assert!(!exporter.is_loading());
    }

    #[tokio::test]
    async fn test_reject_concurrent() {
        let gate = Arc::new(Notify::new());
        let exporter = PdfExporter::with_config(
            GatedDialog { gate: Arc::clone(&gate) },
            EchoBackend::default(),
            ExportConfig::default().rejecting_concurrent(),
        );
        let pages = pages();
        let settings = PrintSettings::default();

        let (first, second) = tokio::join!(
            exporter.save_as_pdf(&pages, &settings, PaperTable::standard()),
            async {
                let second = exporter
                    .save_as_pdf(&pages, &settings, PaperTable::standard())
                    .await;
                gate.notify_one();
                second
            }
        );

        assert!(first.unwrap().is_success());
        assert_eq!(second.unwrap_err(), ExportError::Busy);
        assert!(!exporter.is_loading());
        assert_eq!(exporter.last_error().await, None);
    }
}
