//! Backend request built for each export attempt

use doc_model::{clamp_margin, Orientation, Page, PaperFormat, PrintSettings};
use serde::{Deserialize, Serialize};

/// Scale sent to the backend. The preview zoom never leaves the client.
pub const EXPORT_SCALE: f64 = 1.0;

/// Page geometry sent to the rendering backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintConfig {
    pub format: PaperFormat,
    pub orientation: Orientation,
    pub margins_mm: f64,
    pub scale: f64,
}

impl PrintConfig {
    /// Unscaled config for the given settings
    pub fn from_settings(settings: &PrintSettings) -> Self {
        Self {
            format: settings.format,
            orientation: settings.orientation,
            margins_mm: clamp_margin(settings.margins),
            scale: EXPORT_SCALE,
        }
    }
}

/// Multi-page render request; each page is rendered as its own sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub config: PrintConfig,
    /// HTML content of each page, in document order
    pub pages: Vec<String>,
    /// Target printer; `None` means the system default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printer_id: Option<String>,
}

impl ExportRequest {
    /// Snapshot page contents and settings into a new request
    pub fn new(pages: &[Page], settings: &PrintSettings) -> Self {
        Self {
            config: PrintConfig::from_settings(settings),
            pages: pages.iter().map(|page| page.content.clone()).collect(),
            printer_id: None,
        }
    }

    pub fn with_printer(mut self, printer_id: Option<String>) -> Self {
        self.printer_id = printer_id;
        self
    }
}
