//! Page Styles - Physical page size, margin, and preview zoom
//!
//! Derived from print settings on demand. Dimensions are exposed both as
//! numbers and as millimeter-suffixed CSS lengths for the page surface.
//!
//! The auto-fit scale only ever shrinks the preview to fit the viewport
//! budget; it is a display concern and is never part of an export request.

use crate::ViewportBudget;
use doc_model::{clamp_margin, PaperTable, PrintSettings};
use serde::Serialize;

/// Derived layout values for rendering a page preview
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStyles {
    /// Page width as a CSS length, e.g. `210mm`
    pub width: String,
    /// Page height as a CSS length
    pub height: String,
    /// Uniform page padding (the print margin) as a CSS length
    pub padding: String,
    pub width_mm: f64,
    pub height_mm: f64,
    pub margin_mm: f64,
    /// Preview zoom in `(0, 1]`
    pub auto_scale: f64,
}

impl PageStyles {
    /// Compute styles for the given settings
    pub fn derive(settings: &PrintSettings, paper: &PaperTable, budget: &ViewportBudget) -> Self {
        let dims = paper.oriented(settings.format, settings.orientation);
        let auto_scale = fit_scale(dims.width_mm, dims.height_mm, budget);
        let margins = clamp_margin(settings.margins);

        Self {
            width: mm(dims.width_mm),
            height: mm(dims.height_mm),
            padding: mm(margins),
            width_mm: dims.width_mm,
            height_mm: dims.height_mm,
            margin_mm: margins,
            auto_scale,
        }
    }

    /// CSS custom properties consumed by the page stylesheet
    pub fn css_variables(&self) -> Vec<(&'static str, String)> {
        vec![
            ("--page-width", self.width.clone()),
            ("--page-height", self.height.clone()),
            ("--auto-scale", self.auto_scale.to_string()),
        ]
    }

    /// Inline `style` attribute value for a page element
    pub fn inline_style(&self) -> String {
        let mut style = format!(
            "width: {}; height: {}; padding: {};",
            self.width, self.height, self.padding
        );
        for (name, value) in self.css_variables() {
            style.push_str(&format!(" {}: {};", name, value));
        }
        style
    }
}

/// Shrink factor that fits a page of the given size into the budget
pub fn fit_scale(width_mm: f64, height_mm: f64, budget: &ViewportBudget) -> f64 {
    let width_px = budget.mm_to_px(width_mm);
    let height_px = budget.mm_to_px(height_mm);

    let scale_x = budget.usable_width() / width_px;
    let scale_y = budget.usable_height() / height_px;

    // Never scale up, only down
    scale_x.min(scale_y).min(1.0)
}

fn mm(value: f64) -> String {
    format!("{}mm", value)
}
