//! Viewport budget used to fit a page preview on screen

use serde::{Deserialize, Serialize};

/// CSS pixels per millimeter at 96 DPI (rounded the way the editor does)
pub const PX_PER_MM: f64 = 3.78;

/// Assumed space available to the page preview
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportBudget {
    /// Available width in pixels
    #[serde(default = "default_available_width")]
    pub available_width: f64,
    /// Available height in pixels
    #[serde(default = "default_available_height")]
    pub available_height: f64,
    /// Padding subtracted from each axis in pixels
    #[serde(default = "default_padding")]
    pub padding: f64,
    /// Millimeter to pixel conversion factor
    #[serde(default = "default_px_per_mm")]
    pub px_per_mm: f64,
}

fn default_available_width() -> f64 {
    900.0
}

fn default_available_height() -> f64 {
    600.0
}

fn default_padding() -> f64 {
    80.0
}

fn default_px_per_mm() -> f64 {
    PX_PER_MM
}

impl Default for ViewportBudget {
    fn default() -> Self {
        Self {
            available_width: default_available_width(),
            available_height: default_available_height(),
            padding: default_padding(),
            px_per_mm: default_px_per_mm(),
        }
    }
}

impl ViewportBudget {
    pub fn new(available_width: f64, available_height: f64) -> Self {
        Self {
            available_width,
            available_height,
            ..Default::default()
        }
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_px_per_mm(mut self, px_per_mm: f64) -> Self {
        self.px_per_mm = px_per_mm;
        self
    }

    /// Usable width after padding, never below one pixel
    pub fn usable_width(&self) -> f64 {
        usable(self.available_width - self.padding)
    }

    /// Usable height after padding, never below one pixel
    pub fn usable_height(&self) -> f64 {
        usable(self.available_height - self.padding)
    }

    /// Conversion factor in use; unusable values fall back to [`PX_PER_MM`]
    pub fn effective_px_per_mm(&self) -> f64 {
        if self.px_per_mm.is_finite() && self.px_per_mm > 0.0 {
            self.px_per_mm
        } else {
            PX_PER_MM
        }
    }

    pub fn mm_to_px(&self, mm: f64) -> f64 {
        mm * self.effective_px_per_mm()
    }
}

fn usable(px: f64) -> f64 {
    if px.is_finite() {
        px.max(1.0)
    } else {
        1.0
    }
}
