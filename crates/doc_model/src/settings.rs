//! Print settings chosen by the user

use crate::{Orientation, PaperFormat};
use serde::{Deserialize, Deserializer, Serialize};

/// Paper format, orientation, and margin for the whole document
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrintSettings {
    pub format: PaperFormat,
    pub orientation: Orientation,
    /// Uniform page margin in millimeters
    #[serde(deserialize_with = "deserialize_margin")]
    pub margins: f64,
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            format: PaperFormat::A4,
            orientation: Orientation::Portrait,
            margins: 20.0,
        }
    }
}

impl PrintSettings {
    pub fn new(format: PaperFormat, orientation: Orientation, margins: f64) -> Self {
        Self {
            format,
            orientation,
            margins: clamp_margin(margins),
        }
    }

    pub fn with_format(mut self, format: PaperFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_margins(mut self, margins: f64) -> Self {
        self.margins = clamp_margin(margins);
        self
    }

    /// Copy with the margin forced into the valid range
    pub fn normalized(self) -> Self {
        Self {
            margins: clamp_margin(self.margins),
            ..self
        }
    }
}

/// Margins are non-negative; NaN and negative values collapse to zero.
pub fn clamp_margin(margins: f64) -> f64 {
    if margins.is_finite() && margins > 0.0 {
        margins
    } else {
        0.0
    }
}

fn deserialize_margin<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    f64::deserialize(deserializer).map(clamp_margin)
}
