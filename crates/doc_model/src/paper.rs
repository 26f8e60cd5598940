//! Paper Geometry - Formats, orientation, and physical sheet sizes
//!
//! All dimensions are physical millimeters in portrait orientation.
//! Orientation is applied on lookup, the table itself never changes.

use crate::{DocModelError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// Paper Format
// =============================================================================

/// Supported paper formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaperFormat {
    /// A4 (210mm x 297mm)
    #[default]
    A4,
    /// A3 (297mm x 420mm)
    A3,
    /// US Letter (8.5" x 11")
    Letter,
}

impl PaperFormat {
    /// Every supported format, in table order
    pub const ALL: [PaperFormat; 3] = [PaperFormat::A4, PaperFormat::A3, PaperFormat::Letter];

    /// Name used in CSS `@page` rules and on the wire
    pub fn name(&self) -> &'static str {
        match self {
            PaperFormat::A4 => "A4",
            PaperFormat::A3 => "A3",
            PaperFormat::Letter => "Letter",
        }
    }

    fn index(&self) -> usize {
        match self {
            PaperFormat::A4 => 0,
            PaperFormat::A3 => 1,
            PaperFormat::Letter => 2,
        }
    }
}

impl std::fmt::Display for PaperFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaperFormat {
    type Err = DocModelError;

    fn from_str(s: &str) -> Result<Self> {
        PaperFormat::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DocModelError::UnknownPaperFormat(s.to_string()))
    }
}

// =============================================================================
// Orientation
// =============================================================================

/// Page orientation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn name(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }

    pub fn is_landscape(&self) -> bool {
        matches!(self, Orientation::Landscape)
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orientation {
    type Err = DocModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            _ => Err(DocModelError::UnknownOrientation(s.to_string())),
        }
    }
}

// =============================================================================
// Paper Dimensions
// =============================================================================

/// Physical sheet size in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperDimensions {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl PaperDimensions {
    pub const fn new(width_mm: f64, height_mm: f64) -> Self {
        Self { width_mm, height_mm }
    }

    /// Apply orientation: landscape swaps width and height
    pub fn oriented(self, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Portrait => self,
            Orientation::Landscape => Self {
                width_mm: self.height_mm,
                height_mm: self.width_mm,
            },
        }
    }
}

// =============================================================================
// Paper Table
// =============================================================================

/// Static lookup from paper format to portrait dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaperTable {
    entries: [(PaperFormat, PaperDimensions); 3],
}

/// The standard paper table
pub const PAPER_DIMENSIONS: PaperTable = PaperTable {
    entries: [
        (PaperFormat::A4, PaperDimensions::new(210.0, 297.0)),
        (PaperFormat::A3, PaperDimensions::new(297.0, 420.0)),
        (PaperFormat::Letter, PaperDimensions::new(215.9, 279.4)),
    ],
};

impl PaperTable {
    pub fn standard() -> &'static PaperTable {
        &PAPER_DIMENSIONS
    }

    /// Portrait dimensions for a format
    pub fn dimensions(&self, format: PaperFormat) -> PaperDimensions {
        self.entries[format.index()].1
    }

    /// Dimensions for a format with orientation applied
    pub fn oriented(&self, format: PaperFormat, orientation: Orientation) -> PaperDimensions {
        self.dimensions(format).oriented(orientation)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PaperFormat, PaperDimensions)> + '_ {
        self.entries.iter().copied()
    }
}

impl Default for PaperTable {
    fn default() -> Self {
        PAPER_DIMENSIONS
    }
}
