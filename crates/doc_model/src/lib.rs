//! Document Model - Pages, print settings, and paper geometry
//!
//! This crate provides the plain data of a printable document: an ordered,
//! never-empty list of HTML pages, the user's print settings, and the static
//! table of physical paper sizes.

mod error;
mod page;
mod page_id;
pub mod paper;
mod settings;

pub use error::*;
pub use page::*;
pub use page_id::*;
pub use paper::{Orientation, PaperDimensions, PaperFormat, PaperTable, PAPER_DIMENSIONS};
pub use settings::*;
