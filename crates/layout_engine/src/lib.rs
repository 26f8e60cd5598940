//! Layout Engine - Print layout derivation and the document store
//!
//! This crate turns print settings into the values the page surface needs:
//! physical page size, margin, and a fit-to-viewport preview zoom. It also
//! keeps the `@page` geometry override in sync with the settings.

mod document;
mod page_style;
mod print_override;
mod viewport;

pub use document::*;
pub use page_style::*;
pub use print_override::*;
pub use viewport::*;
