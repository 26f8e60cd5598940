//! PDF Export - Orchestrates saving and printing a paginated document
//!
//! This crate owns the client side of export: it prompts for a destination,
//! builds the render request from the document's pages and print settings,
//! calls the external rendering backend, and reports a uniform result while
//! tracking in-flight state and the last error.
//!
//! # Modules
//!
//! - `dialog`: save dialog seam and its options
//! - `backend`: rendering backend seam and the command-channel adapter
//! - `request`: request sent to the backend
//! - `result`: outcomes reported to the UI
//! - `config`: export configuration
//! - `exporter`: the orchestrator

mod backend;
mod config;
mod dialog;
mod error;
mod exporter;
mod request;
mod result;

pub use backend::*;
pub use config::*;
pub use dialog::*;
pub use error::*;
pub use exporter::*;
pub use request::*;
pub use result::*;
