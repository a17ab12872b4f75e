//! Export pipeline: raster capture, pagination, PDF assembly
//!
//! The exporter consumes the realized visual output, not the abstract
//! tree: the document is rasterized at a fixed width, sliced into
//! page-height bands, and assembled into one PDF page per band. Export is
//! best-effort and fail-loud; failures never touch the profile and the
//! only retry path is invoking the export again.

pub mod config;
pub mod paginate;
pub mod pdf;
pub mod raster;

use thiserror::Error;

pub use config::{ExportConfig, ExportConfigError, PageGeometry, RasterGeometry};
pub use paginate::{page_bands, Band};
pub use pdf::{export_pdf, pdf_bytes, pdf_filename};
pub use raster::{rasterize, Raster};

/// Errors surfaced by the export boundary.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
    #[error("pdf assembly failed: {0}")]
    Assembly(String),
    #[error("rendered document has no content to paginate")]
    Empty,
}
