//! # Beltkit Export
//!
//! Renders a committed order into a two-page PDF:
//!
//! 1. **Order summary** (portrait): business header, customer details,
//!    the full belt specification table with the length formula spelled
//!    out, and a not-to-scale illustration of the belt.
//! 2. **Cutting templates** (landscape): a print-scale warning, a 1-inch
//!    verification ruler, and the two 1:1 templates — tip end with every
//!    adjustment hole at its true offset, and buckle end with fold line,
//!    prong slot, rivets, snaps, and stitch guides.
//!
//! Both pages draw the tip contours through the same path engine and belt
//! layout the on-screen schematic uses; only the units-per-inch scale is
//! local to this renderer. Within each template every solid region is
//! filled first and only the outer contour is stroked afterwards (open
//! contour variants plus explicit straight edges), so no seam line appears
//! inside a continuous leather piece.

mod document;
mod draw;
mod summary;
mod templates;

use thiserror::Error;

pub use document::{export_file_name, render_order_pdf, write_order_pdf, PAGE1_SIZE, PAGE2_SIZE};

/// Export error type
#[derive(Error, Debug)]
pub enum ExportError {
    /// A design record failed to resolve against the catalogs.
    #[error(transparent)]
    Render(#[from] beltkit_core::RenderError),

    /// The drawing backend reported a failure.
    #[error("PDF drawing failed: {0}")]
    Cairo(#[from] cairo::Error),

    /// Writing the finished document failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type using ExportError
pub type Result<T> = std::result::Result<T, ExportError>;
