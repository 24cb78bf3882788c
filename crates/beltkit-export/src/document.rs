//! Document assembly
//!
//! Builds the two-page PDF on a cairo PDF surface. The surface is created
//! at the portrait summary size, resized to landscape for the template
//! page after the first `show_page`, and streamed into memory so callers
//! decide where the bytes go. The drawing context is scaled by 72 once so
//! every page module works directly in inches.

use std::cell::RefCell;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use cairo::{Context, PdfSurface};
use chrono::NaiveDate;
use tracing::info;

use beltkit_core::{BeltOrder, BeltSpecs};

use crate::{summary, templates, Result};

/// Page 1 size in inches (portrait).
pub const PAGE1_SIZE: (f64, f64) = (11.0, 17.0);

/// Page 2 size in inches (landscape).
pub const PAGE2_SIZE: (f64, f64) = (17.0, 11.0);

const POINTS_PER_INCH: f64 = 72.0;

/// Clone-able in-memory sink for the PDF stream. The surface owns one
/// clone; we keep another to collect the bytes after `finish`.
#[derive(Clone, Default)]
struct PdfBuffer(Rc<RefCell<Vec<u8>>>);

impl Write for PdfBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl PdfBuffer {
    fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

/// Render the two-page order document and return the PDF bytes.
pub fn render_order_pdf(order: &BeltOrder, specs: &BeltSpecs) -> Result<Vec<u8>> {
    let buffer = PdfBuffer::default();
    let surface = PdfSurface::for_stream(
        PAGE1_SIZE.0 * POINTS_PER_INCH,
        PAGE1_SIZE.1 * POINTS_PER_INCH,
        buffer.clone(),
    )?;
    let cx = Context::new(&surface)?;
    // Work in inches from here on.
    cx.scale(POINTS_PER_INCH, POINTS_PER_INCH);

    summary::draw(&cx, order, specs)?;
    cx.show_page()?;

    surface.set_size(
        PAGE2_SIZE.0 * POINTS_PER_INCH,
        PAGE2_SIZE.1 * POINTS_PER_INCH,
    )?;
    templates::draw(&cx, order, specs)?;

    drop(cx);
    surface.finish();
    surface.status()?;
    Ok(buffer.take())
}

/// Deterministic download name: the sanitized customer name plus the
/// export date.
pub fn export_file_name(customer_name: &str, date: NaiveDate) -> String {
    let safe: String = customer_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    let safe = if safe.is_empty() {
        "Customer".to_string()
    } else {
        safe
    };
    format!("BeltOrder_{}_{}.pdf", safe, date.format("%Y-%m-%d"))
}

/// Render the document and write it under `dir` with the deterministic
/// export name. Returns the written path.
pub fn write_order_pdf(
    order: &BeltOrder,
    specs: &BeltSpecs,
    dir: &Path,
    date: NaiveDate,
) -> Result<PathBuf> {
    let bytes = render_order_pdf(order, specs)?;
    let path = dir.join(export_file_name(&order.customer.name, date));
    std::fs::write(&path, &bytes)?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote order document");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name_sanitizes() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        assert_eq!(
            export_file_name("Sam O'Leary-Smith", date),
            "BeltOrder_SamOLearySmith_2026-08-05.pdf"
        );
        assert_eq!(export_file_name("  ", date), "BeltOrder_Customer_2026-08-05.pdf");
    }
}
