//! # Beltkit
//!
//! A configurator for custom leather belts: design parameters in, a live
//! schematic and a print-ready order document out.
//!
//! ## Architecture
//!
//! Beltkit is organized as a workspace with multiple crates:
//!
//! 1. **beltkit-core** - Design model, physical specs, catalogs, pricing
//! 2. **beltkit-geometry** - Tip-contour path engine and cutting layout
//! 3. **beltkit-visualizer** - Live schematic rendering (SVG)
//! 4. **beltkit-export** - Two-page order PDF with 1:1 cutting templates
//! 5. **beltkit-orders** - Order history persistence and order identity
//! 6. **beltkit** - Thin binary that drives the crates
//!
//! The geometry engine is the single source of truth: both renderers call
//! the same contour parser and layout functions, and only the
//! units-per-inch scale differs between the screen and the printed page.

pub use beltkit_export as export;
pub use beltkit_geometry as geometry;
pub use beltkit_orders as orders;
pub use beltkit_visualizer as visualizer;

pub use beltkit_core::{
    BeltDesign, BeltOrder, BeltSpecs, BeltWidth, BuckleAttachment, BuckleMaterial, BuckleShape,
    CustomerDetails, EndShape,
};

/// Initialize tracing for the binary.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .try_init()?;
    Ok(())
}
