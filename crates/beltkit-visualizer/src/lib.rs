//! # Beltkit Visualizer
//!
//! Renders a belt design as a self-contained SVG schematic for on-screen
//! display: the strap silhouette clipped to the tip contour, the seamless
//! outline, adjustment holes, the buckle-zone guide, a buckle glyph, and
//! an inch ruler. The whole scene is recomputed from the design on every
//! call; there is no retained render state to fall out of sync.

mod schematic;

pub use schematic::{render_schematic, SchematicLayout};
