//! # Beltkit Geometry
//!
//! The shared geometry engine behind both belt renderers.
//!
//! ## Core Components
//!
//! - **Path engine** ([`path`]): parses the authored tip-contour command
//!   sequences into relative segments under a uniform scale and origin,
//!   and can mirror a parsed contour around a right-edge anchor.
//! - **Profiles** ([`profiles`]): the four authored tip contours in their
//!   normalized frame, in closed (fill/clip) and open (seamless stroke)
//!   variants, plus the buckle-template aspect ratios.
//! - **Layout** ([`layout`]): pure functions deriving every cutting
//!   measurement (strap length, hole positions, template lengths, fold
//!   line, rivet/snap/stitch placement) from a design and a
//!   [`beltkit_core::BeltSpecs`].
//!
//! Everything here is pure and unit-free on the output side: lengths are
//! inches, and each renderer applies its own target-units-per-inch scale.

pub mod layout;
pub mod path;
pub mod profiles;

use serde::{Deserialize, Serialize};

pub use path::{parse, ParsedPath, PathSegment};

/// A point in the renderer-agnostic coordinate space (inches unless a
/// caller has already applied its own scale).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
