//! Physical belt specifications
//!
//! The measurements every derived length is computed from. These are bound
//! once as a [`BeltSpecs`] value and passed explicitly into the geometry
//! functions, so the engine can be exercised against alternate specs in
//! tests instead of reaching for ambient globals.

use serde::{Deserialize, Serialize};

/// Smallest supported pant waist size in inches.
pub const WAIST_MIN: u32 = 26;

/// Largest supported pant waist size in inches.
pub const WAIST_MAX: u32 = 54;

/// Shop measurements for belt construction. All lengths in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeltSpecs {
    /// Length reserved at the buckle end beyond the waist measurement.
    pub buckle_allowance: f64,
    /// Length reserved at the tip for the adjustment holes.
    pub hole_allowance: f64,
    /// Number of adjustment holes punched at the tip end.
    pub hole_count: u32,
    /// Spacing between adjacent holes.
    pub hole_spacing: f64,
    /// Distance from the tip to the first hole.
    pub first_hole_from_tip: f64,
    /// Extra strap length when the buckle end is an integrated fold-back.
    pub integrated_fold_back: f64,
    /// Punched hole diameter.
    pub hole_diameter: f64,
    /// Buckle prong slot width (along the strap).
    pub buckle_slot_width: f64,
    /// Buckle prong slot length (across the strap).
    pub buckle_slot_length: f64,
}

impl Default for BeltSpecs {
    fn default() -> Self {
        Self {
            buckle_allowance: 6.0,
            hole_allowance: 5.0,
            hole_count: 8,
            hole_spacing: 1.0,
            first_hole_from_tip: 5.0,
            integrated_fold_back: 2.5,
            hole_diameter: 0.15625,
            buckle_slot_width: 0.75,
            buckle_slot_length: 0.1875,
        }
    }
}
