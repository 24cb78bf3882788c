//! Order pricing
//!
//! A pure lookup/sum over the price tables. Pricing can be disabled at the
//! order level (`BeltOrder::price` is optional); the breakdown itself is
//! always computable.

use serde::{Deserialize, Serialize};

use crate::design::{BeltDesign, BeltWidth, BuckleMaterial};

/// Base price for a belt before modifiers, in dollars.
pub const BASE_PRICE: f64 = 65.0;

/// Itemized price for one design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base: f64,
    pub width_upcharge: f64,
    pub buckle_upcharge: f64,
    pub total: f64,
}

fn width_upcharge(width: BeltWidth) -> f64 {
    match width {
        BeltWidth::W1 => -5.0,
        BeltWidth::W1_25 => 0.0,
        BeltWidth::W1_5 => 5.0,
        BeltWidth::W1_75 => 10.0,
    }
}

fn buckle_upcharge(material: BuckleMaterial) -> f64 {
    match material {
        BuckleMaterial::Silver => 10.0,
        BuckleMaterial::AntiqueBrass | BuckleMaterial::GoldBrass | BuckleMaterial::Black => 0.0,
    }
}

/// Price a design from the lookup tables.
pub fn price_design(design: &BeltDesign) -> PriceBreakdown {
    let base = BASE_PRICE;
    let width = width_upcharge(design.width);
    let buckle = buckle_upcharge(design.buckle_material);
    PriceBreakdown {
        base,
        width_upcharge: width,
        buckle_upcharge: buckle,
        total: base + width + buckle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_design_price() {
        let price = price_design(&BeltDesign::default());
        assert_eq!(price.base, 65.0);
        assert_eq!(price.width_upcharge, 5.0);
        assert_eq!(price.buckle_upcharge, 0.0);
        assert_eq!(price.total, 70.0);
    }

    #[test]
    fn test_silver_buckle_upcharge() {
        let design = BeltDesign {
            width: BeltWidth::W1,
            buckle_material: BuckleMaterial::Silver,
            ..BeltDesign::default()
        };
        let price = price_design(&design);
        assert_eq!(price.total, 65.0 - 5.0 + 10.0);
    }
}
