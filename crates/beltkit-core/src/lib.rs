//! # Beltkit Core
//!
//! Core types and data for the belt configurator.
//! Provides the design model (closed enums for every configurable option),
//! the physical specification constants, the leather/hardware catalogs,
//! pricing, and the order record types shared by every renderer.

pub mod catalog;
pub mod design;
pub mod error;
pub mod order;
pub mod pricing;
pub mod specs;
pub mod units;

pub use catalog::{leather_color, BusinessInfo, LeatherColor, BUSINESS, LEATHER_COLORS};
pub use design::{
    clamp_waist, BeltDesign, BeltWidth, BuckleAttachment, BuckleMaterial, BuckleShape, EndShape,
};
pub use error::{Error, RenderError, Result};
pub use order::{BeltOrder, CustomerDetails};
pub use pricing::{price_design, PriceBreakdown};
pub use specs::{BeltSpecs, WAIST_MAX, WAIST_MIN};
