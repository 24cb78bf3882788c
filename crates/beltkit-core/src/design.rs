//! Belt design model
//!
//! Every configurable option is a closed enum so that adding or removing a
//! variant is a compile-time event: the contour table, the aspect-ratio
//! table, and the label tables all match exhaustively. A [`BeltDesign`] is
//! an immutable value; edits replace the whole value rather than mutating
//! fields shared between renderers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::specs::{WAIST_MAX, WAIST_MIN};

/// Belt strap width, one of the four widths the shop cuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeltWidth {
    /// 1 inch
    #[serde(rename = "1")]
    W1,
    /// 1 1/4 inch
    #[serde(rename = "1.25")]
    W1_25,
    /// 1 1/2 inch
    #[serde(rename = "1.5")]
    W1_5,
    /// 1 3/4 inch
    #[serde(rename = "1.75")]
    W1_75,
}

impl BeltWidth {
    /// All widths, narrowest first.
    pub const ALL: [BeltWidth; 4] = [Self::W1, Self::W1_25, Self::W1_5, Self::W1_75];

    /// Width in inches.
    pub fn inches(&self) -> f64 {
        match self {
            Self::W1 => 1.0,
            Self::W1_25 => 1.25,
            Self::W1_5 => 1.5,
            Self::W1_75 => 1.75,
        }
    }

    /// Look up the variant for an exact inch value.
    pub fn from_inches(inches: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.inches() == inches)
    }
}

impl Default for BeltWidth {
    fn default() -> Self {
        Self::W1_5
    }
}

impl fmt::Display for BeltWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::W1 => write!(f, "1"),
            Self::W1_25 => write!(f, "1.25"),
            Self::W1_5 => write!(f, "1.5"),
            Self::W1_75 => write!(f, "1.75"),
        }
    }
}

impl FromStr for BeltWidth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self::W1),
            "1.25" => Ok(Self::W1_25),
            "1.5" => Ok(Self::W1_5),
            "1.75" => Ok(Self::W1_75),
            _ => Err(format!("Unknown belt width: {}", s)),
        }
    }
}

/// Contour profile of the belt's free tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndShape {
    /// Fully rounded tip
    Round,
    /// Squared-off tip with small corner radii
    Square,
    /// Square tip tapering toward the end
    SquareTaper,
    /// Pointed spear tip
    Spear,
}

impl EndShape {
    /// All tip shapes, in catalog order.
    pub const ALL: [EndShape; 4] = [Self::Round, Self::Square, Self::SquareTaper, Self::Spear];

    /// Stable string id (matches the serialized form).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Round => "round",
            Self::Square => "square",
            Self::SquareTaper => "square-taper",
            Self::Spear => "spear",
        }
    }

    /// Parse from the stable id.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "round" => Some(Self::Round),
            "square" => Some(Self::Square),
            "square-taper" => Some(Self::SquareTaper),
            "spear" => Some(Self::Spear),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Round => "Round",
            Self::Square => "Square",
            Self::SquareTaper => "Square Taper",
            Self::Spear => "Spear",
        }
    }
}

impl fmt::Display for EndShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Buckle frame shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuckleShape {
    Square,
    Round,
}

impl BuckleShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Round => "round",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Square => "Square",
            Self::Round => "Round",
        }
    }
}

impl fmt::Display for BuckleShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Buckle metal finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuckleMaterial {
    AntiqueBrass,
    GoldBrass,
    Silver,
    Black,
}

impl BuckleMaterial {
    pub const ALL: [BuckleMaterial; 4] =
        [Self::AntiqueBrass, Self::GoldBrass, Self::Silver, Self::Black];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AntiqueBrass => "antique-brass",
            Self::GoldBrass => "gold-brass",
            Self::Silver => "silver",
            Self::Black => "black",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AntiqueBrass => "Antique Brass",
            Self::GoldBrass => "Gold Brass",
            Self::Silver => "Silver",
            Self::Black => "Black",
        }
    }
}

impl fmt::Display for BuckleMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How the buckle end is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuckleAttachment {
    /// Separate piece cut and folded around the buckle bar.
    Additional,
    /// Belt cut long with a fold-back at the buckle end.
    Integrated,
}

impl BuckleAttachment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Additional => "additional",
            Self::Integrated => "integrated",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Additional => "Additional Piece",
            Self::Integrated => "Integrated",
        }
    }
}

impl fmt::Display for BuckleAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One complete belt configuration.
///
/// Waist sizes are whole inches, already clamped to
/// [`WAIST_MIN`]..=[`WAIST_MAX`] by the caller (see [`clamp_waist`]); the
/// geometry layer does not re-validate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeltDesign {
    /// Pant waist size in inches. Drives the template.
    pub waist_size: u32,
    /// Waist measured around the body, kept as a reference for the maker.
    pub actual_waist_size: Option<u32>,
    pub width: BeltWidth,
    /// Leather catalog id, resolved against [`crate::catalog::LEATHER_COLORS`].
    pub color_id: String,
    pub end_shape: EndShape,
    pub buckle_shape: BuckleShape,
    pub buckle_material: BuckleMaterial,
    pub buckle_attachment: BuckleAttachment,
}

impl Default for BeltDesign {
    fn default() -> Self {
        Self {
            waist_size: 34,
            actual_waist_size: None,
            width: BeltWidth::W1_5,
            color_id: "light-brown".to_string(),
            end_shape: EndShape::Round,
            buckle_shape: BuckleShape::Square,
            buckle_material: BuckleMaterial::AntiqueBrass,
            buckle_attachment: BuckleAttachment::Additional,
        }
    }
}

/// Clamp a requested waist size to the supported range.
///
/// Input widgets adjust by deltas, so the raw value may be out of range in
/// either direction; the stored design always carries a clamped value.
pub fn clamp_waist(value: i64) -> u32 {
    value.clamp(WAIST_MIN as i64, WAIST_MAX as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_inches() {
        assert_eq!(BeltWidth::W1_25.inches(), 1.25);
        assert_eq!(BeltWidth::from_inches(1.75), Some(BeltWidth::W1_75));
        assert_eq!(BeltWidth::from_inches(2.0), None);
        assert_eq!("1.5".parse::<BeltWidth>().unwrap(), BeltWidth::W1_5);
    }

    #[test]
    fn test_end_shape_ids() {
        assert_eq!(EndShape::SquareTaper.as_str(), "square-taper");
        assert_eq!(EndShape::parse("square-taper"), Some(EndShape::SquareTaper));
        assert_eq!(EndShape::parse("oval"), None);
        assert_eq!(EndShape::SquareTaper.label(), "Square Taper");
    }

    #[test]
    fn test_waist_clamping() {
        assert_eq!(clamp_waist(25), 26);
        assert_eq!(clamp_waist(26), 26);
        assert_eq!(clamp_waist(40), 40);
        assert_eq!(clamp_waist(54), 54);
        assert_eq!(clamp_waist(55), 54);
        assert_eq!(clamp_waist(-3), 26);
    }

    #[test]
    fn test_design_serde_round_trip() {
        let design = BeltDesign {
            waist_size: 38,
            actual_waist_size: Some(40),
            width: BeltWidth::W1_25,
            color_id: "black-saddle".to_string(),
            end_shape: EndShape::Spear,
            buckle_shape: BuckleShape::Round,
            buckle_material: BuckleMaterial::Silver,
            buckle_attachment: BuckleAttachment::Integrated,
        };
        let json = serde_json::to_string(&design).unwrap();
        assert!(json.contains("\"1.25\""));
        assert!(json.contains("\"spear\""));
        assert!(json.contains("\"silver\""));
        let back: BeltDesign = serde_json::from_str(&json).unwrap();
        assert_eq!(back, design);
    }

    #[test]
    fn test_default_design() {
        let design = BeltDesign::default();
        assert_eq!(design.waist_size, 34);
        assert_eq!(design.width, BeltWidth::W1_5);
        assert_eq!(design.end_shape, EndShape::Round);
        assert_eq!(design.buckle_attachment, BuckleAttachment::Additional);
    }
}
