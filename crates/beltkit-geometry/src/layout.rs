//! Belt cutting layout
//!
//! Pure functions deriving every cutting measurement from a design and a
//! [`BeltSpecs`]. All results are inches from the reference edge of the
//! piece they describe (the tip for strap measurements, the left edge of
//! the template for hardware placement); renderers apply their own
//! units-per-inch scale.

use beltkit_core::{BeltDesign, BeltSpecs, BeltWidth, BuckleAttachment, EndShape};

use crate::profiles;
use crate::Point;

/// Straight run kept past the last hole on the tip template.
pub const TIP_TEMPLATE_TAIL: f64 = 2.0;

/// Rivet columns as fractions of the buckle-template length.
pub const RIVET_X_FRACTIONS: [f64; 2] = [0.29, 0.71];

/// Rivet rows as fractions of the strap width.
pub const RIVET_Y_FRACTIONS: [f64; 2] = [0.17, 0.83];

/// Snap columns as fractions of the buckle-template length.
pub const SNAP_X_FRACTIONS: [f64; 2] = [0.13, 0.87];

/// Stitch-guide rows as fractions of the strap width.
pub const STITCH_ROW_FRACTIONS: [f64; 2] = [0.15, 0.85];

/// Stitch guides start this fraction of the template length in from each
/// end and stop short of the fold line by [`STITCH_CENTER_GAP`].
pub const STITCH_INNER_FRACTION: f64 = 0.22;

/// Clearance between a stitch guide and the fold line, in inches.
pub const STITCH_CENTER_GAP: f64 = 0.2;

/// Total strap length in inches:
/// waist + buckle allowance + hole allowance (+ fold-back when the buckle
/// end is integrated).
pub fn total_length(design: &BeltDesign, specs: &BeltSpecs) -> f64 {
    let fold_back = match design.buckle_attachment {
        BuckleAttachment::Integrated => specs.integrated_fold_back,
        BuckleAttachment::Additional => 0.0,
    };
    design.waist_size as f64 + specs.buckle_allowance + specs.hole_allowance + fold_back
}

/// Adjustment hole centers, inches from the tip. Independent of waist size
/// and width.
pub fn hole_positions(specs: &BeltSpecs) -> Vec<f64> {
    (0..specs.hole_count)
        .map(|i| specs.first_hole_from_tip + i as f64 * specs.hole_spacing)
        .collect()
}

/// The strap region reserved for buckle hardware. Rendered as a visual
/// guide only, never cut geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuckleZone {
    /// Inches from the tip to the start of the zone.
    pub start: f64,
    /// Zone width in inches (the buckle allowance).
    pub width: f64,
}

pub fn buckle_zone(design: &BeltDesign, specs: &BeltSpecs) -> BuckleZone {
    BuckleZone {
        start: total_length(design, specs) - specs.buckle_allowance,
        width: specs.buckle_allowance,
    }
}

/// Minimum tip-template length: far enough to include every hole plus the
/// trailing buffer. Independent of waist size.
pub fn tip_template_length(specs: &BeltSpecs) -> f64 {
    specs.first_hole_from_tip
        + specs.hole_count.saturating_sub(1) as f64 * specs.hole_spacing
        + TIP_TEMPLATE_TAIL
}

/// Buckle-template length for a tip shape and strap width. Proportioned
/// from the reference drawing for the shape, not from strap-length
/// arithmetic.
pub fn buckle_template_length(end_shape: EndShape, width: BeltWidth) -> f64 {
    profiles::profile(end_shape).template_aspect * width.inches()
}

/// Fold line and buckle slot center: dead center of the buckle template,
/// regardless of attachment mode.
pub fn fold_line_position(template_length: f64) -> f64 {
    template_length / 2.0
}

/// The four rivet holes, measured from the template's top-left corner.
pub fn rivet_positions(template_length: f64, strap_width: f64) -> [Point; 4] {
    let [x0, x1] = RIVET_X_FRACTIONS.map(|f| template_length * f);
    let [y0, y1] = RIVET_Y_FRACTIONS.map(|f| strap_width * f);
    [
        Point::new(x0, y0),
        Point::new(x0, y1),
        Point::new(x1, y0),
        Point::new(x1, y1),
    ]
}

/// The two snap holes, on the template centerline.
pub fn snap_positions(template_length: f64, strap_width: f64) -> [Point; 2] {
    SNAP_X_FRACTIONS.map(|f| Point::new(template_length * f, strap_width / 2.0))
}

/// Dashed stitch-guide rows on the buckle template, measured from the
/// template's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StitchGuides {
    /// Row heights (y offsets).
    pub rows: [f64; 2],
    /// Left half: x span from inner edge to just short of the fold line.
    pub left_span: (f64, f64),
    /// Right half, mirror of the left.
    pub right_span: (f64, f64),
}

pub fn stitch_guides(template_length: f64, strap_width: f64) -> StitchGuides {
    let center = fold_line_position(template_length);
    StitchGuides {
        rows: STITCH_ROW_FRACTIONS.map(|f| strap_width * f),
        left_span: (
            template_length * STITCH_INNER_FRACTION,
            center - STITCH_CENTER_GAP,
        ),
        right_span: (
            center + STITCH_CENTER_GAP,
            template_length * (1.0 - STITCH_INNER_FRACTION),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn design_with(attachment: BuckleAttachment) -> BeltDesign {
        BeltDesign {
            buckle_attachment: attachment,
            ..BeltDesign::default()
        }
    }

    #[test]
    fn test_total_length_additional() {
        // 34 + 6 + 5
        let specs = BeltSpecs::default();
        let length = total_length(&design_with(BuckleAttachment::Additional), &specs);
        assert_eq!(length, 45.0);
    }

    #[test]
    fn test_total_length_integrated() {
        // 34 + 6 + 5 + 2.5
        let specs = BeltSpecs::default();
        let length = total_length(&design_with(BuckleAttachment::Integrated), &specs);
        assert_eq!(length, 47.5);
    }

    #[test]
    fn test_hole_positions_default_specs() {
        let specs = BeltSpecs::default();
        assert_eq!(
            hole_positions(&specs),
            vec![5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0]
        );
    }

    #[test]
    fn test_hole_positions_alternate_specs() {
        let specs = BeltSpecs {
            hole_count: 10,
            hole_spacing: 0.75,
            first_hole_from_tip: 4.0,
            ..BeltSpecs::default()
        };
        let holes = hole_positions(&specs);
        assert_eq!(holes.len(), 10);
        assert_eq!(holes[0], 4.0);
        assert_eq!(holes[9], 4.0 + 9.0 * 0.75);
    }

    #[test]
    fn test_buckle_zone() {
        let specs = BeltSpecs::default();
        let zone = buckle_zone(&design_with(BuckleAttachment::Additional), &specs);
        assert_eq!(zone.start, 39.0);
        assert_eq!(zone.width, 6.0);
    }

    #[test]
    fn test_tip_template_length() {
        let specs = BeltSpecs::default();
        // 5 + 7*1 + 2; takes no design at all, so waist cannot affect it.
        assert_eq!(tip_template_length(&specs), 14.0);
    }

    #[test]
    fn test_buckle_template_scales_linearly_with_width() {
        for shape in EndShape::ALL {
            let narrow = buckle_template_length(shape, BeltWidth::W1);
            let half = buckle_template_length(shape, BeltWidth::W1_5);
            assert!((half - narrow * 1.5).abs() < 1e-9);
        }
    }

    #[test]
    fn test_fold_line_is_centered() {
        for shape in EndShape::ALL {
            for width in BeltWidth::ALL {
                let len = buckle_template_length(shape, width);
                assert_eq!(fold_line_position(len), len / 2.0);
            }
        }
    }

    #[test]
    fn test_rivets_and_snaps_symmetric_about_center() {
        for shape in EndShape::ALL {
            for width in BeltWidth::ALL {
                let len = buckle_template_length(shape, width);
                let center = fold_line_position(len);
                let rivets = rivet_positions(len, width.inches());
                let left: Vec<f64> = rivets.iter().map(|p| p.x).filter(|x| *x < center).collect();
                let right: Vec<f64> = rivets.iter().map(|p| p.x).filter(|x| *x > center).collect();
                assert_eq!(left.len(), 2);
                assert_eq!(right.len(), 2);
                for (l, r) in left.iter().zip(right.iter()) {
                    assert!((center - l - (r - center)).abs() < 1e-9);
                }

                let [snap_l, snap_r] = snap_positions(len, width.inches());
                assert!((center - snap_l.x - (snap_r.x - center)).abs() < 1e-9);
                assert_eq!(snap_l.y, width.inches() / 2.0);
            }
        }
    }

    #[test]
    fn test_stitch_guides_stop_short_of_fold_line() {
        let len = buckle_template_length(EndShape::Round, BeltWidth::W1_5);
        let guides = stitch_guides(len, 1.5);
        let center = fold_line_position(len);
        assert!(guides.left_span.1 < center);
        assert!(guides.right_span.0 > center);
        assert_eq!(center - guides.left_span.1, guides.right_span.0 - center);
        assert!(guides.rows[0] < guides.rows[1]);
    }
}
