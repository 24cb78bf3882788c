//! Engine-level checks on the real authored contours, at the scales the
//! renderers actually use.

use beltkit_core::{BeltWidth, EndShape};
use beltkit_geometry::profiles::{self, contour_scale};
use beltkit_geometry::{parse, PathSegment};

fn delta_components(seg: &PathSegment) -> Vec<f64> {
    match *seg {
        PathSegment::Line { dx, dy } => vec![dx, dy],
        PathSegment::Cubic {
            dx1,
            dy1,
            dx2,
            dy2,
            dx3,
            dy3,
        } => vec![dx1, dy1, dx2, dy2, dx3, dy3],
    }
}

#[test]
fn scaled_parse_matches_unit_parse() {
    for shape in EndShape::ALL {
        for width in BeltWidth::ALL {
            let scale = contour_scale(width.inches());
            let scaled = parse(profiles::profile(shape).closed, scale, 0.0, 0.0);
            let unit = parse(profiles::profile(shape).closed, 1.0, 0.0, 0.0);

            assert!((scaled.start.x - unit.start.x * scale).abs() < 1e-9);
            assert!((scaled.start.y - unit.start.y * scale).abs() < 1e-9);
            assert_eq!(scaled.segments.len(), unit.segments.len());
            for (s, u) in scaled.segments.iter().zip(unit.segments.iter()) {
                for (sc, uc) in delta_components(s).iter().zip(delta_components(u).iter()) {
                    assert!((sc / scale - uc).abs() < 1e-9);
                }
            }
        }
    }
}

#[test]
fn mirroring_real_contours_is_an_involution() {
    for shape in EndShape::ALL {
        let path = parse(profiles::profile(shape).open, 1.0, 0.0, 0.0);
        let round_trip = path.mirrored(profiles::NOMINAL_WIDTH).mirrored(profiles::NOMINAL_WIDTH);
        assert_eq!(round_trip.start, path.start);
        assert_eq!(round_trip.segments, path.segments);
    }
}

#[test]
fn mirrored_contour_spans_leftward_from_anchor() {
    let width = 1.5;
    let scale = contour_scale(width);
    let anchor = 10.0;
    let path = parse(profiles::profile(EndShape::Round).closed, scale, 0.0, 0.0);
    let mirrored = path.mirrored(anchor);

    // The mirrored start sits just left of the anchor (source start x is
    // near the frame's right edge), and every x the contour visits stays
    // within one contour-width left of the anchor.
    assert!(mirrored.start.x <= anchor);
    let mut x = mirrored.start.x;
    let mut min_x = x;
    for seg in &mirrored.segments {
        if let PathSegment::Line { dx, .. } = seg {
            x += dx;
            min_x = min_x.min(x);
        } else if let PathSegment::Cubic { dx3, .. } = seg {
            x += dx3;
            min_x = min_x.min(x);
        }
    }
    assert!(min_x >= anchor - profiles::contour_width(width) - 0.1);
}

#[test]
fn svg_re_emission_preserves_real_contours() {
    for shape in EndShape::ALL {
        let path = parse(profiles::profile(shape).closed, 1.0, 12.0, 34.0);
        let reparsed = parse(&path.to_svg_data(), 1.0, 0.0, 0.0);
        assert_eq!(reparsed.start, path.start);
        assert_eq!(reparsed.segments, path.segments);
    }
}
