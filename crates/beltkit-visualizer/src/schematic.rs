//! Schematic SVG renderer
//!
//! Builds the live-preview scene as SVG markup. The tip contour comes from
//! the shared path engine; the strap body is the union of the contour clip
//! and a trailing rectangle, so the leather reads as one piece. The
//! outline strokes the open contour variant and continues along the strap
//! edges as plain lines, which keeps the transition seamless: stroking the
//! closed variant would paint a vertical seam where the contour meets the
//! body.

use std::fmt::Write as _;

use beltkit_core::{leather_color, BeltDesign, BeltSpecs, BuckleShape, RenderError};
use beltkit_geometry::{layout, path, profiles};

/// Fixed scene geometry for the schematic, in view-box units.
#[derive(Debug, Clone, Copy)]
pub struct SchematicLayout {
    pub view_width: f64,
    pub view_height: f64,
    /// Top-left of the strap band.
    pub belt_x: f64,
    pub belt_y: f64,
    /// Drawable strap length (the buckle glyph sits past its right end).
    pub belt_width: f64,
    /// Strap band height.
    pub belt_height: f64,
}

impl SchematicLayout {
    /// Units-per-inch scale for hole and ruler placement.
    pub fn units_per_inch(&self, total_length: f64) -> f64 {
        self.belt_width / total_length
    }

    /// Drawn length of the tip contour, proportional to the band height.
    pub fn tip_width(&self) -> f64 {
        self.belt_height * (profiles::NOMINAL_WIDTH / profiles::NOMINAL_HEIGHT)
    }

    /// Contour scale: the band height spans the full nominal frame.
    pub fn contour_scale(&self) -> f64 {
        self.belt_height / profiles::NOMINAL_HEIGHT
    }
}

impl Default for SchematicLayout {
    fn default() -> Self {
        Self {
            view_width: 640.0,
            view_height: 130.0,
            belt_x: 10.0,
            belt_y: 30.0,
            belt_width: 590.0,
            belt_height: 50.0,
        }
    }
}

/// Ruler tick interval in inches.
const RULER_STEP: f64 = 5.0;

/// Render the schematic for a design. Deterministic: the same design and
/// specs always produce identical markup.
pub fn render_schematic(design: &BeltDesign, specs: &BeltSpecs) -> Result<String, RenderError> {
    let color = leather_color(&design.color_id).ok_or_else(|| RenderError::UnknownColor {
        id: design.color_id.clone(),
    })?;

    let scene = SchematicLayout::default();
    let total_length = layout::total_length(design, specs);
    let upi = scene.units_per_inch(total_length);
    let tip_w = scene.tip_width();
    let scale = scene.contour_scale();
    let profile = profiles::profile(design.end_shape);

    let clip_contour = path::parse(profile.closed, scale, scene.belt_x, scene.belt_y);
    let outline_contour = path::parse(profile.open, scale, scene.belt_x, scene.belt_y);

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg">"#,
        scene.view_width, scene.view_height
    );

    // Defs: leather gradient and the strap clip (tip contour + body
    // rectangle, overlapped so no gap can open between them).
    let _ = writeln!(svg, "  <defs>");
    let _ = writeln!(
        svg,
        r#"    <linearGradient id="leather" x1="0" y1="0" x2="0" y2="1">"#
    );
    let _ = writeln!(svg, r#"      <stop offset="0%" stop-color="{}"/>"#, color.hex);
    let _ = writeln!(
        svg,
        r#"      <stop offset="100%" stop-color="{}"/>"#,
        color.dark_hex
    );
    let _ = writeln!(svg, "    </linearGradient>");
    let _ = writeln!(svg, r#"    <clipPath id="strap">"#);
    let _ = writeln!(svg, r#"      <path d="{}"/>"#, clip_contour.to_svg_data());
    let _ = writeln!(
        svg,
        r#"      <rect x="{}" y="{}" width="{}" height="{}"/>"#,
        scene.belt_x + tip_w - 5.0,
        scene.belt_y,
        scene.belt_width - tip_w + 5.0,
        scene.belt_height
    );
    let _ = writeln!(svg, "    </clipPath>");
    let _ = writeln!(svg, "  </defs>");

    // Strap body, clipped to the unified silhouette.
    let _ = writeln!(svg, r#"  <g clip-path="url(#strap)">"#);
    let _ = writeln!(
        svg,
        r#"    <rect x="{}" y="{}" width="{}" height="{}" fill="url(#leather)"/>"#,
        scene.belt_x, scene.belt_y, scene.belt_width, scene.belt_height
    );
    let _ = writeln!(svg, "  </g>");

    // Outline: open tip contour flowing into the strap's straight edges.
    let _ = writeln!(
        svg,
        r#"  <path d="{}" fill="none" stroke="rgba(0,0,0,0.2)" stroke-width="1.5"/>"#,
        outline_contour.to_svg_data()
    );
    let right_edge = scene.belt_x + scene.belt_width;
    let bottom = scene.belt_y + scene.belt_height;
    let _ = writeln!(
        svg,
        r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="rgba(0,0,0,0.2)" stroke-width="1"/>"#,
        scene.belt_x + tip_w,
        scene.belt_y,
        right_edge,
        scene.belt_y
    );
    let _ = writeln!(
        svg,
        r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="rgba(0,0,0,0.2)" stroke-width="1"/>"#,
        scene.belt_x + tip_w,
        bottom,
        right_edge,
        bottom
    );

    // Stitching lines inset from the strap edges.
    for stitch_y in [scene.belt_y + 4.0, bottom - 4.0] {
        let _ = writeln!(
            svg,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="rgba(0,0,0,0.15)" stroke-width="0.5" stroke-dasharray="3,2"/>"#,
            scene.belt_x + tip_w,
            stitch_y,
            right_edge,
            stitch_y
        );
    }

    // Adjustment holes at their true inch offsets from the tip.
    let hole_cy = scene.belt_y + scene.belt_height / 2.0;
    for inches in layout::hole_positions(specs) {
        let _ = writeln!(
            svg,
            r##"  <circle cx="{}" cy="{}" r="3" fill="#ffffff" stroke="rgba(0,0,0,0.25)" stroke-width="0.7"/>"##,
            scene.belt_x + inches * upi,
            hole_cy
        );
    }

    // Buckle-zone guide (visual only, not cut geometry).
    let zone = layout::buckle_zone(design, specs);
    let _ = writeln!(
        svg,
        r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="3" fill="none" stroke="rgba(0,0,0,0.1)" stroke-width="1" stroke-dasharray="4,3"/>"#,
        scene.belt_x + zone.start * upi,
        scene.belt_y - 2.0,
        zone.width * upi,
        scene.belt_height + 4.0
    );

    write_buckle_glyph(&mut svg, &scene, design.buckle_shape);
    write_ruler(&mut svg, &scene, total_length, upi);

    svg.push_str("</svg>\n");
    Ok(svg)
}

/// Buckle glyph past the strap's right edge: square or rounded frame plus
/// the prong bar.
fn write_buckle_glyph(svg: &mut String, scene: &SchematicLayout, shape: BuckleShape) {
    let x = scene.belt_x + scene.belt_width;
    let w = 24.0;
    let h = scene.belt_height + 16.0;
    let y = scene.belt_y - 8.0;

    match shape {
        BuckleShape::Square => {
            let _ = writeln!(
                svg,
                r##"  <rect x="{}" y="{}" width="{}" height="{}" rx="2" fill="none" stroke="#b8953a" stroke-width="2"/>"##,
                x - 2.0,
                y,
                w,
                h
            );
            let _ = writeln!(
                svg,
                r##"  <line x1="{cx}" y1="{}" x2="{cx}" y2="{}" stroke="#b8953a" stroke-width="1.5"/>"##,
                y + 2.0,
                y + h - 2.0,
                cx = x + w / 2.0 - 1.0
            );
        }
        BuckleShape::Round => {
            let _ = writeln!(
                svg,
                r##"  <path d="M{},{} L{},{} Q{},{} {},{} Q{},{} {},{} L{},{}" fill="none" stroke="#888" stroke-width="2"/>"##,
                x - 2.0,
                y,
                x + w - 8.0,
                y,
                x + w,
                y,
                x + w,
                y + h / 2.0,
                x + w,
                y + h,
                x + w - 8.0,
                y + h,
                x - 2.0,
                y + h
            );
            let _ = writeln!(
                svg,
                r##"  <line x1="{cx}" y1="{}" x2="{cx}" y2="{}" stroke="#888" stroke-width="1.5"/>"##,
                y + 2.0,
                y + h - 2.0,
                cx = x + w / 2.0 - 3.0
            );
        }
    }
}

/// Inch ruler under the strap, one labeled tick every [`RULER_STEP`]
/// inches across the full strap length.
fn write_ruler(svg: &mut String, scene: &SchematicLayout, total_length: f64, upi: f64) {
    let tick_top = scene.belt_y + scene.belt_height + 6.0;
    let mut inch = 0.0;
    while inch <= total_length {
        let x = scene.belt_x + inch * upi;
        let _ = writeln!(
            svg,
            r#"  <line x1="{x}" y1="{}" x2="{x}" y2="{}" stroke="rgba(0,0,0,0.2)" stroke-width="0.5"/>"#,
            tick_top,
            tick_top + 6.0,
            x = x
        );
        let _ = writeln!(
            svg,
            r##"  <text x="{}" y="{}" text-anchor="middle" font-size="6" fill="#999">{}"</text>"##,
            x,
            tick_top + 14.0,
            inch
        );
        inch += RULER_STEP;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beltkit_core::EndShape;

    #[test]
    fn test_render_is_deterministic() {
        let design = BeltDesign::default();
        let specs = BeltSpecs::default();
        let a = render_schematic(&design, &specs).unwrap();
        let b = render_schematic(&design, &specs).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_color_is_fatal() {
        let design = BeltDesign {
            color_id: "chartreuse".to_string(),
            ..BeltDesign::default()
        };
        let err = render_schematic(&design, &BeltSpecs::default()).unwrap_err();
        assert!(matches!(err, RenderError::UnknownColor { id } if id == "chartreuse"));
    }

    #[test]
    fn test_holes_land_at_inch_offsets() {
        let design = BeltDesign::default();
        let specs = BeltSpecs::default();
        let svg = render_schematic(&design, &specs).unwrap();

        let scene = SchematicLayout::default();
        let upi = scene.units_per_inch(45.0);
        // First hole: 5" from the tip.
        let expected = scene.belt_x + 5.0 * upi;
        assert!(svg.contains(&format!(r#"<circle cx="{}""#, expected)));
        // All eight holes are present.
        assert_eq!(svg.matches("<circle").count(), 8);
    }

    #[test]
    fn test_outline_uses_open_contour() {
        let design = BeltDesign::default();
        let specs = BeltSpecs::default();
        let svg = render_schematic(&design, &specs).unwrap();
        let scene = SchematicLayout::default();
        let scale = scene.contour_scale();

        let open = beltkit_geometry::parse(
            beltkit_geometry::profiles::profile(EndShape::Round).open,
            scale,
            scene.belt_x,
            scene.belt_y,
        );
        let closed = beltkit_geometry::parse(
            beltkit_geometry::profiles::profile(EndShape::Round).closed,
            scale,
            scene.belt_x,
            scene.belt_y,
        );
        // The stroked outline is the open variant; the closed variant only
        // appears inside the clip definition.
        assert!(svg.contains(&format!(
            r#"<path d="{}" fill="none" stroke="rgba(0,0,0,0.2)""#,
            open.to_svg_data()
        )));
        assert!(svg.contains(&format!(r#"<path d="{}"/>"#, closed.to_svg_data())));
    }

    #[test]
    fn test_ruler_spans_total_length() {
        let design = BeltDesign::default(); // 45" total
        let svg = render_schematic(&design, &BeltSpecs::default()).unwrap();
        assert!(svg.contains(">0\"</text>"));
        assert!(svg.contains(">45\"</text>"));
        assert!(!svg.contains(">50\"</text>"));
    }

    #[test]
    fn test_buckle_glyph_follows_shape() {
        let square = render_schematic(&BeltDesign::default(), &BeltSpecs::default()).unwrap();
        assert!(square.contains("#b8953a"));

        let round = BeltDesign {
            buckle_shape: BuckleShape::Round,
            ..BeltDesign::default()
        };
        let rounded = render_schematic(&round, &BeltSpecs::default()).unwrap();
        assert!(rounded.contains(r##"stroke="#888""##));
    }
}
