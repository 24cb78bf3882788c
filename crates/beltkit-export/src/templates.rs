//! Page 2: 1:1 cutting templates
//!
//! Landscape page drawn at true scale: one inch of leather is one inch of
//! paper, so the strap width itself is the contour's scale basis and every
//! hole lands at its real offset. The page leads with a print-scale
//! warning and a 1-inch verification ruler so a misprinted page is
//! immediately detectable.

use cairo::Context;

use beltkit_core::units::format_inches;
use beltkit_core::{
    leather_color, BeltOrder, BeltSpecs, BuckleAttachment, RenderError, BUSINESS,
};
use beltkit_geometry::{layout, profiles};

use crate::draw::{
    circle, dimension_arrow, end_shape, end_shape_mirrored, line, rounded_rect, ruler, set_font,
    set_gray, set_rgb, text, text_rotated, HAlign, Paint,
};
use crate::Result;

const PAGE_W: f64 = 17.0;
const PAGE_H: f64 = 11.0;
const MARGIN: f64 = 0.75;

/// Dash pattern for do-not-cut edges.
const EDGE_DASH: [f64; 2] = [0.1, 0.08];

/// Dash pattern for center and fold guide lines.
const GUIDE_DASH: [f64; 2] = [0.1, 0.05];

pub(crate) fn draw(cx: &Context, order: &BeltOrder, specs: &BeltSpecs) -> Result<()> {
    let design = &order.design;
    let color = leather_color(&design.color_id).ok_or_else(|| RenderError::UnknownColor {
        id: design.color_id.clone(),
    })?;
    let strap_w = design.width.inches();
    let integrated = design.buckle_attachment == BuckleAttachment::Integrated;

    // Header block
    set_font(cx, 12.0, true);
    cx.set_source_rgb(0.0, 0.0, 0.0);
    text(cx, "1:1 SCALE CUTTING TEMPLATES", MARGIN, MARGIN + 0.15, HAlign::Left)?;
    set_font(cx, 9.0, false);
    text(
        cx,
        &format!(
            "Order: {}  |  {}  |  {}",
            order.order_number, order.customer.name, order.date
        ),
        MARGIN,
        MARGIN + 0.45,
        HAlign::Left,
    )?;
    text(
        cx,
        &format!(
            "{} | {} wide | {} {}",
            color.name,
            format_inches(strap_w),
            design.buckle_shape.label(),
            design.buckle_material.label()
        ),
        MARGIN,
        MARGIN + 0.65,
        HAlign::Left,
    )?;

    // Print-scale warning
    set_font(cx, 13.0, true);
    set_rgb(cx, 200, 0, 0);
    text(
        cx,
        "PRINT AT 100% SCALE — DO NOT SCALE TO FIT",
        PAGE_W / 2.0,
        MARGIN + 0.2,
        HAlign::Center,
    )?;
    cx.set_source_rgb(0.0, 0.0, 0.0);

    draw_verification_ruler(cx)?;

    // Template A: tip end
    let t_a_x = MARGIN + 1.0;
    let t_a_y = 2.0;
    draw_tip_template(cx, order, specs, t_a_x, t_a_y)?;

    // Template B: buckle end
    let t_b_x = MARGIN + 1.0;
    let t_b_y = t_a_y + strap_w + 2.5;
    draw_buckle_template(cx, order, specs, t_b_x, t_b_y)?;

    // Trailing notes
    let notes_y = t_b_y + strap_w + 1.5;
    set_font(cx, 9.0, false);
    set_gray(cx, 80);
    text(cx, &full_length_note(order, specs), MARGIN, notes_y, HAlign::Left)?;
    let mut ny = notes_y + 0.3;
    if let Some(actual) = design.actual_waist_size {
        text(
            cx,
            &format!(
                "Actual waist size: {} (reference measurement)",
                format_inches(actual as f64)
            ),
            MARGIN,
            ny,
            HAlign::Left,
        )?;
        ny += 0.3;
    }
    let instructions = if integrated {
        "Cut belt body to full length. Use Template A for tip shaping and hole marking. Use Template B for buckle fold-back reference."
    } else {
        "Cut belt body to full length. Use Template A for tip shaping and hole marking. Use Template B for buckle end piece."
    };
    text(cx, instructions, MARGIN, ny, HAlign::Left)?;

    // Footer
    set_font(cx, 7.0, false);
    set_gray(cx, 150);
    text(
        cx,
        &format!(
            "{} | {} | Generated {}",
            BUSINESS.name, order.order_number, order.date
        ),
        PAGE_W / 2.0,
        PAGE_H - MARGIN,
        HAlign::Center,
    )?;

    Ok(())
}

/// 1-inch self-check ruler near the top-right corner.
fn draw_verification_ruler(cx: &Context) -> Result<()> {
    let x = PAGE_W - MARGIN - 2.0;
    let y = MARGIN + 0.4;
    cx.set_source_rgb(0.0, 0.0, 0.0);
    cx.set_line_width(0.01);
    cx.rectangle(x, y, 1.0, 0.3);
    cx.stroke()?;
    line(cx, x + 0.5, y, x + 0.5, y + 0.3)?;
    for i in 0..=4 {
        let tx = x + i as f64 * 0.25;
        line(cx, tx, y, tx, y + 0.12)?;
    }
    set_font(cx, 7.0, false);
    text(cx, "0", x - 0.05, y + 0.2, HAlign::Left)?;
    text(cx, "1\"", x + 1.05, y + 0.2, HAlign::Left)?;
    text(cx, "VERIFY SCALE", x + 0.5, y + 0.5, HAlign::Center)?;
    Ok(())
}

/// Template A: the tip end at 1:1, long enough to carry every adjustment
/// hole plus the trailing buffer.
fn draw_tip_template(
    cx: &Context,
    order: &BeltOrder,
    specs: &BeltSpecs,
    x: f64,
    y: f64,
) -> Result<()> {
    let design = &order.design;
    let strap_w = design.width.inches();
    let template_len = layout::tip_template_length(specs);
    let shape_w = profiles::contour_width(strap_w);
    let body_end_x = x + template_len;

    set_font(cx, 11.0, true);
    cx.set_source_rgb(0.0, 0.0, 0.0);
    text(cx, "TEMPLATE A — TIP END", MARGIN, y - 0.3, HAlign::Left)?;
    set_font(cx, 8.0, false);
    set_gray(cx, 100);
    text(
        cx,
        "Cut along outline. Mark hole positions.",
        MARGIN,
        y - 0.1,
        HAlign::Left,
    )?;

    // Fill tip contour + body as one region, no internal edges.
    set_rgb(cx, 245, 242, 235);
    end_shape(cx, design.end_shape, x, y, strap_w, Paint::Fill, false)?;
    set_rgb(cx, 245, 242, 235);
    cx.rectangle(x + shape_w - 0.03, y, body_end_x - (x + shape_w - 0.03), strap_w);
    cx.fill()?;

    // Outer contour only: open tip variant, then the straight edges.
    cx.set_source_rgb(0.0, 0.0, 0.0);
    cx.set_line_width(0.02);
    end_shape(cx, design.end_shape, x, y, strap_w, Paint::Stroke, true)?;
    line(cx, x + shape_w, y, body_end_x, y)?;
    line(cx, x + shape_w, y + strap_w, body_end_x, y + strap_w)?;

    // Dashed right edge: the belt body continues past the template.
    cx.set_dash(&EDGE_DASH, 0.0);
    line(cx, body_end_x, y, body_end_x, y + strap_w)?;
    cx.set_dash(&[], 0.0);

    // Center guideline
    set_rgb(cx, 150, 150, 200);
    cx.set_line_width(0.005);
    cx.set_dash(&GUIDE_DASH, 0.0);
    line(cx, x, y + strap_w / 2.0, body_end_x, y + strap_w / 2.0)?;
    cx.set_dash(&[], 0.0);
    set_font(cx, 5.0, false);
    text(
        cx,
        "CENTER",
        body_end_x + 0.05,
        y + strap_w / 2.0 + 0.02,
        HAlign::Left,
    )?;

    // Holes at true inch offsets, each labeled with its distance from the
    // tip.
    cx.set_source_rgb(0.0, 0.0, 0.0);
    cx.set_line_width(0.01);
    for inches in layout::hole_positions(specs) {
        let hx = x + inches;
        circle(cx, hx, y + strap_w / 2.0, specs.hole_diameter / 2.0);
        cx.stroke()?;
        set_font(cx, 6.0, false);
        text(
            cx,
            &format_inches(inches),
            hx,
            y + strap_w + 0.3,
            HAlign::Center,
        )?;
    }

    dimension_arrow(cx, x - 0.4, y, y + strap_w, &format_inches(strap_w))?;
    ruler(cx, x, y + strap_w + 0.5, template_len)?;

    Ok(())
}

/// Template B: the buckle end at 1:1, laid out per attachment mode.
///
/// Additional piece: a symmetric template with the tip contour at both
/// ends. Integrated: the contour only at the right; the left edge is
/// dashed because the strap continues there and must not be cut.
fn draw_buckle_template(
    cx: &Context,
    order: &BeltOrder,
    specs: &BeltSpecs,
    x: f64,
    y: f64,
) -> Result<()> {
    let design = &order.design;
    let strap_w = design.width.inches();
    let integrated = design.buckle_attachment == BuckleAttachment::Integrated;
    let template_len = layout::buckle_template_length(design.end_shape, design.width);
    let shape_w = profiles::contour_width(strap_w);
    let center_x = x + layout::fold_line_position(template_len);

    set_font(cx, 11.0, true);
    cx.set_source_rgb(0.0, 0.0, 0.0);
    let title = if integrated {
        "TEMPLATE B — BUCKLE END (Integrated)"
    } else {
        "TEMPLATE B — BUCKLE END (Additional Piece)"
    };
    text(cx, title, MARGIN, y - 0.3, HAlign::Left)?;
    set_font(cx, 8.0, false);
    set_gray(cx, 100);
    let subtitle = if integrated {
        "Right side: cut along outline. Left dashed edge indicates belt body (do not cut). Punch slot. Fold at fold line."
    } else {
        "Cut along outline. Punch slot and holes. Fold at fold line."
    };
    text(cx, subtitle, MARGIN, y - 0.1, HAlign::Left)?;

    cx.set_line_width(0.02);
    if integrated {
        // Fill: full body rectangle plus the real contour on the right.
        set_rgb(cx, 245, 242, 235);
        cx.rectangle(x, y, template_len, strap_w);
        cx.fill()?;
        set_rgb(cx, 245, 242, 235);
        end_shape_mirrored(
            cx,
            design.end_shape,
            x + template_len,
            y,
            strap_w,
            Paint::Fill,
            false,
        )?;

        // Dashed left edge: belt body continues, do not cut.
        set_gray(cx, 120);
        cx.set_dash(&EDGE_DASH, 0.0);
        line(cx, x, y, x, y + strap_w)?;
        cx.set_dash(&[], 0.0);

        // Straight edges up to where the mirrored contour takes over.
        cx.set_source_rgb(0.0, 0.0, 0.0);
        line(cx, x, y, x + template_len - shape_w, y)?;
        line(cx, x, y + strap_w, x + template_len - shape_w, y + strap_w)?;
        end_shape_mirrored(
            cx,
            design.end_shape,
            x + template_len,
            y,
            strap_w,
            Paint::Stroke,
            true,
        )?;

        // Label the do-not-cut edge.
        set_font(cx, 5.0, false);
        set_gray(cx, 120);
        text_rotated(cx, "BELT BODY", x - 0.05, y + strap_w / 2.0, HAlign::Center)?;
        text_rotated(cx, "(do not cut)", x - 0.18, y + strap_w / 2.0, HAlign::Center)?;
        cx.set_source_rgb(0.0, 0.0, 0.0);
    } else {
        // Fill: both contours plus the spanning body rectangle.
        set_rgb(cx, 245, 242, 235);
        end_shape(cx, design.end_shape, x, y, strap_w, Paint::Fill, false)?;
        set_rgb(cx, 245, 242, 235);
        end_shape_mirrored(
            cx,
            design.end_shape,
            x + template_len,
            y,
            strap_w,
            Paint::Fill,
            false,
        )?;
        set_rgb(cx, 245, 242, 235);
        cx.rectangle(
            x + shape_w - 0.03,
            y,
            template_len - 2.0 * shape_w + 0.06,
            strap_w,
        );
        cx.fill()?;

        // Outer contour: open variants at both ends, straight edges
        // between them.
        cx.set_source_rgb(0.0, 0.0, 0.0);
        end_shape(cx, design.end_shape, x, y, strap_w, Paint::Stroke, true)?;
        end_shape_mirrored(
            cx,
            design.end_shape,
            x + template_len,
            y,
            strap_w,
            Paint::Stroke,
            true,
        )?;
        line(cx, x + shape_w, y, x + template_len - shape_w, y)?;
        line(
            cx,
            x + shape_w,
            y + strap_w,
            x + template_len - shape_w,
            y + strap_w,
        )?;
    }

    // Center guideline
    set_rgb(cx, 150, 150, 200);
    cx.set_line_width(0.005);
    cx.set_dash(&GUIDE_DASH, 0.0);
    line(cx, x, y + strap_w / 2.0, x + template_len, y + strap_w / 2.0)?;
    cx.set_dash(&[], 0.0);

    // Fold line, dead center, directly over the buckle slot.
    set_rgb(cx, 200, 80, 80);
    cx.set_line_width(0.01);
    cx.set_dash(&GUIDE_DASH, 0.0);
    line(cx, center_x, y - 0.2, center_x, y + strap_w + 0.2)?;
    cx.set_dash(&[], 0.0);
    set_font(cx, 7.0, false);
    text(cx, "FOLD LINE", center_x, y - 0.3, HAlign::Center)?;

    // Buckle prong slot at true dimensions.
    let slot_w = specs.buckle_slot_width;
    let slot_h = specs.buckle_slot_length;
    let slot_top = y + strap_w / 2.0 - slot_h / 2.0;
    cx.set_line_width(0.015);
    rounded_rect(cx, center_x - slot_w / 2.0, slot_top, slot_w, slot_h, 0.02);
    cx.set_source_rgb(1.0, 1.0, 1.0);
    cx.fill_preserve()?;
    cx.set_source_rgb(0.0, 0.0, 0.0);
    cx.stroke()?;
    set_font(cx, 6.0, false);
    text(cx, "BUCKLE SLOT", center_x, slot_top - 0.15, HAlign::Center)?;
    text(
        cx,
        &format!("{} x {}", format_inches(slot_w), format_inches(slot_h)),
        center_x,
        slot_top + slot_h + 0.2,
        HAlign::Center,
    )?;

    // Stitch guides on both halves, stopping short of the fold line.
    let guides = layout::stitch_guides(template_len, strap_w);
    set_gray(cx, 100);
    cx.set_line_width(0.003);
    cx.set_dash(&[0.02, 0.06], 0.0);
    for row in guides.rows {
        line(cx, x + guides.left_span.0, y + row, x + guides.left_span.1, y + row)?;
        line(
            cx,
            x + guides.right_span.0,
            y + row,
            x + guides.right_span.1,
            y + row,
        )?;
    }
    cx.set_dash(&[], 0.0);

    // Rivet holes, four, symmetric about the fold line.
    let rivets = layout::rivet_positions(template_len, strap_w);
    cx.set_source_rgb(0.0, 0.0, 0.0);
    cx.set_line_width(0.01);
    for rivet in &rivets {
        circle(cx, x + rivet.x, y + rivet.y, 0.05);
        cx.stroke()?;
    }
    let rivet_label_y = y + strap_w * layout::RIVET_Y_FRACTIONS[0] - 0.1;
    set_font(cx, 4.0, false);
    set_gray(cx, 80);
    for fx in layout::RIVET_X_FRACTIONS {
        text(cx, "RIVET", x + template_len * fx, rivet_label_y, HAlign::Center)?;
    }

    // Alternative stitch columns between each rivet pair.
    set_rgb(cx, 100, 100, 200);
    cx.set_line_width(0.008);
    cx.set_dash(&[0.06, 0.04], 0.0);
    let rivet_top = y + strap_w * layout::RIVET_Y_FRACTIONS[0];
    let rivet_bottom = y + strap_w * layout::RIVET_Y_FRACTIONS[1];
    for fx in layout::RIVET_X_FRACTIONS {
        line(cx, x + template_len * fx, rivet_top, x + template_len * fx, rivet_bottom)?;
    }
    cx.set_dash(&[], 0.0);
    set_font(cx, 3.5, false);
    for fx in layout::RIVET_X_FRACTIONS {
        text(
            cx,
            "ALT STITCH",
            x + template_len * fx,
            rivet_bottom + 0.15,
            HAlign::Center,
        )?;
    }

    // Snap holes near each end, on the centerline.
    let snaps = layout::snap_positions(template_len, strap_w);
    cx.set_source_rgb(0.0, 0.0, 0.0);
    cx.set_line_width(0.01);
    for snap in &snaps {
        circle(cx, x + snap.x, y + snap.y, 0.06);
        cx.stroke()?;
    }
    set_font(cx, 4.0, false);
    set_gray(cx, 80);
    for snap in &snaps {
        text(cx, "SNAP", x + snap.x, y + snap.y - 0.12, HAlign::Center)?;
    }

    dimension_arrow(cx, x - 0.4, y, y + strap_w, &format_inches(strap_w))?;
    ruler(cx, x, y + strap_w + 0.5, template_len)?;

    Ok(())
}

/// Full-length sentence for the trailing notes block.
pub(crate) fn full_length_note(order: &BeltOrder, specs: &BeltSpecs) -> String {
    let design = &order.design;
    match design.buckle_attachment {
        BuckleAttachment::Integrated => format!(
            "Full belt length: {} (pant waist {} + {} buckle + {} holes + {} fold-back)",
            format_inches(order.total_length),
            format_inches(design.waist_size as f64),
            format_inches(specs.buckle_allowance),
            format_inches(specs.hole_allowance),
            format_inches(specs.integrated_fold_back),
        ),
        BuckleAttachment::Additional => format!(
            "Full belt length: {} (pant waist {} + {} buckle allowance + {} hole allowance)",
            format_inches(order.total_length),
            format_inches(design.waist_size as f64),
            format_inches(specs.buckle_allowance),
            format_inches(specs.hole_allowance),
        ),
    }
}
