//! Page 1: order summary
//!
//! Portrait page, not to scale. Everything the maker and the customer need
//! to read: the business block, the customer, the full specification table
//! with the length formula spelled out, and an illustrative belt drawing
//! built from the same contour engine as the templates.

use cairo::Context;

use beltkit_core::units::format_inches;
use beltkit_core::{leather_color, BeltOrder, BeltSpecs, BuckleShape, RenderError, BUSINESS};
use beltkit_geometry::{layout, profiles};

use crate::draw::{
    circle, end_shape, line, rounded_rect, section_header, set_font, set_gray, set_hex, set_rgb,
    table, text, wrap_text, HAlign, Paint,
};
use crate::Result;

const PAGE_W: f64 = 11.0;
const MARGIN: f64 = 1.0;

pub(crate) fn draw(cx: &Context, order: &BeltOrder, specs: &BeltSpecs) -> Result<()> {
    let design = &order.design;
    let color = leather_color(&design.color_id).ok_or_else(|| RenderError::UnknownColor {
        id: design.color_id.clone(),
    })?;

    let content_w = PAGE_W - MARGIN * 2.0;
    let right_x = PAGE_W - MARGIN;
    let mut y = MARGIN;

    // Business header
    set_font(cx, 24.0, true);
    cx.set_source_rgb(0.0, 0.0, 0.0);
    text(cx, BUSINESS.name, MARGIN, y + 0.25, HAlign::Left)?;
    set_font(cx, 10.0, false);
    set_gray(cx, 120);
    text(cx, BUSINESS.tagline, MARGIN, y + 0.55, HAlign::Left)?;
    set_font(cx, 9.0, false);
    text(cx, BUSINESS.phone, right_x, y + 0.1, HAlign::Right)?;
    text(cx, BUSINESS.email, right_x, y + 0.28, HAlign::Right)?;
    text(cx, BUSINESS.website, right_x, y + 0.46, HAlign::Right)?;
    text(cx, BUSINESS.address, right_x, y + 0.64, HAlign::Right)?;

    y += 0.9;
    set_gray(cx, 200);
    cx.set_line_width(0.01);
    line(cx, MARGIN, y, right_x, y)?;
    y += 0.4;

    // Order identity
    cx.set_source_rgb(0.0, 0.0, 0.0);
    set_font(cx, 16.0, true);
    text(cx, "Order Confirmation", MARGIN, y, HAlign::Left)?;
    set_font(cx, 11.0, false);
    text(
        cx,
        &format!("Order #: {}", order.order_number),
        right_x,
        y,
        HAlign::Right,
    )?;
    y += 0.25;
    set_font(cx, 9.0, false);
    set_gray(cx, 100);
    text(cx, &format!("Date: {}", order.date), right_x, y, HAlign::Right)?;
    y += 0.5;

    // Customer details
    cx.set_source_rgb(0.0, 0.0, 0.0);
    section_header(cx, "Customer Details", MARGIN, y)?;
    y += 0.4;
    let dash_if_empty = |s: &str| {
        if s.trim().is_empty() {
            "\u{2014}".to_string()
        } else {
            s.to_string()
        }
    };
    y = table(
        cx,
        &[
            ("Name", dash_if_empty(&order.customer.name)),
            ("Phone", dash_if_empty(&order.customer.phone)),
            ("Email", dash_if_empty(&order.customer.email)),
        ],
        MARGIN,
        y,
        content_w,
    )?;
    y += 0.4;

    // Belt specifications
    section_header(cx, "Belt Specifications", MARGIN, y)?;
    y += 0.4;
    let mut spec_rows = vec![
        ("Pant Waist Size", format_inches(design.waist_size as f64)),
        (
            "Actual Waist Size",
            design
                .actual_waist_size
                .map(|v| format_inches(v as f64))
                .unwrap_or_else(|| "Not provided".to_string()),
        ),
        ("Total Belt Length", length_breakdown(order, specs)),
        ("Belt Width", format_inches(design.width.inches())),
        ("Leather Color", color.name.to_string()),
        ("End Shape", design.end_shape.label().to_string()),
        ("Buckle Shape", design.buckle_shape.label().to_string()),
        ("Buckle Material", design.buckle_material.label().to_string()),
        (
            "Buckle Attachment",
            design.buckle_attachment.label().to_string(),
        ),
        (
            "First Hole from Tip",
            format_inches(specs.first_hole_from_tip),
        ),
        (
            "Hole Spacing",
            format!(
                "{} ({} holes)",
                format_inches(specs.hole_spacing),
                specs.hole_count
            ),
        ),
    ];
    if let Some(price) = order.price {
        spec_rows.push(("Quoted Price", format!("${:.2}", price)));
    }
    y = table(cx, &spec_rows, MARGIN, y, content_w)?;
    y += 0.4;

    // Illustration (not to scale)
    section_header(cx, "Belt Design (Not to Scale)", MARGIN, y)?;
    y += 0.5;
    draw_illustration(cx, order, specs, color.hex, MARGIN, y, content_w)?;
    y += 1.4;

    // Customer notes
    if !order.customer.notes.trim().is_empty() {
        section_header(cx, "Special Notes", MARGIN, y)?;
        y += 0.4;
        set_font(cx, 10.0, false);
        let lines = wrap_text(cx, &order.customer.notes, content_w - 0.2)?;
        set_rgb(cx, 248, 248, 248);
        rounded_rect(
            cx,
            MARGIN,
            y - 0.1,
            content_w,
            lines.len() as f64 * 0.2 + 0.3,
            0.05,
        );
        cx.fill()?;
        cx.set_source_rgb(0.0, 0.0, 0.0);
        let mut line_y = y + 0.1;
        for note_line in &lines {
            text(cx, note_line, MARGIN + 0.15, line_y, HAlign::Left)?;
            line_y += 0.2;
        }
        y += lines.len() as f64 * 0.2 + 0.5;
    }

    // Lead time
    cx.set_source_rgb(0.0, 0.0, 0.0);
    section_header(cx, "Estimated Completion", MARGIN, y)?;
    y += 0.35;
    set_font(cx, 12.0, true);
    text(cx, BUSINESS.lead_time, MARGIN, y, HAlign::Left)?;

    // Footer
    let footer_y = 16.3;
    set_gray(cx, 200);
    cx.set_line_width(0.01);
    line(cx, MARGIN, footer_y, right_x, footer_y)?;
    set_font(cx, 8.0, false);
    set_gray(cx, 150);
    text(
        cx,
        &format!(
            "{} | {} | {}",
            BUSINESS.name, BUSINESS.phone, BUSINESS.email
        ),
        PAGE_W / 2.0,
        footer_y + 0.25,
        HAlign::Center,
    )?;
    text(
        cx,
        "Thank you for your custom order!",
        PAGE_W / 2.0,
        footer_y + 0.45,
        HAlign::Center,
    )?;

    Ok(())
}

/// The total length with its derivation spelled out in words.
pub(crate) fn length_breakdown(order: &BeltOrder, specs: &BeltSpecs) -> String {
    let design = &order.design;
    let base = format!(
        "{} (waist {} + {} buckle + {} holes",
        format_inches(order.total_length),
        format_inches(design.waist_size as f64),
        format_inches(specs.buckle_allowance),
        format_inches(specs.hole_allowance),
    );
    match design.buckle_attachment {
        beltkit_core::BuckleAttachment::Integrated => format!(
            "{} + {} fold-back)",
            base,
            format_inches(specs.integrated_fold_back)
        ),
        beltkit_core::BuckleAttachment::Additional => format!("{})", base),
    }
}

/// The not-to-scale belt drawing: same fill-then-outer-stroke sequence as
/// the 1:1 templates, at an arbitrary illustrative strap height.
fn draw_illustration(
    cx: &Context,
    order: &BeltOrder,
    specs: &BeltSpecs,
    leather_hex: &str,
    x: f64,
    y: f64,
    width: f64,
) -> Result<()> {
    let design = &order.design;
    let strap_h = 0.6;
    let shape_w = profiles::contour_width(strap_h);

    // Fill the tip contour and the trailing body as one seamless region.
    set_hex(cx, leather_hex);
    end_shape(cx, design.end_shape, x, y, strap_h, Paint::Fill, false)?;
    set_hex(cx, leather_hex);
    cx.rectangle(x + shape_w - 0.02, y, width - shape_w + 0.02, strap_h);
    cx.fill()?;

    // Stroke only the outer contour: open tip variant plus the straight
    // strap edges.
    cx.set_source_rgb(0.0, 0.0, 0.0);
    cx.set_line_width(0.01);
    end_shape(cx, design.end_shape, x, y, strap_h, Paint::Stroke, true)?;
    line(cx, x + shape_w, y, x + width, y)?;
    line(cx, x + shape_w, y + strap_h, x + width, y + strap_h)?;

    // Buckle glyph at the strap's right end.
    let buckle_x = x + width;
    let buckle_w = 0.4;
    let buckle_h = strap_h + 0.2;
    let buckle_y = y - 0.1;
    cx.set_line_width(0.015);
    match design.buckle_shape {
        BuckleShape::Square => cx.rectangle(buckle_x, buckle_y, buckle_w, buckle_h),
        BuckleShape::Round => rounded_rect(cx, buckle_x, buckle_y, buckle_w, buckle_h, 0.12),
    }
    cx.set_source_rgb(1.0, 1.0, 1.0);
    cx.fill_preserve()?;
    set_gray(cx, 80);
    cx.stroke()?;
    line(
        cx,
        buckle_x + buckle_w / 2.0,
        buckle_y + 0.05,
        buckle_x + buckle_w / 2.0,
        buckle_y + buckle_h - 0.05,
    )?;

    // Hole markers, white on the leather fill.
    let units_per_inch = width / order.total_length;
    cx.set_source_rgb(1.0, 1.0, 1.0);
    for inches in layout::hole_positions(specs) {
        circle(cx, x + inches * units_per_inch, y + strap_h / 2.0, 0.04);
        cx.fill()?;
    }

    // Labels under the strap.
    set_font(cx, 7.0, false);
    set_gray(cx, 100);
    let label_y = y + strap_h + 0.2;
    let first_hole_x = x + specs.first_hole_from_tip * units_per_inch;
    text(
        cx,
        &format!("{} to first hole", format_inches(specs.first_hole_from_tip)),
        first_hole_x,
        label_y,
        HAlign::Center,
    )?;
    text(
        cx,
        &format!("Total: {}", format_inches(order.total_length)),
        x + width / 2.0,
        label_y + 0.2,
        HAlign::Center,
    )?;

    Ok(())
}
