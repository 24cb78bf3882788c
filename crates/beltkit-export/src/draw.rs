//! Shared cairo drawing helpers
//!
//! The document is drawn in an inch coordinate space (the context is
//! scaled by 72 once, at surface creation), so every position and line
//! width below is in inches. Font sizes are still specified in points and
//! converted through [`PT`].

use cairo::{Context, FontSlant, FontWeight};

use beltkit_core::EndShape;
use beltkit_geometry::{parse, profiles, ParsedPath, PathSegment};

use crate::Result;

/// Points to inches.
pub(crate) const PT: f64 = 1.0 / 72.0;

/// How to paint a traced region. Fills and strokes are separate passes
/// throughout the document (fill everything, then stroke only the outer
/// contour), so there is no combined mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Paint {
    Fill,
    Stroke,
}

pub(crate) fn paint_current_path(cx: &Context, paint: Paint) -> Result<()> {
    match paint {
        Paint::Fill => cx.fill()?,
        Paint::Stroke => cx.stroke()?,
    }
    Ok(())
}

/// Replay a parsed contour into the current path.
pub(crate) fn trace_contour(cx: &Context, path: &ParsedPath, close: bool) {
    cx.move_to(path.start.x, path.start.y);
    for seg in &path.segments {
        match *seg {
            PathSegment::Line { dx, dy } => cx.rel_line_to(dx, dy),
            PathSegment::Cubic {
                dx1,
                dy1,
                dx2,
                dy2,
                dx3,
                dy3,
            } => cx.rel_curve_to(dx1, dy1, dx2, dy2, dx3, dy3),
        }
    }
    if close {
        cx.close_path();
    }
}

/// Draw a tip contour with its left edge at `x` and content top at `y`,
/// scaled so the contour spans `strap_width` inches of strap. With
/// `outline` the open variant is used (no closing edge), for strokes that
/// must continue into the strap's straight edges. Returns the x of the
/// contour's right edge.
pub(crate) fn end_shape(
    cx: &Context,
    shape: EndShape,
    x: f64,
    y: f64,
    strap_width: f64,
    paint: Paint,
    outline: bool,
) -> Result<f64> {
    let profile = profiles::profile(shape);
    let data = if outline { profile.open } else { profile.closed };
    let scale = profiles::contour_scale(strap_width);
    let parsed = parse(data, scale, x, profiles::contour_origin_y(y, scale));
    if parsed.segments.len() < 2 {
        return Ok(x);
    }
    trace_contour(cx, &parsed, !outline);
    paint_current_path(cx, paint)?;
    Ok(x + profiles::contour_width(strap_width))
}

/// Draw a tip contour mirrored to point right, anchored at `right_edge_x`.
/// Returns the x of the mirrored contour's left edge.
pub(crate) fn end_shape_mirrored(
    cx: &Context,
    shape: EndShape,
    right_edge_x: f64,
    y: f64,
    strap_width: f64,
    paint: Paint,
    outline: bool,
) -> Result<f64> {
    let profile = profiles::profile(shape);
    let data = if outline { profile.open } else { profile.closed };
    let scale = profiles::contour_scale(strap_width);
    // Parse against x origin 0 so the mirror anchor math sees offsets from
    // the contour's own left edge.
    let parsed = parse(data, scale, 0.0, profiles::contour_origin_y(y, scale));
    if parsed.segments.len() < 2 {
        return Ok(right_edge_x);
    }
    let mirrored = parsed.mirrored(right_edge_x);
    trace_contour(cx, &mirrored, !outline);
    paint_current_path(cx, paint)?;
    Ok(right_edge_x - profiles::contour_width(strap_width))
}

/// Horizontal text alignment relative to the given x.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HAlign {
    Left,
    Center,
    Right,
}

/// Show text at `(x, y)` (y is the baseline) with the given alignment.
pub(crate) fn text(cx: &Context, s: &str, x: f64, y: f64, align: HAlign) -> Result<()> {
    let frac = match align {
        HAlign::Left => 0.0,
        HAlign::Center => 0.5,
        HAlign::Right => 1.0,
    };
    if frac > 0.0 {
        let extents = cx.text_extents(s)?;
        cx.move_to(x - frac * (extents.width() + 2.0 * extents.x_bearing()), y);
    } else {
        cx.move_to(x, y);
    }
    cx.show_text(s)?;
    Ok(())
}

/// Show text rotated 90 degrees counter-clockwise around `(x, y)`.
pub(crate) fn text_rotated(cx: &Context, s: &str, x: f64, y: f64, align: HAlign) -> Result<()> {
    cx.save()?;
    cx.translate(x, y);
    cx.rotate(-std::f64::consts::FRAC_PI_2);
    text(cx, s, 0.0, 0.0, align)?;
    cx.restore()?;
    Ok(())
}

/// Select the document face at a point size.
pub(crate) fn set_font(cx: &Context, size_pt: f64, bold: bool) {
    let weight = if bold {
        FontWeight::Bold
    } else {
        FontWeight::Normal
    };
    cx.select_font_face("Helvetica", FontSlant::Normal, weight);
    cx.set_font_size(size_pt * PT);
}

/// Grayscale source color from a 0..=255 level.
pub(crate) fn set_gray(cx: &Context, level: u8) {
    let v = level as f64 / 255.0;
    cx.set_source_rgb(v, v, v);
}

/// Source color from 0..=255 channels.
pub(crate) fn set_rgb(cx: &Context, r: u8, g: u8, b: u8) {
    cx.set_source_rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
}

/// Parse a `#rrggbb` catalog color. Catalog data is authored in-crate;
/// anything unparsable comes out black rather than failing the export.
pub(crate) fn set_hex(cx: &Context, hex: &str) {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    cx.set_source_rgb(channel_of(hex, 0), channel_of(hex, 2), channel_of(hex, 4));
}

fn channel_of(hex: &str, i: usize) -> f64 {
    hex.get(i..i + 2)
        .and_then(|s| u8::from_str_radix(s, 16).ok())
        .unwrap_or(0) as f64
        / 255.0
}

/// Stroke a straight line segment.
pub(crate) fn line(cx: &Context, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<()> {
    cx.move_to(x1, y1);
    cx.line_to(x2, y2);
    cx.stroke()?;
    Ok(())
}

/// Trace a circle as a fresh subpath.
pub(crate) fn circle(cx: &Context, x: f64, y: f64, r: f64) {
    cx.new_sub_path();
    cx.arc(x, y, r, 0.0, std::f64::consts::TAU);
}

/// Trace a rounded rectangle as a fresh subpath.
pub(crate) fn rounded_rect(cx: &Context, x: f64, y: f64, w: f64, h: f64, r: f64) {
    use std::f64::consts::{FRAC_PI_2, PI};
    let r = r.min(w / 2.0).min(h / 2.0);
    cx.new_sub_path();
    cx.arc(x + w - r, y + r, r, -FRAC_PI_2, 0.0);
    cx.arc(x + w - r, y + h - r, r, 0.0, FRAC_PI_2);
    cx.arc(x + r, y + h - r, r, FRAC_PI_2, PI);
    cx.arc(x + r, y + r, r, PI, PI + FRAC_PI_2);
    cx.close_path();
}

/// Inch ruler: baseline with a tick and numeric label at every inch,
/// larger ticks and labels every 5 inches.
pub(crate) fn ruler(cx: &Context, x: f64, y: f64, length: f64) -> Result<()> {
    cx.set_source_rgb(0.0, 0.0, 0.0);
    cx.set_line_width(0.005);
    line(cx, x, y, x + length, y)?;
    let mut inch = 0u32;
    while inch as f64 <= length {
        let tx = x + inch as f64;
        let is_major = inch % 5 == 0;
        line(cx, tx, y, tx, y + if is_major { 0.15 } else { 0.08 })?;
        set_font(cx, if is_major { 7.0 } else { 5.0 }, false);
        text(cx, &inch.to_string(), tx, y + 0.25, HAlign::Center)?;
        inch += 1;
    }
    Ok(())
}

/// Vertical dimension arrow with a rotated label, marking a width.
pub(crate) fn dimension_arrow(
    cx: &Context,
    x: f64,
    y_top: f64,
    y_bottom: f64,
    label: &str,
) -> Result<()> {
    let mid = y_top + (y_bottom - y_top) / 2.0;
    set_font(cx, 7.0, true);
    cx.set_source_rgb(0.0, 0.0, 0.0);
    text_rotated(cx, label, x - 0.15, mid + 0.03, HAlign::Center)?;
    cx.set_line_width(0.005);
    line(cx, x, y_top, x, y_bottom)?;
    line(cx, x - 0.04, y_top + 0.06, x, y_top)?;
    line(cx, x + 0.04, y_top + 0.06, x, y_top)?;
    line(cx, x - 0.04, y_bottom - 0.06, x, y_bottom)?;
    line(cx, x + 0.04, y_bottom - 0.06, x, y_bottom)?;
    Ok(())
}

/// Small gray section heading, as used on the summary page.
pub(crate) fn section_header(cx: &Context, s: &str, x: f64, y: f64) -> Result<()> {
    set_font(cx, 11.0, true);
    set_gray(cx, 60);
    text(cx, s, x, y, HAlign::Left)?;
    cx.set_source_rgb(0.0, 0.0, 0.0);
    Ok(())
}

/// Greedy word wrap against the current font.
pub(crate) fn wrap_text(cx: &Context, s: &str, max_width: f64) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in s.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if cx.text_extents(&candidate)?.width() > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    Ok(lines)
}

/// Zebra-striped label/value table. Returns the y below the last row.
pub(crate) fn table(cx: &Context, rows: &[(&str, String)], x: f64, y: f64, width: f64) -> Result<f64> {
    const ROW_H: f64 = 0.3;
    const LABEL_W: f64 = 1.8;

    for (i, (label, value)) in rows.iter().enumerate() {
        let row_y = y + i as f64 * ROW_H;
        if i % 2 == 0 {
            set_rgb(cx, 248, 248, 248);
            cx.rectangle(x, row_y - 0.08, width, ROW_H);
            cx.fill()?;
        }
        set_font(cx, 9.0, true);
        set_gray(cx, 80);
        text(cx, label, x + 0.15, row_y + 0.1, HAlign::Left)?;
        set_font(cx, 9.0, false);
        cx.set_source_rgb(0.0, 0.0, 0.0);
        let mut line_y = row_y + 0.1;
        for value_line in wrap_text(cx, value, width - LABEL_W - 0.3)? {
            text(cx, &value_line, x + LABEL_W, line_y, HAlign::Left)?;
            line_y += 0.16;
        }
    }

    Ok(y + rows.len() as f64 * ROW_H)
}
