//! Authored tip contours
//!
//! The four tip profiles are traced from the shop's paper reference
//! drawings and normalized into a 105x78 frame; the drawable content spans
//! y=1..77 (height 76), so a strap of width `w` uses the uniform scale
//! `w / CONTENT_HEIGHT` and the drawn contour is `NOMINAL_WIDTH * scale`
//! long.
//!
//! Each profile carries two command sequences. The closed sequence ends
//! with an explicit vertical closing edge (`v76`/`v75`) and is used for
//! fills and clip regions. The open sequence is the same data with that
//! trailing edge omitted, used to stroke the contour so it flows into the
//! adjoining straight strap edges without a seam. The open segment list is
//! always a strict prefix of the closed one.

use beltkit_core::EndShape;

/// Width of the normalized contour frame.
pub const NOMINAL_WIDTH: f64 = 105.0;

/// Height of the normalized contour frame.
pub const NOMINAL_HEIGHT: f64 = 78.0;

/// Height of the drawable contour content within the frame.
pub const CONTENT_HEIGHT: f64 = 76.0;

/// Top edge of the contour content within the frame.
pub const CONTENT_TOP: f64 = 1.0;

/// One tip profile: authored contour data plus its buckle-template
/// proportions.
#[derive(Debug, Clone, Copy)]
pub struct TipProfile {
    /// Contour with the explicit closing edge, for fills and clips.
    pub closed: &'static str,
    /// Contour without the closing edge, for seamless strokes.
    pub open: &'static str,
    /// Buckle-template length per inch of strap width, measured off the
    /// reference drawing for this tip shape.
    pub template_aspect: f64,
}

static ROUND: TipProfile = TipProfile {
    closed: "M104.26,77.17l-73.96-1.28c-9.23-.16-17.3-7.14-22.49-14.38C-.94,49.29-1.08,33.37,6.38,20.45,13.32,8.43,26.22.96,41.34,1l62.92.17v76Z",
    open: "M104.26,77.17l-73.96-1.28c-9.23-.16-17.3-7.14-22.49-14.38C-.94,49.29-1.08,33.37,6.38,20.45,13.32,8.43,26.22.96,41.34,1l62.92.17",
    template_aspect: 293.0 / 99.0,
};

static SQUARE: TipProfile = TipProfile {
    closed: "M104.11,77l-91.5-.09c-6.14,0-10.67-4.95-10.93-10.93-.86-19.06-.88-37.76-.15-56.99.14-3.61,1.8-7.75,6.06-7.76l96.52-.24v76Z",
    open: "M104.11,77l-91.5-.09c-6.14,0-10.67-4.95-10.93-10.93-.86-19.06-.88-37.76-.15-56.99.14-3.61,1.8-7.75,6.06-7.76l96.52-.24",
    template_aspect: 293.0 / 98.5,
};

static SQUARE_TAPER: TipProfile = TipProfile {
    closed: "M104,76.36c-11.68,1.54-24,1.02-36.18-1.68l-57.94-12.83c-5.3-1.17-8.24-5.32-8.43-10.44-.35-9.91-.66-18.88-.28-28.92.1-2.76,4.88-6.01,7.69-6.69C29.11,10.96,48.52,5.97,69.1,2.39c11.78-2.05,23.56-1.3,34.9-1.03v75Z",
    open: "M104,76.36c-11.68,1.54-24,1.02-36.18-1.68l-57.94-12.83c-5.3-1.17-8.24-5.32-8.43-10.44-.35-9.91-.66-18.88-.28-28.92.1-2.76,4.88-6.01,7.69-6.69C29.11,10.96,48.52,5.97,69.1,2.39c11.78-2.05,23.56-1.3,34.9-1.03",
    template_aspect: 313.0 / 98.4,
};

static SPEAR: TipProfile = TipProfile {
    closed: "M104.16,76.02h-33.6c-6.8,0-13.56-.95-20.09-2.83l-8.69-2.51C30.97,67.57,1.03,52.37,1,41.5c0-3,1.44-6.49,3.85-8.83C21.78,16.21,42.71,5.78,66.14,1.88l38.03-.86v75Z",
    open: "M104.16,76.02h-33.6c-6.8,0-13.56-.95-20.09-2.83l-8.69-2.51C30.97,67.57,1.03,52.37,1,41.5c0-3,1.44-6.49,3.85-8.83C21.78,16.21,42.71,5.78,66.14,1.88l38.03-.86",
    template_aspect: 332.0 / 99.0,
};

/// Profile for a tip shape.
pub fn profile(shape: EndShape) -> &'static TipProfile {
    match shape {
        EndShape::Round => &ROUND,
        EndShape::Square => &SQUARE,
        EndShape::SquareTaper => &SQUARE_TAPER,
        EndShape::Spear => &SPEAR,
    }
}

/// Uniform scale mapping contour units onto a strap of the given width
/// (width in the renderer's own units).
pub fn contour_scale(strap_width: f64) -> f64 {
    strap_width / CONTENT_HEIGHT
}

/// Drawn length of the tip contour for a strap of the given width.
pub fn contour_width(strap_width: f64) -> f64 {
    NOMINAL_WIDTH * contour_scale(strap_width)
}

/// Y origin to hand the parser so the contour content (which starts at
/// y = CONTENT_TOP in the source frame) lands exactly on `top_y`.
pub fn contour_origin_y(top_y: f64, scale: f64) -> f64 {
    top_y - CONTENT_TOP * scale
}
