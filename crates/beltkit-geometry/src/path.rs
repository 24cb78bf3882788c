//! Tip-contour path engine
//!
//! Parses the compact command sequences the tip contours are authored in
//! (`M/m`, `L/l`, `H/h`, `V/v`, `C/c`, `Z/z`) into a [`ParsedPath`]: one
//! absolute start point in target coordinates plus a list of purely
//! relative segments, every delta already multiplied by the caller's
//! scale. Replaying the segments from the start point under addition
//! reconstructs the contour exactly, so scale, translation, and mirroring
//! apply uniformly without re-deriving positions from a reference frame.
//!
//! The command set is closed and the contour data is authored in-crate,
//! so malformed or unsupported tokens are skipped rather than reported.
//! `Z`/`z` contributes no segment: a contour that needs a stroked or
//! filled closing edge carries it as an explicit trailing line command.

use crate::Point;

/// One relative drawing instruction, deltas already scaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Straight move by `(dx, dy)`.
    Line { dx: f64, dy: f64 },
    /// Cubic curve; control points and end point relative to the pen
    /// position before the segment.
    Cubic {
        dx1: f64,
        dy1: f64,
        dx2: f64,
        dy2: f64,
        dx3: f64,
        dy3: f64,
    },
}

/// A contour in target coordinates: an absolute start point and the
/// relative segments that follow it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPath {
    pub start: Point,
    pub segments: Vec<PathSegment>,
}

impl ParsedPath {
    /// Where the pen ends after replaying every segment.
    pub fn end_point(&self) -> Point {
        let mut x = self.start.x;
        let mut y = self.start.y;
        for seg in &self.segments {
            match *seg {
                PathSegment::Line { dx, dy } => {
                    x += dx;
                    y += dy;
                }
                PathSegment::Cubic { dx3, dy3, .. } => {
                    x += dx3;
                    y += dy3;
                }
            }
        }
        Point::new(x, y)
    }

    /// Mirror the contour horizontally so it grows leftward from
    /// `right_edge_x`.
    ///
    /// Every horizontal delta is negated and the start point is re-anchored
    /// as `right_edge_x - start.x`. The contour must have been parsed with
    /// `origin_x = 0` so the start offset is measured from the contour's
    /// own left edge.
    pub fn mirrored(&self, right_edge_x: f64) -> ParsedPath {
        ParsedPath {
            start: Point::new(right_edge_x - self.start.x, self.start.y),
            segments: self
                .segments
                .iter()
                .map(|seg| match *seg {
                    PathSegment::Line { dx, dy } => PathSegment::Line { dx: -dx, dy },
                    PathSegment::Cubic {
                        dx1,
                        dy1,
                        dx2,
                        dy2,
                        dx3,
                        dy3,
                    } => PathSegment::Cubic {
                        dx1: -dx1,
                        dy1,
                        dx2: -dx2,
                        dy2,
                        dx3: -dx3,
                        dy3,
                    },
                })
                .collect(),
        }
    }

    /// Re-emit as SVG path data: an absolute moveto followed by relative
    /// `l`/`c` commands. Both renderers draw from this one representation.
    pub fn to_svg_data(&self) -> String {
        use std::fmt::Write as _;

        let mut d = format!("M {} {}", self.start.x, self.start.y);
        for seg in &self.segments {
            match *seg {
                PathSegment::Line { dx, dy } => {
                    let _ = write!(d, " l {} {}", dx, dy);
                }
                PathSegment::Cubic {
                    dx1,
                    dy1,
                    dx2,
                    dy2,
                    dx3,
                    dy3,
                } => {
                    let _ = write!(d, " c {} {} {} {} {} {}", dx1, dy1, dx2, dy2, dx3, dy3);
                }
            }
        }
        d
    }
}

/// Parse a contour command sequence into target coordinates.
///
/// Source coordinates are multiplied by `scale`; the first moveto becomes
/// the start point `(x * scale + origin_x, y * scale + origin_y)`, the
/// only absolute point in the output. Absolute commands are converted to
/// deltas against the running pen position, so the output carries no other
/// trace of the source frame.
pub fn parse(data: &str, scale: f64, origin_x: f64, origin_y: f64) -> ParsedPath {
    let tokens = tokenize(data);
    let mut segments = Vec::new();

    // Pen position in the source frame, tracked only to convert absolute
    // commands into deltas.
    let mut cx = 0.0f64;
    let mut cy = 0.0f64;
    let mut start = Point::new(origin_x, origin_y);
    let mut started = false;

    let mut i = 0usize;
    while i < tokens.len() {
        let token = &tokens[i];
        if !is_command(token) {
            // Stray number or malformed token outside any argument run.
            i += 1;
            continue;
        }
        let cmd = token.chars().next().unwrap_or('?');
        i += 1;

        match cmd {
            'M' | 'm' => {
                let Some(x) = read_number(&tokens, &mut i) else {
                    continue;
                };
                let Some(y) = read_number(&tokens, &mut i) else {
                    continue;
                };
                // An initial relative moveto is absolute per the command
                // grammar; a later one just moves the pen.
                if cmd == 'm' && started {
                    cx += x;
                    cy += y;
                } else {
                    cx = x;
                    cy = y;
                }
                if !started {
                    start = Point::new(cx * scale + origin_x, cy * scale + origin_y);
                    started = true;
                }
                // Trailing pairs are implicit linetos.
                loop {
                    let Some(nx) = read_number(&tokens, &mut i) else {
                        break;
                    };
                    let Some(ny) = read_number(&tokens, &mut i) else {
                        break;
                    };
                    if cmd == 'm' {
                        segments.push(PathSegment::Line {
                            dx: nx * scale,
                            dy: ny * scale,
                        });
                        cx += nx;
                        cy += ny;
                    } else {
                        segments.push(PathSegment::Line {
                            dx: (nx - cx) * scale,
                            dy: (ny - cy) * scale,
                        });
                        cx = nx;
                        cy = ny;
                    }
                }
            }
            'L' => loop {
                let Some(nx) = read_number(&tokens, &mut i) else {
                    break;
                };
                let Some(ny) = read_number(&tokens, &mut i) else {
                    break;
                };
                segments.push(PathSegment::Line {
                    dx: (nx - cx) * scale,
                    dy: (ny - cy) * scale,
                });
                cx = nx;
                cy = ny;
            },
            'l' => loop {
                let Some(dx) = read_number(&tokens, &mut i) else {
                    break;
                };
                let Some(dy) = read_number(&tokens, &mut i) else {
                    break;
                };
                segments.push(PathSegment::Line {
                    dx: dx * scale,
                    dy: dy * scale,
                });
                cx += dx;
                cy += dy;
            },
            'H' => {
                while let Some(nx) = read_number(&tokens, &mut i) {
                    segments.push(PathSegment::Line {
                        dx: (nx - cx) * scale,
                        dy: 0.0,
                    });
                    cx = nx;
                }
            }
            'h' => {
                while let Some(dx) = read_number(&tokens, &mut i) {
                    segments.push(PathSegment::Line {
                        dx: dx * scale,
                        dy: 0.0,
                    });
                    cx += dx;
                }
            }
            'V' => {
                while let Some(ny) = read_number(&tokens, &mut i) {
                    segments.push(PathSegment::Line {
                        dx: 0.0,
                        dy: (ny - cy) * scale,
                    });
                    cy = ny;
                }
            }
            'v' => {
                while let Some(dy) = read_number(&tokens, &mut i) {
                    segments.push(PathSegment::Line {
                        dx: 0.0,
                        dy: dy * scale,
                    });
                    cy += dy;
                }
            }
            'C' => loop {
                let Some(x1) = read_number(&tokens, &mut i) else {
                    break;
                };
                let Some(y1) = read_number(&tokens, &mut i) else {
                    break;
                };
                let Some(x2) = read_number(&tokens, &mut i) else {
                    break;
                };
                let Some(y2) = read_number(&tokens, &mut i) else {
                    break;
                };
                let Some(x3) = read_number(&tokens, &mut i) else {
                    break;
                };
                let Some(y3) = read_number(&tokens, &mut i) else {
                    break;
                };
                segments.push(PathSegment::Cubic {
                    dx1: (x1 - cx) * scale,
                    dy1: (y1 - cy) * scale,
                    dx2: (x2 - cx) * scale,
                    dy2: (y2 - cy) * scale,
                    dx3: (x3 - cx) * scale,
                    dy3: (y3 - cy) * scale,
                });
                cx = x3;
                cy = y3;
            },
            'c' => loop {
                let Some(dx1) = read_number(&tokens, &mut i) else {
                    break;
                };
                let Some(dy1) = read_number(&tokens, &mut i) else {
                    break;
                };
                let Some(dx2) = read_number(&tokens, &mut i) else {
                    break;
                };
                let Some(dy2) = read_number(&tokens, &mut i) else {
                    break;
                };
                let Some(dx3) = read_number(&tokens, &mut i) else {
                    break;
                };
                let Some(dy3) = read_number(&tokens, &mut i) else {
                    break;
                };
                segments.push(PathSegment::Cubic {
                    dx1: dx1 * scale,
                    dy1: dy1 * scale,
                    dx2: dx2 * scale,
                    dy2: dy2 * scale,
                    dx3: dx3 * scale,
                    dy3: dy3 * scale,
                });
                cx += dx3;
                cy += dy3;
            },
            // Closing edges are authored explicitly; Z only marks the end.
            'Z' | 'z' => {}
            // Unsupported command: skip it, its arguments fall out above.
            _ => {}
        }
    }

    ParsedPath { start, segments }
}

fn is_command(token: &str) -> bool {
    token.len() == 1
        && matches!(
            token.chars().next(),
            Some(
                'M' | 'm'
                    | 'L'
                    | 'l'
                    | 'H'
                    | 'h'
                    | 'V'
                    | 'v'
                    | 'C'
                    | 'c'
                    | 'S'
                    | 's'
                    | 'Q'
                    | 'q'
                    | 'T'
                    | 't'
                    | 'A'
                    | 'a'
                    | 'Z'
                    | 'z'
            )
        )
}

/// Read one numeric argument, advancing past it. Returns `None` at a
/// command token, at end of input, or on a malformed token (which is
/// consumed and dropped).
fn read_number(tokens: &[String], i: &mut usize) -> Option<f64> {
    let token = tokens.get(*i)?;
    if is_command(token) {
        return None;
    }
    *i += 1;
    token.parse::<f64>().ok()
}

/// Tokenize command data into command letters and numeric strings.
///
/// Splits on commas/whitespace, isolates command letters, and starts a new
/// token where one number runs into the next: at a `+`/`-` sign
/// (`20.45-1.08` -> `20.45`, `-1.08`, exponent signs kept attached) and at
/// a second decimal point (`26.22.96` -> `26.22`, `.96`).
fn tokenize(data: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in data.chars() {
        match ch {
            'M' | 'm' | 'L' | 'l' | 'H' | 'h' | 'V' | 'v' | 'C' | 'c' | 'S' | 's' | 'Q' | 'q'
            | 'T' | 't' | 'A' | 'a' | 'Z' | 'z' => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                tokens.push(ch.to_string());
            }
            ' ' | ',' | '\n' | '\r' | '\t' => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            '-' | '+' => {
                if current.is_empty() {
                    current.push(ch);
                    continue;
                }
                if matches!(current.chars().last(), Some('e' | 'E')) {
                    current.push(ch);
                } else {
                    tokens.push(std::mem::take(&mut current));
                    current.push(ch);
                }
            }
            '.' => {
                if current.contains('.') {
                    tokens.push(std::mem::take(&mut current));
                }
                current.push(ch);
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_packed_numbers() {
        // Signs and second decimal points both start a new number.
        assert_eq!(
            tokenize("M1,2l-3.5.25-1-2"),
            vec!["M", "1", "2", "l", "-3.5", ".25", "-1", "-2"]
        );
        assert_eq!(tokenize("26.22.96,41.34"), vec!["26.22", ".96", "41.34"]);
    }

    #[test]
    fn test_packed_decimal_runs_parse() {
        // The packed form the authored contours use: `62.92.17` is the
        // pair (62.92, 0.17).
        let path = parse("M0,0l62.92.17", 1.0, 0.0, 0.0);
        assert_eq!(
            path.segments,
            vec![PathSegment::Line {
                dx: 62.92,
                dy: 0.17,
            }]
        );
    }

    #[test]
    fn test_start_point_transform() {
        let path = parse("M10,20l5,0", 2.0, 100.0, 50.0);
        assert_eq!(path.start, Point::new(120.0, 90.0));
        assert_eq!(path.segments, vec![PathSegment::Line { dx: 10.0, dy: 0.0 }]);
    }

    #[test]
    fn test_absolute_commands_become_deltas() {
        let path = parse("M10,10L13,14H10V10", 1.0, 0.0, 0.0);
        assert_eq!(
            path.segments,
            vec![
                PathSegment::Line { dx: 3.0, dy: 4.0 },
                PathSegment::Line { dx: -3.0, dy: 0.0 },
                PathSegment::Line { dx: 0.0, dy: -4.0 },
            ]
        );
        let end = path.end_point();
        assert_eq!((end.x, end.y), (10.0, 10.0));
    }

    #[test]
    fn test_cubic_deltas() {
        let path = parse("M0,0c1,2,3,4,5,6C6,8,7,9,8,10", 1.0, 0.0, 0.0);
        assert_eq!(
            path.segments,
            vec![
                PathSegment::Cubic {
                    dx1: 1.0,
                    dy1: 2.0,
                    dx2: 3.0,
                    dy2: 4.0,
                    dx3: 5.0,
                    dy3: 6.0,
                },
                PathSegment::Cubic {
                    dx1: 1.0,
                    dy1: 2.0,
                    dx2: 2.0,
                    dy2: 3.0,
                    dx3: 3.0,
                    dy3: 4.0,
                },
            ]
        );
    }

    #[test]
    fn test_implicit_linetos_after_moveto() {
        let path = parse("M1,1 2,2 4,2", 1.0, 0.0, 0.0);
        assert_eq!(
            path.segments,
            vec![
                PathSegment::Line { dx: 1.0, dy: 1.0 },
                PathSegment::Line { dx: 2.0, dy: 0.0 },
            ]
        );
    }

    #[test]
    fn test_z_is_a_no_op() {
        let with_z = parse("M0,0l10,0v5Z", 1.0, 0.0, 0.0);
        let without_z = parse("M0,0l10,0v5", 1.0, 0.0, 0.0);
        assert_eq!(with_z.segments, without_z.segments);
    }

    #[test]
    fn test_unknown_commands_skipped() {
        // Q and its arguments are dropped; the rest parses normally.
        let path = parse("M0,0l1,0Q9,9,9,9l0,1", 1.0, 0.0, 0.0);
        assert_eq!(
            path.segments,
            vec![
                PathSegment::Line { dx: 1.0, dy: 0.0 },
                PathSegment::Line { dx: 0.0, dy: 1.0 },
            ]
        );
    }

    #[test]
    fn test_scale_linearity() {
        let scaled = parse("M10,20l3,4c1,1,2,2,3,3", 4.0, 0.0, 0.0);
        let unit = parse("M10,20l3,4c1,1,2,2,3,3", 1.0, 0.0, 0.0);
        assert_eq!(scaled.start.x, unit.start.x * 4.0);
        assert_eq!(scaled.start.y, unit.start.y * 4.0);
        for (a, b) in scaled.segments.iter().zip(unit.segments.iter()) {
            match (a, b) {
                (PathSegment::Line { dx, dy }, PathSegment::Line { dx: udx, dy: udy }) => {
                    assert_eq!(*dx, udx * 4.0);
                    assert_eq!(*dy, udy * 4.0);
                }
                (
                    PathSegment::Cubic {
                        dx1,
                        dy1,
                        dx2,
                        dy2,
                        dx3,
                        dy3,
                    },
                    PathSegment::Cubic {
                        dx1: u1,
                        dy1: v1,
                        dx2: u2,
                        dy2: v2,
                        dx3: u3,
                        dy3: v3,
                    },
                ) => {
                    assert_eq!([*dx1, *dy1, *dx2, *dy2, *dx3, *dy3], [
                        u1 * 4.0,
                        v1 * 4.0,
                        u2 * 4.0,
                        v2 * 4.0,
                        u3 * 4.0,
                        v3 * 4.0
                    ]);
                }
                _ => panic!("segment kinds diverged"),
            }
        }
    }

    #[test]
    fn test_mirror_involution() {
        let path = parse("M104,77l-70,-1c-9,0,-17,-7,-22,-14l60,15", 1.0, 0.0, 0.0);
        let twice = path.mirrored(200.0).mirrored(200.0);
        assert_eq!(twice.segments, path.segments);
        assert_eq!(twice.start, path.start);
    }

    #[test]
    fn test_mirror_grows_leftward() {
        let path = parse("M0,0l10,0", 1.0, 0.0, 0.0);
        let mirrored = path.mirrored(50.0);
        assert_eq!(mirrored.start, Point::new(50.0, 0.0));
        assert_eq!(
            mirrored.segments,
            vec![PathSegment::Line { dx: -10.0, dy: 0.0 }]
        );
    }

    #[test]
    fn test_svg_data_round_trip() {
        let path = parse("M1,2l3,4c1,1,2,2,3,3", 1.0, 0.0, 0.0);
        let reparsed = parse(&path.to_svg_data(), 1.0, 0.0, 0.0);
        assert_eq!(reparsed, path);
    }
}
