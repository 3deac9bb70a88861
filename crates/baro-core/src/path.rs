//! Annular sector paths.
//!
//! Angles follow the d3-shape convention used across the gauge: radians,
//! 0 at 12 o'clock, increasing clockwise. Padding and corner rounding match
//! d3's `arc()` generator so shapes line up with charts drawn elsewhere.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt::Write;

use baro_types::ArcShape;

const EPSILON: f64 = 1e-12;
const PATH_EPSILON: f64 = 1e-6;

/// Geometry of one annular sector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSpec {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub shape: ArcShape,
}

impl ArcSpec {
    pub fn new(inner_radius: f64, outer_radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
            shape: ArcShape {
                corner_radius: 0.0,
                pad_angle: 0.0,
                pad_radius: 0.0,
            },
        }
    }

    pub fn with_shape(mut self, shape: ArcShape) -> Self {
        self.shape = shape;
        self
    }

    /// Corner rounding only, no padding.
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.shape.corner_radius = corner_radius;
        self
    }
}

/// Minimal SVG path writer with a canvas-style `arc` command.
#[derive(Debug, Default)]
struct PathBuilder {
    data: String,
    current: Option<(f64, f64)>,
}

impl PathBuilder {
    fn move_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.data, "M{x},{y}");
        self.current = Some((x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.data, "L{x},{y}");
        self.current = Some((x, y));
    }

    fn close(&mut self) {
        if self.current.is_some() {
            self.data.push('Z');
        }
    }

    /// Circular arc around `(cx, cy)` from `a0` to `a1` (screen angles).
    fn arc(&mut self, cx: f64, cy: f64, r: f64, a0: f64, a1: f64, ccw: bool) {
        let x0 = cx + r * a0.cos();
        let y0 = cy + r * a0.sin();
        let sweep = if ccw { 0 } else { 1 };
        let mut da = if ccw { a0 - a1 } else { a1 - a0 };

        match self.current {
            None => self.move_to(x0, y0),
            Some((x, y)) => {
                if (x - x0).abs() > PATH_EPSILON || (y - y0).abs() > PATH_EPSILON {
                    self.line_to(x0, y0);
                }
            }
        }

        if r == 0.0 {
            return;
        }
        if da < 0.0 {
            da = da % TAU + TAU;
        }

        if da > TAU - PATH_EPSILON {
            // full circle: two half arcs through the opposite point
            let xm = cx - r * a0.cos();
            let ym = cy - r * a0.sin();
            let _ = write!(
                self.data,
                "A{r},{r},0,1,{sweep},{xm},{ym}A{r},{r},0,1,{sweep},{x0},{y0}"
            );
            self.current = Some((x0, y0));
        } else if da > PATH_EPSILON {
            let large = if da >= PI { 1 } else { 0 };
            let x1 = cx + r * a1.cos();
            let y1 = cy + r * a1.sin();
            let _ = write!(self.data, "A{r},{r},0,{large},{sweep},{x1},{y1}");
            self.current = Some((x1, y1));
        }
    }

    fn finish(self) -> String {
        self.data
    }
}

struct CornerTangent {
    cx: f64,
    cy: f64,
    x01: f64,
    y01: f64,
    x11: f64,
    y11: f64,
}

/// Centre of the rounding circle of radius `rc` tangent to the line
/// `(x0,y0)-(x1,y1)` and to the circle of radius `r1`, plus both tangent points.
fn corner_tangents(x0: f64, y0: f64, x1: f64, y1: f64, r1: f64, rc: f64, cw: bool) -> CornerTangent {
    let x01 = x0 - x1;
    let y01 = y0 - y1;
    let lo = (if cw { rc } else { -rc }) / (x01 * x01 + y01 * y01).sqrt();
    let ox = lo * y01;
    let oy = -lo * x01;
    let x11 = x0 + ox;
    let y11 = y0 + oy;
    let x10 = x1 + ox;
    let y10 = y1 + oy;
    let x00 = (x11 + x10) / 2.0;
    let y00 = (y11 + y10) / 2.0;
    let dx = x10 - x11;
    let dy = y10 - y11;
    let d2 = dx * dx + dy * dy;
    let r = r1 - rc;
    let cross = x11 * y10 - x10 * y11;
    let d = (if dy < 0.0 { -1.0 } else { 1.0 }) * (r * r * d2 - cross * cross).max(0.0).sqrt();
    let mut cx0 = (cross * dy - dx * d) / d2;
    let mut cy0 = (-cross * dx - dy * d) / d2;
    let cx1 = (cross * dy + dx * d) / d2;
    let cy1 = (-cross * dx + dy * d) / d2;
    let dx0 = cx0 - x00;
    let dy0 = cy0 - y00;
    let dx1 = cx1 - x00;
    let dy1 = cy1 - y00;

    if dx0 * dx0 + dy0 * dy0 > dx1 * dx1 + dy1 * dy1 {
        cx0 = cx1;
        cy0 = cy1;
    }

    CornerTangent {
        cx: cx0,
        cy: cy0,
        x01: -ox,
        y01: -oy,
        x11: cx0 * (r1 / r - 1.0),
        y11: cy0 * (r1 / r - 1.0),
    }
}

/// Intersection of line `p0-p1` with line `p2-p3`, `None` when parallel.
#[allow(clippy::too_many_arguments)]
fn intersect(x0: f64, y0: f64, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Option<(f64, f64)> {
    let x10 = x1 - x0;
    let y10 = y1 - y0;
    let x32 = x3 - x2;
    let y32 = y3 - y2;
    let t = y32 * x10 - x32 * y10;
    if t * t < EPSILON {
        return None;
    }
    let t = (x32 * (y0 - y2) - y32 * (x0 - x2)) / t;
    Some((x0 + t * x10, y0 + t * y10))
}

/// Renders `spec` as SVG path data centred on the origin.
pub fn arc_path(spec: &ArcSpec) -> String {
    let mut path = PathBuilder::default();
    let (mut r0, mut r1) = (spec.inner_radius, spec.outer_radius);
    if r1 < r0 {
        std::mem::swap(&mut r0, &mut r1);
    }
    let a0 = spec.start_angle - FRAC_PI_2;
    let a1 = spec.end_angle - FRAC_PI_2;
    let da = (a1 - a0).abs();
    let cw = a1 > a0;

    if !(r1 > EPSILON) {
        path.move_to(0.0, 0.0);
    } else if da > TAU - EPSILON {
        path.move_to(r1 * a0.cos(), r1 * a0.sin());
        path.arc(0.0, 0.0, r1, a0, a1, !cw);
        if r0 > EPSILON {
            path.move_to(r0 * a1.cos(), r0 * a1.sin());
            path.arc(0.0, 0.0, r0, a1, a0, cw);
        }
    } else {
        annular_sector(&mut path, spec, r0, r1, a0, a1, da, cw);
    }

    path.close();
    path.finish()
}

#[allow(clippy::too_many_arguments)]
fn annular_sector(path: &mut PathBuilder, spec: &ArcSpec, r0: f64, r1: f64, a0: f64, a1: f64, da: f64, cw: bool) {
    let mut a01 = a0;
    let mut a11 = a1;
    let mut a00 = a0;
    let mut a10 = a1;
    let mut da0 = da;
    let mut da1 = da;
    let ap = spec.shape.pad_angle / 2.0;
    let rp = if ap > EPSILON {
        if spec.shape.pad_radius != 0.0 {
            spec.shape.pad_radius
        } else {
            (r0 * r0 + r1 * r1).sqrt()
        }
    } else {
        0.0
    };
    let rc = ((r1 - r0).abs() / 2.0).min(spec.shape.corner_radius);
    let mut rc0 = rc;
    let mut rc1 = rc;

    if rp > EPSILON {
        let direction = if cw { 1.0 } else { -1.0 };
        let mut p0 = asin(rp / r0 * ap.sin());
        let mut p1 = asin(rp / r1 * ap.sin());
        da0 -= p0 * 2.0;
        if da0 > EPSILON {
            p0 *= direction;
            a00 += p0;
            a10 -= p0;
        } else {
            da0 = 0.0;
            a00 = (a0 + a1) / 2.0;
            a10 = a00;
        }
        da1 -= p1 * 2.0;
        if da1 > EPSILON {
            p1 *= direction;
            a01 += p1;
            a11 -= p1;
        } else {
            da1 = 0.0;
            a01 = (a0 + a1) / 2.0;
            a11 = a01;
        }
    }

    let x01 = r1 * a01.cos();
    let y01 = r1 * a01.sin();
    let x10 = r0 * a10.cos();
    let y10 = r0 * a10.sin();
    let x11 = r1 * a11.cos();
    let y11 = r1 * a11.sin();
    let x00 = r0 * a00.cos();
    let y00 = r0 * a00.sin();

    // thin sectors cannot fit the full corner radius
    if rc > EPSILON && da < PI {
        match intersect(x01, y01, x00, y00, x11, y11, x10, y10) {
            Some((ocx, ocy)) => {
                let ax = x01 - ocx;
                let ay = y01 - ocy;
                let bx = x11 - ocx;
                let by = y11 - ocy;
                let cosine = (ax * bx + ay * by) / ((ax * ax + ay * ay).sqrt() * (bx * bx + by * by).sqrt());
                let kc = 1.0 / (acos(cosine) / 2.0).sin();
                let lc = (ocx * ocx + ocy * ocy).sqrt();
                rc0 = rc.min((r0 - lc) / (kc - 1.0));
                rc1 = rc.min((r1 - lc) / (kc + 1.0));
            }
            None => {
                rc0 = 0.0;
                rc1 = 0.0;
            }
        }
    }

    // outer ring
    if !(da1 > EPSILON) {
        path.move_to(x01, y01);
    } else if rc1 > EPSILON {
        let t0 = corner_tangents(x00, y00, x01, y01, r1, rc1, cw);
        let t1 = corner_tangents(x11, y11, x10, y10, r1, rc1, cw);
        path.move_to(t0.cx + t0.x01, t0.cy + t0.y01);
        if rc1 < rc {
            path.arc(t0.cx, t0.cy, rc1, t0.y01.atan2(t0.x01), t1.y01.atan2(t1.x01), !cw);
        } else {
            path.arc(t0.cx, t0.cy, rc1, t0.y01.atan2(t0.x01), t0.y11.atan2(t0.x11), !cw);
            path.arc(
                0.0,
                0.0,
                r1,
                (t0.cy + t0.y11).atan2(t0.cx + t0.x11),
                (t1.cy + t1.y11).atan2(t1.cx + t1.x11),
                !cw,
            );
            path.arc(t1.cx, t1.cy, rc1, t1.y11.atan2(t1.x11), t1.y01.atan2(t1.x01), !cw);
        }
    } else {
        path.move_to(x01, y01);
        path.arc(0.0, 0.0, r1, a01, a11, !cw);
    }

    // inner ring, walked backwards
    if !(r0 > EPSILON) || !(da0 > EPSILON) {
        path.line_to(x10, y10);
    } else if rc0 > EPSILON {
        let t0 = corner_tangents(x10, y10, x11, y11, r0, -rc0, cw);
        let t1 = corner_tangents(x01, y01, x00, y00, r0, -rc0, cw);
        path.line_to(t0.cx + t0.x01, t0.cy + t0.y01);
        if rc0 < rc {
            path.arc(t0.cx, t0.cy, rc0, t0.y01.atan2(t0.x01), t1.y01.atan2(t1.x01), !cw);
        } else {
            path.arc(t0.cx, t0.cy, rc0, t0.y01.atan2(t0.x01), t0.y11.atan2(t0.x11), !cw);
            path.arc(
                0.0,
                0.0,
                r0,
                (t0.cy + t0.y11).atan2(t0.cx + t0.x11),
                (t1.cy + t1.y11).atan2(t1.cx + t1.x11),
                cw,
            );
            path.arc(t1.cx, t1.cy, rc0, t1.y11.atan2(t1.x11), t1.y01.atan2(t1.x01), !cw);
        }
    } else {
        path.arc(0.0, 0.0, r0, a10, a00, cw);
    }
}

fn asin(x: f64) -> f64 {
    if x >= 1.0 {
        FRAC_PI_2
    } else if x <= -1.0 {
        -FRAC_PI_2
    } else {
        x.asin()
    }
}

fn acos(x: f64) -> f64 {
    if x > 1.0 {
        0.0
    } else if x < -1.0 {
        PI
    } else {
        x.acos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(path: &str) -> Vec<f64> {
        path.split(|c: char| c.is_ascii_alphabetic() || c == ',')
            .filter(|s| !s.is_empty())
            .map(|s| s.parse().unwrap())
            .collect()
    }

    #[test]
    fn plain_half_ring_starts_on_the_left() {
        let d = arc_path(&ArcSpec::new(70.0, 100.0, -FRAC_PI_2, FRAC_PI_2));
        assert!(d.starts_with("M-100,"));
        assert!(d.ends_with('Z'));
        // outer arc sweeps clockwise, inner arc comes back counter-clockwise
        assert!(d.contains("A100,100,0,1,1,"));
        assert!(d.contains("A70,70,0,1,0,"));
    }

    #[test]
    fn quarter_ring_endpoints() {
        let d = arc_path(&ArcSpec::new(50.0, 100.0, 0.0, FRAC_PI_2));
        let values = numbers(&d);
        // M x,y on top of the outer circle
        assert!(values[0].abs() < 1e-9);
        assert!((values[1] + 100.0).abs() < 1e-9);
        assert!(d.contains("A100,100,0,0,1,100,"));
    }

    #[test]
    fn zero_sweep_is_still_a_closed_path() {
        let d = arc_path(&ArcSpec::new(70.0, 100.0, 0.3, 0.3));
        assert!(d.starts_with('M'));
        assert!(d.ends_with('Z'));
        assert!(!d.contains("NaN"));
    }

    #[test]
    fn corner_radius_adds_rounding_arcs() {
        let plain = arc_path(&ArcSpec::new(70.0, 100.0, -1.0, 1.0));
        let rounded = arc_path(&ArcSpec::new(70.0, 100.0, -1.0, 1.0).with_corner_radius(5.0));
        assert_eq!(plain.matches('A').count(), 2);
        assert_eq!(rounded.matches('A').count(), 6);
        assert!(rounded.contains("A5,5,0,0,"));
    }

    #[test]
    fn padding_pulls_the_ends_inwards() {
        let spec = ArcSpec::new(70.0, 100.0, -FRAC_PI_2, 0.0);
        let padded = spec.with_shape(ArcShape {
            corner_radius: 0.0,
            pad_angle: 0.1,
            pad_radius: 100.0,
        });
        let start = numbers(&arc_path(&spec));
        let startPadded = numbers(&arc_path(&padded));
        // padded sector begins above the horizontal axis
        assert!(start[1].abs() < 1e-9);
        assert!(startPadded[1] < -1.0);
        assert!(!arc_path(&padded).contains("NaN"));
    }

    #[test]
    fn tiny_sector_with_large_padding_collapses_cleanly() {
        let d = arc_path(&ArcSpec::new(70.0, 100.0, 0.0, 0.01).with_shape(ArcShape {
            corner_radius: 5.0,
            pad_angle: 2.0,
            pad_radius: 2.0,
        }));
        assert!(!d.contains("NaN"));
        assert!(d.ends_with('Z'));
    }

    #[test]
    fn swapped_radii_are_normalised() {
        assert_eq!(
            arc_path(&ArcSpec::new(100.0, 70.0, -1.0, 1.0)),
            arc_path(&ArcSpec::new(70.0, 100.0, -1.0, 1.0))
        );
    }
}
