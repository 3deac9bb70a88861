use std::f64::consts::FRAC_PI_2;

use serde::Serialize;

use crate::scale::angle_scale;

/// Base edge length of the arrowhead marker before pointer scaling.
const BASE_MARKER_SIZE: f64 = 10.0;
/// Line width of a pointer at `stroke_scale == 1`.
const BASE_STROKE_WIDTH: f64 = 3.0;

/// Pointer tip relative to the gauge centre.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
    /// Screen-space angle of the pointer line (0 points right, `-PI` left).
    pub angle: f64,
}

/// Places a pointer for `normalized_value` at `radius * length_factor` from the centre.
pub fn calculate_pointer(normalized_value: f64, radius: f64, length_factor: f64) -> PointerPosition {
    let angle = angle_scale(normalized_value) - FRAC_PI_2;
    PointerPosition {
        x: angle.cos() * radius * length_factor,
        y: angle.sin() * radius * length_factor,
        angle,
    }
}

/// Arrowhead dimensions for an SVG `<marker>`.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct PointerMarker {
    pub width: f64,
    pub height: f64,
    pub ref_x: f64,
    pub ref_y: f64,
}

impl PointerMarker {
    pub fn new(pointer_scale: f64) -> Self {
        let width = BASE_MARKER_SIZE * pointer_scale;
        let height = BASE_MARKER_SIZE * pointer_scale;
        Self {
            width,
            height,
            ref_x: width * 0.9,
            ref_y: height / 2.0,
        }
    }

    /// Triangle pointing along +x, as `points` for an SVG `<polygon>`.
    pub fn polygon_points(&self) -> String {
        format!(
            "0 0, {} {}, 0 {}",
            self.width,
            self.height / 2.0,
            self.height
        )
    }
}

/// Stroke width of a pointer line.
///
/// A caller that left `stroke_scale` at 1 gets the gauge's size scale
/// applied; an explicit stroke scale is used as given.
pub fn pointer_stroke_width(stroke_scale: f64, scale_factor: f64) -> f64 {
    let effective = if scale_factor == 1.0 || stroke_scale != 1.0 {
        stroke_scale
    } else {
        stroke_scale * scale_factor
    };
    BASE_STROKE_WIDTH * effective
}
