use std::f64::consts::{FRAC_PI_2, PI};

/// Angle of the left end of the half circle (d3 convention: 0 is 12 o'clock, clockwise).
pub const ANGLE_START: f64 = -FRAC_PI_2;
/// Angle of the right end of the half circle.
pub const ANGLE_END: f64 = FRAC_PI_2;

/// Maps `value` onto `[0, 1]` relative to `threshold_max`.
///
/// Values above the threshold saturate at 1 and negative values at 0. A
/// threshold that is not a positive finite number yields 0 instead of
/// dividing by zero.
pub fn normalize(value: f64, threshold_max: f64) -> f64 {
    if !(threshold_max.is_finite() && threshold_max > 0.0) {
        return 0.0;
    }
    let ratio = value / threshold_max;
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.clamp(0.0, 1.0)
}

/// Linear map from `[0, 1]` to `[ANGLE_START, ANGLE_END]`. Not clamped.
pub fn angle_scale(normalized: f64) -> f64 {
    ANGLE_START + normalized * (ANGLE_END - ANGLE_START)
}

/// Converts a gauge angle into a point on a circle of `radius` around the origin.
///
/// SVG y grows downwards, so `-PI/2` lands on the left and `0` on top.
pub fn polar(angle: f64, radius: f64) -> (f64, f64) {
    let screenAngle = angle - PI / 2.0;
    (screenAngle.cos() * radius, screenAngle.sin() * radius)
}
