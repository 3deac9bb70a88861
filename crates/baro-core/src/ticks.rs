use serde::Serialize;

use crate::scale::{angle_scale, polar};

/// Upper bound on the number of ticks; finer steps are widened to fit.
pub const MAX_TICKS: usize = 1000;

/// Values at which tick labels are drawn: `0, step, 2*step, ...` up to `threshold_red + 1`.
///
/// A step of 0 places one tick on every tile boundary. Returns nothing when
/// the threshold or step is not a positive finite number. Never yields more
/// than [`MAX_TICKS`] values.
pub fn tick_values(threshold_red: f64, tile_count: usize, step: f64) -> Vec<f64> {
    let step = if step == 0.0 {
        threshold_red / tile_count.max(1) as f64
    } else {
        step
    };
    if !(threshold_red.is_finite() && threshold_red > 0.0 && step.is_finite() && step > 0.0) {
        return Vec::new();
    }
    let stop = threshold_red + 1.0;
    let step = step.max(stop / MAX_TICKS as f64);
    let count = ((stop / step).ceil().max(0.0) as usize).min(MAX_TICKS);
    (0..count).map(|i| i as f64 * step).collect()
}

/// Tick line from the rim outwards plus the label anchor at its outer end.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TickMark {
    pub value: f64,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub label: String,
}

/// Lays out ticks for `values`; `format_label` receives the rounded value.
pub fn layout_ticks(
    values: &[f64],
    threshold_red: f64,
    radius: f64,
    radius_scale: f64,
    format_label: impl Fn(f64) -> String,
) -> Vec<TickMark> {
    let labelRadius = radius * radius_scale;
    values
        .iter()
        .map(|&value| {
            let angle = angle_scale(value / threshold_red);
            let (x1, y1) = polar(angle, radius);
            let (x2, y2) = polar(angle, labelRadius);
            TickMark {
                value,
                x1,
                y1,
                x2,
                y2,
                label: format_label(value.round()),
            }
        })
        .collect()
}
