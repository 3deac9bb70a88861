use std::f64::consts::PI;

use serde::Serialize;

use crate::scale::{normalize, ANGLE_START};

/// Angular extent and fill state of one tile of the outer ring.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct TileGeometry {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Share of the tile covered by the current value, in `[0, 1]`.
    pub fill_ratio: f64,
    pub fill_end_angle: f64,
}

impl TileGeometry {
    pub fn is_filled(&self) -> bool {
        self.fill_ratio > 0.0
    }
}

/// Splits the half circle into `tile_count` equal wedges and fills them up
/// to `sum_normalized`.
///
/// Each tile stands for `threshold_red / tile_count` of the value domain.
pub fn layout_tiles(tile_count: usize, sum_normalized: f64, threshold_red: f64) -> Vec<TileGeometry> {
    let tileCount = tile_count.max(1);
    let tileSweep = PI / tileCount as f64;
    let tileValueRange = threshold_red / tileCount as f64;
    let rangeNormalized = normalize(tileValueRange, threshold_red);

    (0..tileCount)
        .map(|index| {
            let startAngle = ANGLE_START + index as f64 * tileSweep;
            let endAngle = startAngle + tileSweep;
            let minNormalized = normalize(index as f64 * tileValueRange, threshold_red);
            let fillRatio = if rangeNormalized > 0.0 {
                ((sum_normalized - minNormalized) / rangeNormalized).clamp(0.0, 1.0)
            } else {
                0.0
            };
            TileGeometry {
                index,
                start_angle: startAngle,
                end_angle: endAngle,
                fill_ratio: fillRatio,
                fill_end_angle: startAngle + fillRatio * (endAngle - startAngle),
            }
        })
        .collect()
}
