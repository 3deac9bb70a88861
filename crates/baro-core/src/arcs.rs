use serde::Serialize;

use crate::scale::{angle_scale, ANGLE_END, ANGLE_START};

/// Inner band radius as a fraction of the gauge radius.
pub const INNER_ARC_SCALE: f64 = 0.6;
/// Outer band radius (and inner edge of the tile ring) as a fraction of the gauge radius.
pub const OUTER_ARC_SCALE: f64 = 0.7;
/// Start offset keeping zero-length bands from collapsing onto the sweep start.
pub const ANGLE_OFFSET: f64 = 0.01;

#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct BandAngles {
    pub start: f64,
    pub end: f64,
}

/// Start/end angles of the primary and secondary value bands.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct InnerArcAngles {
    pub primary: BandAngles,
    pub secondary: BandAngles,
}

/// Computes both bands.
///
/// The secondary band covers `[0, primary + secondary]` and sits behind the
/// primary band; with `split_secondary` it starts where the primary ends
/// so the secondary share can be emphasised on its own. End angles never
/// pass the end of the sweep.
pub fn inner_arc_angles(primary_normalized: f64, secondary_normalized: f64, split_secondary: bool) -> InnerArcAngles {
    let sweepStart = ANGLE_START + ANGLE_OFFSET;
    let primaryEnd = angle_scale(primary_normalized).min(ANGLE_END);
    let sumEnd = angle_scale(primary_normalized + secondary_normalized).min(ANGLE_END);

    InnerArcAngles {
        primary: BandAngles {
            start: sweepStart,
            end: primaryEnd,
        },
        secondary: BandAngles {
            start: if split_secondary {
                angle_scale(primary_normalized)
            } else {
                sweepStart
            },
            end: sumEnd,
        },
    }
}
