use serde::{Deserialize, Serialize};

/// One line of the hover tooltip.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TooltipRow {
    pub label: String,
    /// Already formatted for display.
    pub value: String,
    pub color: String,
}

/// Tooltip content plus its position relative to the gauge's top-left corner.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TooltipState {
    pub rows: Vec<TooltipRow>,
    pub x: f64,
    pub y: f64,
}
