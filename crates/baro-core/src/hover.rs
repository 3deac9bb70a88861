use baro_types::{TooltipRow, TooltipState};
use serde::Serialize;

/// Opacity applied to everything that is not hovered while something else is.
pub const DIMMED_OPACITY: f64 = 0.5;

/// The region the pointer currently rests on.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub enum HoverTarget {
    #[default]
    None,
    Tile,
    PrimaryBar,
    SecondaryBar,
}

/// Kinds of drawn elements that take part in hover emphasis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    /// Unfilled tile backgrounds; never emphasised.
    Background,
    FilledTile,
    PrimaryBar,
    SecondaryBar,
}

impl ElementKind {
    fn emphasised_by(self) -> Option<HoverTarget> {
        match self {
            ElementKind::Background => None,
            ElementKind::FilledTile => Some(HoverTarget::Tile),
            ElementKind::PrimaryBar => Some(HoverTarget::PrimaryBar),
            ElementKind::SecondaryBar => Some(HoverTarget::SecondaryBar),
        }
    }
}

/// Opacity multiplier for `kind` given the hover state.
pub fn opacity(kind: ElementKind, hover: HoverTarget, enable_opacity_effect: bool) -> f64 {
    if !enable_opacity_effect || hover == HoverTarget::None {
        return 1.0;
    }
    if kind.emphasised_by() == Some(hover) {
        1.0
    } else {
        DIMMED_OPACITY
    }
}

/// Bounding box of the gauge element in client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClientRect {
    pub left: f64,
    pub top: f64,
}

/// Converts client coordinates into coordinates local to `rect`.
/// A rect that is not available yet counts as sitting at the origin.
pub fn relative_position(client_x: f64, client_y: f64, rect: Option<ClientRect>) -> (f64, f64) {
    let rect = rect.unwrap_or_default();
    (client_x - rect.left, client_y - rect.top)
}

/// Transient pointer state of one gauge instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GaugeInteraction {
    pub hover: HoverTarget,
    pub tooltip: Option<TooltipState>,
}

impl GaugeInteraction {
    pub fn enter(&mut self, target: HoverTarget, rows: Vec<TooltipRow>, x: f64, y: f64) {
        self.hover = target;
        self.tooltip = Some(TooltipState { rows, x, y });
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        if let Some(tooltip) = self.tooltip.as_mut() {
            tooltip.x = x;
            tooltip.y = y;
        }
    }

    /// Clears the state, unless another region was entered in the meantime.
    pub fn leave(&mut self, target: HoverTarget) {
        if self.hover == target {
            self.hover = HoverTarget::None;
            self.tooltip = None;
        }
    }

    pub fn is_hovered(&self, target: HoverTarget) -> bool {
        self.hover == target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [ElementKind; 4] = [
        ElementKind::Background,
        ElementKind::FilledTile,
        ElementKind::PrimaryBar,
        ElementKind::SecondaryBar,
    ];

    fn row(label: &str) -> TooltipRow {
        TooltipRow {
            label: label.into(),
            value: "1".into(),
            color: "#000".into(),
        }
    }

    #[test]
    fn disabled_effect_is_always_opaque() {
        for hover in [HoverTarget::None, HoverTarget::Tile, HoverTarget::PrimaryBar] {
            for kind in ALL_KINDS {
                assert_eq!(opacity(kind, hover, false), 1.0);
            }
        }
    }

    #[test]
    fn hovered_element_stays_opaque_and_others_dim() {
        let hover = HoverTarget::PrimaryBar;
        assert_eq!(opacity(ElementKind::PrimaryBar, hover, true), 1.0);
        assert_eq!(opacity(ElementKind::SecondaryBar, hover, true), 0.5);
        assert_eq!(opacity(ElementKind::FilledTile, hover, true), 0.5);
        assert_eq!(opacity(ElementKind::Background, hover, true), 0.5);
    }

    #[test]
    fn nothing_hovered_is_fully_opaque() {
        for kind in ALL_KINDS {
            assert_eq!(opacity(kind, HoverTarget::None, true), 1.0);
        }
    }

    #[test]
    fn missing_rect_counts_as_origin() {
        assert_eq!(relative_position(30.0, 40.0, None), (30.0, 40.0));
        let rect = ClientRect { left: 10.0, top: 15.0 };
        assert_eq!(relative_position(30.0, 40.0, Some(rect)), (20.0, 25.0));
    }

    #[test]
    fn enter_move_leave_cycle() {
        let mut state = GaugeInteraction::default();
        state.move_to(1.0, 1.0);
        assert!(state.tooltip.is_none());

        state.enter(HoverTarget::Tile, vec![row("Total:")], 5.0, 6.0);
        assert!(state.is_hovered(HoverTarget::Tile));
        state.move_to(7.0, 8.0);
        let tooltip = state.tooltip.clone().unwrap();
        assert_eq!((tooltip.x, tooltip.y), (7.0, 8.0));

        state.leave(HoverTarget::Tile);
        assert_eq!(state, GaugeInteraction::default());
    }

    #[test]
    fn stale_leave_does_not_clear_newer_hover() {
        let mut state = GaugeInteraction::default();
        state.enter(HoverTarget::Tile, vec![row("Total:")], 0.0, 0.0);
        state.enter(HoverTarget::PrimaryBar, vec![row("Primary:")], 0.0, 0.0);
        state.leave(HoverTarget::Tile);
        assert!(state.is_hovered(HoverTarget::PrimaryBar));
        assert_eq!(state.tooltip.unwrap().rows[0].label, "Primary:");
    }
}
