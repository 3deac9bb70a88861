#![allow(non_snake_case)]

//! Geometry, colour and interaction model of the barometer gauge.
//!
//! Everything here is plain data and pure functions; `baro-ui` maps a
//! [`GaugeScene`] onto SVG.

pub mod arcs;
pub mod color;
pub mod hover;
pub mod layout;
pub mod path;
pub mod pointer;
pub mod scale;
pub mod scene;
pub mod ticks;
pub mod tiles;
pub mod tooltip;

pub use arcs::{inner_arc_angles, BandAngles, InnerArcAngles};
pub use color::{color_selector, tile_color, tile_gradients, ColorError, ColorScale, Rgb, TileGradient};
pub use hover::{opacity, relative_position, ClientRect, ElementKind, GaugeInteraction, HoverTarget};
pub use layout::GaugeLayout;
pub use path::{arc_path, ArcSpec};
pub use pointer::{calculate_pointer, PointerMarker, PointerPosition};
pub use scale::{angle_scale, normalize};
pub use scene::{GaugeInput, GaugeScene, InnerArcsView, NormalizedValues, PathView, PointerView, TickLabelsView, TileView};
pub use ticks::{layout_ticks, tick_values, TickMark};
pub use tiles::{layout_tiles, TileGeometry};
pub use tooltip::{format_value, Formatters, TooltipContext, ValueFormatter};
