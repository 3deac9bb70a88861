#![allow(non_snake_case)]

pub mod config;
pub mod preset;
pub mod tooltip;

pub use config::*;
pub use preset::*;
pub use tooltip::*;

/// Gauge defaults seeded by the server, shared with the demo page via Leptos context.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(default)]
pub struct GaugeSettings {
    pub primary: f64,
    pub secondary: Option<f64>,
    pub size: SizePreset,
    pub options: GaugeOptions,
    pub tile_arc: TileArcConfig,
    pub primary_arc: PrimaryArcConfig,
    pub secondary_arc: SecondaryArcConfig,
}

impl GaugeSettings {
    /// Values the demo page opens with when no config file says otherwise.
    pub fn demo() -> Self {
        Self {
            primary: 40.0,
            secondary: Some(35.0),
            options: GaugeOptions::default().with_inner_arc(true),
            ..Self::default()
        }
    }
}
