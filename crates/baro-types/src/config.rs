use serde::{Deserialize, Serialize};

/// Corner rounding and padding applied to every sector of one arc group.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ArcShape {
    pub corner_radius: f64,
    /// Total padding angle in radians, split evenly between both ends.
    pub pad_angle: f64,
    pub pad_radius: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PointerConfig {
    pub scale: f64,
    pub stroke_scale: f64,
    pub color: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TileFillStyle {
    Filled,
    Dotted,
    Dashed,
    Outlined,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GradientType {
    /// One colour scale evaluated at the overall value, shared by all tiles.
    Full,
    /// A separate two-stop gradient per tile.
    Tile,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// General gauge behaviour: thresholds, feature switches and tick styling.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GaugeOptions {
    pub threshold_yellow: f64,
    pub threshold_red: f64,
    pub with_opacity_switch: bool,
    pub enable_inner_arc: bool,
    pub enable_tooltip: bool,
    pub enable_unit_ticks: bool,
    /// Hub radius as a tenth of the gauge radius.
    pub circle_scale: f64,
    /// CSS font size for tick labels; `None` scales `1rem` with the gauge width.
    pub tick_font_size: Option<String>,
    pub tick_label_color: String,
    pub tick_color: String,
    pub font_color: String,
    pub tick_radius_scale: f64,
    pub tooltip_bg_color: Rgba,
}

/// Largest tile count the ring is drawn with.
pub const MAX_TILES: usize = 360;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TileArcConfig {
    /// Number of tiles; clamped to `1..=MAX_TILES` when rendered.
    pub tiles: i32,
    pub color_tile_threshold_yellow: String,
    pub color_tile_threshold_red: String,
    pub color_tile_threshold_default: String,
    pub is_tile_color_gradient: bool,
    pub gradient_type: GradientType,
    pub color_tile_bg: String,
    pub fill_style: TileFillStyle,
    pub border_color: String,
    pub border_thickness: f64,
    /// Distance between tick labels in value units; 0 puts one tick on every tile edge.
    pub tick_every_nth_step: f64,
    pub arc_shape: ArcShape,
    pub tooltip_label: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PrimaryArcConfig {
    pub color_primary_bar: String,
    pub pointer: PointerConfig,
    pub arc_shape: ArcShape,
    pub tooltip_label: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SecondaryArcConfig {
    pub color_secondary_bar: String,
    /// Pointer marking the primary + secondary sum.
    pub pointer: PointerConfig,
    pub arc_shape: ArcShape,
    pub tooltip_label: String,
}

impl Default for ArcShape {
    fn default() -> Self {
        Self {
            corner_radius: 5.0,
            pad_angle: 0.0,
            pad_radius: 0.0,
        }
    }
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            stroke_scale: 1.0,
            color: "#025bff".into(),
        }
    }
}

impl Default for TileFillStyle {
    fn default() -> Self {
        TileFillStyle::Filled
    }
}

impl Default for GradientType {
    fn default() -> Self {
        GradientType::Tile
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0.8,
        }
    }
}

impl Default for GaugeOptions {
    fn default() -> Self {
        Self {
            threshold_yellow: 60.0,
            threshold_red: 80.0,
            with_opacity_switch: true,
            enable_inner_arc: false,
            enable_tooltip: true,
            enable_unit_ticks: true,
            circle_scale: 0.5,
            tick_font_size: Some("1rem".into()),
            tick_label_color: "#fff".into(),
            tick_color: "#000".into(),
            font_color: "#fff".into(),
            tick_radius_scale: 1.15,
            tooltip_bg_color: Rgba::default(),
        }
    }
}

impl Default for TileArcConfig {
    fn default() -> Self {
        Self {
            tiles: 10,
            color_tile_threshold_yellow: "#ffff00".into(),
            color_tile_threshold_red: "#ff0c4d".into(),
            color_tile_threshold_default: "#00ff00".into(),
            is_tile_color_gradient: false,
            gradient_type: GradientType::default(),
            color_tile_bg: "#ddd".into(),
            fill_style: TileFillStyle::default(),
            border_color: "#000".into(),
            border_thickness: 1.0,
            tick_every_nth_step: 0.0,
            arc_shape: ArcShape {
                corner_radius: 5.0,
                pad_angle: 2.0,
                pad_radius: 2.0,
            },
            tooltip_label: "Total".into(),
        }
    }
}

impl Default for PrimaryArcConfig {
    fn default() -> Self {
        Self {
            color_primary_bar: "#000".into(),
            pointer: PointerConfig::default(),
            arc_shape: ArcShape::default(),
            tooltip_label: "Primary".into(),
        }
    }
}

impl Default for SecondaryArcConfig {
    fn default() -> Self {
        Self {
            color_secondary_bar: "#aaa".into(),
            pointer: PointerConfig {
                color: "#0ed30e".into(),
                ..PointerConfig::default()
            },
            arc_shape: ArcShape::default(),
            tooltip_label: "Secondary".into(),
        }
    }
}

impl GaugeOptions {
    pub fn with_thresholds(mut self, yellow: f64, red: f64) -> Self {
        self.threshold_yellow = yellow;
        self.threshold_red = red;
        self
    }

    pub fn with_inner_arc(mut self, enabled: bool) -> Self {
        self.enable_inner_arc = enabled;
        self
    }

    pub fn with_opacity_switch(mut self, enabled: bool) -> Self {
        self.with_opacity_switch = enabled;
        self
    }

    pub fn with_tooltip(mut self, enabled: bool) -> Self {
        self.enable_tooltip = enabled;
        self
    }

    pub fn with_unit_ticks(mut self, enabled: bool) -> Self {
        self.enable_unit_ticks = enabled;
        self
    }
}

impl TileArcConfig {
    pub fn with_tiles(mut self, tiles: i32) -> Self {
        self.tiles = tiles;
        self
    }

    /// Switches gradient colouring on with the given flavour.
    pub fn with_gradient(mut self, gradientType: GradientType) -> Self {
        self.is_tile_color_gradient = true;
        self.gradient_type = gradientType;
        self
    }

    pub fn with_fill_style(mut self, fillStyle: TileFillStyle) -> Self {
        self.fill_style = fillStyle;
        self
    }

    pub fn with_tick_step(mut self, step: f64) -> Self {
        self.tick_every_nth_step = step;
        self
    }

    /// Tile count clamped to `1..=MAX_TILES`.
    pub fn tile_count(&self) -> usize {
        if self.tiles <= 0 {
            1
        } else {
            (self.tiles as usize).min(MAX_TILES)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let parsed: TileArcConfig = toml::from_str(
            r##"
            tiles = 4
            color_tile_bg = "#222"
            fill_style = "dashed"

            [arc_shape]
            pad_angle = 0.5
            "##,
        )
        .unwrap();

        assert_eq!(parsed.tiles, 4);
        assert_eq!(parsed.color_tile_bg, "#222");
        assert_eq!(parsed.fill_style, TileFillStyle::Dashed);
        assert_eq!(parsed.arc_shape.pad_angle, 0.5);
        assert_eq!(parsed.arc_shape.corner_radius, 5.0);
        assert_eq!(parsed.color_tile_threshold_red, "#ff0c4d");
        assert_eq!(parsed.tooltip_label, "Total");
    }

    #[test]
    fn tile_count_never_drops_below_one() {
        assert_eq!(TileArcConfig::default().with_tiles(0).tile_count(), 1);
        assert_eq!(TileArcConfig::default().with_tiles(-3).tile_count(), 1);
        assert_eq!(TileArcConfig::default().with_tiles(12).tile_count(), 12);
    }

    #[test]
    fn tile_count_is_capped() {
        assert_eq!(TileArcConfig::default().with_tiles(i32::MAX).tile_count(), MAX_TILES);
        assert_eq!(TileArcConfig::default().with_tiles(360).tile_count(), 360);
    }

    #[test]
    fn secondary_pointer_defaults_to_green() {
        let secondary = SecondaryArcConfig::default();
        assert_eq!(secondary.pointer.color, "#0ed30e");
        assert_eq!(PrimaryArcConfig::default().pointer.color, "#025bff");
    }

    #[test]
    fn tooltip_background_renders_as_css() {
        assert_eq!(Rgba::default().to_css(), "rgba(0, 0, 0, 0.8)");
    }
}
