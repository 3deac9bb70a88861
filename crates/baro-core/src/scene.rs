use baro_types::{
    ArcShape, GaugeOptions, GaugeSettings, PrimaryArcConfig, SecondaryArcConfig, SizePreset, TileArcConfig,
    TileFillStyle, TooltipRow,
};
use serde::Serialize;
use tracing::debug;

use crate::arcs::{inner_arc_angles, ANGLE_OFFSET, INNER_ARC_SCALE, OUTER_ARC_SCALE};
use crate::color::{tile_color, tile_gradients, ColorScale, TileGradient};
use crate::hover::{opacity, ElementKind, HoverTarget};
use crate::layout::GaugeLayout;
use crate::path::{arc_path, ArcSpec};
use crate::pointer::{calculate_pointer, pointer_stroke_width, PointerMarker};
use crate::scale::{angle_scale, normalize, ANGLE_END, ANGLE_START};
use crate::ticks::{layout_ticks, tick_values, TickMark};
use crate::tiles::{layout_tiles, TileGeometry};
use crate::tooltip::{Formatters, TooltipContext};

/// Inner edge of the transparent region that reports tile-ring hovers.
pub const HOVER_DETECTION_SCALE: f64 = 0.72;
/// Emphasis band radii relative to the inner arc band.
pub const HOVER_INNER_SCALE: f64 = 0.92;
pub const HOVER_OUTER_SCALE: f64 = 1.07;
/// Growth of the filled tiles while the ring is hovered, before size scaling.
pub const HOVER_OFFSET_INNER: f64 = 15.0;
pub const HOVER_OFFSET_OUTER: f64 = 10.0;

const STROKE_WIDTH_THIN: f64 = 0.5;
const STROKE_WIDTH_NORMAL: f64 = 1.0;
const DOTTED_STROKE_PATTERN: &str = "1,3";
const DASHED_STROKE_PATTERN: &str = "5,5";
const PRIMARY_POINTER_LENGTH: f64 = 0.7;
const SUM_POINTER_LENGTH: f64 = 0.85;

/// Everything a caller supplies to draw one gauge.
#[derive(Clone, Debug, Default)]
pub struct GaugeInput {
    pub primary: f64,
    pub secondary: Option<f64>,
    pub size: SizePreset,
    pub options: GaugeOptions,
    pub tile_arc: TileArcConfig,
    pub primary_arc: PrimaryArcConfig,
    pub secondary_arc: SecondaryArcConfig,
    pub formatters: Formatters,
}

impl GaugeInput {
    pub fn new(primary: f64) -> Self {
        Self {
            primary,
            ..Self::default()
        }
    }

    pub fn from_settings(settings: &GaugeSettings, formatters: Formatters) -> Self {
        Self {
            primary: settings.primary,
            secondary: settings.secondary,
            size: settings.size,
            options: settings.options.clone(),
            tile_arc: settings.tile_arc.clone(),
            primary_arc: settings.primary_arc.clone(),
            secondary_arc: settings.secondary_arc.clone(),
            formatters,
        }
    }

    pub fn with_secondary(mut self, secondary: f64) -> Self {
        self.secondary = Some(secondary);
        self
    }

    pub fn with_size(mut self, size: SizePreset) -> Self {
        self.size = size;
        self
    }

    pub fn with_options(mut self, options: GaugeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_tile_arc(mut self, tileArc: TileArcConfig) -> Self {
        self.tile_arc = tileArc;
        self
    }

    pub fn with_formatters(mut self, formatters: Formatters) -> Self {
        self.formatters = formatters;
        self
    }

    pub fn sum(&self) -> f64 {
        self.primary + self.secondary.unwrap_or(0.0)
    }

    pub fn tooltip_context(&self) -> TooltipContext<'_> {
        TooltipContext {
            primary: self.primary,
            secondary: self.secondary,
            options: &self.options,
            tile_arc: &self.tile_arc,
            primary_arc: &self.primary_arc,
            secondary_arc: &self.secondary_arc,
        }
    }

    /// Tooltip rows for hovering `target`; empty for [`HoverTarget::None`].
    pub fn tooltip_rows(&self, target: HoverTarget) -> Vec<TooltipRow> {
        let context = self.tooltip_context();
        match target {
            HoverTarget::None => Vec::new(),
            HoverTarget::Tile => context.tile_rows(&self.formatters),
            HoverTarget::PrimaryBar => context.primary_rows(&self.formatters),
            HoverTarget::SecondaryBar => context.secondary_rows(&self.formatters),
        }
    }
}

/// Input values mapped onto the red threshold.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct NormalizedValues {
    pub primary: f64,
    pub secondary: f64,
    pub sum: f64,
    pub yellow: f64,
}

impl NormalizedValues {
    pub fn from_input(input: &GaugeInput) -> Self {
        let red = input.options.threshold_red;
        Self {
            primary: normalize(input.primary, red),
            secondary: normalize(input.secondary.unwrap_or(0.0), red),
            sum: normalize(input.sum(), red),
            yellow: normalize(input.options.threshold_yellow, red),
        }
    }
}

/// One `<path>` with its presentation attributes.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PathView {
    pub d: String,
    pub fill: String,
    pub stroke: Option<String>,
    pub stroke_width: f64,
    pub stroke_dasharray: Option<String>,
    pub opacity: f64,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TileView {
    pub geometry: TileGeometry,
    pub background: PathView,
    /// Absent while the tile is empty.
    pub fill: Option<PathView>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct InnerArcsView {
    pub primary: PathView,
    pub secondary: PathView,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PointerView {
    /// Suffix of the arrowhead marker id.
    pub marker_id: &'static str,
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub stroke_width: f64,
    pub marker: PointerMarker,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TickLabelsView {
    pub marks: Vec<TickMark>,
    pub font_size: String,
    pub label_color: String,
    pub tick_color: String,
}

/// Every drawable of a gauge for one hover state, in paint order.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct GaugeScene {
    pub layout: GaugeLayout,
    pub normalized: NormalizedValues,
    pub gradients: Vec<TileGradient>,
    pub inner_arcs: Option<InnerArcsView>,
    pub tiles: Vec<TileView>,
    /// Transparent ring that reports tile hovers.
    pub tile_hover_region: String,
    pub pointers: Vec<PointerView>,
    pub hub_radius: f64,
    /// Enlarged copies of the hovered bar, drawn above everything else.
    pub emphasis: Vec<PathView>,
    pub ticks: Option<TickLabelsView>,
}

impl GaugeScene {
    pub fn build(input: &GaugeInput, hover: HoverTarget) -> Self {
        let options = &input.options;
        let tileArc = &input.tile_arc;
        let layout = GaugeLayout::from_preset(input.size, options.tick_radius_scale);
        let normalized = NormalizedValues::from_input(input);
        let tileCount = tileArc.tile_count();
        let scale = ColorScale::from_tile_config(tileArc, normalized.yellow);

        if tileArc.tiles <= 0 {
            debug!("tile count {} raised to 1", tileArc.tiles);
        }
        if !(options.threshold_red > 0.0) {
            debug!("threshold_red {} is not positive, gauge stays empty", options.threshold_red);
        }

        let pointers = build_pointers(input, &layout, &normalized);
        let ticks = options.enable_unit_ticks.then(|| build_ticks(input, &layout, tileCount));

        Self {
            gradients: tile_gradients(tileCount, options.threshold_red, &scale),
            inner_arcs: options
                .enable_inner_arc
                .then(|| build_inner_arcs(input, &layout, &normalized, hover)),
            tiles: build_tiles(input, &layout, &normalized, &scale, hover),
            tile_hover_region: arc_path(&ArcSpec::new(
                layout.radius * HOVER_DETECTION_SCALE,
                layout.radius,
                ANGLE_START,
                ANGLE_END,
            )),
            pointers,
            hub_radius: layout.radius * (options.circle_scale / 10.0),
            emphasis: build_emphasis(input, &layout, &normalized, hover),
            ticks,
            layout,
            normalized,
        }
    }

    pub fn filled_tiles(&self) -> impl Iterator<Item = &TileView> {
        self.tiles.iter().filter(|tile| tile.fill.is_some())
    }
}

fn build_tiles(
    input: &GaugeInput,
    layout: &GaugeLayout,
    normalized: &NormalizedValues,
    scale: &ColorScale,
    hover: HoverTarget,
) -> Vec<TileView> {
    let options = &input.options;
    let tileArc = &input.tile_arc;
    let radius = layout.radius;
    let ringGrows = hover == HoverTarget::Tile && options.with_opacity_switch;
    let (fillInner, fillOuter) = if ringGrows {
        (
            radius * OUTER_ARC_SCALE - HOVER_OFFSET_INNER * layout.scale_factor,
            radius + HOVER_OFFSET_OUTER * layout.scale_factor,
        )
    } else {
        (radius * OUTER_ARC_SCALE, radius)
    };
    let isFilledStyle = tileArc.fill_style == TileFillStyle::Filled;
    let dashArray = match tileArc.fill_style {
        TileFillStyle::Dotted => Some(DOTTED_STROKE_PATTERN.to_string()),
        TileFillStyle::Dashed => Some(DASHED_STROKE_PATTERN.to_string()),
        TileFillStyle::Filled | TileFillStyle::Outlined => None,
    };
    let backgroundOpacity = opacity(ElementKind::Background, hover, options.with_opacity_switch);
    let filledOpacity = opacity(ElementKind::FilledTile, hover, options.with_opacity_switch);

    layout_tiles(tileArc.tile_count(), normalized.sum, options.threshold_red)
        .into_iter()
        .map(|geometry| {
            let background = PathView {
                d: arc_path(
                    &ArcSpec::new(radius * OUTER_ARC_SCALE, radius, geometry.start_angle, geometry.end_angle)
                        .with_shape(tileArc.arc_shape),
                ),
                fill: if isFilledStyle {
                    tileArc.color_tile_bg.clone()
                } else {
                    "transparent".to_string()
                },
                stroke: Some(if isFilledStyle {
                    "#000".to_string()
                } else {
                    tileArc.border_color.clone()
                }),
                stroke_width: if isFilledStyle {
                    STROKE_WIDTH_NORMAL
                } else {
                    tileArc.border_thickness
                },
                stroke_dasharray: dashArray.clone(),
                opacity: backgroundOpacity,
            };
            let fill = geometry.is_filled().then(|| PathView {
                d: arc_path(
                    &ArcSpec::new(fillInner, fillOuter, geometry.start_angle, geometry.fill_end_angle)
                        .with_shape(tileArc.arc_shape),
                ),
                // sum is normalized against red, so red starts at 1
                fill: tile_color(normalized.sum, geometry.index, tileArc, normalized.yellow, 1.0, scale),
                stroke: None,
                stroke_width: STROKE_WIDTH_NORMAL,
                stroke_dasharray: None,
                opacity: filledOpacity,
            });
            TileView {
                geometry,
                background,
                fill,
            }
        })
        .collect()
}

fn build_inner_arcs(
    input: &GaugeInput,
    layout: &GaugeLayout,
    normalized: &NormalizedValues,
    hover: HoverTarget,
) -> InnerArcsView {
    let enabled = input.options.with_opacity_switch;
    // split only while emphasis is on; without the switch the bands stay stacked
    let splitSecondary = matches!(hover, HoverTarget::SecondaryBar | HoverTarget::Tile) && enabled;
    let angles = inner_arc_angles(normalized.primary, normalized.secondary, splitSecondary);
    let inner = layout.radius * INNER_ARC_SCALE;
    let outer = layout.radius * OUTER_ARC_SCALE;

    let band = |start: f64, end: f64, shape: ArcShape, fill: &str, kind: ElementKind| PathView {
        d: arc_path(&ArcSpec::new(inner, outer, start, end).with_shape(shape)),
        fill: fill.to_string(),
        stroke: Some("#000".to_string()),
        stroke_width: STROKE_WIDTH_THIN,
        stroke_dasharray: None,
        opacity: opacity(kind, hover, enabled),
    };

    InnerArcsView {
        secondary: band(
            angles.secondary.start,
            angles.secondary.end,
            input.secondary_arc.arc_shape,
            &input.secondary_arc.color_secondary_bar,
            ElementKind::SecondaryBar,
        ),
        primary: band(
            angles.primary.start,
            angles.primary.end,
            input.primary_arc.arc_shape,
            &input.primary_arc.color_primary_bar,
            ElementKind::PrimaryBar,
        ),
    }
}

fn build_emphasis(
    input: &GaugeInput,
    layout: &GaugeLayout,
    normalized: &NormalizedValues,
    hover: HoverTarget,
) -> Vec<PathView> {
    if !(input.options.with_opacity_switch && input.options.enable_inner_arc) {
        return Vec::new();
    }
    let inner = layout.radius * INNER_ARC_SCALE * HOVER_INNER_SCALE;
    let outer = layout.radius * OUTER_ARC_SCALE * HOVER_OUTER_SCALE;
    let (start, end, cornerRadius, fill) = match hover {
        HoverTarget::SecondaryBar => (
            angle_scale(normalized.primary),
            angle_scale(normalized.primary + normalized.secondary).min(ANGLE_END),
            input.secondary_arc.arc_shape.corner_radius,
            &input.secondary_arc.color_secondary_bar,
        ),
        HoverTarget::PrimaryBar => (
            ANGLE_START + ANGLE_OFFSET,
            angle_scale(normalized.primary).min(ANGLE_END),
            input.primary_arc.arc_shape.corner_radius,
            &input.primary_arc.color_primary_bar,
        ),
        HoverTarget::None | HoverTarget::Tile => return Vec::new(),
    };

    vec![PathView {
        d: arc_path(&ArcSpec::new(inner, outer, start, end).with_corner_radius(cornerRadius)),
        fill: fill.clone(),
        stroke: Some("#000".to_string()),
        stroke_width: STROKE_WIDTH_THIN,
        stroke_dasharray: None,
        opacity: 1.0,
    }]
}

fn build_pointers(input: &GaugeInput, layout: &GaugeLayout, normalized: &NormalizedValues) -> Vec<PointerView> {
    let mut pointers = Vec::with_capacity(2);
    let primaryConfig = &input.primary_arc.pointer;
    let sumConfig = &input.secondary_arc.pointer;

    let showPrimary = normalized.secondary != 0.0
        && normalized.primary != normalized.sum
        && input.options.enable_inner_arc;
    if showPrimary {
        let tip = calculate_pointer(
            normalized.primary,
            layout.radius,
            PRIMARY_POINTER_LENGTH * primaryConfig.scale,
        );
        pointers.push(PointerView {
            marker_id: "primary",
            x: tip.x,
            y: tip.y,
            color: primaryConfig.color.clone(),
            stroke_width: pointer_stroke_width(primaryConfig.stroke_scale, layout.scale_factor),
            marker: PointerMarker::new(primaryConfig.scale),
        });
    }

    let tip = calculate_pointer(normalized.sum, layout.radius, SUM_POINTER_LENGTH * sumConfig.scale);
    pointers.push(PointerView {
        marker_id: "secondary",
        x: tip.x,
        y: tip.y,
        color: sumConfig.color.clone(),
        stroke_width: pointer_stroke_width(sumConfig.stroke_scale, layout.scale_factor),
        marker: PointerMarker::new(sumConfig.scale),
    });
    pointers
}

fn build_ticks(input: &GaugeInput, layout: &GaugeLayout, tileCount: usize) -> TickLabelsView {
    let options = &input.options;
    let values = tick_values(options.threshold_red, tileCount, input.tile_arc.tick_every_nth_step);
    let marks = layout_ticks(
        &values,
        options.threshold_red,
        layout.radius,
        options.tick_radius_scale,
        |value| input.formatters.format_tick(value),
    );

    TickLabelsView {
        marks,
        font_size: options
            .tick_font_size
            .clone()
            .unwrap_or_else(|| format!("{}rem", layout.scale_factor)),
        label_color: if options.tick_label_color.is_empty() {
            options.font_color.clone()
        } else {
            options.tick_label_color.clone()
        },
        tick_color: options.tick_color.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use baro_types::GradientType;

    fn reference_input(tiles: i32) -> GaugeInput {
        GaugeInput::new(40.0)
            .with_secondary(35.0)
            .with_options(GaugeOptions::default().with_thresholds(60.0, 80.0))
            .with_tile_arc(TileArcConfig::default().with_tiles(tiles))
    }

    #[test]
    fn filled_tiles_cover_the_sum_and_share_the_yellow_band() {
        let scene = GaugeScene::build(&reference_input(10), HoverTarget::None);
        // 75 of 80 reaches into the last tile (72..80)
        assert_eq!(scene.filled_tiles().count(), 10);
        assert!((scene.tiles[9].geometry.fill_ratio - 0.375).abs() < 1e-9);
        for tile in scene.filled_tiles() {
            assert_eq!(tile.fill.as_ref().unwrap().fill, "#ffff00");
        }
    }

    #[test]
    fn finer_ring_leaves_the_tiles_past_the_sum_empty() {
        let scene = GaugeScene::build(&reference_input(20), HoverTarget::None);
        let filled: Vec<usize> = scene.filled_tiles().map(|t| t.geometry.index).collect();
        // 4 units per tile: tile 18 spans 72..76, tile 19 spans 76..80
        assert_eq!(filled, (0..19).collect::<Vec<_>>());
        assert!(scene.tiles[19].fill.is_none());
    }

    #[test]
    fn inner_arcs_and_primary_pointer_need_the_switch() {
        let plain = GaugeScene::build(&reference_input(10), HoverTarget::None);
        assert!(plain.inner_arcs.is_none());
        assert_eq!(plain.pointers.len(), 1);
        assert_eq!(plain.pointers[0].marker_id, "secondary");

        let mut input = reference_input(10);
        input.options.enable_inner_arc = true;
        let scene = GaugeScene::build(&input, HoverTarget::None);
        assert!(scene.inner_arcs.is_some());
        let ids: Vec<&str> = scene.pointers.iter().map(|p| p.marker_id).collect();
        assert_eq!(ids, ["primary", "secondary"]);
    }

    #[test]
    fn primary_pointer_hidden_without_secondary() {
        let mut input = GaugeInput::new(40.0);
        input.options.enable_inner_arc = true;
        let scene = GaugeScene::build(&input, HoverTarget::None);
        assert_eq!(scene.pointers.len(), 1);
    }

    #[test]
    fn hovering_a_bar_dims_the_rest_and_adds_emphasis() {
        let mut input = reference_input(10);
        input.options.enable_inner_arc = true;
        let scene = GaugeScene::build(&input, HoverTarget::PrimaryBar);

        let arcs = scene.inner_arcs.as_ref().unwrap();
        assert_eq!(arcs.primary.opacity, 1.0);
        assert_eq!(arcs.secondary.opacity, 0.5);
        assert!(scene.filled_tiles().all(|t| t.fill.as_ref().unwrap().opacity == 0.5));
        assert_eq!(scene.emphasis.len(), 1);
        assert_eq!(scene.emphasis[0].fill, "#000");

        input.options.with_opacity_switch = false;
        let flat = GaugeScene::build(&input, HoverTarget::PrimaryBar);
        assert!(flat.emphasis.is_empty());
        assert_eq!(flat.inner_arcs.unwrap().secondary.opacity, 1.0);
    }

    #[test]
    fn hovered_ring_grows_the_filled_tiles() {
        let input = reference_input(10);
        let idle = GaugeScene::build(&input, HoverTarget::None);
        let hovered = GaugeScene::build(&input, HoverTarget::Tile);
        let idleFill = &idle.tiles[0].fill.as_ref().unwrap().d;
        let hoveredFill = &hovered.tiles[0].fill.as_ref().unwrap().d;
        assert_ne!(idleFill, hoveredFill);
        assert_eq!(idle.tiles[0].background.d, hovered.tiles[0].background.d);
        assert_eq!(hovered.tiles[0].background.opacity, 0.5);
    }

    #[test]
    fn outlined_styles_use_border_and_dashes() {
        let mut input = reference_input(4);
        input.tile_arc = input.tile_arc.with_fill_style(TileFillStyle::Dotted);
        input.tile_arc.border_color = "#123456".into();
        let scene = GaugeScene::build(&input, HoverTarget::None);
        let background = &scene.tiles[0].background;
        assert_eq!(background.fill, "transparent");
        assert_eq!(background.stroke.as_deref(), Some("#123456"));
        assert_eq!(background.stroke_dasharray.as_deref(), Some("1,3"));

        input.tile_arc.fill_style = TileFillStyle::Filled;
        let filled = GaugeScene::build(&input, HoverTarget::None);
        assert_eq!(filled.tiles[0].background.fill, "#ddd");
        assert_eq!(filled.tiles[0].background.stroke_dasharray, None);
    }

    #[test]
    fn tile_gradient_mode_references_definitions() {
        let mut input = reference_input(5);
        input.tile_arc = input.tile_arc.with_gradient(GradientType::Tile);
        let scene = GaugeScene::build(&input, HoverTarget::None);
        assert_eq!(scene.gradients.len(), 5);
        assert_eq!(scene.tiles[2].fill.as_ref().unwrap().fill, "url(#gradient-2)");
    }

    #[test]
    fn ticks_follow_options_and_unit() {
        let mut input = reference_input(10).with_formatters(Formatters::default().with_unit(|v| format!("{v}%")));
        input.tile_arc = input.tile_arc.with_tick_step(20.0);
        let scene = GaugeScene::build(&input, HoverTarget::None);
        let ticks = scene.ticks.unwrap();
        let labels: Vec<&str> = ticks.marks.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, ["0%", "20%", "40%", "60%", "80%"]);
        assert_eq!(ticks.font_size, "1rem");

        input.options.enable_unit_ticks = false;
        assert!(GaugeScene::build(&input, HoverTarget::None).ticks.is_none());
    }

    #[test]
    fn tick_font_scales_with_size_when_unset() {
        let mut input = reference_input(10).with_size(SizePreset::S);
        input.options.tick_font_size = None;
        let ticks = GaugeScene::build(&input, HoverTarget::None).ticks.unwrap();
        assert_eq!(ticks.font_size, "1rem");

        input.size = SizePreset::Xxxl;
        let ticks = GaugeScene::build(&input, HoverTarget::None).ticks.unwrap();
        assert_eq!(ticks.font_size, format!("{}rem", 1600.0 / 600.0));
    }

    #[test]
    fn hub_scales_with_circle_scale() {
        let scene = GaugeScene::build(&reference_input(10), HoverTarget::None);
        assert_eq!(scene.hub_radius, 240.0 * 0.05);
    }

    #[test]
    fn tooltip_rows_per_target() {
        let input = reference_input(10);
        assert!(input.tooltip_rows(HoverTarget::None).is_empty());
        assert_eq!(input.tooltip_rows(HoverTarget::Tile)[0].value, "75");
        assert_eq!(input.tooltip_rows(HoverTarget::PrimaryBar)[0].value, "40");
        assert_eq!(input.tooltip_rows(HoverTarget::SecondaryBar)[0].value, "35");
    }

    #[test]
    fn oversized_tile_and_tick_settings_stay_bounded() {
        let mut input = reference_input(i32::MAX);
        input.tile_arc = input.tile_arc.with_tick_step(1e-300);
        let scene = GaugeScene::build(&input, HoverTarget::None);
        assert_eq!(scene.tiles.len(), baro_types::MAX_TILES);
        assert!(scene.ticks.unwrap().marks.len() <= crate::ticks::MAX_TICKS);
    }

    #[test]
    fn zero_threshold_draws_an_empty_gauge() {
        let mut input = reference_input(10);
        input.options.threshold_red = 0.0;
        let scene = GaugeScene::build(&input, HoverTarget::None);
        assert_eq!(scene.filled_tiles().count(), 0);
        assert!(scene.ticks.unwrap().marks.is_empty());
        assert!(!scene.tiles[0].background.d.contains("NaN"));
    }
}
