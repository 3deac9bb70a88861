use std::fmt;
use std::sync::Arc;

use baro_types::{GaugeOptions, PrimaryArcConfig, SecondaryArcConfig, TileArcConfig, TooltipRow};

use crate::color::color_selector;

/// Value a tick formatter returns to hand formatting over to the unit formatter.
pub const UNIT_SENTINEL: &str = "unit";

pub type ValueFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// Caller supplied value formatting.
#[derive(Clone, Default)]
pub struct Formatters {
    /// Tried first for tooltip values; may return [`UNIT_SENTINEL`].
    pub tick: Option<ValueFormatter>,
    /// Appends a unit; also used for tick labels.
    pub unit: Option<ValueFormatter>,
}

impl fmt::Debug for Formatters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatters")
            .field("tick", &self.tick.is_some())
            .field("unit", &self.unit.is_some())
            .finish()
    }
}

impl Formatters {
    pub fn with_tick(mut self, formatter: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        self.tick = Some(Arc::new(formatter));
        self
    }

    pub fn with_unit(mut self, formatter: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        self.unit = Some(Arc::new(formatter));
        self
    }

    /// Tooltip text for `value`.
    pub fn format_value(&self, value: f64) -> String {
        format_value(value, self.tick.as_deref(), self.unit.as_deref())
    }

    /// Tick label text; only the unit formatter applies here.
    pub fn format_tick(&self, value: f64) -> String {
        match &self.unit {
            Some(unit) => unit(value),
            None => value.to_string(),
        }
    }
}

/// Tick formatter first, unit formatter when the tick formatter is absent or
/// answers [`UNIT_SENTINEL`], plain number otherwise.
pub fn format_value(
    value: f64,
    tick_formatter: Option<&(dyn Fn(f64) -> String + Send + Sync)>,
    unit: Option<&(dyn Fn(f64) -> String + Send + Sync)>,
) -> String {
    if let Some(tick) = tick_formatter {
        let formatted = tick(value);
        if formatted != UNIT_SENTINEL {
            return formatted;
        }
    }
    match unit {
        Some(unit) => unit(value),
        None => value.to_string(),
    }
}

fn row_label(label: &str, fallback: &str) -> String {
    if label.is_empty() {
        format!("{fallback}:")
    } else {
        format!("{label}:")
    }
}

/// Everything the row builders need to know about the current values.
#[derive(Clone, Copy, Debug)]
pub struct TooltipContext<'a> {
    pub primary: f64,
    pub secondary: Option<f64>,
    pub options: &'a GaugeOptions,
    pub tile_arc: &'a TileArcConfig,
    pub primary_arc: &'a PrimaryArcConfig,
    pub secondary_arc: &'a SecondaryArcConfig,
}

impl TooltipContext<'_> {
    fn threshold_color(&self, value: f64) -> String {
        color_selector(
            self.options.threshold_red,
            self.options.threshold_yellow,
            &self.tile_arc.color_tile_threshold_red,
            &self.tile_arc.color_tile_threshold_yellow,
            &self.tile_arc.color_tile_threshold_default,
            value,
        )
    }

    fn secondary_value(&self) -> Option<f64> {
        self.secondary.filter(|v| *v != 0.0)
    }

    /// Rows shown while hovering the tile ring: the sum, then the parts when
    /// inner arcs are drawn. Colours follow the raw thresholds.
    pub fn tile_rows(&self, formatters: &Formatters) -> Vec<TooltipRow> {
        let sum = self.primary + self.secondary.unwrap_or(0.0);
        let mut rows = vec![TooltipRow {
            label: row_label(&self.tile_arc.tooltip_label, "Sum"),
            value: formatters.format_value(sum),
            color: self.threshold_color(sum),
        }];

        if self.options.enable_inner_arc {
            if self.primary != 0.0 {
                rows.push(TooltipRow {
                    label: row_label(&self.primary_arc.tooltip_label, "Primary"),
                    value: formatters.format_value(self.primary),
                    color: self.threshold_color(self.primary),
                });
            }
            if let Some(secondary) = self.secondary_value() {
                rows.push(TooltipRow {
                    label: row_label(&self.secondary_arc.tooltip_label, "Secondary"),
                    value: formatters.format_value(secondary),
                    color: self.threshold_color(secondary),
                });
            }
        }
        rows
    }

    pub fn primary_rows(&self, formatters: &Formatters) -> Vec<TooltipRow> {
        vec![TooltipRow {
            label: row_label(&self.primary_arc.tooltip_label, "Primary"),
            value: formatters.format_value(self.primary),
            color: self.primary_arc.color_primary_bar.clone(),
        }]
    }

    pub fn secondary_rows(&self, formatters: &Formatters) -> Vec<TooltipRow> {
        vec![TooltipRow {
            label: row_label(&self.secondary_arc.tooltip_label, "Secondary"),
            value: self
                .secondary_value()
                .map(|v| formatters.format_value(v))
                .unwrap_or_default(),
            color: self.secondary_arc.color_secondary_bar.clone(),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        options: GaugeOptions,
        tile_arc: TileArcConfig,
        primary_arc: PrimaryArcConfig,
        secondary_arc: SecondaryArcConfig,
    }

    impl Fixture {
        fn new(inner_arc: bool) -> Self {
            Self {
                options: GaugeOptions::default().with_inner_arc(inner_arc),
                tile_arc: TileArcConfig::default(),
                primary_arc: PrimaryArcConfig::default(),
                secondary_arc: SecondaryArcConfig::default(),
            }
        }

        fn context(&self, primary: f64, secondary: Option<f64>) -> TooltipContext<'_> {
            TooltipContext {
                primary,
                secondary,
                options: &self.options,
                tile_arc: &self.tile_arc,
                primary_arc: &self.primary_arc,
                secondary_arc: &self.secondary_arc,
            }
        }
    }

    #[test]
    fn tick_formatter_wins_unless_it_defers() {
        let custom = Formatters::default()
            .with_tick(|v| format!("{v:.1} mi"))
            .with_unit(|v| format!("{v} km"));
        assert_eq!(custom.format_value(5.0), "5.0 mi");

        let deferring = Formatters::default()
            .with_tick(|_| UNIT_SENTINEL.to_string())
            .with_unit(|v| format!("{v} km"));
        assert_eq!(deferring.format_value(5.0), "5 km");

        assert_eq!(Formatters::default().format_value(5.5), "5.5");
        assert_eq!(Formatters::default().format_value(40.0), "40");
    }

    #[test]
    fn deferring_without_unit_prints_the_number() {
        let formatters = Formatters::default().with_tick(|_| UNIT_SENTINEL.to_string());
        assert_eq!(formatters.format_value(12.0), "12");
    }

    #[test]
    fn tile_rows_without_inner_arcs_only_show_the_sum() {
        let fixture = Fixture::new(false);
        let rows = fixture.context(40.0, Some(35.0)).tile_rows(&Formatters::default());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, "Total:");
        assert_eq!(rows[0].value, "75");
        assert_eq!(rows[0].color, "#ffff00");
    }

    #[test]
    fn tile_rows_with_inner_arcs_color_each_part_by_raw_value() {
        let fixture = Fixture::new(true);
        let rows = fixture.context(40.0, Some(35.0)).tile_rows(&Formatters::default());
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["Total:", "Primary:", "Secondary:"]);
        assert_eq!(rows[1].color, "#00ff00");
        assert_eq!(rows[2].color, "#00ff00");
    }

    #[test]
    fn zero_parts_are_left_out() {
        let fixture = Fixture::new(true);
        let rows = fixture.context(0.0, Some(0.0)).tile_rows(&Formatters::default());
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn bar_rows_use_bar_colors_and_fallback_labels() {
        let mut fixture = Fixture::new(true);
        fixture.primary_arc.tooltip_label.clear();
        let context = fixture.context(40.0, None);

        let primary = context.primary_rows(&Formatters::default());
        assert_eq!(primary[0].label, "Primary:");
        assert_eq!(primary[0].color, "#000");

        let secondary = context.secondary_rows(&Formatters::default());
        assert_eq!(secondary[0].label, "Secondary:");
        assert_eq!(secondary[0].value, "");
        assert_eq!(secondary[0].color, "#aaa");
    }
}
