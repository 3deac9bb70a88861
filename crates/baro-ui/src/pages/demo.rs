use baro_core::GaugeInput;
use baro_types::{GaugeSettings, GradientType, SizePreset, TileFillStyle};
use leptos::prelude::*;

use crate::components::fields::{NumberField, SelectField, TextField, ToggleField};
use crate::components::gauge::GaugeChart;
use crate::components::settings_card::SettingsCard;
use crate::units::{formatters_for, Conversion, Unit};

/// Gauge settings the server was configured with, or the demo defaults.
#[server]
async fn get_gauge_settings() -> Result<GaugeSettings, ServerFnError> {
    Ok(use_context::<GaugeSettings>().unwrap_or_else(|| {
        tracing::debug!("no gauge settings in context, serving demo defaults");
        GaugeSettings::demo()
    }))
}

#[component]
pub fn DemoPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (loaded, setLoaded) = signal(Option::<Result<GaugeSettings, String>>::None);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            let result = get_gauge_settings().await.map_err(|e| e.to_string());
            setLoaded.set(Some(result));
        });
    }

    view! {
        <div class="demo-header">
            <h1>"Baro Meter"</h1>
            <p class="subtitle">"Primary and secondary values against a tiled threshold ring"</p>
        </div>
        {move || match loaded.get() {
            None => {
                view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        "Loading gauge settings..."
                    </div>
                }
                    .into_any()
            }
            Some(Ok(settings)) => view! { <DemoContent initial=settings /> }.into_any(),
            Some(Err(e)) => {
                tracing::warn!("failed to load gauge settings: {e}");
                view! { <DemoContent initial=GaugeSettings::demo() /> }.into_any()
            }
        }}
    }
}

#[component]
fn DemoContent(initial: GaugeSettings) -> impl IntoView {
    let settings = RwSignal::new(initial);
    let unit = RwSignal::new(Unit::None);
    let conversion = RwSignal::new(Conversion::None);

    let input = Signal::derive(move || {
        GaugeInput::from_settings(&settings.get(), formatters_for(unit.get(), conversion.get()))
    });

    // field accessors
    let number = move |read: fn(&GaugeSettings) -> f64| Signal::derive(move || settings.with(read));
    let toggle = move |read: fn(&GaugeSettings) -> bool| Signal::derive(move || settings.with(read));
    let text = move |read: fn(&GaugeSettings) -> String| Signal::derive(move || settings.with(read));

    let unitOptions = Unit::ALL.map(|unit| (unit.key(), unit.label())).to_vec();
    let conversionOptions = Signal::derive(move || {
        unit.get()
            .conversions()
            .iter()
            .map(|conversion| (conversion.key(), conversion.label()))
            .collect::<Vec<_>>()
    });
    let sizeOptions = SizePreset::ALL.map(|size| (size.as_str(), size.as_str())).to_vec();
    let gradientOptions = vec![("full", "Full"), ("tile", "Tile")];
    let fillStyleOptions = vec![
        ("filled", "Filled"),
        ("dotted", "Dotted"),
        ("dashed", "Dashed"),
        ("outlined", "Outlined"),
    ];

    view! {
        <div class="demo-layout">
            <div class="demo-gauge">
                <GaugeChart input />
            </div>
            <div class="demo-settings">
                <SettingsCard title="Values">
                    <NumberField
                        label="Primary"
                        value=number(|s| s.primary)
                        on_change=Callback::new(move |v: f64| settings.update(|s| s.primary = v))
                    />
                    <NumberField
                        label="Secondary"
                        value=number(|s| s.secondary.unwrap_or(0.0))
                        on_change=Callback::new(move |v: f64| settings.update(|s| s.secondary = Some(v)))
                    />
                    <NumberField
                        label="Threshold mid"
                        value=number(|s| s.options.threshold_yellow)
                        on_change=Callback::new(move |v: f64| settings.update(|s| s.options.threshold_yellow = v))
                    />
                    <NumberField
                        label="Threshold max"
                        value=number(|s| s.options.threshold_red)
                        on_change=Callback::new(move |v: f64| settings.update(|s| s.options.threshold_red = v))
                    />
                    <NumberField
                        label="Tiles"
                        value=number(|s| s.tile_arc.tiles as f64)
                        on_change=Callback::new(move |v: f64| settings.update(|s| s.tile_arc.tiles = v as i32))
                    />
                    <NumberField
                        label="Tick step"
                        value=number(|s| s.tile_arc.tick_every_nth_step)
                        on_change=Callback::new(move |v: f64| settings.update(|s| s.tile_arc.tick_every_nth_step = v))
                    />
                </SettingsCard>

                <SettingsCard title="Behaviour">
                    <ToggleField
                        label="Opacity switch"
                        checked=toggle(|s| s.options.with_opacity_switch)
                        on_change=Callback::new(move |v: bool| settings.update(|s| s.options.with_opacity_switch = v))
                    />
                    <ToggleField
                        label="Inner arcs"
                        checked=toggle(|s| s.options.enable_inner_arc)
                        on_change=Callback::new(move |v: bool| settings.update(|s| s.options.enable_inner_arc = v))
                    />
                    <ToggleField
                        label="Tooltip"
                        checked=toggle(|s| s.options.enable_tooltip)
                        on_change=Callback::new(move |v: bool| settings.update(|s| s.options.enable_tooltip = v))
                    />
                    <ToggleField
                        label="Unit ticks"
                        checked=toggle(|s| s.options.enable_unit_ticks)
                        on_change=Callback::new(move |v: bool| settings.update(|s| s.options.enable_unit_ticks = v))
                    />
                    <ToggleField
                        label="Tile gradient"
                        checked=toggle(|s| s.tile_arc.is_tile_color_gradient)
                        on_change=Callback::new(move |v: bool| settings.update(|s| s.tile_arc.is_tile_color_gradient = v))
                    />
                </SettingsCard>

                <SettingsCard title="Appearance">
                    <SelectField
                        label="Size"
                        options=sizeOptions
                        selected=text(|s| s.size.as_str().to_string())
                        on_change=Callback::new(move |key: String| settings.update(|s| s.size = SizePreset::parse(&key)))
                    />
                    <SelectField
                        label="Gradient type"
                        options=gradientOptions
                        selected=text(|s| match s.tile_arc.gradient_type {
                            GradientType::Full => "full".to_string(),
                            GradientType::Tile => "tile".to_string(),
                        })
                        on_change=Callback::new(move |key: String| {
                            settings.update(|s| {
                                s.tile_arc.gradient_type = if key == "full" {
                                    GradientType::Full
                                } else {
                                    GradientType::Tile
                                };
                            })
                        })
                    />
                    <SelectField
                        label="Fill style"
                        options=fillStyleOptions
                        selected=text(|s| fill_style_key(s.tile_arc.fill_style).to_string())
                        on_change=Callback::new(move |key: String| {
                            settings.update(|s| s.tile_arc.fill_style = fill_style_from_key(&key))
                        })
                    />
                </SettingsCard>

                <SettingsCard title="Units">
                    <SelectField
                        label="Unit"
                        options=unitOptions
                        selected=Signal::derive(move || unit.get().key().to_string())
                        on_change=Callback::new(move |key: String| {
                            unit.set(Unit::from_key(&key));
                            conversion.set(Conversion::None);
                        })
                    />
                    <SelectField
                        label="Formatter"
                        options=conversionOptions
                        selected=Signal::derive(move || conversion.get().key().to_string())
                        on_change=Callback::new(move |key: String| conversion.set(Conversion::from_key(unit.get_untracked(), &key)))
                    />
                </SettingsCard>

                <SettingsCard title="Tooltip labels">
                    <TextField
                        label="Total"
                        value=text(|s| s.tile_arc.tooltip_label.clone())
                        on_change=Callback::new(move |v: String| settings.update(|s| s.tile_arc.tooltip_label = v))
                    />
                    <TextField
                        label="Primary"
                        value=text(|s| s.primary_arc.tooltip_label.clone())
                        on_change=Callback::new(move |v: String| settings.update(|s| s.primary_arc.tooltip_label = v))
                    />
                    <TextField
                        label="Secondary"
                        value=text(|s| s.secondary_arc.tooltip_label.clone())
                        on_change=Callback::new(move |v: String| settings.update(|s| s.secondary_arc.tooltip_label = v))
                    />
                </SettingsCard>
            </div>
        </div>
    }
}

fn fill_style_key(style: TileFillStyle) -> &'static str {
    match style {
        TileFillStyle::Filled => "filled",
        TileFillStyle::Dotted => "dotted",
        TileFillStyle::Dashed => "dashed",
        TileFillStyle::Outlined => "outlined",
    }
}

fn fill_style_from_key(key: &str) -> TileFillStyle {
    match key {
        "dotted" => TileFillStyle::Dotted,
        "dashed" => TileFillStyle::Dashed,
        "outlined" => TileFillStyle::Outlined,
        _ => TileFillStyle::Filled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_style_keys_round_trip() {
        for style in [
            TileFillStyle::Filled,
            TileFillStyle::Dotted,
            TileFillStyle::Dashed,
            TileFillStyle::Outlined,
        ] {
            assert_eq!(fill_style_from_key(fill_style_key(style)), style);
        }
        assert_eq!(fill_style_from_key("striped"), TileFillStyle::Filled);
    }
}
