use baro_types::TooltipState;
use leptos::prelude::*;

/// Distance between the mouse pointer and the tooltip's top-left corner.
const TOOLTIP_OFFSET: f64 = 10.0;

/// Floating tooltip positioned relative to the gauge wrapper.
#[component]
pub fn GaugeTooltip(state: TooltipState, background: String, font_color: String) -> impl IntoView {
    let style = format!(
        "left: {}px; top: {}px; background-color: {background}; color: {font_color};",
        state.x + TOOLTIP_OFFSET,
        state.y + TOOLTIP_OFFSET,
    );
    let divided = state.rows.len() > 1;

    view! {
        <div class="gauge-tooltip" style=style role="list">
            {state
                .rows
                .into_iter()
                .map(|row| {
                    let ariaLabel = format!("{} {}", row.label, row.value);
                    view! {
                        <div class="gauge-tooltip-row" class:divided=divided role="listitem">
                            <span class="gauge-tooltip-label" aria-hidden="true">{row.label}</span>
                            <span class="gauge-tooltip-value">
                                <span
                                    class="gauge-tooltip-swatch"
                                    style=format!("background-color: {}", row.color)
                                    aria-hidden="true"
                                ></span>
                                <span aria-label=ariaLabel>{row.value}</span>
                            </span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
