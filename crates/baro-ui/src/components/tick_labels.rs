use baro_core::TickLabelsView;
use leptos::prelude::*;

#[component]
pub fn GaugeTickLabels(ticks: TickLabelsView) -> impl IntoView {
    let TickLabelsView {
        marks,
        font_size,
        label_color,
        tick_color,
    } = ticks;

    view! {
        <g class="gauge-ticks">
            {marks
                .into_iter()
                .map(|mark| {
                    view! {
                        <g>
                            <line
                                x1=mark.x1.to_string()
                                y1=mark.y1.to_string()
                                x2=mark.x2.to_string()
                                y2=mark.y2.to_string()
                                stroke=tick_color.clone()
                                stroke-width="1"
                            />
                            <text
                                x=mark.x2.to_string()
                                y=mark.y2.to_string()
                                text-anchor="middle"
                                dy="0.35em"
                                fill=label_color.clone()
                                font-size=font_size.clone()
                            >
                                {mark.label}
                            </text>
                        </g>
                    }
                })
                .collect_view()}
        </g>
    }
}
