use baro_core::TileGradient;
use leptos::prelude::*;

/// One linear gradient per tile, referenced as `url(#gradient-<i>)`.
#[component]
pub fn GaugeGradients(gradients: Vec<TileGradient>) -> impl IntoView {
    view! {
        <defs>
            {gradients
                .into_iter()
                .map(|gradient| {
                    view! {
                        <linearGradient id=gradient.id gradientTransform="rotate(-90)">
                            <stop offset="0%" stop-color=gradient.start_color />
                            <stop offset="100%" stop-color=gradient.end_color />
                        </linearGradient>
                    }
                })
                .collect_view()}
        </defs>
    }
}
