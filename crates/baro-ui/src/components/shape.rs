use baro_core::PathView;
use leptos::prelude::*;

/// A single arc sector from the gauge scene.
#[component]
pub fn PathShape(
    path: PathView,
    /// Extra CSS class, e.g. to disable pointer events on overlays.
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    view! {
        <path
            class=class
            d=path.d
            fill=path.fill
            stroke=path.stroke
            stroke-width=path.stroke_width.to_string()
            stroke-dasharray=path.stroke_dasharray
            opacity=path.opacity.to_string()
        />
    }
}
