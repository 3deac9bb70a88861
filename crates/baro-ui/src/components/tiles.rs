use baro_core::{HoverTarget, TileView};
use leptos::prelude::*;

use crate::components::gauge::HoverHandlers;
use crate::components::shape::PathShape;

/// Outer tile ring: backgrounds, filled portions and the hover region on top.
#[component]
pub fn GaugeTiles(tiles: Vec<TileView>, hover_region: String, handlers: HoverHandlers) -> impl IntoView {
    view! {
        <g class="gauge-tiles">
            {tiles
                .into_iter()
                .map(|tile| {
                    view! {
                        <g class="gauge-tile">
                            <PathShape path=tile.background />
                            {tile.fill.map(|path| view! { <PathShape path /> })}
                        </g>
                    }
                })
                .collect_view()}
            <path
                class="gauge-hover-region"
                d=hover_region
                fill="transparent"
                on:mouseenter=move |ev| handlers.enter.run((HoverTarget::Tile, ev))
                on:mousemove=move |ev| handlers.moved.run(ev)
                on:mouseleave=move |_| handlers.leave.run(HoverTarget::Tile)
            />
        </g>
    }
}
