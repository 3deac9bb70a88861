use baro_core::{HoverTarget, InnerArcsView, PathView};
use leptos::prelude::*;

use crate::components::gauge::HoverHandlers;
use crate::components::shape::PathShape;

/// Primary and secondary bands inside the tile ring.
#[component]
pub fn GaugeArcs(arcs: InnerArcsView, handlers: HoverHandlers) -> impl IntoView {
    view! {
        <g class="gauge-inner-arcs">
            <HoverBand path=arcs.secondary target=HoverTarget::SecondaryBar handlers />
            <HoverBand path=arcs.primary target=HoverTarget::PrimaryBar handlers />
        </g>
    }
}

#[component]
fn HoverBand(path: PathView, target: HoverTarget, handlers: HoverHandlers) -> impl IntoView {
    view! {
        <g
            class="gauge-band"
            on:mouseenter=move |ev| handlers.enter.run((target, ev))
            on:mousemove=move |ev| handlers.moved.run(ev)
            on:mouseleave=move |_| handlers.leave.run(target)
        >
            <PathShape path />
        </g>
    }
}
