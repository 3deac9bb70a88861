use baro_core::{relative_position, ClientRect, GaugeInput, GaugeInteraction, GaugeScene, HoverTarget};
use leptos::ev::MouseEvent;
use leptos::html::Div;
use leptos::prelude::*;

use crate::components::arcs::GaugeArcs;
use crate::components::gradients::GaugeGradients;
use crate::components::pointer::GaugePointer;
use crate::components::shape::PathShape;
use crate::components::tick_labels::GaugeTickLabels;
use crate::components::tiles::GaugeTiles;
use crate::components::tooltip::GaugeTooltip;

/// Mouse callbacks shared by every hoverable part of the gauge.
#[derive(Clone, Copy)]
pub struct HoverHandlers {
    pub enter: Callback<(HoverTarget, MouseEvent)>,
    pub moved: Callback<MouseEvent>,
    pub leave: Callback<HoverTarget>,
}

/// Semicircular barometer gauge.
///
/// Shows the sum of `primary` and `secondary` on a tiled outer ring, with
/// optional inner bands for both parts, pointers, tick labels and a hover
/// tooltip. Re-renders whenever `input` changes.
#[component]
pub fn GaugeChart(#[prop(into)] input: Signal<GaugeInput>) -> impl IntoView {
    let (interaction, setInteraction) = signal(GaugeInteraction::default());
    let wrapper = NodeRef::<Div>::new();

    let scene = Memo::new(move |_| {
        let hover = interaction.with(|state| state.hover);
        input.with(|input| GaugeScene::build(input, hover))
    });

    // falls back to the zero origin until the wrapper is mounted
    let pointerPosition = move |ev: &MouseEvent| {
        let rect = wrapper.get_untracked().map(|element| {
            let bounds = element.get_bounding_client_rect();
            ClientRect {
                left: bounds.left(),
                top: bounds.top(),
            }
        });
        relative_position(ev.client_x() as f64, ev.client_y() as f64, rect)
    };

    let handlers = HoverHandlers {
        enter: Callback::new(move |(target, ev): (HoverTarget, MouseEvent)| {
            let (x, y) = pointerPosition(&ev);
            let rows = input.with_untracked(|input| input.tooltip_rows(target));
            setInteraction.update(|state| state.enter(target, rows, x, y));
        }),
        moved: Callback::new(move |ev: MouseEvent| {
            let (x, y) = pointerPosition(&ev);
            setInteraction.update(|state| state.move_to(x, y));
        }),
        leave: Callback::new(move |target: HoverTarget| {
            setInteraction.update(|state| state.leave(target));
        }),
    };

    let tooltip = move || {
        let (enabled, background, fontColor) = input.with(|input| {
            (
                input.options.enable_tooltip,
                input.options.tooltip_bg_color.to_css(),
                input.options.font_color.clone(),
            )
        });
        interaction
            .with(|state| state.tooltip.clone())
            .filter(|state| enabled && !state.rows.is_empty())
            .map(|state| view! { <GaugeTooltip state background font_color=fontColor /> })
    };

    view! {
        <div class="gauge-chart" node_ref=wrapper>
            {move || {
                let scene = scene.get();
                let layout = scene.layout;
                view! {
                    <svg
                        class="gauge-svg"
                        width=layout.view_box_width.to_string()
                        height=layout.view_box_height.to_string()
                        viewBox=layout.view_box()
                        preserveAspectRatio="xMidYMid meet"
                    >
                        <GaugeGradients gradients=scene.gradients />
                        <g transform=layout.center_transform()>
                            {scene.inner_arcs.map(|arcs| view! { <GaugeArcs arcs handlers /> })}
                            <GaugeTiles
                                tiles=scene.tiles
                                hover_region=scene.tile_hover_region
                                handlers
                            />
                            {scene
                                .pointers
                                .into_iter()
                                .map(|pointer| view! { <GaugePointer pointer /> })
                                .collect_view()}
                            <circle cx="0" cy="0" r=scene.hub_radius.to_string() fill="black" />
                            {scene
                                .emphasis
                                .into_iter()
                                .map(|path| view! { <PathShape path class="gauge-emphasis" /> })
                                .collect_view()}
                            {scene.ticks.map(|ticks| view! { <GaugeTickLabels ticks /> })}
                        </g>
                    </svg>
                }
            }}
            {tooltip}
        </div>
    }
}
