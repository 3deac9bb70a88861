use baro_core::PointerView;
use leptos::prelude::*;

/// Needle from the hub with an arrowhead marker in the pointer colour.
#[component]
pub fn GaugePointer(pointer: PointerView) -> impl IntoView {
    let markerId = format!("arrowhead-{}", pointer.marker_id);
    let marker = pointer.marker;

    view! {
        <defs>
            <marker
                id=markerId.clone()
                markerWidth=marker.width.to_string()
                markerHeight=marker.height.to_string()
                refX=marker.ref_x.to_string()
                refY=marker.ref_y.to_string()
                orient="auto"
            >
                <polygon points=marker.polygon_points() fill=pointer.color.clone() />
            </marker>
        </defs>
        <line
            x1="0"
            y1="0"
            x2=pointer.x.to_string()
            y2=pointer.y.to_string()
            stroke=pointer.color
            stroke-width=pointer.stroke_width.to_string()
            marker-end=format!("url(#{markerId})")
        />
    }
}
