use leptos::prelude::*;

/// Titled card grouping related demo controls.
#[component]
pub fn SettingsCard(
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="card">
            <div class="card-title">{title}</div>
            <div class="card-body">{children()}</div>
        </section>
    }
}
