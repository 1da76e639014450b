//! Enable Switch Component
//!
//! Checkbox switch that shows or hides a card's detail form. The state is
//! local to the card and never written into the tree.

use leptos::prelude::*;

#[component]
pub fn EnableSwitch(enabled: RwSignal<bool>, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <label class="enable-switch">
            <input
                type="checkbox"
                prop:checked=move || enabled.get()
                on:change=move |_| enabled.update(|on| *on = !*on)
            />
            <span class="enable-switch-label">{label}</span>
        </label>
    }
}
