//! Kind Select Component
//!
//! Dropdown over one of the node kind enums.

use leptos::prelude::*;

use super::target_value;

/// `(value, label)` pairs for a kind enum
pub fn kind_options<K: Copy>(
    all: &[K],
    as_str: fn(&K) -> &'static str,
    label: fn(&K) -> &'static str,
) -> Vec<(&'static str, &'static str)> {
    all.iter().map(|k| (as_str(k), label(k))).collect()
}

/// Select bound to the node's current kind value
#[component]
pub fn KindSelect(
    options: Vec<(&'static str, &'static str)>,
    #[prop(into)] current: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="kind-select"
            on:change=move |ev| on_change.run(target_value(&ev))
        >
            {options.into_iter().map(|(value, label)| {
                let is_selected = move || current.get() == value;
                view! {
                    <option value=value selected=is_selected>{label}</option>
                }
            }).collect_view()}
        </select>
    }
}
