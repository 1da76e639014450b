//! Structure Outline Component
//!
//! Read-only table of the whole tree, one row per node.

use leptos::prelude::*;
use property_structure::{outline, StructureRow};

use crate::store::{store_select, use_app_store};

#[component]
pub fn StructureOutline() -> impl IntoView {
    let store = use_app_store();
    let rows = store_select(store, outline);

    view! {
        <table class="structure-outline">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Type"</th>
                    <th>"Contents"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || rows.get()
                    key=|row| (row.key(), row.name().to_string(), row.summary())
                    children=move |row: StructureRow| {
                        let indent = row.depth() * 24;
                        view! {
                            <tr class=format!("outline-row depth-{}", row.depth())>
                                <td style=format!("padding-left: {}px;", indent)>{row.name().to_string()}</td>
                                <td>{row.kind_label()}</td>
                                <td>{row.summary()}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
