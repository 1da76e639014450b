//! Quick-Add Panel Component
//!
//! Category shortcuts with running totals. Only "Floors" is wired to an
//! action; the other entries are shown but inert.

use leptos::prelude::*;
use property_structure::{PropertyStructure, StructureAction, StructureTotals};

use crate::store::{store_dispatch, store_select, use_app_store};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuickAddCategory {
    Floors,
    Units,
    Rooms,
    Bedspaces,
    CommonArea,
}

impl QuickAddCategory {
    pub const ALL: [QuickAddCategory; 5] = [
        QuickAddCategory::Floors,
        QuickAddCategory::Units,
        QuickAddCategory::Rooms,
        QuickAddCategory::Bedspaces,
        QuickAddCategory::CommonArea,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuickAddCategory::Floors => "Floors",
            QuickAddCategory::Units => "Units",
            QuickAddCategory::Rooms => "Rooms",
            QuickAddCategory::Bedspaces => "Bedspaces",
            QuickAddCategory::CommonArea => "Common Area",
        }
    }

    /// Action fired by the shortcut, `None` for inert entries
    pub fn action(&self) -> Option<StructureAction> {
        match self {
            QuickAddCategory::Floors => Some(StructureAction::AddFloor),
            _ => None,
        }
    }

    pub fn count(&self, totals: &StructureTotals) -> usize {
        match self {
            QuickAddCategory::Floors => totals.floors,
            QuickAddCategory::Units => totals.units,
            QuickAddCategory::Rooms => totals.rooms,
            QuickAddCategory::Bedspaces => totals.bedspaces,
            QuickAddCategory::CommonArea => totals.common_areas,
        }
    }
}

#[component]
pub fn QuickAddPanel() -> impl IntoView {
    let store = use_app_store();
    let totals = store_select(store, PropertyStructure::totals);

    view! {
        <aside class="quick-add-panel">
            <h2>"Quick Add"</h2>
            <ul>
                {QuickAddCategory::ALL.iter().map(|category| {
                    let category = *category;
                    let button = match category.action() {
                        Some(action) => view! {
                            <button
                                type="button"
                                class="quick-add-btn"
                                on:click=move |_| store_dispatch(&store, action.clone())
                            >
                                "+ " {category.label()}
                            </button>
                        }.into_any(),
                        None => view! {
                            <button type="button" class="quick-add-btn inert" disabled=true>
                                "+ " {category.label()}
                            </button>
                        }.into_any(),
                    };
                    view! {
                        <li class="quick-add-row">
                            {button}
                            <span class="quick-add-count">{move || category.count(&totals.get())}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </aside>
    }
}
