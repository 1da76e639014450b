//! Floor Card Component
//!
//! One floor: its details, summary counts, common area and units.

use leptos::prelude::*;
use property_structure::{Floor, FloorDetails, FloorId, StructureAction};

use crate::components::{count_label, target_value, CommonAreaCard, DeleteConfirmButton, EnableSwitch, UnitCard};
use crate::config::parse_floor_number;
use crate::store::{store_dispatch, store_select, use_app_store};

#[component]
pub fn FloorCard(floor_id: FloorId) -> impl IntoView {
    let store = use_app_store();
    let id = StoredValue::new(floor_id);

    let floor = store_select(store, move |s| id.with_value(|id| s.floor(id).cloned()));
    let field = move |get: fn(&Floor) -> String| floor.with(|f| f.as_ref().map(get).unwrap_or_default());

    // Local to this card, not part of the tree
    let enabled = RwSignal::new(floor.with_untracked(|f| f.as_ref().map_or(true, |f| f.is_enabled)));

    let edit = move |change: &dyn Fn(&mut FloorDetails)| {
        let Some(mut details) = floor.with_untracked(|f| f.as_ref().map(Floor::details)) else {
            return;
        };
        change(&mut details);
        store_dispatch(&store, StructureAction::UpdateFloor { floor: id.get_value(), details });
    };

    let unit_ids = move || {
        floor.with(|f| {
            f.as_ref()
                .map(|f| f.units.iter().map(|u| u.id.clone()).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };
    let area_ids = move || {
        floor.with(|f| {
            f.as_ref()
                .map(|f| f.common_areas.iter().map(|a| a.id.clone()).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };
    let summary = move || {
        floor.with(|f| {
            f.as_ref()
                .map(|f| {
                    format!(
                        "{} · {} · {}",
                        count_label(f.unit_count(), "Unit"),
                        count_label(f.room_count(), "Room"),
                        count_label(f.bedspace_count(), "Bedspace"),
                    )
                })
                .unwrap_or_default()
        })
    };

    view! {
        <section class="floor-card">
            <header class="card-header">
                <h2 class="card-title">{move || field(|f| f.name.clone())}</h2>
                <span class="card-counts">{summary}</span>
                <EnableSwitch enabled=enabled label="Enabled" />
                <DeleteConfirmButton
                    prompt="Remove floor and everything on it?"
                    on_confirm=move |_| store_dispatch(&store, StructureAction::RemoveFloor { floor: id.get_value() })
                />
            </header>

            <Show when=move || enabled.get()>
                <div class="card-body">
                    <div class="form-row">
                        <label>"Name"</label>
                        <input
                            type="text"
                            prop:value=move || field(|f| f.name.clone())
                            on:change=move |ev| {
                                let name = target_value(&ev);
                                edit(&|d| d.name = name.clone());
                            }
                        />
                        <label>"Number"</label>
                        <input
                            type="number"
                            min="1"
                            prop:value=move || field(|f| f.number.to_string())
                            on:change=move |ev| {
                                if let Some(number) = parse_floor_number(&target_value(&ev)) {
                                    edit(&|d| d.number = number);
                                }
                            }
                        />
                    </div>
                    <div class="form-row">
                        <label>"Description"</label>
                        <input
                            type="text"
                            placeholder="Optional"
                            prop:value=move || field(|f| f.description.clone())
                            on:change=move |ev| {
                                let description = target_value(&ev);
                                edit(&|d| d.description = description.clone());
                            }
                        />
                    </div>

                    <div class="card-actions">
                        <button
                            type="button"
                            class="add-child-btn"
                            on:click=move |_| store_dispatch(&store, StructureAction::AddUnit { floor: id.get_value() })
                        >
                            "+ Unit"
                        </button>
                        <button
                            type="button"
                            class="add-child-btn"
                            on:click=move |_| store_dispatch(&store, StructureAction::AddCommonArea { floor: id.get_value() })
                        >
                            "+ Common Area"
                        </button>
                    </div>

                    <For
                        each=area_ids
                        key=|area_id| area_id.clone()
                        children=move |area_id| view! { <CommonAreaCard floor_id=id.get_value() area_id=area_id /> }
                    />

                    <For
                        each=unit_ids
                        key=|unit_id| unit_id.clone()
                        children=move |unit_id| view! { <UnitCard floor_id=id.get_value() unit_id=unit_id /> }
                    />
                </div>
            </Show>
        </section>
    }
}
