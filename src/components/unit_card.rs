//! Unit Card Component

use leptos::prelude::*;
use property_structure::{FloorId, StructureAction, Unit, UnitDetails, UnitId, UnitType};

use crate::components::{
    count_label, kind_options, target_value, DeleteConfirmButton, EnableSwitch, KindSelect, RoomCard,
};
use crate::config::parse_area;
use crate::store::{store_dispatch, store_select, use_app_store};

/// A unit inside a floor card, with its rooms
#[component]
pub fn UnitCard(floor_id: FloorId, unit_id: UnitId) -> impl IntoView {
    let store = use_app_store();
    let floor_id = StoredValue::new(floor_id);
    let unit_id = StoredValue::new(unit_id);

    let unit = store_select(store, move |s| {
        floor_id.with_value(|f| unit_id.with_value(|u| s.unit(f, u).cloned()))
    });
    let enabled = RwSignal::new(unit.with_untracked(|u| u.as_ref().map_or(true, |u| u.is_enabled)));

    let edit = move |change: &dyn Fn(&mut UnitDetails)| {
        let Some(mut details) = unit.with_untracked(|u| u.as_ref().map(Unit::details)) else {
            return;
        };
        change(&mut details);
        store_dispatch(
            &store,
            StructureAction::UpdateUnit { floor: floor_id.get_value(), unit: unit_id.get_value(), details },
        );
    };

    let name = move || unit.with(|u| u.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let kind = Signal::derive(move || {
        unit.with(|u| u.as_ref().map(|u| u.kind.as_str().to_string()).unwrap_or_default())
    });
    let area = move || unit.with(|u| u.as_ref().map(|u| u.area.to_string()).unwrap_or_default());
    let counts = move || {
        unit.with(|u| {
            u.as_ref()
                .map(|u| {
                    format!(
                        "{} · {}",
                        count_label(u.room_count(), "Room"),
                        count_label(u.bedspace_count(), "Bedspace")
                    )
                })
                .unwrap_or_default()
        })
    };
    let room_ids = move || {
        unit.with(|u| {
            u.as_ref()
                .map(|u| u.rooms.iter().map(|r| r.id.clone()).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="unit-card">
            <header class="card-header">
                <h3 class="card-title">{name}</h3>
                <span class="card-counts">{counts}</span>
                <EnableSwitch enabled=enabled label="Enabled" />
                <DeleteConfirmButton
                    prompt="Remove unit and its rooms?"
                    on_confirm=move |_| store_dispatch(
                        &store,
                        StructureAction::RemoveUnit { floor: floor_id.get_value(), unit: unit_id.get_value() },
                    )
                />
            </header>

            <Show when=move || enabled.get()>
                <div class="card-body">
                    <div class="form-row">
                        <label>"Name"</label>
                        <input
                            type="text"
                            prop:value=name
                            on:change=move |ev| {
                                let name = target_value(&ev);
                                edit(&|d| d.name = name.clone());
                            }
                        />
                        <label>"Type"</label>
                        <KindSelect
                            options=kind_options(UnitType::ALL, UnitType::as_str, UnitType::label)
                            current=kind
                            on_change=move |value: String| edit(&|d| d.kind = UnitType::from_str(&value))
                        />
                        <label>"Area (m²)"</label>
                        <input
                            type="number"
                            min="0"
                            step="0.1"
                            prop:value=area
                            on:change=move |ev| {
                                if let Some(area) = parse_area(&target_value(&ev)) {
                                    edit(&|d| d.area = area);
                                }
                            }
                        />
                    </div>

                    <button
                        type="button"
                        class="add-child-btn"
                        on:click=move |_| store_dispatch(
                            &store,
                            StructureAction::AddRoom { floor: floor_id.get_value(), unit: unit_id.get_value() },
                        )
                    >
                        "+ Room"
                    </button>

                    <For
                        each=room_ids
                        key=|room_id| room_id.clone()
                        children=move |room_id| view! {
                            <RoomCard floor_id=floor_id.get_value() unit_id=unit_id.get_value() room_id=room_id />
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
