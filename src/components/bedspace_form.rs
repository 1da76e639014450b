//! Bedspace Form Component
//!
//! Bed list for one room. The "number of beds" field reconciles the list
//! length through `SetBedCount`; beds are added or dropped from the end.

use leptos::prelude::*;
use property_structure::{
    Bedspace, BedspaceDetails, BedspaceId, BedspaceType, FloorId, RoomId, StructureAction, UnitId,
};

use crate::components::{kind_options, target_value, DeleteConfirmButton, KindSelect};
use crate::context::use_app_context;
use crate::store::{store_dispatch, store_select, use_app_store};

#[component]
pub fn BedspaceForm(floor_id: FloorId, unit_id: UnitId, room_id: RoomId) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let floor_id = StoredValue::new(floor_id);
    let unit_id = StoredValue::new(unit_id);
    let room_id = StoredValue::new(room_id);

    let beds = store_select(store, move |s| {
        s.room(&floor_id.get_value(), &unit_id.get_value(), &room_id.get_value())
            .map(|r| r.bedspaces.clone())
            .unwrap_or_default()
    });

    let bed_count = move || beds.with(Vec::len);
    let bed_ids = move || beds.with(|list| list.iter().map(|b| b.id.clone()).collect::<Vec<_>>());

    let set_count = move |ev: web_sys::Event| {
        let Some(count) = ctx.config.parse_bed_count(&target_value(&ev)) else {
            return;
        };
        store_dispatch(
            &store,
            StructureAction::SetBedCount {
                floor: floor_id.get_value(),
                unit: unit_id.get_value(),
                room: room_id.get_value(),
                count,
            },
        );
    };

    view! {
        <div class="bedspace-form">
            <div class="form-row">
                <label>"Number of beds"</label>
                <input
                    type="number"
                    min="0"
                    max=ctx.config.max_beds_per_room.to_string()
                    prop:value=move || bed_count().to_string()
                    on:change=set_count
                />
                <button
                    type="button"
                    class="add-child-btn"
                    on:click=move |_| store_dispatch(
                        &store,
                        StructureAction::AddBedspace {
                            floor: floor_id.get_value(),
                            unit: unit_id.get_value(),
                            room: room_id.get_value(),
                        },
                    )
                >
                    "+ Bed"
                </button>
            </div>

            <ul class="bedspace-list">
                <For
                    each=bed_ids
                    key=|bed_id| bed_id.clone()
                    children=move |bed_id| view! {
                        <BedspaceRow
                            floor_id=floor_id.get_value()
                            unit_id=unit_id.get_value()
                            room_id=room_id.get_value()
                            bed_id=bed_id
                        />
                    }
                />
            </ul>
        </div>
    }
}

/// One bed in the list, keyed by id so edits keep the row mounted
#[component]
fn BedspaceRow(floor_id: FloorId, unit_id: UnitId, room_id: RoomId, bed_id: BedspaceId) -> impl IntoView {
    let store = use_app_store();
    let floor_id = StoredValue::new(floor_id);
    let unit_id = StoredValue::new(unit_id);
    let room_id = StoredValue::new(room_id);
    let bed_id = StoredValue::new(bed_id);

    let bed = store_select(store, move |s| {
        s.bedspace(&floor_id.get_value(), &unit_id.get_value(), &room_id.get_value(), &bed_id.get_value())
            .cloned()
    });

    let edit = move |change: &dyn Fn(&mut BedspaceDetails)| {
        let Some(mut details) = bed.with_untracked(|b| b.as_ref().map(Bedspace::details)) else {
            return;
        };
        change(&mut details);
        store_dispatch(
            &store,
            StructureAction::UpdateBedspace {
                floor: floor_id.get_value(),
                unit: unit_id.get_value(),
                room: room_id.get_value(),
                bedspace: bed_id.get_value(),
                details,
            },
        );
    };

    let name = move || bed.with(|b| b.as_ref().map(|b| b.name.clone()).unwrap_or_default());
    let kind = Signal::derive(move || {
        bed.with(|b| b.as_ref().map(|b| b.kind.as_str().to_string()).unwrap_or_default())
    });

    view! {
        <li class="bedspace-row">
            <input
                type="text"
                prop:value=name
                on:change=move |ev| {
                    let name = target_value(&ev);
                    edit(&|d| d.name = name.clone());
                }
            />
            <KindSelect
                options=kind_options(BedspaceType::ALL, BedspaceType::as_str, BedspaceType::label)
                current=kind
                on_change=move |value: String| {
                    let kind = BedspaceType::from_str(&value);
                    edit(&|d| d.kind = kind);
                }
            />
            <DeleteConfirmButton
                prompt="Remove bed?"
                on_confirm=move |_| store_dispatch(
                    &store,
                    StructureAction::RemoveBedspace {
                        floor: floor_id.get_value(),
                        unit: unit_id.get_value(),
                        room: room_id.get_value(),
                        bedspace: bed_id.get_value(),
                    },
                )
            />
        </li>
    }
}
