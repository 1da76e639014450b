//! Room Card Component

use leptos::prelude::*;
use property_structure::{FloorId, Room, RoomDetails, RoomId, RoomType, StructureAction, UnitId};

use crate::components::{
    count_label, kind_options, target_value, BedspaceForm, DeleteConfirmButton, EnableSwitch, KindSelect,
};
use crate::config::parse_area;
use crate::store::{store_dispatch, store_select, use_app_store};

#[component]
pub fn RoomCard(floor_id: FloorId, unit_id: UnitId, room_id: RoomId) -> impl IntoView {
    let store = use_app_store();
    let floor_id = StoredValue::new(floor_id);
    let unit_id = StoredValue::new(unit_id);
    let room_id = StoredValue::new(room_id);

    let room = store_select(store, move |s| {
        s.room(&floor_id.get_value(), &unit_id.get_value(), &room_id.get_value()).cloned()
    });
    let enabled = RwSignal::new(room.with_untracked(|r| r.as_ref().map_or(true, |r| r.is_enabled)));

    let edit = move |change: &dyn Fn(&mut RoomDetails)| {
        let Some(mut details) = room.with_untracked(|r| r.as_ref().map(Room::details)) else {
            return;
        };
        change(&mut details);
        store_dispatch(
            &store,
            StructureAction::UpdateRoom {
                floor: floor_id.get_value(),
                unit: unit_id.get_value(),
                room: room_id.get_value(),
                details,
            },
        );
    };

    let name = move || room.with(|r| r.as_ref().map(|r| r.name.clone()).unwrap_or_default());
    let kind = Signal::derive(move || {
        room.with(|r| r.as_ref().map(|r| r.kind.as_str().to_string()).unwrap_or_default())
    });
    let area = move || room.with(|r| r.as_ref().map(|r| r.area.to_string()).unwrap_or_default());
    let beds = move || room.with(|r| count_label(r.as_ref().map_or(0, Room::bedspace_count), "Bedspace"));

    view! {
        <div class="room-card">
            <header class="card-header">
                <h4 class="card-title">{name}</h4>
                <span class="card-counts">{beds}</span>
                <EnableSwitch enabled=enabled label="Enabled" />
                <DeleteConfirmButton
                    prompt="Remove room and its beds?"
                    on_confirm=move |_| store_dispatch(
                        &store,
                        StructureAction::RemoveRoom {
                            floor: floor_id.get_value(),
                            unit: unit_id.get_value(),
                            room: room_id.get_value(),
                        },
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
                            options=kind_options(RoomType::ALL, RoomType::as_str, RoomType::label)
                            current=kind
                            on_change=move |value: String| edit(&|d| d.kind = RoomType::from_str(&value))
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

                    <BedspaceForm
                        floor_id=floor_id.get_value()
                        unit_id=unit_id.get_value()
                        room_id=room_id.get_value()
                    />
                </div>
            </Show>
        </div>
    }
}
