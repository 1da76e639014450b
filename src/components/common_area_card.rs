//! Common Area Card Component

use leptos::prelude::*;
use property_structure::{CommonArea, CommonAreaDetails, CommonAreaId, CommonAreaType, FloorId, StructureAction};

use crate::components::{kind_options, target_value, DeleteConfirmButton, EnableSwitch, KindSelect};
use crate::config::parse_area;
use crate::store::{store_dispatch, store_select, use_app_store};

#[component]
pub fn CommonAreaCard(floor_id: FloorId, area_id: CommonAreaId) -> impl IntoView {
    let store = use_app_store();
    let floor_id = StoredValue::new(floor_id);
    let area_id = StoredValue::new(area_id);

    let common_area = store_select(store, move |s| {
        s.common_area(&floor_id.get_value(), &area_id.get_value()).cloned()
    });
    let enabled = RwSignal::new(common_area.with_untracked(|a| a.as_ref().map_or(true, |a| a.is_enabled)));

    let edit = move |change: &dyn Fn(&mut CommonAreaDetails)| {
        let Some(mut details) = common_area.with_untracked(|a| a.as_ref().map(CommonArea::details)) else {
            return;
        };
        change(&mut details);
        store_dispatch(
            &store,
            StructureAction::UpdateCommonArea { floor: floor_id.get_value(), area: area_id.get_value(), details },
        );
    };

    let name = move || common_area.with(|a| a.as_ref().map(|a| a.name.clone()).unwrap_or_default());
    let kind = Signal::derive(move || {
        common_area.with(|a| a.as_ref().map(|a| a.kind.as_str().to_string()).unwrap_or_default())
    });
    let area = move || common_area.with(|a| a.as_ref().map(|a| a.area.to_string()).unwrap_or_default());

    view! {
        <div class="common-area-card">
            <header class="card-header">
                <h3 class="card-title">{name}</h3>
                <EnableSwitch enabled=enabled label="Enabled" />
                <DeleteConfirmButton
                    prompt="Remove common area?"
                    on_confirm=move |_| store_dispatch(
                        &store,
                        StructureAction::RemoveCommonArea { floor: floor_id.get_value(), area: area_id.get_value() },
                    )
                />
            </header>

            <Show when=move || enabled.get()>
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
                        options=kind_options(CommonAreaType::ALL, CommonAreaType::as_str, CommonAreaType::label)
                        current=kind
                        on_change=move |value: String| edit(&|d| d.kind = CommonAreaType::from_str(&value))
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
            </Show>
        </div>
    }
}
