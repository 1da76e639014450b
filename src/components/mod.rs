//! UI Components
//!
//! Reusable Leptos components, one card per level of the property tree.

mod floor_card;
mod unit_card;
mod room_card;
mod bedspace_form;
mod common_area_card;
mod quick_add_panel;
mod structure_outline;
mod delete_confirm_button;
mod kind_select;
mod enable_switch;

pub use floor_card::FloorCard;
pub use unit_card::UnitCard;
pub use room_card::RoomCard;
pub use bedspace_form::BedspaceForm;
pub use common_area_card::CommonAreaCard;
pub use quick_add_panel::QuickAddPanel;
pub use structure_outline::StructureOutline;
pub use delete_confirm_button::DeleteConfirmButton;
pub use kind_select::{kind_options, KindSelect};
pub use enable_switch::EnableSwitch;

use wasm_bindgen::JsCast;

/// Value of the input or select that fired `ev`
pub(crate) fn target_value(ev: &web_sys::Event) -> String {
    let Some(target) = ev.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
        return input.value();
    }
    if let Some(select) = target.dyn_ref::<web_sys::HtmlSelectElement>() {
        return select.value();
    }
    String::new()
}

/// "1 Room" / "3 Rooms"
pub(crate) fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0, "Room"), "0 Rooms");
        assert_eq!(count_label(1, "Bedspace"), "1 Bedspace");
        assert_eq!(count_label(4, "Unit"), "4 Units");
    }
}
