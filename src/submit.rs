//! Structure Submission
//!
//! Serializes the current layout and logs it. Nothing leaves the page.

use property_structure::{PropertyStructure, StructureTotals};

use crate::config::EditorConfig;

/// Pretty JSON payload for the structure
pub fn structure_payload(structure: &PropertyStructure) -> Result<String, String> {
    serde_json::to_string_pretty(structure).map_err(|e| e.to_string())
}

/// Notice text shown after a save
pub fn submission_notice(totals: &StructureTotals) -> String {
    format!(
        "Saved {} floors, {} units, {} rooms, {} bedspaces",
        totals.floors, totals.units, totals.rooms, totals.bedspaces
    )
}

/// Log the payload to the browser console and return the notice text
pub fn submit_structure(structure: &PropertyStructure, config: &EditorConfig) -> Result<String, String> {
    let payload = structure_payload(structure)?;
    if config.log_payload {
        log::info!("[SUBMIT] {}", payload);
        match serde_wasm_bindgen::to_value(structure) {
            Ok(value) => web_sys::console::log_2(&"[SUBMIT] structure".into(), &value),
            Err(e) => web_sys::console::error_1(&format!("[SUBMIT] Error converting payload: {}", e).into()),
        }
    }
    Ok(submission_notice(&structure.totals()))
}
