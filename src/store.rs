//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The property
//! tree is only ever replaced through `store_dispatch`.

use leptos::prelude::*;
use property_structure::{PropertyStructure, StructureAction};
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current property layout
    pub structure: PropertyStructure,
    /// Number of times the layout has been submitted
    pub submissions: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            structure: PropertyStructure::new(),
            submissions: 0,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the tree with the result of one action
pub fn store_dispatch(store: &AppStore, action: StructureAction) {
    let binding = store.structure();
    let mut structure = binding.write();
    let next = structure.apply(&action);
    log::debug!("[STRUCTURE] {} -> {:?}", action.name(), next.totals());
    *structure = next;
}

/// Tracked, memoized view of part of the tree
pub fn store_select<T, F>(store: AppStore, select: F) -> Memo<T>
where
    T: PartialEq + Send + Sync + 'static,
    F: Fn(&PropertyStructure) -> T + Send + Sync + 'static,
{
    Memo::new(move |_| select(&*store.structure().read()))
}

/// Untracked copy of the current tree
pub fn store_snapshot(store: &AppStore) -> PropertyStructure {
    store.structure().get_untracked()
}

pub fn store_record_submission(store: &AppStore) -> u32 {
    let binding = store.submissions();
    let mut submissions = binding.write();
    *submissions += 1;
    *submissions
}
