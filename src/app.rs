//! Property Setup App
//!
//! Main application component: quick-add sidebar, floor editor and outline.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FloorCard, QuickAddPanel, StructureOutline};
use crate::config::EditorConfig;
use crate::context::AppContext;
use crate::store::{store_record_submission, store_select, store_snapshot, AppState};
use crate::submit;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    let (notice, set_notice) = signal::<Option<(u32, String)>>(None);
    let ctx = AppContext::new(EditorConfig::default(), (notice, set_notice));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    let floor_ids = store_select(store, |s| s.floors().iter().map(|f| f.id.clone()).collect::<Vec<_>>());
    let totals = store_select(store, |s| s.totals());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let snapshot = store_snapshot(&store);
        match submit::submit_structure(&snapshot, &ctx.config) {
            Ok(text) => {
                let count = store_record_submission(&store);
                log::info!("[SUBMIT] submission #{} logged", count);
                ctx.flash(text);
            }
            Err(e) => web_sys::console::error_1(&format!("[SUBMIT] Error: {}", e).into()),
        }
    };

    view! {
        <div class="app-layout">
            // Left: Quick-Add Panel
            <QuickAddPanel />

            // Center: Floor editor
            <main class="main-content">
                <h1>"Property Structure"</h1>

                <form class="structure-form" on:submit=on_submit>
                    <For
                        each=move || floor_ids.get()
                        key=|floor_id| floor_id.clone()
                        children=move |floor_id| view! { <FloorCard floor_id=floor_id /> }
                    />

                    <div class="form-footer">
                        <button type="submit" class="save-btn">"Save structure"</button>
                        {move || ctx.notice().map(|text| view! { <span class="save-notice">{text}</span> })}
                    </div>
                </form>

                <p class="structure-count">
                    {move || {
                        let t = totals.get();
                        format!(
                            "{} floors, {} units, {} rooms, {} bedspaces",
                            t.floors, t.units, t.rooms, t.bedspaces
                        )
                    }}
                </p>
            </main>

            // Right: Outline
            <StructureOutline />
        </div>
    }
}
