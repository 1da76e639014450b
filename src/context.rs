//! Application Context
//!
//! Shared settings and the transient save notice, provided via Leptos
//! Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::EditorConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: EditorConfig,
    /// Current notice, tagged with the flash that raised it - read
    notice: ReadSignal<Option<(u32, String)>>,
    /// Current notice - write
    set_notice: WriteSignal<Option<(u32, String)>>,
}

impl AppContext {
    pub fn new(
        config: EditorConfig,
        notice: (ReadSignal<Option<(u32, String)>>, WriteSignal<Option<(u32, String)>>),
    ) -> Self {
        Self {
            config,
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    /// Notice text, if one is showing
    pub fn notice(&self) -> Option<String> {
        self.notice.get().map(|(_, text)| text)
    }

    /// Show a notice and clear it after the configured delay.
    ///
    /// A newer flash is not cleared by an older timer.
    pub fn flash(&self, text: String) {
        let seq = self.notice.get_untracked().map_or(1, |(seq, _)| seq + 1);
        self.set_notice.set(Some((seq, text)));

        let set_notice = self.set_notice;
        let delay = self.config.notice_duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            set_notice.update(|current| {
                if matches!(current, Some((shown, _)) if *shown == seq) {
                    *current = None;
                }
            });
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
