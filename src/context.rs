//! Application Context
//!
//! Shared state provided via the Leptos context API: the wall-clock tick,
//! the toast queue with per-toast expiry, the decision-picker highlight,
//! and the active top-level view.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use uuid::Uuid;

use crate::models::{Tab, Toast};

/// How long a toast stays on screen.
const TOAST_MS: u32 = 3_000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current wall-clock tick in epoch milliseconds, updated once per
    /// second while the app is mounted.
    pub now_ms: ReadSignal<i64>,
    /// Active toast queue - read
    pub toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    /// Item highlighted by the decision picker - read
    pub highlighted: ReadSignal<Option<Uuid>>,
    set_highlighted: WriteSignal<Option<Uuid>>,
    /// Active top-level view - read
    pub tab: ReadSignal<Tab>,
    set_tab: WriteSignal<Tab>,
}

impl AppContext {
    pub fn new(
        now_ms: ReadSignal<i64>,
        toasts: (ReadSignal<Vec<Toast>>, WriteSignal<Vec<Toast>>),
        highlighted: (ReadSignal<Option<Uuid>>, WriteSignal<Option<Uuid>>),
        tab: (ReadSignal<Tab>, WriteSignal<Tab>),
    ) -> Self {
        Self {
            now_ms,
            toasts: toasts.0,
            set_toasts: toasts.1,
            highlighted: highlighted.0,
            set_highlighted: highlighted.1,
            tab: tab.0,
            set_tab: tab.1,
        }
    }

    /// Queue a toast and schedule its expiry. The expiry callback uses the
    /// `try_` accessor so it is a no-op if the app was torn down first.
    pub fn toast(&self, toast: Toast) {
        let id = toast.id;
        let set_toasts = self.set_toasts;
        self.set_toasts.update(|q| q.push(toast));
        Timeout::new(TOAST_MS, move || {
            let _ = set_toasts.try_update(|q| q.retain(|t| t.id != id));
        })
        .forget();
    }

    /// Dispatch the toast a store mutation produced, if any.
    pub fn dispatch(&self, toast: Option<Toast>) {
        if let Some(toast) = toast {
            self.toast(toast);
        }
    }

    /// Mark or clear the picker-highlighted item.
    pub fn set_highlighted(&self, id: Option<Uuid>) {
        self.set_highlighted.set(id);
    }

    /// Switch the active top-level view.
    pub fn set_tab(&self, tab: Tab) {
        self.set_tab.set(tab);
    }
}

/// Get the app context.
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
