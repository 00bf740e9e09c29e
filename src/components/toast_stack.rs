//! Toast Stack Component
//!
//! Renders the transient toast queue; expiry is handled by the context.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toast-stack">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    view! {
                        <div class=toast.kind.css_class()>{toast.message.clone()}</div>
                    }
                }
            />
        </div>
    }
}
