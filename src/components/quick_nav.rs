//! Quick Navigation Component
//!
//! Sticky chip row that smooth-scrolls to a dashboard section.

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

const NAV_CHIPS: &[(&str, &str)] = &[
    ("section-daily", "每日"),
    ("section-todo", "待辦"),
    ("section-critical", "緊急"),
    ("section-costume", "服裝"),
    ("section-a", "A 長時"),
    ("section-b", "B 短程"),
    ("section-c", "C 放鬆"),
    ("section-d", "D 填補"),
];

/// Smooth-scroll to an element by id; missing targets are ignored.
pub fn scroll_to(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(el) = document.get_element_by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[component]
pub fn QuickNav() -> impl IntoView {
    view! {
        <div class="quick-nav">
            {NAV_CHIPS.iter().map(|(id, label)| {
                view! {
                    <button
                        type="button"
                        class="nav-chip"
                        on:click=move |_| scroll_to(id)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
