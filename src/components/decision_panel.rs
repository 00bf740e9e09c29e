//! Decision Panel Component
//!
//! The "let fate decide" button grid on the dashboard; each button rolls
//! over one category's open items.

use leptos::prelude::*;

use crate::models::Category;

/// Categories worth rolling over from the dashboard.
const PICK_BUTTONS: &[(Category, &str)] = &[
    (Category::A, "A 長時"),
    (Category::B, "B 短程"),
    (Category::C, "C 放鬆"),
    (Category::D, "D 填補"),
    (Category::Todo, "待辦"),
    (Category::Food, "食"),
];

#[component]
pub fn DecisionPanel(#[prop(into)] on_pick: Callback<Option<Category>>) -> impl IntoView {
    view! {
        <div class="decision-panel">
            <h3 class="panel-title">"🎲 隨機行程決策"</h3>
            <div class="decision-grid">
                {PICK_BUTTONS.iter().map(|(cat, label)| {
                    let cat = *cat;
                    view! {
                        <button
                            type="button"
                            class="decision-btn"
                            on:click=move |_| on_pick.run(Some(cat))
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
