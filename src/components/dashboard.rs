//! Dashboard Page
//!
//! The main overview: live clock, trip progress, the decision panel and
//! every function-based category rendered as its own section.

use chrono::Local;
use leptos::prelude::*;

use crate::components::{DecisionPanel, ItemCard, QuickNav};
use crate::context::use_app_context;
use crate::models::{Category, Item};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::views;

/// Sections that disappear when empty instead of showing a placeholder.
const OPTION_SECTIONS: &[(Category, &str)] = &[
    (Category::A, "section-a"),
    (Category::B, "section-b"),
    (Category::C, "section-c"),
    (Category::D, "section-d"),
    (Category::Uncertain, "section-uncertain"),
];

#[component]
pub fn Dashboard(
    #[prop(into)] filtered: Signal<Vec<Item>>,
    #[prop(into)] query: Signal<String>,
    #[prop(into)] on_edit: Callback<Item>,
    #[prop(into)] on_pick: Callback<Option<Category>>,
) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let clock = move || {
        ctx.now_ms.get();
        Local::now().format("%H:%M:%S").to_string()
    };
    let date_line = move || {
        ctx.now_ms.get();
        Local::now().format("%Y-%m-%d (%a)").to_string()
    };

    let ratio = move || views::completion_ratio(&store.items().get());
    let ratio_label = move || format!("{:.0}%", ratio() * 100.0);
    let ratio_width = move || format!("width: {:.1}%", ratio() * 100.0);

    let cards = move |cat: Category, show_progress: bool| {
        views::by_categories(&filtered.get(), &[cat])
            .into_iter()
            .map(|item| view! { <ItemCard item=item show_progress=show_progress on_edit=on_edit /> })
            .collect_view()
    };

    let costume_counter = move || {
        let costumes = views::by_categories(&filtered.get(), &[Category::Costume]);
        let done = costumes.iter().filter(|i| i.is_completed).count();
        format!("{done} / {}", costumes.len())
    };

    view! {
        <div class="page dashboard">
            <QuickNav />

            <div class="clock-card">
                <div class="clock-time">{clock}</div>
                <div class="clock-date">{date_line}</div>
            </div>

            <div class="ratio-card">
                <div class="ratio-row">
                    <span>"旅程完成度"</span>
                    <span class="ratio-value">{ratio_label}</span>
                </div>
                <div class="ratio-track">
                    <div class="ratio-fill" style=ratio_width />
                </div>
            </div>

            <DecisionPanel on_pick=on_pick />

            <section class="category-section" id="section-daily">
                <h3 class="section-title">{Category::Daily.label()}</h3>
                {move || cards(Category::Daily, false)}
            </section>

            <section class="category-section" id="section-todo">
                <h3 class="section-title">{Category::Todo.label()}</h3>
                {move || {
                    let todos = views::by_categories(&filtered.get(), &[Category::Todo]);
                    if todos.is_empty() {
                        view! {
                            <div class="empty-note">"無待辦事項，好好享受旅程！"</div>
                        }
                        .into_any()
                    } else {
                        todos
                            .into_iter()
                            .map(|item| view! { <ItemCard item=item on_edit=on_edit /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </section>

            <section class="category-section" id="section-critical">
                <h3 class="section-title">{Category::Critical.label()}</h3>
                {move || {
                    let critical = views::by_categories(&filtered.get(), &[Category::Critical]);
                    if critical.is_empty() {
                        view! {
                            <div class="empty-note">"目前沒有緊急事項，太棒了！"</div>
                        }
                        .into_any()
                    } else {
                        critical
                            .into_iter()
                            .map(|item| view! { <ItemCard item=item on_edit=on_edit /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </section>

            <section class="category-section" id="section-costume">
                <div class="section-head">
                    <h3 class="section-title">{Category::Costume.label()}</h3>
                    <span class="section-counter">{costume_counter}</span>
                </div>
                {move || cards(Category::Costume, true)}
            </section>

            {OPTION_SECTIONS.iter().map(|(cat, section_id)| {
                let cat = *cat;
                view! {
                    <section class="category-section" id=*section_id>
                        {move || {
                            let items = views::by_categories(&filtered.get(), &[cat]);
                            if items.is_empty() && query.get().is_empty() {
                                return ().into_any();
                            }
                            view! {
                                <div class="section-head">
                                    <h3 class="section-title">{cat.label()}</h3>
                                    {(cat != Category::Uncertain).then(|| view! {
                                        <button
                                            type="button"
                                            class="roll-btn"
                                            on:click=move |_| on_pick.run(Some(cat))
                                        >
                                            "🎲 隨機"
                                        </button>
                                    })}
                                </div>
                                {if items.is_empty() {
                                    view! { <div class="empty-note">"無符合項目"</div> }.into_any()
                                } else {
                                    items
                                        .into_iter()
                                        .map(|item| view! { <ItemCard item=item on_edit=on_edit /> })
                                        .collect_view()
                                        .into_any()
                                }}
                            }
                            .into_any()
                        }}
                    </section>
                }
            }).collect_view()}
        </div>
    }
}
