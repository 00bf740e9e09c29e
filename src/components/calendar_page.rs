//! Calendar Page
//!
//! Month grid plus the next five dated items, soonest first.

use chrono::{Datelike, Local, NaiveDate};
use leptos::prelude::*;

use crate::components::CalendarView;
use crate::models::{Category, Item};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::views;

const UPCOMING_COUNT: usize = 5;

fn weekday_zh(date: NaiveDate) -> &'static str {
    ["日", "一", "二", "三", "四", "五", "六"]
        [date.weekday().num_days_from_sunday() as usize]
}

#[component]
pub fn CalendarPage(
    #[prop(into)] on_date_select: Callback<NaiveDate>,
    #[prop(into)] on_edit: Callback<Item>,
) -> impl IntoView {
    let store = use_app_store();

    let upcoming = move || {
        let today = Local::now().date_naive();
        views::upcoming(&store.items().get(), today, UPCOMING_COUNT)
    };

    view! {
        <div class="page calendar-page">
            <CalendarView on_date_select=on_date_select />

            <section class="upcoming">
                <h3 class="section-title">"📌 即將到來"</h3>
                {move || {
                    let items = upcoming();
                    if items.is_empty() {
                        view! {
                            <div class="empty-note">"沒有安排中的行程"</div>
                        }
                        .into_any()
                    } else {
                        items
                            .into_iter()
                            .map(|item| {
                                let date = item.date.expect("upcoming items carry a date");
                                let dot_class = if item.category == Category::Critical {
                                    "upcoming-dot critical"
                                } else {
                                    "upcoming-dot"
                                };
                                let open = item.clone();
                                view! {
                                    <div
                                        class="upcoming-row"
                                        on:click=move |_| on_edit.run(open.clone())
                                    >
                                        <div class="upcoming-date">
                                            <span class="upcoming-day">{date.day()}</span>
                                            <span class="upcoming-weekday">
                                                {format!("週{}", weekday_zh(date))}
                                            </span>
                                        </div>
                                        <span class=dot_class />
                                        <div class="upcoming-body">
                                            <span class="upcoming-title">{item.title.clone()}</span>
                                            {item.time.clone().map(|t| view! {
                                                <span class="upcoming-time">{t}</span>
                                            })}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </section>
        </div>
    }
}
