//! Calendar View Component
//!
//! Month grid with per-day category dots. Defaults to April 2026, the
//! start of the trip; tapping a day opens its detail sheet.

use chrono::{Datelike, Local, NaiveDate};
use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::views;

const WEEKDAY_HEADERS: &[&str] = &["日", "一", "二", "三", "四", "五", "六"];
const MAX_DOTS: usize = 4;

#[component]
pub fn CalendarView(#[prop(into)] on_date_select: Callback<NaiveDate>) -> impl IntoView {
    let store = use_app_store();
    let (month, set_month) = signal((2026i32, 4u32));

    let grid = move || {
        let (year, mon) = month.get();
        let items = store.items().get();
        let today = Local::now().date_naive();
        views::month_grid(year, mon)
            .into_iter()
            .map(|day| {
                let bucket = views::calendar_bucket(&items, day);
                let count = bucket.len();
                let in_month = day.month() == mon;
                let is_today = day == today;
                let cell_class = match (in_month, is_today) {
                    (false, _) => "day-cell outside",
                    (true, true) => "day-cell today",
                    (true, false) => "day-cell",
                };
                let number_class = if count > 0 { "day-number busy" } else { "day-number" };
                view! {
                    <div class=cell_class on:click=move |_| on_date_select.run(day)>
                        <span class=number_class>{day.day()}</span>
                        <div class="day-dots">
                            {bucket.iter().take(MAX_DOTS).map(|item| {
                                let title_attr = format!(
                                    "{}{} - {}",
                                    item.time.as_deref().map(|t| format!("{t} ")).unwrap_or_default(),
                                    item.title,
                                    item.category.label(),
                                );
                                let entry_class = if item.is_completed {
                                    "day-entry done"
                                } else {
                                    "day-entry"
                                };
                                view! {
                                    <div class=entry_class title=title_attr>
                                        <span class=format!("dot {}", item.category.dot_class()) />
                                        {item.time.clone().map(|t| view! {
                                            <span class="day-entry-time">{t}</span>
                                        })}
                                        <span class="day-entry-title">{item.title.clone()}</span>
                                    </div>
                                }
                            }).collect_view()}
                            {(count > MAX_DOTS).then(|| view! {
                                <div class="day-overflow">"+ " {count - MAX_DOTS}</div>
                            })}
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="calendar">
            <div class="calendar-header">
                <button
                    class="icon-btn"
                    on:click=move |_| {
                        let (y, m) = month.get();
                        set_month.set(views::prev_month(y, m));
                    }
                >
                    "‹"
                </button>
                <h2>{move || {
                    let (y, m) = month.get();
                    format!("{y:04} / {m:02}")
                }}</h2>
                <button
                    class="icon-btn"
                    on:click=move |_| {
                        let (y, m) = month.get();
                        set_month.set(views::next_month(y, m));
                    }
                >
                    "›"
                </button>
            </div>
            <div class="calendar-weekdays">
                {WEEKDAY_HEADERS.iter().map(|d| view! {
                    <div class="weekday">{*d}</div>
                }).collect_view()}
            </div>
            <div class="calendar-grid">{grid}</div>
        </div>
    }
}
