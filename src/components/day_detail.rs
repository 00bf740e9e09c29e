//! Day Detail Component
//!
//! Bottom sheet for one calendar date: the day's items in clock order
//! plus a shortcut to add an item pre-dated to that day.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::components::ItemCard;
use crate::models::Item;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::views;

#[component]
pub fn DayDetail(
    date: NaiveDate,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_edit: Callback<Item>,
    #[prop(into)] on_add: Callback<NaiveDate>,
) -> impl IntoView {
    let store = use_app_store();

    let bucket = move || views::calendar_bucket(&store.items().get(), date);

    view! {
        <div class="modal-backdrop">
            <div class="day-detail">
                <div class="day-detail-header">
                    <div>
                        <span class="day-detail-caption">"行程規劃"</span>
                        <h2>{date.to_string()}</h2>
                    </div>
                    <button class="icon-btn" on:click=move |_| on_close.run(())>"✕"</button>
                </div>
                <div class="day-detail-list">
                    {move || {
                        let items = bucket();
                        if items.is_empty() {
                            view! {
                                <div class="empty-note">"當天尚無安排行程"</div>
                            }
                            .into_any()
                        } else {
                            items
                                .into_iter()
                                .map(|item| view! {
                                    <ItemCard item=item on_edit=move |i: Item| {
                                        on_close.run(());
                                        on_edit.run(i);
                                    } />
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
                <button
                    class="save-btn"
                    on:click=move |_| {
                        on_close.run(());
                        on_add.run(date);
                    }
                >
                    "＋ 新增當日行程"
                </button>
            </div>
        </div>
    }
}
