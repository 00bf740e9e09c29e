//! Item Card Component
//!
//! One checklist entry: completion checkbox, date badge, live timer
//! readout, category switcher, map/share/edit/delete actions, and the
//! costume progress control.

use chrono::{Duration, Local};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::{DeleteConfirmButton, ProgressBar};
use crate::context::use_app_context;
use crate::models::{Category, Item, Toast, ToastKind, FUNCTION_BASED_CATS, TIME_BASED_CATS};
use crate::platform;
use crate::store::{
    store_remove_item, store_set_category, store_set_progress, store_toggle_item,
    store_toggle_timer, use_app_store,
};
use crate::timer::{self, TimerPhase};

#[component]
pub fn ItemCard(
    item: Item,
    /// Show the 25/50/75/100 progress control (costume sections).
    #[prop(optional)]
    show_progress: bool,
    #[prop(into)] on_edit: Callback<Item>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = item.id;
    let category = item.category;
    let completed = item.is_completed;
    let timer_running = item.timer_started_at.is_some();

    let card_class = move || {
        let mut class = format!("item-card {}", category.card_class());
        if completed {
            class.push_str(" completed");
        }
        if timer_running && !completed {
            class.push_str(" timing");
        }
        if ctx.highlighted.get() == Some(id) {
            class.push_str(" highlighted");
        }
        class
    };

    let timer_item = item.clone();
    let readout = move || timer::readout(&timer_item, ctx.now_ms.get());

    let date_badge = item.date.map(|date| {
        let time = item.time.clone();
        let edit_item = item.clone();
        let now = ctx.now_ms;
        let label = move || {
            // Subscribe to the tick so the badge rolls over at midnight.
            let _ = now.get();
            let today = Local::now().date_naive();
            if date == today {
                "今天".to_string()
            } else if date == today + Duration::days(1) {
                "明天".to_string()
            } else {
                date.format("%m-%d").to_string()
            }
        };
        let alert = move || {
            let _ = now.get();
            let today = Local::now().date_naive();
            !completed && (date == today || date == today + Duration::days(1))
        };
        view! {
            <button
                type="button"
                class=move || if alert() { "date-badge alert" } else { "date-badge" }
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_edit.run(edit_item.clone());
                }
            >
                <span>{label}</span>
                {time.map(|t| view! { <span class="date-badge-time">{t}</span> })}
                {move || alert().then(|| "⚠")}
            </button>
        }
    });

    let timer_display = (timer_running && !completed).then(|| {
        let readout = readout.clone();
        let fraction = readout.clone();
        let expired = {
            let readout = readout.clone();
            move || readout().phase == TimerPhase::Expired
        };
        let has_duration = item.suggested_duration.is_some();
        view! {
            <div class=move || {
                if expired() { "timer-display expired" } else { "timer-display" }
            }>
                {has_duration.then(|| view! {
                    <div
                        class="timer-fill"
                        style:width=move || format!("{:.0}%", fraction().fraction * 100.0)
                    />
                })}
                <span class="timer-label">{move || readout().label}</span>
                {{
                    let expired = expired.clone();
                    move || expired().then(|| view! { <span class="timer-up">"時間到!"</span> })
                }}
            </div>
        }
    });

    let duration_hint = (!timer_running && !completed)
        .then_some(item.suggested_duration)
        .flatten()
        .map(|minutes| {
            let edit_item = item.clone();
            view! {
                <button
                    type="button"
                    class="duration-hint"
                    title="點擊修改建議時間"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_edit.run(edit_item.clone());
                    }
                >
                    "⏳ 建議: " {minutes} "分"
                </button>
            }
        });

    let nav_item = item.clone();
    let has_location = item.location.is_some();
    let nav_label = item
        .location
        .clone()
        .unwrap_or_else(|| "搜尋地點".to_string());

    let timer_toggle = (!completed).then(|| {
        let will_request_permission = !timer_running && item.suggested_duration.is_some();
        view! {
            <button
                type="button"
                class=if timer_running { "timer-btn running" } else { "timer-btn" }
                title=if timer_running { "停止計時" } else { "開始計時" }
                on:click=move |ev| {
                    ev.stop_propagation();
                    if will_request_permission {
                        platform::ensure_notification_permission();
                    }
                    ctx.dispatch(store_toggle_timer(&store, id));
                }
            >
                {if timer_running { "⏹ 停止" } else { "⏱ 計時" }}
            </button>
        }
    });

    let share_item = item.clone();
    let edit_item = item.clone();

    view! {
        <div id=format!("item-{}", id) class=card_class>
            {move || (ctx.highlighted.get() == Some(id)).then(|| view! {
                <span class="highlight-spark">"✨"</span>
            })}
            <div class="item-card-body">
                <input
                    type="checkbox"
                    class="item-check"
                    prop:checked=completed
                    on:change=move |_| ctx.dispatch(store_toggle_item(&store, id))
                />
                <div class="item-main">
                    <div class="item-head">
                        <h3 class=move || {
                            if completed { "item-title done" } else { "item-title" }
                        }>
                            {item.title.clone()}
                        </h3>
                        {date_badge}
                    </div>
                    {timer_display}
                    {item.description.clone().map(|desc| view! {
                        <p class="item-desc">{desc}</p>
                    })}
                    {duration_hint}
                    {(show_progress && category == Category::Costume).then(|| view! {
                        <ProgressBar
                            progress=item.progress.unwrap_or(0)
                            on_change=move |value: u8| {
                                ctx.dispatch(store_set_progress(&store, id, value));
                            }
                        />
                    })}
                    <div class="item-meta">
                        <div class="category-badge-wrap" on:click=|ev| ev.stop_propagation()>
                            <span class=format!("category-badge {}", category.badge_class())>
                                {category.icon()} " " {category.short_label()} " ▾"
                            </span>
                            <select
                                class="category-select"
                                on:change=move |ev| {
                                    let Some(target) = ev.target() else { return };
                                    let Some(select) =
                                        target.dyn_ref::<web_sys::HtmlSelectElement>()
                                    else {
                                        return;
                                    };
                                    if let Some(cat) = Category::from_tag(&select.value()) {
                                        ctx.dispatch(store_set_category(&store, id, cat));
                                    }
                                }
                            >
                                <optgroup label="📅 時間與重要性">
                                    {TIME_BASED_CATS.iter().map(|c| view! {
                                        <option value=c.tag() selected=(*c == category)>
                                            {c.label()}
                                        </option>
                                    }).collect_view()}
                                </optgroup>
                                <optgroup label="🛠️ 功能與任務">
                                    {FUNCTION_BASED_CATS.iter().map(|c| view! {
                                        <option value=c.tag() selected=(*c == category)>
                                            {c.label()}
                                        </option>
                                    }).collect_view()}
                                </optgroup>
                            </select>
                        </div>
                        <button
                            type="button"
                            class=if has_location { "nav-btn located" } else { "nav-btn" }
                            title="在地圖上搜尋此行程"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                platform::open_map_search(&nav_item);
                            }
                        >
                            "📍 " {nav_label}
                        </button>
                        {timer_toggle}
                    </div>
                </div>
                <div class="item-actions" on:click=|ev| ev.stop_propagation()>
                    <button
                        type="button"
                        class="icon-btn"
                        title="分享行程"
                        on:click=move |_| {
                            let item = share_item.clone();
                            spawn_local(async move {
                                let ctx = ctx;
                                if platform::copy_share_summary(&item).await {
                                    ctx.toast(Toast::new(
                                        "行程內容已複製到剪貼簿！",
                                        ToastKind::Info,
                                    ));
                                }
                            });
                        }
                    >
                        "📤"
                    </button>
                    <button
                        type="button"
                        class="icon-btn"
                        title="編輯"
                        on:click=move |_| on_edit.run(edit_item.clone())
                    >
                        "✏"
                    </button>
                    <DeleteConfirmButton on_confirm=move |_| {
                        ctx.dispatch(store_remove_item(&store, id));
                    } />
                </div>
            </div>
        </div>
    }
}
