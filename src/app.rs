//! Application Root
//!
//! Startup (load snapshot, daily rollover), the shared 1-second tick, the
//! debounced search, timer-expiry sweeps and the staged decision-picker
//! reveal all live here; the pages below only render and dispatch.

use chrono::NaiveDate;
use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::JsCast;

use crate::components::{
    CalendarPage, Dashboard, DayDetail, EditModal, EditTarget, ListsPage, ToastStack,
};
use crate::components::quick_nav::scroll_to;
use crate::context::AppContext;
use crate::models::{Category, Item, Tab, Toast, ToastKind};
use crate::picker::{self, DecisionPhase};
use crate::store::{self, AppState, AppStateStoreFields};
use crate::timer::ExpiryTracker;
use crate::{platform, storage, views};

/// Delay between the last keystroke and the search actually running.
const SEARCH_DEBOUNCE_MS: u32 = 300;
/// Drum-roll length before the picker reveals its winner.
const REVEAL_MS: u32 = 600;
/// How long the winner banner and highlight linger.
const CLEAR_MS: u32 = 4_000;

const TAB_BUTTONS: &[(Tab, &str, &str)] = &[
    (Tab::Dashboard, "📊", "總覽"),
    (Tab::Calendar, "📅", "日曆"),
    (Tab::Lists, "📋", "清單"),
];

#[component]
pub fn App() -> impl IntoView {
    // Load the snapshot and run the once-per-day rollover before anything
    // renders, so the store never holds stale Daily completions.
    let mut items = storage::load_items();
    let today = storage::today_string();
    let marker = storage::last_reset_date();
    let rollover = store::daily_reset(&mut items, marker.as_deref(), &today);
    if rollover.ran {
        storage::save_items(&items);
        storage::set_last_reset_date(&today);
    }

    let store = Store::new(AppState { items });
    provide_context(store);

    let (now_ms, set_now_ms) = signal(js_sys::Date::now() as i64);
    let ctx = AppContext::new(
        now_ms,
        signal(Vec::new()),
        signal(None),
        signal(Tab::Dashboard),
    );
    provide_context(ctx);
    ctx.dispatch(rollover.toast);

    // Shared wall-clock tick; every timer readout derives from it.
    let ticker = Interval::new(1_000, move || {
        let _ = set_now_ms.try_set(js_sys::Date::now() as i64);
    });
    let ticker = StoredValue::new_local(Some(ticker));
    on_cleanup(move || ticker.update_value(|t| drop(t.take())));

    // Expiry sweep on every tick; each countdown fires its alert once.
    let tracker = StoredValue::new(ExpiryTracker::new());
    Effect::new(move |_| {
        let now = now_ms.get();
        let items = store.items().get();
        let expired = tracker
            .try_update_value(|t| t.sweep(&items, now))
            .unwrap_or_default();
        for id in expired {
            if let Some(item) = items.iter().find(|i| i.id == id) {
                platform::notify_timer_expired(item);
                ctx.toast(Toast::new(
                    format!("「{}」時間到！", item.title),
                    ToastKind::Info,
                ));
            }
        }
    });

    // Search input is applied after a short debounce; replacing the pending
    // timeout drops (and thereby cancels) the previous one.
    let (raw_query, set_raw_query) = signal(String::new());
    let (query, set_query) = signal(String::new());
    let debounce = StoredValue::new_local(None::<Timeout>);
    let on_search = move |ev: web_sys::Event| {
        let value = ev
            .target()
            .and_then(|t| t.dyn_ref::<web_sys::HtmlInputElement>().map(|i| i.value()))
            .unwrap_or_default();
        set_raw_query.set(value.clone());
        let pending = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            let _ = set_query.try_set(value);
        });
        debounce.update_value(|slot| *slot = Some(pending));
    };
    let searching = move || raw_query.get() != query.get();

    let filtered = Memo::new(move |_| {
        let items = store.items().get();
        views::filter_by_search(&items, &query.get())
            .into_iter()
            .cloned()
            .collect::<Vec<Item>>()
    });

    let (edit_target, set_edit_target) = signal(None::<EditTarget>);
    let (day_detail, set_day_detail) = signal(None::<NaiveDate>);
    let on_edit = Callback::new(move |item: Item| {
        set_edit_target.set(Some(EditTarget::Edit(item)));
    });

    // Staged pick: drum-roll banner, then reveal + highlight + scroll, then
    // everything clears. Starting a new pick drops both pending timeouts.
    let (decision, set_decision) = signal(None::<DecisionPhase>);
    let reveal_handle = StoredValue::new_local(None::<Timeout>);
    let clear_handle = StoredValue::new_local(None::<Timeout>);
    let on_pick = Callback::new(move |category: Option<Category>| {
        let pool = picker::candidates(&store.items().get(), category);
        if pool.is_empty() {
            ctx.toast(Toast::new("該類別已全部完成或無行程！", ToastKind::Info));
            return;
        }
        ctx.set_highlighted(None);
        set_decision.set(Some(DecisionPhase::Pending));
        let reveal = Timeout::new(REVEAL_MS, move || {
            let Some(winner) = picker::pick(&pool, picker::js_roll) else {
                return;
            };
            let id = winner.id;
            let _ = set_decision.try_set(Some(DecisionPhase::Resolved {
                item_id: id,
                title: winner.title.clone(),
            }));
            ctx.set_highlighted(Some(id));
            ctx.set_tab(winner.category.home_tab());
            // Let the target tab render before scrolling to the card.
            Timeout::new(100, move || scroll_to(&format!("item-{id}"))).forget();
            let clear = Timeout::new(CLEAR_MS, move || {
                let _ = set_decision.try_set(None);
                ctx.set_highlighted(None);
            });
            clear_handle.update_value(|slot| *slot = Some(clear));
        });
        reveal_handle.update_value(|slot| *slot = Some(reveal));
    });

    on_cleanup(move || {
        debounce.update_value(|slot| {
            slot.take();
        });
        reveal_handle.update_value(|slot| {
            slot.take();
        });
        clear_handle.update_value(|slot| {
            slot.take();
        });
    });

    view! {
        <div class="app">
            <header class="app-header">
                <div class="app-title">
                    <h1>"靑凪旅程"</h1>
                    <span class="app-subtitle">"2026.04 台灣"</span>
                </div>
                <div class="search-box">
                    <input
                        type="search"
                        class="search-input"
                        placeholder="搜尋行程、備註..."
                        prop:value=move || raw_query.get()
                        on:input=on_search
                    />
                    {move || searching().then(|| view! { <span class="search-spinner" /> })}
                </div>
                <button
                    class="add-btn"
                    on:click=move |_| set_edit_target.set(Some(EditTarget::New { date: None }))
                >
                    "＋"
                </button>
            </header>

            {move || decision.get().map(|phase| {
                let banner_class = match phase {
                    DecisionPhase::Pending => "decision-banner pending",
                    DecisionPhase::Resolved { .. } => "decision-banner resolved",
                };
                view! { <div class=banner_class>{phase.banner()}</div> }
            })}

            <main class="app-main">
                {move || match ctx.tab.get() {
                    Tab::Dashboard => view! {
                        <Dashboard
                            filtered=filtered
                            query=query
                            on_edit=on_edit
                            on_pick=on_pick
                        />
                    }
                    .into_any(),
                    Tab::Calendar => view! {
                        <CalendarPage
                            on_date_select=move |date| set_day_detail.set(Some(date))
                            on_edit=on_edit
                        />
                    }
                    .into_any(),
                    Tab::Lists => view! {
                        <ListsPage filtered=filtered on_edit=on_edit on_pick=on_pick />
                    }
                    .into_any(),
                }}
            </main>

            <nav class="tab-bar">
                {TAB_BUTTONS.iter().map(|(tab, icon, label)| {
                    let tab = *tab;
                    view! {
                        <button
                            class=move || {
                                if ctx.tab.get() == tab { "tab-btn active" } else { "tab-btn" }
                            }
                            on:click=move |_| ctx.set_tab(tab)
                        >
                            <span class="tab-icon">{*icon}</span>
                            <span class="tab-label">{*label}</span>
                        </button>
                    }
                }).collect_view()}
            </nav>

            {move || edit_target.get().map(|target| view! {
                <EditModal
                    target=target
                    on_close=move |_: ()| set_edit_target.set(None)
                />
            })}

            {move || day_detail.get().map(|date| view! {
                <DayDetail
                    date=date
                    on_close=move |_: ()| set_day_detail.set(None)
                    on_edit=on_edit
                    on_add=move |date: NaiveDate| {
                        set_edit_target.set(Some(EditTarget::New { date: Some(date) }));
                    }
                />
            })}

            <ToastStack />
        </div>
    }
}
