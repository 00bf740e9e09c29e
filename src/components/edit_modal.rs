//! Edit Modal Component
//!
//! Create/edit form: title (required), category grid, date/time with
//! today/tomorrow shortcuts, duration presets, location, and a canned
//! description suggester. Mounted fresh per open, so field state is local.

use chrono::{Duration, Local, NaiveDate};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::models::{Category, Item, ItemDraft, FUNCTION_BASED_CATS, TIME_BASED_CATS};
use crate::picker::js_roll;
use crate::store::{store_create_item, store_save_edit, use_app_store};
use crate::suggest::suggest_description;

/// What the modal is editing.
#[derive(Debug, Clone, PartialEq)]
pub enum EditTarget {
    /// New item, optionally pre-dated (from the day-detail sheet).
    New { date: Option<NaiveDate> },
    /// Existing item.
    Edit(Item),
}

const DURATION_PRESETS: &[u32] = &[30, 60, 90, 120];

fn clean(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn input_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_ref::<web_sys::HtmlInputElement>().map(|i| i.value()))
        .unwrap_or_default()
}

#[component]
pub fn EditModal(target: EditTarget, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let editing = match &target {
        EditTarget::Edit(item) => Some(item.clone()),
        EditTarget::New { .. } => None,
    };
    let initial_date = match &target {
        EditTarget::New { date } => *date,
        EditTarget::Edit(item) => item.date,
    };
    let is_edit = editing.is_some();

    let (title, set_title) = signal(
        editing.as_ref().map(|i| i.title.clone()).unwrap_or_default(),
    );
    let (description, set_description) = signal(
        editing
            .as_ref()
            .and_then(|i| i.description.clone())
            .unwrap_or_default(),
    );
    let (category, set_category) = signal(
        editing.as_ref().map(|i| i.category).unwrap_or_default(),
    );
    let (date, set_date) = signal(
        initial_date.map(|d| d.to_string()).unwrap_or_default(),
    );
    let (time, set_time) = signal(
        editing
            .as_ref()
            .and_then(|i| i.time.clone())
            .unwrap_or_default(),
    );
    let (location, set_location) = signal(
        editing
            .as_ref()
            .and_then(|i| i.location.clone())
            .unwrap_or_default(),
    );
    let (duration, set_duration) = signal(
        editing.as_ref().and_then(|i| i.suggested_duration).unwrap_or(0),
    );

    let editing_id = editing.as_ref().map(|i| i.id);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = title.get();
        if name.trim().is_empty() {
            return;
        }
        let draft = ItemDraft {
            title: name.trim().to_string(),
            description: clean(description.get()),
            category: category.get(),
            date: date.get().parse::<NaiveDate>().ok(),
            time: clean(time.get()),
            location: clean(location.get()),
            suggested_duration: Some(duration.get()).filter(|d| *d > 0),
        };
        let toast = match editing_id {
            Some(id) => store_save_edit(&store, id, draft),
            None => store_create_item(&store, draft),
        };
        ctx.dispatch(toast);
        on_close.run(());
    };

    let category_group = move |cats: &'static [Category]| {
        cats.iter()
            .map(|cat| {
                let cat = *cat;
                view! {
                    <button
                        type="button"
                        class=move || {
                            if category.get() == cat {
                                "category-cell active"
                            } else {
                                "category-cell"
                            }
                        }
                        title=cat.label()
                        on:click=move |_| set_category.set(cat)
                    >
                        <span class="category-cell-icon">{cat.icon()}</span>
                        <span class="category-cell-name">{cat.short_label()}</span>
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal-header">
                    <h3>{if is_edit { "編輯行程" } else { "新增行程" }}</h3>
                    <button class="icon-btn" on:click=move |_| on_close.run(())>"✕"</button>
                </div>
                <form class="modal-form" on:submit=save>
                    <label class="field-label">"行程名稱"</label>
                    <input
                        type="text"
                        class="field-input title-input"
                        placeholder="例如：買雨傘、去三創..."
                        required
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(input_value(&ev))
                    />

                    <label class="field-label">"行程分類"</label>
                    <div class="category-grid">
                        <span class="group-caption">"時間與重要性"</span>
                        <div class="category-cells">{category_group(TIME_BASED_CATS)}</div>
                        <span class="group-caption">"功能與任務"</span>
                        <div class="category-cells">{category_group(FUNCTION_BASED_CATS)}</div>
                    </div>

                    <label class="field-label">"時間安排"</label>
                    <div class="field-row">
                        <input
                            type="date"
                            class="field-input"
                            prop:value=move || date.get()
                            on:input=move |ev| set_date.set(input_value(&ev))
                        />
                        <input
                            type="time"
                            class="field-input time-input"
                            prop:value=move || time.get()
                            on:input=move |ev| set_time.set(input_value(&ev))
                        />
                    </div>
                    <div class="field-row">
                        <button
                            type="button"
                            class="quick-btn"
                            on:click=move |_| {
                                set_date.set(Local::now().date_naive().to_string());
                            }
                        >
                            "今天"
                        </button>
                        <button
                            type="button"
                            class="quick-btn"
                            on:click=move |_| {
                                let tomorrow = Local::now().date_naive() + Duration::days(1);
                                set_date.set(tomorrow.to_string());
                            }
                        >
                            "明天"
                        </button>
                    </div>

                    <label class="field-label">"⏳ 建議停留 (分鐘)"</label>
                    <div class="field-row">
                        <input
                            type="number"
                            class="field-input duration-input"
                            min="0"
                            step="15"
                            prop:value=move || duration.get().to_string()
                            on:input=move |ev| {
                                set_duration.set(input_value(&ev).parse().unwrap_or(0));
                            }
                        />
                        {DURATION_PRESETS.iter().map(|minutes| {
                            let minutes = *minutes;
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if duration.get() == minutes {
                                            "preset-btn active"
                                        } else {
                                            "preset-btn"
                                        }
                                    }
                                    on:click=move |_| set_duration.set(minutes)
                                >
                                    {minutes} "m"
                                </button>
                            }
                        }).collect_view()}
                    </div>

                    <label class="field-label">"📍 地點 (導航用)"</label>
                    <input
                        type="text"
                        class="field-input"
                        placeholder="輸入地點名稱或地址..."
                        prop:value=move || location.get()
                        on:input=move |ev| set_location.set(input_value(&ev))
                    />

                    <div class="field-label-row">
                        <label class="field-label">"詳細說明"</label>
                        <button
                            type="button"
                            class="suggest-btn"
                            title="自動產生描述"
                            on:click=move |_| {
                                set_description.set(suggest_description(
                                    category.get(),
                                    &title.get(),
                                    js_roll,
                                ));
                            }
                        >
                            "✨ 幫我寫"
                        </button>
                    </div>
                    <textarea
                        class="field-input desc-input"
                        placeholder="備註、注意事項、必買清單..."
                        prop:value=move || description.get()
                        on:input=move |ev| {
                            let value = ev
                                .target()
                                .and_then(|t| {
                                    t.dyn_ref::<web_sys::HtmlTextAreaElement>()
                                        .map(|a| a.value())
                                })
                                .unwrap_or_default();
                            set_description.set(value);
                        }
                    />

                    <button type="submit" class="save-btn">
                        {if is_edit { "儲存變更" } else { "確認新增" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
