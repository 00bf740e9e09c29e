//! Item Store
//!
//! Single source of truth for the item set, held in a reactive store.
//! All mutations go through the functions here so the invariants
//! (progress↔completion, timer↔completion) are enforced in one place;
//! every mutation persists the full snapshot and yields the toast to show.

use leptos::prelude::*;
use reactive_stores::Store;
use uuid::Uuid;

use crate::models::{Category, Item, ItemDraft, Toast, ToastKind};
use crate::storage;

/// Global application state.
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All items, in insertion order.
    pub items: Vec<Item>,
}

/// Type alias for the store.
pub type AppStore = Store<AppState>;

/// Get the app store from context.
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================
//
// Thin reactive wrappers: apply the pure mutation, write the snapshot,
// hand back the toast for the caller to dispatch.

pub fn store_create_item(store: &AppStore, draft: ItemDraft) -> Option<Toast> {
    let items_field = store.items();
    let mut items = items_field.write();
    let toast = create_item(&mut items, draft);
    storage::save_items(&items);
    toast
}

pub fn store_save_edit(store: &AppStore, id: Uuid, draft: ItemDraft) -> Option<Toast> {
    let items_field = store.items();
    let mut items = items_field.write();
    let toast = save_edit(&mut items, id, draft);
    storage::save_items(&items);
    toast
}

pub fn store_toggle_item(store: &AppStore, id: Uuid) -> Option<Toast> {
    let items_field = store.items();
    let mut items = items_field.write();
    let toast = toggle_complete(&mut items, id);
    storage::save_items(&items);
    toast
}

pub fn store_set_progress(store: &AppStore, id: Uuid, value: u8) -> Option<Toast> {
    let items_field = store.items();
    let mut items = items_field.write();
    let toast = set_progress(&mut items, id, value);
    storage::save_items(&items);
    toast
}

pub fn store_set_category(store: &AppStore, id: Uuid, category: Category) -> Option<Toast> {
    let items_field = store.items();
    let mut items = items_field.write();
    let toast = set_category(&mut items, id, category);
    storage::save_items(&items);
    toast
}

pub fn store_toggle_timer(store: &AppStore, id: Uuid) -> Option<Toast> {
    let now_ms = js_sys::Date::now() as i64;
    let items_field = store.items();
    let mut items = items_field.write();
    let toast = toggle_timer(&mut items, id, now_ms);
    storage::save_items(&items);
    toast
}

/// Remove an item. Caller has already confirmed the intent.
pub fn store_remove_item(store: &AppStore, id: Uuid) -> Option<Toast> {
    let items_field = store.items();
    let mut items = items_field.write();
    let toast = delete_item(&mut items, id);
    storage::save_items(&items);
    toast
}

// ========================
// Pure Mutations
// ========================

/// Create an item from the edit form. A blank title is rejected upstream
/// by the form contract; a stray empty draft is a no-op here.
pub fn create_item(items: &mut Vec<Item>, draft: ItemDraft) -> Option<Toast> {
    if draft.title.trim().is_empty() {
        return None;
    }
    items.push(Item {
        id: Uuid::new_v4(),
        title: draft.title,
        description: draft.description,
        category: draft.category,
        date: draft.date,
        time: draft.time,
        is_completed: false,
        progress: Some(0),
        location: draft.location,
        suggested_duration: draft.suggested_duration,
        timer_started_at: None,
    });
    Some(Toast::new("新行程已新增", ToastKind::Success))
}

/// Merge edited fields into an existing item. Unknown id is a no-op.
pub fn save_edit(items: &mut [Item], id: Uuid, draft: ItemDraft) -> Option<Toast> {
    let item = items.iter_mut().find(|i| i.id == id)?;
    if !draft.title.trim().is_empty() {
        item.title = draft.title;
    }
    item.description = draft.description;
    item.category = draft.category;
    item.date = draft.date;
    item.time = draft.time;
    item.location = draft.location;
    item.suggested_duration = draft.suggested_duration;
    Some(Toast::new("變更已儲存", ToastKind::Success))
}

/// Flip completion. Completing clears a running timer; un-completing is
/// silent.
pub fn toggle_complete(items: &mut [Item], id: Uuid) -> Option<Toast> {
    let item = items.iter_mut().find(|i| i.id == id)?;
    item.is_completed = !item.is_completed;
    if item.is_completed {
        item.timer_started_at = None;
        Some(Toast::new("行程完成！", ToastKind::Success))
    } else {
        None
    }
}

/// Set costume progress. 100% implies completed, which also releases the
/// timer; anything below re-opens the item.
pub fn set_progress(items: &mut [Item], id: Uuid, value: u8) -> Option<Toast> {
    let item = items.iter_mut().find(|i| i.id == id)?;
    item.progress = Some(value);
    item.is_completed = value == 100;
    if item.is_completed {
        item.timer_started_at = None;
        Some(Toast::new("進度 100% 達成！", ToastKind::Success))
    } else {
        None
    }
}

pub fn set_category(items: &mut [Item], id: Uuid, category: Category) -> Option<Toast> {
    let item = items.iter_mut().find(|i| i.id == id)?;
    item.category = category;
    Some(Toast::new(
        format!("分類已變更為 {}", category.short_label()),
        ToastKind::Info,
    ))
}

/// Start or stop the item's timer. Starting a timer on a completed item is
/// a no-op.
pub fn toggle_timer(items: &mut [Item], id: Uuid, now_ms: i64) -> Option<Toast> {
    let item = items.iter_mut().find(|i| i.id == id)?;
    if item.timer_started_at.is_some() {
        item.timer_started_at = None;
        Some(Toast::new("計時停止", ToastKind::Info))
    } else if item.is_completed {
        None
    } else {
        item.timer_started_at = Some(now_ms);
        Some(Toast::new("計時開始 ⏳", ToastKind::Info))
    }
}

pub fn delete_item(items: &mut Vec<Item>, id: Uuid) -> Option<Toast> {
    let before = items.len();
    items.retain(|i| i.id != id);
    (items.len() != before).then(|| Toast::new("項目已刪除", ToastKind::Error))
}

/// Outcome of the startup rollover check.
#[derive(Debug, PartialEq)]
pub struct DailyReset {
    /// The marker date differed; items were reset and the marker must be
    /// updated to `today`.
    pub ran: bool,
    /// A previous marker existed, so the reset is worth announcing.
    pub toast: Option<Toast>,
}

/// Once-per-calendar-day rollover: un-complete every Daily item when the
/// stored marker is not today's date.
pub fn daily_reset(items: &mut [Item], last_marker: Option<&str>, today: &str) -> DailyReset {
    if last_marker == Some(today) {
        return DailyReset { ran: false, toast: None };
    }
    for item in items.iter_mut() {
        if item.category == Category::Daily {
            item.is_completed = false;
        }
    }
    DailyReset {
        ran: true,
        toast: last_marker.map(|_| Toast::new("每日行程已重置", ToastKind::Info)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ToastKind;

    fn make_item(title: &str, category: Category) -> Item {
        Item {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            category,
            date: None,
            time: None,
            is_completed: false,
            progress: Some(0),
            location: None,
            suggested_duration: None,
            timer_started_at: None,
        }
    }

    #[test]
    fn test_create_applies_defaults() {
        let mut items = Vec::new();
        let toast = create_item(
            &mut items,
            ItemDraft {
                title: "買雨傘".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(toast.unwrap().kind, ToastKind::Success);
        assert_eq!(items.len(), 1);
        assert!(!items[0].is_completed);
        assert_eq!(items[0].category, Category::D);
        assert_eq!(items[0].progress, Some(0));
    }

    #[test]
    fn test_create_rejects_blank_title() {
        let mut items = Vec::new();
        let toast = create_item(
            &mut items,
            ItemDraft {
                title: "   ".to_string(),
                ..Default::default()
            },
        );
        assert!(toast.is_none());
        assert!(items.is_empty());
    }

    #[test]
    fn test_toggle_complete_clears_timer() {
        let mut items = vec![make_item("計時中", Category::B)];
        items[0].timer_started_at = Some(1_000);
        let id = items[0].id;

        let toast = toggle_complete(&mut items, id).unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert!(items[0].is_completed);
        assert_eq!(items[0].timer_started_at, None);

        // Un-completing is silent.
        assert!(toggle_complete(&mut items, id).is_none());
        assert!(!items[0].is_completed);
    }

    #[test]
    fn test_timer_on_completed_item_is_noop() {
        let mut items = vec![make_item("做完了", Category::C)];
        items[0].is_completed = true;
        let id = items[0].id;

        assert!(toggle_timer(&mut items, id, 5_000).is_none());
        assert_eq!(items[0].timer_started_at, None);
    }

    #[test]
    fn test_timer_toggles_start_and_stop() {
        let mut items = vec![make_item("計時", Category::B)];
        let id = items[0].id;

        let start = toggle_timer(&mut items, id, 42_000).unwrap();
        assert_eq!(start.kind, ToastKind::Info);
        assert_eq!(items[0].timer_started_at, Some(42_000));

        let stop = toggle_timer(&mut items, id, 50_000).unwrap();
        assert_eq!(stop.kind, ToastKind::Info);
        assert_eq!(items[0].timer_started_at, None);
    }

    #[test]
    fn test_full_progress_implies_completed() {
        let mut items = vec![make_item("綠色帽外套", Category::Costume)];
        items[0].timer_started_at = Some(7);
        let id = items[0].id;

        let toast = set_progress(&mut items, id, 100).unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert!(items[0].is_completed);
        assert_eq!(items[0].timer_started_at, None);

        // Stepping back re-opens the item.
        assert!(set_progress(&mut items, id, 75).is_none());
        assert!(!items[0].is_completed);
        assert_eq!(items[0].progress, Some(75));
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut items = vec![make_item("唯一", Category::A)];
        let ghost = Uuid::new_v4();
        assert!(toggle_complete(&mut items, ghost).is_none());
        assert!(set_progress(&mut items, ghost, 50).is_none());
        assert!(set_category(&mut items, ghost, Category::Food).is_none());
        assert!(toggle_timer(&mut items, ghost, 0).is_none());
        assert!(delete_item(&mut items, ghost).is_none());
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_delete_reports_error_toast() {
        let mut items = vec![make_item("丟掉", Category::D)];
        let id = items[0].id;
        let toast = delete_item(&mut items, id).unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(items.is_empty());
    }

    #[test]
    fn test_save_edit_merges_fields() {
        let mut items = vec![make_item("舊名", Category::D)];
        let id = items[0].id;
        let toast = save_edit(
            &mut items,
            id,
            ItemDraft {
                title: "新名".to_string(),
                category: Category::Food,
                location: Some("台北".to_string()),
                suggested_duration: Some(60),
                ..Default::default()
            },
        );
        assert_eq!(toast.unwrap().kind, ToastKind::Success);
        assert_eq!(items[0].title, "新名");
        assert_eq!(items[0].category, Category::Food);
        assert_eq!(items[0].location.as_deref(), Some("台北"));
        // Cleared inputs land as absent, not empty strings.
        assert_eq!(items[0].date, None);
        assert_eq!(items[0].time, None);
    }

    #[test]
    fn test_daily_reset_touches_only_daily_items() {
        let mut items = vec![
            make_item("打音遊", Category::Daily),
            make_item("CCF", Category::Critical),
        ];
        items[0].is_completed = true;
        items[1].is_completed = true;

        let outcome = daily_reset(&mut items, Some("2026-04-04"), "2026-04-05");
        assert!(outcome.ran);
        assert_eq!(outcome.toast.unwrap().kind, ToastKind::Info);
        assert!(!items[0].is_completed);
        assert!(items[1].is_completed);
    }

    #[test]
    fn test_daily_reset_first_run_is_silent() {
        let mut items = vec![make_item("打音遊", Category::Daily)];
        items[0].is_completed = true;

        let outcome = daily_reset(&mut items, None, "2026-04-05");
        assert!(outcome.ran);
        assert!(outcome.toast.is_none());
        assert!(!items[0].is_completed);
    }

    #[test]
    fn test_daily_reset_same_day_is_noop() {
        let mut items = vec![make_item("打音遊", Category::Daily)];
        items[0].is_completed = true;

        let outcome = daily_reset(&mut items, Some("2026-04-05"), "2026-04-05");
        assert!(!outcome.ran);
        assert!(items[0].is_completed);
    }
}
