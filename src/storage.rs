//! Local Storage Persistence
//!
//! Full-snapshot persistence of the item set plus the daily-reset marker.
//! The JSON codec is separated from the `web_sys` glue; storage failures
//! degrade silently since the in-memory state stays authoritative.

use chrono::Local;
use web_sys::Storage;

use crate::models::Item;
use crate::seed;

const ITEMS_KEY: &str = "qing_items";
const RESET_KEY: &str = "last_reset_date";

/// Serialize the full item set.
pub fn encode_items(items: &[Item]) -> Option<String> {
    serde_json::to_string(items).ok()
}

/// Parse a stored snapshot; `None` when absent or corrupt.
pub fn decode_items(raw: &str) -> Option<Vec<Item>> {
    serde_json::from_str(raw).ok()
}

/// Today's local calendar date as "YYYY-MM-DD".
pub fn today_string() -> String {
    Local::now().date_naive().to_string()
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Load the persisted item set, falling back to the seed data when the
/// snapshot is missing or unparseable.
pub fn load_items() -> Vec<Item> {
    let stored = local_storage()
        .and_then(|s| s.get_item(ITEMS_KEY).ok().flatten())
        .and_then(|raw| decode_items(&raw));
    match stored {
        Some(items) => items,
        None => {
            web_sys::console::log_1(&"no saved snapshot, using seed data".into());
            seed::initial_items()
        }
    }
}

/// Overwrite the persisted snapshot.
pub fn save_items(items: &[Item]) {
    if let (Some(storage), Some(json)) = (local_storage(), encode_items(items)) {
        let _ = storage.set_item(ITEMS_KEY, &json);
    }
}

/// Stored daily-reset marker, if any.
pub fn last_reset_date() -> Option<String> {
    local_storage().and_then(|s| s.get_item(RESET_KEY).ok().flatten())
}

pub fn set_last_reset_date(date: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(RESET_KEY, date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn sample_items() -> Vec<Item> {
        vec![
            Item {
                id: Uuid::new_v4(),
                title: "季雪專場".to_string(),
                description: Some("需提前確認交通與門票。".to_string()),
                category: Category::Critical,
                date: Some(NaiveDate::from_ymd_opt(2026, 4, 5).unwrap()),
                time: Some("16:00".to_string()),
                is_completed: false,
                progress: Some(0),
                location: Some("台北".to_string()),
                suggested_duration: Some(120),
                timer_started_at: Some(1_775_000_000_000),
            },
            Item {
                id: Uuid::new_v4(),
                title: "胡椒餅".to_string(),
                description: None,
                category: Category::D,
                date: None,
                time: None,
                is_completed: true,
                progress: None,
                location: None,
                suggested_duration: None,
                timer_started_at: None,
            },
        ]
    }

    #[test]
    fn test_snapshot_round_trip_is_field_exact() {
        let items = sample_items();
        let json = encode_items(&items).unwrap();
        let reloaded = decode_items(&json).unwrap();
        assert_eq!(items, reloaded);
    }

    #[test]
    fn test_cleared_optionals_are_absent_not_empty() {
        let items = sample_items();
        let json = encode_items(&items[1..]).unwrap();
        assert!(!json.contains("\"date\""));
        assert!(!json.contains("\"time\""));
        assert!(!json.contains("\"\""));
    }

    #[test]
    fn test_corrupt_snapshot_decodes_to_none() {
        assert!(decode_items("not json at all").is_none());
        assert!(decode_items("{\"wrong\":\"shape\"}").is_none());
        // An empty list is a valid snapshot, not corruption.
        assert_eq!(decode_items("[]"), Some(Vec::new()));
    }

    #[test]
    fn test_snapshot_uses_camel_case_wire_names() {
        let items = sample_items();
        let json = encode_items(&items).unwrap();
        assert!(json.contains("\"isCompleted\""));
        assert!(json.contains("\"suggestedDuration\""));
        assert!(json.contains("\"timerStartedAt\""));
    }
}
