//! Platform Integrations
//!
//! Outbound side-channels: map search, share/clipboard, and the timer
//! expiry notification. The formatting is pure; the browser calls live
//! here at the boundary and degrade silently when an API is unavailable.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Notification, NotificationOptions, NotificationPermission};

use crate::models::Item;

/// Google Maps search URL for an item's location, falling back to its
/// title.
pub fn map_search_url(item: &Item) -> String {
    let query = item.location.as_deref().unwrap_or(&item.title);
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        utf8_percent_encode(query, NON_ALPHANUMERIC)
    )
}

/// Open the map search in a new tab.
pub fn open_map_search(item: &Item) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(&map_search_url(item), "_blank");
    }
}

/// Multi-line shareable summary of an item. Absent fields are omitted.
pub fn share_summary(item: &Item) -> String {
    let mut lines = vec![format!("【靑凪旅程】{}", item.title)];
    if let Some(date) = item.date {
        let time = item.time.as_deref().unwrap_or_default();
        lines.push(format!("📅 {} {}", date, time).trim_end().to_string());
    }
    if let Some(location) = &item.location {
        lines.push(format!("📍 {}", location));
    }
    if let Some(minutes) = item.suggested_duration {
        lines.push(format!("⏳ 預計停留: {}分", minutes));
    }
    if let Some(desc) = &item.description {
        lines.push(format!("📝 {}", desc));
    }
    lines.join("\n")
}

/// Copy the share summary to the clipboard. Resolves to false when the
/// clipboard write is rejected.
pub async fn copy_share_summary(item: &Item) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(&share_summary(item)))
        .await
        .is_ok()
}

/// Ask for notification permission if the user has not decided yet. Fired
/// when a timed countdown is first started, so the expiry alert can land.
pub fn ensure_notification_permission() {
    if Notification::permission() == NotificationPermission::Default {
        if let Ok(promise) = Notification::request_permission() {
            // Outcome handled lazily at post time.
            let _ = promise;
        }
    }
}

/// Post the countdown-expired notification for an item. Silently does
/// nothing without permission.
pub fn notify_timer_expired(item: &Item) {
    if Notification::permission() != NotificationPermission::Granted {
        return;
    }
    let minutes = item.suggested_duration.unwrap_or(0);
    let options = NotificationOptions::new();
    options.set_body(&format!(
        "行程「{}」的建議時間 ({}分) 已結束。",
        item.title, minutes
    ));
    let _ = Notification::new_with_options("⏳ 時間到！", &options);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn make_item(title: &str) -> Item {
        Item {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            category: Category::Food,
            date: None,
            time: None,
            is_completed: false,
            progress: None,
            location: None,
            suggested_duration: None,
            timer_started_at: None,
        }
    }

    #[test]
    fn test_map_url_prefers_location() {
        let mut item = make_item("壽司郎");
        item.location = Some("台北 101".to_string());
        let url = map_search_url(&item);
        assert!(url.starts_with("https://www.google.com/maps/search/?api=1&query="));
        assert!(url.contains("%20101"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_map_url_falls_back_to_title() {
        let item = make_item("nine");
        assert!(map_search_url(&item).ends_with("query=nine"));
    }

    #[test]
    fn test_share_summary_omits_absent_fields() {
        let item = make_item("壽司郎");
        assert_eq!(share_summary(&item), "【靑凪旅程】壽司郎");
    }

    #[test]
    fn test_share_summary_full() {
        let mut item = make_item("季雪專場");
        item.date = Some(NaiveDate::from_ymd_opt(2026, 4, 5).unwrap());
        item.time = Some("16:00".to_string());
        item.location = Some("台北".to_string());
        item.suggested_duration = Some(120);
        item.description = Some("帶門票".to_string());
        assert_eq!(
            share_summary(&item),
            "【靑凪旅程】季雪專場\n📅 2026-04-05 16:00\n📍 台北\n⏳ 預計停留: 120分\n📝 帶門票"
        );
    }

    #[test]
    fn test_share_summary_date_without_time() {
        let mut item = make_item("CCF");
        item.date = Some(NaiveDate::from_ymd_opt(2026, 4, 26).unwrap());
        assert_eq!(share_summary(&item), "【靑凪旅程】CCF\n📅 2026-04-26");
    }
}
