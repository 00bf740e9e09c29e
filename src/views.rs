//! Derived Views
//!
//! Pure projections of the item set: search/category filters, the
//! upcoming list, per-day calendar buckets and the completion ratio.
//! Recomputed on demand; nothing here is cached or persisted.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{Category, Item};

/// Sorts after every real "HH:MM" value.
const NO_TIME_SENTINEL: &str = "24:00";

/// Case-insensitive substring match against title or description.
pub fn filter_by_search<'a>(items: &'a [Item], query: &str) -> Vec<&'a Item> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|i| {
            i.title.to_lowercase().contains(&needle)
                || i.description
                    .as_ref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Items whose category is in `cats`, preserving relative order.
pub fn by_categories(items: &[Item], cats: &[Category]) -> Vec<Item> {
    items
        .iter()
        .filter(|i| cats.contains(&i.category))
        .cloned()
        .collect()
}

/// Not-completed items dated today or later, ascending by date then time,
/// truncated to the first `n`.
pub fn upcoming(items: &[Item], today: NaiveDate, n: usize) -> Vec<Item> {
    let mut out: Vec<Item> = items
        .iter()
        .filter(|i| !i.is_completed && i.date.is_some_and(|d| d >= today))
        .cloned()
        .collect();
    out.sort_by(|a, b| {
        (a.date, time_key(a)).cmp(&(b.date, time_key(b)))
    });
    out.truncate(n);
    out
}

/// All items on `date`, ascending by time-of-day. Items without a time
/// sort last; ties keep insertion order (stable sort).
pub fn calendar_bucket(items: &[Item], date: NaiveDate) -> Vec<Item> {
    let mut out: Vec<Item> = items
        .iter()
        .filter(|i| i.date == Some(date))
        .cloned()
        .collect();
    out.sort_by_key(|i| time_key(i).to_string());
    out
}

fn time_key(item: &Item) -> &str {
    item.time.as_deref().unwrap_or(NO_TIME_SENTINEL)
}

/// Completed fraction in [0, 1]; 0 for an empty set.
pub fn completion_ratio(items: &[Item]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    let done = items.iter().filter(|i| i.is_completed).count();
    done as f64 / items.len() as f64
}

/// The 6x7 grid of days shown for a month, padded to full weeks starting
/// on Sunday.
pub fn month_grid(year: i32, month: u32) -> Vec<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(2026, 4, 1).expect("valid date"));
    let lead = first.weekday().num_days_from_sunday() as i64;
    let start = first - Duration::days(lead);
    (0..42).map(|d| start + Duration::days(d)).collect()
}

/// Previous month as (year, month).
pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Next month as (year, month).
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use uuid::Uuid;

    fn make_item(title: &str, category: Category) -> Item {
        Item {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            category,
            date: None,
            time: None,
            is_completed: false,
            progress: None,
            location: None,
            suggested_duration: None,
            timer_started_at: None,
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_search_matches_description_case_insensitively() {
        let mut umbrella = make_item("Inventory check", Category::Inventory);
        umbrella.description = Some("大且堅固的雨傘，需耐強風。".to_string());
        let other = make_item("胡椒餅", Category::D);
        let items = vec![umbrella, other];

        let hits = filter_by_search(&items, "雨傘");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Inventory check");

        let hits = filter_by_search(&items, "inventory CHECK");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let items = vec![make_item("a", Category::A), make_item("b", Category::B)];
        assert_eq!(filter_by_search(&items, "").len(), 2);
    }

    #[test]
    fn test_by_categories_preserves_order() {
        let items = vec![
            make_item("first", Category::A),
            make_item("food", Category::Food),
            make_item("second", Category::A),
        ];
        let picked = by_categories(&items, &[Category::A]);
        assert_eq!(picked.len(), 2);
        assert_eq!(picked[0].title, "first");
        assert_eq!(picked[1].title, "second");
    }

    #[test]
    fn test_upcoming_filters_sorts_and_truncates() {
        let mut past = make_item("past", Category::A);
        past.date = Some(date("2026-03-01"));
        let mut done = make_item("done", Category::A);
        done.date = Some(date("2026-04-10"));
        done.is_completed = true;
        let mut later = make_item("later", Category::B);
        later.date = Some(date("2026-04-20"));
        let mut sooner = make_item("sooner", Category::C);
        sooner.date = Some(date("2026-04-06"));
        let mut third = make_item("third", Category::C);
        third.date = Some(date("2026-04-25"));
        let undated = make_item("undated", Category::D);

        let items = vec![past, done, later, sooner, third, undated];
        let up = upcoming(&items, date("2026-04-05"), 2);
        assert_eq!(up.len(), 2);
        assert_eq!(up[0].title, "sooner");
        assert_eq!(up[1].title, "later");
    }

    #[test]
    fn test_upcoming_includes_today() {
        let mut today_item = make_item("today", Category::A);
        today_item.date = Some(date("2026-04-05"));
        let up = upcoming(&[today_item], date("2026-04-05"), 5);
        assert_eq!(up.len(), 1);
    }

    #[test]
    fn test_calendar_bucket_sorts_untimed_last() {
        let d = date("2026-04-26");
        let mut untimed_a = make_item("untimed a", Category::A);
        untimed_a.date = Some(d);
        let mut nine = make_item("nine", Category::Critical);
        nine.date = Some(d);
        nine.time = Some("09:00".to_string());
        let mut untimed_b = make_item("untimed b", Category::B);
        untimed_b.date = Some(d);
        let mut noon = make_item("noon", Category::Food);
        noon.date = Some(d);
        noon.time = Some("12:30".to_string());
        let mut other_day = make_item("elsewhere", Category::A);
        other_day.date = Some(date("2026-04-27"));

        let items = vec![untimed_a, nine, untimed_b, noon, other_day];
        let bucket = calendar_bucket(&items, d);
        let titles: Vec<&str> = bucket.iter().map(|i| i.title.as_str()).collect();
        // Timed first in clock order, untimed after in insertion order.
        assert_eq!(titles, vec!["nine", "noon", "untimed a", "untimed b"]);
    }

    #[test]
    fn test_completion_ratio_empty_is_zero() {
        assert_eq!(completion_ratio(&[]), 0.0);
    }

    #[test]
    fn test_completion_ratio_counts_completed() {
        let mut done = make_item("done", Category::A);
        done.is_completed = true;
        let open = make_item("open", Category::B);
        let ratio = completion_ratio(&[done, open]);
        assert!((ratio - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_month_grid_covers_april_2026() {
        let grid = month_grid(2026, 4);
        assert_eq!(grid.len(), 42);
        // April 1st 2026 is a Wednesday; the grid starts on the prior Sunday.
        assert_eq!(grid[0], date("2026-03-29"));
        assert_eq!(grid[0].weekday(), Weekday::Sun);
        assert!(grid.contains(&date("2026-04-30")));
    }

    #[test]
    fn test_month_paging_wraps_year() {
        assert_eq!(prev_month(2026, 1), (2025, 12));
        assert_eq!(next_month(2026, 12), (2027, 1));
        assert_eq!(next_month(2026, 4), (2026, 5));
    }
}
