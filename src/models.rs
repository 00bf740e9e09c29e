//! Trip Checklist Models
//!
//! The item record, the closed category set and its display lookups,
//! and the transient toast message type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Classification tag for an item. Closed set; grouping, coloring and the
/// dashboard sections are all keyed off it, so adding a variant is a
/// compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Critical,
    Daily,
    Todo,
    Costume,
    A,
    B,
    C,
    D,
    Inventory,
    Food,
    Meetup,
    Uncertain,
}

/// Categories driven by schedule and importance.
pub const TIME_BASED_CATS: &[Category] = &[
    Category::Critical,
    Category::A,
    Category::B,
    Category::C,
    Category::D,
];

/// Categories driven by function rather than schedule.
pub const FUNCTION_BASED_CATS: &[Category] = &[
    Category::Daily,
    Category::Todo,
    Category::Costume,
    Category::Inventory,
    Category::Food,
    Category::Meetup,
    Category::Uncertain,
];

/// Top-level view a category's items live under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Calendar,
    Lists,
}

impl Category {
    /// Full display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Critical => "🔥 超級必要 (無法延後)",
            Category::Daily => "✅ 每日必做 (00:00 重置)",
            Category::Todo => "📝 待辦事項 (To-Do)",
            Category::Costume => "🛠️ 服裝製作 (CCF前完成)",
            Category::A => "📅 A. 半天以上行程",
            Category::B => "⏳ B. 3-4 小時短程",
            Category::C => "💤 C. 放鬆/低消耗",
            Category::D => "🆓 D. 填補空檔",
            Category::Inventory => "🎒 必備物品/購物",
            Category::Food => "🍜 必吃美食",
            Category::Meetup => "🤝 必約對象",
            Category::Uncertain => "❓ 待確認行程",
        }
    }

    /// Shortened label for badges and toasts: the descriptive token after
    /// the leading glyph, minus any "A."-style enumeration marker.
    pub fn short_label(&self) -> String {
        fn is_marker(token: &str) -> bool {
            let mut chars = token.chars();
            matches!(
                (chars.next(), chars.next(), chars.next()),
                (Some(letter), Some('.'), None) if letter.is_ascii_uppercase()
            )
        }
        self.label()
            .split_whitespace()
            .skip(1) // leading glyph
            .find(|token| !is_marker(token))
            .unwrap_or_default()
            .to_string()
    }

    /// Card border/background classes.
    pub fn card_class(&self) -> &'static str {
        match self {
            Category::Critical => "card-critical",
            Category::Daily => "card-daily",
            Category::Todo => "card-todo",
            Category::Costume => "card-costume",
            Category::A => "card-a",
            Category::B => "card-b",
            Category::C => "card-c",
            Category::D => "card-d",
            Category::Inventory => "card-inventory",
            Category::Food => "card-food",
            Category::Meetup => "card-meetup",
            Category::Uncertain => "card-uncertain",
        }
    }

    /// Badge styling for the category tag on a card.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Category::Critical => "badge-critical",
            Category::Daily => "badge-daily",
            Category::Todo => "badge-todo",
            Category::Costume => "badge-costume",
            Category::A => "badge-a",
            Category::B => "badge-b",
            Category::C => "badge-c",
            Category::D => "badge-d",
            Category::Inventory => "badge-inventory",
            Category::Food => "badge-food",
            Category::Meetup => "badge-meetup",
            Category::Uncertain => "badge-uncertain",
        }
    }

    /// Calendar dot color class.
    pub fn dot_class(&self) -> &'static str {
        match self {
            Category::Critical => "dot-critical",
            Category::Daily => "dot-daily",
            Category::Todo => "dot-todo",
            Category::Costume => "dot-costume",
            Category::A => "dot-a",
            Category::B => "dot-b",
            Category::C => "dot-c",
            Category::D => "dot-d",
            Category::Inventory => "dot-inventory",
            Category::Food => "dot-food",
            Category::Meetup => "dot-meetup",
            Category::Uncertain => "dot-uncertain",
        }
    }

    /// Small glyph shown next to the category name.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Critical => "⚠",
            Category::Daily => "✓",
            Category::Todo => "📋",
            Category::Costume => "👕",
            Category::A => "📅",
            Category::B => "⚡",
            Category::C => "☕",
            Category::D => "⏳",
            Category::Inventory => "🎒",
            Category::Food => "🍜",
            Category::Meetup => "🤝",
            Category::Uncertain => "❓",
        }
    }

    /// Stable tag used as the `<select>` option value and on the wire.
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Critical => "Critical",
            Category::Daily => "Daily",
            Category::Todo => "Todo",
            Category::Costume => "Costume",
            Category::A => "A",
            Category::B => "B",
            Category::C => "C",
            Category::D => "D",
            Category::Inventory => "Inventory",
            Category::Food => "Food",
            Category::Meetup => "Meetup",
            Category::Uncertain => "Uncertain",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Category> {
        TIME_BASED_CATS
            .iter()
            .chain(FUNCTION_BASED_CATS)
            .copied()
            .find(|c| c.tag() == tag)
    }

    /// Which top-level view shows this category. The decision picker
    /// switches to this tab after resolving a winner.
    pub fn home_tab(&self) -> Tab {
        match self {
            Category::Inventory | Category::Food | Category::Meetup => Tab::Lists,
            _ => Tab::Dashboard,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        // Filler slot is the default for quickly captured items.
        Category::D
    }
}

/// A single itinerary/task record, the unit of persistence.
///
/// Cleared optional fields are absent in the snapshot, never empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: Category,
    /// Calendar date, used for bucketing and the upcoming sort.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// "HH:MM" time-of-day; only meaningful when `date` is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub is_completed: bool,
    /// Costume completion step: 0, 25, 50, 75 or 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Suggested stay in minutes; drives the countdown timer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_duration: Option<u32>,
    /// Epoch milliseconds; presence means the timer is running.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer_started_at: Option<i64>,
}

/// Fields captured by the edit form. Empty inputs arrive as `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub title: String,
    pub description: Option<String>,
    pub category: Category,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub suggested_duration: Option<u32>,
}

/// Transient message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Info => "toast toast-info",
            ToastKind::Error => "toast toast-error",
        }
    }
}

/// Auto-expiring user-facing message.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
        }
    }
}
