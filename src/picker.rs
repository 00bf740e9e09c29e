//! Decision Picker
//!
//! "Which item should I do" selector: uniform pick over the not-completed
//! items, optionally narrowed to one category. The roll is injected so the
//! core stays deterministic under test; the UI drives the staged
//! Pending → Resolved → Cleared reveal with real timeouts.

use uuid::Uuid;

use crate::models::{Category, Item};

/// Staged display state of a pick.
#[derive(Debug, Clone, PartialEq)]
pub enum DecisionPhase {
    /// Drum-roll banner while the reveal timeout runs.
    Pending,
    /// Winner announced; the matching card is highlighted.
    Resolved { item_id: Uuid, title: String },
}

impl DecisionPhase {
    pub fn banner(&self) -> String {
        match self {
            DecisionPhase::Pending => "🎲 正在抽籤...".to_string(),
            DecisionPhase::Resolved { title, .. } => format!("✨ 命運決定：{}", title),
        }
    }
}

/// Not-completed items, optionally narrowed by category. Order follows the
/// item set, so the uniform roll is uniform over that order.
pub fn candidates(items: &[Item], category: Option<Category>) -> Vec<Item> {
    items
        .iter()
        .filter(|i| !i.is_completed)
        .filter(|i| category.is_none_or(|c| i.category == c))
        .cloned()
        .collect()
}

/// Uniform pick via an injected roll. `roll` receives the candidate count
/// and must return an index below it; out-of-range rolls are clamped.
pub fn pick(candidates: &[Item], roll: impl FnOnce(usize) -> usize) -> Option<Item> {
    if candidates.is_empty() {
        return None;
    }
    let idx = roll(candidates.len()).min(candidates.len() - 1);
    Some(candidates[idx].clone())
}

/// Roll backed by `Math.random`, used by the UI.
pub fn js_roll(len: usize) -> usize {
    (js_sys::Math::random() * len as f64).floor() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(title: &str, category: Category, completed: bool) -> Item {
        Item {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            category,
            date: None,
            time: None,
            is_completed: completed,
            progress: None,
            location: None,
            suggested_duration: None,
            timer_started_at: None,
        }
    }

    #[test]
    fn test_candidates_skip_completed() {
        let items = vec![
            make_item("open", Category::A, false),
            make_item("done", Category::A, true),
        ];
        let c = candidates(&items, None);
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].title, "open");
    }

    #[test]
    fn test_candidates_respect_category_filter() {
        let items = vec![
            make_item("ramen", Category::Food, false),
            make_item("walk", Category::C, false),
        ];
        let c = candidates(&items, Some(Category::Food));
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].title, "ramen");
    }

    #[test]
    fn test_empty_candidates_yield_no_pick() {
        let items = vec![make_item("done", Category::A, true)];
        let c = candidates(&items, None);
        assert!(pick(&c, |_| 0).is_none());
    }

    #[test]
    fn test_pick_is_roughly_uniform() {
        let items = vec![
            make_item("X", Category::B, false),
            make_item("Y", Category::B, false),
        ];
        let c = candidates(&items, None);

        // Cheap LCG stands in for Math.random.
        let mut state: u64 = 0x2545_F491_4F6C_DD1D;
        let mut counts = [0usize; 2];
        for _ in 0..10_000 {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let idx = ((state >> 33) % 2) as usize;
            let winner = pick(&c, |_| idx).unwrap();
            counts[if winner.title == "X" { 0 } else { 1 }] += 1;
        }
        assert!(counts[0] > 4_000 && counts[1] > 4_000, "counts: {:?}", counts);
    }

    #[test]
    fn test_out_of_range_roll_is_clamped() {
        let items = vec![make_item("only", Category::D, false)];
        let c = candidates(&items, None);
        assert_eq!(pick(&c, |_| 99).unwrap().title, "only");
    }

    #[test]
    fn test_banner_text() {
        assert_eq!(DecisionPhase::Pending.banner(), "🎲 正在抽籤...");
        let resolved = DecisionPhase::Resolved {
            item_id: Uuid::new_v4(),
            title: "壽司郎".to_string(),
        };
        assert_eq!(resolved.banner(), "✨ 命運決定：壽司郎");
    }
}
