//! Timer Engine
//!
//! Per-item elapsed/countdown readout derived from `timer_started_at` and
//! `suggested_duration` against an injected wall clock. Nothing here is
//! persisted; a shared 1-second tick recomputes every running timer and the
//! `ExpiryTracker` guarantees the expiry side effect fires once per run.

use std::collections::HashSet;

use uuid::Uuid;

use crate::models::Item;

/// Lifecycle of an item's timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// No timer running.
    Idle,
    /// Counting; with a duration this is the countdown, without one it is
    /// plain elapsed time.
    Running,
    /// Duration elapsed; countdown pinned at 00:00.
    Expired,
}

/// What the card shows for a timer on a given tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerReadout {
    pub phase: TimerPhase,
    /// "MM:SS" remaining for countdowns, "M:SS" elapsed otherwise.
    pub label: String,
    /// Countdown progress in [0, 1]; 0 for plain elapsed timers.
    pub fraction: f64,
}

impl TimerReadout {
    const IDLE: TimerReadout = TimerReadout {
        phase: TimerPhase::Idle,
        label: String::new(),
        fraction: 0.0,
    };
}

/// Compute the readout for one item at `now_ms`.
pub fn readout(item: &Item, now_ms: i64) -> TimerReadout {
    let Some(started) = item.timer_started_at else {
        return TimerReadout::IDLE;
    };
    let elapsed = ((now_ms - started) / 1000).max(0);
    match item.suggested_duration {
        Some(minutes) => {
            let total = i64::from(minutes) * 60;
            let remaining = total - elapsed;
            if remaining <= 0 {
                TimerReadout {
                    phase: TimerPhase::Expired,
                    label: "00:00".to_string(),
                    fraction: 1.0,
                }
            } else {
                TimerReadout {
                    phase: TimerPhase::Running,
                    label: format!("{:02}:{:02}", remaining / 60, remaining % 60),
                    fraction: if total > 0 {
                        (elapsed as f64 / total as f64).min(1.0)
                    } else {
                        1.0
                    },
                }
            }
        }
        None => TimerReadout {
            phase: TimerPhase::Running,
            label: format!("{}:{:02}", elapsed / 60, elapsed % 60),
            fraction: 0.0,
        },
    }
}

/// One-shot expiry guard across ticks.
///
/// `sweep` reports each item the moment its countdown crosses zero and not
/// again while that run continues; stopping or completing the timer arms
/// the item for a future run.
#[derive(Debug, Default)]
pub struct ExpiryTracker {
    fired: HashSet<Uuid>,
}

impl ExpiryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute every timer at `now_ms`; returns the items that expired
    /// on this tick.
    pub fn sweep(&mut self, items: &[Item], now_ms: i64) -> Vec<Uuid> {
        let mut newly = Vec::new();
        let mut expired_now: HashSet<Uuid> = HashSet::new();
        for item in items {
            if item.is_completed || item.timer_started_at.is_none() {
                continue;
            }
            if readout(item, now_ms).phase == TimerPhase::Expired {
                expired_now.insert(item.id);
                if self.fired.insert(item.id) {
                    newly.push(item.id);
                }
            }
        }
        // Items that stopped, completed or vanished re-arm.
        self.fired.retain(|id| expired_now.contains(id));
        newly
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn timed_item(started_at: i64, duration_min: Option<u32>) -> Item {
        Item {
            id: Uuid::new_v4(),
            title: "計時".to_string(),
            description: None,
            category: Category::B,
            date: None,
            time: None,
            is_completed: false,
            progress: None,
            location: None,
            suggested_duration: duration_min,
            timer_started_at: Some(started_at),
        }
    }

    #[test]
    fn test_countdown_remaining_is_zero_padded() {
        // 90s into a 2-minute countdown leaves 00:30.
        let item = timed_item(0, Some(2));
        let r = readout(&item, 90_000);
        assert_eq!(r.phase, TimerPhase::Running);
        assert_eq!(r.label, "00:30");
        assert!((r.fraction - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_countdown_clamps_at_zero() {
        // 130s into a 2-minute countdown is expired, pinned at 00:00.
        let item = timed_item(0, Some(2));
        let r = readout(&item, 130_000);
        assert_eq!(r.phase, TimerPhase::Expired);
        assert_eq!(r.label, "00:00");
        assert_eq!(r.fraction, 1.0);
    }

    #[test]
    fn test_plain_elapsed_has_no_expiry() {
        let item = timed_item(0, None);
        let r = readout(&item, 125_000);
        assert_eq!(r.phase, TimerPhase::Running);
        assert_eq!(r.label, "2:05");

        // Never expires without a duration.
        let r = readout(&item, 3_600_000);
        assert_eq!(r.phase, TimerPhase::Running);
    }

    #[test]
    fn test_idle_without_started_at() {
        let mut item = timed_item(0, Some(2));
        item.timer_started_at = None;
        assert_eq!(readout(&item, 90_000).phase, TimerPhase::Idle);
    }

    #[test]
    fn test_expiry_fires_exactly_once() {
        let item = timed_item(0, Some(2));
        let id = item.id;
        let items = vec![item];
        let mut tracker = ExpiryTracker::new();

        assert!(tracker.sweep(&items, 119_000).is_empty());
        assert_eq!(tracker.sweep(&items, 120_000), vec![id]);
        // Subsequent ticks stay quiet.
        assert!(tracker.sweep(&items, 121_000).is_empty());
        assert!(tracker.sweep(&items, 200_000).is_empty());
    }

    #[test]
    fn test_expiry_rearms_after_restart() {
        let mut item = timed_item(0, Some(1));
        let id = item.id;
        let mut tracker = ExpiryTracker::new();

        assert_eq!(tracker.sweep(std::slice::from_ref(&item), 61_000), vec![id]);

        // Stop, then start a fresh run.
        item.timer_started_at = None;
        assert!(tracker.sweep(std::slice::from_ref(&item), 62_000).is_empty());
        item.timer_started_at = Some(120_000);
        assert!(tracker.sweep(std::slice::from_ref(&item), 121_000).is_empty());
        assert_eq!(tracker.sweep(std::slice::from_ref(&item), 181_000), vec![id]);
    }
}
