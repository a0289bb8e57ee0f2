//! Scheduling fields tracked per card; the data contract shared by the
//! review updater, the due-card query, and the mastery classifier.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lower bound for the ease factor.
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Ease factor assigned to a card that has never been reviewed.
pub const INITIAL_EASE_FACTOR: f64 = 2.5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewState {
    /// Days until the next scheduled review. Always >= 1.
    pub interval_days: u32,
    /// Interval multiplier. Always >= 1.3.
    pub ease_factor: f64,
    /// Consecutive reviews since the last lapse.
    pub repetitions: u32,
    /// The card is due when now >= this instant.
    pub next_review: DateTime<Utc>,
    /// When the card was last rated, or `None` if never reviewed.
    pub last_review: Option<DateTime<Utc>>,
}

impl ReviewState {
    /// State for a freshly created card: due immediately, never reviewed.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            interval_days: 1,
            ease_factor: INITIAL_EASE_FACTOR,
            repetitions: 0,
            next_review: now,
            last_review: None,
        }
    }

    /// True when the card is due at `now`. Inclusive: a card due exactly at
    /// `now` counts.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review <= now
    }

    /// Clamps `interval_days` and `ease_factor` back into their documented
    /// ranges. A corrupted store read self-heals on the next transition.
    pub fn normalized(mut self) -> Self {
        self.interval_days = self.interval_days.max(1);
        self.ease_factor = self.ease_factor.max(MIN_EASE_FACTOR);
        self
    }
}
