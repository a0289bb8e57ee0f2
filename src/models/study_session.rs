//! Bookkeeping for one sitting of reviews against a single deck.
//!
//! A session records what got rated and when; it never touches scheduling
//! state. The study flow (walking the due set, ending a batch) is the
//! caller's concern.
use super::Rating;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Per-rating counters for a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingTally {
    pub forgot: u32,
    pub hard: u32,
    pub good: u32,
}

impl RatingTally {
    pub fn record(&mut self, rating: Rating) {
        match rating {
            Rating::Forgot => self.forgot += 1,
            Rating::Hard => self.hard += 1,
            Rating::Good => self.good += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.forgot + self.hard + self.good
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StudySession {
    pub id: Uuid,
    pub deck_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub ratings: RatingTally,
    studied: HashSet<Uuid>,
}

impl StudySession {
    pub fn begin(deck_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            deck_id,
            started_at: now,
            ended_at: None,
            ratings: RatingTally::default(),
            studied: HashSet::new(),
        }
    }

    /// Records one rating event. A card rated more than once in the same
    /// sitting still counts once toward `cards_studied`.
    pub fn record(&mut self, card_id: Uuid, rating: Rating) {
        self.ratings.record(rating);
        self.studied.insert(card_id);
    }

    /// Number of distinct cards rated so far.
    pub fn cards_studied(&self) -> usize {
        self.studied.len()
    }

    pub fn is_finished(&self) -> bool {
        self.ended_at.is_some()
    }

    pub fn finish(&mut self, now: DateTime<Utc>) {
        self.ended_at = Some(now);
        debug!(
            "session {} on deck {} finished: {} cards, {} ratings",
            self.id,
            self.deck_id,
            self.cards_studied(),
            self.ratings.total()
        );
    }
}
