//! Card is a prompt/answer pair plus its scheduling state.
use super::ReviewState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: Uuid,
    pub deck_id: Uuid,
    pub front: String,
    pub back: String,
    pub created_at: DateTime<Utc>,
    /// The only fields the scheduler reads or writes.
    pub review: ReviewState,
}

impl Card {
    /// Creates a card in the given deck, due for its first review immediately.
    pub fn new(deck_id: Uuid, front: &str, back: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            deck_id,
            front: front.to_string(),
            back: back.to_string(),
            created_at: now,
            review: ReviewState::new(now),
        }
    }
}
