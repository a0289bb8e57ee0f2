pub mod models;
pub mod scheduler;
pub mod stats;
pub mod store;

pub use models::{Card, Deck, Mastery, Rating, ReviewState, StudySession};
pub use scheduler::{
    due_cards, due_cards_now, mastery_level, next_review_state, review_card, review_card_now,
};
pub use store::{CardStore, StoreError};
