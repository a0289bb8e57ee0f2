//! Review scheduling core: the rating transition, the due-card query, and
//! the mastery classifier.
//!
//! Everything here is a plain function of its inputs plus an explicit `now`,
//! so any orchestration layer can call it; the `*_now` variants capture
//! `Utc::now()` for callers on the wall clock.

pub mod sm2;

pub use sm2::{next_review_state, review_card, review_card_now};

use crate::models::{Card, Mastery};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Cards in `deck_id` that are due at `now`, longest overdue first.
///
/// Inclusive at the boundary: a card due exactly at `now` is returned. Equal
/// due timestamps keep the input order (the sort is stable). The result is
/// recomputed on every call; "now" keeps moving, so nothing is cached.
pub fn due_cards<'a>(cards: &'a [Card], deck_id: Uuid, now: DateTime<Utc>) -> Vec<&'a Card> {
    let mut due: Vec<&Card> = cards
        .iter()
        .filter(|card| card.deck_id == deck_id && card.review.is_due(now))
        .collect();
    due.sort_by_key(|card| card.review.next_review);
    due
}

/// `due_cards` against the current wall-clock time.
pub fn due_cards_now<'a>(cards: &'a [Card], deck_id: Uuid) -> Vec<&'a Card> {
    due_cards(cards, deck_id, Utc::now())
}

/// Reporting tier for a card. Purely a function of its repetition count and
/// interval; has no effect on scheduling.
pub fn mastery_level(card: &Card) -> Mastery {
    Mastery::classify(card.review.repetitions, card.review.interval_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rating;
    use chrono::Duration;

    fn card_due_at(deck_id: Uuid, front: &str, due: DateTime<Utc>) -> Card {
        let mut card = Card::new(deck_id, front, "", due);
        card.review.next_review = due;
        card
    }

    #[test]
    fn test_returns_only_due_cards_of_the_deck() {
        let now = Utc::now();
        let deck = Uuid::new_v4();
        let other_deck = Uuid::new_v4();

        let cards = vec![
            card_due_at(deck, "three days overdue", now - Duration::days(3)),
            card_due_at(deck, "one day overdue", now - Duration::days(1)),
            card_due_at(deck, "due tomorrow", now + Duration::days(1)),
            // Long overdue, wrong deck: never included.
            card_due_at(other_deck, "other deck", now - Duration::days(30)),
        ];

        let due = due_cards(&cards, deck, now);
        let fronts: Vec<&str> = due.iter().map(|c| c.front.as_str()).collect();
        assert_eq!(fronts, ["three days overdue", "one day overdue"]);
    }

    #[test]
    fn test_due_exactly_now_counts() {
        let now = Utc::now();
        let deck = Uuid::new_v4();
        let cards = vec![card_due_at(deck, "on the dot", now)];

        assert_eq!(due_cards(&cards, deck, now).len(), 1);
    }

    #[test]
    fn test_orders_longest_overdue_first() {
        let now = Utc::now();
        let deck = Uuid::new_v4();
        let cards = vec![
            card_due_at(deck, "b", now - Duration::hours(1)),
            card_due_at(deck, "c", now - Duration::minutes(5)),
            card_due_at(deck, "a", now - Duration::days(2)),
        ];

        let fronts: Vec<&str> = due_cards(&cards, deck, now)
            .iter()
            .map(|c| c.front.as_str())
            .collect();
        assert_eq!(fronts, ["a", "b", "c"]);
    }

    #[test]
    fn test_equal_timestamps_keep_insertion_order() {
        let now = Utc::now();
        let deck = Uuid::new_v4();
        let due = now - Duration::days(1);
        let cards = vec![
            card_due_at(deck, "first", due),
            card_due_at(deck, "second", due),
            card_due_at(deck, "third", due),
        ];

        let fronts: Vec<&str> = due_cards(&cards, deck, now)
            .iter()
            .map(|c| c.front.as_str())
            .collect();
        assert_eq!(fronts, ["first", "second", "third"]);
    }

    #[test]
    fn test_empty_when_nothing_matches() {
        let now = Utc::now();
        let deck = Uuid::new_v4();
        let cards = vec![card_due_at(deck, "later", now + Duration::days(3))];

        assert!(due_cards(&cards, deck, now).is_empty());
        assert!(due_cards(&[], deck, now).is_empty());
    }

    #[test]
    fn test_same_inputs_same_result() {
        let now = Utc::now();
        let deck = Uuid::new_v4();
        let cards = vec![
            card_due_at(deck, "x", now - Duration::days(2)),
            card_due_at(deck, "y", now - Duration::days(1)),
        ];

        let first: Vec<Uuid> = due_cards(&cards, deck, now).iter().map(|c| c.id).collect();
        let second: Vec<Uuid> = due_cards(&cards, deck, now).iter().map(|c| c.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_mastery_level_tracks_review_state() {
        let now = Utc::now();
        let mut card = Card::new(Uuid::new_v4(), "q", "a", now);
        assert_eq!(mastery_level(&card), Mastery::New);

        review_card(&mut card, Rating::Good, now);
        assert_eq!(mastery_level(&card), Mastery::Learning);

        card.review.repetitions = 5;
        card.review.interval_days = 7;
        assert_eq!(mastery_level(&card), Mastery::Reviewing);

        card.review.interval_days = 30;
        assert_eq!(mastery_level(&card), Mastery::Mastered);
    }
}
