//! In-memory card store: the storage collaborator the scheduler runs against.
//!
//! Decks and cards are held in insertion order. Any durable backend can stand
//! in for this one as long as it hands the scheduler the same fields back.

use crate::models::{Card, Deck, Rating};
use crate::scheduler;
use chrono::{DateTime, Utc};
use log::debug;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no deck with id {0}")]
    UnknownDeck(Uuid),
    #[error("no card with id {0}")]
    UnknownCard(Uuid),
}

#[derive(Debug, Default)]
pub struct CardStore {
    decks: Vec<Deck>,
    cards: Vec<Card>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_deck(&mut self, deck: Deck) -> Uuid {
        debug!("deck '{}' added ({})", deck.name, deck.id);
        let id = deck.id;
        self.decks.push(deck);
        id
    }

    pub fn deck(&self, id: Uuid) -> Option<&Deck> {
        self.decks.iter().find(|deck| deck.id == id)
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    /// Adds a card to its deck. The deck must already exist.
    pub fn add_card(&mut self, card: Card) -> Result<Uuid, StoreError> {
        if self.deck(card.deck_id).is_none() {
            return Err(StoreError::UnknownDeck(card.deck_id));
        }
        let id = card.id;
        self.cards.push(card);
        Ok(id)
    }

    pub fn card(&self, id: Uuid) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn cards_in_deck(&self, deck_id: Uuid) -> Vec<&Card> {
        self.cards
            .iter()
            .filter(|card| card.deck_id == deck_id)
            .collect()
    }

    /// Cards in `deck_id` due at `now`, longest overdue first.
    pub fn due_for_review(&self, deck_id: Uuid, now: DateTime<Utc>) -> Vec<&Card> {
        scheduler::due_cards(&self.cards, deck_id, now)
    }

    /// Applies a rating to exactly one card and returns it with its new
    /// scheduling state.
    pub fn rate(
        &mut self,
        card_id: Uuid,
        rating: Rating,
        now: DateTime<Utc>,
    ) -> Result<&Card, StoreError> {
        let card = self
            .cards
            .iter_mut()
            .find(|card| card.id == card_id)
            .ok_or(StoreError::UnknownCard(card_id))?;

        scheduler::review_card(card, rating, now);
        debug!(
            "card {card_id} rated {rating}: next review {}",
            card.review.next_review
        );
        Ok(card)
    }
}
