//! Aggregate reporting over cards and study sessions.
//!
//! Builds on the mastery classifier; the scheduler itself exposes no
//! aggregation.

use crate::models::{Card, Mastery, StudySession};
use crate::scheduler::mastery_level;
use chrono::{Days, NaiveDate};
use uuid::Uuid;

/// Streak scans stop after a year without a gap.
const MAX_STREAK_DAYS: u64 = 365;

/// Card counts per mastery tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MasteryBreakdown {
    pub new: u32,
    pub learning: u32,
    pub reviewing: u32,
    pub mastered: u32,
}

impl MasteryBreakdown {
    pub fn total(&self) -> u32 {
        self.new + self.learning + self.reviewing + self.mastered
    }
}

pub fn mastery_distribution(cards: &[Card]) -> MasteryBreakdown {
    let mut breakdown = MasteryBreakdown::default();
    for card in cards {
        match mastery_level(card) {
            Mastery::New => breakdown.new += 1,
            Mastery::Learning => breakdown.learning += 1,
            Mastery::Reviewing => breakdown.reviewing += 1,
            Mastery::Mastered => breakdown.mastered += 1,
        }
    }
    breakdown
}

/// How far one deck has progressed toward full mastery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeckProgress {
    pub total: u32,
    pub mastered: u32,
    /// Share of the deck mastered, as a whole percentage. 0 for an empty deck.
    pub percent: u32,
}

pub fn deck_progress(cards: &[Card], deck_id: Uuid) -> DeckProgress {
    let mut total = 0u32;
    let mut mastered = 0u32;
    for card in cards.iter().filter(|card| card.deck_id == deck_id) {
        total += 1;
        if mastery_level(card) == Mastery::Mastered {
            mastered += 1;
        }
    }
    let percent = if total > 0 {
        (f64::from(mastered) / f64::from(total) * 100.0).round() as u32
    } else {
        0
    };
    DeckProgress {
        total,
        mastered,
        percent,
    }
}

/// Consecutive days with at least one study session, walking backward from
/// `today`. A `today` without sessions does not end the run; the streak may
/// simply continue from yesterday. Days are UTC dates of `started_at`.
pub fn study_streak(sessions: &[StudySession], today: NaiveDate) -> u32 {
    let mut streak = 0;
    for offset in 0..MAX_STREAK_DAYS {
        let Some(day) = today.checked_sub_days(Days::new(offset)) else {
            break;
        };
        let studied = sessions
            .iter()
            .any(|session| session.started_at.date_naive() == day);
        if studied {
            streak += 1;
        } else if offset > 0 {
            break;
        }
    }
    streak
}

/// Total cards studied on each of the trailing `days` days, oldest first.
pub fn cards_studied_per_day(
    sessions: &[StudySession],
    today: NaiveDate,
    days: usize,
) -> Vec<(NaiveDate, u32)> {
    (0..days as u64)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(|day| {
            let studied = sessions
                .iter()
                .filter(|session| session.started_at.date_naive() == day)
                .map(|session| session.cards_studied() as u32)
                .sum();
            (day, studied)
        })
        .collect()
}
