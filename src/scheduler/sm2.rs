//! SM-2 derived review transition with a three-level rating scale.
//!
//! The rules, by rating:
//! - `forgot` resets the card: interval back to 1 day, repetitions to 0,
//!   ease factor down by 0.2.
//! - `hard` grows the interval slowly (x1.2) and eases the factor down by 0.1.
//! - `good` follows the SM-2 ladder: 1 day, then 6 days, then the current
//!   interval times the ease factor; ease factor up by 0.1.
//!
//! The ease factor never drops below 1.3 and the interval never below 1 day.

use crate::models::review_state::MIN_EASE_FACTOR;
use crate::models::{Card, Rating, ReviewState};
use chrono::{DateTime, Days, Utc};

/// Interval multiplier applied on a `hard` rating.
const HARD_INTERVAL_FACTOR: f64 = 1.2;

/// Computes the scheduling state a card moves to when rated at `now`.
///
/// Pure: the input state is not touched. The returned state has
/// `last_review = now` and `next_review` exactly `interval_days` calendar
/// days after `now`. Day arithmetic mutates the date component, so month and
/// year rollover behave like a wall calendar rather than N * 86400 seconds.
pub fn next_review_state(state: &ReviewState, rating: Rating, now: DateTime<Utc>) -> ReviewState {
    // Repair out-of-range input before branching on it.
    let state = state.clone().normalized();

    let (interval_days, repetitions, ease_factor) = match rating {
        Rating::Forgot => (1, 0, clamp_ease(state.ease_factor - 0.2)),
        Rating::Hard => (
            scale_interval(state.interval_days, HARD_INTERVAL_FACTOR),
            state.repetitions + 1,
            clamp_ease(state.ease_factor - 0.1),
        ),
        Rating::Good => {
            // The interval uses the ease factor as it stood at rating time;
            // the +0.1 adjustment applies afterwards.
            let interval_days = match state.repetitions {
                0 => 1,
                1 => 6,
                _ => scale_interval(state.interval_days, state.ease_factor),
            };
            (
                interval_days,
                state.repetitions + 1,
                clamp_ease(state.ease_factor + 0.1),
            )
        }
    };

    ReviewState {
        interval_days,
        ease_factor,
        repetitions,
        next_review: add_days(now, interval_days),
        last_review: Some(now),
    }
}

/// Applies the rating transition to exactly one card's scheduling fields.
pub fn review_card(card: &mut Card, rating: Rating, now: DateTime<Utc>) {
    card.review = next_review_state(&card.review, rating, now);
}

/// `review_card` against the current wall-clock time.
pub fn review_card_now(card: &mut Card, rating: Rating) {
    review_card(card, rating, Utc::now());
}

fn clamp_ease(ease_factor: f64) -> f64 {
    ease_factor.max(MIN_EASE_FACTOR)
}

/// Rounds half away from zero, keeping the one-day floor.
fn scale_interval(interval_days: u32, factor: f64) -> u32 {
    ((f64::from(interval_days) * factor).round() as u32).max(1)
}

fn add_days(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    // Only fails for dates far outside any plausible schedule; keep the card
    // due at `now` rather than panic.
    now.checked_add_days(Days::new(u64::from(days))).unwrap_or(now)
}
