//! Recall quality reported after a card is flipped.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The three-level rating scale. This is a closed set: free-form input must
/// go through `FromStr` before it reaches the scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    /// Failed to recall; the card lapses.
    Forgot,
    /// Recalled with difficulty.
    Hard,
    /// Recalled successfully.
    Good,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Forgot => "forgot",
            Rating::Hard => "hard",
            Rating::Good => "good",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown rating '{0}', expected one of: forgot, hard, good")]
pub struct ParseRatingError(String);

impl FromStr for Rating {
    type Err = ParseRatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forgot" => Ok(Rating::Forgot),
            "hard" => Ok(Rating::Hard),
            "good" => Ok(Rating::Good),
            other => Err(ParseRatingError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_known_ratings() {
        assert_eq!("forgot".parse(), Ok(Rating::Forgot));
        assert_eq!("hard".parse(), Ok(Rating::Hard));
        assert_eq!("good".parse(), Ok(Rating::Good));
    }

    #[test]
    fn test_rejects_anything_else() {
        assert!("easy".parse::<Rating>().is_err());
        assert!("GOOD".parse::<Rating>().is_err());
        assert!("".parse::<Rating>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_strings() {
        assert_eq!(serde_json::to_string(&Rating::Forgot).unwrap(), "\"forgot\"");
        let rating: Rating = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(rating, Rating::Hard);
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for rating in [Rating::Forgot, Rating::Hard, Rating::Good] {
            assert_eq!(rating.to_string().parse(), Ok(rating));
        }
    }
}
