//! Coarse mastery tiers, used for reporting only.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mastery {
    New,
    Learning,
    Reviewing,
    Mastered,
}

impl Mastery {
    /// Tier for a card with the given repetition count and interval,
    /// evaluated in precedence order. An interval of exactly 7 is
    /// `Reviewing`; exactly 30 is `Mastered`.
    pub fn classify(repetitions: u32, interval_days: u32) -> Self {
        if repetitions == 0 {
            Mastery::New
        } else if interval_days < 7 {
            Mastery::Learning
        } else if interval_days < 30 {
            Mastery::Reviewing
        } else {
            Mastery::Mastered
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mastery::New => "new",
            Mastery::Learning => "learning",
            Mastery::Reviewing => "reviewing",
            Mastery::Mastered => "mastered",
        }
    }
}

impl fmt::Display for Mastery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
