//! Qualitative evaluation bands

use serde::{Deserialize, Serialize};
use std::fmt;

use super::score::is_valid_score;

/// Qualitative evaluation of a percentage score, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Evaluation {
    /// Tier 1, score ≥ 93
    VeryGood,
    /// Tier 2, score ≥ 80
    Good,
    /// Tier 3, score ≥ 67
    Satisfactory,
    /// Tier 4, score ≥ 60
    Sufficient,
    /// Tier 5, score < 60
    Insufficient,
}

/// Lower bound (inclusive) of every band except the last, checked in order.
const BANDS: [(f64, Evaluation); 4] = [
    (93.0, Evaluation::VeryGood),
    (80.0, Evaluation::Good),
    (67.0, Evaluation::Satisfactory),
    (60.0, Evaluation::Sufficient),
];

impl Evaluation {
    /// All evaluations, best first
    pub const ALL: [Self; 5] = [
        Self::VeryGood,
        Self::Good,
        Self::Satisfactory,
        Self::Sufficient,
        Self::Insufficient,
    ];

    /// Band a valid score. Callers must have checked the range already.
    fn from_valid_score(score: f64) -> Self {
        BANDS
            .iter()
            .find(|(lower, _)| score >= *lower)
            .map_or(Self::Insufficient, |(_, evaluation)| *evaluation)
    }

    /// Tier number, 1 (best) through 5
    #[must_use]
    pub const fn tier(self) -> u8 {
        match self {
            Self::VeryGood => 1,
            Self::Good => 2,
            Self::Satisfactory => 3,
            Self::Sufficient => 4,
            Self::Insufficient => 5,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Satisfactory => "Satisfactory",
            Self::Sufficient => "Sufficient",
            Self::Insufficient => "Insufficient",
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Evaluate a percentage score. Returns `None` for absent or out-of-range scores.
#[must_use]
pub fn evaluate(score: Option<f64>) -> Option<Evaluation> {
    score
        .filter(|_| is_valid_score(score))
        .map(Evaluation::from_valid_score)
}
