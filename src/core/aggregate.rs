//! Credit-weighted aggregation over course records

use serde::Serialize;
use std::fmt;

use crate::core::grading::{is_valid_credit, is_valid_score, to_secondary_grade};

/// Which slot of a semester a record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseKind {
    /// English or German language course
    Language,
    /// Major course
    Major,
    /// Elective culture course
    Culture,
}

impl fmt::Display for CourseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Language => write!(f, "language"),
            Self::Major => write!(f, "major"),
            Self::Culture => write!(f, "culture"),
        }
    }
}

/// Normalized course entry consumed by [`aggregate`].
///
/// Derived from a semester on every read and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseRecord {
    /// Origin of the record
    pub kind: CourseKind,
    /// Display name
    pub name: String,
    /// Credit weight
    pub credit: f64,
    /// Parsed score; `None` when nothing usable was entered
    pub score: Option<f64>,
}

impl CourseRecord {
    /// Create a record
    #[must_use]
    pub fn new(kind: CourseKind, name: impl Into<String>, credit: f64, score: Option<f64>) -> Self {
        Self {
            kind,
            name: name.into(),
            credit,
            score,
        }
    }

    /// Whether this record contributes to weighted averages
    #[must_use]
    pub fn is_countable(&self) -> bool {
        is_valid_score(self.score) && is_valid_credit(self.credit)
    }
}

/// Result of aggregating a set of course records
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aggregate {
    /// Sum of credits over countable records
    pub total_credits: f64,
    /// Credit-weighted mean percentage, `None` without countable credits
    pub weighted_score: Option<f64>,
    /// Credit-weighted mean secondary grade, `None` without countable credits
    pub weighted_secondary: Option<f64>,
    /// Number of countable records
    pub count: usize,
}

impl Aggregate {
    /// Aggregate of nothing: zero credits and no averages
    pub const EMPTY: Self = Self {
        total_credits: 0.0,
        weighted_score: None,
        weighted_secondary: None,
        count: 0,
    };
}

impl Default for Aggregate {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Aggregate course records into credit-weighted averages.
///
/// Records with an absent or out-of-range score, or a non-positive credit,
/// are skipped. When no credits remain the averages are `None`.
#[must_use]
pub fn aggregate<'a, I>(records: I) -> Aggregate
where
    I: IntoIterator<Item = &'a CourseRecord>,
{
    let mut total_credits = 0.0;
    let mut score_sum = 0.0;
    let mut secondary_sum = 0.0;
    let mut count = 0;

    for record in records.into_iter().filter(|r| r.is_countable()) {
        let (Some(score), Some(secondary)) = (record.score, to_secondary_grade(record.score)) else {
            continue;
        };
        total_credits += record.credit;
        score_sum += score * record.credit;
        secondary_sum += secondary * record.credit;
        count += 1;
    }

    if total_credits > 0.0 {
        Aggregate {
            total_credits,
            weighted_score: Some(score_sum / total_credits),
            weighted_secondary: Some(secondary_sum / total_credits),
            count,
        }
    } else {
        Aggregate {
            total_credits,
            count,
            ..Aggregate::EMPTY
        }
    }
}
