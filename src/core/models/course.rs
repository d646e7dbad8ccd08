//! Major course model

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::aggregate::{CourseKind, CourseRecord};
use crate::core::grading::parse_score;

/// Stable identifier of a major course within a transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub u64);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A major course as entered by the student
///
/// Both fields hold raw input exactly as typed so that unfinished or invalid
/// entries survive a save/load cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MajorCourse {
    /// Stable identifier
    pub id: CourseId,

    /// Free-text course name (may be empty)
    #[serde(default)]
    pub name: String,

    /// Raw score input (may be empty or unparseable)
    #[serde(default)]
    pub score: String,
}

impl MajorCourse {
    /// Create a blank course
    #[must_use]
    pub const fn new(id: CourseId) -> Self {
        Self {
            id,
            name: String::new(),
            score: String::new(),
        }
    }

    /// Copy of this course with a different name
    #[must_use]
    pub fn with_name(&self, name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..self.clone()
        }
    }

    /// Copy of this course with a different raw score
    #[must_use]
    pub fn with_score(&self, raw: &str) -> Self {
        Self {
            score: raw.to_string(),
            ..self.clone()
        }
    }

    /// Parsed score, `None` when empty or not a number
    #[must_use]
    pub fn parsed_score(&self) -> Option<f64> {
        parse_score(&self.score)
    }

    /// Normalized record for aggregation
    #[must_use]
    pub fn to_record(&self, credit: f64) -> CourseRecord {
        CourseRecord::new(CourseKind::Major, self.name.clone(), credit, self.parsed_score())
    }
}
