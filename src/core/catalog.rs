//! Static reference data: culture-course catalog and credit standard
//!
//! The catalog is passed explicitly to everything that derives course
//! records; there is no process-wide instance.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::debug;

/// Credit value of each language course (English, German)
pub const LANGUAGE_CREDIT: f64 = 2.5;

/// Credit value of each major course
pub const MAJOR_CREDIT: f64 = 5.0;

/// Fixed credits per course type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreditStandard {
    /// Credits for each language course
    pub language: f64,
    /// Credits for each major course
    pub major: f64,
}

impl Default for CreditStandard {
    fn default() -> Self {
        Self {
            language: LANGUAGE_CREDIT,
            major: MAJOR_CREDIT,
        }
    }
}

/// One selectable culture course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CultureCourseOption {
    /// Unique key stored in the transcript (e.g., "academic-writing")
    pub key: String,
    /// Display label
    pub label: String,
    /// Fixed credit value
    pub credit: f64,
}

impl CultureCourseOption {
    /// Create a catalog entry
    #[must_use]
    pub fn new(key: &str, label: &str, credit: f64) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            credit,
        }
    }
}

/// Built-in culture modules: (key, label, credit)
const STANDARD_CULTURE_COURSES: [(&str, &str, f64); 7] = [
    ("intercultural-communication", "Intercultural Communication", 2.0),
    ("german-society", "German Culture and Society", 2.5),
    ("academic-writing", "Academic Writing", 1.0),
    ("european-history", "European History", 3.0),
    ("philosophy-ethics", "Philosophy and Ethics", 2.0),
    ("art-appreciation", "Art Appreciation", 1.0),
    ("economics-basics", "Introduction to Economics", 3.0),
];

/// Reference table used when expanding semesters into course records
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    credits: CreditStandard,
    culture: Vec<CultureCourseOption>,
}

impl Catalog {
    /// Build a catalog from explicit entries.
    ///
    /// # Errors
    /// Returns an error if `culture` is empty or contains a duplicate key, since
    /// unknown keys must always be able to fall back to a first entry.
    pub fn new(credits: CreditStandard, culture: Vec<CultureCourseOption>) -> Result<Self, String> {
        if culture.is_empty() {
            return Err("Culture catalog must contain at least one course".to_string());
        }
        let mut seen = HashSet::new();
        for option in &culture {
            if !seen.insert(option.key.as_str()) {
                return Err(format!("Duplicate culture course key: '{}'", option.key));
            }
        }
        Ok(Self { credits, culture })
    }

    /// The program's fixed catalog: seven culture modules and the standard credits
    #[must_use]
    pub fn standard() -> Self {
        Self {
            credits: CreditStandard::default(),
            culture: STANDARD_CULTURE_COURSES
                .iter()
                .map(|(key, label, credit)| CultureCourseOption::new(key, label, *credit))
                .collect(),
        }
    }

    /// Credit standard for language and major courses
    #[must_use]
    pub const fn credits(&self) -> CreditStandard {
        self.credits
    }

    /// All culture options in catalog order
    #[must_use]
    pub fn culture_options(&self) -> &[CultureCourseOption] {
        &self.culture
    }

    /// The entry new semesters start with and unknown keys fall back to
    #[must_use]
    pub fn default_culture(&self) -> &CultureCourseOption {
        &self.culture[0]
    }

    /// Exact lookup by key
    #[must_use]
    pub fn find_culture(&self, key: &str) -> Option<&CultureCourseOption> {
        self.culture.iter().find(|option| option.key == key)
    }

    /// Resolve a stored key, falling back to the first entry when unknown
    #[must_use]
    pub fn resolve_culture(&self, key: &str) -> &CultureCourseOption {
        self.find_culture(key).unwrap_or_else(|| {
            if key.is_empty() {
                return self.default_culture();
            }
            debug!(
                "Unknown culture course key '{key}', using '{}'",
                self.default_culture().key
            );
            self.default_culture()
        })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
