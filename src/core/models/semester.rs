//! Semester model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::course::{CourseId, MajorCourse};
use crate::core::aggregate::{CourseKind, CourseRecord};
use crate::core::catalog::Catalog;
use crate::core::grading::parse_score;

/// Stable identifier of a semester within a transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SemesterId(pub u64);

impl fmt::Display for SemesterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two language courses every semester carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English language course
    English,
    /// German language course
    German,
}

impl Language {
    /// Both languages in record order
    pub const ALL: [Self; 2] = [Self::English, Self::German];

    /// Display name, also used as the course record name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::German => "German",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Selected culture course and its raw score
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CultureChoice {
    /// Catalog key; unknown or empty keys resolve to the catalog's first entry
    #[serde(default)]
    pub key: String,
    /// Raw score input
    #[serde(default)]
    pub score: String,
}

/// One semester of the transcript
///
/// Updates never modify a semester in place: every `with_*` method returns a
/// new value and leaves `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    /// Stable identifier
    pub id: SemesterId,

    /// Raw English score
    #[serde(default)]
    pub english: String,

    /// Raw German score
    #[serde(default)]
    pub german: String,

    /// Culture course selection
    #[serde(default)]
    pub culture: CultureChoice,

    /// Major courses in display order
    #[serde(default)]
    pub majors: Vec<MajorCourse>,
}

impl Semester {
    /// Create an empty semester holding one blank major course
    #[must_use]
    pub fn new(id: SemesterId, first_course: CourseId) -> Self {
        Self {
            id,
            english: String::new(),
            german: String::new(),
            culture: CultureChoice::default(),
            majors: vec![MajorCourse::new(first_course)],
        }
    }

    /// Raw score of a language course
    #[must_use]
    pub fn language_score(&self, language: Language) -> &str {
        match language {
            Language::English => &self.english,
            Language::German => &self.german,
        }
    }

    /// Look up a major course by id
    #[must_use]
    pub fn major(&self, id: CourseId) -> Option<&MajorCourse> {
        self.majors.iter().find(|course| course.id == id)
    }

    /// Copy with one language score replaced
    #[must_use]
    pub fn with_language_score(&self, language: Language, raw: &str) -> Self {
        let mut next = self.clone();
        match language {
            Language::English => next.english = raw.to_string(),
            Language::German => next.german = raw.to_string(),
        }
        next
    }

    /// Copy with a blank major course appended
    #[must_use]
    pub fn with_major_added(&self, id: CourseId) -> Self {
        let mut majors = self.majors.clone();
        majors.push(MajorCourse::new(id));
        Self {
            majors,
            ..self.clone()
        }
    }

    /// Copy without the given major course. The list may become empty.
    #[must_use]
    pub fn with_major_removed(&self, id: CourseId) -> Self {
        Self {
            majors: self
                .majors
                .iter()
                .filter(|course| course.id != id)
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    /// Copy with one major course replaced by `update(course)`
    #[must_use]
    pub fn with_major_updated<F>(&self, id: CourseId, update: F) -> Self
    where
        F: Fn(&MajorCourse) -> MajorCourse,
    {
        Self {
            majors: self
                .majors
                .iter()
                .map(|course| {
                    if course.id == id {
                        update(course)
                    } else {
                        course.clone()
                    }
                })
                .collect(),
            ..self.clone()
        }
    }

    /// Copy with a different culture course key
    #[must_use]
    pub fn with_culture_key(&self, key: &str) -> Self {
        Self {
            culture: CultureChoice {
                key: key.to_string(),
                score: self.culture.score.clone(),
            },
            ..self.clone()
        }
    }

    /// Copy with a different culture course score
    #[must_use]
    pub fn with_culture_score(&self, raw: &str) -> Self {
        Self {
            culture: CultureChoice {
                key: self.culture.key.clone(),
                score: raw.to_string(),
            },
            ..self.clone()
        }
    }

    /// Expand into course records: English, German, each major course in
    /// order, then the resolved culture course.
    #[must_use]
    pub fn course_records(&self, catalog: &Catalog) -> Vec<CourseRecord> {
        let credits = catalog.credits();
        let culture = catalog.resolve_culture(&self.culture.key);

        let mut records = Vec::with_capacity(self.majors.len() + 3);
        records.extend(Language::ALL.iter().map(|language| {
            CourseRecord::new(
                CourseKind::Language,
                language.label(),
                credits.language,
                parse_score(self.language_score(*language)),
            )
        }));
        records.extend(self.majors.iter().map(|course| course.to_record(credits.major)));
        records.push(CourseRecord::new(
            CourseKind::Culture,
            culture.label.clone(),
            culture.credit,
            parse_score(&self.culture.score),
        ));
        records
    }
}
