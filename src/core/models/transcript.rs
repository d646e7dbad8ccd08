//! Transcript model and its update operations
//!
//! A [`Transcript`] is an immutable snapshot. Every operation takes `&self`
//! and returns the next snapshot; the previous one stays valid and unchanged,
//! so a derivation always reads one consistent state.

use serde::{Deserialize, Serialize};

use super::course::{CourseId, MajorCourse};
use super::semester::{Language, Semester, SemesterId};
use crate::core::aggregate::CourseRecord;
use crate::core::catalog::Catalog;
use crate::debug;

/// An edit to the transcript, as issued by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptOp {
    /// Append an empty semester and make it active
    AddSemester,
    /// Make another semester active
    SelectSemester(SemesterId),
    /// Append a blank major course to a semester
    AddMajorCourse {
        /// Target semester
        semester: SemesterId,
    },
    /// Remove a major course (may leave the semester with none)
    RemoveMajorCourse {
        /// Target semester
        semester: SemesterId,
        /// Course to remove
        course: CourseId,
    },
    /// Replace a major course's name
    RenameMajorCourse {
        /// Target semester
        semester: SemesterId,
        /// Course to rename
        course: CourseId,
        /// New name
        name: String,
    },
    /// Replace a major course's raw score
    SetMajorScore {
        /// Target semester
        semester: SemesterId,
        /// Course to update
        course: CourseId,
        /// Raw score input
        raw: String,
    },
    /// Replace a language course's raw score
    SetLanguageScore {
        /// Target semester
        semester: SemesterId,
        /// Which language course
        language: Language,
        /// Raw score input
        raw: String,
    },
    /// Select a culture course by catalog key
    SelectCulture {
        /// Target semester
        semester: SemesterId,
        /// Catalog key (unknown keys resolve to the first entry)
        key: String,
    },
    /// Replace the culture course's raw score
    SetCultureScore {
        /// Target semester
        semester: SemesterId,
        /// Raw score input
        raw: String,
    },
}

/// Ordered collection of semesters plus the active-semester pointer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// Next identifier to hand out (shared by semesters and courses)
    next_id: u64,

    /// Semester being edited or displayed; a view concern only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    active: Option<SemesterId>,

    /// Semesters in chronological order
    #[serde(default)]
    semesters: Vec<Semester>,
}

impl Transcript {
    /// Create a transcript with a single empty semester
    #[must_use]
    pub fn new() -> Self {
        Self::empty().add_semester()
    }

    /// Create a transcript without any semesters
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            next_id: 1,
            active: None,
            semesters: Vec::new(),
        }
    }

    /// Semesters in chronological order
    #[must_use]
    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    /// Look up a semester by id
    #[must_use]
    pub fn semester(&self, id: SemesterId) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.id == id)
    }

    /// Index of the active semester.
    ///
    /// Falls back to the first semester when the stored pointer is unset or
    /// refers to a semester that no longer exists. `None` only when the
    /// transcript has no semesters.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        if self.semesters.is_empty() {
            return None;
        }
        let index = self
            .active
            .and_then(|id| self.semesters.iter().position(|s| s.id == id))
            .unwrap_or(0);
        Some(index)
    }

    /// The active semester, if any
    #[must_use]
    pub fn active_semester(&self) -> Option<&Semester> {
        self.active_index().map(|index| &self.semesters[index])
    }

    /// Apply one operation, producing the next snapshot
    #[must_use]
    pub fn apply(&self, op: &TranscriptOp) -> Self {
        match op {
            TranscriptOp::AddSemester => self.add_semester(),
            TranscriptOp::SelectSemester(id) => self.select_semester(*id),
            TranscriptOp::AddMajorCourse { semester } => self.add_major_course(*semester),
            TranscriptOp::RemoveMajorCourse { semester, course } => {
                self.update_semester(*semester, |s| s.with_major_removed(*course))
            }
            TranscriptOp::RenameMajorCourse {
                semester,
                course,
                name,
            } => self.update_major(*semester, *course, |c| c.with_name(name)),
            TranscriptOp::SetMajorScore {
                semester,
                course,
                raw,
            } => self.update_major(*semester, *course, |c| c.with_score(raw)),
            TranscriptOp::SetLanguageScore {
                semester,
                language,
                raw,
            } => self.update_semester(*semester, |s| s.with_language_score(*language, raw)),
            TranscriptOp::SelectCulture { semester, key } => {
                self.update_semester(*semester, |s| s.with_culture_key(key))
            }
            TranscriptOp::SetCultureScore { semester, raw } => {
                self.update_semester(*semester, |s| s.with_culture_score(raw))
            }
        }
    }

    /// Apply operations in order
    #[must_use]
    pub fn apply_all<'a, I>(&self, ops: I) -> Self
    where
        I: IntoIterator<Item = &'a TranscriptOp>,
    {
        ops.into_iter()
            .fold(self.clone(), |transcript, op| transcript.apply(op))
    }

    /// Append an empty semester and make it active
    #[must_use]
    pub fn add_semester(&self) -> Self {
        let semester_id = SemesterId(self.next_id);
        let course_id = CourseId(self.next_id + 1);

        let mut semesters = self.semesters.clone();
        semesters.push(Semester::new(semester_id, course_id));
        Self {
            next_id: self.next_id + 2,
            active: Some(semester_id),
            semesters,
        }
    }

    /// Point the active marker at `id`; unknown ids leave the transcript unchanged
    #[must_use]
    pub fn select_semester(&self, id: SemesterId) -> Self {
        if self.semester(id).is_none() {
            debug!("Ignoring selection of unknown semester {id}");
            return self.clone();
        }
        Self {
            active: Some(id),
            ..self.clone()
        }
    }

    /// Append a blank major course to `semester`
    #[must_use]
    pub fn add_major_course(&self, semester: SemesterId) -> Self {
        if self.semester(semester).is_none() {
            debug!("Ignoring new major course for unknown semester {semester}");
            return self.clone();
        }
        let course_id = CourseId(self.next_id);
        Self {
            next_id: self.next_id + 1,
            ..self.update_semester(semester, |s| s.with_major_added(course_id))
        }
    }

    /// Replace one semester with `update(semester)`; unknown ids are a no-op
    fn update_semester<F>(&self, id: SemesterId, update: F) -> Self
    where
        F: FnOnce(&Semester) -> Semester,
    {
        let Some(index) = self.semesters.iter().position(|s| s.id == id) else {
            debug!("Ignoring update for unknown semester {id}");
            return self.clone();
        };
        let mut semesters = self.semesters.clone();
        semesters[index] = update(&self.semesters[index]);
        Self {
            semesters,
            ..self.clone()
        }
    }

    /// Replace one major course; unknown semester or course ids are a no-op
    fn update_major<F>(&self, semester: SemesterId, course: CourseId, update: F) -> Self
    where
        F: Fn(&MajorCourse) -> MajorCourse,
    {
        self.update_semester(semester, |s| {
            if s.major(course).is_none() {
                debug!("Ignoring update for unknown course {course} in semester {semester}");
            }
            s.with_major_updated(course, update)
        })
    }

    /// Course records of every semester, concatenated in chronological order
    #[must_use]
    pub fn course_records(&self, catalog: &Catalog) -> Vec<CourseRecord> {
        self.semesters
            .iter()
            .flat_map(|s| s.course_records(catalog))
            .collect()
    }

    /// Restore id-allocation invariants after loading from an external source.
    ///
    /// Ensures `next_id` is above every id in use, so hand-edited files cannot
    /// cause new semesters or courses to reuse an existing id.
    #[must_use]
    pub fn reconciled(self) -> Self {
        let highest = self
            .semesters
            .iter()
            .flat_map(|s| std::iter::once(s.id.0).chain(s.majors.iter().map(|c| c.id.0)))
            .max()
            .unwrap_or(0);
        Self {
            next_id: self.next_id.max(highest + 1),
            ..self
        }
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_id(t: &Transcript) -> SemesterId {
        t.semesters()[0].id
    }

    #[test]
    fn test_new_transcript() {
        let t = Transcript::new();
        assert_eq!(t.semesters().len(), 1);
        assert_eq!(t.active_index(), Some(0));
        assert_eq!(t.semesters()[0].majors.len(), 1);
    }

    #[test]
    fn test_empty_transcript_has_no_active() {
        let t = Transcript::empty();
        assert_eq!(t.active_index(), None);
        assert!(t.active_semester().is_none());
        assert!(t.course_records(&Catalog::standard()).is_empty());
    }

    #[test]
    fn test_add_semester_appends_and_activates() {
        let t = Transcript::new();
        let next = t.apply(&TranscriptOp::AddSemester);

        assert_eq!(t.semesters().len(), 1);
        assert_eq!(next.semesters().len(), 2);
        assert_eq!(next.active_index(), Some(1));
        assert_eq!(next.semesters()[0], t.semesters()[0]);
    }

    #[test]
    fn test_ids_are_unique() {
        let t = Transcript::new()
            .add_semester()
            .add_semester();
        let t = t.add_major_course(first_id(&t));

        let mut ids: Vec<u64> = t
            .semesters()
            .iter()
            .flat_map(|s| std::iter::once(s.id.0).chain(s.majors.iter().map(|c| c.id.0)))
            .collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_add_major_grows_one_semester_only() {
        let catalog = Catalog::standard();
        let t = Transcript::new().add_semester();
        let target = first_id(&t);
        let next = t.apply(&TranscriptOp::AddMajorCourse { semester: target });

        let before = t.semesters()[0].course_records(&catalog).len();
        let after = next.semesters()[0].course_records(&catalog).len();
        assert_eq!(after, before + 1);
        assert_eq!(next.semesters()[1], t.semesters()[1]);
    }

    #[test]
    fn test_select_semester() {
        let t = Transcript::new().add_semester();
        let first = first_id(&t);

        let selected = t.apply(&TranscriptOp::SelectSemester(first));
        assert_eq!(selected.active_index(), Some(0));

        let unknown = t.apply(&TranscriptOp::SelectSemester(SemesterId(999)));
        assert_eq!(unknown, t);
    }

    #[test]
    fn test_dangling_active_pointer_falls_back_to_first() {
        let mut t = Transcript::new().add_semester();
        t.active = Some(SemesterId(12345));
        assert_eq!(t.active_index(), Some(0));
    }

    #[test]
    fn test_unknown_targets_are_ignored() {
        let t = Transcript::new();
        let semester = first_id(&t);
        let ops = [
            TranscriptOp::AddMajorCourse {
                semester: SemesterId(77),
            },
            TranscriptOp::SetLanguageScore {
                semester: SemesterId(77),
                language: Language::English,
                raw: "90".to_string(),
            },
            TranscriptOp::SetMajorScore {
                semester,
                course: CourseId(404),
                raw: "90".to_string(),
            },
        ];
        assert_eq!(t.apply_all(&ops), t);
    }

    #[test]
    fn test_operations_do_not_touch_previous_snapshot() {
        let t = Transcript::new();
        let semester = first_id(&t);
        let course = t.semesters()[0].majors[0].id;

        let next = t.apply_all(&[
            TranscriptOp::SetLanguageScore {
                semester,
                language: Language::German,
                raw: "81".to_string(),
            },
            TranscriptOp::RenameMajorCourse {
                semester,
                course,
                name: "Fluid Mechanics".to_string(),
            },
            TranscriptOp::SetMajorScore {
                semester,
                course,
                raw: "73".to_string(),
            },
            TranscriptOp::SelectCulture {
                semester,
                key: "academic-writing".to_string(),
            },
            TranscriptOp::SetCultureScore {
                semester,
                raw: "95".to_string(),
            },
        ]);

        assert_eq!(t, Transcript::new());
        let s = &next.semesters()[0];
        assert_eq!(s.german, "81");
        assert_eq!(s.majors[0].name, "Fluid Mechanics");
        assert_eq!(s.majors[0].score, "73");
        assert_eq!(s.culture.key, "academic-writing");
        assert_eq!(s.culture.score, "95");
    }

    #[test]
    fn test_remove_major_course() {
        let t = Transcript::new();
        let semester = first_id(&t);
        let course = t.semesters()[0].majors[0].id;

        let next = t.apply(&TranscriptOp::RemoveMajorCourse { semester, course });
        assert!(next.semesters()[0].majors.is_empty());
    }

    #[test]
    fn test_cumulative_records_concatenate_in_order() {
        let catalog = Catalog::standard();
        let t = Transcript::new().add_semester();
        let t = t.add_major_course(t.semesters()[1].id);

        let all = t.course_records(&catalog);
        let first = t.semesters()[0].course_records(&catalog);
        let second = t.semesters()[1].course_records(&catalog);
        assert_eq!(all.len(), first.len() + second.len());
        assert_eq!(&all[..first.len()], first.as_slice());
        assert_eq!(&all[first.len()..], second.as_slice());
    }

    #[test]
    fn test_reconciled_bumps_next_id() {
        let mut t = Transcript::new();
        t.next_id = 1;
        let t = t.reconciled();
        let t = t.add_semester();
        assert_ne!(t.semesters()[0].id, t.semesters()[1].id);
    }
}
