//! Derived view of a transcript: per-record grades, per-semester and
//! cumulative aggregates, and the cumulative GPA.
//!
//! Everything here is recomputed from a single [`Transcript`] snapshot on
//! each call; nothing is cached.

use serde::Serialize;

use crate::core::aggregate::{aggregate, Aggregate, CourseRecord};
use crate::core::catalog::Catalog;
use crate::core::gpa::CumulativeGpa;
use crate::core::grading::{evaluate, is_out_of_range, to_secondary_grade, Evaluation};
use crate::core::models::{SemesterId, Transcript};

/// A course record with its per-record display figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordView {
    /// The underlying record
    pub record: CourseRecord,
    /// Secondary grade, `None` unless the score is valid
    pub secondary_grade: Option<f64>,
    /// Evaluation band, `None` unless the score is valid
    pub evaluation: Option<Evaluation>,
    /// A score was parsed but lies outside `[0, 100]`
    pub invalid: bool,
}

impl RecordView {
    /// Compute display figures for one record
    #[must_use]
    pub fn new(record: CourseRecord) -> Self {
        Self {
            secondary_grade: to_secondary_grade(record.score),
            evaluation: evaluate(record.score),
            invalid: is_out_of_range(record.score),
            record,
        }
    }

    /// Evaluation label, or an empty string when there is none
    #[must_use]
    pub fn evaluation_label(&self) -> &'static str {
        self.evaluation.map_or("", Evaluation::label)
    }
}

/// Figures for one semester
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterSummary {
    /// Semester id
    pub id: SemesterId,
    /// 1-based position in the transcript
    pub number: usize,
    /// Whether this is the active semester
    pub active: bool,
    /// Records in expansion order
    pub records: Vec<RecordView>,
    /// Aggregate over this semester's records
    pub aggregate: Aggregate,
}

impl SemesterSummary {
    /// Records flagged as out of range
    pub fn invalid_records(&self) -> impl Iterator<Item = &RecordView> {
        self.records.iter().filter(|view| view.invalid)
    }
}

/// Complete derived output for a transcript snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptSummary {
    /// Per-semester figures in chronological order
    pub semesters: Vec<SemesterSummary>,
    /// Aggregate over every record of every semester
    pub cumulative: Aggregate,
    /// Cumulative weighted score rescaled to GPA scales
    pub gpa: CumulativeGpa,
}

impl TranscriptSummary {
    /// Derive the summary from a transcript snapshot
    #[must_use]
    pub fn derive(transcript: &Transcript, catalog: &Catalog) -> Self {
        let active = transcript.active_index();

        let semesters: Vec<SemesterSummary> = transcript
            .semesters()
            .iter()
            .enumerate()
            .map(|(index, semester)| {
                let records = semester.course_records(catalog);
                SemesterSummary {
                    id: semester.id,
                    number: index + 1,
                    active: active == Some(index),
                    aggregate: aggregate(&records),
                    records: records.into_iter().map(RecordView::new).collect(),
                }
            })
            .collect();

        let cumulative = aggregate(
            semesters
                .iter()
                .flat_map(|s| s.records.iter().map(|view| &view.record)),
        );

        Self {
            gpa: CumulativeGpa::from_average(cumulative.weighted_score),
            semesters,
            cumulative,
        }
    }

    /// Total number of records across all semesters
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.semesters.iter().map(|s| s.records.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Language, TranscriptOp};

    const EPS: f64 = 1e-9;

    fn scored_transcript() -> Transcript {
        let t = Transcript::new();
        let first = t.semesters()[0].id;
        let course = t.semesters()[0].majors[0].id;
        let t = t.apply_all(&[
            TranscriptOp::SetLanguageScore {
                semester: first,
                language: Language::English,
                raw: "90".to_string(),
            },
            TranscriptOp::SetMajorScore {
                semester: first,
                course,
                raw: "70".to_string(),
            },
            TranscriptOp::AddSemester,
        ]);
        let second = t.semesters()[1].id;
        t.apply_all(&[
            TranscriptOp::SetLanguageScore {
                semester: second,
                language: Language::German,
                raw: "150".to_string(),
            },
            TranscriptOp::SelectCulture {
                semester: second,
                key: "european-history".to_string(),
            },
            TranscriptOp::SetCultureScore {
                semester: second,
                raw: "80".to_string(),
            },
        ])
    }

    #[test]
    fn test_semester_aggregates() {
        let summary = TranscriptSummary::derive(&scored_transcript(), &Catalog::standard());
        assert_eq!(summary.semesters.len(), 2);

        let first = &summary.semesters[0];
        assert_eq!(first.number, 1);
        assert!(!first.active);
        assert_eq!(first.aggregate.count, 2);
        let expected = (90.0 * 2.5 + 70.0 * 5.0) / 7.5;
        assert!((first.aggregate.weighted_score.unwrap() - expected).abs() < EPS);

        let second = &summary.semesters[1];
        assert!(second.active);
        assert_eq!(second.aggregate.count, 1);
        assert!((second.aggregate.total_credits - 3.0).abs() < EPS);
    }

    #[test]
    fn test_cumulative_and_gpa() {
        let summary = TranscriptSummary::derive(&scored_transcript(), &Catalog::standard());
        let expected = (90.0 * 2.5 + 70.0 * 5.0 + 80.0 * 3.0) / 10.5;

        assert_eq!(summary.cumulative.count, 3);
        assert!((summary.cumulative.total_credits - 10.5).abs() < EPS);
        assert!((summary.cumulative.weighted_score.unwrap() - expected).abs() < EPS);
        assert!((summary.gpa.on_scale_4.unwrap() - expected / 100.0 * 4.0).abs() < EPS);
        assert!((summary.gpa.on_scale_5.unwrap() - expected / 100.0 * 5.0).abs() < EPS);
    }

    #[test]
    fn test_invalid_marker() {
        let summary = TranscriptSummary::derive(&scored_transcript(), &Catalog::standard());
        let invalid: Vec<&RecordView> = summary.semesters[1].invalid_records().collect();
        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].record.name, "German");
        assert!(invalid[0].secondary_grade.is_none());
        assert!(invalid[0].evaluation.is_none());
        assert_eq!(invalid[0].evaluation_label(), "");
    }

    #[test]
    fn test_record_views() {
        let summary = TranscriptSummary::derive(&scored_transcript(), &Catalog::standard());
        let english = &summary.semesters[0].records[0];
        assert_eq!(english.evaluation, Some(Evaluation::Good));
        assert!((english.secondary_grade.unwrap() - 1.75).abs() < EPS);
        assert!(!english.invalid);
        assert_eq!(summary.record_count(), 8);
    }

    #[test]
    fn test_blank_transcript() {
        let summary = TranscriptSummary::derive(&Transcript::new(), &Catalog::standard());
        assert_eq!(summary.cumulative, Aggregate::EMPTY);
        assert_eq!(summary.gpa, CumulativeGpa::default());
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let t = scored_transcript();
        let catalog = Catalog::standard();
        assert_eq!(
            TranscriptSummary::derive(&t, &catalog),
            TranscriptSummary::derive(&t, &catalog)
        );
    }
}
