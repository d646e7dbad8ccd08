//! Integration tests for transcript editing and derived figures.

use gradecalc::core::catalog::Catalog;
use gradecalc::core::grading::{evaluate, to_secondary_grade, Evaluation};
use gradecalc::core::models::{Language, Transcript, TranscriptOp};
use gradecalc::core::summary::TranscriptSummary;

const EPS: f64 = 1e-9;

fn approx(actual: Option<f64>, expected: f64) -> bool {
    actual.is_some_and(|v| (v - expected).abs() < EPS)
}

/// Two semesters: the first fully scored, the second only partly.
fn two_semesters() -> Transcript {
    let t = Transcript::new();
    let first = t.semesters()[0].id;
    let first_course = t.semesters()[0].majors[0].id;

    let t = t.apply_all(&[
        TranscriptOp::SetLanguageScore {
            semester: first,
            language: Language::English,
            raw: "90".to_string(),
        },
        TranscriptOp::SetLanguageScore {
            semester: first,
            language: Language::German,
            raw: "85".to_string(),
        },
        TranscriptOp::RenameMajorCourse {
            semester: first,
            course: first_course,
            name: "Thermodynamics".to_string(),
        },
        TranscriptOp::SetMajorScore {
            semester: first,
            course: first_course,
            raw: "70".to_string(),
        },
        TranscriptOp::SelectCulture {
            semester: first,
            key: "academic-writing".to_string(),
        },
        TranscriptOp::SetCultureScore {
            semester: first,
            raw: "100".to_string(),
        },
        TranscriptOp::AddSemester,
    ]);

    let second = t.semesters()[1].id;
    let second_course = t.semesters()[1].majors[0].id;
    t.apply(&TranscriptOp::SetMajorScore {
        semester: second,
        course: second_course,
        raw: "60".to_string(),
    })
}

#[test]
fn secondary_grade_endpoints_and_floor() {
    assert!(approx(to_secondary_grade(Some(100.0)), 1.0));
    assert!(approx(to_secondary_grade(Some(60.0)), 4.0));
    assert_eq!(to_secondary_grade(Some(59.999)), Some(5.0));
    assert_eq!(to_secondary_grade(Some(0.0)), Some(5.0));
    assert_eq!(to_secondary_grade(Some(-5.0)), None);
    assert_eq!(to_secondary_grade(Some(105.0)), None);
    assert_eq!(to_secondary_grade(None), None);
}

#[test]
fn evaluation_boundaries() {
    assert_eq!(evaluate(Some(93.0)), Some(Evaluation::VeryGood));
    assert_eq!(evaluate(Some(92.999)), Some(Evaluation::Good));
    assert_eq!(evaluate(Some(67.0)), Some(Evaluation::Satisfactory));
    assert_eq!(evaluate(Some(59.999)), Some(Evaluation::Insufficient));
    assert_eq!(evaluate(Some(100.5)), None);
}

#[test]
fn per_semester_and_cumulative_figures() {
    let summary = TranscriptSummary::derive(&two_semesters(), &Catalog::standard());
    assert_eq!(summary.semesters.len(), 2);

    // 90×2.5 + 85×2.5 + 70×5 + 100×1 over 11 credits
    let first = &summary.semesters[0].aggregate;
    assert!((first.total_credits - 11.0).abs() < EPS);
    assert_eq!(first.count, 4);
    assert!(approx(first.weighted_score, 887.5 / 11.0));

    let second = &summary.semesters[1].aggregate;
    assert!((second.total_credits - 5.0).abs() < EPS);
    assert!(approx(second.weighted_score, 60.0));
    assert!(approx(second.weighted_secondary, 4.0));

    let cumulative = &summary.cumulative;
    assert!((cumulative.total_credits - 16.0).abs() < EPS);
    assert_eq!(cumulative.count, 5);
    let average = 1187.5 / 16.0;
    assert!(approx(cumulative.weighted_score, average));
    assert!(approx(summary.gpa.on_scale_4, average / 100.0 * 4.0));
    assert!(approx(summary.gpa.on_scale_5, average / 100.0 * 5.0));
}

#[test]
fn second_semester_is_active_after_add() {
    let t = two_semesters();
    assert_eq!(t.active_index(), Some(1));

    let summary = TranscriptSummary::derive(&t, &Catalog::standard());
    assert!(!summary.semesters[0].active);
    assert!(summary.semesters[1].active);
}

#[test]
fn adding_major_grows_one_semester_only() {
    let catalog = Catalog::standard();
    let before = two_semesters();
    let target = before.semesters()[0].id;

    let after = before.apply(&TranscriptOp::AddMajorCourse { semester: target });

    assert_eq!(
        after.semesters()[0].course_records(&catalog).len(),
        before.semesters()[0].course_records(&catalog).len() + 1
    );
    assert_eq!(after.semesters()[1], before.semesters()[1]);
}

#[test]
fn invalid_rows_do_not_block_valid_ones() {
    let t = Transcript::new();
    let semester = t.semesters()[0].id;
    let t = t.apply_all(&[
        TranscriptOp::SetLanguageScore {
            semester,
            language: Language::English,
            raw: "abc".to_string(),
        },
        TranscriptOp::SetLanguageScore {
            semester,
            language: Language::German,
            raw: "140".to_string(),
        },
        TranscriptOp::SetCultureScore {
            semester,
            raw: "80".to_string(),
        },
    ]);

    let summary = TranscriptSummary::derive(&t, &Catalog::standard());
    let semester = &summary.semesters[0];
    assert_eq!(semester.aggregate.count, 1);
    assert!(approx(semester.aggregate.weighted_score, 80.0));
    assert_eq!(semester.invalid_records().count(), 1);
}

#[test]
fn unknown_culture_key_uses_first_entry() {
    let catalog = Catalog::standard();
    let t = Transcript::new();
    let semester = t.semesters()[0].id;
    let t = t.apply(&TranscriptOp::SelectCulture {
        semester,
        key: "no-such-course".to_string(),
    });

    let records = t.semesters()[0].course_records(&catalog);
    let culture = records.last().unwrap();
    assert_eq!(culture.name, catalog.default_culture().label);
    assert!((culture.credit - catalog.default_culture().credit).abs() < EPS);
}

#[test]
fn removing_every_major_is_allowed() {
    let t = Transcript::new();
    let semester = t.semesters()[0].id;
    let course = t.semesters()[0].majors[0].id;
    let t = t.apply(&TranscriptOp::RemoveMajorCourse { semester, course });

    assert!(t.semesters()[0].majors.is_empty());
    assert_eq!(t.semesters()[0].course_records(&Catalog::standard()).len(), 3);
}

#[test]
fn operations_leave_previous_snapshot_untouched() {
    let before = two_semesters();
    let copy = before.clone();
    let semester = before.semesters()[0].id;

    let _after = before.apply_all(&[
        TranscriptOp::AddMajorCourse { semester },
        TranscriptOp::SetCultureScore {
            semester,
            raw: "1".to_string(),
        },
        TranscriptOp::AddSemester,
    ]);

    assert_eq!(before, copy);
}

#[test]
fn derivation_is_deterministic() {
    let t = two_semesters();
    let catalog = Catalog::standard();
    assert_eq!(
        TranscriptSummary::derive(&t, &catalog),
        TranscriptSummary::derive(&t, &catalog)
    );
}
