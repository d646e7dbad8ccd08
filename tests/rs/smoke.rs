//! Integration smoke tests for `gradecalc`

use gradecalc::core::catalog::Catalog;
use gradecalc::core::models::Transcript;
use gradecalc::core::summary::TranscriptSummary;
use gradecalc::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn fresh_transcript_has_no_figures() {
    let summary = TranscriptSummary::derive(&Transcript::new(), &Catalog::standard());
    assert_eq!(summary.semesters.len(), 1);
    assert!(summary.cumulative.weighted_score.is_none());
    assert!(summary.gpa.on_scale_4.is_none());
}
