//! Percentage → secondary grade conversion
//!
//! The secondary scale runs from 1 (best) to 5 (worst). Passing scores
//! (`[PASS_SCORE, MAX_SCORE]`) map linearly onto `[BEST_GRADE, LOWEST_PASSING_GRADE]`;
//! anything below the pass mark is a flat `FAILING_GRADE` with no values in between.

use super::score::{is_valid_score, MAX_SCORE};

/// Lowest score that still earns a passing secondary grade (Nmin)
pub const PASS_SCORE: f64 = 60.0;

/// Best secondary grade
pub const BEST_GRADE: f64 = 1.0;

/// Worst passing secondary grade
pub const LOWEST_PASSING_GRADE: f64 = 4.0;

/// Secondary grade for every score below [`PASS_SCORE`]
pub const FAILING_GRADE: f64 = 5.0;

/// Convert a percentage score to the secondary 1–5 scale.
///
/// Returns `None` for absent or out-of-range scores.
///
/// # Examples
/// ```
/// use gradecalc::core::grading::to_secondary_grade;
///
/// assert_eq!(to_secondary_grade(Some(100.0)), Some(1.0));
/// assert_eq!(to_secondary_grade(Some(60.0)), Some(4.0));
/// assert_eq!(to_secondary_grade(Some(59.9)), Some(5.0));
/// assert_eq!(to_secondary_grade(Some(105.0)), None);
/// ```
#[must_use]
pub fn to_secondary_grade(score: Option<f64>) -> Option<f64> {
    if !is_valid_score(score) {
        return None;
    }
    let score = score?;
    if score < PASS_SCORE {
        return Some(FAILING_GRADE);
    }
    let span = LOWEST_PASSING_GRADE - BEST_GRADE;
    let grade = BEST_GRADE + span * ((MAX_SCORE - score) / (MAX_SCORE - PASS_SCORE));
    // Guards against float drift at the endpoints.
    Some(grade.clamp(BEST_GRADE, LOWEST_PASSING_GRADE))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_endpoints() {
        assert_eq!(to_secondary_grade(Some(100.0)), Some(1.0));
        assert_eq!(to_secondary_grade(Some(60.0)), Some(4.0));
    }

    #[test]
    fn test_linear_interior() {
        let grade = to_secondary_grade(Some(80.0)).unwrap();
        assert!((grade - 2.5).abs() < EPS);

        let grade = to_secondary_grade(Some(90.0)).unwrap();
        assert!((grade - 1.75).abs() < EPS);
    }

    #[test]
    fn test_below_pass_mark_saturates() {
        for score in [0.0, 12.5, 45.0, 59.0, 59.999] {
            assert_eq!(to_secondary_grade(Some(score)), Some(FAILING_GRADE));
        }
    }

    #[test]
    fn test_no_interpolation_across_pass_mark() {
        let at_mark = to_secondary_grade(Some(PASS_SCORE)).unwrap();
        let just_below = to_secondary_grade(Some(PASS_SCORE - 1e-6)).unwrap();
        assert!((at_mark - 4.0).abs() < EPS);
        assert!((just_below - 5.0).abs() < EPS);
    }

    #[test]
    fn test_range_and_monotonicity() {
        let mut previous = f64::INFINITY;
        let mut score = 60.0;
        while score <= 100.0 {
            let grade = to_secondary_grade(Some(score)).unwrap();
            assert!((1.0..=4.0).contains(&grade), "grade {grade} for {score}");
            assert!(grade <= previous, "not monotonic at {score}");
            previous = grade;
            score += 0.25;
        }
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(to_secondary_grade(None), None);
        assert_eq!(to_secondary_grade(Some(-5.0)), None);
        assert_eq!(to_secondary_grade(Some(105.0)), None);
    }
}
