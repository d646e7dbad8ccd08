//! Rescaling of percentage averages onto GPA scales

use serde::Serialize;

use crate::core::grading::score::{MAX_SCORE, MIN_SCORE};

/// Four-point GPA scale
pub const SCALE_4: f64 = 4.0;

/// Five-point GPA scale
pub const SCALE_5: f64 = 5.0;

/// Map a 0–100 average linearly onto `[0, target_scale]`.
///
/// The average is clamped to `[0, 100]` first. Absent or non-finite averages
/// yield `None`. This is a pure scale transform; it does not pass through the
/// secondary grade or evaluation bands.
///
/// # Examples
/// ```
/// use gradecalc::core::gpa::rescale;
///
/// assert_eq!(rescale(Some(100.0), 4.0), Some(4.0));
/// assert_eq!(rescale(Some(120.0), 5.0), Some(5.0));
/// assert_eq!(rescale(None, 4.0), None);
/// ```
#[must_use]
pub fn rescale(average: Option<f64>, target_scale: f64) -> Option<f64> {
    let average = average.filter(|a| a.is_finite())?;
    Some(average.clamp(MIN_SCORE, MAX_SCORE) / MAX_SCORE * target_scale)
}

/// Cumulative GPA expressed on the two alternate scales
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CumulativeGpa {
    /// GPA on a 0–4 scale
    pub on_scale_4: Option<f64>,
    /// GPA on a 0–5 scale
    pub on_scale_5: Option<f64>,
}

impl CumulativeGpa {
    /// Rescale a cumulative weighted percentage average
    #[must_use]
    pub fn from_average(average: Option<f64>) -> Self {
        Self {
            on_scale_4: rescale(average, SCALE_4),
            on_scale_5: rescale(average, SCALE_5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_rescale_examples() {
        assert!((rescale(Some(80.0), 4.0).unwrap() - 3.2).abs() < EPS);
        assert!((rescale(Some(100.0), 4.0).unwrap() - 4.0).abs() < EPS);
        assert!((rescale(Some(0.0), 5.0).unwrap()).abs() < EPS);
    }

    #[test]
    fn test_rescale_clamps() {
        assert!((rescale(Some(120.0), 5.0).unwrap() - 5.0).abs() < EPS);
        assert!(rescale(Some(-10.0), 4.0).unwrap().abs() < EPS);
    }

    #[test]
    fn test_rescale_absent_or_non_finite() {
        assert_eq!(rescale(None, 4.0), None);
        assert_eq!(rescale(Some(f64::NAN), 4.0), None);
        assert_eq!(rescale(Some(f64::INFINITY), 5.0), None);
    }

    #[test]
    fn test_cumulative_gpa() {
        let gpa = CumulativeGpa::from_average(Some(75.0));
        assert!((gpa.on_scale_4.unwrap() - 3.0).abs() < EPS);
        assert!((gpa.on_scale_5.unwrap() - 3.75).abs() < EPS);

        let none = CumulativeGpa::from_average(None);
        assert_eq!(none, CumulativeGpa::default());
    }
}
