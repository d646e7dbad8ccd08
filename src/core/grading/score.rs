//! Score parsing and validation
//!
//! Raw input is tolerated at every stage: anything that does not parse to a
//! finite number becomes `None`, and parsed values are never rounded or
//! clamped. Range checks live in [`is_valid_score`] so that an out-of-range
//! entry can still be shown back to the user as invalid.

/// Lowest valid percentage score (inclusive)
pub const MIN_SCORE: f64 = 0.0;

/// Highest valid percentage score (inclusive)
pub const MAX_SCORE: f64 = 100.0;

/// Something that can be read as a raw score entry.
///
/// Implemented for text (as typed into a form field), plain numbers and
/// optional values of either, so callers never have to pre-normalize input.
pub trait ScoreInput {
    /// Parse into a score, or `None` when the input is absent or not a finite number
    fn to_score(&self) -> Option<f64>;
}

impl ScoreInput for str {
    fn to_score(&self) -> Option<f64> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl ScoreInput for String {
    fn to_score(&self) -> Option<f64> {
        self.as_str().to_score()
    }
}

impl ScoreInput for f64 {
    fn to_score(&self) -> Option<f64> {
        Some(*self).filter(|v| v.is_finite())
    }
}

impl<T: ScoreInput + ?Sized> ScoreInput for &T {
    fn to_score(&self) -> Option<f64> {
        (**self).to_score()
    }
}

impl<T: ScoreInput> ScoreInput for Option<T> {
    fn to_score(&self) -> Option<f64> {
        self.as_ref().and_then(ScoreInput::to_score)
    }
}

/// Parse a raw score entry.
///
/// Empty or absent input yields `None` (nothing entered yet), as does any
/// input that is not a finite number. Negative values and values above 100
/// are returned unchanged.
#[must_use]
pub fn parse_score<T: ScoreInput + ?Sized>(raw: &T) -> Option<f64> {
    raw.to_score()
}

/// A score counts toward aggregation iff it is present and within `[0, 100]`.
#[must_use]
pub fn is_valid_score(score: Option<f64>) -> bool {
    score.is_some_and(|s| (MIN_SCORE..=MAX_SCORE).contains(&s))
}

/// A credit counts toward aggregation iff it is finite and strictly positive.
#[must_use]
pub fn is_valid_credit(credit: f64) -> bool {
    credit.is_finite() && credit > 0.0
}

/// A parsed score that falls outside the valid range.
///
/// This is the advisory "invalid" marker shown on an input field; absent or
/// unparseable input is not flagged.
#[must_use]
pub fn is_out_of_range(score: Option<f64>) -> bool {
    score.is_some() && !is_valid_score(score)
}
