//! Grading rules: score parsing, validation, secondary scale and evaluation bands

pub mod evaluation;
pub mod scale;
pub mod score;

pub use evaluation::{evaluate, Evaluation};
pub use scale::to_secondary_grade;
pub use score::{is_out_of_range, is_valid_credit, is_valid_score, parse_score, ScoreInput};
