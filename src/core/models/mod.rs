//! Data models for `gradecalc`

pub mod course;
pub mod semester;
pub mod transcript;

pub use course::{CourseId, MajorCourse};
pub use semester::{CultureChoice, Language, Semester, SemesterId};
pub use transcript::{Transcript, TranscriptOp};
