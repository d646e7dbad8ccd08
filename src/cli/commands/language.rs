//! Language course command handler

use super::major::report_score;
use super::Session;
use crate::args::LanguageArg;
use gradecalc::config::Config;
use gradecalc::core::models::{Language, TranscriptOp};

/// Set the raw score of a language course
pub fn run(
    language: LanguageArg,
    raw: &str,
    semester: Option<usize>,
    config: &Config,
) -> Result<(), String> {
    let mut session = Session::open(config)?;
    let semester_id = session.semester_id(semester)?;
    let language = Language::from(language);

    session.apply(&TranscriptOp::SetLanguageScore {
        semester: semester_id,
        language,
        raw: raw.to_string(),
    });
    session.commit()?;
    report_score(language.label(), raw);
    Ok(())
}
