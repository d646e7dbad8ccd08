//! Major course command handler
//!
//! Courses are addressed by their 1-based position within the semester, as
//! printed by `summary`.

use super::Session;
use crate::args::MajorSubcommand;
use gradecalc::config::Config;
use gradecalc::core::grading::{is_out_of_range, parse_score};
use gradecalc::core::models::{CourseId, SemesterId, TranscriptOp};
use gradecalc::warn;

/// Dispatch major subcommands
pub fn run(
    subcommand: &MajorSubcommand,
    semester: Option<usize>,
    config: &Config,
) -> Result<(), String> {
    let mut session = Session::open(config)?;
    let semester_id = session.semester_id(semester)?;

    match subcommand {
        MajorSubcommand::Add => {
            session.apply(&TranscriptOp::AddMajorCourse {
                semester: semester_id,
            });
            session.commit()?;
            let count = session.semester(semester_id)?.majors.len();
            println!("✓ Added major course {count}");
        }
        MajorSubcommand::Remove {
            number,
            allow_empty,
        } => {
            let course = course_id(&session, semester_id, *number)?;
            if !allow_empty && session.semester(semester_id)?.majors.len() == 1 {
                return Err(
                    "✗ Refusing to remove the only major course (pass --allow-empty to force)"
                        .to_string(),
                );
            }
            session.apply(&TranscriptOp::RemoveMajorCourse {
                semester: semester_id,
                course,
            });
            session.commit()?;
            println!("✓ Removed major course {number}");
        }
        MajorSubcommand::Rename { number, name } => {
            let course = course_id(&session, semester_id, *number)?;
            session.apply(&TranscriptOp::RenameMajorCourse {
                semester: semester_id,
                course,
                name: name.clone(),
            });
            session.commit()?;
            println!("✓ Renamed major course {number} to '{name}'");
        }
        MajorSubcommand::Score { number, raw } => {
            let course = course_id(&session, semester_id, *number)?;
            session.apply(&TranscriptOp::SetMajorScore {
                semester: semester_id,
                course,
                raw: raw.clone(),
            });
            session.commit()?;
            report_score(&format!("major course {number}"), raw);
        }
    }
    Ok(())
}

/// Map a 1-based course position to its id
fn course_id(session: &Session, semester: SemesterId, number: usize) -> Result<CourseId, String> {
    let majors = &session.semester(semester)?.majors;
    number
        .checked_sub(1)
        .and_then(|index| majors.get(index))
        .map(|course| course.id)
        .ok_or_else(|| {
            format!(
                "✗ No major course {number} (semester has {})",
                majors.len()
            )
        })
}

/// Confirm a score edit, flagging input that will not be counted
pub fn report_score(target: &str, raw: &str) {
    let score = parse_score(raw);
    if raw.trim().is_empty() {
        println!("✓ Cleared score of {target}");
    } else if score.is_none() {
        warn!("Score '{raw}' for {target} is not a number");
        println!("✓ Saved '{raw}' for {target} (not a number, excluded from averages)");
    } else if is_out_of_range(score) {
        warn!("Score '{raw}' for {target} is outside 0-100");
        println!("✓ Saved '{raw}' for {target} (out of range, excluded from averages)");
    } else {
        println!("✓ Set score of {target} to {raw}");
    }
}
