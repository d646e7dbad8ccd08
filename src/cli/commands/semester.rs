//! Semester command handler

use super::Session;
use crate::args::SemesterSubcommand;
use gradecalc::config::Config;
use gradecalc::core::models::TranscriptOp;
use gradecalc::info;

/// Dispatch semester subcommands
pub fn run(subcommand: &SemesterSubcommand, config: &Config) -> Result<(), String> {
    let mut session = Session::open(config)?;

    match subcommand {
        SemesterSubcommand::List => {
            list(&session);
            return Ok(());
        }
        SemesterSubcommand::Add => {
            session.apply(&TranscriptOp::AddSemester);
            session.commit()?;
            let count = session.transcript().semesters().len();
            info!("Semester {count} added");
            println!("✓ Added semester {count} (now active)");
        }
        SemesterSubcommand::Select { number } => {
            let id = session.semester_id(Some(*number))?;
            session.apply(&TranscriptOp::SelectSemester(id));
            session.commit()?;
            println!("✓ Semester {number} is now active");
        }
    }
    Ok(())
}

fn list(session: &Session) {
    let transcript = session.transcript();
    let active = transcript.active_index();

    if transcript.semesters().is_empty() {
        println!("No semesters yet. Run `gradecalc semester add`.");
        return;
    }

    println!("\n=== Semesters ===\n");
    for (index, semester) in transcript.semesters().iter().enumerate() {
        let marker = if Some(index) == active { "*" } else { " " };
        let culture = session.catalog().resolve_culture(&semester.culture.key);
        println!(
            "{marker} {:>2}. {} major course(s), culture: {}",
            index + 1,
            semester.majors.len(),
            culture.label
        );
    }
}
