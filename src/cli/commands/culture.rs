//! Culture course command handler

use super::major::report_score;
use super::Session;
use crate::args::CultureSubcommand;
use gradecalc::config::Config;
use gradecalc::core::models::TranscriptOp;
use gradecalc::warn;

/// Dispatch culture subcommands
pub fn run(
    subcommand: &CultureSubcommand,
    semester: Option<usize>,
    config: &Config,
) -> Result<(), String> {
    let mut session = Session::open(config)?;
    let semester_id = session.semester_id(semester)?;

    match subcommand {
        CultureSubcommand::Select { key } => {
            if session.catalog().find_culture(key).is_none() {
                let fallback = session.catalog().default_culture();
                warn!("Unknown culture course '{key}'");
                eprintln!(
                    "✗ '{key}' is not in the catalog; '{}' will be used",
                    fallback.label
                );
            }
            session.apply(&TranscriptOp::SelectCulture {
                semester: semester_id,
                key: key.clone(),
            });
            session.commit()?;
            let option = session.catalog().resolve_culture(key);
            println!(
                "✓ Culture course: {} ({:.1} credits)",
                option.label, option.credit
            );
        }
        CultureSubcommand::Score { raw } => {
            session.apply(&TranscriptOp::SetCultureScore {
                semester: semester_id,
                raw: raw.clone(),
            });
            session.commit()?;
            report_score("the culture course", raw);
        }
    }
    Ok(())
}
