//! Summary command handler
//!
//! Prints per-semester course tables followed by the cumulative figures.

use super::Session;
use gradecalc::config::Config;
use gradecalc::core::report::{ReportContext, MISSING};
use gradecalc::core::summary::{SemesterSummary, TranscriptSummary};
use gradecalc::verbose;

/// Print the derived summary of the configured transcript
pub fn run(config: &Config) -> Result<(), String> {
    let session = Session::open(config)?;
    let summary = TranscriptSummary::derive(session.transcript(), session.catalog());
    let ctx = ReportContext::new(&summary, config.display.precision);

    verbose!(
        "Deriving summary for {} record(s) in {} semester(s)",
        summary.record_count(),
        summary.semesters.len()
    );

    for semester in &summary.semesters {
        print_semester(&ctx, semester);
    }

    let [score, secondary, credits, count] = ctx.aggregate_cells(&summary.cumulative);
    println!("\n=== Cumulative ===\n");
    println!("  Weighted average:  {score}");
    println!("  Secondary grade:   {secondary}");
    println!("  Credits counted:   {credits} ({count} course(s))");
    println!("  GPA (4.0 scale):   {}", ctx.figure(summary.gpa.on_scale_4));
    println!("  GPA (5.0 scale):   {}", ctx.figure(summary.gpa.on_scale_5));
    Ok(())
}

fn print_semester(ctx: &ReportContext, semester: &SemesterSummary) {
    println!("\n=== {} ===\n", ReportContext::semester_title(semester));
    println!(
        "  {:<28} {:<9} {:>7} {:>12} {:>9}  Evaluation",
        "Course", "Type", "Credits", "Score", "Secondary"
    );

    for view in &semester.records {
        let record = &view.record;
        let name = if record.name.trim().is_empty() {
            "(unnamed)"
        } else {
            record.name.as_str()
        };
        let score = match record.score {
            Some(s) if view.invalid => format!("{s} (!)"),
            Some(s) => s.to_string(),
            None => MISSING.to_string(),
        };
        println!(
            "  {:<28} {:<9} {:>7} {:>12} {:>9}  {}",
            name,
            record.kind.to_string(),
            ReportContext::credits(record.credit),
            score,
            ctx.figure(view.secondary_grade),
            view.evaluation_label()
        );
    }

    let [score, secondary, credits, count] = ctx.aggregate_cells(&semester.aggregate);
    println!("\n  Average: {score}  Secondary: {secondary}  Credits: {credits}  Countable: {count}");

    let invalid = semester.invalid_records().count();
    if invalid > 0 {
        println!("  ✗ {invalid} score(s) outside 0-100 marked (!) are excluded");
    }
}
