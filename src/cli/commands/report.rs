//! Report command handler
//!
//! Renders the transcript summary as Markdown or HTML.

use super::Session;
use gradecalc::config::Config;
use gradecalc::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use gradecalc::core::summary::TranscriptSummary;
use gradecalc::info;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command.
///
/// # Arguments
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, html)
/// * `config` - Configuration with the transcript file and reports directory
pub fn run(output_file: Option<&Path>, format_str: &str, config: &Config) -> Result<(), String> {
    let format = ReportFormat::from_str(format_str)
        .map_err(|e| format!("✗ {e}. Use: markdown or html"))?;

    let session = Session::open(config)?;
    let summary = TranscriptSummary::derive(session.transcript(), session.catalog());
    let ctx = ReportContext::new(&summary, config.display.precision);

    let output_path = resolve_output_path(output_file, format, config)?;
    write_report(&ctx, format, &output_path)?;

    println!("✓ Report generated: {}", output_path.display());
    info!("Report exported to: {}", output_path.display());

    let gpa = ctx.figure(summary.gpa.on_scale_4);
    println!(
        "  {} semester(s), cumulative average {}, GPA {gpa}",
        summary.semesters.len(),
        ctx.figure(summary.cumulative.weighted_score)
    );
    Ok(())
}

/// Use the explicit path, or `transcript_report.<ext>` in the reports directory
fn resolve_output_path(
    output_file: Option<&Path>,
    format: ReportFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    if let Some(output) = output_file {
        return Ok(output.to_path_buf());
    }

    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;
    Ok(reports_dir.join(format!("transcript_report.{}", format.extension())))
}

/// Write the report to a file in the specified format
fn write_report(ctx: &ReportContext, format: ReportFormat, output_path: &Path) -> Result<(), String> {
    let reporter: Box<dyn ReportGenerator> = match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    };
    reporter
        .generate(ctx, output_path)
        .map_err(|e| format!("✗ Failed to generate {format} report: {e}"))
}
