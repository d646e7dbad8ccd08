//! Markdown report generator
//!
//! Produces plain GitHub-flavored tables: one cumulative table followed by a
//! section per semester.

use crate::core::report::{ReportContext, ReportGenerator, MISSING};
use crate::core::summary::SemesterSummary;
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let sections: Vec<String> = ctx
            .summary
            .semesters
            .iter()
            .map(|semester| Self::generate_semester_section(ctx, semester))
            .collect();

        ctx.fill_cumulative(MARKDOWN_TEMPLATE)
            .replace("{{semester_sections}}", sections.join("\n").trim_end())
    }

    /// Generate one semester's heading, course table and totals line
    fn generate_semester_section(ctx: &ReportContext, semester: &SemesterSummary) -> String {
        let mut section = String::new();
        let _ = writeln!(section, "## {}\n", ReportContext::semester_title(semester));

        section.push_str("| Course | Type | Credits | Score | Secondary | Evaluation |\n");
        section.push_str("|---|---|---|---|---|---|\n");

        for view in &semester.records {
            let record = &view.record;
            let name = if record.name.trim().is_empty() {
                "(unnamed)".to_string()
            } else {
                escape_cell(&record.name)
            };
            let score = match record.score {
                Some(s) if view.invalid => format!("⚠️ {s} (out of range)"),
                Some(s) => s.to_string(),
                None => MISSING.to_string(),
            };
            let evaluation = view.evaluation.map_or(MISSING, |e| e.label());

            let _ = writeln!(
                section,
                "| {name} | {} | {} | {score} | {} | {evaluation} |",
                record.kind,
                ReportContext::credits(record.credit),
                ctx.figure(view.secondary_grade),
            );
        }

        let [score, secondary, credits, count] = ctx.aggregate_cells(&semester.aggregate);
        let _ = writeln!(
            section,
            "\n**Semester average:** {score} · **Secondary:** {secondary} · **Credits:** {credits} · **Countable courses:** {count}"
        );

        section
    }
}

/// Keep user text from breaking the table layout
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
