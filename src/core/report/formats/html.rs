//! HTML report generator
//!
//! Generates a self-contained page with embedded CSS. Out-of-range entries
//! are highlighted so they can be corrected.

use crate::core::report::{ReportContext, ReportGenerator, MISSING};
use crate::core::summary::SemesterSummary;
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let sections: String = ctx
            .summary
            .semesters
            .iter()
            .map(|semester| Self::generate_semester_html(ctx, semester))
            .collect();

        ctx.fill_cumulative(HTML_TEMPLATE)
            .replace("{{semester_sections}}", &sections)
    }

    fn generate_semester_html(ctx: &ReportContext, semester: &SemesterSummary) -> String {
        let mut html = String::new();
        let _ = writeln!(
            html,
            "<h2>{}</h2>",
            escape_html(&ReportContext::semester_title(semester))
        );
        html.push_str("<table>\n<tr><th>Course</th><th>Type</th><th>Credits</th><th>Score</th><th>Secondary</th><th>Evaluation</th></tr>\n");

        for view in &semester.records {
            let record = &view.record;
            let name = if record.name.trim().is_empty() {
                "<em>unnamed</em>".to_string()
            } else {
                escape_html(&record.name)
            };
            let row_class = if view.invalid { " class=\"invalid\"" } else { "" };
            let score = record
                .score
                .map_or_else(|| MISSING.to_string(), |s| s.to_string());

            let _ = writeln!(
                html,
                "<tr{row_class}><td>{name}</td><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{score}</td><td class=\"num\">{}</td><td>{}</td></tr>",
                record.kind,
                ReportContext::credits(record.credit),
                ctx.figure(view.secondary_grade),
                view.evaluation.map_or(MISSING, |e| e.label()),
            );
        }

        let [score, secondary, credits, count] = ctx.aggregate_cells(&semester.aggregate);
        let _ = writeln!(
            html,
            "<tr><th colspan=\"2\">Semester average</th><td class=\"num\">{credits}</td><td class=\"num\">{score}</td><td class=\"num\">{secondary}</td><td>{count} countable</td></tr>\n</table>"
        );

        html
    }
}

/// Escape text for use inside HTML element content
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
