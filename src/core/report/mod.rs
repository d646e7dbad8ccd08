//! Report generation for transcript summaries
//!
//! Renders a [`TranscriptSummary`] as Markdown or self-contained HTML. The
//! renderers only format figures that the summary already holds.

pub mod formats;

use crate::core::aggregate::Aggregate;
use crate::core::summary::{SemesterSummary, TranscriptSummary};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Placeholder printed for figures that cannot be computed
pub const MISSING: &str = "–";

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Derived transcript figures
    pub summary: &'a TranscriptSummary,
    /// Decimal places for averages, grades and GPA
    pub precision: usize,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(summary: &'a TranscriptSummary, precision: usize) -> Self {
        Self { summary, precision }
    }

    /// Format an optional figure with the configured precision
    #[must_use]
    pub fn figure(&self, value: Option<f64>) -> String {
        value.map_or_else(|| MISSING.to_string(), |v| format!("{v:.*}", self.precision))
    }

    /// Format a credit total (credits are at most one decimal in practice)
    #[must_use]
    pub fn credits(value: f64) -> String {
        format!("{value:.1}")
    }

    /// Weighted score, secondary grade, credits and count of an aggregate
    #[must_use]
    pub fn aggregate_cells(&self, aggregate: &Aggregate) -> [String; 4] {
        [
            self.figure(aggregate.weighted_score),
            self.figure(aggregate.weighted_secondary),
            Self::credits(aggregate.total_credits),
            aggregate.count.to_string(),
        ]
    }

    /// Heading used for a semester section
    #[must_use]
    pub fn semester_title(semester: &SemesterSummary) -> String {
        if semester.active {
            format!("Semester {} (active)", semester.number)
        } else {
            format!("Semester {}", semester.number)
        }
    }

    /// Number of semesters
    #[must_use]
    pub fn semester_count(&self) -> usize {
        self.summary.semesters.len()
    }

    /// Substitute the cumulative placeholders shared by every template
    #[must_use]
    pub fn fill_cumulative(&self, template: &str) -> String {
        let [weighted_score, weighted_secondary, total_credits, course_count] =
            self.aggregate_cells(&self.summary.cumulative);

        template
            .replace("{{version}}", crate::core::get_version())
            .replace("{{semester_count}}", &self.semester_count().to_string())
            .replace("{{weighted_score}}", &weighted_score)
            .replace("{{weighted_secondary}}", &weighted_secondary)
            .replace("{{gpa_4}}", &self.figure(self.summary.gpa.on_scale_4))
            .replace("{{gpa_5}}", &self.figure(self.summary.gpa.on_scale_5))
            .replace("{{total_credits}}", &total_credits)
            .replace("{{course_count}}", &course_count)
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
