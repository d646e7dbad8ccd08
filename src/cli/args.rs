//! CLI argument definitions for `gradecalc`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gradecalc::config::ConfigOverrides;
use gradecalc::core::models::Language;
use gradecalc::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// Language course selector
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LanguageArg {
    /// English language course
    English,
    /// German language course
    German,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::English => Self::English,
            LanguageArg::German => Self::German,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `transcript_file`, `precision`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum SemesterSubcommand {
    /// Append a new empty semester and make it active.
    Add,
    /// List semesters with their course counts.
    List,
    /// Make a semester active (by its 1-based number).
    Select {
        /// Semester number as shown by `semester list`
        #[arg(value_name = "NUMBER")]
        number: usize,
    },
}

#[derive(Debug, Subcommand)]
pub enum MajorSubcommand {
    /// Append a blank major course.
    Add,
    /// Remove a major course.
    Remove {
        /// Course number within the semester (1-based)
        #[arg(value_name = "NUMBER")]
        number: usize,
        /// Allow removing the last remaining major course
        #[arg(long)]
        allow_empty: bool,
    },
    /// Rename a major course.
    Rename {
        /// Course number within the semester (1-based)
        #[arg(value_name = "NUMBER")]
        number: usize,
        /// New course name
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Set a major course's score (raw input; empty string clears it).
    Score {
        /// Course number within the semester (1-based)
        #[arg(value_name = "NUMBER")]
        number: usize,
        /// Score as entered, e.g. `87.5`
        #[arg(value_name = "SCORE", allow_hyphen_values = true)]
        raw: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum CultureSubcommand {
    /// Select the culture course by catalog key (see `catalog`).
    Select {
        /// Catalog key
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Set the culture course score (raw input; empty string clears it).
    Score {
        /// Score as entered
        #[arg(value_name = "SCORE", allow_hyphen_values = true)]
        raw: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Show the culture-course catalog and the credit standard.
    Catalog,
    /// Add, list or select semesters.
    Semester {
        #[command(subcommand)]
        subcommand: SemesterSubcommand,
    },
    /// Edit major courses of a semester.
    Major {
        /// Semester number (defaults to the active semester)
        #[arg(short, long, value_name = "NUMBER", global = true)]
        semester: Option<usize>,

        #[command(subcommand)]
        subcommand: MajorSubcommand,
    },
    /// Set a language course score (raw input; empty string clears it).
    Language {
        /// Which language course
        #[arg(value_enum)]
        language: LanguageArg,

        /// Score as entered
        #[arg(value_name = "SCORE", allow_hyphen_values = true)]
        raw: String,

        /// Semester number (defaults to the active semester)
        #[arg(short, long, value_name = "NUMBER")]
        semester: Option<usize>,
    },
    /// Edit the culture course of a semester.
    Culture {
        /// Semester number (defaults to the active semester)
        #[arg(short, long, value_name = "NUMBER", global = true)]
        semester: Option<usize>,

        #[command(subcommand)]
        subcommand: CultureSubcommand,
    },
    /// Print per-semester and cumulative averages and GPA.
    Summary,
    /// Generate a transcript report.
    Report {
        /// Output file path (optional; defaults to the configured reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gradecalc",
    about = "Semester grade and GPA calculator",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug", global = true)]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config log level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Transcript file to read and write (overrides config `transcript_file`)
    #[arg(short = 't', long, value_name = "PATH", global = true)]
    pub transcript: Option<PathBuf>,

    /// Reports directory (overrides config `reports_dir`)
    #[arg(long, value_name = "DIR", global = true)]
    pub reports_dir: Option<PathBuf>,

    /// Decimal places for printed figures (overrides config `precision`)
    #[arg(long, value_name = "N", global = true)]
    pub precision: Option<usize>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` means no override. `--log-file` is applied separately at startup
    /// and only mirrored here so that `config get file` reflects it.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            transcript_file: self
                .transcript
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            precision: self.precision,
        }
    }
}
