//! Core module: grading rules, aggregation and the transcript model

pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod gpa;
pub mod grading;
pub mod models;
pub mod report;
pub mod store;
pub mod summary;

/// Returns the current version of the `gradecalc` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
