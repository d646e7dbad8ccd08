//! Shared library for `gradecalc`
//! Contains the grade computation core used by the CLI and by embedders.

pub mod core;
pub mod logger;

pub use self::core::{config, get_version};
