//! Transcript persistence
//!
//! The whole entity graph is written as TOML, raw input strings included, so
//! an unfinished transcript reloads exactly as it was left. Derived figures
//! are never stored.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::models::Transcript;
use crate::{debug, info};

/// Errors raised while reading or writing a transcript file
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be read, written or its directory created
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// The file is not a valid transcript
    #[error("Invalid transcript file {path}: {source}")]
    Parse {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },

    /// The transcript could not be encoded
    #[error("Failed to encode transcript: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// File-backed transcript storage
#[derive(Debug, Clone)]
pub struct TranscriptStore {
    path: PathBuf,
}

impl TranscriptStore {
    /// Create a store for `path`. Nothing is touched until load or save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the transcript, or start a fresh one when the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Transcript, StoreError> {
        if !self.path.exists() {
            debug!("No transcript at {}, starting fresh", self.path.display());
            return Ok(Transcript::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        from_toml(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Write the transcript, creating parent directories as needed.
    ///
    /// # Errors
    /// Returns an error if encoding fails or the file cannot be written.
    pub fn save(&self, transcript: &Transcript) -> Result<(), StoreError> {
        let content = to_toml(transcript)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, content).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!("Transcript saved to {}", self.path.display());
        Ok(())
    }
}

/// Encode a transcript as TOML
///
/// # Errors
/// Returns an error if serialization fails.
pub fn to_toml(transcript: &Transcript) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(transcript)
}

/// Decode a transcript from TOML and restore id-allocation invariants
///
/// # Errors
/// Returns an error if the text is not a valid transcript.
pub fn from_toml(content: &str) -> Result<Transcript, toml::de::Error> {
    toml::from_str::<Transcript>(content).map(Transcript::reconciled)
}
