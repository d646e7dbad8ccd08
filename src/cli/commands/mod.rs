//! CLI command handlers for `gradecalc`.
//!
//! Each command is implemented in its own submodule. Editing commands share
//! the load, apply, save cycle in [`Session`].

pub mod catalog;
pub mod config;
pub mod culture;
pub mod language;
pub mod major;
pub mod report;
pub mod semester;
pub mod summary;

use gradecalc::config::Config;
use gradecalc::core::catalog::Catalog;
use gradecalc::core::models::{Semester, SemesterId, Transcript, TranscriptOp};
use gradecalc::core::store::TranscriptStore;
use gradecalc::{debug, error};

/// A loaded transcript bound to the file it came from
pub struct Session {
    store: TranscriptStore,
    transcript: Transcript,
    catalog: Catalog,
}

impl Session {
    /// Load the transcript named by `paths.transcript_file`
    pub fn open(config: &Config) -> Result<Self, String> {
        let store = TranscriptStore::new(&config.paths.transcript_file);
        let transcript = store.load().map_err(|e| {
            error!("Failed to load transcript: {e}");
            format!("✗ {e}")
        })?;
        debug!(
            "Loaded {} semester(s) from {}",
            transcript.semesters().len(),
            store.path().display()
        );
        Ok(Self {
            store,
            transcript,
            catalog: Catalog::standard(),
        })
    }

    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolve a 1-based semester number, or the active semester when `None`
    pub fn semester_id(&self, number: Option<usize>) -> Result<SemesterId, String> {
        let semesters = self.transcript.semesters();
        let index = match number {
            Some(n) if n >= 1 && n <= semesters.len() => n - 1,
            Some(n) => {
                return Err(format!(
                    "✗ No semester {n} (transcript has {})",
                    semesters.len()
                ))
            }
            None => self
                .transcript
                .active_index()
                .ok_or_else(|| "✗ Transcript has no semesters; run `semester add`".to_string())?,
        };
        Ok(semesters[index].id)
    }

    /// Semester with the given id
    pub fn semester(&self, id: SemesterId) -> Result<&Semester, String> {
        self.transcript
            .semester(id)
            .ok_or_else(|| format!("✗ Unknown semester {id}"))
    }

    /// Apply one edit to the in-memory snapshot
    pub fn apply(&mut self, op: &TranscriptOp) {
        debug!("Applying {op:?}");
        self.transcript = self.transcript.apply(op);
    }

    /// Persist the current snapshot
    pub fn commit(&self) -> Result<(), String> {
        self.store.save(&self.transcript).map_err(|e| {
            error!("Failed to save transcript: {e}");
            format!("✗ {e}")
        })
    }
}
