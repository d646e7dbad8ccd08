//! Integration tests for transcript persistence.

use gradecalc::core::models::{Language, Transcript, TranscriptOp};
use gradecalc::core::store::{StoreError, TranscriptStore};
use std::fs;
use tempfile::TempDir;

fn edited_transcript() -> Transcript {
    let t = Transcript::new().add_semester();
    let semester = t.semesters()[0].id;
    let course = t.semesters()[0].majors[0].id;

    t.apply_all(&[
        TranscriptOp::SetLanguageScore {
            semester,
            language: Language::German,
            raw: String::new(),
        },
        TranscriptOp::SetLanguageScore {
            semester,
            language: Language::English,
            raw: "88.50".to_string(),
        },
        TranscriptOp::RenameMajorCourse {
            semester,
            course,
            name: "Signals & \"Systems\"".to_string(),
        },
        TranscriptOp::SetMajorScore {
            semester,
            course,
            raw: "-3".to_string(),
        },
        TranscriptOp::AddMajorCourse { semester },
        TranscriptOp::SelectCulture {
            semester,
            key: "european-history".to_string(),
        },
        TranscriptOp::SetCultureScore {
            semester,
            raw: "tbd".to_string(),
        },
        TranscriptOp::SelectSemester(semester),
    ])
}

#[test]
fn save_then_load_is_lossless() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = TranscriptStore::new(dir.path().join("nested").join("transcript.toml"));
    let transcript = edited_transcript();

    store.save(&transcript).expect("Failed to save transcript");
    let loaded = store.load().expect("Failed to load transcript");

    assert_eq!(loaded, transcript);
    let semester = &loaded.semesters()[0];
    assert_eq!(semester.english, "88.50");
    assert_eq!(semester.german, "");
    assert_eq!(semester.majors[0].score, "-3");
    assert_eq!(semester.majors[0].name, "Signals & \"Systems\"");
    assert_eq!(semester.culture.score, "tbd");
    assert_eq!(loaded.active_index(), Some(0));
}

#[test]
fn ids_keep_growing_after_reload() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = TranscriptStore::new(dir.path().join("transcript.toml"));
    let transcript = edited_transcript();
    store.save(&transcript).expect("Failed to save transcript");

    let loaded = store.load().expect("Failed to load transcript");
    let semester = loaded.semesters()[0].id;
    let grown = loaded.add_major_course(semester).add_semester();

    let mut ids: Vec<u64> = grown
        .semesters()
        .iter()
        .flat_map(|s| std::iter::once(s.id.0).chain(s.majors.iter().map(|c| c.id.0)))
        .collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total, "ids must stay unique");
}

#[test]
fn missing_file_starts_fresh() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = TranscriptStore::new(dir.path().join("absent.toml"));

    let loaded = store.load().expect("Missing file should not be an error");
    assert_eq!(loaded, Transcript::new());
    assert!(!store.path().exists());
}

#[test]
fn corrupt_file_is_a_parse_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("transcript.toml");
    fs::write(&path, "this is [not a transcript").expect("Failed to write file");

    let err = TranscriptStore::new(&path).load().unwrap_err();
    assert!(matches!(err, StoreError::Parse { .. }));
    assert!(err.to_string().contains("transcript.toml"));
}

#[test]
fn unwritable_target_is_an_io_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let blocker = dir.path().join("file");
    fs::write(&blocker, "x").expect("Failed to write file");

    // Parent "directory" is a regular file
    let store = TranscriptStore::new(blocker.join("transcript.toml"));
    let err = store.save(&Transcript::new()).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}
