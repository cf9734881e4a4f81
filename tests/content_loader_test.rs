//! Content loading integration tests
//!
//! Game files on disk: the bundled games, validation failures, and catalog
//! scanning over a temporary directory.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use trivia::content::{load_game, GameCatalog};
use trivia::error::DocumentError;
use trivia::game::LevelContent;
use trivia::TriviaError;

const GAMES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/games");

fn write(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

#[test]
fn test_bundled_games_all_load() {
    let catalog = GameCatalog::scan(Path::new(GAMES_DIR));

    assert!(!catalog.is_empty());
    assert_eq!(catalog.valid_count(), catalog.entries.len());
    for entry in &catalog.entries {
        let doc = entry.load().unwrap();
        assert_eq!(doc.levels.len(), entry.level_count);
    }
}

#[test]
fn test_bundled_game_shape() {
    let doc = load_game(&Path::new(GAMES_DIR).join("science_night.json")).unwrap();

    assert_eq!(doc.id, "science-night");
    assert_eq!(doc.levels.len(), 3);
    let board = doc.levels[0].board().unwrap();
    assert_eq!(board.columns(), 3);
    assert_eq!(board.rows(), 4);
    assert!(matches!(doc.levels[2].content, LevelContent::Final(_)));
}

#[test]
fn test_ragged_board_rejected() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "ragged.json",
        r#"{"id": "r", "title": "Ragged", "levels": [{"level": 1, "categories": [
            {"name": "A", "questions": [
                {"value": 100, "question": "q", "answer": "a"},
                {"value": 200, "question": "q", "answer": "a"}]},
            {"name": "B", "questions": [
                {"value": 100, "question": "q", "answer": "a"}]}]}]}"#,
    );

    let err = load_game(&dir.path().join("ragged.json")).unwrap_err();
    match err {
        TriviaError::InvalidDocument { id, reason } => {
            assert_eq!(id, "r");
            assert!(matches!(reason, DocumentError::RaggedBoard { level: 1, .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_level_with_both_variants_rejected() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "both.json",
        r#"{"id": "b", "title": "Both", "levels": [{"level": 1,
            "categories": [{"name": "A", "questions": [{"value": 100, "question": "q", "answer": "a"}]}],
            "final": {"question": "q", "answer": "a", "value": 1000}}]}"#,
    );

    let err = load_game(&dir.path().join("both.json")).unwrap_err();
    assert!(matches!(
        err,
        TriviaError::InvalidDocument {
            reason: DocumentError::AmbiguousLevel { level: 1 },
            ..
        }
    ));
}

#[test]
fn test_catalog_keeps_invalid_files_after_valid_ones() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("nested");
    fs::create_dir(&nested).unwrap();

    write(
        &nested,
        "zoo.json",
        r#"{"id": "zoo", "title": "Zoo", "levels": [{"level": 1, "final": {"question": "q", "answer": "a", "value": 500}}]}"#,
    );
    write(dir.path(), "broken.json", "{ not json");
    write(
        dir.path(),
        "art.json",
        r#"{"id": "art", "title": "art", "levels": [{"level": 1, "final": {"question": "q", "answer": "a", "value": 500}}]}"#,
    );
    write(dir.path(), "notes.txt", "ignored");

    let catalog = GameCatalog::scan(dir.path());

    let titles: Vec<&str> = catalog.entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(catalog.entries.len(), 3);
    assert_eq!(&titles[..2], &["art", "Zoo"]);
    assert!(!catalog.entries[2].is_valid());
    assert_eq!(catalog.valid_count(), 2);
}

#[test]
fn test_missing_directory_scans_empty() {
    let dir = TempDir::new().unwrap();
    let catalog = GameCatalog::scan(&dir.path().join("nope"));
    assert!(catalog.is_empty());
}

#[cfg(unix)]
#[test]
fn test_catalog_survives_looping_subdirectory() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "good.json",
        r#"{"id": "good", "title": "Good", "levels": [{"level": 1, "final": {"question": "q", "answer": "a", "value": 500}}]}"#,
    );
    let season = dir.path().join("season");
    fs::create_dir(&season).unwrap();
    std::os::unix::fs::symlink(dir.path(), season.join("loop")).unwrap();

    let catalog = GameCatalog::scan(dir.path());

    let ids: Vec<&str> = catalog.entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["good"]);
}
