//! Game catalog: every game file under a directory.

use std::fs;
use std::path::{Path, PathBuf};

use glob::{glob, Pattern};

use super::loader::load_game;
use crate::constants::GAME_FILE_EXTENSION;
use crate::error::Result;
use crate::game::GameDocument;

/// One game file found while scanning.
#[derive(Debug, Clone)]
pub struct GameEntry {
    pub path: PathBuf,
    pub id: String,
    pub title: String,
    pub level_count: usize,
    /// Load error, if the file could not be read or failed validation.
    pub error: Option<String>,
}

impl GameEntry {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn load(&self) -> Result<GameDocument> {
        load_game(&self.path)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GameCatalog {
    pub dir: PathBuf,
    pub entries: Vec<GameEntry>,
}

impl GameCatalog {
    /// Collect every `*.json` file below `dir`, recursively.
    ///
    /// A missing directory yields an empty catalog. Files that fail to load
    /// are kept with their error so the player can see why; unreadable paths
    /// are logged and skipped. Symlinked directories are not followed.
    pub fn scan(dir: &Path) -> Self {
        let mut entries = Vec::new();

        if dir.is_dir() {
            entries.extend(find_game_files(dir).into_iter().map(entry_for));
        } else {
            tracing::info!(dir = %dir.display(), "games directory does not exist");
        }

        // Valid games first, then alphabetical
        entries.sort_by(|a, b| {
            b.is_valid()
                .cmp(&a.is_valid())
                .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        });

        tracing::info!(
            dir = %dir.display(),
            games = entries.len(),
            invalid = entries.iter().filter(|e| !e.is_valid()).count(),
            "scanned game catalog"
        );

        Self {
            dir: dir.to_path_buf(),
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn valid_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_valid()).count()
    }
}

fn entry_for(path: PathBuf) -> GameEntry {
    match load_game(&path) {
        Ok(doc) => GameEntry {
            id: doc.id,
            title: doc.title,
            level_count: doc.levels.len(),
            error: None,
            path,
        },
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "skipping invalid game file");
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("")
                .to_string();
            GameEntry {
                id: stem.clone(),
                title: stem,
                level_count: 0,
                error: Some(e.to_string()),
                path,
            }
        }
    }
}

fn find_game_files(root: &Path) -> Vec<PathBuf> {
    let Some(root_str) = root.to_str() else {
        tracing::warn!(dir = %root.display(), "games directory is not valid UTF-8");
        return Vec::new();
    };
    let pattern = format!(
        "{}/**/*.{}",
        Pattern::escape(root_str),
        GAME_FILE_EXTENSION
    );

    let paths = match glob(&pattern) {
        Ok(paths) => paths,
        Err(e) => {
            tracing::warn!(pattern = %pattern, error = %e, "bad games directory pattern");
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = paths
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!(path = %e.path().display(), error = %e.error(), "skipping unreadable path");
                None
            }
        })
        .filter(|path| !under_symlinked_dir(root, path))
        .collect();

    files.sort();
    files.dedup();
    files
}

/// True if any directory between `root` (exclusive) and `path` is a symlink.
/// Unreadable directories count as symlinks so they are skipped too.
fn under_symlinked_dir(root: &Path, path: &Path) -> bool {
    path.ancestors()
        .skip(1)
        .take_while(|dir| *dir != root)
        .any(|dir| {
            fs::symlink_metadata(dir)
                .map(|meta| meta.file_type().is_symlink())
                .unwrap_or(true)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAME: &str = r#"{"id": "g", "title": "TITLE", "levels": [
        {"level": 1, "final": {"question": "q", "answer": "a", "value": 500}}
    ]}"#;

    fn write_game(dir: &Path, name: &str, title: &str) {
        fs::write(dir.join(name), GAME.replace("TITLE", title)).unwrap();
    }

    #[test]
    fn test_scan_missing_dir_is_empty() {
        let catalog = GameCatalog::scan(Path::new("/no/such/trivia/dir"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_scan_sorts_and_recurses() {
        let tmp = tempfile::tempdir().unwrap();
        write_game(tmp.path(), "b.json", "Zoology");
        let nested = tmp.path().join("season2");
        fs::create_dir_all(&nested).unwrap();
        write_game(&nested, "a.json", "astronomy");
        fs::write(tmp.path().join("notes.txt"), "not a game").unwrap();

        let catalog = GameCatalog::scan(tmp.path());
        let titles: Vec<&str> = catalog.entries.iter().map(|e| e.title.as_str()).collect();

        assert_eq!(titles, vec!["astronomy", "Zoology"]);
        assert_eq!(catalog.valid_count(), 2);
        assert_eq!(catalog.entries[0].level_count, 1);
    }

    #[test]
    fn test_scan_keeps_invalid_files_last() {
        let tmp = tempfile::tempdir().unwrap();
        write_game(tmp.path(), "good.json", "Good");
        fs::write(tmp.path().join("broken.json"), r#"{"id": "b", "title": "B", "levels": []}"#)
            .unwrap();

        let catalog = GameCatalog::scan(tmp.path());

        assert_eq!(catalog.entries.len(), 2);
        assert!(catalog.entries[0].is_valid());
        let broken = &catalog.entries[1];
        assert!(!broken.is_valid());
        assert_eq!(broken.title, "broken");
        assert!(broken.error.as_deref().unwrap().contains("no levels"));
    }

    #[test]
    fn test_entry_load_returns_document() {
        let tmp = tempfile::tempdir().unwrap();
        write_game(tmp.path(), "one.json", "One");

        let catalog = GameCatalog::scan(tmp.path());
        let doc = catalog.entries[0].load().unwrap();
        assert_eq!(doc.title, "One");
    }

    #[test]
    fn test_scan_lists_each_file_once() {
        let tmp = tempfile::tempdir().unwrap();
        write_game(tmp.path(), "one.json", "One");
        let deep = tmp.path().join("a").join("b").join("c");
        fs::create_dir_all(&deep).unwrap();
        write_game(&deep, "two.json", "Two");

        let catalog = GameCatalog::scan(tmp.path());

        let mut paths: Vec<&Path> = catalog.entries.iter().map(|e| e.path.as_path()).collect();
        paths.sort();
        assert_eq!(
            paths,
            vec![deep.join("two.json").as_path(), tmp.path().join("one.json").as_path()]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_does_not_follow_symlink_cycle() {
        let tmp = tempfile::tempdir().unwrap();
        write_game(tmp.path(), "good.json", "Good");
        let season = tmp.path().join("season");
        fs::create_dir(&season).unwrap();
        std::os::unix::fs::symlink(tmp.path(), season.join("loop")).unwrap();

        let catalog = GameCatalog::scan(tmp.path());

        assert_eq!(catalog.entries.len(), 1);
        assert_eq!(catalog.entries[0].path, tmp.path().join("good.json"));
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_skips_unreadable_subdirectory() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        write_game(tmp.path(), "good.json", "Good");
        let locked = tmp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        // Dangling link: its target can never be read
        std::os::unix::fs::symlink(tmp.path().join("gone"), tmp.path().join("dead.json")).unwrap();

        let catalog = GameCatalog::scan(tmp.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(catalog.valid_count(), 1);
        assert_eq!(catalog.entries[0].title, "Good");
        assert!(catalog
            .entries
            .iter()
            .filter(|e| e.path.ends_with("dead.json"))
            .all(|e| !e.is_valid()));
    }
}
