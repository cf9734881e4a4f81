//! Session progress: the loaded document plus a cursor over its levels.
//!
//! `GameState` knows nothing about rendering. Out-of-range lookups resolve to
//! `None` / no-op because the UI only offers indices taken from the board it
//! is currently showing.

use super::types::{GameDocument, Level, Question};

#[derive(Debug, Clone)]
pub struct GameState {
    document: GameDocument,
    /// Index into `document.levels`. Only ever moves forward.
    level_index: usize,
}

impl GameState {
    pub fn new(document: GameDocument) -> Self {
        Self {
            document,
            level_index: 0,
        }
    }

    pub fn document(&self) -> &GameDocument {
        &self.document
    }

    pub fn title(&self) -> &str {
        &self.document.title
    }

    /// Zero-based index of the current level.
    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level_count(&self) -> usize {
        self.document.levels.len()
    }

    /// The level under the cursor, or `None` for a document with no levels.
    pub fn current_level(&self) -> Option<&Level> {
        self.document.levels.get(self.level_index)
    }

    fn current_level_mut(&mut self) -> Option<&mut Level> {
        self.document.levels.get_mut(self.level_index)
    }

    /// Look up a clue on the current level's board.
    ///
    /// Returns `None` if either index is out of range or the current level is
    /// a final level.
    pub fn question_at(&self, category: usize, rank: usize) -> Option<&Question> {
        self.current_level()?.board()?.question(category, rank)
    }

    /// Mark a clue as used. Returns true if the flag changed.
    ///
    /// Already-used and out-of-range clues are left alone.
    pub fn mark_used(&mut self, category: usize, rank: usize) -> bool {
        let Some(question) = self
            .current_level_mut()
            .and_then(|level| level.board_mut())
            .and_then(|board| board.question_mut(category, rank))
        else {
            return false;
        };

        if question.used {
            return false;
        }
        question.used = true;
        true
    }

    /// True iff the current level is a board and every clue on it is used.
    ///
    /// Final levels never complete through this check; the controller moves
    /// past them when the final question's dialog finishes.
    pub fn is_level_complete(&self) -> bool {
        match self.current_level().and_then(Level::board) {
            Some(board) => board
                .categories()
                .iter()
                .all(|cat| cat.questions.iter().all(|q| q.used)),
            None => false,
        }
    }

    /// Move to the next level. Returns false (and stays put) at the last level.
    pub fn advance_level(&mut self) -> bool {
        if self.level_index + 1 < self.document.levels.len() {
            self.level_index += 1;
            true
        } else {
            false
        }
    }

    pub fn is_last_level(&self) -> bool {
        self.level_index + 1 >= self.document.levels.len()
    }

    /// Unused clues left on the current board (0 for final levels).
    pub fn remaining_questions(&self) -> usize {
        self.current_level()
            .and_then(Level::board)
            .map_or(0, |board| board.remaining())
    }
}
