//! Game document data structures.
//!
//! A game is an ordered list of levels. Each level is either a board of
//! categories (columns) and questions (rows), or a single final question.

use thiserror::Error;

/// A single point-valued clue on a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Points awarded, displayed as currency.
    pub value: i64,
    /// Text shown first.
    pub prompt: String,
    /// Text shown on reveal.
    pub answer: String,
    /// Set once the clue has been revealed and closed. Never reset.
    pub used: bool,
}

impl Question {
    pub fn new(value: i64, prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            value,
            prompt: prompt.into(),
            answer: answer.into(),
            used: false,
        }
    }
}

/// A themed column of questions, ordered by rank (lowest value first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub questions: Vec<Question>,
}

impl Category {
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            name: name.into(),
            questions,
        }
    }
}

/// Raised when a board's categories do not all have the same question count.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("category '{category}' has {found} questions, expected {expected}")]
pub struct BoardShapeError {
    pub category: String,
    pub expected: usize,
    pub found: usize,
}

/// Grid of categories x questions with a uniform row count.
///
/// The uniform-rows invariant is checked once in [`CategoryBoard::new`], so
/// every `(category, rank)` pair with `category < columns()` and
/// `rank < rows()` addresses a real question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryBoard {
    categories: Vec<Category>,
    rows: usize,
}

impl CategoryBoard {
    pub fn new(categories: Vec<Category>) -> Result<Self, BoardShapeError> {
        let rows = categories.first().map_or(0, |c| c.questions.len());

        if let Some(bad) = categories.iter().find(|c| c.questions.len() != rows) {
            return Err(BoardShapeError {
                category: bad.name.clone(),
                expected: rows,
                found: bad.questions.len(),
            });
        }

        Ok(Self { categories, rows })
    }

    /// Number of categories (columns).
    pub fn columns(&self) -> usize {
        self.categories.len()
    }

    /// Number of question ranks (rows), excluding the header.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// True when there is nothing to render or play.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() || self.rows == 0
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn question(&self, category: usize, rank: usize) -> Option<&Question> {
        self.categories.get(category)?.questions.get(rank)
    }

    pub(crate) fn question_mut(&mut self, category: usize, rank: usize) -> Option<&mut Question> {
        self.categories.get_mut(category)?.questions.get_mut(rank)
    }

    /// Questions in rank order: every category's rank 0, then rank 1, and so on.
    ///
    /// Yields `(category, rank, question)`.
    pub fn iter_row_major(&self) -> impl Iterator<Item = (usize, usize, &Question)> + '_ {
        (0..self.rows).flat_map(move |rank| {
            self.categories
                .iter()
                .enumerate()
                .map(move |(col, cat)| (col, rank, &cat.questions[rank]))
        })
    }

    /// Count of questions not yet used.
    pub fn remaining(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|c| &c.questions)
            .filter(|q| !q.used)
            .count()
    }
}

/// The single question of a final level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalQuestion {
    pub prompt: String,
    pub answer: String,
    pub value: i64,
}

/// What a level contains. Exactly one of the two, by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelContent {
    Board(CategoryBoard),
    Final(FinalQuestion),
}

/// One stage of the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    /// Number shown to players (from the document, not the index).
    pub number: u32,
    pub content: LevelContent,
}

impl Level {
    pub fn board(&self) -> Option<&CategoryBoard> {
        match &self.content {
            LevelContent::Board(board) => Some(board),
            LevelContent::Final(_) => None,
        }
    }

    pub(crate) fn board_mut(&mut self) -> Option<&mut CategoryBoard> {
        match &mut self.content {
            LevelContent::Board(board) => Some(board),
            LevelContent::Final(_) => None,
        }
    }

    pub fn final_question(&self) -> Option<&FinalQuestion> {
        match &self.content {
            LevelContent::Final(fq) => Some(fq),
            LevelContent::Board(_) => None,
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self.content, LevelContent::Final(_))
    }
}

/// A loaded game. Only the `used` flags change during play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDocument {
    pub id: String,
    pub title: String,
    pub levels: Vec<Level>,
}

/// Format a point value as currency, e.g. `$400` or `-$200`.
pub fn format_currency(symbol: &str, value: i64) -> String {
    if value < 0 {
        format!("-{}{}", symbol, value.unsigned_abs())
    } else {
        format!("{}{}", symbol, value)
    }
}
