//! Parse and validate game documents.
//!
//! Every check that the core relies on (one content variant per level,
//! uniform board rows, nothing empty) runs here, so a `GameDocument` that
//! comes out of this module is always playable.

use std::fs;
use std::path::Path;

use super::raw::{RawCategory, RawGame, RawLevel};
use crate::error::{DocumentError, Result, TriviaError};
use crate::game::{
    Category, CategoryBoard, FinalQuestion, GameDocument, Level, LevelContent, Question,
};

/// Parse a JSON game document and validate it.
pub fn parse_game(json: &str) -> Result<GameDocument> {
    let raw: RawGame = serde_json::from_str(json)?;
    validate(raw)
}

/// Read, parse and validate a game file.
pub fn load_game(path: &Path) -> Result<GameDocument> {
    let json = fs::read_to_string(path)?;
    let document = parse_game(&json)?;
    tracing::debug!(
        path = %path.display(),
        id = %document.id,
        levels = document.levels.len(),
        "loaded game"
    );
    Ok(document)
}

/// Convert the wire format into core types, rejecting malformed documents.
pub fn validate(raw: RawGame) -> Result<GameDocument> {
    let RawGame { id, title, levels } = raw;

    let invalid = |reason: DocumentError| TriviaError::InvalidDocument {
        id: id.clone(),
        reason,
    };

    if levels.is_empty() {
        return Err(invalid(DocumentError::NoLevels));
    }

    let levels = levels
        .into_iter()
        .map(convert_level)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(invalid)?;

    Ok(GameDocument { id, title, levels })
}

fn convert_level(raw: RawLevel) -> std::result::Result<Level, DocumentError> {
    let number = raw.level;

    let content = match (raw.categories, raw.final_question) {
        (Some(_), Some(_)) => return Err(DocumentError::AmbiguousLevel { level: number }),
        (None, None) => return Err(DocumentError::EmptyLevel { level: number }),
        (Some(categories), None) => LevelContent::Board(convert_board(number, categories)?),
        (None, Some(fq)) => LevelContent::Final(FinalQuestion {
            prompt: fq.question,
            answer: fq.answer,
            value: fq.value,
        }),
    };

    Ok(Level { number, content })
}

fn convert_board(
    level: u32,
    categories: Vec<RawCategory>,
) -> std::result::Result<CategoryBoard, DocumentError> {
    if categories.is_empty() {
        return Err(DocumentError::EmptyBoard { level });
    }

    if let Some(empty) = categories.iter().find(|c| c.questions.is_empty()) {
        return Err(DocumentError::EmptyCategory {
            level,
            category: empty.name.clone(),
        });
    }

    let categories = categories
        .into_iter()
        .map(|cat| {
            Category::new(
                cat.name,
                cat.questions
                    .into_iter()
                    .map(|q| Question::new(q.value, q.question, q.answer))
                    .collect(),
            )
        })
        .collect();

    CategoryBoard::new(categories).map_err(|shape| DocumentError::RaggedBoard {
        level,
        category: shape.category,
        expected: shape.expected,
        found: shape.found,
    })
}
