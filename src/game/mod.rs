//! Core game model: document types and session progress.

mod state;
mod types;

pub use state::GameState;
pub use types::{
    format_currency, BoardShapeError, Category, CategoryBoard, FinalQuestion, GameDocument, Level,
    LevelContent, Question,
};
