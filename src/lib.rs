//! Trivia - a terminal trivia board game.
//!
//! A game is a sequence of levels. Board levels show categories of clues
//! with point values; a final level shows a single final question. Picking
//! a clue opens a reveal dialog (question, then answer), and closing it
//! marks the clue used. When every clue on a board is used the game moves to
//! the next level.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod session;
pub mod terminal;
pub mod ui;

pub use error::{Result, TriviaError};
