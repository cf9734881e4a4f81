//! Game content: JSON wire format, validation, catalog scanning, and the
//! built-in sample game.

mod catalog;
mod loader;
pub mod raw;
mod sample;

pub use catalog::{GameCatalog, GameEntry};
pub use loader::{load_game, parse_game, validate};
pub use sample::sample_game;
