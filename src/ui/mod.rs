pub mod board_view;
pub mod game_common;
pub mod game_scene;
pub mod game_select;
pub mod reveal_dialog;

pub use board_view::{BoardCell, BoardIntent, BoardView};
pub use reveal_dialog::{DialogStep, RevealDialog, RevealItem, RevealKind, RevealPhase};
