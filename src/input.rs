//! Input handling for the select and game screens.
//!
//! Keys are dispatched through a priority chain: an open dialog swallows
//! everything, then the finished overlay, then the board.

use crate::content::GameCatalog;
use crate::session::{Session, SessionEvent};
use crate::ui::game_scene::board_area;
use crate::ui::game_select::GameSelectScreen;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Result of handling a game-screen input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    /// Leave the game and return to game select.
    BackToSelect,
    Quit,
}

/// Result of handling a select-screen input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectResult {
    Continue,
    /// Start the game at this catalog index.
    Play(usize),
    Rescan,
    Quit,
}

/// Main dispatcher for game-screen keys.
pub fn handle_game_input(key: KeyEvent, session: &mut Session) -> InputResult {
    // 1. Reveal dialog (blocks all other input)
    if session.dialog().is_open() {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                session.advance_dialog();
            }
            KeyCode::Esc => {
                session.dismiss_dialog();
            }
            _ => {}
        }
        return InputResult::Continue;
    }

    // 2. Finished overlay (any key leaves)
    if session.is_finished() {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => InputResult::Quit,
            _ => InputResult::BackToSelect,
        };
    }

    // 3. Board
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => session.board_mut().move_cursor(-1, 0),
        KeyCode::Down | KeyCode::Char('j') => session.board_mut().move_cursor(1, 0),
        KeyCode::Left | KeyCode::Char('h') => session.board_mut().move_cursor(0, -1),
        KeyCode::Right | KeyCode::Char('l') => session.board_mut().move_cursor(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if session.select() == SessionEvent::Ignored {
                tracing::trace!("selection ignored");
            }
        }
        KeyCode::Esc => return InputResult::BackToSelect,
        KeyCode::Char('q') | KeyCode::Char('Q') => return InputResult::Quit,
        _ => {}
    }
    InputResult::Continue
}

/// Mouse handling for the game screen. `screen` is the full terminal area.
pub fn handle_game_mouse(event: MouseEvent, session: &mut Session, screen: Rect) -> InputResult {
    let area = board_area(screen);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if session.is_finished() && !session.dialog().is_open() {
                return InputResult::BackToSelect;
            }
            session.click(area, event.column, event.row);
        }
        MouseEventKind::Moved if !session.dialog().is_open() => {
            session.board_mut().hover(area, event.column, event.row);
        }
        _ => {}
    }
    InputResult::Continue
}

/// Keys on the game select screen.
pub fn handle_select_input(
    key: KeyEvent,
    screen: &mut GameSelectScreen,
    catalog: &GameCatalog,
) -> SelectResult {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => screen.move_up(),
        KeyCode::Down | KeyCode::Char('j') => screen.move_down(catalog.entries.len()),
        KeyCode::Enter => {
            if let Some(entry) = screen.selected(catalog) {
                if entry.is_valid() {
                    return SelectResult::Play(screen.selected_index);
                }
            }
        }
        KeyCode::Char('r') | KeyCode::Char('R') => return SelectResult::Rescan,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return SelectResult::Quit,
        _ => {}
    }
    SelectResult::Continue
}
