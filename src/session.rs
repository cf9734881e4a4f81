//! Session controller: wires board intents, game state and the reveal dialog.
//!
//! Flow for one clue: intent -> open dialog -> reveal -> natural close ->
//! mark used -> completion check -> advance level or re-render. A forced
//! dismiss skips everything after the close.

use crate::config::Config;
use crate::game::{GameDocument, GameState, Level};
use crate::ui::board_view::{BoardIntent, BoardView};
use crate::ui::reveal_dialog::{DialogStep, RevealDialog, RevealItem};
use ratatui::layout::Rect;

/// Completion token carried by the dialog: what the player picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Clue { category: usize, question: usize },
    Final,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Playing,
    Finished,
}

/// What a single input did, for the front end and for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Nothing happened (used clue, closed dialog, finished game...).
    Ignored,
    Opened(Selection),
    Revealed,
    /// Dialog force-closed; game state untouched.
    Dismissed,
    /// Clue marked used; still on the same level.
    QuestionUsed,
    /// Moved to the level at this zero-based index.
    LevelAdvanced(usize),
    Finished,
}

#[derive(Debug)]
pub struct Session {
    state: GameState,
    board: BoardView,
    dialog: RevealDialog<Selection>,
    phase: SessionPhase,
}

impl Session {
    pub fn new(document: GameDocument, config: &Config) -> Self {
        let mut session = Self {
            state: GameState::new(document),
            board: BoardView::new(&config.currency_symbol, &config.final_label),
            dialog: RevealDialog::new(&config.currency_symbol),
            phase: SessionPhase::Playing,
        };

        match session.state.current_level() {
            Some(level) => session.board.render(level),
            None => session.phase = SessionPhase::Finished,
        }

        tracing::info!(
            id = %session.state.document().id,
            title = %session.state.title(),
            levels = session.state.level_count(),
            "session started"
        );
        session
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &BoardView {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut BoardView {
        &mut self.board
    }

    pub fn dialog(&self) -> &RevealDialog<Selection> {
        &self.dialog
    }

    pub fn current_level(&self) -> Option<&Level> {
        self.state.current_level()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    /// Act on whatever is under the board cursor.
    pub fn select(&mut self) -> SessionEvent {
        match self.board.select() {
            Some(intent) => self.handle_intent(intent),
            None => SessionEvent::Ignored,
        }
    }

    /// Mouse click at (`x`, `y`). With the dialog open any click advances it;
    /// otherwise the click is hit-tested against `board_area`.
    pub fn click(&mut self, board_area: Rect, x: u16, y: u16) -> SessionEvent {
        if self.dialog.is_open() {
            return self.advance_dialog();
        }
        self.board.hover(board_area, x, y);
        match self.board.intent_at(board_area, x, y) {
            Some(intent) => self.handle_intent(intent),
            None => SessionEvent::Ignored,
        }
    }

    /// Open the dialog for a board intent.
    ///
    /// Ignored while finished, while a dialog is already open, or when the
    /// intent does not match the current level (used or missing clue).
    pub fn handle_intent(&mut self, intent: BoardIntent) -> SessionEvent {
        if self.is_finished() || self.dialog.is_open() {
            return SessionEvent::Ignored;
        }

        let (item, selection) = match intent {
            BoardIntent::Cell { category, question } => {
                match self.state.question_at(category, question) {
                    Some(q) if !q.used => (
                        RevealItem::clue(q),
                        Selection::Clue { category, question },
                    ),
                    _ => return SessionEvent::Ignored,
                }
            }
            BoardIntent::Final => {
                match self.state.current_level().and_then(Level::final_question) {
                    Some(fq) => (RevealItem::final_question(fq), Selection::Final),
                    None => return SessionEvent::Ignored,
                }
            }
        };

        tracing::debug!(?selection, value = item.value, "opening clue");
        self.dialog.open(item, selection);
        SessionEvent::Opened(selection)
    }

    /// The player's advance trigger on the open dialog.
    pub fn advance_dialog(&mut self) -> SessionEvent {
        match self.dialog.advance() {
            DialogStep::Ignored => SessionEvent::Ignored,
            DialogStep::Revealed => SessionEvent::Revealed,
            DialogStep::Completed(selection) => self.complete(selection),
        }
    }

    /// Force-close the dialog. Never marks anything used.
    pub fn dismiss_dialog(&mut self) -> SessionEvent {
        if self.dialog.close() {
            tracing::debug!("dialog dismissed");
            SessionEvent::Dismissed
        } else {
            SessionEvent::Ignored
        }
    }

    fn complete(&mut self, selection: Selection) -> SessionEvent {
        match selection {
            Selection::Clue { category, question } => {
                self.state.mark_used(category, question);
                tracing::debug!(
                    category,
                    question,
                    remaining = self.state.remaining_questions(),
                    "clue used"
                );

                if self.state.is_level_complete() {
                    self.next_level()
                } else {
                    self.rerender();
                    SessionEvent::QuestionUsed
                }
            }
            // Final levels have no board to exhaust; finishing the dialog is
            // what completes them.
            Selection::Final => self.next_level(),
        }
    }

    fn next_level(&mut self) -> SessionEvent {
        if self.state.advance_level() {
            let index = self.state.level_index();
            tracing::info!(
                level = index + 1,
                of = self.state.level_count(),
                "advanced to next level"
            );
            self.board.reset_cursor();
            self.rerender();
            SessionEvent::LevelAdvanced(index)
        } else {
            tracing::info!(title = %self.state.title(), "game finished");
            self.phase = SessionPhase::Finished;
            self.rerender();
            SessionEvent::Finished
        }
    }

    fn rerender(&mut self) {
        match self.state.current_level() {
            Some(level) => self.board.render(level),
            None => self.board.clear(),
        }
    }
}
