//! Two-phase reveal dialog: prompt, then answer, then close.
//!
//! The dialog carries an opaque completion token supplied at `open`. A
//! natural close (advancing past the answer) hands the token back exactly
//! once; a forced `close()` drops it. Callers use the token to decide what
//! to mutate, so a dismissed dialog never changes game state.

use crate::constants::{DEFAULT_CURRENCY_SYMBOL, HINT_CLOSE, HINT_REVEAL};
use crate::game::{format_currency, FinalQuestion, Question};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    Clue,
    Final,
}

/// Content shown by the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealItem {
    pub kind: RevealKind,
    pub value: i64,
    pub prompt: String,
    pub answer: String,
}

impl RevealItem {
    pub fn clue(question: &Question) -> Self {
        Self {
            kind: RevealKind::Clue,
            value: question.value,
            prompt: question.prompt.clone(),
            answer: question.answer.clone(),
        }
    }

    pub fn final_question(question: &FinalQuestion) -> Self {
        Self {
            kind: RevealKind::Final,
            value: question.value,
            prompt: question.prompt.clone(),
            answer: question.answer.clone(),
        }
    }

    /// Only point-valued clues show their amount.
    fn shows_value(&self) -> bool {
        self.kind == RevealKind::Clue && self.value != 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Question,
    Answer,
}

/// Outcome of a single advance trigger.
#[derive(Debug, PartialEq, Eq)]
pub enum DialogStep<T> {
    /// Dialog was closed; nothing happened.
    Ignored,
    /// Switched from prompt to answer.
    Revealed,
    /// Closed after the answer; carries the token given to `open`.
    Completed(T),
}

#[derive(Debug)]
struct ActiveReveal<T> {
    item: RevealItem,
    phase: RevealPhase,
    token: T,
}

#[derive(Debug)]
pub struct RevealDialog<T> {
    active: Option<ActiveReveal<T>>,
    currency_symbol: String,
}

impl<T> Default for RevealDialog<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL)
    }
}

impl<T> RevealDialog<T> {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            active: None,
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Show `item` from its prompt. Replaces anything already open; the
    /// replaced item's token is dropped without completing.
    pub fn open(&mut self, item: RevealItem, token: T) {
        self.active = Some(ActiveReveal {
            item,
            phase: RevealPhase::Question,
            token,
        });
    }

    /// The single user trigger: reveal the answer, or close and complete.
    pub fn advance(&mut self) -> DialogStep<T> {
        let Some(active) = self.active.as_mut() else {
            return DialogStep::Ignored;
        };

        match active.phase {
            RevealPhase::Question => {
                active.phase = RevealPhase::Answer;
                DialogStep::Revealed
            }
            RevealPhase::Answer => match self.active.take() {
                Some(done) => DialogStep::Completed(done.token),
                None => DialogStep::Ignored,
            },
        }
    }

    /// Force-close without completing. Returns whether anything was open.
    pub fn close(&mut self) -> bool {
        self.active.take().is_some()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn phase(&self) -> Option<RevealPhase> {
        self.active.as_ref().map(|a| a.phase)
    }

    pub fn item(&self) -> Option<&RevealItem> {
        self.active.as_ref().map(|a| &a.item)
    }

    /// Prompt while in the question phase, answer after the reveal.
    pub fn displayed_text(&self) -> Option<&str> {
        self.active.as_ref().map(|a| match a.phase {
            RevealPhase::Question => a.item.prompt.as_str(),
            RevealPhase::Answer => a.item.answer.as_str(),
        })
    }

    pub fn hint(&self) -> Option<&'static str> {
        self.phase().map(|phase| match phase {
            RevealPhase::Question => HINT_REVEAL,
            RevealPhase::Answer => HINT_CLOSE,
        })
    }

    /// Currency label for clues with a value, `None` otherwise.
    pub fn amount_label(&self) -> Option<String> {
        let item = self.item()?;
        item.shows_value()
            .then(|| format_currency(&self.currency_symbol, item.value))
    }

    /// Draw the dialog centered over `area`. Does nothing when closed.
    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let (Some(item), Some(text), Some(hint)) =
            (self.item(), self.displayed_text(), self.hint())
        else {
            return;
        };

        let dialog_width = area.width.saturating_sub(4).min(60);
        let dialog_height = area.height.saturating_sub(2).min(14);
        let x = area.x + (area.width.saturating_sub(dialog_width)) / 2;
        let y = area.y + (area.height.saturating_sub(dialog_height)) / 2;
        let dialog_area = Rect::new(x, y, dialog_width, dialog_height);

        frame.render_widget(Clear, dialog_area);

        let (title, border_color) = match item.kind {
            RevealKind::Clue => (" Clue ", Color::Blue),
            RevealKind::Final => (" Final ", Color::Magenta),
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Amount
                Constraint::Min(1),    // Prompt / answer
                Constraint::Length(1), // Hint
            ])
            .split(inner);

        if let Some(amount) = self.amount_label() {
            let amount = Paragraph::new(Span::styled(
                amount,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(amount, chunks[0]);
        }

        let text_color = match self.phase() {
            Some(RevealPhase::Answer) => Color::Green,
            _ => Color::White,
        };
        let body = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(text_color),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(body, chunks[1]);

        let footer = Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn clue(value: i64) -> RevealItem {
        RevealItem::clue(&Question::new(value, "What is H2O?", "Water"))
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_new_dialog_is_closed() {
        let dialog: RevealDialog<u8> = RevealDialog::default();
        assert!(!dialog.is_open());
        assert!(dialog.phase().is_none());
        assert!(dialog.displayed_text().is_none());
        assert!(dialog.hint().is_none());
    }

    #[test]
    fn test_open_shows_prompt_and_value() {
        let mut dialog = RevealDialog::new("$");
        dialog.open(clue(400), ());

        assert_eq!(dialog.phase(), Some(RevealPhase::Question));
        assert_eq!(dialog.displayed_text(), Some("What is H2O?"));
        assert_eq!(dialog.hint(), Some(HINT_REVEAL));
        assert_eq!(dialog.amount_label(), Some("$400".to_string()));
    }

    #[test]
    fn test_advance_reveals_answer() {
        let mut dialog = RevealDialog::new("$");
        dialog.open(clue(400), ());

        assert_eq!(dialog.advance(), DialogStep::Revealed);
        assert_eq!(dialog.phase(), Some(RevealPhase::Answer));
        assert_eq!(dialog.displayed_text(), Some("Water"));
        assert_eq!(dialog.hint(), Some(HINT_CLOSE));
    }

    #[test]
    fn test_second_advance_completes_exactly_once() {
        let mut dialog = RevealDialog::new("$");
        dialog.open(clue(400), 7u32);

        dialog.advance();
        assert_eq!(dialog.advance(), DialogStep::Completed(7));
        assert!(!dialog.is_open());

        // Further triggers on a closed dialog never complete again
        assert_eq!(dialog.advance(), DialogStep::Ignored);
        assert_eq!(dialog.advance(), DialogStep::Ignored);
    }

    #[test]
    fn test_forced_close_never_completes() {
        let mut dialog = RevealDialog::new("$");
        dialog.open(clue(400), "token");

        assert!(dialog.close());
        assert!(!dialog.is_open());
        assert_eq!(dialog.advance(), DialogStep::Ignored);

        // Double close is a no-op
        assert!(!dialog.close());
    }

    #[test]
    fn test_forced_close_after_reveal_never_completes() {
        let mut dialog = RevealDialog::new("$");
        dialog.open(clue(400), "token");
        dialog.advance();

        dialog.close();
        assert_eq!(dialog.advance(), DialogStep::Ignored);
    }

    #[test]
    fn test_reopen_resets_phase_and_token() {
        let mut dialog = RevealDialog::new("$");
        dialog.open(clue(100), 1u32);
        dialog.advance();

        dialog.open(
            RevealItem::clue(&Question::new(200, "Second", "Second answer")),
            2u32,
        );
        assert_eq!(dialog.phase(), Some(RevealPhase::Question));
        assert_eq!(dialog.displayed_text(), Some("Second"));

        dialog.advance();
        assert_eq!(dialog.advance(), DialogStep::Completed(2));
    }

    #[test]
    fn test_completion_token_can_be_a_callback() {
        let mut dialog: RevealDialog<Box<dyn FnOnce() -> u32>> = RevealDialog::new("$");
        dialog.open(clue(100), Box::new(|| 42));
        dialog.advance();

        match dialog.advance() {
            DialogStep::Completed(callback) => assert_eq!(callback(), 42),
            _ => panic!("expected completion"),
        }
    }

    #[test]
    fn test_final_and_zero_value_hide_amount() {
        let mut dialog = RevealDialog::new("$");
        dialog.open(
            RevealItem::final_question(&FinalQuestion {
                prompt: "Final".to_string(),
                answer: "Answer".to_string(),
                value: 2000,
            }),
            (),
        );
        assert!(dialog.amount_label().is_none());

        dialog.open(clue(0), ());
        assert!(dialog.amount_label().is_none());
    }

    #[test]
    fn test_penalty_clue_shows_negative_amount() {
        let mut dialog = RevealDialog::new("$");
        dialog.open(clue(-200), ());
        assert_eq!(dialog.amount_label().as_deref(), Some("-$200"));
    }

    #[test]
    fn test_draw_shows_current_phase_text() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut dialog = RevealDialog::new("$");
        dialog.open(clue(300), ());

        terminal.draw(|f| dialog.draw(f, f.size())).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("What is H2O?"));
        assert!(text.contains("$300"));
        assert!(!text.contains("Water"));

        dialog.advance();
        terminal.draw(|f| dialog.draw(f, f.size())).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Water"));
        assert!(!text.contains("What is H2O?"));
    }
}
