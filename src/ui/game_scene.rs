//! Game screen: board, info panel, status bar, and overlays.

use super::game_common::{
    compute_game_layout, create_game_layout, render_finished_overlay, render_info_panel_frame,
    render_status_bar, INFO_PANEL_WIDTH,
};
use crate::game::LevelContent;
use crate::session::Session;
use crate::ui::reveal_dialog::RevealPhase;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Board area for a full-screen game layout. Used for mouse hit-testing.
pub fn board_area(screen: Rect) -> Rect {
    compute_game_layout(screen, INFO_PANEL_WIDTH).content
}

/// Render the whole game screen for `session`.
pub fn render_game(frame: &mut Frame, area: Rect, session: &Session) {
    let title = format!(" {} ", session.state().title());
    let layout = create_game_layout(frame, area, &title, Color::Yellow, INFO_PANEL_WIDTH);

    session.board().draw(frame, layout.content);
    render_info_panel(frame, layout.info_panel, session);
    render_status(frame, layout.status_bar, session);

    session.dialog().draw(frame, layout.content);

    if session.is_finished() && !session.dialog().is_open() {
        render_finished_overlay(
            frame,
            layout.content,
            "Game Over!",
            &format!("Thanks for playing {}", session.state().title()),
        );
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &Session) {
    let inner = render_info_panel_frame(frame, area);
    let state = session.state();

    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Trivia",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if let Some(level) = state.current_level() {
        lines.push(Line::from(vec![
            label("Level: "),
            Span::styled(
                format!("{} ({}/{})", level.number, state.level_index() + 1, state.level_count()),
                Style::default().fg(Color::Cyan),
            ),
        ]));

        match &level.content {
            LevelContent::Board(board) => {
                lines.push(Line::from(vec![
                    label("Board: "),
                    Span::styled(
                        format!("{}x{}", board.columns(), board.rows()),
                        Style::default().fg(Color::White),
                    ),
                ]));
                lines.push(Line::from(vec![
                    label("Remaining: "),
                    Span::styled(
                        state.remaining_questions().to_string(),
                        Style::default().fg(Color::White),
                    ),
                ]));
            }
            LevelContent::Final(_) => {
                lines.push(Line::from(Span::styled(
                    "Final round",
                    Style::default().fg(Color::Magenta),
                )));
            }
        }
    }

    if state.is_last_level() {
        lines.push(Line::from(""));
        lines.push(Line::from(label("Last level")));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_status(frame: &mut Frame, area: Rect, session: &Session) {
    if session.is_finished() {
        render_status_bar(
            frame,
            area,
            "Game complete",
            Color::Green,
            &[("[Esc]", "Back"), ("[Q]", "Quit")],
        );
        return;
    }

    match session.dialog().phase() {
        Some(RevealPhase::Question) => render_status_bar(
            frame,
            area,
            "Think it over...",
            Color::Yellow,
            &[("[Enter]", "Reveal"), ("[Esc]", "Dismiss")],
        ),
        Some(RevealPhase::Answer) => render_status_bar(
            frame,
            area,
            "Answer revealed",
            Color::Green,
            &[("[Enter]", "Close"), ("[Esc]", "Dismiss")],
        ),
        None if session.board().is_final() => render_status_bar(
            frame,
            area,
            "Final question",
            Color::Magenta,
            &[("[Enter]", "Open"), ("[Esc]", "Back"), ("[Q]", "Quit")],
        ),
        None => render_status_bar(
            frame,
            area,
            "Pick a clue",
            Color::White,
            &[
                ("[Arrows]", "Move"),
                ("[Enter]", "Select"),
                ("[Esc]", "Back"),
                ("[Q]", "Quit"),
            ],
        ),
    }
}
