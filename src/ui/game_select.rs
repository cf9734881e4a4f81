//! Game select screen: pick a game from the catalog.

use crate::content::{GameCatalog, GameEntry};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Default)]
pub struct GameSelectScreen {
    pub selected_index: usize,
}

impl GameSelectScreen {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self, count: usize) {
        if self.selected_index + 1 < count {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside a catalog that may have shrunk.
    pub fn clamp(&mut self, count: usize) {
        if self.selected_index >= count {
            self.selected_index = count.saturating_sub(1);
        }
    }

    pub fn selected<'a>(&self, catalog: &'a GameCatalog) -> Option<&'a GameEntry> {
        catalog.entries.get(self.selected_index)
    }

    pub fn draw(&self, f: &mut Frame, area: Rect, catalog: &GameCatalog) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Main content
                Constraint::Length(3), // Controls
            ])
            .split(area);

        let title = Paragraph::new("Choose a Game")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);

        self.draw_game_list(f, main_chunks[0], catalog);
        self.draw_game_details(f, main_chunks[1], catalog);
        self.draw_controls(f, chunks[2]);
    }

    fn draw_game_list(&self, f: &mut Frame, area: Rect, catalog: &GameCatalog) {
        let block = Block::default()
            .title(" Games ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let lines: Vec<Line> = catalog
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let selected = i == self.selected_index;
                let marker = if selected { "> " } else { "  " };
                let mut style = if entry.is_valid() {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::Red)
                };
                if selected {
                    style = style.add_modifier(Modifier::BOLD).bg(Color::DarkGray);
                }
                let name = if entry.is_valid() {
                    entry.title.clone()
                } else {
                    format!("[INVALID] {}", entry.title)
                };
                Line::from(Span::styled(format!("{}{}", marker, name), style))
            })
            .collect();

        f.render_widget(Paragraph::new(lines), inner);
    }

    fn draw_game_details(&self, f: &mut Frame, area: Rect, catalog: &GameCatalog) {
        let block = Block::default()
            .title(" Details ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let Some(entry) = self.selected(catalog) else {
            return;
        };

        let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));
        let mut lines = vec![
            Line::from(Span::styled(
                entry.title.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![label("Id: "), Span::raw(entry.id.clone())]),
            Line::from(vec![
                label("File: "),
                Span::raw(entry.path.display().to_string()),
            ]),
        ];

        match &entry.error {
            None => lines.push(Line::from(vec![
                label("Levels: "),
                Span::styled(
                    entry.level_count.to_string(),
                    Style::default().fg(Color::Cyan),
                ),
            ])),
            Some(error) => {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    error.clone(),
                    Style::default().fg(Color::Red),
                )));
            }
        }

        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }

    fn draw_controls(&self, f: &mut Frame, area: Rect) {
        let controls = Paragraph::new(Line::from(vec![
            Span::styled("[Up/Down]", Style::default().fg(Color::White)),
            Span::styled(" Choose  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Enter]", Style::default().fg(Color::White)),
            Span::styled(" Play  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[R]", Style::default().fg(Color::White)),
            Span::styled(" Rescan  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Q]", Style::default().fg(Color::White)),
            Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
        f.render_widget(controls, area);
    }
}
