//! Board projection and rendering.
//!
//! `BoardView` turns a `Level` into a flat list of cells in display order
//! (header row, then one row per question rank across all categories) and
//! reports what the player chose as a `BoardIntent`. It never reads or
//! mutates game state on its own; the session feeds it a level to render and
//! acts on the intents it returns.

use crate::constants::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_FINAL_LABEL};
use crate::game::{format_currency, Level, LevelContent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// What the player picked on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardIntent {
    Cell { category: usize, question: usize },
    Final,
}

/// One rendered cell, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardCell {
    Header {
        name: String,
    },
    /// `label` is `None` for a used clue (disabled, blank).
    Clue {
        category: usize,
        question: usize,
        label: Option<String>,
    },
    Final {
        label: String,
    },
}

impl BoardCell {
    pub fn is_selectable(&self) -> bool {
        match self {
            BoardCell::Header { .. } => false,
            BoardCell::Clue { label, .. } => label.is_some(),
            BoardCell::Final { .. } => true,
        }
    }
}

/// Height of a header or clue cell, in terminal rows.
const CELL_HEIGHT: u16 = 3;
const FINAL_BUTTON_WIDTH: u16 = 36;
const FINAL_BUTTON_HEIGHT: u16 = 5;

#[derive(Debug, Clone)]
pub struct BoardView {
    /// Cells in display order. Replaced wholesale on every `render`.
    cells: Vec<BoardCell>,
    columns: usize,
    /// Question ranks, excluding the header row.
    rows: usize,
    /// Cursor over the question grid as (rank, category).
    cursor: (usize, usize),
    currency_symbol: String,
    final_label: String,
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL, DEFAULT_FINAL_LABEL)
    }
}

impl BoardView {
    pub fn new(currency_symbol: impl Into<String>, final_label: impl Into<String>) -> Self {
        Self {
            cells: Vec::new(),
            columns: 0,
            rows: 0,
            cursor: (0, 0),
            currency_symbol: currency_symbol.into(),
            final_label: final_label.into(),
        }
    }

    /// Project `level` into cells, replacing whatever was rendered before.
    pub fn render(&mut self, level: &Level) {
        self.cells.clear();
        self.columns = 0;
        self.rows = 0;

        match &level.content {
            LevelContent::Final(fq) => {
                self.cells.push(BoardCell::Final {
                    label: format!(
                        "{} ({})",
                        self.final_label,
                        format_currency(&self.currency_symbol, fq.value)
                    ),
                });
            }
            LevelContent::Board(board) => {
                if board.is_empty() {
                    return;
                }
                self.columns = board.columns();
                self.rows = board.rows();

                self.cells
                    .extend(board.categories().iter().map(|cat| BoardCell::Header {
                        name: cat.name.clone(),
                    }));

                for (category, question, q) in board.iter_row_major() {
                    let label = (!q.used).then(|| format_currency(&self.currency_symbol, q.value));
                    self.cells.push(BoardCell::Clue {
                        category,
                        question,
                        label,
                    });
                }
            }
        }

        self.clamp_cursor();
    }

    /// Drop all rendered content.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.columns = 0;
        self.rows = 0;
        self.cursor = (0, 0);
    }

    pub fn cells(&self) -> &[BoardCell] {
        &self.cells
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_final(&self) -> bool {
        matches!(self.cells.first(), Some(BoardCell::Final { .. }))
    }

    /// Cursor position as (rank, category).
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = (0, 0);
    }

    /// Move the cursor, clamping to the grid.
    pub fn move_cursor(&mut self, d_row: i32, d_col: i32) {
        if self.rows == 0 || self.columns == 0 {
            return;
        }
        let row = (self.cursor.0 as i32 + d_row).clamp(0, self.rows as i32 - 1) as usize;
        let col = (self.cursor.1 as i32 + d_col).clamp(0, self.columns as i32 - 1) as usize;
        self.cursor = (row, col);
    }

    fn clamp_cursor(&mut self) {
        self.cursor = (
            self.cursor.0.min(self.rows.saturating_sub(1)),
            self.cursor.1.min(self.columns.saturating_sub(1)),
        );
    }

    /// Clue cell at (rank, category), skipping the header row.
    fn clue_cell(&self, rank: usize, category: usize) -> Option<&BoardCell> {
        if rank >= self.rows || category >= self.columns {
            return None;
        }
        self.cells.get(self.columns + rank * self.columns + category)
    }

    fn intent_for(cell: &BoardCell) -> Option<BoardIntent> {
        match cell {
            BoardCell::Clue {
                category,
                question,
                label: Some(_),
            } => Some(BoardIntent::Cell {
                category: *category,
                question: *question,
            }),
            BoardCell::Final { .. } => Some(BoardIntent::Final),
            _ => None,
        }
    }

    /// Intent for the cell under the cursor. `None` for used clues.
    pub fn select(&self) -> Option<BoardIntent> {
        if self.is_final() {
            return Some(BoardIntent::Final);
        }
        let (rank, category) = self.cursor;
        self.clue_cell(rank, category).and_then(Self::intent_for)
    }

    /// Intent for a mouse click at terminal position (`x`, `y`), given the
    /// same `area` the board was drawn into.
    pub fn intent_at(&self, area: Rect, x: u16, y: u16) -> Option<BoardIntent> {
        if self.is_final() {
            let button = final_button_rect(area);
            let inside = x >= button.x
                && x < button.x + button.width
                && y >= button.y
                && y < button.y + button.height;
            return inside.then_some(BoardIntent::Final);
        }

        let (row, col) = self.grid_position(area, x, y)?;
        // Row 0 is the header
        let rank = row.checked_sub(1)?;
        self.clue_cell(rank, col).and_then(Self::intent_for)
    }

    /// Move the cursor to the clue under a mouse position, if any.
    pub fn hover(&mut self, area: Rect, x: u16, y: u16) {
        if let Some((row, col)) = self.grid_position(area, x, y) {
            if row > 0 && row - 1 < self.rows {
                self.cursor = (row - 1, col);
            }
        }
    }

    /// Grid (row, column) including the header row, for a point in `area`.
    fn grid_position(&self, area: Rect, x: u16, y: u16) -> Option<(usize, usize)> {
        if self.columns == 0 {
            return None;
        }
        let (col_width, row_height) = self.cell_size(area);
        if col_width == 0 || row_height == 0 || x < area.x || y < area.y {
            return None;
        }
        let col = ((x - area.x) / col_width) as usize;
        let row = ((y - area.y) / row_height) as usize;
        (col < self.columns && row <= self.rows).then_some((row, col))
    }

    fn cell_size(&self, area: Rect) -> (u16, u16) {
        let col_width = area.width / self.columns.max(1) as u16;
        let row_height = (area.height / (self.rows as u16 + 1)).min(CELL_HEIGHT);
        (col_width, row_height)
    }

    /// Draw the rendered cells into `area`. An empty view draws nothing.
    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        if self.is_final() {
            self.draw_final(frame, area);
            return;
        }
        if self.columns == 0 {
            return;
        }

        let (col_width, row_height) = self.cell_size(area);
        if col_width == 0 || row_height == 0 {
            return;
        }

        for (index, cell) in self.cells.iter().enumerate() {
            let row = (index / self.columns) as u16;
            let col = (index % self.columns) as u16;
            let rect = Rect::new(
                area.x + col * col_width,
                area.y + row * row_height,
                col_width,
                row_height,
            );
            if rect.bottom() > area.bottom() {
                break;
            }
            let is_cursor = row > 0 && self.cursor == ((row - 1) as usize, col as usize);
            draw_cell(frame, rect, cell, is_cursor);
        }
    }

    fn draw_final(&self, frame: &mut Frame, area: Rect) {
        let Some(BoardCell::Final { label }) = self.cells.first() else {
            return;
        };
        let button = final_button_rect(area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta));
        let inner = block.inner(button);
        frame.render_widget(block, button);

        let text = Paragraph::new(Span::styled(
            label.as_str(),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        let label_area = Rect {
            y: inner.y + inner.height / 2,
            height: inner.height.min(1),
            ..inner
        };
        frame.render_widget(text, label_area);
    }
}

fn final_button_rect(area: Rect) -> Rect {
    let width = FINAL_BUTTON_WIDTH.min(area.width);
    let height = FINAL_BUTTON_HEIGHT.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn draw_cell(frame: &mut Frame, rect: Rect, cell: &BoardCell, is_cursor: bool) {
    let (text, text_style, border_color) = match cell {
        BoardCell::Header { name } => (
            name.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Color::Cyan,
        ),
        BoardCell::Clue {
            label: Some(label), ..
        } => (
            label.as_str(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            Color::Blue,
        ),
        BoardCell::Clue { label: None, .. } => ("", Style::default(), Color::DarkGray),
        BoardCell::Final { label } => (label.as_str(), Style::default(), Color::Magenta),
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    if is_cursor {
        block = block.style(Style::default().bg(Color::DarkGray));
    }

    let paragraph = Paragraph::new(Span::styled(text, text_style))
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, rect);
}
