//! Stateless UI rendering for the word game.

use super::app::{App, Modal};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use strictly_wordle::{Classification, Dictionary, GAME_WORD_LENGTH, GuessRecord, MAX_GUESSES};

const TILE_WIDTH: u16 = 5;
const TILE_HEIGHT: u16 = 3;

/// Renders the whole screen.
pub fn draw<D: Dictionary>(frame: &mut Frame, app: &App<D>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Status
            Constraint::Min(TILE_HEIGHT * MAX_GUESSES as u16),
            Constraint::Length(3), // Entry
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly Wordle")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[1]);

    draw_board(frame, chunks[2], app.session().history());

    let entry = Paragraph::new(app.input_display())
        .alignment(Alignment::Center)
        .block(Block::default().title("Word").borders(Borders::ALL));
    frame.render_widget(entry, center_rect(chunks[3], 21, 3));

    let help = Paragraph::new("Type letters, [Enter] submit, [Backspace] erase, [Esc] clear, [Ctrl+C] quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    if let Some(modal) = app.modal() {
        draw_modal(frame, area, modal);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, history: &[GuessRecord]) {
    let width = TILE_WIDTH * GAME_WORD_LENGTH as u16;
    let height = TILE_HEIGHT * MAX_GUESSES as u16;
    let board_area = center_rect(area, width, height);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(TILE_HEIGHT); MAX_GUESSES])
        .split(board_area);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(TILE_WIDTH); GAME_WORD_LENGTH])
            .split(*row_area);

        for (col, tile_area) in cols.iter().enumerate() {
            let tile = history.get(row).and_then(|record| record.tiles().nth(col));
            draw_tile(frame, *tile_area, tile);
        }
    }
}

fn draw_tile(frame: &mut Frame, area: Rect, tile: Option<(char, Classification)>) {
    let letter = tile.map(|(c, _)| c.to_string()).unwrap_or_default();
    let paragraph = Paragraph::new(letter)
        .style(tile_style(tile.map(|(_, class)| class)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Style for a tile; `None` is an empty slot.
pub fn tile_style(class: Option<Classification>) -> Style {
    match class {
        Some(Classification::Correct) => Style::default()
            .bg(Color::Green)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        Some(Classification::Present) => Style::default()
            .bg(Color::Yellow)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        Some(Classification::Absent) => Style::default()
            .bg(Color::DarkGray)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::DarkGray),
    }
}

fn draw_modal(frame: &mut Frame, area: Rect, modal: &Modal) {
    let popup = center_rect(area, 50, 7);
    frame.render_widget(Clear, popup);

    let text = vec![
        Line::from(""),
        Line::from(modal.message()),
        Line::from(""),
        Line::from(Span::styled(modal.hint(), Style::default().fg(Color::DarkGray))),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .title(modal.title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use strictly_wordle::{GameSession, WordList};

    #[test]
    fn test_tile_colors() {
        assert_eq!(tile_style(Some(Classification::Correct)).bg, Some(Color::Green));
        assert_eq!(tile_style(Some(Classification::Present)).bg, Some(Color::Yellow));
        assert_eq!(tile_style(Some(Classification::Absent)).bg, Some(Color::DarkGray));
        assert_eq!(tile_style(None).bg, None);
    }

    #[test]
    fn test_center_rect_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        let inner = center_rect(area, 20, 6);
        assert_eq!(inner.width, 20);
        assert_eq!(inner.height, 6);
        assert_eq!(inner.x, 30);
        assert_eq!(inner.y, 9);
    }

    #[test]
    fn test_draw_renders_status() {
        let app = App::new(GameSession::new(WordList::from_words(["crane"])), true);
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(screen.contains("Player 1, enter a 5-character word:"));
    }
}
