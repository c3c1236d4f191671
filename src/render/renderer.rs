use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameState, Position};

/// Terminal columns used to draw one cell
pub const CELL_WIDTH: u16 = 2;

/// What occupies a grid cell, from the view's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Snake,
    Food,
    Empty,
}

/// Snake wins over food when both share a cell
pub fn cell_kind(state: &GameState, pos: Position) -> CellKind {
    if state.snake.occupies(pos) {
        CellKind::Snake
    } else if pos == state.food {
        CellKind::Food
    } else {
        CellKind::Empty
    }
}

pub struct Renderer {
    grid_size: i32,
}

impl Renderer {
    pub fn new(grid_size: i32) -> Self {
        Self { grid_size }
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState) {
        let grid_rows = self.grid_size as u16 + 2;
        let grid_cols = self.grid_size as u16 * CELL_WIDTH + 2;
        let panel_rows = if state.game_over { 5 } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),          // Title
                Constraint::Length(grid_rows),  // Game area
                Constraint::Length(panel_rows), // Game over panel
                Constraint::Length(2),          // Footer
                Constraint::Min(0),
            ])
            .split(frame.area());

        frame.render_widget(self.render_title(), chunks[0]);

        let grid_area = centered(chunks[1], grid_cols);
        frame.render_widget(self.render_grid(state), grid_area);

        if state.game_over {
            let panel_area = centered(chunks[2], grid_cols);
            frame.render_widget(self.render_game_over(), panel_area);
        }

        frame.render_widget(self.render_controls(), chunks[3]);
    }

    fn render_title(&self) -> Paragraph<'_> {
        Paragraph::new(Line::from(Span::styled(
            "Snake Game",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let mut lines = Vec::with_capacity(self.grid_size as usize);

        for y in 0..self.grid_size {
            let spans: Vec<Span> = (0..self.grid_size)
                .map(|x| match cell_kind(state, Position::new(x, y)) {
                    CellKind::Snake => Span::styled("██", Style::default().fg(Color::Green)),
                    CellKind::Food => Span::styled("██", Style::default().fg(Color::Red)),
                    CellKind::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                })
                .collect();

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Plain)
                .border_style(Style::default().fg(Color::Gray)),
        )
    }

    fn render_game_over(&self) -> Paragraph<'_> {
        let text = vec![
            Line::from(vec![Span::styled(
                "Game Over!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![
            Line::from("Use arrow keys to control the snake"),
            Line::from(vec![
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

/// Horizontally centred slice of `area`, `width` columns wide
fn centered(area: Rect, width: u16) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .split(area)[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GRID_SIZE, GameConfig, GameEngine};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn draw(state: &GameState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(60, 40)).unwrap();
        let renderer = Renderer::new(GRID_SIZE);
        terminal.draw(|frame| renderer.render(frame, state)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn text_of(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn filled_cells(buffer: &Buffer, color: Color) -> usize {
        buffer
            .content()
            .iter()
            .filter(|cell| cell.symbol() == "█" && cell.fg == color)
            .count()
    }

    #[test]
    fn test_cell_kind() {
        let engine = GameEngine::with_seed(GameConfig::default(), 1);
        let state = engine.state();

        assert_eq!(cell_kind(state, Position::new(10, 10)), CellKind::Snake);
        assert_eq!(cell_kind(state, Position::new(15, 15)), CellKind::Food);
        assert_eq!(cell_kind(state, Position::new(0, 0)), CellKind::Empty);
    }

    #[test]
    fn test_snake_drawn_over_food() {
        let mut state = GameEngine::with_seed(GameConfig::default(), 1).state().clone();
        state.food = state.snake.head();

        assert_eq!(cell_kind(&state, state.food), CellKind::Snake);
    }

    #[test]
    fn test_grid_colours() {
        let engine = GameEngine::with_seed(GameConfig::default(), 1);
        let buffer = draw(engine.state());

        let width = CELL_WIDTH as usize;
        assert_eq!(filled_cells(&buffer, Color::Green), width);
        assert_eq!(filled_cells(&buffer, Color::Red), width);
    }

    #[test]
    fn test_game_over_panel_only_when_over() {
        let mut state = GameEngine::with_seed(GameConfig::default(), 1).state().clone();

        let running = text_of(&draw(&state));
        assert!(running.contains("Snake Game"));
        assert!(!running.contains("Game Over!"));

        state.game_over = true;
        let over = text_of(&draw(&state));
        assert!(over.contains("Game Over!"));
        assert!(over.contains("to restart"));
    }
}
