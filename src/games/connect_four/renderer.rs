use super::board::{Outcome, COLOR_WIN, COLS, ROWS};
use super::game::ConnectFourState;
use crate::core::renderer::GameRenderer;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Terminal cells per board column / row
const CELL_W: u16 = 4;
const CELL_H: u16 = 2;
const BOARD_W: u16 = CELL_W * COLS as u16;
/// Token rows plus the tracker line
const BOARD_H: u16 = CELL_H * ROWS as u16 + 1;

const COLOR_BAR: Color = Color::DarkGray;

fn layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Board
            Constraint::Length(3), // Status
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Top-left terminal cell of the board for a given frame area
pub fn board_origin(area: Rect) -> (u16, u16) {
    let board = layout(area)[1];
    let x = board.x + board.width.saturating_sub(BOARD_W) / 2;
    let y = board.y + board.height.saturating_sub(BOARD_H) / 2;
    (x, y)
}

/// Board column under a terminal x coordinate
pub fn column_at(area: Rect, x: u16) -> Option<usize> {
    let (x0, _) = board_origin(area);
    let col = usize::from(x.checked_sub(x0)? / CELL_W);
    (col < COLS).then_some(col)
}

#[derive(Debug)]
pub struct ConnectFourRenderer;

impl GameRenderer<ConnectFourState> for ConnectFourRenderer {
    fn render(frame: &mut Frame, state: &ConnectFourState) {
        let [title_area, board_area, status_area] = layout(frame.area());

        let title_style = match state.outcome {
            Outcome::InProgress => Style::default().fg(Color::Cyan),
            Outcome::Tie => Style::default().fg(Color::Yellow),
            Outcome::Win { player, .. } => Style::default().fg(player.color()),
        };
        frame.render_widget(
            Paragraph::new(state.title())
                .block(Block::default().borders(Borders::ALL))
                .style(title_style.add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            title_area,
        );

        let (x0, y0) = board_origin(frame.area());
        let board_rect = Rect::new(x0, y0, BOARD_W, BOARD_H).intersection(board_area);
        frame.render_widget(Paragraph::new(Self::board_lines(state)), board_rect);

        let status_style = if state.is_over() {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(state.current.color())
        };
        frame.render_widget(
            Paragraph::new(state.message.as_str())
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Click a column or use ←/→ + Enter, Esc to quit "),
                )
                .style(status_style),
            status_area,
        );
    }
}

impl ConnectFourRenderer {
    fn board_lines(state: &ConnectFourState) -> Vec<Line<'static>> {
        let winning = match state.outcome {
            Outcome::Win { cells, .. } => Some(cells),
            _ => None,
        };

        let mut lines = Vec::with_capacity(BOARD_H as usize);
        for row in (0..ROWS).rev() {
            let spans: Vec<Span> = (0..COLS)
                .flat_map(|col| {
                    let outlined = winning.is_some_and(|cells| cells.contains(&(col, row)));
                    match state.board.get(col, row) {
                        Some(player) => {
                            let edge = Style::default().fg(COLOR_WIN).add_modifier(Modifier::BOLD);
                            let (open, close) = if outlined { ("[", "]") } else { (" ", " ") };
                            vec![
                                Span::styled(open, edge),
                                Span::styled("██", Style::default().fg(player.color())),
                                Span::styled(close, edge),
                            ]
                        }
                        None => vec![Span::styled(" ·· ", Style::default().fg(COLOR_BAR))],
                    }
                })
                .collect();
            let line = Line::from(spans);
            for _ in 0..CELL_H {
                lines.push(line.clone());
            }
        }

        let trackers: Vec<Span> = (0..COLS)
            .map(|col| {
                if state.hover == Some(col) {
                    let style = Style::default()
                        .fg(state.current.color())
                        .add_modifier(Modifier::BOLD);
                    Span::styled("▀▀▀▀", style)
                } else {
                    Span::styled(" ▀▀ ", Style::default().fg(COLOR_BAR))
                }
            })
            .collect();
        lines.push(Line::from(trackers));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(state: &ConnectFourState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|f| ConnectFourRenderer::render(f, state))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn column_lookup_matches_layout() {
        let area = Rect::new(0, 0, 80, 30);
        let (x0, _) = board_origin(area);
        assert_eq!(column_at(area, x0), Some(0));
        assert_eq!(column_at(area, x0 + CELL_W - 1), Some(0));
        assert_eq!(column_at(area, x0 + CELL_W), Some(1));
        assert_eq!(column_at(area, x0 + BOARD_W - 1), Some(COLS - 1));
        assert_eq!(column_at(area, x0 + BOARD_W), None);
        assert_eq!(column_at(area, x0 - 1), None);
    }

    #[test]
    fn renders_title_and_tokens() {
        let mut state = ConnectFourState::default();
        state.play_column(3);
        state.hover = Some(3);
        let screen = draw(&state);
        assert!(screen.contains("Connect 4 Game"));
        assert!(screen.contains("██"));
        assert!(screen.contains("▀▀▀▀"));
        assert!(screen.contains("Player 2, pick a column."));
    }

    #[test]
    fn winning_line_is_outlined() {
        let mut state = ConnectFourState::default();
        for _ in 0..3 {
            state.play_column(0);
            state.play_column(1);
        }
        state.play_column(0);
        let screen = draw(&state);
        assert!(screen.contains("Winner ! Player 1"));
        assert!(screen.contains("[██]"));
    }
}
