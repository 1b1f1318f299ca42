use super::board::{Board, Outcome, Player, COLS};
use super::renderer::{column_at, ConnectFourRenderer};
use crate::core::game::{Context, Game};
use crate::core::renderer::GameRenderer;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectFourState {
    pub board: Board,
    pub current: Player,
    /// Column under the pointer, highlighted in the current player's color
    pub hover: Option<usize>,
    pub outcome: Outcome,
    pub message: String,
}

impl Default for ConnectFourState {
    fn default() -> Self {
        Self {
            board: Board::new(),
            current: Player::One,
            hover: None,
            outcome: Outcome::InProgress,
            message: turn_message(Player::One),
        }
    }
}

fn turn_message(player: Player) -> String {
    format!("Player {}, pick a column.", player.number())
}

impl ConnectFourState {
    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    pub fn title(&self) -> String {
        match self.outcome {
            Outcome::InProgress => "Connect 4 Game".to_string(),
            Outcome::Tie => "Game Tied !".to_string(),
            Outcome::Win { player, .. } => format!("Winner ! Player {}", player.number()),
        }
    }

    /// Drop the current player's token. A rejected drop keeps the turn.
    pub fn play_column(&mut self, col: usize) {
        if self.is_over() {
            return;
        }

        let player = self.current;
        match self.board.drop_token(col, player) {
            Ok(row) => {
                debug!(col, row, player = player.number(), "token dropped");
                self.outcome = self.board.outcome_for(player);
                self.current = player.other();
                self.message = match self.outcome {
                    Outcome::InProgress => turn_message(self.current),
                    Outcome::Tie => "No more moves. Click to leave.".to_string(),
                    Outcome::Win { .. } => {
                        format!("Player {} connects four! Click to leave.", player.number())
                    }
                };
                if self.is_over() {
                    info!(title = %self.title(), "connect four finished");
                }
            }
            Err(e) => {
                warn!(col, error = %e, "drop rejected");
                self.message = e.to_string();
            }
        }
    }

    fn nudge_hover(&mut self, step: isize) {
        let col = match self.hover {
            Some(col) => col.saturating_add_signed(step).min(COLS - 1),
            None => 0,
        };
        self.hover = Some(col);
    }
}

pub struct ConnectFourGame {
    state: ConnectFourState,
}

impl ConnectFourGame {
    pub fn new() -> Self {
        Self { state: ConnectFourState::default() }
    }

    pub fn state(&self) -> &ConnectFourState {
        &self.state
    }
}

impl Default for ConnectFourGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for ConnectFourGame {
    fn title(&self) -> String {
        self.state.title()
    }

    // Turn based, no heartbeat needed
    fn tick_rate(&self) -> Option<Duration> {
        None
    }

    fn on_tick(&mut self, _dt: u32, _ctx: &mut Context) {}

    fn handle_key(&mut self, event: KeyEvent, ctx: &mut Context) {
        if self.state.is_over() {
            ctx.request_quit();
            return;
        }

        match event.code {
            KeyCode::Left => self.state.nudge_hover(-1),
            KeyCode::Right => self.state.nudge_hover(1),
            KeyCode::Down | KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(col) = self.state.hover {
                    self.state.play_column(col);
                }
            }
            KeyCode::Char(c) => {
                if let Some(col) = c.to_digit(10).and_then(|d| (d as usize).checked_sub(1)) {
                    if col < COLS {
                        self.state.hover = Some(col);
                        self.state.play_column(col);
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, event: MouseEvent, area: Rect, ctx: &mut Context) {
        let col = column_at(area, event.column);
        match event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.state.hover = col,
            MouseEventKind::Down(MouseButton::Left) => {
                if self.state.is_over() {
                    ctx.request_quit();
                    return;
                }
                self.state.hover = col;
                // clicks beside the board are ignored
                if let Some(col) = col {
                    self.state.play_column(col);
                }
            }
            _ => {}
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        ConnectFourRenderer::render(frame, &self.state);
    }
}
