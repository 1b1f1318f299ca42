use ratatui::style::Color;
use std::fmt;

pub const COLS: usize = 8;
pub const ROWS: usize = 8;
/// Tokens in a row needed to win
pub const CONNECT: usize = 4;

pub const COLOR_ONE: Color = Color::Rgb(0x95, 0xC6, 0x23);
pub const COLOR_TWO: Color = Color::Rgb(0x44, 0x5E, 0x93);
pub const COLOR_WIN: Color = Color::Rgb(0xF9, 0x39, 0x43);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1-based number shown to players
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Player::One => COLOR_ONE,
            Player::Two => COLOR_TWO,
        }
    }
}

/// (column, row) with row 0 at the bottom
pub type Cell = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Tie,
    Win { player: Player, cells: [Cell; CONNECT] },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull(usize),
    OutOfRange(usize),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::ColumnFull(_) => {
                write!(f, "The column is full. Please choose another column.")
            }
            MoveError::OutOfRange(col) => write!(f, "There is no column {}.", col + 1),
        }
    }
}

impl std::error::Error for MoveError {}

/// Eight columns, each a stack of tokens growing upward
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    columns: [Vec<Player>; COLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, col: usize, row: usize) -> Option<Player> {
        self.columns.get(col)?.get(row).copied()
    }

    pub fn height(&self, col: usize) -> usize {
        self.columns.get(col).map_or(0, Vec::len)
    }

    pub fn is_full(&self) -> bool {
        self.columns.iter().all(|c| c.len() == ROWS)
    }

    /// Push a token onto a column, returning the row it landed on
    pub fn drop_token(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        let column = self.columns.get_mut(col).ok_or(MoveError::OutOfRange(col))?;
        if column.len() >= ROWS {
            return Err(MoveError::ColumnFull(col));
        }
        column.push(player);
        Ok(column.len() - 1)
    }

    /// Scan vertical, horizontal, rising then falling diagonals for a line
    /// of the player's tokens. A full board without a line is a tie.
    pub fn outcome_for(&self, player: Player) -> Outcome {
        // (dcol, drow) steps, in scan order
        let directions: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

        for (dc, dr) in directions {
            for col in 0..COLS {
                for row in 0..ROWS {
                    if let Some(cells) = self.line_from(col, row, dc, dr, player) {
                        return Outcome::Win { player, cells };
                    }
                }
            }
        }

        if self.is_full() {
            Outcome::Tie
        } else {
            Outcome::InProgress
        }
    }

    fn line_from(
        &self,
        col: usize,
        row: usize,
        dc: isize,
        dr: isize,
        player: Player,
    ) -> Option<[Cell; CONNECT]> {
        let mut cells = [(0, 0); CONNECT];
        for (k, cell) in cells.iter_mut().enumerate() {
            let c = col.checked_add_signed(dc * k as isize)?;
            let r = row.checked_add_signed(dr * k as isize)?;
            if self.get(c, r) != Some(player) {
                return None;
            }
            *cell = (c, r);
        }
        Some(cells)
    }
}
