use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// The blank tile
pub const BLANK: u8 = 0;

/// Direction a tile slides into the blank.
/// `Left` pulls the tile to the right of the blank, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Left, Move::Right, Move::Up, Move::Down];

    pub fn label(self) -> &'static str {
        match self {
            Move::Left => "left",
            Move::Right => "right",
            Move::Up => "up",
            Move::Down => "down",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// No tile on that side of the blank
    Unavailable(Move),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Unavailable(m) => write!(f, "no tile can slide {}", m.label()),
        }
    }
}

impl std::error::Error for MoveError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dim: usize,
    tiles: Vec<u8>,
}

impl Board {
    /// Solved arrangement: 1..n in row-major order, blank last
    pub fn goal(dim: usize) -> Self {
        let count = dim * dim;
        let tiles = (1..count as u8).chain(std::iter::once(BLANK)).collect();
        Self { dim, tiles }
    }

    /// Uniformly random arrangement, redrawn until it can be solved
    pub fn shuffled<R: Rng + ?Sized>(dim: usize, rng: &mut R) -> Self {
        let mut board = Self::goal(dim);
        loop {
            board.tiles.shuffle(rng);
            if board.is_solvable() {
                return board;
            }
        }
    }

    /// Build a board from rows. Returns `None` unless the rows form a square
    /// holding every tile 0..dim*dim exactly once.
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let dim = rows.len();
        if dim == 0 || rows.iter().any(|r| r.len() != dim) {
            return None;
        }
        let tiles: Vec<u8> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        let mut sorted = tiles.clone();
        sorted.sort_unstable();
        if sorted.iter().enumerate().any(|(i, &t)| usize::from(t) != i) {
            return None;
        }
        Some(Self { dim, tiles })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// (row, col) of the blank
    pub fn blank_position(&self) -> (usize, usize) {
        let idx = self
            .tiles
            .iter()
            .position(|&t| t == BLANK)
            .unwrap_or_default();
        (idx / self.dim, idx % self.dim)
    }

    pub fn is_valid_move(&self, mv: Move) -> bool {
        let (row, col) = self.blank_position();
        let last = self.dim - 1;
        match mv {
            Move::Left => col != last,
            Move::Right => col != 0,
            Move::Up => row != last,
            Move::Down => row != 0,
        }
    }

    pub fn valid_moves(&self) -> impl Iterator<Item = Move> + '_ {
        Move::ALL.into_iter().filter(|&m| self.is_valid_move(m))
    }

    /// Slide a tile into the blank
    pub fn slide(&mut self, mv: Move) -> Result<(), MoveError> {
        if !self.is_valid_move(mv) {
            return Err(MoveError::Unavailable(mv));
        }
        let (row, col) = self.blank_position();
        let (src_row, src_col) = match mv {
            Move::Left => (row, col + 1),
            Move::Right => (row, col - 1),
            Move::Up => (row + 1, col),
            Move::Down => (row - 1, col),
        };
        self.tiles
            .swap(row * self.dim + col, src_row * self.dim + src_col);
        Ok(())
    }

    pub fn inversions(&self) -> usize {
        count_inversions(&self.tiles)
    }

    pub fn is_solvable(&self) -> bool {
        let inversions_even = self.inversions() % 2 == 0;
        if self.dim % 2 == 1 {
            return inversions_even;
        }
        // blank row counted from the bottom, starting at 1
        let (row, _) = self.blank_position();
        let row_from_bottom = self.dim - row;
        if row_from_bottom % 2 == 0 {
            !inversions_even
        } else {
            inversions_even
        }
    }

    pub fn is_solved(&self) -> bool {
        *self == Self::goal(self.dim)
    }
}

/// Pairs of non-blank tiles that appear out of order
pub fn count_inversions(tiles: &[u8]) -> usize {
    let mut inversions = 0;
    for (i, &a) in tiles.iter().enumerate() {
        if a == BLANK {
            continue;
        }
        inversions += tiles[i + 1..]
            .iter()
            .filter(|&&b| b != BLANK && a > b)
            .count();
    }
    inversions
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.dim) {
            for &tile in row {
                if tile == BLANK {
                    write!(f, "   ")?;
                } else {
                    write!(f, "{:<2} ", tile)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn goal_board_layout() {
        let goal = Board::goal(3);
        assert_eq!(goal, Board::from_rows(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 0]]).unwrap());
        assert!(goal.is_solved());
        assert_eq!(goal.blank_position(), (2, 2));
    }

    #[test]
    fn from_rows_rejects_bad_shapes() {
        assert!(Board::from_rows(&[&[1, 2], &[3]]).is_none());
        assert!(Board::from_rows(&[&[1, 1], &[2, 0]]).is_none());
        assert!(Board::from_rows(&[]).is_none());
    }

    #[test]
    fn zero_inversions_on_odd_board_is_solvable() {
        let board = Board::from_rows(&[&[0, 1, 2], &[3, 4, 5], &[6, 7, 8]]).unwrap();
        assert_eq!(board.inversions(), 0);
        assert!(board.is_solvable());
    }

    #[test]
    fn single_swap_on_odd_board_is_unsolvable() {
        let board = Board::from_rows(&[&[2, 1, 3], &[4, 5, 6], &[7, 8, 0]]).unwrap();
        assert_eq!(board.inversions(), 1);
        assert!(!board.is_solvable());
    }

    #[test]
    fn even_board_parity_uses_blank_row_from_bottom() {
        // blank on bottom row (odd from bottom), zero inversions
        assert!(Board::goal(4).is_solvable());

        // blank on second-to-last row (even from bottom), zero inversions
        let board = Board::from_rows(&[
            &[1, 2, 3, 4],
            &[5, 6, 7, 8],
            &[9, 10, 11, 0],
            &[12, 13, 14, 15],
        ])
        .unwrap();
        assert_eq!(board.inversions(), 0);
        assert!(!board.is_solvable());

        // the famous 14-15 swap
        let board = Board::from_rows(&[
            &[1, 2, 3, 4],
            &[5, 6, 7, 8],
            &[9, 10, 11, 12],
            &[13, 15, 14, 0],
        ])
        .unwrap();
        assert!(!board.is_solvable());
    }

    #[test]
    fn inversions_ignore_the_blank() {
        assert_eq!(count_inversions(&[0, 3, 2, 1]), 3);
        assert_eq!(count_inversions(&[3, 0, 2, 0]), 1);
    }

    #[test]
    fn moves_blocked_at_edges() {
        let goal = Board::goal(3);
        // blank bottom-right: no tile to its right or below
        assert!(!goal.is_valid_move(Move::Left));
        assert!(!goal.is_valid_move(Move::Up));
        assert!(goal.is_valid_move(Move::Right));
        assert!(goal.is_valid_move(Move::Down));
        assert_eq!(goal.valid_moves().collect::<Vec<_>>(), vec![Move::Right, Move::Down]);
    }

    #[test]
    fn slide_swaps_blank_with_neighbour() {
        let mut board = Board::goal(3);
        board.slide(Move::Right).unwrap();
        assert_eq!(board, Board::from_rows(&[&[1, 2, 3], &[4, 5, 6], &[7, 0, 8]]).unwrap());
        board.slide(Move::Down).unwrap();
        assert_eq!(board, Board::from_rows(&[&[1, 2, 3], &[4, 0, 6], &[7, 5, 8]]).unwrap());
        board.slide(Move::Up).unwrap();
        board.slide(Move::Left).unwrap();
        assert!(board.is_solved());
    }

    #[test]
    fn invalid_slide_leaves_board_untouched() {
        let mut board = Board::goal(4);
        assert_eq!(board.slide(Move::Left), Err(MoveError::Unavailable(Move::Left)));
        assert!(board.is_solved());
    }

    #[test]
    fn shuffled_boards_are_always_solvable() {
        let mut rng = StdRng::seed_from_u64(3);
        for dim in [3, 4] {
            for _ in 0..20 {
                let board = Board::shuffled(dim, &mut rng);
                assert!(board.is_solvable());
                assert_eq!(board.dim(), dim);
            }
        }
    }

    #[test]
    fn display_pads_tiles_and_blank() {
        let board = Board::from_rows(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 0]]).unwrap();
        assert_eq!(board.to_string(), "1  2  3  \n4  5  6  \n7  8     \n");

        let wide = Board::goal(4).to_string();
        assert!(wide.starts_with("1  2  3  4  \n"));
        assert!(wide.ends_with("13 14 15    \n"));
    }
}
