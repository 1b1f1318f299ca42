use super::board::{Board, Move};
use std::fmt;

pub const KEYS_WARNING: &str =
    "Invalid input. Please enter only four different letters each separated by a space.";
pub const CHOICE_WARNING: &str = "Invalid input. Please enter either \"1\", \"2\", or \"q\" only.";
pub const MOVE_WARNING: &str = "Invalid input. The move is not available. Please enter again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    BadKeys,
    BadChoice,
    UnavailableMove,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            InputError::BadKeys => KEYS_WARNING,
            InputError::BadChoice => CHOICE_WARNING,
            InputError::UnavailableMove => MOVE_WARNING,
        };
        f.write_str(text)
    }
}

impl std::error::Error for InputError {}

/// Player-chosen letters for the four moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub left: char,
    pub right: char,
    pub up: char,
    pub down: char,
}

impl KeyBindings {
    pub fn key_for(&self, mv: Move) -> char {
        match mv {
            Move::Left => self.left,
            Move::Right => self.right,
            Move::Up => self.up,
            Move::Down => self.down,
        }
    }

    pub fn move_for(&self, key: char) -> Option<Move> {
        Move::ALL.into_iter().find(|&m| self.key_for(m) == key)
    }

    /// "Enter your move (left-a, right-d) > " with only the moves the board allows
    pub fn moves_prompt(&self, board: &Board) -> String {
        let options: Vec<String> = board
            .valid_moves()
            .map(|m| format!("{}-{}", m.label(), self.key_for(m)))
            .collect();
        format!("Enter your move ({}) > ", options.join(", "))
    }

    /// Resolve a typed move against the moves the board allows
    pub fn parse_move(&self, line: &str, board: &Board) -> Result<Move, InputError> {
        let mut chars = line.trim().chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) => fold_key(c),
            _ => return Err(InputError::UnavailableMove),
        };
        self.move_for(key)
            .filter(|&m| board.is_valid_move(m))
            .ok_or(InputError::UnavailableMove)
    }
}

/// Case folding shared by bindings and moves
fn fold_key(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Four distinct single letters separated by whitespace, any case
pub fn parse_key_bindings(line: &str) -> Result<KeyBindings, InputError> {
    let mut keys = Vec::with_capacity(4);
    for token in line.split_whitespace() {
        let mut chars = token.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_alphabetic() => fold_key(c),
            _ => return Err(InputError::BadKeys),
        };
        if keys.contains(&key) {
            return Err(InputError::BadKeys);
        }
        keys.push(key);
    }

    match keys.as_slice() {
        &[left, right, up, down] => Ok(KeyBindings { left, right, up, down }),
        _ => Err(InputError::BadKeys),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardChoice {
    Eight,
    Fifteen,
    Quit,
}

impl BoardChoice {
    pub fn dim(self) -> Option<usize> {
        match self {
            BoardChoice::Eight => Some(3),
            BoardChoice::Fifteen => Some(4),
            BoardChoice::Quit => None,
        }
    }
}

pub fn parse_board_choice(line: &str) -> Result<BoardChoice, InputError> {
    match line.trim().to_lowercase().as_str() {
        "1" => Ok(BoardChoice::Eight),
        "2" => Ok(BoardChoice::Fifteen),
        "q" => Ok(BoardChoice::Quit),
        _ => Err(InputError::BadChoice),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wasd() -> KeyBindings {
        KeyBindings { left: 'a', right: 'd', up: 'w', down: 's' }
    }

    #[test]
    fn key_bindings_accept_mixed_case_and_spacing() {
        assert_eq!(parse_key_bindings("  A  d w\tS \n").unwrap(), wasd());
    }

    #[test]
    fn key_bindings_reject_bad_input() {
        for line in ["a d w", "a d w s x", "a d w w", "ab d w s", "a d 1 s", "", "A a w s"] {
            assert_eq!(parse_key_bindings(line), Err(InputError::BadKeys), "{:?}", line);
        }
    }

    #[test]
    fn board_choice_parsing() {
        assert_eq!(parse_board_choice(" 1 \n"), Ok(BoardChoice::Eight));
        assert_eq!(parse_board_choice("2"), Ok(BoardChoice::Fifteen));
        assert_eq!(parse_board_choice("Q"), Ok(BoardChoice::Quit));
        assert_eq!(parse_board_choice("3"), Err(InputError::BadChoice));
        assert_eq!(BoardChoice::Fifteen.dim(), Some(4));
        assert_eq!(BoardChoice::Quit.dim(), None);
    }

    #[test]
    fn prompt_lists_only_available_moves() {
        let keys = wasd();
        assert_eq!(
            keys.moves_prompt(&Board::goal(3)),
            "Enter your move (right-d, down-s) > "
        );

        let centre = Board::from_rows(&[&[1, 2, 3], &[4, 0, 5], &[6, 7, 8]]).unwrap();
        assert_eq!(
            keys.moves_prompt(&centre),
            "Enter your move (left-a, right-d, up-w, down-s) > "
        );
    }

    #[test]
    fn parse_move_checks_availability() {
        let keys = wasd();
        let goal = Board::goal(3);
        assert_eq!(keys.parse_move(" D\n", &goal), Ok(Move::Right));
        assert_eq!(keys.parse_move("a", &goal), Err(InputError::UnavailableMove));
        assert_eq!(keys.parse_move("x", &goal), Err(InputError::UnavailableMove));
        assert_eq!(keys.parse_move("ds", &goal), Err(InputError::UnavailableMove));
    }

    #[test]
    fn non_ascii_bindings_fold_case_like_moves() {
        let keys = parse_key_bindings("É d w s").unwrap();
        let centre = Board::from_rows(&[&[1, 2, 3], &[4, 0, 5], &[6, 7, 8]]).unwrap();
        assert_eq!(keys.parse_move("É", &centre), Ok(Move::Left));
        assert_eq!(keys.parse_move("é", &centre), Ok(Move::Left));
    }

    #[test]
    fn warnings_match_display() {
        assert_eq!(InputError::BadChoice.to_string(), CHOICE_WARNING);
    }
}
