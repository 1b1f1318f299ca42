use super::board::Board;
use super::input::{parse_board_choice, parse_key_bindings, KeyBindings};
use crate::core::terminal::{Console, TerminalColor};
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

const INTRO: &[&str] = &[
    "Welcome to Sliding Puzzle game!",
    "In this game, you will try to rearrange a randomized puzzle by sliding tiles into the blank tile until it becomes in order.",
    "There are two choices of game: 8-puzzle (3x3 grid) and 15-puzzle (4x4 grid).",
    "You may choose your own distinct keys for left, right, up, and down move.",
    "Let's start the game!",
    "Firstly, choose your keys for your move, four distinct letters each separated by a space.",
];

const KEYS_PROMPT: &str = "Enter four letters used for left, right, up, and down move > ";
const CHOICE_PROMPT: &str =
    "Enter \"1\" for 8-puzzle, \"2\" for 15-puzzle, or \"q\" to end the game > ";
const FAREWELL: &str = "Thank you for playing!";

/// What ended a single round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Round {
    Solved(u32),
    InputClosed,
}

/// One console session: key setup, then rounds until the player quits.
/// End of input counts as quitting.
pub struct PuzzleSession<R, W, G> {
    console: Console<R, W>,
    rng: G,
    solved: u32,
}

impl<R: BufRead, W: Write, G: Rng> PuzzleSession<R, W, G> {
    pub fn new(console: Console<R, W>, rng: G) -> Self {
        Self { console, rng, solved: 0 }
    }

    /// Number of puzzles solved so far
    pub fn solved(&self) -> u32 {
        self.solved
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    pub fn run(&mut self) -> io::Result<()> {
        for line in INTRO {
            self.console.print_colored_line(line, TerminalColor::Cyan)?;
        }

        let Some(keys) = self.ask_key_bindings()? else {
            return self.farewell();
        };
        info!(?keys, "key bindings chosen");

        while let Some(dim) = self.ask_board_dim()? {
            let board = Board::shuffled(dim, &mut self.rng);
            info!(dim, inversions = board.inversions(), "new puzzle");

            match self.play_round(board, &keys)? {
                Round::Solved(steps) => {
                    self.solved += 1;
                    info!(steps, "puzzle solved");
                    self.console.print_colored_line(
                        &format!("Congratulations! You solved the puzzle in {} moves!", steps),
                        TerminalColor::Green,
                    )?;
                }
                Round::InputClosed => break,
            }
        }

        self.farewell()
    }

    fn farewell(&mut self) -> io::Result<()> {
        self.console.print_line(FAREWELL)?;
        self.console.flush()
    }

    fn ask_key_bindings(&mut self) -> io::Result<Option<KeyBindings>> {
        loop {
            let Some(line) = self.console.prompt(KEYS_PROMPT)? else {
                return Ok(None);
            };
            match parse_key_bindings(&line) {
                Ok(keys) => return Ok(Some(keys)),
                Err(e) => self.console.warn(&e.to_string())?,
            }
        }
    }

    /// `None` when the player quits or input ends
    fn ask_board_dim(&mut self) -> io::Result<Option<usize>> {
        loop {
            let Some(line) = self.console.prompt(CHOICE_PROMPT)? else {
                return Ok(None);
            };
            match parse_board_choice(&line) {
                Ok(choice) => return Ok(choice.dim()),
                Err(e) => self.console.warn(&e.to_string())?,
            }
        }
    }

    fn play_round(&mut self, mut board: Board, keys: &KeyBindings) -> io::Result<Round> {
        self.console.print(&board.to_string())?;
        let mut steps = 0;

        while !board.is_solved() {
            let prompt = keys.moves_prompt(&board);
            let mv = loop {
                let Some(line) = self.console.prompt(&prompt)? else {
                    return Ok(Round::InputClosed);
                };
                match keys.parse_move(&line, &board) {
                    Ok(mv) => break mv,
                    Err(e) => self.console.warn(&e.to_string())?,
                }
            };

            if board.slide(mv).is_ok() {
                steps += 1;
                debug!(?mv, steps, "tile moved");
            }
            self.console.print(&board.to_string())?;
        }

        Ok(Round::Solved(steps))
    }
}
