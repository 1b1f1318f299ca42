/// Line-oriented console context for prompt/response games
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::QueueableCommand;
use std::io::{self, BufRead, Write};

pub struct Console<R, W> {
    input: R,
    out: W,
    colored: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out, colored: true }
    }

    /// Plain console without escape sequences, handy for captured output
    pub fn plain(input: R, out: W) -> Self {
        Self { input, out, colored: false }
    }

    pub fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    pub fn print(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)
    }

    /// Print a colored line with automatic reset
    pub fn print_colored_line(&mut self, text: &str, color: TerminalColor) -> io::Result<()> {
        if self.colored {
            self.out.queue(SetForegroundColor(color.into()))?;
            writeln!(self.out, "{}", text)?;
            self.out.queue(ResetColor)?;
            Ok(())
        } else {
            writeln!(self.out, "{}", text)
        }
    }

    pub fn warn(&mut self, text: &str) -> io::Result<()> {
        self.print_colored_line(text, TerminalColor::Yellow)
    }

    /// Show a prompt and read one line. `None` means end of input.
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

#[derive(Clone, Copy)]
pub enum TerminalColor {
    Green,
    Yellow,
    Cyan,
}

impl From<TerminalColor> for Color {
    fn from(color: TerminalColor) -> Self {
        match color {
            TerminalColor::Green => Color::Green,
            TerminalColor::Yellow => Color::Yellow,
            TerminalColor::Cyan => Color::Cyan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_reads_one_line_at_a_time() {
        let mut console = Console::plain(Cursor::new("first\nsecond\n"), Vec::new());
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("first\n"));
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("second\n"));
        assert_eq!(console.prompt("> ").unwrap(), None);

        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "> > > ");
    }

    #[test]
    fn colored_lines_wrap_text_in_escape_codes() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        console.warn("careful").unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("careful"));
        assert!(out.starts_with('\u{1b}'));
    }
}
