/// Core game interface for the arcade
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use std::time::Duration;

/// Handle a game uses to talk back to the engine
#[derive(Debug, Default)]
pub struct Context {
    quit: bool,
}

impl Context {
    /// Ask the engine to leave the game after the current event
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

/// Main game trait that every terminal game implements.
/// The engine owns the loop; games only react to input and time.
pub trait Game {
    /// Window title shown by the engine, may change while playing
    fn title(&self) -> String;

    /// Heartbeat period. `None` means the game is purely event driven.
    fn tick_rate(&self) -> Option<Duration>;

    /// Called with the milliseconds elapsed since the previous tick
    fn on_tick(&mut self, dt: u32, ctx: &mut Context);

    fn handle_key(&mut self, event: KeyEvent, ctx: &mut Context);

    /// Mouse events carry the full frame area so games can resolve
    /// coordinates against the same layout they render with.
    fn handle_mouse(&mut self, _event: MouseEvent, _area: Rect, _ctx: &mut Context) {}

    fn render(&self, frame: &mut ratatui::Frame);
}
