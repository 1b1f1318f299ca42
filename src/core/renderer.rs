/// Generic game renderer trait, one stateless renderer per game
use ratatui::Frame;

pub trait GameRenderer<State> {
    /// Pure rendering function - no game logic
    fn render(frame: &mut Frame, state: &State);
}
