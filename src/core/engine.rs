use crate::core::game::{Context, Game};
use anyhow::Result;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEventKind,
};
use crossterm::execute;
use futures_util::StreamExt;
use ratatui::layout::Rect;
use ratatui::DefaultTerminal;
use std::io::stdout;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// Redraw period for games without a heartbeat
const IDLE_REDRAW: Duration = Duration::from_millis(16);

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Drive the game until Esc, end of input, or the game asks to quit.
    /// Returns the game so callers can inspect the final state.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> Result<G> {
        let mut events = EventStream::new();
        let tick_rate = self.game.tick_rate();
        let mut ticker = tokio::time::interval(tick_rate.unwrap_or(IDLE_REDRAW));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut last_tick = Instant::now();
        let mut ctx = Context::default();

        info!(title = %self.game.title(), "engine started");

        loop {
            terminal.draw(|f| self.game.render(f))?;

            tokio::select! {
                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            if key.code == KeyCode::Esc {
                                debug!("esc pressed, leaving game");
                                break;
                            }
                            self.game.handle_key(key, &mut ctx);
                        }
                        Some(Ok(Event::Mouse(mouse))) => {
                            let size = terminal.size()?;
                            let area = Rect::new(0, 0, size.width, size.height);
                            self.game.handle_mouse(mouse, area, &mut ctx);
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => return Err(e.into()),
                        None => break,
                    }
                }

                _ = ticker.tick() => {
                    if tick_rate.is_some() {
                        let dt = last_tick.elapsed().as_millis() as u32;
                        last_tick = Instant::now();
                        self.game.on_tick(dt, &mut ctx);
                    }
                }
            }

            if ctx.quit_requested() {
                break;
            }
        }

        info!(title = %self.game.title(), "engine stopped");
        Ok(self.game)
    }
}

/// Take over the terminal (alternate screen, raw mode, mouse capture),
/// run the game and hand the terminal back whatever the outcome.
pub async fn run_tui<G: Game>(game: G) -> Result<G> {
    let mut terminal = ratatui::init();
    if let Err(e) = execute!(stdout(), EnableMouseCapture) {
        ratatui::restore();
        return Err(e.into());
    }

    let result = Engine::new(game).run(&mut terminal).await;

    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}
