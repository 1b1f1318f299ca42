use super::arena::Direction;
use super::renderer::SnakeRenderer;
use super::world::{SnakeWorld, Steer};
use crate::config::SnakeConfig;
use crate::core::game::{Context, Game};
use crate::core::renderer::GameRenderer;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use ratatui::layout::Rect;
use std::time::Duration;
use tracing::debug;

/// Granularity of the monster speed table in milliseconds
const MONSTER_PERIOD_STEP: usize = 20;

/// Repeating countdown fed with elapsed milliseconds
#[derive(Debug, Clone, Copy)]
struct Timer {
    period: u32,
    elapsed: u32,
    stopped: bool,
}

impl Timer {
    fn new(period: u32) -> Self {
        Self { period, elapsed: 0, stopped: false }
    }

    fn feed(&mut self, dt: u32) {
        if !self.stopped {
            self.elapsed = self.elapsed.saturating_add(dt);
        }
    }

    /// Consume one period if it has fully elapsed
    fn fire(&mut self) -> bool {
        if self.stopped || self.elapsed < self.period {
            return false;
        }
        self.elapsed -= self.period;
        true
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}

/// Snake game driven by four independent timers
pub struct SnakeGame {
    world: SnakeWorld,
    rng: StdRng,
    config: SnakeConfig,
    snake_timer: Timer,
    monster_timer: Timer,
    food_timer: Timer,
    clock_timer: Timer,
}

impl SnakeGame {
    pub fn new(config: SnakeConfig, mut rng: StdRng) -> Self {
        let world = SnakeWorld::new(&mut rng);
        Self::with_world(world, config, rng)
    }

    pub fn with_world(world: SnakeWorld, config: SnakeConfig, rng: StdRng) -> Self {
        Self {
            world,
            rng,
            snake_timer: Timer::new(config.move_ms),
            monster_timer: Timer::new(config.monster_start_ms),
            food_timer: Timer::new(config.food_toggle_ms),
            clock_timer: Timer::new(config.clock_ms),
            config,
        }
    }

    pub fn world(&self) -> &SnakeWorld {
        &self.world
    }

    fn start(&mut self) {
        self.world.start();
    }

    /// Uniform pick from the monster speed table
    fn next_monster_period(&mut self) -> u32 {
        let periods: Vec<u32> = (self.config.monster_min_ms..=self.config.monster_max_ms)
            .step_by(MONSTER_PERIOD_STEP)
            .collect();
        periods
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(self.config.monster_min_ms)
    }

    fn advance(&mut self, dt: u32) {
        for timer in [
            &mut self.snake_timer,
            &mut self.monster_timer,
            &mut self.food_timer,
            &mut self.clock_timer,
        ] {
            timer.feed(dt);
        }

        while self.snake_timer.fire() {
            if !self.world.step_snake() {
                self.snake_timer.stop();
                break;
            }
            // slower while the tail is still stretching out
            self.snake_timer.period = if self.world.extending {
                self.config.extend_ms
            } else {
                self.config.move_ms
            };
        }

        while self.monster_timer.fire() {
            if !self.world.step_monster() {
                self.monster_timer.stop();
                break;
            }
            self.monster_timer.period = self.next_monster_period();
        }

        while self.food_timer.fire() {
            if !self.world.toggle_food(&mut self.rng) {
                self.food_timer.stop();
                break;
            }
        }

        while self.clock_timer.fire() {
            if !self.world.tick_clock() {
                self.clock_timer.stop();
                break;
            }
        }

        if self.world.is_over() {
            for timer in [
                &mut self.snake_timer,
                &mut self.monster_timer,
                &mut self.food_timer,
                &mut self.clock_timer,
            ] {
                timer.stop();
            }
        }
    }
}

impl Game for SnakeGame {
    fn title(&self) -> String {
        "Snake".to_string()
    }

    fn tick_rate(&self) -> Option<Duration> {
        Some(self.config.tick_rate())
    }

    fn on_tick(&mut self, dt: u32, _ctx: &mut Context) {
        // timers only run once the intro has been dismissed
        if self.world.is_running() {
            self.advance(dt);
        }
    }

    fn handle_key(&mut self, event: KeyEvent, ctx: &mut Context) {
        if self.world.is_over() {
            if event.code == KeyCode::Enter {
                ctx.request_quit();
            }
            return;
        }
        if !self.world.is_running() {
            if event.code == KeyCode::Enter {
                self.start();
            }
            return;
        }

        let steer = match event.code {
            KeyCode::Up => Steer::Turn(Direction::Up),
            KeyCode::Down => Steer::Turn(Direction::Down),
            KeyCode::Left => Steer::Turn(Direction::Left),
            KeyCode::Right => Steer::Turn(Direction::Right),
            KeyCode::Char(' ') => Steer::Pause,
            _ => return,
        };
        debug!(?steer, "key");
        self.world.steer(steer);
    }

    fn handle_mouse(&mut self, event: MouseEvent, _area: Rect, ctx: &mut Context) {
        if let MouseEventKind::Down(MouseButton::Left) = event.kind {
            if self.world.is_over() {
                ctx.request_quit();
            } else {
                self.start();
            }
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        SnakeRenderer::render(frame, &self.world);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::arena::Point;
    use crate::games::snake::world::Phase;
    use crossterm::event::KeyModifiers;
    use rand::SeedableRng;

    fn press(game: &mut SnakeGame, code: KeyCode) {
        let mut ctx = Context::default();
        game.handle_key(KeyEvent::new(code, KeyModifiers::NONE), &mut ctx);
    }

    fn game_with_far_monster() -> SnakeGame {
        let food = vec![
            Point::new(-240, 192),
            Point::new(240, 192),
            Point::new(-240, -288),
            Point::new(240, -288),
            Point::new(-120, -288),
        ];
        let world = SnakeWorld::with_layout(food, Point::new(-230, -270));
        SnakeGame::with_world(world, SnakeConfig::default(), StdRng::seed_from_u64(5))
    }

    #[test]
    fn timer_fires_once_per_period() {
        let mut timer = Timer::new(200);
        timer.feed(150);
        assert!(!timer.fire());
        timer.feed(450);
        assert!(timer.fire());
        assert!(timer.fire());
        assert!(!timer.fire());
        timer.stop();
        timer.feed(1000);
        assert!(!timer.fire());
    }

    #[test]
    fn nothing_moves_during_the_intro() {
        let mut game = game_with_far_monster();
        let mut ctx = Context::default();
        game.on_tick(5000, &mut ctx);
        assert_eq!(game.world().phase, Phase::Intro);
        assert_eq!(game.world().elapsed_secs, 0);
        assert_eq!(game.world().monster, Point::new(-230, -270));
    }

    #[test]
    fn click_starts_and_arrow_moves() {
        let mut game = game_with_far_monster();
        let mut ctx = Context::default();
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        game.handle_mouse(click, Rect::new(0, 0, 80, 40), &mut ctx);
        assert!(game.world().is_running());

        press(&mut game, KeyCode::Up);
        game.on_tick(200, &mut ctx);
        assert_eq!(game.world().head, Point::new(0, 20));
        // extending: next move needs the slower period
        assert_eq!(game.snake_timer.period, 300);
        game.on_tick(200, &mut ctx);
        assert_eq!(game.world().head, Point::new(0, 20));
        game.on_tick(100, &mut ctx);
        assert_eq!(game.world().head, Point::new(0, 40));
    }

    #[test]
    fn clock_and_monster_run_after_start() {
        let mut game = game_with_far_monster();
        let mut ctx = Context::default();
        press(&mut game, KeyCode::Enter);
        for _ in 0..100 {
            game.on_tick(10, &mut ctx);
        }
        assert_eq!(game.world().elapsed_secs, 1);
        assert_ne!(game.world().monster, Point::new(-230, -270));
        let period = game.monster_timer.period;
        assert!((180..=380).contains(&period) && period % 20 == 0, "{}", period);
    }

    #[test]
    fn monster_periods_cover_the_whole_table_evenly() {
        let mut game = game_with_far_monster();
        let mut counts = std::collections::BTreeMap::new();
        for _ in 0..11_000 {
            *counts.entry(game.next_monster_period()).or_insert(0u32) += 1;
        }
        let periods: Vec<u32> = counts.keys().copied().collect();
        assert_eq!(periods, (180..=380).step_by(20).collect::<Vec<u32>>());
        for (period, count) in counts {
            assert!(count > 700, "{} drawn only {} times", period, count);
        }
    }

    #[test]
    fn game_over_stops_timers_and_enter_quits() {
        let food = vec![Point::new(240, 192); 5];
        let world = SnakeWorld::with_layout(food, Point::new(10, -10));
        let mut game =
            SnakeGame::with_world(world, SnakeConfig::default(), StdRng::seed_from_u64(1));
        let mut ctx = Context::default();
        press(&mut game, KeyCode::Enter);
        game.on_tick(1000, &mut ctx);
        assert_eq!(game.world().phase, Phase::Lost);
        assert_eq!(game.world().elapsed_secs, 0);

        game.on_tick(5000, &mut ctx);
        assert_eq!(game.world().elapsed_secs, 0);

        press(&mut game, KeyCode::Up);
        assert!(game.world().paused);

        game.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &mut ctx);
        assert!(ctx.quit_requested());
    }
}
