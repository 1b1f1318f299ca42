use super::arena::{hits_border, Direction, Point, FOOD_NUM, FULL_TAIL, INIT_TAIL, STEP};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::VecDeque;
use tracing::{debug, info};

/// Eating radius around a food marker
const EAT_RADIUS: i32 = 10;
/// Monster touching any tail segment
const CONTACT_RADIUS: i32 = 15;
/// Monster catches the head when closer than this on both axes
const CATCH_GAP: i32 = 11;
/// Gap the monster ignores when choosing where to go
const CHASE_SLACK: i32 = 10;

/// Minimum spacing between food items
const FOOD_SPACING: i32 = 50;
const MONSTER_MIN_DIST: i32 = 150;
const MONSTER_MAX_DIST: i32 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Instructions shown, waiting for a click
    Intro,
    Running,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub pos: Point,
    pub visible: bool,
    pub eaten: bool,
}

/// Player steering input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Turn(Direction),
    Pause,
}

#[derive(Debug, Clone)]
pub struct SnakeWorld {
    pub head: Point,
    /// Also the last motion, resumed after a pause
    pub heading: Direction,
    /// Tail segments, oldest first
    pub body: VecDeque<Point>,
    /// Tail length the snake is growing toward
    pub size: usize,
    /// Last move lengthened the tail instead of shifting it
    pub extending: bool,
    pub paused: bool,
    pub monster: Point,
    pub monster_heading: Direction,
    pub food: Vec<Food>,
    pub contacts: u32,
    pub elapsed_secs: u32,
    pub phase: Phase,
}

impl SnakeWorld {
    /// Random food and monster placement around a snake at the origin
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let food = place_food(rng);
        let monster = place_monster(rng);
        info!(?monster, ?food, "snake arena laid out");
        Self::with_layout(food, monster)
    }

    pub fn with_layout(food: Vec<Point>, monster: Point) -> Self {
        Self {
            head: Point::default(),
            heading: Direction::Right,
            body: VecDeque::with_capacity(FULL_TAIL),
            size: INIT_TAIL,
            extending: false,
            paused: true,
            monster,
            monster_heading: Direction::Right,
            food: food
                .into_iter()
                .map(|pos| Food { pos, visible: true, eaten: false })
                .collect(),
            contacts: 0,
            elapsed_secs: 0,
            phase: Phase::Intro,
        }
    }

    pub fn start(&mut self) {
        if self.phase == Phase::Intro {
            info!("snake game started");
            self.phase = Phase::Running;
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Won | Phase::Lost)
    }

    /// "Paused" or the current direction
    pub fn motion_label(&self) -> &'static str {
        if self.paused {
            "Paused"
        } else {
            self.heading.label()
        }
    }

    /// Moving one step would hit a border or the tail
    pub fn is_blocked(&self, dir: Direction) -> bool {
        if hits_border(self.head, dir) {
            return true;
        }
        let next = self.head.step(dir);
        self.body.iter().any(|&seg| seg == next)
    }

    /// Apply a key press. A blocked turn falls back to the last direction.
    pub fn steer(&mut self, input: Steer) {
        if !self.is_running() {
            return;
        }
        match input {
            Steer::Turn(dir) => {
                let dir = if self.is_blocked(dir) { self.heading } else { dir };
                self.paused = false;
                self.heading = dir;
            }
            Steer::Pause => self.paused = !self.paused,
        }
        debug!(motion = self.motion_label(), "steer");
    }

    /// Decide win or loss. Returns true once the game is over.
    pub fn check_game_over(&mut self) -> bool {
        if !self.is_running() {
            return self.is_over();
        }
        if self.body.len() == FULL_TAIL {
            info!(secs = self.elapsed_secs, contacts = self.contacts, "snake fully grown");
            self.phase = Phase::Won;
        } else if (self.monster.x - self.head.x).abs() < CATCH_GAP
            && (self.monster.y - self.head.y).abs() < CATCH_GAP
        {
            info!(secs = self.elapsed_secs, contacts = self.contacts, "monster caught the snake");
            self.phase = Phase::Lost;
        }
        self.is_over()
    }

    /// One snake timer firing. Returns false once the game is over.
    pub fn step_snake(&mut self) -> bool {
        if self.check_game_over() {
            return false;
        }
        if !self.is_running() || self.paused || self.is_blocked(self.heading) {
            return true;
        }

        // leave a segment where the head was
        self.extending = self.body.len() < self.size;
        if !self.extending {
            self.body.pop_front();
        }
        self.body.push_back(self.head);
        self.head = self.head.step(self.heading);

        let head = self.head;
        for (i, food) in self.food.iter_mut().enumerate() {
            if food.visible && !food.eaten && head.within(food.pos, EAT_RADIUS) {
                food.visible = false;
                food.eaten = true;
                self.size += i + 1;
                debug!(value = i + 1, size = self.size, "food eaten");
            }
        }
        true
    }

    /// One monster timer firing. Returns false once the game is over.
    pub fn step_monster(&mut self) -> bool {
        if self.check_game_over() {
            return false;
        }
        if !self.is_running() {
            return true;
        }

        let dx = self.head.x - self.monster.x;
        let dy = self.head.y - self.monster.y;
        if dx.abs() > dy.abs() {
            if dx > CHASE_SLACK {
                self.monster_heading = Direction::Right;
            } else if dx < -CHASE_SLACK {
                self.monster_heading = Direction::Left;
            }
        } else if dy > CHASE_SLACK {
            self.monster_heading = Direction::Up;
        } else if dy < -CHASE_SLACK {
            self.monster_heading = Direction::Down;
        }
        self.monster = self.monster.step(self.monster_heading);

        let monster = self.monster;
        if self.body.iter().any(|&seg| monster.within(seg, CONTACT_RADIUS)) {
            self.contacts += 1;
            debug!(contacts = self.contacts, "monster touched the tail");
        }
        true
    }

    /// Show or hide one random uneaten food item.
    /// Returns false when there is nothing left to toggle.
    pub fn toggle_food<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.is_running() {
            return !self.is_over();
        }
        let uneaten: Vec<usize> = (0..self.food.len()).filter(|&i| !self.food[i].eaten).collect();
        let Some(&idx) = uneaten.choose(rng) else {
            return false;
        };
        self.food[idx].visible = !self.food[idx].visible;
        true
    }

    /// One second of play time
    pub fn tick_clock(&mut self) -> bool {
        if !self.is_running() {
            return !self.is_over();
        }
        self.elapsed_secs += 1;
        true
    }
}

fn lattice(from: i32, to: i32) -> Vec<i32> {
    (from..=to).step_by(STEP as usize).collect()
}

fn place_food<R: Rng + ?Sized>(rng: &mut R) -> Vec<Point> {
    let xs = lattice(-240, 240);
    // 8px below the snake's rows
    let ys = lattice(-288, 192);
    let clearance = INIT_TAIL as i32 * STEP;

    let mut placed: Vec<Point> = Vec::with_capacity(FOOD_NUM);
    while placed.len() < FOOD_NUM {
        let (Some(&x), Some(&y)) = (xs.choose(rng), ys.choose(rng)) else {
            break;
        };
        let pos = Point::new(x, y);
        let clear_of_snake = x.abs() > clearance && y.abs() > clearance;
        let spaced = placed
            .iter()
            .all(|p| p.distance_sq(pos) > FOOD_SPACING * FOOD_SPACING);
        if clear_of_snake && spaced {
            placed.push(pos);
        }
    }
    placed
}

fn place_monster<R: Rng + ?Sized>(rng: &mut R) -> Point {
    let xs = lattice(-230, 230);
    let ys = lattice(-270, -10);
    let origin = Point::default();
    loop {
        if let (Some(&x), Some(&y)) = (xs.choose(rng), ys.choose(rng)) {
            let pos = Point::new(x, y);
            let d = pos.distance_sq(origin);
            if d > MONSTER_MIN_DIST * MONSTER_MIN_DIST && d < MONSTER_MAX_DIST * MONSTER_MAX_DIST {
                return pos;
            }
        }
    }
}
