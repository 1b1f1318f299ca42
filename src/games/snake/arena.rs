//! Geometry of the snake arena.
//!
//! Positions are kept in pixels with y growing upward, one move being
//! [`STEP`] pixels. The monster and the food sit off the snake's lattice,
//! so catch, contact and eating are decided by distance rather than by
//! cell equality.

pub const STEP: i32 = 20;
pub const INIT_TAIL: usize = 5;
pub const FOOD_NUM: usize = 5;

pub const WIDTH: i32 = 500;
pub const MOTION_H: i32 = 500;
pub const STATUS_H: i32 = 80;

/// Motion area borders
pub const LEFT: i32 = -WIDTH / 2;
pub const RIGHT: i32 = WIDTH / 2;
pub const BOTTOM: i32 = -MOTION_H / 2 - STATUS_H / 2;
pub const TOP: i32 = MOTION_H / 2 - STATUS_H / 2;

/// Cells of the rendered grid
pub const GRID_COLS: usize = ((RIGHT - LEFT) / STEP) as usize;
pub const GRID_ROWS: usize = ((TOP - BOTTOM) / STEP) as usize;

/// Tail length once every food item has been eaten
pub const FULL_TAIL: usize = FOOD_NUM * (FOOD_NUM + 1) / 2 + INIT_TAIL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx * STEP, self.y + dy * STEP)
    }

    pub fn distance_sq(self, other: Point) -> i32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Strictly closer than `radius`
    pub fn within(self, other: Point, radius: i32) -> bool {
        self.distance_sq(other) < radius * radius
    }

    /// Grid cell (column, row) from the top-left, if inside the arena
    pub fn cell(self) -> Option<(usize, usize)> {
        let col = usize::try_from((self.x - LEFT).div_euclid(STEP)).ok()?;
        let row = usize::try_from((TOP - self.y).div_euclid(STEP)).ok()?;
        (col < GRID_COLS && row < GRID_ROWS).then_some((col, row))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }
}

/// One step from `from` would touch or cross a border
pub fn hits_border(from: Point, dir: Direction) -> bool {
    let next = from.step(dir);
    match dir {
        Direction::Left => next.x <= LEFT,
        Direction::Right => next.x >= RIGHT,
        Direction::Down => next.y <= BOTTOM,
        Direction::Up => next.y >= TOP,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_dimensions() {
        assert_eq!((LEFT, RIGHT, BOTTOM, TOP), (-250, 250, -290, 210));
        assert_eq!((GRID_COLS, GRID_ROWS), (25, 25));
        assert_eq!(FULL_TAIL, 20);
    }

    #[test]
    fn borders_stop_the_outermost_lattice_points() {
        assert!(!hits_border(Point::new(220, 0), Direction::Right));
        assert!(hits_border(Point::new(240, 0), Direction::Right));
        assert!(hits_border(Point::new(-240, 0), Direction::Left));
        assert!(!hits_border(Point::new(0, 180), Direction::Up));
        assert!(hits_border(Point::new(0, 200), Direction::Up));
        assert!(hits_border(Point::new(0, -280), Direction::Down));
        assert!(!hits_border(Point::new(0, -260), Direction::Down));
    }

    #[test]
    fn cells_cover_snake_and_offset_positions() {
        assert_eq!(Point::new(-240, 200).cell(), Some((0, 0)));
        assert_eq!(Point::new(240, -280).cell(), Some((24, 24)));
        assert_eq!(Point::new(0, 0).cell(), Some((12, 10)));
        // food sits 8px below the lattice
        assert_eq!(Point::new(0, -288).cell(), Some((12, 24)));
        assert_eq!(Point::new(300, 0).cell(), None);
        assert_eq!(Point::new(0, 230).cell(), None);
    }

    #[test]
    fn distances_are_strict() {
        let a = Point::new(0, 0);
        assert!(a.within(Point::new(10, 10), 15));
        assert!(!a.within(Point::new(0, 15), 15));
        assert!(a.within(Point::new(0, -8), 10));
    }
}
