use super::arena::{GRID_COLS, GRID_ROWS};
use super::world::{Phase, SnakeWorld};
use crate::core::renderer::GameRenderer;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const COLOR_BODY: Color = Color::Rgb(0xBC, 0xCD, 0xBA);
const COLOR_HEAD: Color = Color::Rgb(0x30, 0x3E, 0x2F);
const COLOR_MONSTER: Color = Color::Rgb(0xA4, 0x03, 0x1F);

/// Two terminal columns per arena cell keeps cells roughly square
const CELL_W: u16 = 2;

const INTRO: &str = "Welcome to the snake game!\n\n\
    You are going to move the snake with the 4 arrow keys.\n\n\
    Consume all the food items before the monster catches you.\n\n\
    Click anywhere to start the game.";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tile {
    Empty,
    Food(usize),
    Body,
    Head,
    Monster,
}

impl Tile {
    fn span(self) -> Span<'static> {
        match self {
            Tile::Empty => Span::raw("  "),
            Tile::Food(value) => Span::styled(
                format!("{:>2}", value),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Tile::Body => Span::styled("▒▒", Style::default().fg(COLOR_BODY).bg(COLOR_HEAD)),
            Tile::Head => Span::styled("██", Style::default().fg(COLOR_HEAD).bg(COLOR_BODY)),
            Tile::Monster => Span::styled("██", Style::default().fg(COLOR_MONSTER)),
        }
    }
}

#[derive(Debug)]
pub struct SnakeRenderer;

impl GameRenderer<SnakeWorld> for SnakeRenderer {
    fn render(frame: &mut Frame, world: &SnakeWorld) {
        let width = GRID_COLS as u16 * CELL_W + 2;
        let height = GRID_ROWS as u16 + 2;
        let [column] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(frame.area());
        let [status_area, arena_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(height)]).areas(column);

        Self::render_status(frame, world, status_area);

        let title = match world.phase {
            Phase::Won => " Winner!!! ",
            Phase::Lost => " Game over!!! ",
            _ => " Snake ",
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Center);
        let inner = block.inner(arena_area);
        frame.render_widget(block, arena_area);

        if world.phase == Phase::Intro {
            frame.render_widget(
                Paragraph::new(INTRO).wrap(Wrap { trim: false }),
                inner.inner(ratatui::layout::Margin::new(2, 3)),
            );
            // the snake and monster are already on the board
            Self::render_grid(frame, world, inner, false);
        } else {
            Self::render_grid(frame, world, inner, true);
        }
    }
}

impl SnakeRenderer {
    fn render_status(frame: &mut Frame, world: &SnakeWorld, area: Rect) {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let status = Line::from(vec![
            Span::styled(format!("Contacts: {}", world.contacts), bold),
            Span::raw("   "),
            Span::styled(format!("Time: {}", world.elapsed_secs), bold),
            Span::raw("   "),
            Span::styled(format!("Motion: {}", world.motion_label()), bold),
        ]);
        frame.render_widget(
            Paragraph::new(status).block(Block::default().borders(Borders::ALL)),
            area,
        );
    }

    fn tiles(world: &SnakeWorld, show_food: bool) -> Vec<Vec<Tile>> {
        let mut grid = vec![vec![Tile::Empty; GRID_COLS]; GRID_ROWS];
        let mut put = |pos: super::arena::Point, tile: Tile| {
            if let Some((col, row)) = pos.cell() {
                grid[row][col] = tile;
            }
        };

        if show_food {
            for (i, food) in world.food.iter().enumerate() {
                if food.visible && !food.eaten {
                    put(food.pos, Tile::Food(i + 1));
                }
            }
        }
        for &seg in &world.body {
            put(seg, Tile::Body);
        }
        put(world.head, Tile::Head);
        put(world.monster, Tile::Monster);
        grid
    }

    fn render_grid(frame: &mut Frame, world: &SnakeWorld, area: Rect, show_food: bool) {
        let grid = Self::tiles(world, show_food);
        if !show_food {
            // only the actors over the intro text
            for (row, tiles) in grid.iter().enumerate() {
                for (col, &tile) in tiles.iter().enumerate() {
                    if tile == Tile::Empty {
                        continue;
                    }
                    let cell = Rect::new(
                        area.x + col as u16 * CELL_W,
                        area.y + row as u16,
                        CELL_W,
                        1,
                    )
                    .intersection(area);
                    frame.render_widget(Paragraph::new(Line::from(tile.span())), cell);
                }
            }
            return;
        }

        let lines: Vec<Line> = grid
            .into_iter()
            .map(|row| Line::from(row.into_iter().map(Tile::span).collect::<Vec<_>>()))
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }
}
