use ratatui::{
    widgets::{Block, Borders, List, ListItem, Paragraph},
    layout::{Alignment, Layout, Constraint, Direction},
    style::{Style, Color, Modifier},
    Frame,
};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::time::Duration;
use anyhow::Result;
use crate::games::GameInfo;

pub enum MenuResult {
    Play(&'static str), // Game ID
    Quit,
}

#[derive(Default)]
pub struct MenuManager {
    pub selected_game_index: usize,
}

impl MenuManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(&mut self, terminal: &mut ratatui::DefaultTerminal, games: &[GameInfo]) -> Result<MenuResult> {
        loop {
            terminal.draw(|f| self.render(f, games))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if let Some(result) = self.handle_key(key.code, games) {
                        return Ok(result);
                    }
                }
            }
        }
    }

    fn handle_key(&mut self, code: KeyCode, games: &[GameInfo]) -> Option<MenuResult> {
        match code {
            KeyCode::Enter => games
                .get(self.selected_game_index)
                .map(|g| MenuResult::Play(g.id)),
            KeyCode::Up => {
                self.selected_game_index = self.selected_game_index.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                self.selected_game_index = (self.selected_game_index + 1).min(games.len().saturating_sub(1));
                None
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                games.get(index).map(|g| MenuResult::Play(g.id))
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(MenuResult::Quit),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, games: &[GameInfo]) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        f.render_widget(
            Paragraph::new(" ARCADE TRIO ")
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[0]
        );

        let items: Vec<ListItem> = games.iter().enumerate().map(|(i, g)| {
            let style = if i == self.selected_game_index {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!(" {}. {} : {}", i + 1, g.name, g.description)).style(style)
        }).collect();

        f.render_widget(
            List::new(items).block(Block::default().title(" AVAILABLE GAMES ").borders(Borders::ALL)),
            chunks[1]
        );

        f.render_widget(
            Paragraph::new("[↑/↓] Navigate  [Enter] Play Selected  [1-9] Play  [Q] Quit")
                .alignment(Alignment::Center),
            chunks[2]
        );
    }
}
