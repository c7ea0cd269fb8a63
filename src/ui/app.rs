use crate::config::AppConfig;
use crate::error::ConfigError;
use crate::game::{Game, GameOutcome, MoveError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

use super::game_view::{self, Players};

pub struct App {
    game: Game,
    players: Players,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        let game = Game::new();
        let selected_column = game.state().board().columns() / 2; // Start in middle
        Ok(App {
            game,
            players: Players::from_config(config)?,
            selected_column,
            should_quit: false,
            message: None,
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;
        let columns = self.game.state().board().columns();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < columns {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(digit @ '1'..='9') => {
                let column = digit as usize - '1' as usize;
                if column < columns {
                    self.selected_column = column;
                    self.drop_piece();
                }
            }
            KeyCode::Char('r') => {
                self.game.reset();
                self.selected_column = columns / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.game.drop_piece(self.selected_column) {
            Ok(_) => {
                let state = self.game.state();
                self.message = match state.outcome() {
                    GameOutcome::InProgress => None,
                    GameOutcome::Won(player) => Some(format!(
                        "{} connects four! Press 'r' for a new game.",
                        self.players.get(player).name
                    )),
                    GameOutcome::Tie => {
                        Some("Board is full. Press 'r' for a new game.".to_string())
                    }
                };
            }
            Err(MoveError::ColumnFull { .. }) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn { .. }) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        game_view::render(
            frame,
            self.game.state(),
            &self.players,
            self.selected_column,
            &self.message,
        );
    }
}
