use crate::ai::{Agent, MinimaxAgent};
use crate::config::{AppConfig, DisplayConfig, FirstMove};
use crate::game::{DropError, GameOutcome, GameState, MoveError, Player, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    game_state: GameState,
    engine: MinimaxAgent,
    human: Player,
    display: DisplayConfig,
    first_move: FirstMove,
    mode_label: String,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let depth = config.engine.search_depth;
        let mut app = App {
            game_state: GameState::initial(),
            engine: MinimaxAgent::new(depth),
            human: Player::Red,
            display: config.display,
            first_move: config.game.first_move,
            mode_label: format!("Human vs Minimax (depth {depth})"),
            selected_column: COLS / 2,
            should_quit: false,
            message: None,
        };
        app.reset();
        app
    }

    /// Start a fresh game, re-rolling the first mover if configured to
    fn reset(&mut self) {
        let first = match self.first_move {
            FirstMove::Human => self.human,
            FirstMove::Ai => self.human.other(),
            FirstMove::Random => {
                if rand::rng().random_bool(0.5) {
                    self.human
                } else {
                    self.human.other()
                }
            }
        };
        self.game_state = GameState::starting_with(first);
        self.selected_column = COLS / 2;
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // The engine moves between frames so the board above stays current
            if self.engine_to_move() {
                self.engine_move();
                continue;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    fn engine_to_move(&self) -> bool {
        !self.game_state.is_terminal() && self.game_state.current_player() != self.human
    }

    fn engine_move(&mut self) {
        // A non-terminal game always offers a legal column
        let col = self
            .engine
            .select_action(&self.game_state)
            .expect("non-terminal game has legal columns");
        self.game_state
            .apply_move_mut(col)
            .expect("engine only picks legal columns");
        self.announce_outcome();
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.human_drop();
            }
            KeyCode::Char('r') => {
                self.reset();
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop the human's piece in the selected column
    fn human_drop(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game_state.apply_move_mut(self.selected_column) {
            Ok(()) => self.announce_outcome(),
            Err(MoveError::Drop(DropError::ColumnFull(_))) => {
                self.message = Some("Column is full! Pick another one.".to_string());
            }
            Err(MoveError::Drop(DropError::OutOfRange(_))) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    fn announce_outcome(&mut self) {
        if let Some(outcome) = self.game_state.outcome() {
            self.message = Some(match outcome {
                GameOutcome::Winner(player) if player == self.human => "You win!".to_string(),
                GameOutcome::Winner(_) => "The AI wins!".to_string(),
                GameOutcome::Draw => "It's a draw!".to_string(),
            });
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            self.human,
            &self.display,
            &self.mode_label,
        );
    }
}
