//! Core Connect Four game logic: board representation, four-in-a-row
//! scanning, player types, and game state machine with immutable transitions.

mod board;
pub mod lines;
mod player;
mod state;

pub use board::{Board, Cell, DropError, LegalColumns, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError};
