//! Core Connect Four rules: board representation, move application,
//! four-in-a-row detection, and the game state machine.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, BoardError, MoveError, Slot, COLUMNS, ROWS};
pub use player::Player;
pub use state::{Game, GameOutcome, GameState, Placement};
pub use win::is_winning_move;
