use tracing::{debug, info};

use super::board::{Board, BoardError, MoveError};
use super::player::Player;
use super::win::is_winning_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Won(Player),
    Tie,
}

impl GameOutcome {
    /// Once decided, the game accepts no further moves
    pub fn is_decided(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

/// An accepted move: where the piece came to rest and whose it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub column: usize,
    pub row: usize,
    pub player: Player,
}

/// Snapshot of a game: board, player to move, outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: GameOutcome,
}

impl GameState {
    /// Create initial game state on the standard board
    pub fn initial() -> Self {
        GameState::from_board(Board::default())
    }

    pub fn with_board_size(columns: usize, rows: usize) -> Result<Self, BoardError> {
        Ok(GameState::from_board(Board::new(columns, rows)?))
    }

    fn from_board(board: Board) -> Self {
        GameState {
            board,
            current_player: Player::One, // Player 1 starts
            outcome: GameOutcome::InProgress,
        }
    }

    /// Player to move, or the winner once the game is won
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_decided()
    }

    /// Whether a drop into `column` would currently be accepted
    pub fn column_accepts_piece(&self, column: usize) -> bool {
        !self.is_terminal() && !self.board.is_column_full(column)
    }

    /// Get list of columns that still accept a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.board.columns())
            .filter(|&column| self.column_accepts_piece(column))
            .collect()
    }

    /// Apply a move and return the new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<(GameState, Placement), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let (board, row) = self.board.apply_move(column, player)?;

        // A move that fills the last slot and connects four is a win
        let (outcome, next_player) = if is_winning_move(&board, column, row) {
            (GameOutcome::Won(player), player)
        } else if board.is_full() {
            (GameOutcome::Tie, player)
        } else {
            (GameOutcome::InProgress, player.other())
        };

        let next = GameState {
            board,
            current_player: next_player,
            outcome,
        };
        Ok((next, Placement { column, row, player }))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Owns the single live [`GameState`] and is its only writer.
///
/// Every transition builds the next state in full before swapping it in,
/// so readers only ever see a complete snapshot.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
}

impl Game {
    pub fn new() -> Self {
        Game {
            state: GameState::initial(),
        }
    }

    pub fn with_board_size(columns: usize, rows: usize) -> Result<Self, BoardError> {
        Ok(Game {
            state: GameState::with_board_size(columns, rows)?,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Drop a piece for the player to move.
    ///
    /// On error the state is left exactly as it was.
    pub fn drop_piece(&mut self, column: usize) -> Result<Placement, MoveError> {
        let (next, placement) = match self.state.apply_move(column) {
            Ok(applied) => applied,
            Err(err) => {
                debug!(column, %err, "drop rejected");
                return Err(err);
            }
        };
        self.state = next;

        debug!(
            column = placement.column,
            row = placement.row,
            player = placement.player.number(),
            "piece dropped"
        );
        match self.state.outcome {
            GameOutcome::Won(player) => info!(player = player.number(), "game won"),
            GameOutcome::Tie => info!("game tied"),
            GameOutcome::InProgress => {}
        }

        Ok(placement)
    }

    /// Start over on an empty board of the same size
    pub fn reset(&mut self) {
        self.state = GameState::from_board(self.state.board.cleared());
        info!(
            columns = self.state.board.columns(),
            rows = self.state.board.rows(),
            "game reset"
        );
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
