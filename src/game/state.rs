use super::board::DropError;
use super::{lines, Board, LegalColumns, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    Drop(#[from] DropError),

    #[error("game is already over")]
    GameOver,
}

/// Board plus whose turn it is and whether the game has ended.
///
/// Transitions are value-to-value: `apply_move` returns a new state and never
/// touches the old one, so the search can speculate freely on copies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state, Red to move
    pub fn initial() -> Self {
        Self::starting_with(Player::Red)
    }

    /// Create initial game state with a chosen first mover
    pub fn starting_with(player: Player) -> Self {
        GameState {
            board: Board::new(),
            current_player: player,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> LegalColumns {
        if self.is_terminal() {
            return LegalColumns::new();
        }
        self.board.legal_columns()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move in place (for the UI)
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board.drop_piece(column, self.current_player.to_cell())?;

        // Scan for a finished line, then for a full board
        if lines::has_four(&self.board, self.current_player) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = self.current_player.other();

        Ok(())
    }
}
