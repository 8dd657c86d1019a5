use crate::error::EngineError;
use crate::game::GameState;

/// Uniform interface for computer opponents.
pub trait Agent {
    /// Select a column to play for the side currently to move.
    ///
    /// Fails with [`EngineError::NoLegalColumns`] only when invoked on a board
    /// with nothing left to play, which the caller's terminal check should
    /// have ruled out.
    fn select_action(&mut self, state: &GameState) -> Result<usize, EngineError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
