use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::EngineError;
use crate::game::{lines, Board, GameState, Player};

use super::agent::Agent;
use super::heuristic::{Heuristic, WindowHeuristic};

/// Dominates every achievable heuristic sum (|heuristic| stays in the low
/// thousands on a 6x7 board). The remaining depth is added on top so a
/// shallower win outscores a deeper one.
const WIN_SCORE: i64 = 1_000_000;

/// The column the search settled on and the score backing that choice.
/// `column` is `None` only when the board had no legal columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i64,
}

/// Depth-limited minimax agent.
///
/// The search owns a board copy per simulated move, so it never mutates the
/// authoritative game. Equally scored root columns are drawn uniformly at
/// random; the RNG lives in the agent so tests can pin it with [`Self::seeded`].
pub struct MinimaxAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
    rng: StdRng,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        Self::with_heuristic(depth, Box::new(WindowHeuristic))
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent {
            depth,
            heuristic,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic tie-breaking for tests.
    pub fn seeded(depth: usize, seed: u64) -> Self {
        MinimaxAgent {
            depth,
            heuristic: Box::new(WindowHeuristic),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick the best column for `player` to play on `board`.
    ///
    /// Every legal column is scored by simulating the drop on a copy and
    /// recursing; the winner is drawn uniformly among the top-scoring columns.
    pub fn search(&mut self, board: &Board, player: Player) -> SearchResult {
        let legal = board.legal_columns();
        if legal.is_empty() {
            return SearchResult {
                column: None,
                score: 0,
            };
        }

        let depth = self.depth.max(1);
        let mut best = i64::MIN;
        let mut scored = Vec::with_capacity(legal.len());
        for &col in &legal {
            let mut next = *board;
            next.drop_piece(col, player.to_cell()).unwrap();
            let score = self.minimax(&next, depth - 1, player.other(), player);
            best = best.max(score);
            scored.push((col, score));
        }

        let tied: Vec<usize> = scored
            .iter()
            .filter(|&&(_, score)| score == best)
            .map(|&(col, _)| col)
            .collect();
        let column = tied[self.rng.random_range(0..tied.len())];

        SearchResult {
            column: Some(column),
            score: best,
        }
    }

    /// Recursive scoring of one position. `to_move` alternates each ply;
    /// `engine` stays the side the leaves are evaluated for.
    fn minimax(&self, board: &Board, depth: usize, to_move: Player, engine: Player) -> i64 {
        // Terminal checks come before the depth check: a finished game stays
        // finished no matter how much depth remains
        if lines::has_four(board, engine) {
            return WIN_SCORE + depth as i64;
        }
        if lines::has_four(board, engine.other()) {
            return -(WIN_SCORE + depth as i64);
        }

        let legal = board.legal_columns();
        if legal.is_empty() {
            return 0; // Drawn
        }

        if depth == 0 {
            return self.heuristic.evaluate(board, engine);
        }

        if to_move == engine {
            let mut best = i64::MIN;
            for &col in &legal {
                let mut next = *board;
                next.drop_piece(col, to_move.to_cell()).unwrap();
                best = best.max(self.minimax(&next, depth - 1, to_move.other(), engine));
            }
            best
        } else {
            let mut worst = i64::MAX;
            for &col in &legal {
                let mut next = *board;
                next.drop_piece(col, to_move.to_cell()).unwrap();
                worst = worst.min(self.minimax(&next, depth - 1, to_move.other(), engine));
            }
            worst
        }
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, EngineError> {
        if state.legal_actions().is_empty() {
            return Err(EngineError::NoLegalColumns);
        }
        self.search(state.board(), state.current_player())
            .column
            .ok_or(EngineError::NoLegalColumns)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
