use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::EngineError;
use crate::game::GameState;

use super::agent::Agent;

/// An agent that selects uniformly at random from the legal columns. Serves
/// as the baseline opponent in the engine's integration tests.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, EngineError> {
        let actions = state.legal_actions();
        if actions.is_empty() {
            return Err(EngineError::NoLegalColumns);
        }
        Ok(actions[self.rng.random_range(0..actions.len())])
    }

    fn name(&self) -> &str {
        "Random"
    }
}
