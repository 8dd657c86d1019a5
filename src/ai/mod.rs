//! Computer opponents: the minimax engine with its window heuristic, and a
//! random baseline used by the integration tests.

mod agent;
mod heuristic;
mod minimax;
mod random;

pub use agent::Agent;
pub use heuristic::{Heuristic, WindowHeuristic};
pub use minimax::{MinimaxAgent, SearchResult};
pub use random::RandomAgent;
