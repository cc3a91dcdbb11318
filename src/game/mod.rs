//! Two-player game graphs.
//!
//! - [`Player`] — the two sides of the vertex bipartition
//! - [`GameGraph`] — what strategy vectors consume from a game
//! - [`GameAutomaton`] — petgraph-backed reference game with rewards

mod automaton;
mod graph;
mod player;

pub use automaton::*;
pub use graph::*;
pub use player::*;
