//! Strategy vectors over two-player game graphs.
//!
//! - [`StrategyVector`] — one chosen outgoing edge per vertex of one player
//! - [`Play`] — the lasso two strategy vectors induce from a start vertex
//! - [`StrategyError`] — why a strategy could not be built or followed

mod error;
mod play;
mod vector;

pub use error::*;
pub use play::*;
pub use vector::*;
