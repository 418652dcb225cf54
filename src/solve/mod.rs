//! Winning-set computation over game graphs.
//!
//! - `cpre`: controllable predecessor of a location set
//! - `winning_set`: greatest fixpoint of `W ∩ cpre(W)` inside a target
//! - `SafetySolver`: the same fixpoint with `SolveStats`
//!
//! Both operations are total over any valid `GameGraph` and never mutate it.

pub mod safety;
pub mod stats;

pub use safety::{cpre, winning_set, SafetySolver};
pub use stats::SolveStats;
