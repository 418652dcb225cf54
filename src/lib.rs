//! # lock-games
//!
//! Game graphs and winning-set computation for the adversarial ring lock
//! puzzle.
//!
//! ## The puzzle
//!
//! N holes sit on a ring, each showing one of k colors. Each turn the
//! player recolors a hand of n holes chosen on the previous turn and picks
//! the next hand; an adversary then rotates the ring by an amount the
//! player does not control. The question is whether the player can force
//! a monochromatic ring no matter how the adversary rotates.
//!
//! ## Architecture
//!
//! - **Generic graphs**: `GameGraph<L>` is a validated, immutable labeled
//!   transition system. Its relation may be partial over (location, action).
//!
//! - **Two models, one shape**: `LockGame::binary` (bit-packed colorings)
//!   and `LockGame::colored` (tuple colorings) both produce a
//!   `GameGraph<LockLocation<_>>` plus a target partition.
//!
//! - **Safety fixpoint**: `solve::winning_set` iterates `W ∩ cpre(W)` from
//!   the target down to its greatest fixpoint.
//!
//! ## Modules
//!
//! - `core`: configuration, errors, RNG, colorings, selections, live state
//! - `graph`: game graphs, location ids and sets
//! - `lock`: lock puzzle models
//! - `solve`: controllable predecessor and winning sets
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod graph;
pub mod lock;
pub mod solve;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    BitColoring, Coloring, LockConfig, LockRng, LockSession, LockState, Phase, Selection,
    TupleColoring, ValidationError,
};

pub use crate::graph::{Action, GameGraph, LocationId, LocationSet, ObservationId};

pub use crate::lock::{LockGame, LockLocation};

pub use crate::solve::{cpre, winning_set, SafetySolver, SolveStats};

/// Install an `env_logger` logger for the binaries.
///
/// Logs at `info` unless `RUST_LOG` says otherwise. Calling it twice is a
/// no-op.
pub fn log() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .try_init();
}
