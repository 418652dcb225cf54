//! Core lock puzzle types: configuration, errors, RNG, colorings,
//! selections, and the live puzzle state.
//!
//! Nothing here knows about game graphs. The `lock` module combines these
//! pieces into transition relations.

pub mod coloring;
pub mod config;
pub mod error;
pub mod rng;
pub mod selection;
pub mod state;

pub use coloring::{BitColoring, Coloring, TupleColoring};
pub use config::{LockConfig, MAX_COLORS, MAX_HOLES};
pub use error::{Result, ValidationError};
pub use rng::{LockRng, LockRngState};
pub use selection::Selection;
pub use state::{LockSession, LockState, Phase};
