//! Python bindings for the lock game solver.
//!
//! # Quick Start
//!
//! ```python
//! import lock_games
//!
//! game = lock_games.LockGame.binary(holes=4, hand=2, seed=42)
//! print(game.location_count(), game.transition_count())
//! print(game.can_player_win())
//!
//! mask = game.winning_mask()  # numpy bool array indexed by location id
//! ```

use pyo3::prelude::*;

mod py_lock;

pub use py_lock::*;

/// lock_games: game graphs and winning sets for ring lock puzzles.
#[pymodule]
fn lock_games(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyLockConfig>()?;
    m.add_class::<PyLockGame>()?;
    Ok(())
}
