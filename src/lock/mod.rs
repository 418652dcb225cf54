//! Ring lock puzzles as game graphs.
//!
//! ## Overview
//!
//! A lock is a ring of N holes, each showing a color. Each turn the player
//! recolors the holes of the hand selected on the previous turn and picks
//! a new hand of n holes; the adversary rotates the ring by an unknown
//! amount (the action). The player wants a monochromatic ring.
//!
//! Locations are `(coloring, selection)` pairs. Two constructors expand a
//! `LockConfig` into the full transition relation:
//!
//! - `LockGame::binary`: two colors, bit-packed, monochromatic rings absorb
//! - `LockGame::colored`: k colors, monochromatic rings keep their coloring
//!
//! ## Target polarity
//!
//! `target()` holds the *non*-monochromatic locations and `player_target()`
//! the monochromatic ones. The winning set computed from `target()` is the
//! set where the adversary can keep the ring mixed forever, so the player
//! wins exactly when it is empty:
//!
//! ```
//! use lock_games::core::LockConfig;
//! use lock_games::lock::LockGame;
//!
//! let game = LockGame::binary(LockConfig::binary(2, 1)).unwrap();
//! assert_eq!(game.graph().len(), 12);
//! assert!(game.compute_winning_set().is_empty());
//! assert!(game.can_player_win());
//! ```

mod binary;
mod colored;

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::core::{Coloring, LockConfig, LockRng, Result, Selection, ValidationError, MAX_HOLES};
use crate::graph::{Action, GameGraph, LocationSet};
use crate::solve::{self, SafetySolver, SolveStats};

/// A game-graph vertex: the ring coloring plus the hand awaiting recoloring.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LockLocation<C> {
    pub coloring: C,
    /// Empty when no recoloring is pending.
    pub selection: Selection,
}

impl<C> LockLocation<C> {
    #[must_use]
    pub fn new(coloring: C, selection: Selection) -> Self {
        Self { coloring, selection }
    }
}

impl<C: Display> Display for LockLocation<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.coloring, self.selection)
    }
}

/// One `(source, action, target)` triple of a lock graph.
pub type LockMove<C> = (LockLocation<C>, Action, LockLocation<C>);

/// A lock instance expanded into its game graph, with its target partition.
#[derive(Clone, Debug)]
pub struct LockGame<C: Coloring> {
    config: LockConfig,
    graph: GameGraph<LockLocation<C>>,
    target: LocationSet,
    player_target: LocationSet,
}

impl<C: Coloring> LockGame<C> {
    /// Shared tail of both constructors: pick the initial coloring, build
    /// and validate the graph, and split locations by monochromaticity.
    fn assemble<F>(config: LockConfig, moves: F) -> Result<Self>
    where
        F: Fn(&LockLocation<C>, &[Action], &[Selection], &[C::Recoloring]) -> Vec<LockMove<C>>,
    {
        let holes = config.holes;
        let colorings = C::all(holes, config.colors);
        let selections = Selection::all(holes, config.hand);
        let recolorings = C::recolorings(config.hand, config.colors);
        let actions: Vec<Action> = Action::range(holes).collect();

        let mut rng = LockRng::new(config.seed);
        let initial_coloring = rng
            .choose(&colorings)
            .cloned()
            .ok_or(ValidationError::HoleCount { holes, max: MAX_HOLES })?;
        let initial = LockLocation::new(initial_coloring, Selection::empty());

        let locations: Vec<LockLocation<C>> = colorings
            .iter()
            .flat_map(|c| {
                selections
                    .iter()
                    .map(move |s| LockLocation::new(c.clone(), s.clone()))
            })
            .collect();

        log::info!(
            "expanding {}-color lock: {} holes, hand {}, {} locations",
            config.colors,
            holes,
            config.hand,
            locations.len()
        );

        let transitions: Vec<_> = locations
            .iter()
            .flat_map(|from| moves(from, &actions, &selections, &recolorings))
            .collect();

        let graph = GameGraph::new(locations, initial, actions, transitions)?;
        let player_target = graph.set_where(|l| l.coloring.is_monochromatic(holes));
        let target = player_target.complement();

        Ok(Self {
            config,
            graph,
            target,
            player_target,
        })
    }

    #[must_use]
    pub fn config(&self) -> &LockConfig {
        &self.config
    }

    #[must_use]
    pub fn graph(&self) -> &GameGraph<LockLocation<C>> {
        &self.graph
    }

    /// Non-monochromatic locations.
    #[must_use]
    pub fn target(&self) -> &LocationSet {
        &self.target
    }

    /// Monochromatic locations.
    #[must_use]
    pub fn player_target(&self) -> &LocationSet {
        &self.player_target
    }

    #[must_use]
    pub fn is_monochromatic(&self, location: &LockLocation<C>) -> bool {
        location.coloring.is_monochromatic(self.config.holes)
    }

    /// Controllable predecessor of an arbitrary location set.
    #[must_use]
    pub fn cpre(&self, target: &LocationSet) -> LocationSet {
        solve::cpre(&self.graph, target)
    }

    /// Greatest fixpoint of `W ∩ cpre(W)` inside `target()`.
    #[must_use]
    pub fn compute_winning_set(&self) -> LocationSet {
        solve::winning_set(&self.graph, &self.target)
    }

    /// Winning set together with solver statistics.
    #[must_use]
    pub fn solve(&self) -> (LocationSet, SolveStats) {
        let mut solver = SafetySolver::new(&self.graph);
        let winning = solver.winning_set(&self.target);
        (winning, solver.stats().clone())
    }

    /// True iff the winning set is empty.
    #[must_use]
    pub fn can_player_win(&self) -> bool {
        self.compute_winning_set().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BitColoring;

    #[test]
    fn test_location_display() {
        let location = LockLocation::new(BitColoring(0b10), Selection::from_holes(&[1]));
        assert_eq!(location.to_string(), "(0b10, (1))");
    }

    #[test]
    fn test_location_ordering_is_coloring_first() {
        let a = LockLocation::new(BitColoring(1), Selection::from_holes(&[3]));
        let b = LockLocation::new(BitColoring(2), Selection::empty());
        assert!(a < b);
    }
}
