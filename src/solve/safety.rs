//! Controllable predecessor and the safety fixpoint built on it.
//!
//! `cpre(T)` holds the locations from which some single action sends every
//! successor into `T`. An action with no transitions from a location
//! satisfies that vacuously, so a location whose relation is defined only
//! for some actions is controllable through any of the others.
//!
//! The winning set is the greatest fixpoint of `W ↦ W ∩ cpre(W)` below the
//! target: the locations from which the controller can stay inside the
//! target forever. `W` never grows, so the loop ends after at most
//! `|locations|` shrinking steps.

use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;

use log::{debug, info, trace};

use super::stats::SolveStats;
use crate::graph::{GameGraph, LocationSet};

/// Locations with an action whose successors all lie in `target`.
#[must_use]
pub fn cpre<L>(graph: &GameGraph<L>, target: &LocationSet) -> LocationSet
where
    L: Clone + Eq + Hash + Debug,
{
    let actions = graph.actions().len();
    LocationSet::from_fn(graph.len(), |id| {
        (0..actions).any(|a| {
            graph
                .successors_at(id, a)
                .iter()
                .all(|&succ| target.contains(succ))
        })
    })
}

/// Greatest fixpoint of `W ∩ cpre(W)` contained in `target`.
#[must_use]
pub fn winning_set<L>(graph: &GameGraph<L>, target: &LocationSet) -> LocationSet
where
    L: Clone + Eq + Hash + Debug,
{
    SafetySolver::new(graph).winning_set(target)
}

/// Fixpoint solver that records `SolveStats`.
pub struct SafetySolver<'g, L> {
    graph: &'g GameGraph<L>,
    stats: SolveStats,
}

impl<'g, L> SafetySolver<'g, L>
where
    L: Clone + Eq + Hash + Debug,
{
    pub fn new(graph: &'g GameGraph<L>) -> Self {
        Self {
            graph,
            stats: SolveStats::default(),
        }
    }

    #[must_use]
    pub fn graph(&self) -> &'g GameGraph<L> {
        self.graph
    }

    /// Statistics of the last `winning_set` call.
    #[must_use]
    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// `cpre` with call counting.
    pub fn cpre(&mut self, target: &LocationSet) -> LocationSet {
        self.stats.cpre_calls += 1;
        cpre(self.graph, target)
    }

    /// Iterate `W = W ∩ cpre(W)` from `W = target` until it stops changing.
    pub fn winning_set(&mut self, target: &LocationSet) -> LocationSet {
        debug_assert_eq!(target.universe(), self.graph.len());
        let start = Instant::now();
        self.stats.reset();
        self.stats.initial_size = target.len();

        let mut current = target.clone();
        loop {
            let next = current.intersection(&self.cpre(&current));
            self.stats.iterations += 1;
            debug!(
                "fixpoint iteration {}: {} -> {} locations",
                self.stats.iterations,
                current.len(),
                next.len()
            );
            if next == current {
                break;
            }
            for id in current.iter().filter(|&id| !next.contains(id)) {
                trace!("pruned {:?}", self.graph.location(id));
            }
            current = next;
        }

        self.stats.final_size = current.len();
        self.stats.time_us = start.elapsed().as_micros() as u64;
        info!(
            "winning set: {} of {} target locations after {} iterations",
            self.stats.final_size, self.stats.initial_size, self.stats.iterations
        );
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Action, LocationId};

    /// a -0-> {b, c}, a -1-> d, b -0-> b, c -0-> d, c -1-> c; d has no moves.
    fn diamond() -> GameGraph<char> {
        GameGraph::new(
            vec!['a', 'b', 'c', 'd'],
            'a',
            vec![Action(0), Action(1)],
            vec![
                ('a', Action(0), 'b'),
                ('a', Action(0), 'c'),
                ('a', Action(1), 'd'),
                ('b', Action(0), 'b'),
                ('c', Action(0), 'd'),
                ('c', Action(1), 'c'),
            ],
        )
        .unwrap()
    }

    fn set(graph: &GameGraph<char>, members: &str) -> LocationSet {
        let chars: Vec<char> = members.chars().collect();
        graph.set_of(chars.iter())
    }

    #[test]
    fn test_cpre_existential_over_actions() {
        let g = diamond();
        // a via action 0, b via 0, c via 1, d vacuously.
        assert_eq!(cpre(&g, &set(&g, "abc")), set(&g, "abcd"));
    }

    #[test]
    fn test_cpre_vacuous_for_undefined_action() {
        let g = diamond();
        // b has no action-1 transitions, so it is controllable into anything.
        let result = cpre(&g, &LocationSet::empty(g.len()));
        assert_eq!(result, set(&g, "bd"));
    }

    #[test]
    fn test_cpre_universal_over_successors() {
        let g = diamond();
        // a -0-> c leaves {a, b}; a -1-> d leaves it too.
        assert!(!cpre(&g, &set(&g, "ab")).contains(LocationId(0)));
    }

    #[test]
    fn test_winning_set_prunes_to_fixpoint() {
        let g = diamond();
        let mut solver = SafetySolver::new(&g);
        let w = solver.winning_set(&set(&g, "ab"));

        assert_eq!(w, set(&g, "b"));
        assert_eq!(solver.stats().iterations, 2);
        assert_eq!(solver.stats().cpre_calls, 2);
        assert_eq!(solver.stats().initial_size, 2);
        assert_eq!(solver.stats().final_size, 1);
    }

    #[test]
    fn test_winning_set_keeps_closed_target() {
        let g = diamond();
        let target = set(&g, "abc");
        assert_eq!(winning_set(&g, &target), target);
    }

    #[test]
    fn test_winning_set_of_empty_target() {
        let g = diamond();
        let w = winning_set(&g, &LocationSet::empty(g.len()));
        assert!(w.is_empty());
    }

    #[test]
    fn test_no_actions_means_no_predecessors() {
        let g = GameGraph::new(vec![1, 2], 1, Vec::new(), Vec::new()).unwrap();
        assert!(cpre(&g, &LocationSet::full(2)).is_empty());
    }
}
