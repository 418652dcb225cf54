//! Two-color lock: colorings packed into bits.

use crate::core::{BitColoring, Coloring, LockConfig, Result, Selection};
use crate::graph::Action;

use super::{LockGame, LockLocation, LockMove};

impl LockGame<BitColoring> {
    /// Expand a two-color lock.
    ///
    /// `config.colors` is forced to 2. Fails with `HandExceedsHoles` when
    /// `config.hand > config.holes`, before anything is allocated.
    ///
    /// A monochromatic ring is absorbing: its only transition is a
    /// self-loop under action 0, and every other action has no transitions.
    /// Otherwise, for each rotation `a`, each recoloring of the *current*
    /// hand and each non-empty next hand there is a transition to
    /// `(recolor(rotate(coloring, a), selection, recoloring), next)`.
    pub fn binary(config: LockConfig) -> Result<Self> {
        let config = LockConfig { colors: 2, ..config };
        config.validate()?;
        let holes = config.holes;
        Self::assemble(config, move |from, actions, selections, recolorings| {
            binary_moves(holes, from, actions, selections, recolorings)
        })
    }
}

fn binary_moves(
    holes: usize,
    from: &LockLocation<BitColoring>,
    actions: &[Action],
    selections: &[Selection],
    recolorings: &[u32],
) -> Vec<LockMove<BitColoring>> {
    if from.coloring.is_monochromatic(holes) {
        return vec![(from.clone(), Action(0), from.clone())];
    }

    let mut moves = Vec::with_capacity(actions.len() * selections.len() * recolorings.len());
    for &action in actions {
        let rotated = from.coloring.rotate(action.amount(), holes);
        for recoloring in recolorings {
            let coloring = rotated.recolor(&from.selection, recoloring);
            for next in selections.iter().filter(|s| !s.is_empty()) {
                moves.push((from.clone(), action, LockLocation::new(coloring, next.clone())));
            }
        }
    }
    moves
}
