//! k-color lock: colorings as tuples.

use smallvec::SmallVec;

use crate::core::{Coloring, LockConfig, Result, Selection, TupleColoring};
use crate::graph::Action;

use super::{LockGame, LockLocation, LockMove};

impl LockGame<TupleColoring> {
    /// Expand a lock over `config.colors` colors.
    ///
    /// Monochromatic here means equal *sequential* neighbours; the last
    /// hole is not compared with the first. A monochromatic ring keeps its
    /// coloring under every action while the hand moves to any selection.
    /// Any other ring is rotated, the current hand takes every recoloring
    /// tuple, and the next hand is any selection. Unlike the binary model,
    /// the empty selection is a valid next hand here.
    pub fn colored(config: LockConfig) -> Result<Self> {
        config.validate()?;
        let holes = config.holes;
        Self::assemble(config, move |from, actions, selections, recolorings| {
            colored_moves(holes, from, actions, selections, recolorings)
        })
    }
}

fn colored_moves(
    holes: usize,
    from: &LockLocation<TupleColoring>,
    actions: &[Action],
    selections: &[Selection],
    recolorings: &[SmallVec<[u8; 16]>],
) -> Vec<LockMove<TupleColoring>> {
    if from.coloring.is_monochromatic(holes) {
        let mut moves = Vec::with_capacity(actions.len() * selections.len());
        for &action in actions {
            for next in selections {
                moves.push((
                    from.clone(),
                    action,
                    LockLocation::new(from.coloring.clone(), next.clone()),
                ));
            }
        }
        return moves;
    }

    let mut moves = Vec::with_capacity(actions.len() * recolorings.len() * selections.len());
    for &action in actions {
        let rotated = from.coloring.rotate(action.amount(), holes);
        for recoloring in recolorings {
            let coloring = rotated.recolor(&from.selection, recoloring);
            for next in selections {
                moves.push((from.clone(), action, LockLocation::new(coloring.clone(), next.clone())));
            }
        }
    }
    moves
}
