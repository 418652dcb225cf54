//! Hand selections: ordered sets of hole indices chosen for recoloring.
//!
//! A selection is either a full hand (n distinct indices, increasing) or
//! empty, meaning no recoloring is pending. The position of an index
//! within the selection matters: recoloring value `i` goes to hole
//! `selection[i]`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered hole indices. Inline up to 16, the ring size limit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Selection(pub SmallVec<[u8; 16]>);

impl Selection {
    /// The empty selection.
    #[must_use]
    pub fn empty() -> Self {
        Self(SmallVec::new())
    }

    /// Build a selection from hole indices, in the given order.
    #[must_use]
    pub fn from_holes(holes: &[u8]) -> Self {
        Self(SmallVec::from_slice(holes))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn contains(&self, hole: u8) -> bool {
        self.0.contains(&hole)
    }

    /// Iterate the selected holes in order.
    pub fn holes(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().map(|&h| h as usize)
    }

    /// All `hand`-combinations of `0..holes`, lexicographic.
    ///
    /// ```
    /// use lock_games::core::Selection;
    ///
    /// let combos = Selection::combinations(4, 2);
    /// assert_eq!(combos.len(), 6);
    /// assert_eq!(combos[0], Selection::from_holes(&[0, 1]));
    /// assert_eq!(combos[5], Selection::from_holes(&[2, 3]));
    /// ```
    #[must_use]
    pub fn combinations(holes: usize, hand: usize) -> Vec<Selection> {
        let mut out = Vec::new();
        if hand > holes {
            return out;
        }
        let mut current: SmallVec<[u8; 16]> = SmallVec::new();
        Self::extend_combinations(holes, hand, 0, &mut current, &mut out);
        out
    }

    fn extend_combinations(
        holes: usize,
        hand: usize,
        start: usize,
        current: &mut SmallVec<[u8; 16]>,
        out: &mut Vec<Selection>,
    ) {
        if current.len() == hand {
            out.push(Selection(current.clone()));
            return;
        }
        let remaining = hand - current.len();
        for hole in start..=holes - remaining {
            current.push(hole as u8);
            Self::extend_combinations(holes, hand, hole + 1, current, out);
            current.pop();
        }
    }

    /// Every selection a lock location may carry: the full hands in
    /// lexicographic order, followed by the empty selection.
    #[must_use]
    pub fn all(holes: usize, hand: usize) -> Vec<Selection> {
        let mut selections = Self::combinations(holes, hand);
        selections.push(Selection::empty());
        selections
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, hole) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", hole)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binomial(n: usize, k: usize) -> usize {
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    #[test]
    fn test_combination_counts() {
        for holes in 1..=8 {
            for hand in 0..=holes {
                assert_eq!(Selection::combinations(holes, hand).len(), binomial(holes, hand));
            }
        }
    }

    #[test]
    fn test_combinations_strictly_increasing() {
        for selection in Selection::combinations(6, 3) {
            assert!(selection.0.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_combinations_lexicographic() {
        let combos = Selection::combinations(5, 2);
        let mut sorted = combos.clone();
        sorted.sort();
        assert_eq!(combos, sorted);
    }

    #[test]
    fn test_all_appends_empty_last() {
        let all = Selection::all(3, 1);
        assert_eq!(all.len(), 4);
        assert!(all[3].is_empty());
        assert_eq!(all[0], Selection::from_holes(&[0]));
    }

    #[test]
    fn test_oversized_hand_has_no_combinations() {
        assert!(Selection::combinations(2, 3).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Selection::from_holes(&[1, 3]).to_string(), "(1, 3)");
        assert_eq!(Selection::empty().to_string(), "()");
    }
}
