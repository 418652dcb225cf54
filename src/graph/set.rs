//! Dense location sets.
//!
//! Target and winning sets are subsets of one graph's locations. They are
//! stored as a membership bitmap over `LocationId`s plus a cached count, so
//! membership is O(1) and the fixpoint loop can compare sets cheaply.

use serde::{Deserialize, Serialize};

use super::ids::LocationId;

/// Subset of a graph's locations.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationSet {
    members: Vec<bool>,
    count: usize,
}

impl LocationSet {
    /// Empty subset of a universe of `universe` locations.
    #[must_use]
    pub fn empty(universe: usize) -> Self {
        Self {
            members: vec![false; universe],
            count: 0,
        }
    }

    /// Every location of the universe.
    #[must_use]
    pub fn full(universe: usize) -> Self {
        Self {
            members: vec![true; universe],
            count: universe,
        }
    }

    /// Locations whose id satisfies `pred`.
    #[must_use]
    pub fn from_fn(universe: usize, mut pred: impl FnMut(LocationId) -> bool) -> Self {
        let members: Vec<bool> = (0..universe as u32).map(|i| pred(LocationId(i))).collect();
        let count = members.iter().filter(|&&m| m).count();
        Self { members, count }
    }

    /// Locations listed by id. Ids outside the universe are ignored.
    #[must_use]
    pub fn from_ids(universe: usize, ids: impl IntoIterator<Item = LocationId>) -> Self {
        let mut set = Self::empty(universe);
        for id in ids {
            set.insert(id);
        }
        set
    }

    /// Size of the location space this set ranges over.
    #[must_use]
    pub fn universe(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, id: LocationId) -> bool {
        self.members.get(id.index()).copied().unwrap_or(false)
    }

    /// Add a location. Returns true if it was not already present.
    pub fn insert(&mut self, id: LocationId) -> bool {
        match self.members.get_mut(id.index()) {
            Some(slot) if !*slot => {
                *slot = true;
                self.count += 1;
                true
            }
            _ => false,
        }
    }

    /// Remove a location. Returns true if it was present.
    pub fn remove(&mut self, id: LocationId) -> bool {
        match self.members.get_mut(id.index()) {
            Some(slot) if *slot => {
                *slot = false;
                self.count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Member ids in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, m)| **m)
            .map(|(i, _)| LocationId(i as u32))
    }

    #[must_use]
    pub fn is_subset(&self, other: &LocationSet) -> bool {
        self.iter().all(|id| other.contains(id))
    }

    #[must_use]
    pub fn intersection(&self, other: &LocationSet) -> LocationSet {
        LocationSet::from_fn(self.universe(), |id| self.contains(id) && other.contains(id))
    }

    #[must_use]
    pub fn union(&self, other: &LocationSet) -> LocationSet {
        let universe = self.universe().max(other.universe());
        LocationSet::from_fn(universe, |id| self.contains(id) || other.contains(id))
    }

    /// Every location of the universe not in this set.
    #[must_use]
    pub fn complement(&self) -> LocationSet {
        LocationSet::from_fn(self.universe(), |id| !self.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<LocationId> {
        raw.iter().copied().map(LocationId).collect()
    }

    #[test]
    fn test_insert_remove_counts() {
        let mut set = LocationSet::empty(4);
        assert!(set.insert(LocationId(1)));
        assert!(!set.insert(LocationId(1)));
        assert!(set.insert(LocationId(3)));
        assert_eq!(set.len(), 2);

        assert!(set.remove(LocationId(1)));
        assert!(!set.remove(LocationId(1)));
        assert_eq!(set.len(), 1);
        assert!(!set.insert(LocationId(9)), "out of universe");
    }

    #[test]
    fn test_set_algebra() {
        let a = LocationSet::from_ids(5, ids(&[0, 1, 2]));
        let b = LocationSet::from_ids(5, ids(&[1, 2, 4]));

        assert_eq!(a.intersection(&b).iter().collect::<Vec<_>>(), ids(&[1, 2]));
        assert_eq!(a.union(&b).len(), 4);
        assert_eq!(a.complement().iter().collect::<Vec<_>>(), ids(&[3, 4]));
        assert!(a.intersection(&b).is_subset(&a));
        assert!(!a.is_subset(&b));
    }

    #[test]
    fn test_full_and_empty() {
        assert_eq!(LocationSet::full(3).len(), 3);
        assert!(LocationSet::empty(3).is_empty());
        assert_eq!(LocationSet::full(3).complement(), LocationSet::empty(3));
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a = LocationSet::from_ids(4, ids(&[3, 0]));
        let b = LocationSet::from_ids(4, ids(&[0, 3]));
        assert_eq!(a, b);
    }
}
