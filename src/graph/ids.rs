//! Index and label types for game graphs.

use serde::{Deserialize, Serialize};

/// Dense index of a location within one `GameGraph`.
///
/// Ids are assigned in location insertion order and are only meaningful
/// for the graph that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LocationId(pub u32);

impl LocationId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Loc({})", self.0)
    }
}

/// A move label. In lock games this is the rotation amount in `[0, N)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action(pub u16);

impl Action {
    #[must_use]
    pub const fn new(amount: u16) -> Self {
        Self(amount)
    }

    /// Rotation amount.
    #[inline]
    #[must_use]
    pub const fn amount(self) -> usize {
        self.0 as usize
    }

    /// Actions `0..count`.
    pub fn range(count: usize) -> impl Iterator<Item = Action> {
        (0..count as u16).map(Action)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Observation class of a location, for partial-information variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObservationId(pub u32);

impl std::fmt::Display for ObservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Obs({})", self.0)
    }
}
