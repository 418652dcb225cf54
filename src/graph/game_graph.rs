//! Validated, immutable labeled transition systems.
//!
//! Locations are interned into a flat `Vec` and referenced by
//! `LocationId`. Transitions are stored as one sorted successor list per
//! (location, action) pair. The relation does not have to be total: a pair
//! with no transitions simply has an empty list.

use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, info};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::ids::{Action, LocationId, ObservationId};
use super::set::LocationSet;
use crate::core::error::{Result, ValidationError};

/// Finite transition system with a distinguished initial location and an
/// optional observation function.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "L: Serialize", deserialize = "L: Deserialize<'de>"))]
pub struct GameGraph<L> {
    locations: Vec<L>,

    /// Reverse lookup, rebuilt after deserialization.
    #[serde(skip)]
    index: FxHashMap<L, LocationId>,

    initial: LocationId,

    actions: Vec<Action>,

    #[serde(skip)]
    action_index: FxHashMap<Action, usize>,

    /// `successors[location][action_idx]`, sorted and deduplicated.
    successors: Vec<Vec<Vec<LocationId>>>,

    transition_count: usize,

    /// Observation class per location, when attached.
    observations: Option<Vec<ObservationId>>,
}

impl<L> GameGraph<L>
where
    L: Clone + Eq + Hash + Debug,
{
    /// Build and validate a graph.
    ///
    /// Duplicate locations, actions and transitions collapse. Fails when
    /// `initial` is not a location, or when some transition's source,
    /// action or target lies outside `locations x actions x locations`.
    pub fn new<I>(locations: Vec<L>, initial: L, actions: Vec<Action>, transitions: I) -> Result<Self>
    where
        I: IntoIterator<Item = (L, Action, L)>,
    {
        let mut index: FxHashMap<L, LocationId> = FxHashMap::default();
        let mut unique: Vec<L> = Vec::with_capacity(locations.len());
        for location in locations {
            if !index.contains_key(&location) {
                index.insert(location.clone(), LocationId(unique.len() as u32));
                unique.push(location);
            }
        }

        let initial = *index
            .get(&initial)
            .ok_or_else(|| ValidationError::InitialNotInLocations {
                initial: format!("{:?}", initial),
            })?;

        let mut action_index: FxHashMap<Action, usize> = FxHashMap::default();
        let mut unique_actions: Vec<Action> = Vec::with_capacity(actions.len());
        for action in actions {
            if !action_index.contains_key(&action) {
                action_index.insert(action, unique_actions.len());
                unique_actions.push(action);
            }
        }

        let mut successors: Vec<Vec<Vec<LocationId>>> =
            vec![vec![Vec::new(); unique_actions.len()]; unique.len()];

        for (from, action, to) in transitions {
            let (Some(&src), Some(&a), Some(&dst)) =
                (index.get(&from), action_index.get(&action), index.get(&to))
            else {
                return Err(ValidationError::TransitionOutOfDomain {
                    from: format!("{:?}", from),
                    action: action.to_string(),
                    to: format!("{:?}", to),
                });
            };
            successors[src.index()][a].push(dst);
        }

        let mut transition_count = 0;
        for per_action in &mut successors {
            for list in per_action.iter_mut() {
                list.sort_unstable();
                list.dedup();
                transition_count += list.len();
            }
        }

        info!(
            "game graph: {} locations, {} actions, {} transitions",
            unique.len(),
            unique_actions.len(),
            transition_count
        );

        Ok(Self {
            locations: unique,
            index,
            initial,
            actions: unique_actions,
            action_index,
            successors,
            transition_count,
            observations: None,
        })
    }

    /// Attach an observation function.
    ///
    /// The map must assign a class to every location, so that the classes
    /// partition the location set. Entries for unknown locations are ignored.
    pub fn with_observations(mut self, observations: &FxHashMap<L, ObservationId>) -> Result<Self> {
        let mut classes = Vec::with_capacity(self.locations.len());
        for location in &self.locations {
            let class = observations
                .get(location)
                .ok_or_else(|| ValidationError::ObservationMissing {
                    location: format!("{:?}", location),
                })?;
            classes.push(*class);
        }
        self.observations = Some(classes);
        Ok(self)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// All locations, indexed by `LocationId`.
    #[must_use]
    pub fn locations(&self) -> &[L] {
        &self.locations
    }

    #[must_use]
    pub fn location(&self, id: LocationId) -> &L {
        &self.locations[id.index()]
    }

    #[must_use]
    pub fn id_of(&self, location: &L) -> Option<LocationId> {
        self.index.get(location).copied()
    }

    #[must_use]
    pub fn initial(&self) -> &L {
        self.location(self.initial)
    }

    #[must_use]
    pub fn initial_id(&self) -> LocationId {
        self.initial
    }

    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Number of distinct `(source, action, target)` triples.
    #[must_use]
    pub fn transition_count(&self) -> usize {
        self.transition_count
    }

    #[must_use]
    pub fn contains_transition(&self, from: &L, action: Action, to: &L) -> bool {
        match (self.id_of(from), self.id_of(to)) {
            (Some(src), Some(dst)) => self.successors(src, action).binary_search(&dst).is_ok(),
            _ => false,
        }
    }

    /// Targets reachable from `from` under `action`. Empty when the pair has
    /// no transitions or the action is unknown.
    #[must_use]
    pub fn successors(&self, from: LocationId, action: Action) -> &[LocationId] {
        match self.action_index.get(&action) {
            Some(&a) => self.successors_at(from, a),
            None => &[],
        }
    }

    /// Successor list by action position in `actions()`.
    #[inline]
    #[must_use]
    pub fn successors_at(&self, from: LocationId, action_idx: usize) -> &[LocationId] {
        &self.successors[from.index()][action_idx]
    }

    /// Every transition as `(source, action, target)`.
    pub fn transitions(&self) -> impl Iterator<Item = (&L, Action, &L)> + '_ {
        self.successors.iter().enumerate().flat_map(move |(src, per_action)| {
            per_action.iter().enumerate().flat_map(move |(a, list)| {
                list.iter()
                    .map(move |dst| (&self.locations[src], self.actions[a], self.location(*dst)))
            })
        })
    }

    #[must_use]
    pub fn has_observations(&self) -> bool {
        self.observations.is_some()
    }

    /// Observation class of `location`, if an observation function is attached.
    #[must_use]
    pub fn observation(&self, location: &L) -> Option<ObservationId> {
        let id = self.id_of(location)?;
        self.observations.as_ref().map(|classes| classes[id.index()])
    }

    /// Locations satisfying `pred`.
    #[must_use]
    pub fn set_where(&self, pred: impl Fn(&L) -> bool) -> LocationSet {
        LocationSet::from_fn(self.len(), |id| pred(self.location(id)))
    }

    /// Set of the given locations. Unknown locations are skipped.
    #[must_use]
    pub fn set_of<'a>(&self, locations: impl IntoIterator<Item = &'a L>) -> LocationSet
    where
        L: 'a,
    {
        LocationSet::from_ids(self.len(), locations.into_iter().filter_map(|l| self.id_of(l)))
    }

    /// Locations of a set, in id order.
    pub fn members<'a>(&'a self, set: &'a LocationSet) -> impl Iterator<Item = &'a L> + 'a {
        set.iter().map(move |id| self.location(id))
    }

    /// Materialize a set as owned locations.
    #[must_use]
    pub fn to_hash_set(&self, set: &LocationSet) -> FxHashSet<L> {
        self.members(set).cloned().collect()
    }
}

impl<L> GameGraph<L>
where
    L: Clone + Eq + Hash + Debug + Serialize + DeserializeOwned,
{
    /// Encode the graph with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| ValidationError::Snapshot {
            message: e.to_string(),
        })
    }

    /// Decode a graph written by `to_bytes`, re-checking every invariant.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut graph: Self = bincode::deserialize(bytes).map_err(|e| ValidationError::Snapshot {
            message: e.to_string(),
        })?;
        graph.reindex()?;
        debug!("decoded game graph with {} locations", graph.len());
        Ok(graph)
    }

    fn reindex(&mut self) -> Result<()> {
        let snapshot_error = |message: &str| ValidationError::Snapshot {
            message: message.to_string(),
        };

        self.index = FxHashMap::default();
        for (i, location) in self.locations.iter().enumerate() {
            if self.index.insert(location.clone(), LocationId(i as u32)).is_some() {
                return Err(snapshot_error("duplicate location"));
            }
        }
        self.action_index = FxHashMap::default();
        for (i, action) in self.actions.iter().enumerate() {
            if self.action_index.insert(*action, i).is_some() {
                return Err(snapshot_error("duplicate action"));
            }
        }

        if self.initial.index() >= self.locations.len() {
            return Err(ValidationError::InitialNotInLocations {
                initial: self.initial.to_string(),
            });
        }
        if self.successors.len() != self.locations.len()
            || self.successors.iter().any(|per_action| per_action.len() != self.actions.len())
        {
            return Err(snapshot_error("successor table does not match locations x actions"));
        }

        let mut count = 0;
        for (src, per_action) in self.successors.iter().enumerate() {
            for (a, list) in per_action.iter().enumerate() {
                if let Some(dst) = list.iter().find(|dst| dst.index() >= self.locations.len()) {
                    return Err(ValidationError::TransitionOutOfDomain {
                        from: format!("{:?}", self.locations[src]),
                        action: self.actions[a].to_string(),
                        to: dst.to_string(),
                    });
                }
                if list.windows(2).any(|w| w[0] >= w[1]) {
                    return Err(snapshot_error("successor list is not sorted"));
                }
                count += list.len();
            }
        }
        if count != self.transition_count {
            return Err(snapshot_error("transition count mismatch"));
        }
        if let Some(classes) = &self.observations {
            if classes.len() != self.locations.len() {
                return Err(snapshot_error("observation table does not cover every location"));
            }
        }
        Ok(())
    }
}
