//! Generic two-player game graphs.
//!
//! ## Overview
//!
//! A `GameGraph<L>` is a finite labeled transition system over locations
//! of type `L`: a location set, an action set, a transition relation and an
//! initial location. Construction validates that the initial location and
//! every transition lie inside the declared sets; after that the graph is
//! immutable.
//!
//! A graph may carry an observation function (location -> class) for
//! partial-information variants. Nothing in this crate solves those yet;
//! the solver in `solve` only reads the transition relation.
//!
//! ## Usage
//!
//! ```
//! use lock_games::graph::{Action, GameGraph};
//!
//! let graph = GameGraph::new(
//!     vec!["start", "end"],
//!     "start",
//!     vec![Action(0)],
//!     vec![("start", Action(0), "end")],
//! )
//! .unwrap();
//!
//! assert!(graph.contains_transition(&"start", Action(0), &"end"));
//! assert!(graph.successors(graph.id_of(&"end").unwrap(), Action(0)).is_empty());
//! ```

pub mod game_graph;
pub mod ids;
pub mod set;

pub use game_graph::GameGraph;
pub use ids::{Action, LocationId, ObservationId};
pub use set::LocationSet;
