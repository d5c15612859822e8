//! A* pathfinding over binary occupancy grids.
//!
//! The engine finds a shortest 4-directional, unit-cost path between two
//! cells of an [`OccupancyGrid`](gridstar_core::OccupancyGrid):
//!
//! - [`search`] runs one search with the default configuration and reports
//!   "no path" through a caller-supplied [`DiagnosticSink`].
//! - [`AstarSearch`] picks a frontier strategy via [`SearchConfig`] and can
//!   return a [`SearchReport`] with expansion counters.
//!
//! Any grid-like type can be searched by implementing [`AstarPather`].
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`AstarPather`] : [`Pather`] | heuristic estimate |
//!
//! Every search call owns its own frontier, visited set and node arena, so
//! independent calls may run in parallel on a shared grid.

mod astar;
mod config;
mod diagnostics;
mod distance;
mod frontier;
mod neighbors;
mod node;
mod traits;

pub use astar::{AstarSearch, SearchReport, SearchState, SearchStats, search};
pub use config::{FrontierKind, SearchConfig};
pub use diagnostics::{DiagnosticSink, LogSink, NullSink};
pub use distance::{euclidean, manhattan};
pub use frontier::{Frontier, HeapFrontier, LinearFrontier};
pub use neighbors::{CARDINAL, Neighbors};
pub use node::{NodeArena, NodeId, SearchNode};
pub use traits::{AstarPather, Pather};
