//! **gridstar-core**: core types for grid pathfinding.
//!
//! This crate provides the data the search engine reads: cell coordinates,
//! grid dimensions and a binary occupancy grid addressed as
//! `grid[column][row]`.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Coord, Dims};
pub use grid::{OccupancyGrid, PASSABLE};
