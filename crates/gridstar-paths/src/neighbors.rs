use gridstar_core::Coord;

use crate::node::{NodeId, SearchNode};
use crate::traits::Pather;

/// The four axis-aligned offsets, in expansion order: +col, -col, +row, -row.
///
/// The order decides which of several equal-cost paths a search returns.
pub const CARDINAL: [Coord; 4] = [
    Coord::new(1, 0),
    Coord::new(-1, 0),
    Coord::new(0, 1),
    Coord::new(0, -1),
];

/// Reusable neighbor expansion helper.
///
/// Turns the coordinates reported by a [`Pather`] into fresh
/// [`SearchNode`]s whose parent is the expanded node and whose costs are
/// still zero.
pub struct Neighbors {
    coords: Vec<Coord>,
    nodes: Vec<SearchNode>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            coords: Vec::with_capacity(4),
            nodes: Vec::with_capacity(4),
        }
    }

    /// Expand the node `parent` located at `at`.
    pub fn expand<P: Pather + ?Sized>(
        &mut self,
        pather: &P,
        parent: NodeId,
        at: Coord,
    ) -> &[SearchNode] {
        self.coords.clear();
        self.nodes.clear();
        pather.neighbors(at, &mut self.coords);
        self.nodes.extend(
            self.coords
                .iter()
                .map(|&c| SearchNode::new(c, Some(parent))),
        );
        &self.nodes
    }
}
