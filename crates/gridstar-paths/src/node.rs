use std::ops::Index;

use gridstar_core::Coord;

/// Stable handle of a [`SearchNode`] inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One visit to a cell during a search.
///
/// Costs start at zero and are filled in by the search loop with
/// [`set_costs`](Self::set_costs).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchNode {
    pub pos: Coord,
    /// Node this one was expanded from; `None` for the start node.
    pub parent: Option<NodeId>,
    /// Steps taken from the start.
    pub g: u32,
    /// Heuristic estimate of the remaining cost.
    pub h: f64,
    /// `g + h`, the frontier ordering key.
    pub f: f64,
}

impl SearchNode {
    /// Create a node at `pos` with zero costs.
    pub fn new(pos: Coord, parent: Option<NodeId>) -> Self {
        Self {
            pos,
            parent,
            g: 0,
            h: 0.0,
            f: 0.0,
        }
    }

    /// Set `g` and `h`, deriving `f`.
    #[inline]
    pub fn set_costs(&mut self, g: u32, h: f64) {
        self.g = g;
        self.h = h;
        self.f = f64::from(g) + h;
    }
}

/// Append-only storage for the nodes of one search.
///
/// Parents are always pushed before their children, so every parent chain
/// strictly decreases in index and terminates at a root.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `node` and return its handle. `node.parent` must already be in
    /// the arena; debug builds check this.
    pub fn push(&mut self, node: SearchNode) -> NodeId {
        let idx = self.nodes.len();
        if let Some(p) = node.parent {
            debug_assert!(p.index() < idx, "parent {p:?} is not in the arena");
        }
        self.nodes.push(node);
        NodeId(idx)
    }

    /// Positions from the root of `id`'s parent chain down to `id`.
    pub fn path_to(&self, id: NodeId) -> Vec<Coord> {
        let mut path = Vec::new();
        let mut cur = Some(id);
        while let Some(ci) = cur {
            let node = &self.nodes[ci.index()];
            path.push(node.pos);
            cur = node.parent;
        }
        path.reverse();
        path
    }
}

impl Index<NodeId> for NodeArena {
    type Output = SearchNode;

    #[inline]
    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }
}
