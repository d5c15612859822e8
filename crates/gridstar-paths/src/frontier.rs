//! Open-set strategies for the search loop.
//!
//! Both strategies select the entry with the smallest `f`, breaking ties by
//! insertion order, and answer the same dominance query. They therefore
//! produce identical searches; [`HeapFrontier`] just does it in
//! logarithmic time.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use gridstar_core::Coord;

use crate::node::{NodeId, SearchNode};

/// The open set of an A* search.
pub trait Frontier {
    /// Add `node`, stored in the arena under `id`.
    fn push(&mut self, id: NodeId, node: &SearchNode);

    /// Remove and return the entry with the smallest `f`. Among equal `f`,
    /// the earliest inserted entry wins.
    fn pop_min(&mut self) -> Option<NodeId>;

    /// Whether some entry at `pos` has a `g` of at most `g`.
    fn has_entry_at_most(&self, pos: Coord, g: u32) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    id: NodeId,
    pos: Coord,
    g: u32,
    f: f64,
}

impl Entry {
    fn new(id: NodeId, node: &SearchNode) -> Self {
        Self {
            id,
            pos: node.pos,
            g: node.g,
            f: node.f,
        }
    }
}

// ---------------------------------------------------------------------------
// LinearFrontier
// ---------------------------------------------------------------------------

/// A plain list, stably sorted by `f` before every removal.
///
/// Dominance checks scan the whole list. Quadratic overall, fine for small
/// grids.
#[derive(Debug, Default)]
pub struct LinearFrontier {
    entries: Vec<Entry>,
}

impl LinearFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LinearFrontier {
    fn push(&mut self, id: NodeId, node: &SearchNode) {
        self.entries.push(Entry::new(id, node));
    }

    fn pop_min(&mut self) -> Option<NodeId> {
        if self.entries.is_empty() {
            return None;
        }
        // `sort_by` is stable: equal keys keep insertion order.
        self.entries.sort_by(|a, b| a.f.total_cmp(&b.f));
        Some(self.entries.remove(0).id)
    }

    fn has_entry_at_most(&self, pos: Coord, g: u32) -> bool {
        self.entries.iter().any(|e| e.pos == pos && e.g <= g)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

// ---------------------------------------------------------------------------
// HeapFrontier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    entry: Entry,
    seq: u64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, seq) first.
        other
            .entry
            .f
            .total_cmp(&self.entry.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A binary heap keyed by `(f, insertion sequence)`, plus a per-position
/// record of the `g` values currently queued.
///
/// Dominated duplicates stay queued, exactly as in [`LinearFrontier`].
#[derive(Debug, Default)]
pub struct HeapFrontier {
    heap: BinaryHeap<HeapEntry>,
    queued_g: HashMap<Coord, Vec<u32>>,
    next_seq: u64,
}

impl HeapFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for HeapFrontier {
    fn push(&mut self, id: NodeId, node: &SearchNode) {
        let entry = Entry::new(id, node);
        self.queued_g.entry(entry.pos).or_default().push(entry.g);
        self.heap.push(HeapEntry {
            entry,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    fn pop_min(&mut self) -> Option<NodeId> {
        let HeapEntry { entry, .. } = self.heap.pop()?;
        if let Some(gs) = self.queued_g.get_mut(&entry.pos) {
            if let Some(i) = gs.iter().position(|&g| g == entry.g) {
                gs.swap_remove(i);
            }
            if gs.is_empty() {
                self.queued_g.remove(&entry.pos);
            }
        }
        Some(entry.id)
    }

    fn has_entry_at_most(&self, pos: Coord, g: u32) -> bool {
        self.queued_g
            .get(&pos)
            .is_some_and(|gs| gs.iter().any(|&q| q <= g))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
