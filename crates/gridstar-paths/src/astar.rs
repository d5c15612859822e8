use std::collections::HashSet;

use gridstar_core::{Coord, OccupancyGrid};

use crate::config::{FrontierKind, SearchConfig};
use crate::diagnostics::DiagnosticSink;
use crate::frontier::{Frontier, HeapFrontier, LinearFrontier};
use crate::neighbors::Neighbors;
use crate::node::{NodeArena, SearchNode};
use crate::traits::AstarPather;

/// Terminal state of one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// The goal was reached and a path returned.
    Succeeded,
    /// The frontier ran dry; no path exists.
    Exhausted,
}

/// Counters collected during a search. Purely informational.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries removed from the frontier, the goal included.
    pub expanded: usize,
    /// Entries added to the frontier, the start included.
    pub pushed: usize,
    /// Neighbors discarded because a queued entry already had an equal or
    /// lower `g`.
    pub pruned: usize,
    /// Largest frontier size observed.
    pub peak_frontier: usize,
}

/// Result of [`AstarSearch::search_report`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    /// Start-to-goal path, both ends included. Empty when exhausted.
    pub path: Vec<Coord>,
    pub state: SearchState,
    pub stats: SearchStats,
}

/// A* search with a configurable frontier strategy.
///
/// The searcher holds no per-call state; every call builds its own frontier,
/// visited set and node arena.
#[derive(Debug, Clone, Copy, Default)]
pub struct AstarSearch {
    config: SearchConfig,
}

impl AstarSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Compute a shortest path from `start` to `end`.
    ///
    /// Returns the full path (including both endpoints), or an empty vector
    /// if no path exists, in which case `sink` receives one message naming
    /// the start location.
    pub fn search<P, S>(&self, pather: &P, start: Coord, end: Coord, sink: &mut S) -> Vec<Coord>
    where
        P: AstarPather + ?Sized,
        S: DiagnosticSink + ?Sized,
    {
        self.search_report(pather, start, end, sink).path
    }

    /// Like [`search`](Self::search), also returning counters and the
    /// terminal state.
    pub fn search_report<P, S>(
        &self,
        pather: &P,
        start: Coord,
        end: Coord,
        sink: &mut S,
    ) -> SearchReport
    where
        P: AstarPather + ?Sized,
        S: DiagnosticSink + ?Sized,
    {
        // The start cell itself is not checked.
        if start == end {
            return SearchReport {
                path: vec![start],
                state: SearchState::Succeeded,
                stats: SearchStats::default(),
            };
        }

        match self.config.frontier {
            FrontierKind::Linear => run(LinearFrontier::new(), pather, start, end, sink),
            FrontierKind::Heap => run(HeapFrontier::new(), pather, start, end, sink),
        }
    }
}

/// Compute a shortest path across `grid` from `start` to `end`.
///
/// Cells equal to [`PASSABLE`](gridstar_core::PASSABLE) are traversable and
/// moves go one step along an axis. Returns the path including both
/// endpoints, or an empty vector when the goal is unreachable; then
/// `display_message` is called exactly once.
///
/// ```
/// use gridstar_core::{Coord, Dims, OccupancyGrid};
/// use gridstar_paths::{NullSink, search};
///
/// let grid = OccupancyGrid::open(Dims::new(3, 3));
/// let path = search(&grid, (0, 0), (2, 2), &mut NullSink);
/// assert_eq!(path.len(), 5);
/// assert_eq!(path[0], Coord::new(0, 0));
/// ```
pub fn search<S>(
    grid: &OccupancyGrid,
    start: impl Into<Coord>,
    end: impl Into<Coord>,
    display_message: &mut S,
) -> Vec<Coord>
where
    S: DiagnosticSink + ?Sized,
{
    AstarSearch::default().search(grid, start.into(), end.into(), display_message)
}

fn run<F, P, S>(
    mut frontier: F,
    pather: &P,
    start: Coord,
    end: Coord,
    sink: &mut S,
) -> SearchReport
where
    F: Frontier,
    P: AstarPather + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    log::debug!("astar: searching {start} -> {end}");

    let mut arena = NodeArena::new();
    let mut visited: HashSet<Coord> = HashSet::new();
    let mut neighbors = Neighbors::new();
    let mut stats = SearchStats::default();

    let mut root = SearchNode::new(start, None);
    root.set_costs(0, pather.estimate(start, end));
    let root_id = arena.push(root);
    frontier.push(root_id, &root);
    stats.pushed = 1;
    stats.peak_frontier = 1;

    while let Some(ci) = frontier.pop_min() {
        let current = arena[ci];
        stats.expanded += 1;
        visited.insert(current.pos);
        log::trace!(
            "astar: expand {} g={} f={:.3}",
            current.pos,
            current.g,
            current.f
        );

        if current.pos == end {
            let path = arena.path_to(ci);
            log::debug!(
                "astar: reached {end} in {} steps ({} expanded, {} pruned)",
                path.len() - 1,
                stats.expanded,
                stats.pruned
            );
            return SearchReport {
                path,
                state: SearchState::Succeeded,
                stats,
            };
        }

        for &candidate in neighbors.expand(pather, ci, current.pos) {
            if visited.contains(&candidate.pos) {
                continue;
            }
            let mut n = candidate;
            n.set_costs(current.g + 1, pather.estimate(n.pos, end));

            // Only blocks new dominated entries; worse ones already queued stay.
            if frontier.has_entry_at_most(n.pos, n.g) {
                stats.pruned += 1;
                continue;
            }
            let id = arena.push(n);
            frontier.push(id, &n);
            stats.pushed += 1;
            stats.peak_frontier = stats.peak_frontier.max(frontier.len());
        }
    }

    log::debug!(
        "astar: no path {start} -> {end} ({} expanded)",
        stats.expanded
    );
    sink.display_message(&format!("Start location is {start}"));

    SearchReport {
        path: Vec::new(),
        state: SearchState::Exhausted,
        stats,
    }
}
