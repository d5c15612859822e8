use gridstar_core::{Coord, OccupancyGrid};

use crate::distance::euclidean;
use crate::neighbors::CARDINAL;

/// Minimal pathfinding interface. Provides neighbor enumeration.
pub trait Pather {
    /// Append traversable neighbors of `c` into `buf`, in a fixed order.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);
}

/// Pather with a heuristic for A*. Every step costs exactly 1.
pub trait AstarPather: Pather {
    /// Heuristic estimate of the distance from `from` to `to`.
    /// Must never overestimate the true step count (admissible).
    fn estimate(&self, from: Coord, to: Coord) -> f64;
}

impl Pather for OccupancyGrid {
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        for d in CARDINAL {
            let n = c + d;
            // Out of bounds reads as blocked.
            if self.is_passable(n) {
                buf.push(n);
            }
        }
    }
}

impl AstarPather for OccupancyGrid {
    fn estimate(&self, from: Coord, to: Coord) -> f64 {
        euclidean(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_core::Dims;

    #[test]
    fn grid_neighbors_follow_fixed_order() {
        let g = OccupancyGrid::open(Dims::new(3, 3));
        let mut buf = Vec::new();
        g.neighbors(Coord::new(1, 1), &mut buf);
        assert_eq!(
            buf,
            vec![
                Coord::new(2, 1),
                Coord::new(0, 1),
                Coord::new(1, 2),
                Coord::new(1, 0),
            ]
        );
    }

    #[test]
    fn grid_neighbors_skip_blocked_and_out_of_bounds() {
        let mut g = OccupancyGrid::open(Dims::new(2, 2));
        g.set(Coord::new(1, 0), 0);
        let mut buf = Vec::new();
        g.neighbors(Coord::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Coord::new(0, 1)]);
    }

    #[test]
    fn grid_estimate_is_euclidean() {
        let g = OccupancyGrid::open(Dims::new(5, 5));
        assert_eq!(g.estimate(Coord::new(0, 0), Coord::new(3, 4)), 5.0);
        assert_eq!(g.estimate(Coord::new(2, 2), Coord::new(2, 2)), 0.0);
    }
}
