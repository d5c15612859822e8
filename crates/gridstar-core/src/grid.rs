//! The [`OccupancyGrid`] type: a rectangular grid of traversability markers.
//!
//! Cells hold an `i32`; [`PASSABLE`] marks a traversable cell and every other
//! value is blocked. Storage is column-major so that `grid[col][row]`
//! addressing is preserved. The grid owns plain data, so a shared reference
//! can be handed to several threads at once.

use std::ops::Index;

use crate::error::GridError;
use crate::geom::{Coord, Dims};

/// Marker value of a traversable cell.
pub const PASSABLE: i32 = 1;

/// A 2D binary occupancy grid indexed by `(column, row)`.
///
/// With the `serde` feature the grid (de)serializes as a list of columns and
/// goes through [`from_columns`](Self::from_columns) on the way in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<i32>>")
)]
pub struct OccupancyGrid {
    cells: Vec<i32>,
    dims: Dims,
}

impl OccupancyGrid {
    /// Create a grid of the given dimensions with every cell set to `value`.
    pub fn filled(dims: Dims, value: i32) -> Self {
        Self {
            cells: vec![value; dims.len()],
            dims,
        }
    }

    /// Create a grid with every cell traversable.
    pub fn open(dims: Dims) -> Self {
        Self::filled(dims, PASSABLE)
    }

    /// Build a grid from a list of columns, each a list of row values.
    ///
    /// Fails if there are no columns, the columns are empty, or they do not
    /// all have the same length.
    pub fn from_columns(columns: Vec<Vec<i32>>) -> Result<Self, GridError> {
        let Some(first) = columns.first() else {
            return Err(GridError::Empty);
        };
        let rows = first.len();
        if rows == 0 {
            return Err(GridError::EmptyColumn);
        }
        for (column, c) in columns.iter().enumerate() {
            if c.len() != rows {
                return Err(GridError::Ragged {
                    column,
                    expected: rows,
                    found: c.len(),
                });
            }
        }
        let cols =
            i32::try_from(columns.len()).map_err(|_| GridError::TooLarge(columns.len()))?;
        let rows_i = i32::try_from(rows).map_err(|_| GridError::TooLarge(rows))?;

        let cells = columns.into_iter().flatten().collect();
        Ok(Self {
            cells,
            dims: Dims::new(cols, rows_i),
        })
    }

    /// Grid dimensions.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Number of columns (outer dimension).
    #[inline]
    pub fn cols(&self) -> i32 {
        self.dims.cols
    }

    /// Number of rows (inner dimension).
    #[inline]
    pub fn rows(&self) -> i32 {
        self.dims.rows
    }

    /// Whether `c` is inside the grid bounds.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.dims.contains(c)
    }

    /// Read the cell at `c`. Returns `None` if `c` is out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<i32> {
        self.dims.index(c).and_then(|i| self.cells.get(i).copied())
    }

    /// Whether `c` is in bounds and holds the [`PASSABLE`] marker.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.at(c) == Some(PASSABLE)
    }

    /// Set the cell at `c`. Does nothing if `c` is out of bounds.
    pub fn set(&mut self, c: Coord, value: i32) {
        if let Some(cell) = self.dims.index(c).and_then(|i| self.cells.get_mut(i)) {
            *cell = value;
        }
    }

    /// Iterate columns as row slices, mirroring the `grid[col][row]` layout.
    pub fn columns(&self) -> impl Iterator<Item = &[i32]> {
        self.cells.chunks(self.dims.rows.max(1) as usize)
    }
}

impl Index<Coord> for OccupancyGrid {
    type Output = i32;

    /// Panics if `c` is out of bounds, like slice indexing.
    fn index(&self, c: Coord) -> &i32 {
        match self.dims.index(c).and_then(|i| self.cells.get(i)) {
            Some(v) => v,
            None => panic!(
                "coordinate {c} out of bounds for {}x{} grid",
                self.dims.cols, self.dims.rows
            ),
        }
    }
}

impl TryFrom<Vec<Vec<i32>>> for OccupancyGrid {
    type Error = GridError;

    fn try_from(columns: Vec<Vec<i32>>) -> Result<Self, GridError> {
        Self::from_columns(columns)
    }
}

impl From<OccupancyGrid> for Vec<Vec<i32>> {
    fn from(grid: OccupancyGrid) -> Self {
        grid.columns().map(<[i32]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_columns_keeps_col_row_layout() {
        // Two columns, three rows.
        let g = OccupancyGrid::from_columns(vec![vec![1, 0, 1], vec![0, 1, 1]]).unwrap();
        assert_eq!(g.cols(), 2);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.at(Coord::new(0, 1)), Some(0));
        assert_eq!(g.at(Coord::new(1, 1)), Some(1));
        assert_eq!(g[Coord::new(1, 0)], 0);
        assert_eq!(g.at(Coord::new(2, 0)), None);
    }

    #[test]
    fn from_columns_rejects_malformed() {
        assert_eq!(OccupancyGrid::from_columns(vec![]), Err(GridError::Empty));
        assert_eq!(
            OccupancyGrid::from_columns(vec![vec![], vec![]]),
            Err(GridError::EmptyColumn)
        );
        assert_eq!(
            OccupancyGrid::from_columns(vec![vec![1, 1], vec![1]]),
            Err(GridError::Ragged {
                column: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn passable_marker_only() {
        let g = OccupancyGrid::from_columns(vec![vec![1, 2, 0, -1]]).unwrap();
        assert!(g.is_passable(Coord::new(0, 0)));
        assert!(!g.is_passable(Coord::new(0, 1)));
        assert!(!g.is_passable(Coord::new(0, 2)));
        assert!(!g.is_passable(Coord::new(0, 3)));
        assert!(!g.is_passable(Coord::new(0, 4)));
    }

    #[test]
    fn set_and_columns() {
        let mut g = OccupancyGrid::open(Dims::new(2, 2));
        g.set(Coord::new(1, 0), 0);
        g.set(Coord::new(5, 5), 0); // out of bounds is ignored
        let cols: Vec<&[i32]> = g.columns().collect();
        assert_eq!(cols, vec![&[1, 1][..], &[0, 1][..]]);
    }

    #[test]
    fn columns_convert_both_ways() {
        let cols = vec![vec![1, 0, 1], vec![0, 1, 1]];
        let g = OccupancyGrid::try_from(cols.clone()).unwrap();
        let back: Vec<Vec<i32>> = g.into();
        assert_eq!(back, cols);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds_panics() {
        let g = OccupancyGrid::open(Dims::new(1, 1));
        let _ = g[Coord::new(1, 0)];
    }

    #[test]
    fn grid_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OccupancyGrid>();
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = OccupancyGrid::from_columns(vec![vec![1, 0], vec![1, 1]]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "[[1,0],[1,1]]");
        let back: OccupancyGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(serde_json::from_str::<OccupancyGrid>("[]").is_err());
        assert!(serde_json::from_str::<OccupancyGrid>("[[],[]]").is_err());
        assert!(serde_json::from_str::<OccupancyGrid>("[[1,1],[1]]").is_err());
        // The raw storage layout is not accepted.
        assert!(
            serde_json::from_str::<OccupancyGrid>(r#"{"cells":[1],"dims":{"cols":4,"rows":4}}"#)
                .is_err()
        );
    }
}
