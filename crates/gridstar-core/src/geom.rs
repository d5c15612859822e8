//! Geometry primitives: [`Coord`] and [`Dims`].
//!
//! A coordinate is a `(column, row)` pair. Columns form the outer dimension
//! of a grid and rows the inner one, so `grid[col][row]` addressing maps
//! directly onto these types.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A cell coordinate: `col` indexes the outer dimension, `row` the inner one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub col: i32,
    pub row: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { col: 0, row: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Return a coordinate shifted by (dcol, drow).
    #[inline]
    pub const fn shift(self, dcol: i32, drow: i32) -> Self {
        Self {
            col: self.col + dcol,
            row: self.row + drow,
        }
    }

    /// Whether `other` is exactly one axis-aligned step away.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        let d = other - self;
        d.col.abs() + d.row.abs() == 1
    }
}

// --- trait impls for Coord ---

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.col.cmp(&other.col).then(self.row.cmp(&other.row))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.col + rhs.col, self.row + rhs.row)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.col - rhs.col, self.row - rhs.row)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((col, row): (i32, i32)) -> Self {
        Self::new(col, row)
    }
}

impl From<Coord> for (i32, i32) {
    #[inline]
    fn from(c: Coord) -> Self {
        (c.col, c.row)
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// Grid dimensions. Valid coordinates lie in `[0, cols) × [0, rows)`.
///
/// Deserialized values go through [`Dims::new`], so negative sizes clamp to
/// zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawDims"))]
pub struct Dims {
    pub cols: i32,
    pub rows: i32,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDims {
    cols: i32,
    rows: i32,
}

#[cfg(feature = "serde")]
impl From<RawDims> for Dims {
    fn from(raw: RawDims) -> Self {
        Dims::new(raw.cols, raw.rows)
    }
}

impl Dims {
    /// Create new dimensions. Negative values are clamped to zero.
    #[inline]
    pub const fn new(cols: i32, rows: i32) -> Self {
        Self {
            cols: if cols < 0 { 0 } else { cols },
            rows: if rows < 0 { 0 } else { rows },
        }
    }

    /// Whether `c` is inside the half-open bounds.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.col >= 0 && c.col < self.cols && c.row >= 0 && c.row < self.rows
    }

    /// Number of cells.
    #[inline]
    pub fn len(self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Whether there are no cells.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.cols == 0 || self.rows == 0
    }

    /// Column-major flat index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.col as usize * self.rows as usize + c.row as usize)
    }

    /// Iterate all coordinates, column by column.
    pub fn iter(self) -> impl Iterator<Item = Coord> {
        (0..self.cols).flat_map(move |col| (0..self.rows).map(move |row| Coord::new(col, row)))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coord_round_trip() {
        let c = Coord::new(4, 9);
        let json = serde_json::to_string(&c).unwrap();
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn dims_deserialize_clamps_negative() {
        let d: Dims = serde_json::from_str(r#"{"cols":-1,"rows":3}"#).unwrap();
        assert_eq!(d, Dims::new(0, 3));
        assert_eq!(d.len(), 0);
        let d: Dims = serde_json::from_str(r#"{"cols":4,"rows":2}"#).unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), r#"{"cols":4,"rows":2}"#);
    }
}
