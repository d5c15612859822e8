//! Errors raised while building an [`OccupancyGrid`](crate::OccupancyGrid).

use thiserror::Error;

/// Reasons a set of columns cannot form a rectangular grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no columns")]
    Empty,

    #[error("grid columns have no rows")]
    EmptyColumn,

    #[error("column {column} has {found} rows, expected {expected}")]
    Ragged {
        column: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid dimension {0} does not fit in an i32 coordinate")]
    TooLarge(usize),
}
