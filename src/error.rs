use crate::coordinate::Coordinate;
use thiserror::Error;

/// Errors surfaced by grid construction, grid access and the solvers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SolveError {
    /// The grid is empty or not rectangular, or contains a marker outside the known set.
    #[error("invalid grid: {0}")]
    InvalidGrid(#[from] GridDefect),

    /// The start lies outside the grid or on a wall.
    #[error("invalid start {start}: {reason}")]
    InvalidStart {
        start: Coordinate,
        reason: StartDefect,
    },

    /// The search exhausted every cell reachable from the start without touching the border.
    /// This is an expected outcome, not a defect of the input.
    #[error("no exit is reachable from {start}")]
    NoExitReachable { start: Coordinate },

    /// A stateful solver was queried out of order.
    #[error("invalid solver state: {0}")]
    InvalidState(StateViolation),

    /// A grid access outside `[0, rows) x [0, cols)`.
    #[error("{coordinate} is out of bounds for a {rows}x{cols} grid")]
    OutOfBounds {
        coordinate: Coordinate,
        rows: usize,
        cols: usize,
    },
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GridDefect {
    #[error("grid has no rows")]
    NoRows,
    #[error("grid has no columns")]
    NoColumns,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown marker {value} at ({row}, {col})")]
    UnknownMarker { row: usize, col: usize, value: i32 },
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum StartDefect {
    #[error("out of bounds")]
    OutOfBounds,
    #[error("start is a wall")]
    OnWall,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum StateViolation {
    #[error("search has not been run")]
    NotSearched,
    #[error("search found no exit")]
    NoPathFound,
    #[error("search has already been run")]
    AlreadySearched,
}
