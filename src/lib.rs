//! # maze_exit
//!
//! Finds a shortest way out of a grid maze. Starting from a free cell, a
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) over the
//! 4-neighbourhood stops at the first cell discovered on the outer ring of the grid. The path can
//! be returned as a sequence of [Coordinate]s ([find_path]) or stamped into the grid as 1-based
//! step numbers ([mark_path], [solve]).
//!
//! Neighbours are always expanded in the order left, up, right, down ([NEIGHBOUR_ORDER]), so the
//! same grid and start always give the same path even when several shortest paths exist.
//! Connected components of free cells are kept alongside the grid to report an unreachable exit
//! without flood-filling.
pub mod bfs;
pub mod coordinate;
pub mod error;
pub mod maze_grid;
pub mod maze_solver;
pub mod solver;

pub use crate::coordinate::Coordinate;
pub use crate::error::SolveError;
pub use crate::maze_grid::{Cell, MazeGrid};
pub use crate::maze_solver::{MazeSolver, SolverState};
pub use crate::solver::bfs::BfsExitFinder;
pub use crate::solver::ExitFinder;

use itertools::Itertools;

/// `(row, col)` offsets in the order neighbours are expanded: left, up, right, down.
pub const NEIGHBOUR_ORDER: [(i32, i32); 4] = [(0, -1), (-1, 0), (0, 1), (1, 0)];

/// Checks that every consecutive pair of the path is orthogonally adjacent.
pub fn path_is_connected(path: &[Coordinate]) -> bool {
    path.iter()
        .tuple_windows()
        .all(|(a, b)| a.manhattan_distance(b) == 1)
}

/// Computes a shortest path from `start` to the nearest reachable border cell. The grid is not
/// modified. The first coordinate is `start`, the last one the exit.
pub fn find_path(grid: &MazeGrid, start: Coordinate) -> Result<Vec<Coordinate>, SolveError> {
    BfsExitFinder::new().find_path(grid, start)
}

/// Stamps a shortest path from `start` to the nearest reachable border cell into `grid` and
/// returns its length. The start receives step 1 and the exit the returned length.
pub fn mark_path(grid: &mut MazeGrid, start: Coordinate) -> Result<usize, SolveError> {
    BfsExitFinder::new().mark_path(grid, start)
}

/// Creates a stateful [MazeSolver] for in-place marking.
pub fn solve(grid: &mut MazeGrid, start: Coordinate) -> Result<MazeSolver<'_>, SolveError> {
    MazeSolver::new(grid, start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connected_paths() {
        assert!(path_is_connected(&[]));
        assert!(path_is_connected(&[Coordinate::new(4, 4)]));
        assert!(path_is_connected(&[
            Coordinate::new(1, 1),
            Coordinate::new(1, 2),
            Coordinate::new(0, 2)
        ]));
        assert!(!path_is_connected(&[
            Coordinate::new(1, 1),
            Coordinate::new(2, 2)
        ]));
        assert!(!path_is_connected(&[
            Coordinate::new(1, 1),
            Coordinate::new(1, 1)
        ]));
    }

    #[test]
    fn facade_reports_invalid_start_before_searching() {
        let grid = MazeGrid::new(2, 2, Cell::Free).unwrap();
        assert!(matches!(
            find_path(&grid, Coordinate::new(2, 0)),
            Err(SolveError::InvalidStart { .. })
        ));
    }
}
