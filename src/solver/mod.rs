use crate::error::StartDefect;
use crate::{Cell, Coordinate, MazeGrid, SolveError};

pub mod bfs;
pub mod output;

use output::{OutputStrategy, ReturnPath, StampPath};

/// Rejects a start that lies outside the grid or on a wall.
pub fn validate_start(grid: &MazeGrid, start: Coordinate) -> Result<(), SolveError> {
    let reason = match grid.get(start) {
        None => StartDefect::OutOfBounds,
        Some(Cell::Wall) => StartDefect::OnWall,
        Some(_) => return Ok(()),
    };
    Err(SolveError::InvalidStart { start, reason })
}

/// Finds a path from a start cell to a border cell of a [MazeGrid].
pub trait ExitFinder {
    /// Searches from an already validated start. Returns the path from start to exit, or
    /// [SolveError::NoExitReachable].
    fn find_exit(&self, grid: &MazeGrid, start: Coordinate) -> Result<Vec<Coordinate>, SolveError>;

    /// Validates the start, searches and hands the path to `output`.
    fn solve_with<O: OutputStrategy>(
        &self,
        output: O,
        start: Coordinate,
    ) -> Result<O::Output, SolveError> {
        validate_start(output.grid(), start)?;
        let path = self.find_exit(output.grid(), start)?;
        Ok(output.deliver(path))
    }

    /// Computes the path from `start` to the nearest reachable exit without touching the grid.
    fn find_path(&self, grid: &MazeGrid, start: Coordinate) -> Result<Vec<Coordinate>, SolveError> {
        self.solve_with(ReturnPath::new(grid), start)
    }

    /// Stamps the path from `start` to the nearest reachable exit into the grid and returns its
    /// length. On failure the grid is left as it was.
    fn mark_path(&self, grid: &mut MazeGrid, start: Coordinate) -> Result<usize, SolveError> {
        self.solve_with(StampPath::new(grid), start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_validation() {
        let grid = MazeGrid::from_markers(&[vec![0, -1], vec![0, 0]]).unwrap();
        assert_eq!(validate_start(&grid, Coordinate::new(1, 1)), Ok(()));
        assert_eq!(
            validate_start(&grid, Coordinate::new(0, 1)),
            Err(SolveError::InvalidStart {
                start: Coordinate::new(0, 1),
                reason: StartDefect::OnWall
            })
        );
        for start in [Coordinate::new(-1, 0), Coordinate::new(0, 2)] {
            assert_eq!(
                validate_start(&grid, start),
                Err(SolveError::InvalidStart {
                    start,
                    reason: StartDefect::OutOfBounds
                })
            );
        }
    }

    #[test]
    fn marked_start_is_a_valid_start() {
        let grid = MazeGrid::from_markers(&[vec![4]]).unwrap();
        assert_eq!(validate_start(&grid, Coordinate::new(0, 0)), Ok(()));
    }
}
