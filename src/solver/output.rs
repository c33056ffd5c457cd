use crate::{Coordinate, MazeGrid};

/// Decides what a solver hands back once a path has been found. The strategy owns the borrow of
/// the grid for the duration of the search, so an in-place strategy holds it exclusively.
pub trait OutputStrategy {
    type Output;

    /// The grid to search.
    fn grid(&self) -> &MazeGrid;
    /// Consumes the path from start to exit.
    fn deliver(self, path: Vec<Coordinate>) -> Self::Output;
}

/// Sequence mode: the path itself is the result and the grid is left untouched.
#[derive(Clone, Copy, Debug)]
pub struct ReturnPath<'g> {
    grid: &'g MazeGrid,
}

impl<'g> ReturnPath<'g> {
    pub fn new(grid: &'g MazeGrid) -> ReturnPath<'g> {
        ReturnPath { grid }
    }
}

impl OutputStrategy for ReturnPath<'_> {
    type Output = Vec<Coordinate>;

    fn grid(&self) -> &MazeGrid {
        self.grid
    }
    fn deliver(self, path: Vec<Coordinate>) -> Vec<Coordinate> {
        path
    }
}

/// In-place mode: every path cell is stamped with its 1-based step index. The result is the path
/// length, which is also the value written at the exit.
#[derive(Debug)]
pub struct StampPath<'g> {
    grid: &'g mut MazeGrid,
}

impl<'g> StampPath<'g> {
    pub fn new(grid: &'g mut MazeGrid) -> StampPath<'g> {
        StampPath { grid }
    }
}

impl OutputStrategy for StampPath<'_> {
    type Output = usize;

    fn grid(&self) -> &MazeGrid {
        &*self.grid
    }
    fn deliver(self, path: Vec<Coordinate>) -> usize {
        self.grid.stamp_path(&path);
        path.len()
    }
}
