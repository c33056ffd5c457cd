use crate::error::StateViolation;
use crate::solver::{validate_start, ExitFinder};
use crate::{BfsExitFinder, Coordinate, MazeGrid, SolveError};

/// Progress of a [MazeSolver]. A solver searches exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolverState {
    Created,
    Searched { found: bool },
}

/// Stateful in-place solver: construct, [search](Self::search) once, then read the
/// [marked grid](Self::marked_grid). Holds the grid exclusively until it is dropped.
#[derive(Debug)]
pub struct MazeSolver<'g, F = BfsExitFinder> {
    grid: &'g mut MazeGrid,
    start: Coordinate,
    finder: F,
    state: SolverState,
    path_len: Option<usize>,
}

impl<'g> MazeSolver<'g, BfsExitFinder> {
    pub fn new(grid: &'g mut MazeGrid, start: Coordinate) -> Result<Self, SolveError> {
        MazeSolver::with_finder(BfsExitFinder::new(), grid, start)
    }
}

impl<'g, F: ExitFinder> MazeSolver<'g, F> {
    /// Validates the start eagerly so that a constructed solver can always search.
    pub fn with_finder(
        finder: F,
        grid: &'g mut MazeGrid,
        start: Coordinate,
    ) -> Result<Self, SolveError> {
        validate_start(grid, start)?;
        Ok(MazeSolver {
            grid,
            start,
            finder,
            state: SolverState::Created,
            path_len: None,
        })
    }

    pub fn state(&self) -> SolverState {
        self.state
    }
    pub fn start(&self) -> Coordinate {
        self.start
    }
    /// Length of the stamped path after a successful search.
    pub fn path_len(&self) -> Option<usize> {
        self.path_len
    }

    /// Runs the search and stamps the path into the grid. Returns whether an exit was found.
    pub fn search(&mut self) -> Result<bool, SolveError> {
        if self.state != SolverState::Created {
            return Err(SolveError::InvalidState(StateViolation::AlreadySearched));
        }
        let found = match self.finder.mark_path(self.grid, self.start) {
            Ok(len) => {
                self.path_len = Some(len);
                true
            }
            Err(SolveError::NoExitReachable { .. }) => false,
            Err(err) => return Err(err),
        };
        self.state = SolverState::Searched { found };
        Ok(found)
    }

    fn check_marked(&self) -> Result<(), SolveError> {
        match self.state {
            SolverState::Created => Err(SolveError::InvalidState(StateViolation::NotSearched)),
            SolverState::Searched { found: false } => {
                Err(SolveError::InvalidState(StateViolation::NoPathFound))
            }
            SolverState::Searched { found: true } => Ok(()),
        }
    }

    /// The grid with the path stamped in, available only after a successful search.
    pub fn marked_grid(&self) -> Result<&MazeGrid, SolveError> {
        self.check_marked()?;
        Ok(&*self.grid)
    }

    /// Releases the borrowed grid after a successful search.
    pub fn into_marked_grid(self) -> Result<&'g mut MazeGrid, SolveError> {
        self.check_marked()?;
        Ok(self.grid)
    }
}
