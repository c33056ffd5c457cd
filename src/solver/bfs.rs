use log::{debug, info, warn};

use crate::bfs::bfs_exit;
use crate::solver::ExitFinder;
use crate::{path_is_connected, Coordinate, MazeGrid, SolveError};

/// Breadth-first exit search over the 4-neighbourhood. When `component_check` is set and the
/// grid's components are up to date, a start whose component touches no passable border cell is
/// rejected without searching.
#[derive(Clone, Debug)]
pub struct BfsExitFinder {
    pub component_check: bool,
}

impl BfsExitFinder {
    pub fn new() -> BfsExitFinder {
        BfsExitFinder {
            component_check: true,
        }
    }
}

impl Default for BfsExitFinder {
    fn default() -> Self {
        BfsExitFinder::new()
    }
}

impl ExitFinder for BfsExitFinder {
    fn find_exit(&self, grid: &MazeGrid, start: Coordinate) -> Result<Vec<Coordinate>, SolveError> {
        let reachable = if self.component_check {
            grid.exit_reachable(&start)
        } else {
            None
        };
        if reachable == Some(false) {
            info!("No exit shares a component with {}", start);
            return Err(SolveError::NoExitReachable { start });
        }
        let Some(found) = bfs_exit(
            &start,
            |node| grid.neighborhood_points(node),
            |node| grid.is_exit(node),
        ) else {
            if reachable == Some(true) {
                warn!("Reachable exit could not be pathed to from {start}, are the components correct?");
            }
            return Err(SolveError::NoExitReachable { start });
        };
        let path = found
            .reconstruct()
            .unwrap_or_else(|err| panic!("search from {start} left broken parent links: {err}"));
        debug!(
            "Found exit {:?} from {} after discovering {} cells; path has {} cells",
            path.last(),
            start,
            found.len_explored(),
            path.len()
        );
        debug_assert!(path_is_connected(&path));
        Ok(path)
    }
}
