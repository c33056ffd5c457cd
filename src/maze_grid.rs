use crate::coordinate::Coordinate;
use crate::error::{GridDefect, SolveError};
use core::fmt;
use itertools::Itertools;
use log::info;
use ndarray::Array2;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use std::num::NonZeroUsize;

/// Integer marker for a wall in the plain integer grid convention.
pub const WALL_MARKER: i32 = -1;
/// Integer marker for an unmarked free cell in the plain integer grid convention.
pub const FREE_MARKER: i32 = 0;

/// Contents of a single grid cell. A [Cell::Marked] cell is a free cell that has been stamped
/// with its 1-based position on a path and stays passable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Free,
    Wall,
    Marked(NonZeroUsize),
}

impl Cell {
    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }
    pub fn is_passable(self) -> bool {
        !self.is_wall()
    }
    /// The stamped step index, if any.
    pub fn step(self) -> Option<usize> {
        match self {
            Cell::Marked(step) => Some(step.get()),
            _ => None,
        }
    }
    /// Maps `-1` to a wall, `0` to a free cell and positive values to marked cells. Any other
    /// negative value has no meaning.
    pub fn from_marker(value: i32) -> Option<Cell> {
        match value {
            WALL_MARKER => Some(Cell::Wall),
            FREE_MARKER => Some(Cell::Free),
            v if v > 0 => usize::try_from(v)
                .ok()
                .and_then(NonZeroUsize::new)
                .map(Cell::Marked),
            _ => None,
        }
    }
    pub fn marker(self) -> i32 {
        match self {
            Cell::Free => FREE_MARKER,
            Cell::Wall => WALL_MARKER,
            Cell::Marked(step) => i32::try_from(step.get()).unwrap_or(i32::MAX),
        }
    }
}

/// Whether `coordinate` lies on the outer ring of a `rows` x `cols` grid.
pub fn is_exit(coordinate: Coordinate, rows: usize, cols: usize) -> bool {
    let (row, col) = (i64::from(coordinate.row), i64::from(coordinate.col));
    row == 0 || col == 0 || row == rows as i64 - 1 || col == cols as i64 - 1
}

/// [MazeGrid] stores the [Cell]s of a rectangular, non-empty maze in row-major order and keeps
/// track of connected components of passable cells using a [UnionFind] structure. Components
/// let a solver tell that no exit is reachable without flood-filling the grid.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    cells: Array2<Cell>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl MazeGrid {
    /// A `rows` x `cols` grid with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: Cell) -> Result<MazeGrid, SolveError> {
        if rows == 0 {
            return Err(GridDefect::NoRows.into());
        }
        if cols == 0 {
            return Err(GridDefect::NoColumns.into());
        }
        Ok(MazeGrid::from_cells(Array2::from_elem((rows, cols), fill)))
    }

    /// Builds a grid from rows of cells, rejecting empty and ragged input.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<MazeGrid, SolveError> {
        let n_cols = rows.first().ok_or(GridDefect::NoRows)?.len();
        if n_cols == 0 {
            return Err(GridDefect::NoColumns.into());
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != n_cols)
        {
            return Err(GridDefect::Ragged {
                row,
                expected: n_cols,
                found,
            }
            .into());
        }
        let cells = Array2::from_shape_fn((rows.len(), n_cols), |(r, c)| rows[r][c]);
        Ok(MazeGrid::from_cells(cells))
    }

    /// Builds a grid from integer markers: `-1` for walls, `0` for free cells and positive step
    /// numbers for marked cells.
    pub fn from_markers(markers: &[Vec<i32>]) -> Result<MazeGrid, SolveError> {
        let rows = markers
            .iter()
            .enumerate()
            .map(|(row, values)| {
                values
                    .iter()
                    .enumerate()
                    .map(|(col, &value)| {
                        Cell::from_marker(value)
                            .ok_or(GridDefect::UnknownMarker { row, col, value })
                    })
                    .collect::<Result<Vec<Cell>, GridDefect>>()
            })
            .collect::<Result<Vec<Vec<Cell>>, GridDefect>>()?;
        MazeGrid::from_rows(rows)
    }

    fn from_cells(cells: Array2<Cell>) -> MazeGrid {
        let mut grid = MazeGrid {
            components: UnionFind::new(cells.len()),
            cells,
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    /// The inverse of [from_markers](Self::from_markers).
    pub fn to_markers(&self) -> Vec<Vec<i32>> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|cell| cell.marker()).collect())
            .collect()
    }

    /// `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    fn index(&self, coordinate: Coordinate) -> Option<(usize, usize)> {
        let row = usize::try_from(coordinate.row).ok()?;
        let col = usize::try_from(coordinate.col).ok()?;
        let (rows, cols) = self.dimensions();
        (row < rows && col < cols).then_some((row, col))
    }
    fn flat_index(&self, (row, col): (usize, usize)) -> usize {
        row * self.cols() + col
    }
    fn out_of_bounds(&self, coordinate: Coordinate) -> SolveError {
        let (rows, cols) = self.dimensions();
        SolveError::OutOfBounds {
            coordinate,
            rows,
            cols,
        }
    }

    pub fn in_bounds(&self, coordinate: Coordinate) -> bool {
        self.index(coordinate).is_some()
    }
    pub fn get(&self, coordinate: Coordinate) -> Option<Cell> {
        self.index(coordinate).map(|ix| self.cells[ix])
    }
    pub fn is_wall(&self, coordinate: Coordinate) -> Result<bool, SolveError> {
        self.get(coordinate)
            .map(Cell::is_wall)
            .ok_or_else(|| self.out_of_bounds(coordinate))
    }
    pub fn can_move_to(&self, coordinate: Coordinate) -> bool {
        self.get(coordinate).is_some_and(Cell::is_passable)
    }
    /// The stamped step index at `coordinate`, if it carries one.
    pub fn step_at(&self, coordinate: Coordinate) -> Option<usize> {
        self.get(coordinate).and_then(Cell::step)
    }
    /// Passable orthogonal neighbours of `coordinate` in left, up, right, down order.
    pub fn neighborhood_points(&self, coordinate: &Coordinate) -> SmallVec<[Coordinate; 4]> {
        coordinate
            .neumann_neighborhood()
            .into_iter()
            .filter(|p| self.can_move_to(*p))
            .collect()
    }
    pub fn is_exit(&self, coordinate: &Coordinate) -> bool {
        let (rows, cols) = self.dimensions();
        crate::maze_grid::is_exit(*coordinate, rows, cols)
    }
    /// Every coordinate on the outer ring of the grid, each reported once.
    pub fn border_points(&self) -> impl Iterator<Item = Coordinate> {
        let (rows, cols) = self.dimensions();
        let (last_row, last_col) = (rows as i32 - 1, cols as i32 - 1);
        let horizontal = (0..=last_col).flat_map(move |c| {
            [Coordinate::new(0, c), Coordinate::new(last_row, c)]
        });
        let vertical =
            (0..=last_row).flat_map(move |r| [Coordinate::new(r, 0), Coordinate::new(r, last_col)]);
        horizontal.chain(vertical).unique()
    }

    /// Updates a cell. Joins newly connected components and flags the components as dirty if
    /// components are (potentially) broken apart into multiple.
    pub fn set(&mut self, coordinate: Coordinate, cell: Cell) -> Result<(), SolveError> {
        let ix = self
            .index(coordinate)
            .ok_or_else(|| self.out_of_bounds(coordinate))?;
        let was_passable = self.cells[ix].is_passable();
        if was_passable && cell.is_wall() {
            self.components_dirty = true;
        } else if !was_passable && cell.is_passable() {
            let p_ix = self.flat_index(ix);
            for n in self.neighborhood_points(&coordinate) {
                if let Some(n_ix) = self.index(n) {
                    let n_ix = self.flat_index(n_ix);
                    self.components.union(p_ix, n_ix);
                }
            }
        }
        self.cells[ix] = cell;
        Ok(())
    }

    /// Writes `i + 1` into the cell of the `i`-th coordinate of `path`. Returns the number of
    /// cells stamped.
    pub fn stamp_path(&mut self, path: &[Coordinate]) -> usize {
        let mut stamped = 0;
        for (step, coordinate) in path.iter().enumerate() {
            let Some(ix) = self.index(*coordinate) else {
                continue;
            };
            debug_assert!(self.cells[ix].is_passable(), "{coordinate} is a wall");
            if self.cells[ix].is_passable() {
                self.cells[ix] = Cell::Marked(NonZeroUsize::MIN.saturating_add(step));
                stamped += 1;
            }
        }
        stamped
    }

    /// Turns every marked cell back into a plain free cell.
    pub fn clear_marks(&mut self) {
        self.cells.mapv_inplace(|cell| match cell {
            Cell::Marked(_) => Cell::Free,
            other => other,
        });
    }

    /// Retrieves the component id a given [Coordinate] belongs to.
    pub fn get_component(&self, coordinate: &Coordinate) -> Option<usize> {
        self.index(*coordinate)
            .map(|ix| self.components.find(self.flat_index(ix)))
    }

    /// Checks whether any passable border cell is on the same component as the start. Returns
    /// [None] while the components are dirty.
    pub fn exit_reachable(&self, start: &Coordinate) -> Option<bool> {
        if self.components_dirty {
            return None;
        }
        if !self.can_move_to(*start) {
            return Some(false);
        }
        let start_ix = self.get_component(start)?;
        Some(self.border_points().any(|p| {
            self.can_move_to(p) && self.get_component(&p).is_some_and(|c| c == start_ix)
        }))
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up passable neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        let (rows, cols) = self.dimensions();
        self.components = UnionFind::new(rows * cols);
        self.components_dirty = false;
        for ((row, col), cell) in self.cells.indexed_iter() {
            if !cell.is_passable() {
                continue;
            }
            let parent_ix = row * cols + col;
            if col + 1 < cols && self.cells[(row, col + 1)].is_passable() {
                self.components.union(parent_ix, parent_ix + 1);
            }
            if row + 1 < rows && self.cells[(row + 1, col)].is_passable() {
                self.components.union(parent_ix, parent_ix + cols);
            }
        }
    }
}

impl PartialEq for MazeGrid {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for MazeGrid {}

impl TryFrom<Vec<Vec<Cell>>> for MazeGrid {
    type Error = SolveError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        MazeGrid::from_rows(rows)
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.rows() {
            let line = row
                .iter()
                .map(|cell| match cell {
                    Cell::Free => ".".to_owned(),
                    Cell::Wall => "#".to_owned(),
                    Cell::Marked(step) => step.to_string(),
                })
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_grid() -> MazeGrid {
        MazeGrid::from_markers(&[vec![0, 0, -1], vec![-1, 0, 0], vec![0, -1, 0]]).unwrap()
    }

    #[test]
    fn rejects_empty_and_ragged_grids() {
        assert_eq!(
            MazeGrid::from_rows(vec![]),
            Err(SolveError::InvalidGrid(GridDefect::NoRows))
        );
        assert_eq!(
            MazeGrid::from_rows(vec![vec![]]),
            Err(SolveError::InvalidGrid(GridDefect::NoColumns))
        );
        assert_eq!(
            MazeGrid::from_rows(vec![vec![Cell::Free; 3], vec![Cell::Free; 2]]),
            Err(SolveError::InvalidGrid(GridDefect::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }))
        );
        assert_eq!(
            MazeGrid::new(0, 4, Cell::Free),
            Err(SolveError::InvalidGrid(GridDefect::NoRows))
        );
    }

    #[test]
    fn rejects_unknown_markers() {
        assert_eq!(
            MazeGrid::from_markers(&[vec![0, -2]]),
            Err(SolveError::InvalidGrid(GridDefect::UnknownMarker {
                row: 0,
                col: 1,
                value: -2
            }))
        );
    }

    #[test]
    fn markers_round_trip() {
        let markers = vec![vec![0, 3, -1], vec![-1, 0, 12]];
        let grid = MazeGrid::from_markers(&markers).unwrap();
        assert_eq!(grid.to_markers(), markers);
        assert_eq!(grid.step_at(Coordinate::new(1, 2)), Some(12));
        assert!(grid.can_move_to(Coordinate::new(0, 1)));
    }

    #[test]
    fn is_wall_checks_bounds() {
        let grid = scenario_grid();
        assert_eq!(grid.dimensions(), (3, 3));
        assert_eq!(grid.is_wall(Coordinate::new(0, 2)), Ok(true));
        assert_eq!(grid.is_wall(Coordinate::new(1, 1)), Ok(false));
        assert_eq!(
            grid.is_wall(Coordinate::new(3, 0)),
            Err(SolveError::OutOfBounds {
                coordinate: Coordinate::new(3, 0),
                rows: 3,
                cols: 3
            })
        );
        assert!(grid.is_wall(Coordinate::new(0, -1)).is_err());
    }

    #[test]
    fn border_predicate() {
        assert!(is_exit(Coordinate::new(0, 2), 4, 5));
        assert!(is_exit(Coordinate::new(3, 2), 4, 5));
        assert!(is_exit(Coordinate::new(2, 0), 4, 5));
        assert!(is_exit(Coordinate::new(2, 4), 4, 5));
        assert!(!is_exit(Coordinate::new(2, 2), 4, 5));
        // On a single row every cell is on the border
        assert!(is_exit(Coordinate::new(0, 3), 1, 7));
    }

    #[test]
    fn border_points_cover_the_ring_once() {
        let grid = MazeGrid::new(3, 4, Cell::Free).unwrap();
        let points = grid.border_points().collect::<Vec<_>>();
        assert_eq!(points.len(), 10);
        assert!(points.iter().all(|p| grid.is_exit(p)));
        let single = MazeGrid::new(1, 1, Cell::Free).unwrap();
        assert_eq!(single.border_points().count(), 1);
    }

    #[test]
    fn neighbourhood_skips_walls_and_bounds() {
        let grid = scenario_grid();
        assert_eq!(
            grid.neighborhood_points(&Coordinate::new(1, 1)).as_slice(),
            &[Coordinate::new(0, 1), Coordinate::new(1, 2)]
        );
        assert_eq!(
            grid.neighborhood_points(&Coordinate::new(0, 0)).as_slice(),
            &[Coordinate::new(0, 1)]
        );
    }

    /// Tests whether points are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // |. # .|
        // |. # .|
        let grid = MazeGrid::from_markers(&[vec![0, -1, 0], vec![0, -1, 0]]).unwrap();
        let left = grid.get_component(&Coordinate::new(0, 0));
        assert_eq!(left, grid.get_component(&Coordinate::new(1, 0)));
        assert_ne!(left, grid.get_component(&Coordinate::new(0, 2)));
    }

    #[test]
    fn exit_reachability_follows_components() {
        // A free pocket in the middle of a 5x5 grid of walls.
        let mut grid = MazeGrid::new(5, 5, Cell::Wall).unwrap();
        let centre = Coordinate::new(2, 2);
        grid.set(centre, Cell::Free).unwrap();
        assert_eq!(grid.exit_reachable(&centre), Some(false));

        // Opening a corridor to the left border joins the components.
        grid.set(Coordinate::new(2, 1), Cell::Free).unwrap();
        grid.set(Coordinate::new(2, 0), Cell::Free).unwrap();
        assert!(!grid.components_dirty);
        assert_eq!(grid.exit_reachable(&centre), Some(true));

        // Closing it again makes the components dirty until they are regenerated.
        grid.set(Coordinate::new(2, 1), Cell::Wall).unwrap();
        assert_eq!(grid.exit_reachable(&centre), None);
        grid.update();
        assert_eq!(grid.exit_reachable(&centre), Some(false));
    }

    #[test]
    fn stamping_and_clearing() {
        let mut grid = scenario_grid();
        let path = [Coordinate::new(1, 1), Coordinate::new(1, 2)];
        assert_eq!(grid.stamp_path(&path), 2);
        assert_eq!(
            grid.to_markers(),
            vec![vec![0, 0, -1], vec![-1, 1, 2], vec![0, -1, 0]]
        );
        // Marked cells stay passable
        assert!(grid.can_move_to(Coordinate::new(1, 1)));
        grid.clear_marks();
        assert_eq!(grid, scenario_grid());
    }

    #[test]
    fn display() {
        let mut grid = scenario_grid();
        grid.stamp_path(&[Coordinate::new(1, 1), Coordinate::new(1, 2)]);
        assert_eq!(grid.to_string(), ". . #\n# 1 2\n. # .\n");
    }
}
