use maze_exit::{find_path, Cell, Coordinate, MazeGrid, SolveError};

// A start boxed in by walls has no way out, however large the maze around it is. The connected
// components kept by the grid answer this without searching.

fn main() {
    let mut grid = MazeGrid::new(20, 20, Cell::Free).unwrap();
    let start = Coordinate::new(10, 10);
    for n in start.neumann_neighborhood() {
        grid.set(n, Cell::Wall).unwrap();
    }
    grid.update();
    println!("Exit reachable: {:?}", grid.exit_reachable(&start));
    match find_path(&grid, start) {
        Ok(path) => println!("Path: {:?}", path),
        Err(SolveError::NoExitReachable { start }) => println!("No exit reachable from {}", start),
        Err(err) => println!("Error: {}", err),
    }
}
