use maze_exit::{solve, Coordinate, MazeGrid};

// Stamps the way out into the maze itself. Every cell on the path holds its step number, starting
// with 1 at the start.

fn main() {
    let mut grid = MazeGrid::from_markers(&[
        vec![-1, -1, -1, -1, -1, -1],
        vec![-1, 0, 0, -1, 0, -1],
        vec![-1, 0, -1, 0, 0, -1],
        vec![-1, 0, 0, 0, -1, -1],
        vec![-1, -1, -1, 0, -1, -1],
    ])
    .unwrap();
    let mut solver = solve(&mut grid, Coordinate::new(1, 1)).unwrap();
    if solver.search().unwrap() {
        println!("{}", solver.marked_grid().unwrap());
        for row in solver.marked_grid().unwrap().to_markers() {
            println!("{:?}", row);
        }
    } else {
        println!("No way out");
    }
}
