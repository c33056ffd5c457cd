use maze_exit::{find_path, Coordinate, MazeGrid};

// In this example a way out is found on a 5x5 maze with shape
//  _________
// |# # # # #|
// |# . . . #|
// |# . # . #|
// |# S # . .|
// |# # # # #|
//  _________
// where
// - # marks a wall
// - S marks the start
//
// Any free cell on the outer ring is an exit.

fn main() {
    let grid = MazeGrid::from_markers(&[
        vec![-1, -1, -1, -1, -1],
        vec![-1, 0, 0, 0, -1],
        vec![-1, 0, -1, 0, -1],
        vec![-1, 0, -1, 0, 0],
        vec![-1, -1, -1, -1, -1],
    ])
    .unwrap();
    println!("{}", grid);
    let start = Coordinate::new(3, 1);
    let path = find_path(&grid, start).unwrap();
    println!("Path:");
    for p in path {
        println!("{}", p);
    }
}
