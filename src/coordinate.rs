use crate::NEIGHBOUR_ORDER;
use core::fmt;

/// A `(row, col)` position on a [MazeGrid](crate::maze_grid::MazeGrid). Row 0 is the top row,
/// column 0 the leftmost column. Components are signed so that positions just outside the grid
/// can be represented and rejected by bounds checks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Coordinate {
        Coordinate { row, col }
    }
    pub fn left(&self) -> Coordinate {
        Coordinate::new(self.row, self.col - 1)
    }
    pub fn up(&self) -> Coordinate {
        Coordinate::new(self.row - 1, self.col)
    }
    pub fn right(&self) -> Coordinate {
        Coordinate::new(self.row, self.col + 1)
    }
    pub fn down(&self) -> Coordinate {
        Coordinate::new(self.row + 1, self.col)
    }
    /// The four orthogonal neighbours in the order left, up, right, down. Breadth-first search
    /// expands them in exactly this order, which decides between equally short paths.
    pub fn neumann_neighborhood(&self) -> [Coordinate; 4] {
        NEIGHBOUR_ORDER.map(|(dr, dc)| Coordinate::new(self.row + dr, self.col + dc))
    }
    pub fn manhattan_distance(&self, other: &Coordinate) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Coordinate::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbourhood_order_is_left_up_right_down() {
        let c = Coordinate::new(3, 5);
        assert_eq!(
            c.neumann_neighborhood(),
            [
                Coordinate::new(3, 4),
                Coordinate::new(2, 5),
                Coordinate::new(3, 6),
                Coordinate::new(4, 5),
            ]
        );
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Coordinate::new(1, 2), Coordinate::from((1, 2)));
        assert_ne!(Coordinate::new(1, 2), Coordinate::new(2, 1));
        // Sharing one component with another coordinate is not enough
        assert_ne!(Coordinate::new(-1, 4), Coordinate::new(-1, -1));
    }

    #[test]
    fn manhattan_distance_of_neighbours_is_one() {
        let c = Coordinate::new(0, 0);
        for n in c.neumann_neighborhood() {
            assert_eq!(c.manhattan_distance(&n), 1);
        }
        assert_eq!(c.manhattan_distance(&Coordinate::new(2, -3)), 5);
    }

    #[test]
    fn display() {
        assert_eq!(Coordinate::new(1, 2).to_string(), "(1, 2)");
    }
}
