use crate::monopoly::{Error, Locale, Position, Square};

/// Cells per side of the grid the loop is drawn on.
pub const GRID: u8 = 11;

/// Top left corner of a cell in canvas coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Places the square on the outer ring of an 11x11 grid. Start sits in the
    /// bottom right corner and the loop runs clockwise on screen:
    /// bottom row right to left, left column upwards, top row left to right,
    /// right column downwards.
    pub fn geometry(&self, cell_size: f32) -> Point {
        let i = self.index() as f32;
        let edge = (GRID - 1) as f32;
        let (x, y) = match self.index() {
            0..=10 => (edge - i, edge),
            11..=20 => (0.0, 20.0 - i),
            21..=30 => (i - 20.0, 0.0),
            _ => (edge, i - 30.0),
        };
        Point { x: x * cell_size, y: y * cell_size }
    }
}

/// Geometry of a raw board index, see [`Position::geometry`].
pub fn square_geometry(index: u8, cell_size: f32) -> Result<Point, Error> {
    Position::new(index).map(|p| p.geometry(cell_size))
}

/// The 40 squares of the loop in board order.
#[derive(Debug, Clone)]
pub struct Board {
    squares: Vec<Square>,
}

impl Board {
    pub fn new(locale: Locale) -> Self {
        Board {
            squares: Position::all().map(|p| Square::new(p, locale)).collect(),
        }
    }

    pub fn square(&self, position: Position) -> &Square {
        &self.squares[usize::from(position)]
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Every square with the top left corner of its cell, in board order.
    pub fn layout(&self, cell_size: f32) -> impl Iterator<Item = (&Square, Point)> + '_ {
        self.squares.iter().map(move |s| (s, s.position().geometry(cell_size)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(Locale::default())
    }
}

#[cfg(test)]
mod tests {
    use hashbrown::HashSet;

    use super::*;
    use crate::monopoly::SquareType;

    #[test]
    fn test_corners() {
        let s = 10.0;
        assert_eq!(square_geometry(0, s), Ok(Point { x: 100.0, y: 100.0 }));
        assert_eq!(square_geometry(10, s), Ok(Point { x: 0.0, y: 100.0 }));
        assert_eq!(square_geometry(20, s), Ok(Point { x: 0.0, y: 0.0 }));
        assert_eq!(square_geometry(30, s), Ok(Point { x: 100.0, y: 0.0 }));
    }

    #[test]
    fn test_sides() {
        let s = 2.0;
        assert_eq!(square_geometry(3, s), Ok(Point { x: 14.0, y: 20.0 }));
        assert_eq!(square_geometry(11, s), Ok(Point { x: 0.0, y: 18.0 }));
        assert_eq!(square_geometry(25, s), Ok(Point { x: 10.0, y: 0.0 }));
        assert_eq!(square_geometry(31, s), Ok(Point { x: 20.0, y: 2.0 }));
        assert_eq!(square_geometry(39, s), Ok(Point { x: 20.0, y: 18.0 }));
    }

    #[test]
    fn test_within_grid_and_injective() {
        for s in [1.0, 7.5, 64.0] {
            let mut seen = HashSet::new();
            for p in Position::all() {
                let Point { x, y } = p.geometry(s);
                assert!((0.0..=10.0 * s).contains(&x), "{:?} x={}", p, x);
                assert!((0.0..=10.0 * s).contains(&y), "{:?} y={}", p, y);
                assert!(x == 0.0 || y == 0.0 || x == 10.0 * s || y == 10.0 * s, "{:?} is not on the perimeter", p);
                assert!(seen.insert(((x / s) as u8, (y / s) as u8)), "{:?} shares a cell", p);
            }
            assert_eq!(seen.len(), 40);
        }
    }

    #[test]
    fn test_neighbours_are_adjacent() {
        for p in Position::all() {
            let a = p.geometry(1.0);
            let b = p.advance(1).geometry(1.0);
            assert_eq!((a.x - b.x).abs() + (a.y - b.y).abs(), 1.0, "{:?}", p);
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(square_geometry(40, 1.0), Err(Error::InvalidArgument(40)));
    }

    #[test]
    fn test_board() {
        let board = Board::new(Locale::English);
        assert_eq!(board.squares().len(), 40);
        for (i, square) in board.squares().iter().enumerate() {
            assert_eq!(square.position().index() as usize, i);
        }
        assert_eq!(board.square(Position::START).kind(), SquareType::Start);
        assert_eq!(board.square(Position::LAST).name(), "Boardwalk");

        let layout = board.layout(5.0).collect::<Vec<_>>();
        assert_eq!(layout.len(), 40);
        assert_eq!(layout[20].1, Point { x: 0.0, y: 0.0 });
    }
}
