//! Lattice points and the four axis-aligned unit directions.

/// A point on the 2D integer lattice.
///
/// Equality, hashing, and ordering derive from the fields; the derived `Ord`
/// is lexicographic on `(x, y)`, which is the comparison order used for
/// canonical point-set keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// One of the four axis-aligned unit directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dir {
    Left,
    Right,
    Up,
    Down,
}

impl Dir {
    /// All four directions in a fixed order.
    pub const ALL: [Dir; 4] = [Dir::Left, Dir::Right, Dir::Up, Dir::Down];
}

impl Point {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point one unit away in `dir`. Result may have negative coordinates.
    #[inline]
    pub fn step(self, dir: Dir) -> Point {
        match dir {
            Dir::Left => Point::new(self.x - 1, self.y),
            Dir::Right => Point::new(self.x + 1, self.y),
            Dir::Up => Point::new(self.x, self.y + 1),
            Dir::Down => Point::new(self.x, self.y - 1),
        }
    }

    /// The full Moore neighborhood (8 points including diagonals), enumerated
    /// row above left-to-right, then the two side points, then the row below.
    /// The order is fixed for deterministic intermediate output only.
    pub fn neighbors8(self) -> [Point; 8] {
        let Point { x, y } = self;
        [
            Point::new(x - 1, y + 1),
            Point::new(x, y + 1),
            Point::new(x + 1, y + 1),
            Point::new(x - 1, y),
            Point::new(x + 1, y),
            Point::new(x - 1, y - 1),
            Point::new(x, y - 1),
            Point::new(x + 1, y - 1),
        ]
    }

    /// True iff both coordinates are >= 0 (first quadrant, axes included).
    #[inline]
    pub fn is_nonnegative(self) -> bool {
        self.x >= 0 && self.y >= 0
    }

    /// `(y, x)`; the axis swap used to finish 90 and 270 degree rotations.
    #[inline]
    pub fn swapped(self) -> Point {
        Point::new(self.y, self.x)
    }
}
