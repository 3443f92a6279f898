//! Shapes: insertion-ordered sets of distinct lattice points.

use std::fmt;

use super::point::{Dir, Point};

/// A bounding-box transform was invoked on a shape with zero points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyShapeError;

impl fmt::Display for EmptyShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "geometric transform on an empty shape")
    }
}

impl std::error::Error for EmptyShapeError {}

/// An insertion-ordered sequence of pairwise-distinct lattice points.
///
/// The insertion order matters only during growth (it is the record of how the
/// shape was built); shape identity is point-set based. `Shape` deliberately
/// does not implement `PartialEq` because sequence equality would be
/// misleading; compare via [`Shape::sorted_points`] or
/// [`crate::pattern::canonical_key`].
///
/// Invariants:
/// - Points are pairwise distinct.
/// - A fully normalized shape has min x = min y = 0 across its points.
#[derive(Clone, Debug, Default)]
pub struct Shape {
    points: Vec<Point>,
}

impl Shape {
    /// The size-1 shape at the origin, the base case of every growth run.
    pub fn origin() -> Self {
        Self {
            points: vec![Point::new(0, 0)],
        }
    }

    /// Build a shape from an explicit point sequence.
    ///
    /// Returns `None` if the sequence contains a duplicate point.
    pub fn from_points(points: Vec<Point>) -> Option<Self> {
        for (i, p) in points.iter().enumerate() {
            if points[..i].contains(p) {
                return None;
            }
        }
        Some(Self { points })
    }

    /// The points in insertion order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    /// A new shape with `p` appended, or `None` if `p` is already present.
    /// Growth never mutates a shape in place.
    pub fn with_point(&self, p: Point) -> Option<Self> {
        if self.contains(p) {
            return None;
        }
        let mut points = self.points.clone();
        points.push(p);
        Some(Self { points })
    }

    /// Bounding-box corner `(max_x, max_y)`; errors on an empty shape.
    fn max_corner(&self) -> Result<(i32, i32), EmptyShapeError> {
        let first = *self.points.first().ok_or(EmptyShapeError)?;
        let mut max_x = first.x;
        let mut max_y = first.y;
        for p in &self.points[1..] {
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Ok((max_x, max_y))
    }

    /// Translate by `(-min_x, -min_y)` so that min x = min y = 0.
    ///
    /// Idempotent: a no-op (modulo a fresh allocation) on an already
    /// normalized shape. Preserves insertion order.
    pub fn normalized(&self) -> Result<Shape, EmptyShapeError> {
        let first = *self.points.first().ok_or(EmptyShapeError)?;
        let mut min_x = first.x;
        let mut min_y = first.y;
        for p in &self.points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
        }
        Ok(Shape {
            points: self
                .points
                .iter()
                .map(|p| Point::new(p.x - min_x, p.y - min_y))
                .collect(),
        })
    }

    /// The shape rotated 90, 180, and 270 degrees counter-clockwise, in that
    /// order, each relative to the shape's own bounding box so the results
    /// stay non-negative on normalized input.
    ///
    /// 180: `(x, y) -> (w - x, h - y)`. 90: `(x, h - y)` then axis swap.
    /// 270: `(w - x, y)` then axis swap.
    pub fn rotations(&self) -> Result<[Shape; 3], EmptyShapeError> {
        let (w, h) = self.max_corner()?;
        let map = |f: &dyn Fn(Point) -> Point| Shape {
            points: self.points.iter().map(|&p| f(p)).collect(),
        };
        let r90 = map(&|p| Point::new(p.x, h - p.y).swapped());
        let r180 = map(&|p| Point::new(w - p.x, h - p.y));
        let r270 = map(&|p| Point::new(w - p.x, p.y).swapped());
        Ok([r90, r180, r270])
    }

    /// Reflect across the vertical midline of the bounding box:
    /// `(x, y) -> (w - x, y)`. Point order is reversed to keep a canonical
    /// traversal direction; the ordering has no meaning for equality.
    pub fn mirrored(&self) -> Result<Shape, EmptyShapeError> {
        let (w, _) = self.max_corner()?;
        Ok(Shape {
            points: self
                .points
                .iter()
                .rev()
                .map(|p| Point::new(w - p.x, p.y))
                .collect(),
        })
    }

    /// True iff every point is reachable from every other through 4-adjacent
    /// steps within the shape. Empty and single-point shapes are connected.
    pub fn is_connected(&self) -> bool {
        let Some(&start) = self.points.first() else {
            return true;
        };
        let mut seen = vec![start];
        let mut stack = vec![start];
        while let Some(p) = stack.pop() {
            for dir in Dir::ALL {
                let q = p.step(dir);
                if self.contains(q) && !seen.contains(&q) {
                    seen.push(q);
                    stack.push(q);
                }
            }
        }
        seen.len() == self.points.len()
    }

    /// The point set sorted lexicographically; the order-insensitive key used
    /// wherever shapes are compared as point sets.
    pub fn sorted_points(&self) -> Vec<Point> {
        let mut pts = self.points.clone();
        pts.sort_unstable();
        pts
    }

    /// Axis-aligned text grid: `#` for occupied cells, `.` for empty ones,
    /// top row = max y. Errors on an empty shape like the other bounding-box
    /// operations.
    pub fn grid_string(&self) -> Result<String, EmptyShapeError> {
        let normalized = self.normalized()?;
        let (w, h) = normalized.max_corner()?;
        let mut out = String::with_capacity(((w + 2) * (h + 1)) as usize);
        for y in (0..=h).rev() {
            for x in 0..=w {
                out.push(if normalized.contains(Point::new(x, y)) {
                    '#'
                } else {
                    '.'
                });
            }
            out.push('\n');
        }
        Ok(out)
    }
}

/// Renders the lexicographically sorted coordinate pairs, e.g.
/// `[(0, 0), (1, 0)]`. Display sorting never affects equality semantics.
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.sorted_points().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", p.x, p.y)?;
        }
        write!(f, "]")
    }
}
