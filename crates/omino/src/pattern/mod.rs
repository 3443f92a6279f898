//! Pattern generation: growth, canonical forms, and dedup.
//!
//! Purpose
//! - Grow every connected shape of a requested point count from the single
//!   origin point, one point per step, and return the unique shapes under the
//!   configured symmetry group.
//!
//! Why this design
//! - Growth is an explicit iterative loop over immutable shape-set snapshots:
//!   each step reads the previous set and produces a new one, so there is no
//!   shared mutable state and exactly one set transformation per step.
//! - The growth frontier of a shape considers 4-connectivity to ANY of its
//!   points, not just the last-added one; restricting to the last point
//!   under-generates (it cannot reach T-shaped patterns).
//! - Dedup goes through a canonical key (the lexicographically smallest
//!   sorted point list over the shape's orbit under the symmetry group)
//!   instead of comparing every candidate against every kept shape's
//!   transforms. Same outcome, one hash lookup per candidate.
//!
//! Code cross-refs: `grid::{Point, Shape}`, `pattern::rand::draw_shape_walk`

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use crate::grid::{Dir, EmptyShapeError, Point, Shape};

pub mod rand;

#[cfg(test)]
mod tests;

/// Symmetry group used when deciding that two shapes are the same pattern.
///
/// Translation is always quotiented out (shapes are normalized before any
/// comparison). Both flags on (the default) counts free polyominoes;
/// rotations only counts one-sided polyominoes; neither counts fixed
/// polyominoes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymmetryCfg {
    pub rotations: bool,
    pub mirrors: bool,
}

impl Default for SymmetryCfg {
    fn default() -> Self {
        Self {
            rotations: true,
            mirrors: true,
        }
    }
}

/// Errors surfaced by the pattern generator.
#[derive(Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// A negative point count was requested.
    NegativeCount { given: i64 },
    /// A geometry transform hit an empty shape.
    EmptyShape(EmptyShapeError),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeCount { given } => {
                write!(f, "point count must be non-negative, got {given}")
            }
            Self::EmptyShape(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GenerateError {}

impl From<EmptyShapeError> for GenerateError {
    fn from(e: EmptyShapeError) -> Self {
        Self::EmptyShape(e)
    }
}

/// The growth frontier of a shape: lattice points not yet in the shape that
/// are 4-connected to at least one of its points, in sorted order.
///
/// Candidates come from the Moore neighborhood of every point and are then
/// filtered down to those with an actual 4-connected link, so diagonal-only
/// contact never qualifies.
pub fn growth_frontier(shape: &Shape) -> Vec<Point> {
    let mut frontier = BTreeSet::new();
    for &p in shape.points() {
        for q in p.neighbors8() {
            if shape.contains(q) || frontier.contains(&q) {
                continue;
            }
            if Dir::ALL.iter().any(|&d| shape.contains(q.step(d))) {
                frontier.insert(q);
            }
        }
    }
    frontier.into_iter().collect()
}

/// Canonical key of a shape under `cfg`: the lexicographically smallest
/// sorted point list across the shape's orbit (identity, rotations if
/// enabled, mirrors of those if enabled), after normalization.
///
/// Two shapes are the same pattern iff their keys are equal.
pub fn canonical_key(shape: &Shape, cfg: SymmetryCfg) -> Result<Vec<Point>, EmptyShapeError> {
    let base = shape.normalized()?;
    let mut orbit = vec![base];
    if cfg.rotations {
        // Rotations of a normalized shape are already normalized.
        let [r90, r180, r270] = orbit[0].rotations()?;
        orbit.push(r90);
        orbit.push(r180);
        orbit.push(r270);
    }
    if cfg.mirrors {
        let mut mirrored = Vec::with_capacity(orbit.len());
        for s in &orbit {
            mirrored.push(s.mirrored()?);
        }
        orbit.append(&mut mirrored);
    }
    let mut key = orbit[0].sorted_points();
    for s in &orbit[1..] {
        let candidate = s.sorted_points();
        if candidate < key {
            key = candidate;
        }
    }
    Ok(key)
}

/// Remove shapes whose canonical key under `cfg` was already seen, keeping
/// the first occurrence. Idempotent: a second pass is a no-op.
pub fn dedup_shapes(shapes: Vec<Shape>, cfg: SymmetryCfg) -> Result<Vec<Shape>, GenerateError> {
    let mut seen: HashSet<Vec<Point>> = HashSet::with_capacity(shapes.len());
    let mut kept = Vec::new();
    for shape in shapes {
        if seen.insert(canonical_key(&shape, cfg)?) {
            kept.push(shape);
        }
    }
    Ok(kept)
}

/// All unique connected shapes of exactly `point_count` points under `cfg`.
///
/// - `point_count == 0` returns the empty set (explicit contract; the
///   recursive base case is one point, not zero).
/// - `point_count == 1` returns exactly the origin singleton.
/// - `point_count < 0` is a precondition violation.
///
/// Every returned shape is normalized (min x = min y = 0). For a fixed
/// `point_count` and `cfg` the result is deterministic, including order:
/// frontiers iterate in sorted order and dedup keeps first-seen.
pub fn generate_with(point_count: i64, cfg: SymmetryCfg) -> Result<Vec<Shape>, GenerateError> {
    if point_count < 0 {
        return Err(GenerateError::NegativeCount { given: point_count });
    }
    if point_count == 0 {
        return Ok(Vec::new());
    }
    let mut shapes = vec![Shape::origin()];
    for _ in 1..point_count {
        let mut candidates = Vec::new();
        for shape in &shapes {
            for p in growth_frontier(shape) {
                // Frontier points are never already in the shape.
                if let Some(grown) = shape.with_point(p) {
                    debug_assert!(grown.is_connected());
                    candidates.push(grown.normalized()?);
                }
            }
        }
        shapes = dedup_shapes(candidates, cfg)?;
    }
    Ok(shapes)
}

/// [`generate_with`] under the default symmetry group (free polyominoes).
pub fn generate(point_count: i64) -> Result<Vec<Shape>, GenerateError> {
    generate_with(point_count, SymmetryCfg::default())
}
