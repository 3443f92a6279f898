//! Lattice geometry (points and shape transforms).
//!
//! Purpose
//! - Provide the point arithmetic (unit steps, Moore neighborhood, quadrant
//!   test) and the shape-level transforms (normalize to first quadrant,
//!   rotate 90/180/270, mirror) the pattern generator is built on.
//!
//! Why this design
//! - Everything here is a pure function on immutable value types; there is no
//!   instance state, so the module exposes inherent methods on `Point` and
//!   `Shape` rather than any stateful helper object.
//! - Rotations and mirror are computed relative to the shape's own bounding
//!   box, so on normalized input the results stay in the first quadrant with
//!   no extra normalization pass.
//!
//! Code cross-refs: `pattern::{generate, canonical_key}`

mod point;
mod shape;

pub use point::{Dir, Point};
pub use shape::{EmptyShapeError, Shape};
