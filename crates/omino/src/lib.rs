//! Polyomino enumeration on the integer lattice.
//!
//! Purpose
//! - Enumerate all distinct connected shapes buildable by placing a fixed
//!   number of 4-connected points on a 2D integer lattice, deduplicated under
//!   translation, rotation, and mirroring.
//!
//! Layout
//! - `grid`: point arithmetic and shape-level geometric transforms (leaf).
//! - `pattern`: growth loop, canonical-form dedup, and a reproducible
//!   random-walk sampler. Depends on `grid` only.

pub mod grid;
pub mod pattern;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::grid::{Dir, EmptyShapeError, Point, Shape};
    pub use crate::pattern::rand::{draw_shape_walk, ReplayToken};
    pub use crate::pattern::{
        canonical_key, dedup_shapes, generate, generate_with, GenerateError, SymmetryCfg,
    };
}
