//! Core shape machine types.
//!
//! This module contains the pure part of the shape machine:
//! - Shape identities via the `State` trait and `ShapeKind`
//! - Guard predicates for transition control
//! - The state snapshot and alternation result records
//!
//! Nothing in this module performs I/O or holds shared state.

mod guard;
mod record;
mod state;

pub use guard::Guard;
pub use record::{AlternationResult, ShapeState};
pub use state::{ShapeKind, State};
