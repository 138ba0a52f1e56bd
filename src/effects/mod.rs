//! Engine operations as Stillwater effects.
//!
//! This module is the "imperative shell" around the engine. Each function
//! describes one operation without running it; the HTTP layer runs the
//! effect against the shared engine it holds as environment.
//!
//! Every operation returns a `BoxedEffect` (one allocation per request) so
//! handlers get a nameable effect type whose future can cross await points
//! inside axum.

use crate::core::{AlternationResult, ShapeState};
use crate::descriptor::ShapeDescriptor;
use crate::engine::SharedEngine;
use crate::error::ShapeError;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;

/// Effect over the shared engine that fails with [`ShapeError`].
pub type EngineEffect<T> = BoxedEffect<T, ShapeError, SharedEngine>;

/// Read the current state.
pub fn get_state() -> EngineEffect<ShapeState> {
    from_fn(|engine: &SharedEngine| Ok(engine.get_state())).boxed()
}

/// Validate `shape_type` and build its descriptor.
pub fn get_render_data(shape_type: String) -> EngineEffect<ShapeDescriptor> {
    from_fn(move |engine: &SharedEngine| engine.get_render_data(&shape_type)).boxed()
}

/// Run one guarded alternation.
pub fn alternate() -> EngineEffect<AlternationResult> {
    from_fn(|engine: &SharedEngine| engine.alternate()).boxed()
}

/// Reset to the start-up state.
pub fn reset() -> EngineEffect<ShapeState> {
    from_fn(|engine: &SharedEngine| Ok(engine.reset())).boxed()
}
