//! In-memory holder for the shape state.
//!
//! There is exactly one `ShapeStore` per process. It is owned by the
//! [`AlternationEngine`](crate::engine::AlternationEngine), which is the only
//! code allowed to mutate it.

use crate::core::{ShapeKind, ShapeState, State};
use chrono::Utc;
use tracing::debug;

/// Holds the current shape, the processing guard and the last-modified time.
///
/// Every mutation refreshes `last_updated`. The refreshed value never moves
/// backwards, even if the wall clock does.
///
/// # Example
///
/// ```rust
/// use shapecycle::core::ShapeKind;
/// use shapecycle::store::ShapeStore;
///
/// let mut store = ShapeStore::new();
/// let next = ShapeStore::next_shape_in_cycle(store.get_current_shape());
/// store.set_current_shape(next);
///
/// assert_eq!(store.get_current_shape(), ShapeKind::Circle);
///
/// store.reset();
/// assert_eq!(store.get_current_shape(), ShapeKind::Triangle);
/// ```
#[derive(Clone, Debug)]
pub struct ShapeStore {
    state: ShapeState,
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeStore {
    /// Create a store holding the start-up state.
    pub fn new() -> Self {
        Self::from_state(ShapeState::initial())
    }

    /// Create a store holding an arbitrary state.
    pub fn from_state(state: ShapeState) -> Self {
        Self { state }
    }

    /// Copy of the current state.
    pub fn get_state(&self) -> ShapeState {
        self.state
    }

    pub fn get_current_shape(&self) -> ShapeKind {
        self.state.current_shape
    }

    pub fn get_guard(&self) -> bool {
        self.state.processing_guard
    }

    pub fn set_current_shape(&mut self, shape: ShapeKind) {
        self.state.current_shape = shape;
        self.touch();
        debug!(shape = %shape, "current shape set");
    }

    pub fn set_guard(&mut self, enabled: bool) {
        self.state.processing_guard = enabled;
        self.touch();
        debug!(enabled, "processing guard set");
    }

    /// Cyclic successor: triangle, circle, square, then triangle again.
    pub fn next_shape_in_cycle(shape: ShapeKind) -> ShapeKind {
        shape.next()
    }

    /// Return to the start-up state regardless of the current one.
    pub fn reset(&mut self) {
        let at = Utc::now().max(self.state.last_updated);
        self.state = ShapeState::initial_at(at);
        debug!(at = %at, "shape store reset");
    }

    fn touch(&mut self) {
        self.state.last_updated = Utc::now().max(self.state.last_updated);
    }
}
