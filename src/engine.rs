//! The alternation engine: guarded cyclic transitions over the shape store.

use crate::core::{AlternationResult, Guard, ShapeState};
use crate::descriptor::{describe, describe_raw, ShapeDescriptor, TRANSITION_TIME_MS};
use crate::error::ShapeError;
use crate::store::ShapeStore;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::{info, warn};

const TRANSITION_BUDGET: Duration = Duration::from_millis(TRANSITION_TIME_MS);

/// Engine handle shared between request handlers.
pub type SharedEngine = Arc<AlternationEngine>;

/// Owns the shape store and applies the business rules to it.
///
/// The store lives behind a mutex, and `alternate` holds that mutex from the
/// guard check until the guard is released again. Concurrent callers are
/// serialized, so each one observes the shape left by the previous one and
/// no step of the cycle is lost or repeated.
pub struct AlternationEngine {
    store: Mutex<ShapeStore>,
    ready: Guard<ShapeState>,
}

impl Default for AlternationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AlternationEngine {
    /// Create an engine in the start-up state.
    pub fn new() -> Self {
        Self::with_store(ShapeStore::new())
    }

    /// Create an engine around an existing store.
    pub fn with_store(store: ShapeStore) -> Self {
        Self {
            store: Mutex::new(store),
            ready: Guard::new(|state: &ShapeState| state.is_ready()),
        }
    }

    /// Wrap the engine for sharing across tasks.
    pub fn shared(self) -> SharedEngine {
        Arc::new(self)
    }

    // The store is plain data and every critical section leaves it
    // consistent, so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, ShapeStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current state snapshot.
    pub fn get_state(&self) -> ShapeState {
        self.lock().get_state()
    }

    /// Validate a raw shape identifier and return its descriptor.
    pub fn get_render_data(&self, shape_type: &str) -> Result<ShapeDescriptor, ShapeError> {
        describe_raw(shape_type)
            .inspect_err(|_| warn!(shape_type, "render data requested for unknown shape"))
    }

    /// Advance to the next shape in the cycle.
    ///
    /// Fails with [`ShapeError::ButtonDisabled`] without touching the state
    /// if the processing guard is busy.
    pub fn alternate(&self) -> Result<AlternationResult, ShapeError> {
        let started = Instant::now();

        let (previous, next, timestamp) = {
            let mut store = self.lock();
            if !self.ready.check(&store.get_state()) {
                warn!(
                    shape = %store.get_current_shape(),
                    "alternation rejected while guard is busy"
                );
                return Err(ShapeError::ButtonDisabled);
            }

            store.set_guard(false);
            let previous = store.get_current_shape();
            let next = ShapeStore::next_shape_in_cycle(previous);
            store.set_current_shape(next);
            store.set_guard(true);

            (previous, next, store.get_state().last_updated)
        };

        let elapsed = started.elapsed();
        if elapsed > TRANSITION_BUDGET {
            warn!(
                ?elapsed,
                budget = ?TRANSITION_BUDGET,
                "alternation exceeded its time budget"
            );
        }

        info!(from = %previous, to = %next, "shape alternated");

        Ok(AlternationResult {
            previous_shape: previous,
            current_shape: next,
            descriptor: describe(next),
            timestamp,
        })
    }

    /// Return to the start-up state. Always succeeds.
    pub fn reset(&self) -> ShapeState {
        let mut store = self.lock();
        store.reset();
        let state = store.get_state();
        info!(shape = %state.current_shape, "shape state reset");
        state
    }
}
