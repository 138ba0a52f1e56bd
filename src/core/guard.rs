//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions that determine whether a transition
//! can execute. The alternation engine keeps one over the [`ShapeState`]
//! record to decide whether the processing guard allows a new alternation.
//!
//! [`ShapeState`]: crate::core::ShapeState

/// Pure predicate that determines if a transition can execute.
///
/// Guards are evaluated before attempting a transition, while the state
/// they inspect is still untouched.
///
/// # Example
///
/// ```rust
/// use shapecycle::core::{Guard, ShapeState};
///
/// let ready = Guard::new(|state: &ShapeState| state.processing_guard);
///
/// let mut state = ShapeState::initial();
/// assert!(ready.check(&state));
///
/// state.processing_guard = false;
/// assert!(!ready.check(&state));
/// ```
pub struct Guard<T> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Check if the guard allows a transition from this state.
    pub fn check(&self, state: &T) -> bool {
        (self.predicate)(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ShapeKind, ShapeState};

    fn state(shape: ShapeKind, ready: bool) -> ShapeState {
        ShapeState {
            current_shape: shape,
            processing_guard: ready,
            last_updated: chrono::Utc::now(),
        }
    }

    #[test]
    fn guard_allows_ready_states() {
        let guard = Guard::new(|s: &ShapeState| s.processing_guard);

        assert!(guard.check(&state(ShapeKind::Triangle, true)));
        assert!(!guard.check(&state(ShapeKind::Triangle, false)));
    }

    #[test]
    fn guard_ignores_shape_identity() {
        let guard = Guard::new(|s: &ShapeState| s.processing_guard);

        for shape in ShapeKind::ALL {
            assert!(guard.check(&state(shape, true)));
            assert!(!guard.check(&state(shape, false)));
        }
    }

    #[test]
    fn guard_is_deterministic() {
        let busy = state(ShapeKind::Circle, false);
        let guard = Guard::new(|s: &ShapeState| s.processing_guard);

        assert_eq!(guard.check(&busy), guard.check(&busy));
    }

    #[test]
    fn guard_can_use_complex_predicates() {
        let guard = Guard::new(|s: &ShapeState| {
            s.processing_guard && matches!(s.current_shape, ShapeKind::Square)
        });

        assert!(guard.check(&state(ShapeKind::Square, true)));
        assert!(!guard.check(&state(ShapeKind::Square, false)));
        assert!(!guard.check(&state(ShapeKind::Circle, true)));
    }
}
