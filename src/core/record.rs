//! Records handed out by the shape machine.
//!
//! Both records are plain values: callers always receive copies and can
//! never reach the state held inside the engine through them.

use super::state::ShapeKind;
use crate::descriptor::ShapeDescriptor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of the single shape state owned by the engine.
///
/// `processing_guard` is `true` when the machine is ready for an alternation
/// and `false` while one is in flight. On the wire it is `button_state`,
/// the name the browser client binds its button to.
///
/// # Example
///
/// ```rust
/// use shapecycle::core::{ShapeKind, ShapeState};
///
/// let state = ShapeState::initial();
/// assert_eq!(state.current_shape, ShapeKind::Triangle);
/// assert!(state.is_ready());
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct ShapeState {
    /// The shape currently displayed
    pub current_shape: ShapeKind,
    /// Ready flag for the alternation action
    #[serde(rename = "button_state")]
    pub processing_guard: bool,
    /// When the record was last mutated
    pub last_updated: DateTime<Utc>,
}

impl ShapeState {
    /// The start-up record: triangle, ready, stamped now.
    pub fn initial() -> Self {
        Self::initial_at(Utc::now())
    }

    /// The start-up record stamped at `at`.
    pub fn initial_at(at: DateTime<Utc>) -> Self {
        Self {
            current_shape: ShapeKind::INITIAL,
            processing_guard: true,
            last_updated: at,
        }
    }

    /// Whether an alternation may start from this state.
    pub fn is_ready(&self) -> bool {
        self.processing_guard
    }
}

/// Outcome of one successful alternation.
///
/// The result is ephemeral: it is returned to the caller and never stored.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct AlternationResult {
    /// The shape being transitioned from
    pub previous_shape: ShapeKind,
    /// The shape being transitioned to
    pub current_shape: ShapeKind,
    /// Render attributes of the new shape
    #[serde(rename = "render_data")]
    pub descriptor: ShapeDescriptor,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::describe;
    use serde_json::json;

    #[test]
    fn initial_state_is_ready_triangle() {
        let at = Utc::now();
        let state = ShapeState::initial_at(at);

        assert_eq!(state.current_shape, ShapeKind::Triangle);
        assert!(state.processing_guard);
        assert_eq!(state.last_updated, at);
    }

    #[test]
    fn state_uses_client_field_names() {
        let state = ShapeState::initial();
        let value = serde_json::to_value(state).unwrap();

        assert_eq!(value["current_shape"], json!("triangle"));
        assert_eq!(value["button_state"], json!(true));
        assert!(value["last_updated"].is_string());
        assert!(value.get("processing_guard").is_none());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = ShapeState::initial();
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: ShapeState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn result_nests_render_data() {
        let result = AlternationResult {
            previous_shape: ShapeKind::Triangle,
            current_shape: ShapeKind::Circle,
            descriptor: describe(ShapeKind::Circle),
            timestamp: Utc::now(),
        };
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["previous_shape"], json!("triangle"));
        assert_eq!(value["current_shape"], json!("circle"));
        assert_eq!(value["render_data"]["shape_color"], json!("#4ECDC4"));
        assert!(value["timestamp"].is_string());
    }
}
