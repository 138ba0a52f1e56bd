//! Errors raised by the shape core.

use thiserror::Error;

/// Errors that can occur while reading or alternating shapes.
///
/// Every variant carries a stable machine-readable code (see [`ShapeError::code`])
/// that the HTTP layer forwards to clients unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The supplied identifier is not one of the known shape kinds.
    #[error("Invalid shape type")]
    InvalidShapeType { value: String },

    /// An alternation was requested while the processing guard was busy.
    #[error("Button is currently disabled")]
    ButtonDisabled,
}

impl ShapeError {
    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidShapeType { .. } => "INVALID_SHAPE_TYPE",
            Self::ButtonDisabled => "BUTTON_DISABLED",
        }
    }
}
