//! Shape identities and the `State` trait they implement.
//!
//! The shape machine has exactly three states and no terminal one: every
//! state has a single successor and the sequence wraps around.

use crate::error::ShapeError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;

/// Trait for states of a cyclic state machine.
///
/// All methods are pure. A state names itself and knows its successor;
/// there are no final states, so repeatedly calling `next` never stops.
///
/// # Required Traits
///
/// - `Clone`: states are copied into results handed to callers
/// - `PartialEq`: states must be comparable for transition logic
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states travel over the wire
///
/// # Example
///
/// ```rust
/// use shapecycle::core::{ShapeKind, State};
///
/// let mut shape = ShapeKind::Triangle;
/// for _ in 0..3 {
///     shape = shape.next();
/// }
/// assert_eq!(shape, ShapeKind::Triangle);
/// assert_eq!(shape.name(), "triangle");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's wire name for display/logging.
    fn name(&self) -> &str;

    /// The cyclic successor of this state.
    fn next(&self) -> Self;
}

/// The closed set of shapes the machine cycles through.
///
/// On the wire a shape is its lowercase name (`"triangle"`, `"circle"`,
/// `"square"`). Parsing is case-sensitive.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Triangle,
    Circle,
    Square,
}

impl ShapeKind {
    /// Every shape, in cycle order.
    pub const ALL: [ShapeKind; 3] = [Self::Triangle, Self::Circle, Self::Square];

    /// The shape the machine starts from and resets to.
    pub const INITIAL: ShapeKind = Self::Triangle;

    /// Zero-based index of this shape within [`ShapeKind::ALL`].
    pub fn position(self) -> usize {
        match self {
            Self::Triangle => 0,
            Self::Circle => 1,
            Self::Square => 2,
        }
    }
}

impl State for ShapeKind {
    fn name(&self) -> &str {
        match self {
            Self::Triangle => "triangle",
            Self::Circle => "circle",
            Self::Square => "square",
        }
    }

    fn next(&self) -> Self {
        match self {
            Self::Triangle => Self::Circle,
            Self::Circle => Self::Square,
            Self::Square => Self::Triangle,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.name() == value)
            .ok_or_else(|| ShapeError::InvalidShapeType {
                value: value.to_string(),
            })
    }
}
