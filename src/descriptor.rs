//! Render descriptors for each shape.
//!
//! The lookup table here is the single source for the visual and
//! educational attributes of a shape. Descriptors are derived on every call
//! and never stored, so two calls for the same kind always agree.

use crate::core::ShapeKind;
use crate::error::ShapeError;
use serde::{Deserialize, Serialize};

/// Smallest size, in pixels, a shape may be rendered at.
pub const MIN_SIZE: u32 = 150;

/// Largest size, in pixels, a shape may be rendered at.
pub const MAX_SIZE: u32 = 250;

/// Size, in pixels, every descriptor carries.
pub const DEFAULT_SIZE: u32 = 200;

/// Border width, in pixels, shared by all shapes.
pub const BORDER_WIDTH: u32 = 2;

const _: () = assert!(DEFAULT_SIZE >= MIN_SIZE && DEFAULT_SIZE <= MAX_SIZE);

/// Upper bound, in milliseconds, for committing one alternation.
pub const TRANSITION_TIME_MS: u64 = 50;

struct Entry {
    color: &'static str,
    vertices: u32,
    sides: u32,
    properties: &'static [&'static str],
}

const TRIANGLE: Entry = Entry {
    color: "#FF6B6B",
    vertices: 3,
    sides: 3,
    properties: &["3 vértices", "3 lados", "Ângulos internos somam 180°"],
};

const CIRCLE: Entry = Entry {
    color: "#4ECDC4",
    vertices: 0,
    sides: 0,
    properties: &[
        "Sem vértices",
        "Circunferência contínua",
        "Todos os pontos equidistantes do centro",
    ],
};

const SQUARE: Entry = Entry {
    color: "#45B7D1",
    vertices: 4,
    sides: 4,
    properties: &["4 vértices", "4 lados iguais", "4 ângulos retos (90°)"],
};

fn entry(kind: ShapeKind) -> &'static Entry {
    match kind {
        ShapeKind::Triangle => &TRIANGLE,
        ShapeKind::Circle => &CIRCLE,
        ShapeKind::Square => &SQUARE,
    }
}

/// Where a shape is drawn. Centering is left to the client, so this is
/// always the origin.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Position {
    #[serde(rename = "position_x")]
    pub x: i32,
    #[serde(rename = "position_y")]
    pub y: i32,
}

/// Educational attributes of a shape.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Characteristics {
    pub vertices: u32,
    pub sides: u32,
    pub border_width: u32,
    /// Human-readable facts, in display order
    #[serde(rename = "shape_properties")]
    pub properties: Vec<String>,
}

/// Everything a client needs to draw a shape.
///
/// # Example
///
/// ```rust
/// use shapecycle::core::ShapeKind;
/// use shapecycle::descriptor::describe;
///
/// let circle = describe(ShapeKind::Circle);
/// assert_eq!(circle.color, "#4ECDC4");
/// assert_eq!(circle.size, 200);
/// assert_eq!(circle.characteristics.vertices, 0);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    pub shape_type: ShapeKind,
    #[serde(rename = "shape_size")]
    pub size: u32,
    #[serde(rename = "shape_color")]
    pub color: String,
    #[serde(flatten)]
    pub position: Position,
    #[serde(rename = "shape_characteristics")]
    pub characteristics: Characteristics,
}

/// Build the descriptor for a shape.
pub fn describe(kind: ShapeKind) -> ShapeDescriptor {
    let entry = entry(kind);
    ShapeDescriptor {
        shape_type: kind,
        size: DEFAULT_SIZE,
        color: entry.color.to_string(),
        position: Position::default(),
        characteristics: Characteristics {
            vertices: entry.vertices,
            sides: entry.sides,
            border_width: BORDER_WIDTH,
            properties: entry.properties.iter().map(|p| p.to_string()).collect(),
        },
    }
}

/// Validate a raw shape identifier and build its descriptor.
///
/// This is the boundary where untrusted identifiers become [`ShapeKind`]s.
pub fn describe_raw(raw: &str) -> Result<ShapeDescriptor, ShapeError> {
    raw.parse::<ShapeKind>().map(describe)
}
