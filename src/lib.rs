//! Shapecycle: a guarded shape-alternation state machine
//!
//! A single displayed shape cycles triangle → circle → square → triangle each
//! time the alternation action runs. The state lives on the server; a browser
//! client reads and drives it over HTTP.
//!
//! # Core Concepts
//!
//! - **State**: the closed set of shapes via `ShapeKind` and the `State` trait
//! - **Guards**: the processing guard that rejects overlapping alternations
//! - **Descriptors**: pure render/educational attributes per shape
//! - **Engine**: the single owner of the shape store, applying the rules
//!
//! # Example
//!
//! ```rust
//! use shapecycle::core::ShapeKind;
//! use shapecycle::engine::AlternationEngine;
//!
//! let engine = AlternationEngine::new();
//! assert_eq!(engine.get_state().current_shape, ShapeKind::Triangle);
//!
//! let result = engine.alternate().unwrap();
//! assert_eq!(result.previous_shape, ShapeKind::Triangle);
//! assert_eq!(result.current_shape, ShapeKind::Circle);
//! assert_eq!(result.descriptor.color, "#4ECDC4");
//!
//! let state = engine.reset();
//! assert_eq!(state.current_shape, ShapeKind::Triangle);
//! assert!(state.processing_guard);
//! ```

pub mod config;
pub mod core;
pub mod descriptor;
pub mod effects;
pub mod engine;
pub mod error;
pub mod http;
pub mod store;

// Re-export commonly used types
pub use crate::core::{AlternationResult, Guard, ShapeKind, ShapeState, State};
pub use descriptor::ShapeDescriptor;
pub use engine::{AlternationEngine, SharedEngine};
pub use error::ShapeError;
