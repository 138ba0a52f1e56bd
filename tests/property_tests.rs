//! Property-based tests for the shape machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated starting states and operation sequences.

use chrono::Utc;
use proptest::prelude::*;
use shapecycle::core::{ShapeKind, ShapeState, State};
use shapecycle::descriptor::describe;
use shapecycle::engine::AlternationEngine;
use shapecycle::error::ShapeError;
use shapecycle::store::ShapeStore;

#[derive(Clone, Debug)]
enum Op {
    Alternate,
    Reset,
    GetState,
    Render(ShapeKind),
}

prop_compose! {
    fn arbitrary_shape()(variant in 0..3u8) -> ShapeKind {
        match variant {
            0 => ShapeKind::Triangle,
            1 => ShapeKind::Circle,
            _ => ShapeKind::Square,
        }
    }
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Alternate),
        Just(Op::Reset),
        Just(Op::GetState),
        arbitrary_shape().prop_map(Op::Render),
    ]
}

fn engine_at(shape: ShapeKind, ready: bool) -> AlternationEngine {
    AlternationEngine::with_store(ShapeStore::from_state(ShapeState {
        current_shape: shape,
        processing_guard: ready,
        last_updated: Utc::now(),
    }))
}

fn apply(engine: &AlternationEngine, op: &Op) {
    match op {
        Op::Alternate => {
            engine.alternate().unwrap();
        }
        Op::Reset => {
            engine.reset();
        }
        Op::GetState => {
            engine.get_state();
        }
        Op::Render(shape) => {
            engine.get_render_data(shape.name()).unwrap();
        }
    }
}

proptest! {
    #[test]
    fn alternation_follows_the_cycle(start in arbitrary_shape(), steps in 0usize..40) {
        let engine = engine_at(start, true);

        for _ in 0..steps {
            engine.alternate().unwrap();
        }

        let expected = ShapeKind::ALL[(start.position() + steps) % 3];
        prop_assert_eq!(engine.get_state().current_shape, expected);
    }

    #[test]
    fn each_result_is_one_cycle_step(start in arbitrary_shape(), steps in 1usize..20) {
        let engine = engine_at(start, true);

        for _ in 0..steps {
            let result = engine.alternate().unwrap();
            prop_assert_eq!(result.previous_shape.next(), result.current_shape);
            prop_assert_eq!(result.descriptor.shape_type, result.current_shape);
        }
    }

    #[test]
    fn busy_guard_rejects_without_mutation(shape in arbitrary_shape()) {
        let engine = engine_at(shape, false);
        let before = engine.get_state();

        let err = engine.alternate().unwrap_err();

        prop_assert_eq!(err, ShapeError::ButtonDisabled);
        prop_assert_eq!(engine.get_state(), before);
    }

    #[test]
    fn reset_is_idempotent(
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        resets in 1usize..5
    ) {
        let engine = AlternationEngine::new();
        for op in &ops {
            apply(&engine, op);
        }

        for _ in 0..resets {
            let state = engine.reset();
            prop_assert_eq!(state.current_shape, ShapeKind::Triangle);
            prop_assert!(state.processing_guard);
        }
    }

    #[test]
    fn descriptors_ignore_history(
        shape in arbitrary_shape(),
        ops in prop::collection::vec(arbitrary_op(), 0..20)
    ) {
        let engine = AlternationEngine::new();
        for op in &ops {
            apply(&engine, op);
        }

        prop_assert_eq!(engine.get_render_data(shape.name()).unwrap(), describe(shape));
    }

    #[test]
    fn unknown_identifiers_are_rejected(
        raw in "[a-zA-Z ]{0,12}",
        ops in prop::collection::vec(arbitrary_op(), 0..10)
    ) {
        prop_assume!(raw.parse::<ShapeKind>().is_err());

        let engine = AlternationEngine::new();
        for op in &ops {
            apply(&engine, op);
        }
        let before = engine.get_state();

        let err = engine.get_render_data(&raw).unwrap_err();

        prop_assert_eq!(err.code(), "INVALID_SHAPE_TYPE");
        prop_assert_eq!(engine.get_state(), before);
    }

    #[test]
    fn timestamps_never_decrease(ops in prop::collection::vec(arbitrary_op(), 1..30)) {
        let engine = AlternationEngine::new();
        let mut last = engine.get_state().last_updated;

        for op in &ops {
            apply(&engine, op);
            let now = engine.get_state().last_updated;
            prop_assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn state_roundtrip_serialization(shape in arbitrary_shape(), ready in any::<bool>()) {
        let state = ShapeState {
            current_shape: shape,
            processing_guard: ready,
            last_updated: Utc::now(),
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: ShapeState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }
}
