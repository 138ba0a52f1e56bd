//! REST handlers for the shape endpoints.
//!
//! Each handler runs one effect from [`crate::effects`] against the shared
//! engine and wraps the output in the success envelope.

use crate::core::{AlternationResult, ShapeState};
use crate::descriptor::ShapeDescriptor;
use crate::effects;
use crate::engine::SharedEngine;
use crate::error::ShapeError;
use crate::http::envelope::{ApiError, ApiResponse};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::Uri;
use axum::Json;
use stillwater::effect::Effect;
use tracing::debug;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// GET `/shape/state` - Current shape, guard and last update time.
pub async fn get_state_handler(State(engine): State<SharedEngine>) -> ApiResult<ShapeState> {
    let state = effects::get_state().run(&engine).await?;
    Ok(Json(ApiResponse::ok(state)))
}

/// GET `/shape/render/{shape_type}` - Render descriptor for one shape.
///
/// # Response
/// - `200 OK` with the descriptor
/// - `400 BAD_REQUEST` with `INVALID_SHAPE_TYPE` for unknown shapes, including
///   identifiers that do not decode to UTF-8
pub async fn get_render_data_handler(
    State(engine): State<SharedEngine>,
    uri: Uri,
    shape_type: Result<Path<String>, PathRejection>,
) -> ApiResult<ShapeDescriptor> {
    let shape_type = match shape_type {
        Ok(Path(shape_type)) => shape_type,
        Err(rejection) => {
            debug!("undecodable shape identifier: {rejection}");
            return Err(ShapeError::InvalidShapeType {
                value: last_segment(&uri).to_string(),
            }
            .into());
        }
    };

    let descriptor = effects::get_render_data(shape_type).run(&engine).await?;
    Ok(Json(ApiResponse::ok(descriptor)))
}

/// POST `/shape/alternate` - Advance to the next shape in the cycle.
///
/// # Response
/// - `200 OK` with previous shape, new shape, render data and timestamp
/// - `400 BAD_REQUEST` with `BUTTON_DISABLED` while the guard is busy
pub async fn alternate_handler(
    State(engine): State<SharedEngine>,
) -> ApiResult<AlternationResult> {
    let result = effects::alternate().run(&engine).await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// POST `/shape/reset` - Back to a ready triangle.
pub async fn reset_handler(State(engine): State<SharedEngine>) -> ApiResult<ShapeState> {
    let state = effects::reset().run(&engine).await?;
    Ok(Json(ApiResponse::ok(state)))
}

/// Raw, still percent-encoded, final path segment.
fn last_segment(uri: &Uri) -> &str {
    uri.path().rsplit('/').next().unwrap_or_default()
}
