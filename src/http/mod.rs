//! HTTP façade over the alternation engine.

pub mod envelope;
pub mod handlers;

use crate::config::Config;
use crate::engine::SharedEngine;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use envelope::ApiError;
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use envelope::{ApiResponse, ErrorBody, ErrorResponse};

/// The four shape routes, without prefix or middleware.
pub fn shape_routes() -> Router<SharedEngine> {
    Router::new()
        .route("/shape/state", get(handlers::get_state_handler))
        .route(
            "/shape/render/{shape_type}",
            get(handlers::get_render_data_handler),
        )
        .route("/shape/alternate", post(handlers::alternate_handler))
        .route("/shape/reset", post(handlers::reset_handler))
}

/// Full application: shape routes under the configured prefix, optional
/// static assets, request tracing and a 500 envelope for panics.
pub fn app(engine: SharedEngine, config: &Config) -> Router {
    let router = if config.api_prefix.is_empty() {
        Router::<SharedEngine>::new().merge(shape_routes())
    } else {
        Router::<SharedEngine>::new().nest(&config.api_prefix, shape_routes())
    };

    let router = match &config.static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(engine)
}

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let reason = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    ApiError::Internal(reason).into_response()
}
