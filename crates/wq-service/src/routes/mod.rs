//! API route definitions and router builder.

pub mod health;

use std::any::Any;

use axum::Router;
use axum::extract::OriginalUri;
use axum::http::Method;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use wq_protocol::routes::{API_PREFIX, HEALTH};

use crate::error::{ApiError, ApiResult};

/// Build the Axum router with all routes and middleware.
pub fn build_router() -> Router {
    with_middleware(register_group(Router::new(), API_PREFIX, water_v1()))
}

/// Endpoints of the `/api/v1/water` group, bound to relative paths.
pub fn water_v1() -> Router {
    Router::new().route(HEALTH, get(health::health).fallback(method_not_allowed))
}

/// Mount `group` under `prefix` on `base`. Only composes paths.
pub fn register_group(base: Router, prefix: &str, group: Router) -> Router {
    base.nest(prefix, group)
}

/// Default cross-cutting middleware: per-request logging, panic recovery,
/// CORS and a JSON 404 for unmatched paths.
pub fn with_middleware(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    router
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(trace)
        .layer(cors)
}

async fn not_found(OriginalUri(uri): OriginalUri) -> ApiResult<()> {
    Err(ApiError::NotFound(uri.path().to_string()))
}

async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ApiResult<()> {
    Err(ApiError::MethodNotAllowed(format!("{method} {}", uri.path())))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "handler panicked");

    ApiError::Internal("unexpected server fault".into()).into_response()
}
