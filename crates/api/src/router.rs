//! HTTP application assembly.
//!
//! [`build_app_router`] is the single place the route tree meets the
//! middleware; `main.rs` and the integration tests in `tests/common` both
//! call it, so tests run against the production stack.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Header carrying the per-request UUID.
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Mount `/health` and `/api/...` and wrap them in the middleware stack.
///
/// Layers listed last see the request first, so a request passes through:
/// CORS, request-id assignment, tracing span, request-id echo on the
/// response, timeout (408), panic recovery (500), then the handler.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(build_cors_layer(config))
        .with_state(state)
}

/// CORS for the one browser origin in `CORS_ORIGIN`.
///
/// The origin is passed as a list so `Access-Control-Allow-Origin` is only
/// echoed back to a matching `Origin`; other origins get no CORS headers.
///
/// # Panics
///
/// Panics if the configured origin is not a valid header value.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origin: HeaderValue = config
        .cors_origin
        .parse()
        .unwrap_or_else(|e| panic!("Invalid CORS origin '{}': {e}", config.cors_origin));

    CorsLayer::new()
        .allow_origin([origin])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}
