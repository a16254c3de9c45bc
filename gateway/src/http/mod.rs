//! HTTP surface of the gateway
//!
//! - `GET /gcd/:a/:b` computes gcd(a, b) and answers `{"result": "<n>"}`
//! - `GET /health` reports gateway and backend health

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::router::ServiceRouter;

pub mod dto;
pub mod error;
pub mod handlers;

pub use self::error::ApiError;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<ServiceRouter>,
    pub version: String,
}

/// Build the gateway application
pub fn app(router: Arc<ServiceRouter>, version: impl Into<String>) -> Router {
    let state = AppState {
        router,
        version: version.into(),
    };

    Router::new()
        .route("/gcd/:a/:b", get(handlers::compute_gcd))
        .route("/health", get(handlers::health))
        .with_state(state)
}
