//! HTTP handlers for the gateway

use axum::extract::{Path, State};
use axum::Json;

use error::{AppError, Operand};

use super::dto::{BackendStatus, GcdResult, HealthResponse};
use super::{ApiError, AppState};

/// Parse a path segment as a base-10 `u64`.
///
/// Only ASCII digits are accepted: signs, whitespace, empty input and
/// values above `u64::MAX` are rejected.
pub fn parse_operand(raw: &str, operand: Operand) -> Result<u64, AppError> {
    if raw.is_empty() || !raw.bytes().all(|c| c.is_ascii_digit()) {
        return Err(AppError::InvalidParameter(operand));
    }
    raw.parse().map_err(|_| AppError::InvalidParameter(operand))
}

/// Handler for GET /gcd/:a/:b
pub async fn compute_gcd(
    State(state): State<AppState>,
    Path((a, b)): Path<(String, String)>,
) -> Result<Json<GcdResult>, ApiError> {
    let a = parse_operand(&a, Operand::A)?;
    let b = parse_operand(&b, Operand::B)?;

    let result = state.router.compute(a, b).await?;
    tracing::debug!(a, b, result, "GCD request served");

    Ok(Json(GcdResult {
        result: result.to_string(),
    }))
}

/// Handler for GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let gcd_service = match state.router.backend_health().await {
        Ok(health) => BackendStatus {
            healthy: health.healthy,
            version: Some(health.version),
            error: None,
        },
        Err(e) => {
            tracing::warn!("GCD service health check failed: {}", e);
            BackendStatus {
                healthy: false,
                version: None,
                error: Some(e.to_string()),
            }
        }
    };

    Json(HealthResponse {
        healthy: true,
        version: state.version,
        gcd_service,
    })
}
