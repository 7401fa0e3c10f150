use crate::error::{HealthResponse, UnhealthyResponse};
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET /health handler - Health check endpoint
///
/// Verifies that every view named in the route table resolves to a registered
/// page module. Returns 200 OK when the table is fully servable, 503 Service
/// Unavailable otherwise.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = UnhealthyResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<HealthResponse>), (StatusCode, Json<UnhealthyResponse>)> {
    let missing: Vec<&str> = routes::route_table()
        .iter()
        .map(|entry| entry.view_name)
        .filter(|view| !state.registry.contains(view))
        .collect();

    if missing.is_empty() {
        tracing::debug!("Health check passed");
        Ok((
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
            }),
        ))
    } else {
        tracing::error!("Health check failed: unresolved views: {:?}", missing);
        Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(UnhealthyResponse {
                status: "unhealthy".to_string(),
                error: format!("No page module registered for: {}", missing.join(", ")),
            }),
        ))
    }
}
