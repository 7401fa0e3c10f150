use crate::error::{ApiError, ErrorResponse};
use crate::handlers::render::render_page;
use crate::models::RenderInstruction;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::HeaderMap, response::Response};

/// GET /about handler - About page
#[utoipa::path(
    get,
    path = routes::ABOUT,
    responses(
        (status = 200, description = "Render instruction for view \"About\" (JSON with `X-Inertia: true`, mounted HTML otherwise)", body = RenderInstruction),
        (status = 500, description = "Page module could not be resolved", body = ErrorResponse)
    ),
    tag = "pages"
)]
pub async fn about_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    render_page(&state, &headers, routes::ABOUT).await
}
