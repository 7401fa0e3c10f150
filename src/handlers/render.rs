use crate::error::ApiError;
use crate::mount::Bootstrap;
use crate::routes;
use crate::state::AppState;
use axum::{
    Json,
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
};

/// Header marking a request that wants the bare render instruction as JSON
/// instead of the mounted HTML document.
pub const INSTRUCTION_HEADER: &str = "x-inertia";

/// Shared respond path for every page route: look up the route entry, build
/// its render instruction, then either hand the instruction back as JSON or
/// mount it into a full document.
pub async fn render_page(
    state: &AppState,
    headers: &HeaderMap,
    path: &'static str,
) -> Result<Response, ApiError> {
    let entry =
        routes::find_entry(path).ok_or_else(|| ApiError::UnregisteredRoute(path.to_string()))?;
    let instruction = entry.instruction();

    if wants_instruction(headers) {
        tracing::debug!(path, view = %instruction.view_name, "serving render instruction");
        return Ok(Json(instruction).into_response());
    }

    tracing::debug!(path, view = %instruction.view_name, "mounting page");
    let bootstrap = Bootstrap::new(&state.registry, &state.config.app_name);
    let document = bootstrap.mount(&instruction).await?;
    Ok(Html(document.into_string()).into_response())
}

fn wants_instruction(headers: &HeaderMap) -> bool {
    headers
        .get(INSTRUCTION_HEADER)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == "true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_must_equal_true() {
        let mut headers = HeaderMap::new();
        assert!(!wants_instruction(&headers));

        headers.insert(INSTRUCTION_HEADER, "false".parse().unwrap());
        assert!(!wants_instruction(&headers));

        headers.insert(INSTRUCTION_HEADER, "true".parse().unwrap());
        assert!(wants_instruction(&headers));
    }
}
