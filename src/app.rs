use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::models::RouteEntry;
use crate::routes;
use crate::state::AppState;
use axum::{Router, routing::get};
use std::collections::HashSet;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Build the service router from the static route table.
///
/// Fails when the table violates its path-uniqueness invariant.
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    ensure_unique_paths(&routes::route_table())?;

    let router = Router::new()
        .route(routes::INDEX, get(handlers::index_handler))
        .route(routes::ABOUT, get(handlers::about_handler))
        .route(routes::HEALTH, get(handlers::health_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(router)
}

fn ensure_unique_paths(table: &[RouteEntry]) -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    for entry in table {
        if !seen.insert(entry.path) {
            anyhow::bail!("duplicate path in route table: {}", entry.path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::handlers::render::INSTRUCTION_HEADER;
    use crate::models::{Props, RenderInstruction};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn setup_app() -> Router {
        let config = Config {
            app_name: "GOFRA".to_string(),
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
        };
        build_router(AppState::new(config)).unwrap()
    }

    #[tokio::test]
    async fn test_every_entry_serves_its_view() {
        for entry in routes::route_table() {
            let response = setup_app()
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri(entry.path)
                        .header(INSTRUCTION_HEADER, "true")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);

            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let instruction: RenderInstruction = serde_json::from_slice(&body).unwrap();
            assert_eq!(instruction.view_name, entry.view_name);
            assert_eq!(instruction.props, entry.props);
        }
    }

    #[tokio::test]
    async fn test_unmatched_path_falls_through_to_404() {
        let response = setup_app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_duplicate_paths_rejected() {
        let table = vec![
            RouteEntry {
                path: "/",
                view_name: "Index",
                props: Props::new(),
            },
            RouteEntry {
                path: "/",
                view_name: "About",
                props: Props::new(),
            },
        ];

        let result = ensure_unique_paths(&table);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("duplicate path"));
    }

    #[test]
    fn test_route_table_passes_uniqueness_check() {
        assert!(ensure_unique_paths(&routes::route_table()).is_ok());
    }
}
