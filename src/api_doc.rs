use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::RenderInstruction;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "gofra-web API",
        version = "1.0.0",
        description = "Page server mapping URL paths to named view render instructions"
    ),
    paths(
        handlers::health::health_handler,
        handlers::index::index_handler,
        handlers::about::about_handler
    ),
    components(schemas(RenderInstruction, ErrorResponse, HealthResponse, UnhealthyResponse)),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "pages", description = "Page routes returning render instructions")
    )
)]
pub struct ApiDoc;
