use utoipa::OpenApi;

use crate::api::handlers::{DivideParams, DivideResponse};
use crate::errors::{ErrorCode, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Divide Demo Service",
        version = "0.1.0",
        description = "Divides two integers and reports failures as timestamped JSON error responses.",
    ),
    paths(
        crate::api::handlers::health,
        crate::api::handlers::hello,
        crate::api::handlers::divide,
    ),
    components(
        schemas(
            DivideParams,
            DivideResponse,
            ErrorResponse,
            ErrorCode,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "demo", description = "Demo endpoints"),
    )
)]
pub struct ApiDoc;
