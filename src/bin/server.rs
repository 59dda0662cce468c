//! REST API server for US phone number formatting.
//!
//! # Usage
//!
//! ```bash
//! # Start server
//! phonefmt-server
//!
//! # With custom port
//! phonefmt-server --port 8080
//! ```
//!
//! # Swagger UI
//!
//! Visit http://localhost:3000/swagger-ui/ for interactive API documentation.

use axum::{
    extract::Query,
    http::{header, Method, StatusCode},
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{IntoParams, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use phone_formatter::{format, FormatSet, FormatVariant};

// ============================================================================
// OpenAPI Documentation
// ============================================================================

#[derive(OpenApi)]
#[openapi(
    info(
        title = "US Phone Number Formatter API",
        version = "0.1.0",
        description = "Formats US phone numbers as international, national, E.164 and dotted renderings.",
        license(name = "MIT"),
        contact(name = "API Support")
    ),
    tags(
        (name = "Formatting", description = "Phone number formatting"),
        (name = "System", description = "Health and status endpoints")
    ),
    paths(
        format_number,
        format_number_query,
        list_variants,
        health,
    ),
    components(schemas(
        FormatRequest,
        FormatResponse,
        VariantInfo,
        HealthResponse,
    ))
)]
struct ApiDoc;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize, ToSchema, IntoParams)]
#[schema(example = json!({"number": "(585) 282-6396"}))]
struct FormatRequest {
    /// Phone number in any common notation. Numbers without a country code are read as US numbers.
    number: String,
    /// Only return this rendering (`international`, `national`, `e164`, `internationalWithDots`, or an alias such as `dots`)
    #[serde(default)]
    variant: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[schema(example = json!({
    "valid": true,
    "formats": {
        "international": "+1 585-282-6396",
        "national": "(585) 282-6396",
        "e164": "+15852826396",
        "internationalWithDots": "585.282.6396"
    }
}))]
struct FormatResponse {
    /// Whether the input is a valid US phone number
    valid: bool,
    /// Renderings keyed by variant, in display order. Empty when the number is not valid.
    #[schema(value_type = Object)]
    formats: FormatSet,
    /// Key of the requested rendering, when one was asked for
    #[serde(skip_serializing_if = "Option::is_none")]
    variant: Option<String>,
    /// The requested rendering. Absent when the number is not valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

#[derive(Serialize, ToSchema)]
struct VariantInfo {
    /// Key used in `formats`
    key: String,
    /// Human-readable label
    label: String,
}

#[derive(Serialize, ToSchema)]
struct HealthResponse {
    /// Service status
    status: String,
    /// API version
    version: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Format a phone number
#[utoipa::path(
    post,
    path = "/format",
    request_body = FormatRequest,
    responses(
        (status = 200, description = "Renderings of the number", body = FormatResponse),
        (status = 400, description = "Unknown variant")
    ),
    tag = "Formatting"
)]
async fn format_number(
    Json(req): Json<FormatRequest>,
) -> Result<Json<FormatResponse>, (StatusCode, String)> {
    format_response(&req).map(Json)
}

/// Format a phone number passed as a query parameter
#[utoipa::path(
    get,
    path = "/format",
    params(FormatRequest),
    responses(
        (status = 200, description = "Renderings of the number", body = FormatResponse),
        (status = 400, description = "Unknown variant")
    ),
    tag = "Formatting"
)]
async fn format_number_query(
    Query(req): Query<FormatRequest>,
) -> Result<Json<FormatResponse>, (StatusCode, String)> {
    format_response(&req).map(Json)
}

/// List the supported renderings in display order
#[utoipa::path(
    get,
    path = "/variants",
    responses(
        (status = 200, description = "Supported renderings", body = [VariantInfo])
    ),
    tag = "Formatting"
)]
async fn list_variants() -> Json<Vec<VariantInfo>> {
    Json(
        FormatVariant::ALL
            .iter()
            .map(|v| VariantInfo {
                key: v.key().to_string(),
                label: v.label().to_string(),
            })
            .collect(),
    )
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "System"
)]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Helpers
// ============================================================================

fn format_response(req: &FormatRequest) -> Result<FormatResponse, (StatusCode, String)> {
    let variant = req
        .variant
        .as_deref()
        .map(str::parse::<FormatVariant>)
        .transpose()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let formats = format(&req.number);
    tracing::debug!(valid = !formats.is_empty(), ?variant, "formatted request");
    Ok(FormatResponse {
        valid: !formats.is_empty(),
        variant: variant.map(|v| v.key().to_string()),
        value: variant.and_then(|v| formats.get(v)).map(str::to_string),
        formats,
    })
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse args
    let port: u16 = std::env::args()
        .skip_while(|a| a != "--port")
        .nth(1)
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(Any);

    // Build router with Swagger UI
    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/format", get(format_number_query).post(format_number))
        .route("/variants", get(list_variants))
        .route("/health", get(health))
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}:{}/swagger-ui/", "localhost", port);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
