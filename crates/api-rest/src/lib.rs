//! # API REST
//!
//! REST implementation of the motivate proxy function.
//!
//! Handles:
//! - `POST /generate-motivation`: validate, call the generation API, reshape the answer
//! - `GET /health`
//! - OpenAPI/Swagger documentation
//! - CORS on every response path, including bare `OPTIONS` requests
//!
//! Uses `api-shared` for wire types and `motivate-core` for the generation client.

#![warn(rust_2018_idioms)]

pub mod error;

use api_shared::{ErrorRes, GenerateReq, GenerateRes, HealthRes, HealthService};
use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{header, HeaderName, Method},
    response::Json,
    routing::{get, post},
    Router,
};
use motivate_core::{ApiKey, GenerationClient, MotivateError, NonEmptyText, GENERATE_ROUTE};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::ProxyError;

/// Application state shared across REST API handlers.
///
/// Holds nothing mutable: the generation client wraps a pooled `reqwest::Client` and the
/// immutable generation config.
#[derive(Clone)]
pub struct AppState {
    generation: GenerationClient,
}

impl AppState {
    pub fn new(generation: GenerationClient) -> Self {
        Self { generation }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, generate_motivation),
    components(schemas(GenerateReq, GenerateRes, ErrorRes, HealthRes))
)]
pub struct ApiDoc;

/// CORS policy applied to every route.
///
/// Any origin is allowed. `OPTIONS` requests are answered directly by the layer.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}

/// Builds the proxy router.
///
/// Request bodies are not size-capped, so every failure the handler can see is reported as
/// JSON rather than as a plain-text extractor rejection.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(GENERATE_ROUTE, post(generate_motivation))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(DefaultBodyLimit::disable())
        .layer(cors_layer())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the proxy.
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/generate-motivation",
    request_body = GenerateReq,
    responses(
        (status = 200, description = "Phrases generated", body = GenerateRes),
        (status = 400, description = "Word or API key missing", body = ErrorRes),
        (status = 500, description = "Unexpected failure", body = ErrorRes),
        (status = "default", description = "Generation API error forwarded with its status", body = ErrorRes)
    )
)]
/// Generate three motivational phrases for a word.
///
/// The body is decoded by hand rather than through the `Json` extractor so that malformed
/// input yields the proxy's own JSON error body. Missing fields short-circuit with 400 before
/// the generation API is contacted.
#[axum::debug_handler]
async fn generate_motivation(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerateRes>, ProxyError> {
    let req: GenerateReq = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!("Generate request decode error: {}", e);
        ProxyError::Internal(e.to_string())
    })?;

    let word = NonEmptyText::from_optional(req.word.as_deref());
    let api_key = ApiKey::from_optional(req.api_key.as_deref());
    let (word, api_key) = match (word, api_key) {
        (Ok(word), Ok(api_key)) => (word, api_key),
        _ => {
            tracing::info!("Generate request rejected: word or API key missing");
            return Err(MotivateError::MissingFields.into());
        }
    };

    match state.generation.generate(&word, &api_key).await {
        Ok(generated) => {
            tracing::info!(
                word = word.as_str(),
                placeholder = generated.placeholder,
                "phrases generated"
            );
            Ok(Json(GenerateRes {
                phrases: generated.phrases,
                word: word.into_inner(),
            }))
        }
        Err(e) => {
            tracing::error!("Generate motivation error: {}", e);
            Err(e.into())
        }
    }
}
