// src/presentation/http/routes.rs
use crate::presentation::http::middleware::rate_limit::{RateLimitSettings, rate_limit_layer};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::password,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Per-IP quota for the password endpoints. `None` disables limiting.
    pub rate_limit: Option<RateLimitSettings>,
    /// Allowed CORS origins. Empty, or containing `*`, allows any origin.
    pub allowed_origins: Vec<String>,
}

pub fn build_router(state: HttpState, options: &RouterOptions) -> Router {
    let mut api = Router::new()
        .route(
            "/api/v1/password/validate",
            post(password::validate_password),
        )
        .route("/api/v1/password/policy", get(password::password_policy));

    if let Some(settings) = options.rate_limit {
        match rate_limit_layer(settings) {
            Some(layer) => api = api.layer(layer),
            None => tracing::warn!(?settings, "unusable rate limit quota; limiting disabled"),
        }
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let values: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(%origin, error = %err, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(values))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
