// src/presentation/http/controllers/password.rs
use crate::application::{
    commands::password::ValidatePasswordCommand,
    dto::{PasswordPolicyDto, ValidationOutcomeDto},
};
use crate::domain::password::FieldDefinition;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Query,
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ValidatePasswordRequest {
    /// Submitted value. Numbers, booleans and null are converted to text
    /// before checking; arrays and objects are rejected.
    #[serde(default)]
    #[schema(value_type = String, example = "Passw0rd!")]
    pub value: Value,
    /// Attributes of the form field, e.g. `{"required": "true", "minimum_length": "8"}`.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub field: FieldDefinition,
}

#[utoipa::path(
    post,
    path = "/api/v1/password/validate",
    request_body = ValidatePasswordRequest,
    responses(
        (status = 200, description = "Validation outcome. `valid` is authoritative.", body = ValidationOutcomeDto),
        (status = 400, description = "Value is an array or object.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Component parameters unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Password"
)]
pub async fn validate_password(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ValidatePasswordRequest>,
) -> HttpResult<Json<ValidationOutcomeDto>> {
    let command =
        ValidatePasswordCommand::from_submission(payload.field, &payload.value).into_http()?;

    state
        .services
        .password_rule
        .evaluate(&command)
        .into_http()
        .map(|evaluation| Json(ValidationOutcomeDto::from(evaluation)))
}

#[utoipa::path(
    get,
    path = "/api/v1/password/policy",
    params(
        ("required" = Option<String>, Query, description = "`true` or `required` makes the field mandatory"),
        ("minimum_length" = Option<String>, Query, description = "Field-level minimum length"),
        ("minimum_integers" = Option<String>, Query, description = "Field-level minimum digit count"),
        ("minimum_symbols" = Option<String>, Query, description = "Field-level minimum symbol count"),
        ("minimum_uppercase" = Option<String>, Query, description = "Field-level minimum uppercase count"),
        ("strengthmeter" = Option<String>, Query, description = "Show the strength meter"),
        ("threshold" = Option<String>, Query, description = "Strength meter threshold")
    ),
    responses(
        (status = 200, description = "Effective policy after component overrides.", body = PasswordPolicyDto),
        (status = 500, description = "Component parameters unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Password"
)]
pub async fn password_policy(
    Extension(state): Extension<HttpState>,
    Query(field): Query<FieldDefinition>,
) -> HttpResult<Json<PasswordPolicyDto>> {
    state
        .services
        .password_policy
        .policy_for(&field)
        .into_http()
        .map(Json)
}
