use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::ValidatedToken;
use crate::inbound::http::middleware::bearer_token;
use crate::inbound::http::router::AppState;

/// Validate the token carried in the `Authorization: Bearer` header.
pub async fn validate_token_header(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiSuccess<ValidateTokenResponseData>, ApiError> {
    let token = bearer_token(&headers)?;
    validate(&state, token).await
}

/// Validate a token sent in the request body.
pub async fn validate_token_body(
    State(state): State<AppState>,
    Json(body): Json<ValidateTokenRequestBody>,
) -> Result<ApiSuccess<ValidateTokenResponseData>, ApiError> {
    validate(&state, &body.token).await
}

async fn validate(
    state: &AppState,
    token: &str,
) -> Result<ApiSuccess<ValidateTokenResponseData>, ApiError> {
    state
        .auth_service
        .validate_token(token)
        .await
        .map_err(ApiError::from)
        .map(|ref validated| ApiSuccess::new(StatusCode::OK, validated.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidateTokenRequestBody {
    token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateTokenResponseData {
    pub subject: String,
    pub expires_at: DateTime<Utc>,
}

impl From<&ValidatedToken> for ValidateTokenResponseData {
    fn from(validated: &ValidatedToken) -> Self {
        Self {
            subject: validated.subject.clone(),
            expires_at: validated.expires_at,
        }
    }
}
