use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Credential;
use crate::domain::auth::models::SignedIn;
use crate::inbound::http::router::AppState;

pub async fn sign_in(
    State(state): State<AppState>,
    Json(body): Json<SignInRequestBody>,
) -> Result<ApiSuccess<SignInResponseData>, ApiError> {
    state
        .auth_service
        .sign_in(Credential::new(body.email, body.password))
        .await
        .map_err(|e| sign_in_error(e, state.reveal_sign_in_failures))
        .map(|ref signed_in| ApiSuccess::new(StatusCode::OK, signed_in.into()))
}

/// Collapse unknown-account and wrong-password into one answer unless configured otherwise.
fn sign_in_error(err: AuthError, reveal_failures: bool) -> ApiError {
    match err {
        AuthError::UserNotFound(_) | AuthError::InvalidPassword if !reveal_failures => {
            ApiError::Unauthorized("Invalid credentials".to_string())
        }
        _ => ApiError::from(err),
    }
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct SignInRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignInResponseData {
    pub subject: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl From<&SignedIn> for SignInResponseData {
    fn from(signed_in: &SignedIn) -> Self {
        Self {
            subject: signed_in.subject.clone(),
            token: signed_in.token.clone(),
            expires_at: signed_in.expires_at,
        }
    }
}
