use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::get_user::GetUserResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_users(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<GetUserResponseData>>, ApiError> {
    tracing::debug!(subject = %caller.subject, "Listing users");

    state
        .user_service
        .list_users()
        .await
        .map_err(ApiError::from)
        .map(|users| {
            ApiSuccess::new(
                StatusCode::OK,
                users.iter().map(GetUserResponseData::from).collect(),
            )
        })
}
