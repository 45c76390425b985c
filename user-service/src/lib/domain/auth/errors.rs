use thiserror::Error;

/// Outcome of a failed sign-in or token validation.
///
/// Every variant is terminal for the request; none is retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    TokenExpired,

    #[error("User directory error: {0}")]
    Directory(String),

    #[error("Token issuance failed: {0}")]
    Issuance(String),
}

impl From<auth::TokenError> for AuthError {
    fn from(err: auth::TokenError) -> Self {
        match err {
            auth::TokenError::Expired => AuthError::TokenExpired,
            auth::TokenError::Malformed(_) | auth::TokenError::SignatureInvalid => {
                AuthError::InvalidToken(err.to_string())
            }
            auth::TokenError::EncodingFailed(reason) => AuthError::Issuance(reason),
        }
    }
}

impl From<auth::AuthenticationError> for AuthError {
    fn from(err: auth::AuthenticationError) -> Self {
        match err {
            auth::AuthenticationError::InvalidCredentials => AuthError::InvalidPassword,
            auth::AuthenticationError::TokenError(e) => e.into(),
        }
    }
}
