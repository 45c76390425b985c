use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    SignatureInvalid,

    #[error("Token is expired")]
    Expired,
}

/// Error raised when the signing secret is unusable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SigningKeyError {
    #[error("Signing secret is empty")]
    Empty,
}
