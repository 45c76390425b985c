use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Credential;
use crate::domain::auth::models::SignedIn;
use crate::domain::auth::models::ValidatedToken;

/// Port for sign-in and token validation.
#[async_trait]
pub trait AuthenticationServicePort: Send + Sync + 'static {
    /// Verify a credential and issue an access token.
    ///
    /// # Arguments
    /// * `credential` - Email and plaintext password
    ///
    /// # Returns
    /// Subject with its signed token
    ///
    /// # Errors
    /// * `UserNotFound` - No account with this email
    /// * `InvalidPassword` - Password does not match the stored hash
    /// * `Directory` - Account lookup failed
    /// * `Issuance` - Token could not be signed
    async fn sign_in(&self, credential: Credential) -> Result<SignedIn, AuthError>;

    /// Verify a token and confirm its subject still exists.
    ///
    /// # Arguments
    /// * `token` - Compact access token
    ///
    /// # Returns
    /// Subject carried by the token
    ///
    /// # Errors
    /// * `InvalidToken` - Token is malformed or its signature does not verify
    /// * `TokenExpired` - Token lifetime is over
    /// * `UserNotFound` - Subject no longer has an account
    /// * `Directory` - Account lookup failed
    async fn validate_token(&self, token: &str) -> Result<ValidatedToken, AuthError>;
}
