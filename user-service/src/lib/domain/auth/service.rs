use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Credential;
use crate::domain::auth::models::SignedIn;
use crate::domain::auth::models::ValidatedToken;
use crate::domain::auth::ports::AuthenticationServicePort;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserDirectory;

/// Domain service implementation for authentication.
///
/// Looks accounts up through the directory and delegates password checks
/// and token handling to the shared `Authenticator`. Holds no per-request
/// state; validation never reissues a token.
pub struct AuthenticationService<UD>
where
    UD: UserDirectory,
{
    directory: Arc<UD>,
    authenticator: Arc<Authenticator>,
}

impl<UD> AuthenticationService<UD>
where
    UD: UserDirectory,
{
    /// Create a new authentication service.
    ///
    /// # Arguments
    /// * `directory` - Account lookup
    /// * `authenticator` - Password verification and token codec bound to the signing key
    pub fn new(directory: Arc<UD>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            directory,
            authenticator,
        }
    }

    async fn lookup(&self, email: &str) -> Result<User, AuthError> {
        self.directory
            .find_by_email(email)
            .await
            .map_err(|e| AuthError::Directory(e.to_string()))?
            .ok_or_else(|| AuthError::UserNotFound(email.to_string()))
    }
}

#[async_trait]
impl<UD> AuthenticationServicePort for AuthenticationService<UD>
where
    UD: UserDirectory,
{
    async fn sign_in(&self, credential: Credential) -> Result<SignedIn, AuthError> {
        let user = self
            .lookup(&credential.email)
            .await
            .inspect_err(|e| {
                if let AuthError::UserNotFound(_) = e {
                    // Unknown accounts pay the same hashing cost as a wrong password.
                    self.authenticator.reject_unknown(&credential.password);
                }
                tracing::warn!(email = %credential.email, error = %e, "Sign-in rejected");
            })?;

        let result = self
            .authenticator
            .authenticate(
                &credential.password,
                &user.password_hash,
                user.email.as_str(),
            )
            .map_err(AuthError::from)
            .inspect_err(|e| {
                tracing::warn!(email = %credential.email, error = %e, "Sign-in rejected");
            })?;

        let expires_at = result
            .claims
            .expires_at()
            .ok_or_else(|| AuthError::Issuance("expiration out of range".to_string()))?;

        tracing::info!(user_id = %user.id, "User signed in");

        Ok(SignedIn {
            subject: result.claims.sub,
            token: result.access_token,
            expires_at,
        })
    }

    async fn validate_token(&self, token: &str) -> Result<ValidatedToken, AuthError> {
        let claims = self
            .authenticator
            .validate_token(token)
            .map_err(AuthError::from)
            .inspect_err(|e| tracing::warn!(error = %e, "Token rejected"))?;

        let expires_at = claims
            .expires_at()
            .ok_or_else(|| AuthError::InvalidToken("expiration out of range".to_string()))?;

        // A verified token does not prove the account still exists.
        self.lookup(claims.subject()).await.inspect_err(|e| {
            tracing::warn!(subject = %claims.sub, error = %e, "Token subject rejected");
        })?;

        Ok(ValidatedToken {
            subject: claims.sub,
            expires_at,
        })
    }
}
