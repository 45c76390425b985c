use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::SigningKey;
use crate::jwt::TokenCodec;
use crate::jwt::TokenError;
use crate::password::CredentialVerifier;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
///
/// Provides high-level authentication operations by coordinating
/// password hashing and token encoding with a fixed token lifetime.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
    token_ttl: Duration,
    decoy_hash: Option<String>,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,

    /// Claims carried by the token
    pub claims: Claims,
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    const DECOY_PASSWORD: &'static str = "decoy-password-for-unknown-accounts";

    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `signing_key` - Key for token signing
    /// * `token_ttl` - Lifetime of issued tokens
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(signing_key: &SigningKey, token_ttl: Duration) -> Self {
        let password_hasher = PasswordHasher::new();
        let decoy_hash = password_hasher.hash(Self::DECOY_PASSWORD).ok();

        Self {
            password_hasher,
            token_codec: TokenCodec::new(signing_key),
            token_ttl,
            decoy_hash,
        }
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and generate a token for `subject`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identity to encode in the token
    ///
    /// # Returns
    /// AuthenticationResult with access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `TokenError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        self.authenticate_at(password, stored_hash, subject, Utc::now())
    }

    /// Same as [`Authenticator::authenticate`] with an explicit issue time.
    pub fn authenticate_at(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.matches(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.generate_token_at(subject, now)?)
    }

    /// Reject a sign-in for an account that does not exist.
    ///
    /// Runs a full password verification against a decoy hash so the
    /// rejection costs the same as a wrong password for a real account.
    pub fn reject_unknown(&self, password: &str) -> AuthenticationError {
        if let Some(decoy_hash) = &self.decoy_hash {
            self.password_hasher.matches(password, decoy_hash);
        }

        AuthenticationError::InvalidCredentials
    }

    /// Generate a token without password verification.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token generation failed
    pub fn generate_token_at(
        &self,
        subject: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthenticationResult, TokenError> {
        let claims = Claims::issue(subject, now, self.token_ttl)?;
        let access_token = self.token_codec.encode_claims(&claims)?;

        Ok(AuthenticationResult {
            access_token,
            claims,
        })
    }

    /// Validate and decode a token at the current time.
    ///
    /// # Errors
    /// * `Malformed` - Token is not a well-formed signed token
    /// * `SignatureInvalid` - Token was not signed with this key
    /// * `Expired` - Token lifetime is over
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.token_codec.decode(token)
    }

    /// Same as [`Authenticator::validate_token`] with an explicit clock.
    pub fn validate_token_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        self.token_codec.decode_at(token, now)
    }
}
