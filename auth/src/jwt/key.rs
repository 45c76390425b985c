use std::fmt;

use super::errors::SigningKeyError;

/// Secret used to sign and verify access tokens.
///
/// Built once from configuration and never mutated. Every token issued by a
/// process shares this key, so replacing it invalidates all outstanding tokens.
#[derive(Clone)]
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    /// Build a signing key from the configured secret.
    ///
    /// The secret bytes are used as-is for HMAC.
    ///
    /// # Errors
    /// * `Empty` - Secret is empty or only whitespace
    pub fn from_secret(secret: &str) -> Result<Self, SigningKeyError> {
        if secret.trim().is_empty() {
            return Err(SigningKeyError::Empty);
        }

        Ok(Self(secret.as_bytes().to_vec()))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SigningKey").field(&"<redacted>").finish()
    }
}
