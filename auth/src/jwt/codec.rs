use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;
use super::key::SigningKey;

/// Signs claims into compact tokens and verifies them back.
///
/// Tokens are three base64url segments (`header.payload.signature`) signed
/// with HMAC-SHA256. The algorithm is fixed by the codec; the `alg` named in a
/// token header is only compared against it, never trusted.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    const ALGORITHM: Algorithm = Algorithm::HS256;

    /// Create a codec bound to a signing key.
    ///
    /// # Arguments
    /// * `key` - Process-wide signing key
    ///
    /// # Returns
    /// TokenCodec pinned to HS256
    pub fn new(key: &SigningKey) -> Self {
        let mut validation = Validation::new(Self::ALGORITHM);
        // Expiry is checked against an explicit clock in `decode_at`.
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["sub", "exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(key.as_bytes()),
            decoding_key: DecodingKey::from_secret(key.as_bytes()),
            validation,
        }
    }

    /// Encode a subject into a signed token.
    ///
    /// # Arguments
    /// * `subject` - Identity the token asserts
    /// * `now` - Issue time
    /// * `ttl` - Lifetime of the token
    ///
    /// # Returns
    /// Compact token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Expiration out of range, or claims could not be signed
    pub fn encode(
        &self,
        subject: &str,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        self.encode_claims(&Claims::issue(subject, now, ttl)?)
    }

    /// Sign an already-built claims set.
    ///
    /// # Errors
    /// * `EncodingFailed` - Claims could not be serialized or signed
    pub fn encode_claims(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(Self::ALGORITHM);

        jsonwebtoken::encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode and verify a token at the current time.
    ///
    /// See [`TokenCodec::decode_at`].
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode_at(token, Utc::now())
    }

    /// Decode and verify a token against an explicit clock.
    ///
    /// # Arguments
    /// * `token` - Compact token string
    /// * `now` - Time the token is checked at
    ///
    /// # Returns
    /// Verified claims
    ///
    /// # Errors
    /// * `Malformed` - Not three segments, undecodable, or missing claims
    /// * `SignatureInvalid` - Signature or algorithm does not match the key
    /// * `Expired` - Signature is valid but `now` is at or past expiration
    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let segments = token.split('.').count();
        if segments != 3 {
            return Err(TokenError::Malformed(format!(
                "expected 3 segments, found {}",
                segments
            )));
        }

        let claims = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    TokenError::SignatureInvalid
                }
                _ => TokenError::Malformed(e.to_string()),
            })?;

        if claims.is_expired(now) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}
