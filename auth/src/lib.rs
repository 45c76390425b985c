//! Authentication utilities library
//!
//! Provides the authentication primitives used by the user service:
//! - Password hashing and credential verification (Argon2id)
//! - Signing key handling and access token encoding/validation (HS256 JWT)
//! - Authentication coordination
//!
//! Nothing here performs I/O; account lookup stays with the caller.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::{CredentialVerifier, PasswordHasher};
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.matches("my_password", &hash));
//! assert!(!hasher.matches("other_password", &hash));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{SigningKey, TokenCodec};
//! use chrono::{Duration, Utc};
//!
//! let key = SigningKey::from_secret("secret_key_at_least_32_bytes_long!").unwrap();
//! let codec = TokenCodec::new(&key);
//! let token = codec.encode("alice@example.com", Utc::now(), Duration::hours(1)).unwrap();
//! let claims = codec.decode(&token).unwrap();
//! assert_eq!(claims.sub, "alice@example.com");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, SigningKey};
//! use chrono::Duration;
//!
//! let key = SigningKey::from_secret("secret_key_at_least_32_bytes_long!").unwrap();
//! let auth = Authenticator::new(&key, Duration::hours(1));
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Sign in: verify and generate token
//! let result = auth.authenticate("password123", &hash, "alice@example.com").unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.sub, "alice@example.com");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::SigningKey;
pub use jwt::SigningKeyError;
pub use jwt::TokenCodec;
pub use jwt::TokenError;
pub use password::CredentialVerifier;
pub use password::PasswordError;
pub use password::PasswordHasher;
