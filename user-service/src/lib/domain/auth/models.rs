use std::fmt;

use chrono::DateTime;
use chrono::Utc;

/// Email and password submitted for sign-in.
///
/// Lives only for the duration of the request.
pub struct Credential {
    pub email: String,
    pub password: String,
}

impl Credential {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful sign-in: the subject and its freshly issued token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedIn {
    pub subject: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Subject recovered from a valid token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedToken {
    pub subject: String,
    pub expires_at: DateTime<Utc>,
}
