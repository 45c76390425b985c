/// One-way comparison of a submitted password against a stored hash.
///
/// Implementations never reverse the hash. A stored hash that cannot be
/// parsed is reported as a mismatch rather than an error.
pub trait CredentialVerifier: Send + Sync {
    /// Check a plaintext password against a stored hash.
    ///
    /// # Arguments
    /// * `plaintext` - Password submitted by the caller
    /// * `stored_hash` - Hash previously produced for the account
    ///
    /// # Returns
    /// True only if the password matches the hash
    fn matches(&self, plaintext: &str, stored_hash: &str) -> bool;
}
