use std::env;
use std::fmt;

use auth::SigningKey;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_expiration_minutes")]
    pub expiration_minutes: i64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AuthConfig {
    /// Answer failed sign-ins with distinct 400/404 responses instead of a single 401.
    #[serde(default)]
    pub reveal_sign_in_failures: bool,
}

fn default_max_connections() -> u32 {
    5
}

const MAX_EXPIRATION_MINUTES: i64 = 60 * 24 * 365;

fn default_expiration_minutes() -> i64 {
    60
}

impl JwtConfig {
    /// Build the process-wide signing key from the configured secret.
    pub fn signing_key(&self) -> Result<SigningKey, ConfigError> {
        SigningKey::from_secret(&self.secret)
            .map_err(|e| ConfigError::Message(format!("jwt.secret: {}", e)))
    }

    /// Lifetime of issued tokens.
    ///
    /// Accepts 1 minute up to one year.
    pub fn token_ttl(&self) -> Result<chrono::Duration, ConfigError> {
        if !(1..=MAX_EXPIRATION_MINUTES).contains(&self.expiration_minutes) {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_minutes must be between 1 and {}, got {}",
                MAX_EXPIRATION_MINUTES, self.expiration_minutes
            )));
        }

        chrono::Duration::try_minutes(self.expiration_minutes).ok_or_else(|| {
            ConfigError::Message(format!(
                "jwt.expiration_minutes out of range: {}",
                self.expiration_minutes
            ))
        })
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiration_minutes", &self.expiration_minutes)
            .finish()
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// A missing or blank `jwt.secret` is rejected here so the service never
    /// starts without a signing key.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Check values the deserializer cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.jwt.signing_key()?;
        self.jwt.token_ttl()?;

        if self.jwt.secret.len() < 32 {
            tracing::warn!(
                length = self.jwt.secret.len(),
                "jwt.secret is shorter than 32 bytes"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str, expiration_minutes: i64) -> Config {
        Config {
            database: DatabaseConfig {
                url: "postgresql://localhost/users".to_string(),
                max_connections: 5,
            },
            server: ServerConfig { http_port: 8080 },
            jwt: JwtConfig {
                secret: secret.to_string(),
                expiration_minutes,
            },
            auth: AuthConfig::default(),
        }
    }

    #[test]
    fn test_validate_accepts_secret() {
        let config = config("test-secret-key-for-jwt-signing-at-least-32-bytes", 60);

        assert!(config.validate().is_ok());
        assert_eq!(config.jwt.token_ttl().unwrap(), chrono::Duration::hours(1));
        assert!(!config.auth.reveal_sign_in_failures);
    }

    #[test]
    fn test_validate_rejects_blank_secret() {
        assert!(config("", 60).validate().is_err());
        assert!(config("   ", 60).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_ttl() {
        let secret = "test-secret-key-for-jwt-signing-at-least-32-bytes";

        assert!(config(secret, 0).validate().is_err());
        assert!(config(secret, -5).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_ttl() {
        let secret = "test-secret-key-for-jwt-signing-at-least-32-bytes";

        assert!(config(secret, MAX_EXPIRATION_MINUTES).validate().is_ok());
        assert!(config(secret, MAX_EXPIRATION_MINUTES + 1).validate().is_err());
        assert!(config(secret, 1_000_000_000_000).validate().is_err());
        assert!(config(secret, i64::MAX).validate().is_err());
        assert!(config(secret, i64::MAX).jwt.token_ttl().is_err());
    }

    #[test]
    fn test_debug_hides_secret() {
        let config = config("test-secret-key-for-jwt-signing-at-least-32-bytes", 60);

        assert!(!format!("{:?}", config).contains("test-secret-key"));
    }
}
