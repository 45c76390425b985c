use std::sync::Arc;

use auth::Authenticator;
use auth::SigningKey;
use chrono::Duration;
use user_service::domain::auth::service::AuthenticationService;
use user_service::domain::user::service::UserService;
use user_service::inbound::http::router::create_router;
use user_service::repositories::InMemoryUserRepository;

pub const TEST_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over an in-memory user store
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub repository: InMemoryUserRepository,
    pub api_client: reqwest::Client,
    pub authenticator: Authenticator,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        Self::spawn_with(false).await
    }

    /// Spawn with distinct sign-in failure responses enabled or not
    pub async fn spawn_with(reveal_sign_in_failures: bool) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = InMemoryUserRepository::new();
        let signing_key = SigningKey::from_secret(TEST_SECRET).expect("Invalid test secret");
        let authenticator = Arc::new(Authenticator::new(&signing_key, Duration::hours(1)));

        let user_service = Arc::new(UserService::new(Arc::new(repository.clone())));
        let auth_service = Arc::new(AuthenticationService::new(
            Arc::new(repository.clone()),
            authenticator,
        ));

        let router = create_router(user_service, auth_service, reveal_sign_in_failures);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            repository,
            api_client: reqwest::Client::new(),
            authenticator: Authenticator::new(&signing_key, Duration::hours(1)),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Register an account through the API
    pub async fn create_user(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/users")
            .json(&serde_json::json!({
                "email": email,
                "full_name": "Test User",
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Sign in through the API
    pub async fn sign_in(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/auth/sign-in")
            .json(&serde_json::json!({
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register and sign in, returning the issued token
    pub async fn signed_in_token(&self, email: &str, password: &str) -> String {
        self.create_user(email, password).await;
        let body: serde_json::Value = self
            .sign_in(email, password)
            .await
            .json()
            .await
            .expect("Failed to parse response");

        body["data"]["token"]
            .as_str()
            .expect("Missing token")
            .to_string()
    }
}
