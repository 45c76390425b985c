use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_user::create_user;
use super::handlers::get_user::get_user;
use super::handlers::list_users::list_users;
use super::handlers::sign_in::sign_in;
use super::handlers::validate_token::validate_token_body;
use super::handlers::validate_token::validate_token_header;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::ports::AuthenticationServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub auth_service: Arc<dyn AuthenticationServicePort>,
    pub reveal_sign_in_failures: bool,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    auth_service: Arc<dyn AuthenticationServicePort>,
    reveal_sign_in_failures: bool,
) -> Router {
    let state = AppState {
        user_service,
        auth_service,
        reveal_sign_in_failures,
    };

    let public_routes = Router::new()
        .route("/api/auth/sign-in", post(sign_in))
        .route(
            "/api/auth/validate",
            get(validate_token_header).post(validate_token_body),
        )
        .route("/api/users", post(create_user));

    let protected_routes = Router::new()
        .route("/api/users", get(list_users))
        .route("/api/users/:email", get(get_user))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Headers are left out of the span: they carry bearer tokens.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
