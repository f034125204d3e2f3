//! Common test utilities and helpers
//!
//! Builds the real router over in-memory stores so the full HTTP surface
//! can be exercised without a database, and provides helpers for the
//! register/login choreography most tests start with.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

use notewell::auth::password::PasswordHasher;
use notewell::auth::tokens::TokenCodec;
use notewell::routes::create_router;
use notewell::server::state::AppState;
use notewell::store::memory::{InMemoryNoteStore, InMemoryRefreshTokenStore, InMemoryUserStore};

/// A token pair as returned by login or refresh
pub struct TestTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Spin up a test server over fresh in-memory stores.
pub fn create_test_server() -> TestServer {
    create_test_server_with_validity(60_000, 120_000)
}

/// Spin up a test server with explicit token validity windows
/// (wall-clock milliseconds). Zero makes that token type expire on issue.
pub fn create_test_server_with_validity(access_ms: i64, refresh_ms: i64) -> TestServer {
    let state = AppState::new(
        Arc::new(InMemoryUserStore::default()),
        Arc::new(InMemoryRefreshTokenStore::default()),
        Arc::new(InMemoryNoteStore::default()),
        PasswordHasher::with_cost(4),
        TokenCodec::new(b"integration-test-signing-secret", access_ms, refresh_ms),
    );

    TestServer::new(create_router(state)).expect("failed to build test server")
}

/// Register a user, asserting the server accepts it.
pub async fn register_user(server: &TestServer, email: &str, password: &str) {
    let response = server
        .post("/auth/register")
        .json(&json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
}

/// Log a registered user in and return the raw token pair.
pub async fn login_user(server: &TestServer, email: &str, password: &str) -> TestTokens {
    let response = server
        .post("/auth/login")
        .json(&json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    TestTokens {
        access_token: body["accessToken"].as_str().expect("accessToken").to_string(),
        refresh_token: body["refreshToken"]
            .as_str()
            .expect("refreshToken")
            .to_string(),
    }
}

/// Register a fresh user and log them in, in one step.
pub async fn register_and_login(server: &TestServer, email: &str, password: &str) -> TestTokens {
    register_user(server, email, password).await;
    login_user(server, email, password).await
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
