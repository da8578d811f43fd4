//! Test helpers for integration tests
//!
//! Builds the full router (middleware included) over in-memory
//! repositories and sends requests through it.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use forum_api::{create_app, AppState};
use forum_common::{AppConfig, JwtService};
use forum_service::ServiceContextBuilder;
use serde_json::Value;
use tower::ServiceExt;

use crate::fixtures::{test_config, TEST_ACCESS_TOKEN_KEY};
use crate::memory::ForumStore;

/// Address the rate limiter sees when none is chosen
pub const DEFAULT_CLIENT_IP: &str = "127.0.0.1";

/// A router plus the store behind it
#[derive(Clone)]
pub struct TestApp {
    pub router: Router,
    pub store: ForumStore,
    jwt: Arc<JwtService>,
    client_ip: String,
}

/// Status and decoded JSON body of a response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    /// Build an application over a fresh, empty store
    ///
    /// # Errors
    /// Fails if the service context or middleware cannot be built
    pub fn new() -> Result<Self> {
        Self::with_config(test_config())
    }

    /// Build an application with a custom configuration
    ///
    /// # Errors
    /// Fails if the service context or middleware cannot be built
    pub fn with_config(config: AppConfig) -> Result<Self> {
        let store = ForumStore::new();
        let jwt = Arc::new(JwtService::new(
            TEST_ACCESS_TOKEN_KEY,
            config.jwt.access_token_age,
        ));

        let context = ServiceContextBuilder::new()
            .thread_repo(Arc::new(store.thread_repository()))
            .comment_repo(Arc::new(store.comment_repository()))
            .jwt_service(jwt.clone())
            .build()?;

        let router = create_app(AppState::new(context, config))?;

        Ok(Self {
            router,
            store,
            jwt,
            client_ip: DEFAULT_CLIENT_IP.to_string(),
        })
    }

    /// The same application, seen from another client address
    #[must_use]
    pub fn with_client_ip(mut self, ip: &str) -> Self {
        self.client_ip = ip.to_string();
        self
    }

    /// A valid bearer token for `username`
    ///
    /// # Errors
    /// Fails if the token cannot be signed
    pub fn token_for(&self, username: &str) -> Result<String> {
        Ok(self.jwt.issue(&format!("user-{username}"), username)?)
    }

    /// Send a request and decode the JSON response
    ///
    /// # Errors
    /// Fails if the request cannot be built or the body is not JSON
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Result<TestResponse> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("x-forwarded-for", &self.client_ip);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .with_context(|| format!("non-JSON body: {}", String::from_utf8_lossy(&bytes)))?
        };

        Ok(TestResponse { status, body })
    }

    /// GET without credentials
    ///
    /// # Errors
    /// See [`TestApp::send`]
    pub async fn get(&self, uri: &str) -> Result<TestResponse> {
        self.send(Method::GET, uri, None, None).await
    }

    /// POST a JSON body as `username`
    ///
    /// # Errors
    /// See [`TestApp::send`]
    pub async fn post_as(&self, username: &str, uri: &str, body: Value) -> Result<TestResponse> {
        let token = self.token_for(username)?;
        self.send(Method::POST, uri, Some(&token), Some(body)).await
    }

    /// DELETE as `username`
    ///
    /// # Errors
    /// See [`TestApp::send`]
    pub async fn delete_as(&self, username: &str, uri: &str) -> Result<TestResponse> {
        let token = self.token_for(username)?;
        self.send(Method::DELETE, uri, Some(&token), None).await
    }
}

/// Assert the `fail` envelope with a given status and message
///
/// # Panics
/// Panics when the response does not match.
pub fn assert_fail(response: &TestResponse, status: StatusCode, message: &str) {
    assert_eq!(response.status, status, "body: {}", response.body);
    assert_eq!(response.body["status"], "fail");
    assert_eq!(response.body["message"], message);
}
