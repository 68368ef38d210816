//! Mock token provider for flow tests
//!
//! Provides a scripted [`TokenProvider`] similar in spirit to the mock
//! config entries used elsewhere in the test suite.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use snoo_auth::{AuthError, AuthResult, TokenProvider};

/// Scripted response for a mock token fetch
pub enum MockResponse {
    /// Succeed with this access token
    Token(String),
    /// Signal a credential rejection
    Rejected,
    /// Fail with a non-auth server error
    ServerError,
}

/// A scripted token provider that counts its invocations
pub struct MockTokenProvider {
    response: MockResponse,
    calls: AtomicUsize,
}

impl MockTokenProvider {
    /// Provider that succeeds with the given token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            response: MockResponse::Token(token.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Provider that rejects every credential pair
    pub fn rejecting() -> Self {
        Self {
            response: MockResponse::Rejected,
            calls: AtomicUsize::new(0),
        }
    }

    /// Provider that fails with a non-auth server error
    pub fn server_error() -> Self {
        Self {
            response: MockResponse::ServerError,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of fetch calls made against this provider
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenProvider for MockTokenProvider {
    async fn fetch_token(&self, _username: &str, _password: &str) -> AuthResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            MockResponse::Token(token) => Ok(token.clone()),
            MockResponse::Rejected => Err(AuthError::Rejected {
                description: "Wrong email or password".to_string(),
            }),
            MockResponse::ServerError => Err(AuthError::UnexpectedStatus {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            }),
        }
    }
}
