//! Authentication session for the SNOO cloud API
//!
//! Performs the OAuth2 password-grant token exchange:
//!
//! 1. POST /us/login with username/password
//! 2. 2xx - parse the token response
//! 3. 400/401 - parse the OAuth error body into a rejection
//!
//! One outbound request per call; retries and token refresh scheduling are
//! the caller's problem.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{AuthError, AuthResult};
use crate::token::OAuthToken;

/// Base URL of the SNOO cloud API
pub const SNOO_API_BASE_URL: &str = "https://snoo-api.happiestbaby.com";

/// Token endpoint path (password grant)
const LOGIN_PATH: &str = "/us/login";

/// Client identifier registered for the integration
const CLIENT_ID: &str = "snoo_client";

/// Request timeout for the token exchange
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    grant_type: &'static str,
    client_id: &'static str,
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct OAuthErrorBody {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Async session against the SNOO token endpoint
///
/// Construction never performs I/O; the first request happens in
/// [`fetch_token`](SnooAuthSession::fetch_token).
#[derive(Debug, Clone)]
pub struct SnooAuthSession {
    client: Client,
    base_url: String,
}

impl SnooAuthSession {
    /// Create a session against the production SNOO API
    pub fn new() -> Self {
        Self::with_base_url(SNOO_API_BASE_URL)
    }

    /// Create a session against a non-default endpoint (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The endpoint this session talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchange username/password for an OAuth2 token
    pub async fn fetch_token(&self, username: &str, password: &str) -> AuthResult<OAuthToken> {
        let url = format!("{}{}", self.base_url, LOGIN_PATH);
        let body = LoginRequest {
            grant_type: "password",
            client_id: CLIENT_ID,
            username,
            password,
        };

        debug!(%username, "requesting token from SNOO API");
        let response = self.client.post(&url).json(&body).send().await?;

        match response.status() {
            status if status.is_success() => {
                let raw = response.text().await?;
                let token: OAuthToken = serde_json::from_str(&raw)?;
                Ok(token)
            }
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED => {
                let raw = response.text().await.unwrap_or_default();
                warn!(%username, "SNOO API rejected credentials");
                Err(AuthError::Rejected {
                    description: rejection_description(&raw),
                })
            }
            status => Err(AuthError::UnexpectedStatus { status }),
        }
    }
}

impl Default for SnooAuthSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract a human-readable reason from an OAuth error body.
///
/// Falls back to a generic description when the body is not the standard
/// error shape. Never includes the submitted credentials.
fn rejection_description(raw: &str) -> String {
    match serde_json::from_str::<OAuthErrorBody>(raw) {
        Ok(body) => body.error_description.unwrap_or(body.error),
        Err(_) => "invalid credentials".to_string(),
    }
}

/// Trait for acquiring an access token from credentials
///
/// This is the seam between the config flow and the network: the flow only
/// needs the access token string, and tests substitute a scripted provider.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Fetch an access token for the given credentials
    async fn fetch_token(&self, username: &str, password: &str) -> AuthResult<String>;
}

#[async_trait]
impl TokenProvider for SnooAuthSession {
    async fn fetch_token(&self, username: &str, password: &str) -> AuthResult<String> {
        let token = SnooAuthSession::fetch_token(self, username, password).await?;
        Ok(token.access_token)
    }
}
