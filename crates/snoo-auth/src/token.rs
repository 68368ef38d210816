//! OAuth2 token response types

use serde::{Deserialize, Serialize};

/// Token response from the SNOO login endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthToken {
    /// The access token used against the device API
    pub access_token: String,

    /// Token type, normally "bearer"
    #[serde(default = "default_token_type")]
    pub token_type: String,

    /// Lifetime in seconds, if the endpoint reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,

    /// Refresh token, if the endpoint issues one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl OAuthToken {
    /// Check that the token can actually be stored and used
    pub fn is_usable(&self) -> bool {
        !self.access_token.is_empty()
    }
}
