//! Error types for the token exchange

use thiserror::Error;

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Errors that can occur during the token exchange
#[derive(Debug, Error)]
pub enum AuthError {
    /// The provider refused the credentials. This is the only variant the
    /// config flow recognizes; everything else propagates unhandled.
    #[error("authentication rejected: {description}")]
    Rejected { description: String },

    /// Transport-level failure talking to the token endpoint
    #[error("token request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a status that is neither success nor a
    /// credential rejection
    #[error("unexpected status {status} from token endpoint")]
    UnexpectedStatus { status: reqwest::StatusCode },

    /// The token response body could not be decoded
    #[error("failed to decode token response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl AuthError {
    /// Check if this error is a credential rejection
    pub fn is_rejection(&self) -> bool {
        matches!(self, AuthError::Rejected { .. })
    }
}
