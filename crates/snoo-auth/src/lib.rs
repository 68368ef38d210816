//! SNOO Cloud Authentication
//!
//! This crate provides the authentication session for the SNOO smart
//! bassinet cloud API. The device API is OAuth2-protected; before anything
//! else can happen, a username/password pair has to be exchanged for an
//! access token via the resource-owner-password grant.
//!
//! # Key Types
//!
//! - [`SnooAuthSession`] - Async session against the token endpoint
//! - [`OAuthToken`] - Deserialized token response
//! - [`TokenProvider`] - Seam for substituting the token source in tests
//! - [`AuthError`] - Failure taxonomy for the exchange

pub mod error;
pub mod session;
pub mod token;

// Re-export main types
pub use error::{AuthError, AuthResult};
pub use session::{SnooAuthSession, TokenProvider, SNOO_API_BASE_URL};
pub use token::OAuthToken;
