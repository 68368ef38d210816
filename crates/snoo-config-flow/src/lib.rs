//! SNOO Smart Bassinet Config Flow
//!
//! Credential collection flow for the SNOO integration. The flow presents a
//! form, accepts either a raw token or a username/password pair, exchanges
//! credentials for an OAuth2 token through [`snoo_auth`], and on success
//! produces a finalized [`ConfigEntry`]. On an authentication rejection it
//! redisplays the form with a `failed_auth` error annotation.
//!
//! # Key Types
//!
//! - [`SnooConfigFlow`] - The flow handler; one instance per setup attempt
//! - [`FlowResult`] - What a step hands back to the host (form or entry)
//! - [`ConfigEntry`] - The persisted configuration record

pub mod entry;
pub mod flow;
pub mod state;

// Re-export main types
pub use entry::{ConfigEntry, ConfigEntrySource};
pub use flow::{FlowError, FlowResult, FormField, PendingInput, SnooConfigFlow};
pub use state::{FlowState, InvalidTransition};

/// Integration domain identifier
pub const DOMAIN: &str = "snoo_smart_bassinet";

/// Display title for created entries
pub const TITLE: &str = "SNOO Smart Bassinet";

/// Config entry schema version
pub const VERSION: u32 = 1;

/// Username field key
pub const CONF_USERNAME: &str = "username";

/// Password field key
pub const CONF_PASSWORD: &str = "password";

/// Token field key
pub const CONF_TOKEN: &str = "token";

/// Step id of the single user-driven step
pub const STEP_USER: &str = "user";

/// Error key for form-wide errors
pub const ERROR_BASE: &str = "base";

/// Error code shown when the provider rejects the credentials
pub const ERROR_FAILED_AUTH: &str = "failed_auth";
