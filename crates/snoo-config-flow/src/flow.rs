//! Credential collection flow
//!
//! One externally-driven entry point, [`SnooConfigFlow::step_user`]. The
//! first invocation (no input) renders the form; a resubmission either
//! finalizes into a [`ConfigEntry`] or loops back to the form with a
//! `failed_auth` error attached.
//!
//! A token supplied directly in the form is accepted without verification.
//! Otherwise the username/password pair is exchanged through the
//! [`TokenProvider`]; a rejection becomes a form error, any other provider
//! failure propagates to the caller unhandled.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use snoo_auth::{AuthError, SnooAuthSession, TokenProvider};

use crate::entry::ConfigEntry;
use crate::state::{FlowState, InvalidTransition};
use crate::{
    CONF_PASSWORD, CONF_TOKEN, CONF_USERNAME, DOMAIN, ERROR_BASE, ERROR_FAILED_AUTH, STEP_USER,
    TITLE,
};

/// User-submitted field values, scoped to one flow invocation
pub type PendingInput = HashMap<String, String>;

/// Form field schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

impl FormField {
    fn string(name: &str, required: bool, default: String) -> Self {
        Self {
            name: name.to_string(),
            field_type: "string".to_string(),
            required: Some(required),
            default: Some(serde_json::Value::String(default)),
        }
    }
}

/// Result of a config flow step
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FlowResult {
    /// Render the form and await resubmission
    Form {
        step_id: String,
        data_schema: Vec<FormField>,
        errors: HashMap<String, String>,
    },
    /// Persist the entry and terminate the flow
    CreateEntry { title: String, entry: ConfigEntry },
}

/// Errors surfaced out of a flow step
///
/// Authentication rejections never take this path; they are converted into
/// form errors inside the step.
#[derive(Debug, Error)]
pub enum FlowError {
    /// The flow state does not accept this step
    #[error(transparent)]
    State(#[from] InvalidTransition),

    /// A non-rejection failure from the token provider
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Config flow handler for the SNOO Smart Bassinet integration
///
/// One instance per setup attempt; each instance owns its pending input and
/// error set.
pub struct SnooConfigFlow {
    provider: Arc<dyn TokenProvider>,
    state: FlowState,
    data: PendingInput,
    errors: HashMap<String, String>,
}

impl SnooConfigFlow {
    /// Create a flow backed by the real SNOO auth session
    pub fn new() -> Self {
        Self::with_provider(Arc::new(SnooAuthSession::new()))
    }

    /// Create a flow with a custom token provider
    pub fn with_provider(provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            provider,
            state: FlowState::default(),
            data: PendingInput::new(),
            errors: HashMap::new(),
        }
    }

    /// Current lifecycle state of the flow
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Handle a flow step initialized or resubmitted by the user
    pub async fn step_user(
        &mut self,
        user_input: Option<PendingInput>,
    ) -> Result<FlowResult, FlowError> {
        // Every step re-enters AwaitingInput first; a finalized flow fails
        // here before any network call is made.
        self.state = self.state.try_transition(FlowState::AwaitingInput)?;

        let Some(mut input) = user_input else {
            self.errors.clear();
            return Ok(self.show_config_form());
        };

        self.data = input.clone();
        self.errors.clear();

        let token = match input.get(CONF_TOKEN).filter(|t| !t.is_empty()) {
            // A directly supplied token is accepted without verification
            Some(supplied) => Some(supplied.clone()),
            None => self.acquire_token(&input).await?,
        };

        match token {
            Some(token) if !token.is_empty() => {
                input.insert(CONF_TOKEN.to_string(), token);
                self.state = self.state.try_transition(FlowState::Finalized)?;
                debug!(domain = DOMAIN, "flow finalized, creating entry");
                Ok(FlowResult::CreateEntry {
                    title: TITLE.to_string(),
                    entry: ConfigEntry::new(TITLE, input),
                })
            }
            _ => {
                self.errors
                    .insert(ERROR_BASE.to_string(), ERROR_FAILED_AUTH.to_string());
                Ok(self.show_config_form())
            }
        }
    }

    /// Exchange the submitted credentials for a token.
    ///
    /// A rejection from the provider maps to `None`; any other failure
    /// propagates to the caller.
    async fn acquire_token(&self, input: &PendingInput) -> Result<Option<String>, FlowError> {
        let username = input.get(CONF_USERNAME).map(String::as_str).unwrap_or("");
        let password = input.get(CONF_PASSWORD).map(String::as_str).unwrap_or("");

        match self.provider.fetch_token(username, password).await {
            Ok(token) => Ok(Some(token)),
            Err(err) if err.is_rejection() => {
                warn!(%username, "authentication rejected");
                Ok(None)
            }
            Err(err) => Err(FlowError::Auth(err)),
        }
    }

    /// Show the configuration form, pre-filled with previously submitted
    /// values (falling back to empty strings).
    fn show_config_form(&self) -> FlowResult {
        let default = |key: &str| self.data.get(key).cloned().unwrap_or_default();

        FlowResult::Form {
            step_id: STEP_USER.to_string(),
            data_schema: vec![
                FormField::string(CONF_USERNAME, true, default(CONF_USERNAME)),
                FormField::string(CONF_PASSWORD, true, default(CONF_PASSWORD)),
                FormField::string(CONF_TOKEN, false, default(CONF_TOKEN)),
            ],
            errors: self.errors.clone(),
        }
    }
}

impl Default for SnooConfigFlow {
    fn default() -> Self {
        Self::new()
    }
}
