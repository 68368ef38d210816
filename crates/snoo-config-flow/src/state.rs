//! Flow state machine
//!
//! Enforces valid transitions for the credential collection flow:
//!
//! ```text
//! Initial → AwaitingInput → Finalized (terminal)
//!                 ↺ (failed submission loops)
//! ```
//!
//! Every step re-enters AwaitingInput before doing anything else, so a
//! finalized flow refuses further input at the transition check.

use thiserror::Error;

/// Lifecycle state of a config flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    /// Flow created, no step taken yet
    #[default]
    Initial,
    /// Form rendered, waiting for a (re)submission
    AwaitingInput,
    /// Entry created (terminal)
    Finalized,
}

/// Error when an invalid flow transition is attempted
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid flow transition from {from:?} to {to:?}")]
pub struct InvalidTransition {
    pub from: FlowState,
    pub to: FlowState,
}

impl FlowState {
    /// Check if the flow has terminated
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlowState::Finalized)
    }

    /// Attempt a transition to a new state.
    ///
    /// Returns the new state if valid, or an error describing the invalid
    /// transition.
    pub fn try_transition(self, to: FlowState) -> Result<FlowState, InvalidTransition> {
        use FlowState::*;

        let valid = match (self, to) {
            // First step renders the form
            (Initial, AwaitingInput) => true,

            // Failed submissions loop; successful ones finalize
            (AwaitingInput, AwaitingInput) => true,
            (AwaitingInput, Finalized) => true,

            // Finalized is terminal
            (Finalized, _) => false,

            // All other transitions are invalid
            _ => false,
        };

        if valid {
            Ok(to)
        } else {
            Err(InvalidTransition { from: self, to })
        }
    }

    /// Check if a transition is valid without performing it
    pub fn can_transition_to(self, to: FlowState) -> bool {
        self.try_transition(to).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use FlowState::*;

    #[test]
    fn test_initial_to_awaiting_input() {
        assert_eq!(Initial.try_transition(AwaitingInput), Ok(AwaitingInput));
    }

    #[test]
    fn test_awaiting_input_loops() {
        assert!(AwaitingInput.can_transition_to(AwaitingInput));
    }

    #[test]
    fn test_awaiting_input_to_finalized() {
        assert!(AwaitingInput.can_transition_to(Finalized));
    }

    #[test]
    fn test_initial_cannot_jump_to_finalized() {
        let err = Initial.try_transition(Finalized).unwrap_err();
        assert_eq!(err.from, Initial);
        assert_eq!(err.to, Finalized);
    }

    #[test]
    fn test_finalized_is_terminal() {
        assert!(Finalized.is_terminal());
        assert!(!Finalized.can_transition_to(Initial));
        assert!(!Finalized.can_transition_to(AwaitingInput));
        assert!(!Finalized.can_transition_to(Finalized));
    }

    #[test]
    fn test_full_success_path() {
        // Initial -> AwaitingInput -> AwaitingInput (bad creds) -> Finalized
        let state = Initial;
        let state = state.try_transition(AwaitingInput).unwrap();
        let state = state.try_transition(AwaitingInput).unwrap();
        let state = state.try_transition(Finalized).unwrap();
        assert!(state.is_terminal());
    }

    #[test]
    fn test_error_display() {
        let err = InvalidTransition {
            from: Finalized,
            to: AwaitingInput,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Finalized"));
        assert!(msg.contains("AwaitingInput"));
    }
}
