//! Error types for the onboarding wizard.
//!
//! Gesture handling never fails: unmeasured layouts and stray events
//! degrade to no-ops. Errors only surface at the edges (configuration,
//! host bridge, misrouted wizard actions, malformed replay commands).

use crate::onboarding::Screen;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Host error: {0}")]
    Host(#[from] HostError),

    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),

    #[error("Replay error: {0}")]
    Replay(#[from] ReplayError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Host-platform bridge errors.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Host does not support {capability}")]
    Unsupported { capability: String },
}

/// Sequencer errors: an action or result that does not fit the active screen.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("Action {action} does not apply to screen {screen}")]
    UnexpectedAction { screen: Screen, action: String },

    #[error("Result {result} does not belong to screen {screen}")]
    UnexpectedResult { screen: Screen, result: String },

    #[error("Profile field {field} is already set")]
    FieldAlreadySet { field: String },

    #[error("Onboarding is already complete")]
    AlreadyComplete,
}

/// Replay command parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument for {command}: expected {expected}")]
    MissingArgument { command: String, expected: String },

    #[error("Invalid number for {command}: {value}")]
    InvalidNumber { command: String, value: String },
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_convert_into_top_level() {
        let err: Error = WizardError::UnexpectedAction {
            screen: Screen::Gender,
            action: "next".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Wizard error: Action next does not apply to screen gender"
        );

        let err: Error = ReplayError::UnknownCommand("jump".into()).into();
        assert!(matches!(err, Error::Replay(_)));

        let err: Error = HostError::Unsupported {
            capability: "setSwipeSettings".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Host error: Host does not support setSwipeSettings");
    }
}
