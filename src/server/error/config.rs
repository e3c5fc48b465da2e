use thiserror::Error;

/// Invalid server configuration.
///
/// Only raised during startup; if one ever reaches a handler it is rendered as a generic
/// internal error by [`super::Error`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("{0} must be set")]
    MissingEnvVar(String),
    /// A variable is set but cannot be parsed.
    #[error("{var} is invalid: {reason}")]
    InvalidEnvValue {
        /// Name of the variable
        var: String,
        /// Why the value was rejected
        reason: String,
    },
}
