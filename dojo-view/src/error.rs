//! Error types for the Dojo view integration

use thiserror::Error;

/// Result type for Dojo view operations
pub type Result<T> = std::result::Result<T, DojoError>;

/// Errors raised by the [`Container`](crate::Container) and its collaborators.
///
/// Mutators fail synchronously at the offending call; rendering never fails.
#[derive(Error, Debug)]
pub enum DojoError {
    /// A module name or stylesheet module did not match its pattern
    #[error("Invalid {what} specified: \"{value}\"")]
    Validation {
        /// What was being validated (e.g. "module name")
        what: &'static str,
        /// The rejected value
        value: String,
    },

    /// A dijit id was registered twice without overwrite
    #[error("Duplicate dijit with id \"{0}\" already registered")]
    DuplicateKey(String),

    /// A capture was started while another one is still open
    #[error("Cannot nest {0} captures")]
    Reentrancy(&'static str),

    /// A capture was ended through the wrong operation
    #[error("Cannot end a {found} capture as a {expected} capture")]
    CaptureMismatch {
        /// The capture kind the end operation expects
        expected: &'static str,
        /// The capture kind that was passed in
        found: &'static str,
    },

    /// A capture was ended on a container other than the one that opened it
    #[error("Cannot end a {0} capture opened on another container")]
    ForeignCapture(&'static str),

    /// Options could not be loaded or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error when loading option files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DojoError {
    pub(crate) fn validation(what: &'static str, value: impl Into<String>) -> Self {
        DojoError::Validation {
            what,
            value: value.into(),
        }
    }

    /// Is this a validation failure?
    pub fn is_validation(&self) -> bool {
        matches!(self, DojoError::Validation { .. })
    }

    /// Is this a duplicate dijit id?
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, DojoError::DuplicateKey(_))
    }

    /// Is this a nested capture?
    pub fn is_reentrancy(&self) -> bool {
        matches!(self, DojoError::Reentrancy(_))
    }
}
