//! Error types for JerseySwap.

use crate::workflow::Step;
use thiserror::Error;

/// User-facing validation failures raised by sign-up, sign-in and the
/// customize step.
///
/// The `Display` output is the message shown next to the form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Full name required")]
    NameRequired,

    #[error("Email required")]
    EmailRequired,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Handle required")]
    HandleRequired,

    #[error("Password required")]
    PasswordRequired,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Email already registered")]
    EmailTaken,

    #[error("Handle already taken")]
    HandleTaken,

    #[error("Email or handle required")]
    IdentifierRequired,

    #[error("Jersey number must be one or two digits")]
    InvalidJerseyNumber,

    #[error("{0}")]
    Other(String),
}

/// A shared error type for the entire JerseySwap workspace.
///
/// Library crates return `Result<T, SwapError>`; only the binary edge
/// converts into `anyhow::Error`.
#[derive(Error, Debug, Clone)]
pub enum SwapError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Form validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Sign-in or profile picker rejection
    #[error("{0}")]
    Authentication(String),

    /// Failure reported by the image studio backend
    #[error("Studio error: {0}")]
    Studio(String),

    /// An event that the current workflow step does not accept
    #[error("Invalid transition: '{event}' is not allowed from step '{from}'")]
    InvalidTransition { from: Step, event: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SwapError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    /// Creates a Studio error
    pub fn studio(message: impl Into<String>) -> Self {
        Self::Studio(message.into())
    }

    /// Creates an InvalidTransition error
    pub fn invalid_transition(from: Step, event: impl Into<String>) -> Self {
        Self::InvalidTransition {
            from,
            event: event.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }

    pub fn is_studio(&self) -> bool {
        matches!(self, Self::Studio(_))
    }

    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }

    /// Returns the validation failure, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for SwapError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for SwapError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SwapError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for SwapError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, SwapError>`.
pub type Result<T> = std::result::Result<T, SwapError>;
