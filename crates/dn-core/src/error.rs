//! Error types for the dn CLI
//!
//! Every failure a command can hit maps to one of these variants. The
//! dispatcher renders them as a single line and exits with status 1.

use thiserror::Error;

/// Result type alias for dn operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fixed message shown when no credentials can be resolved.
pub const UNCONFIGURED_MESSAGE: &str = "No API credentials found. Run `dn configure` first, \
     or set DN_API_KEY and DN_API_USER environment variables.";

/// Core error type for the dn CLI
#[derive(Error, Debug)]
pub enum Error {
    /// API key or user could not be resolved
    #[error("{}", UNCONFIGURED_MESSAGE)]
    Unconfigured,

    /// Locally detected bad input (no API call is made)
    #[error("{0}")]
    InvalidInput(String),

    /// The registrar answered, but reported a failure
    #[error("{context}: {description}")]
    Api {
        /// Command-specific prefix, e.g. "Registration failed"
        context: String,
        /// Status description supplied by the registrar
        description: String,
    },

    /// Anything that went wrong while talking to the registrar
    #[error("Error: {0}")]
    Transport(String),

    /// Configuration errors, including insecure API URLs
    #[error("Error: {0}")]
    Config(String),

    /// Filesystem or terminal I/O errors
    #[error("Error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a registrar-reported failure
    pub fn api(context: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Api {
            context: context.into(),
            description: description.into(),
        }
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the dispatcher should render this as a warning instead of an error
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Unconfigured)
    }
}
