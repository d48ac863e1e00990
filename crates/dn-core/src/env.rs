//! Environment lookup abstraction
//!
//! The config store never reads `std::env` directly. Tests hand it a plain
//! map instead of mutating process state.

use std::collections::HashMap;

/// Variable holding the registrar API key
pub const API_KEY_VAR: &str = "DN_API_KEY";
/// Variable holding the registrar API user
pub const API_USER_VAR: &str = "DN_API_USER";
/// Variable holding an optional API base URL override
pub const API_URL_VAR: &str = "DN_API_URL";

/// Key-value lookup for environment variables
pub trait EnvLookup: Send + Sync {
    /// Get a raw variable value
    fn var(&self, name: &str) -> Option<String>;

    /// Get a variable, treating the empty string as unset
    fn non_empty(&self, name: &str) -> Option<String> {
        self.var(name).filter(|value| !value.is_empty())
    }
}

/// Reads the real process environment
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvLookup for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
