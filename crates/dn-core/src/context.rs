//! Per-invocation command context
//!
//! Bundles the credential store, the terminal and the API client factory for
//! one run of one command. The API client is built lazily, at most once, and
//! only when a command actually needs to talk to the registrar.

use std::sync::{Arc, OnceLock};

use crate::config::ConfigStore;
use crate::error::Result;
use crate::traits::{ApiClient, ApiClientFactory, Terminal};

/// Replacement for every redacted secret
pub const REDACTION_MASK: &str = "***";

/// Masks known credential values in free-form text
#[derive(Clone, Default)]
pub struct Redactor {
    secrets: Vec<String>,
}

impl std::fmt::Debug for Redactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Redactor")
            .field("secrets", &self.secrets.len())
            .finish()
    }
}

impl Redactor {
    /// Build a redactor for the given secrets, skipping empty ones
    pub fn new<I, S>(secrets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut secrets: Vec<String> = secrets
            .into_iter()
            .map(Into::into)
            .filter(|s| !s.is_empty())
            .collect();
        // Longest first, so a secret containing another is masked whole
        secrets.sort_by(|a, b| b.len().cmp(&a.len()));
        secrets.dedup();
        Self { secrets }
    }

    /// Redactor for the credentials currently resolved by `store`
    pub fn from_store(store: &ConfigStore) -> Self {
        Self::new(store.api_key().into_iter().chain(store.api_user()))
    }

    /// Replace every occurrence of a secret with [`REDACTION_MASK`]
    pub fn redact(&self, message: &str) -> String {
        self.secrets
            .iter()
            .fold(message.to_string(), |acc, secret| {
                acc.replace(secret.as_str(), REDACTION_MASK)
            })
    }
}

/// State shared by a single command invocation
pub struct CommandContext {
    store: ConfigStore,
    terminal: Arc<dyn Terminal>,
    factory: Arc<dyn ApiClientFactory>,
    client: OnceLock<Arc<dyn ApiClient>>,
}

impl std::fmt::Debug for CommandContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandContext")
            .field("store", &self.store)
            .field("client_ready", &self.client.get().is_some())
            .finish_non_exhaustive()
    }
}

impl CommandContext {
    /// Create a context that builds its client through `factory`
    pub fn new(
        store: ConfigStore,
        terminal: Arc<dyn Terminal>,
        factory: Arc<dyn ApiClientFactory>,
    ) -> Self {
        Self {
            store,
            terminal,
            factory,
            client: OnceLock::new(),
        }
    }

    /// Use `client` instead of asking the factory
    pub fn with_client(mut self, client: Arc<dyn ApiClient>) -> Self {
        self.client = OnceLock::from(client);
        self
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn terminal(&self) -> &dyn Terminal {
        self.terminal.as_ref()
    }

    /// The API client, built on first use
    ///
    /// # Errors
    ///
    /// Whatever the factory reports, e.g. a non-HTTPS API URL. A failed
    /// build is not cached.
    pub fn api(&self) -> Result<&dyn ApiClient> {
        if let Some(client) = self.client.get() {
            return Ok(client.as_ref());
        }

        let built: Arc<dyn ApiClient> = Arc::from(self.factory.create(&self.store)?);
        tracing::debug!("API client constructed");
        Ok(self.client.get_or_init(|| built).as_ref())
    }

    /// Redactor for the credentials as they resolve right now
    pub fn redactor(&self) -> Redactor {
        Redactor::from_store(&self.store)
    }

    /// Mask the current API key and user in `message`
    pub fn redact(&self, message: &str) -> String {
        self.redactor().redact(message)
    }
}
