// # Registrar API Client Trait
//
// Defines the interface every registrar transport implements, and the
// factory that builds one from stored credentials.
//
// ## Implementations
//
// - DSAPI over HTTPS: `dn-provider-dsapi` crate
// - Test doubles: `crates/dn-core/tests/common`
//
// ## Usage
//
// ```rust,ignore
// use dn_core::model::{DomainRef, Request};
//
// let client = factory.create(&store)?;
// let response = client
//     .post(&Request::DomainInfo(DomainRef::new("example.com")))
//     .await?;
// ```

use async_trait::async_trait;

use crate::config::ConfigStore;
use crate::error::{Error, Result};
use crate::model::{Request, Response};

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-DSAPI-KEY";
/// Header carrying the API user
pub const API_USER_HEADER: &str = "X-DSAPI-USER";

/// Trait for registrar transports
///
/// A transport executes exactly one HTTP exchange per call. It returns
/// `Ok` for every well-formed registrar answer, including failures the
/// registrar reports in the envelope; `Err` is reserved for transport and
/// decoding problems.
///
/// Implementations never retry, cache, or spawn tasks.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Send `request` and decode the registrar's answer
    async fn post(&self, request: &Request) -> Result<Response>;
}

/// Helper trait for constructing API clients from stored credentials
pub trait ApiClientFactory: Send + Sync {
    /// Create an ApiClient for the credentials in `store`
    ///
    /// Implementations must go through [`TransportConfig::from_store`] so
    /// that the HTTPS check runs before anything is constructed.
    fn create(&self, store: &ConfigStore) -> Result<Box<dyn ApiClient>>;
}

/// Resolved transport settings
#[derive(Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Custom base URL, `None` means the transport's default host
    pub api_url: Option<String>,
    pub api_key: String,
    pub api_user: String,
}

impl std::fmt::Debug for TransportConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<REDACTED>")
            .field("api_user", &"<REDACTED>")
            .finish()
    }
}

impl TransportConfig {
    /// Read credentials from `store` and validate them
    ///
    /// # Errors
    ///
    /// - `Error::Config` if the key or user is missing
    /// - `Error::Config("API URL must use HTTPS")` for a non-HTTPS custom host
    pub fn from_store(store: &ConfigStore) -> Result<Self> {
        let (Some(api_key), Some(api_user)) = (store.api_key(), store.api_user()) else {
            return Err(Error::config("API key and user are required."));
        };

        let api_url = store.api_url();
        if let Some(url) = &api_url {
            ensure_https(url)?;
        }

        Ok(Self {
            api_url,
            api_key,
            api_user,
        })
    }

    /// Header name/value pairs that authenticate every request
    pub fn auth_headers(&self) -> [(&'static str, &str); 2] {
        [
            (API_KEY_HEADER, self.api_key.as_str()),
            (API_USER_HEADER, self.api_user.as_str()),
        ]
    }
}

/// Reject any URL whose scheme is not `https`
pub fn ensure_https(url: &str) -> Result<()> {
    let scheme = url.trim().split_once("://").map(|(scheme, _)| scheme);
    match scheme {
        Some(scheme) if scheme.eq_ignore_ascii_case("https") => Ok(()),
        _ => Err(Error::config("API URL must use HTTPS")),
    }
}
