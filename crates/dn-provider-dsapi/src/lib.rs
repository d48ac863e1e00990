// # DSAPI Registrar Transport
//
// This crate provides the production `ApiClient` for the dn CLI: JSON over
// HTTPS against the registrar's Domain Services API.
//
// ## Behavior
//
// - One HTTP POST per command, body `{"command": ..., "params": ...}`
// - Credentials travel as the `X-DSAPI-KEY` / `X-DSAPI-USER` headers
// - HTTP timeout of 30 seconds
// - Registrar-reported failures come back as `Ok(Response)` with
//   `success == false`; only transport and decoding problems are `Err`
// - No retries, no backoff, no caching
//
// ## Security Requirements
//
// - Credentials NEVER appear in logs or `Debug` output
// - Custom hosts MUST use HTTPS (checked by `TransportConfig::from_store`
//   before a client exists)

use async_trait::async_trait;
use dn_core::model::{Envelope, Request, Response};
use dn_core::traits::{ApiClient, ApiClientFactory, TransportConfig};
use dn_core::{ConfigStore, Error, Redactor, Result};
use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

/// Registrar API endpoint used when no custom URL is configured
pub const DEFAULT_API_URL: &str = "https://domain-services.automattic.com/v1";

/// Default HTTP timeout for API requests (30 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest slice of an unparseable body quoted in an error
const BODY_EXCERPT_LEN: usize = 200;

/// HTTPS client for the registrar API
pub struct DsapiClient {
    endpoint: String,
    client: reqwest::Client,
    redactor: Redactor,
}

impl std::fmt::Debug for DsapiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DsapiClient")
            .field("endpoint", &self.endpoint)
            .field("credentials", &"<REDACTED>")
            .finish()
    }
}

impl DsapiClient {
    /// Create a client from validated transport settings
    ///
    /// # Errors
    ///
    /// - `Error::Config` if a credential cannot be sent as a header value
    /// - `Error::Transport` if the HTTP client cannot be built
    pub fn new(config: &TransportConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in config.auth_headers() {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| Error::config(format!("Invalid header name: {}", name)))?;
            let mut value = HeaderValue::from_str(value)
                .map_err(|_| Error::config("API credentials contain invalid characters"))?;
            value.set_sensitive(true);
            headers.insert(name, value);
        }

        let client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .default_headers(headers)
            .user_agent(concat!("dn/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::transport(format!("Failed to build HTTP client: {}", e)))?;

        let endpoint = config
            .api_url
            .as_deref()
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            endpoint,
            client,
            redactor: Redactor::new([config.api_key.as_str(), config.api_user.as_str()]),
        })
    }

    /// URL every request is posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport_error(&self, what: &str, err: impl std::fmt::Display) -> Error {
        let message = self.redactor.redact(&format!("{}: {}", what, err));
        tracing::warn!(error = %message, "Registrar request failed");
        Error::transport(message)
    }
}

#[async_trait]
impl ApiClient for DsapiClient {
    async fn post(&self, request: &Request) -> Result<Response> {
        let command = request.command_name();
        tracing::info!(command, "Sending registrar request");

        let http = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error("HTTP request failed", e))?;

        let status = http.status();
        let body = http
            .text()
            .await
            .map_err(|e| self.transport_error("Failed to read response", e))?;

        match serde_json::from_str::<Envelope>(&body) {
            Ok(envelope) => {
                tracing::debug!(
                    command,
                    http_status = status.as_u16(),
                    success = envelope.success,
                    status = envelope.status,
                    "Registrar responded"
                );
                Response::from_envelope(request, envelope)
            }
            Err(e) if status.is_success() => {
                Err(self.transport_error("Malformed response", e))
            }
            Err(_) => Err(Error::transport(
                self.redactor.redact(&status_message(status, &body)),
            )),
        }
    }
}

/// Human-readable error for a non-envelope HTTP failure
fn status_message(status: StatusCode, body: &str) -> String {
    let excerpt: String = body.trim().chars().take(BODY_EXCERPT_LEN).collect();
    let detail = if excerpt.is_empty() {
        String::new()
    } else {
        format!(" ({})", excerpt)
    };

    match status.as_u16() {
        401 | 403 => format!(
            "Authentication failed: check your API key and user. Status: {}{}",
            status, detail
        ),
        404 => format!("API endpoint not found. Status: {}{}", status, detail),
        429 => format!("Rate limit exceeded. Status: {}{}", status, detail),
        500..=599 => format!("Registrar server error. Status: {}{}", status, detail),
        _ => format!("Unexpected HTTP status {}{}", status, detail),
    }
}

/// Factory for creating DSAPI clients
#[derive(Debug, Default, Clone, Copy)]
pub struct DsapiFactory;

impl ApiClientFactory for DsapiFactory {
    fn create(&self, store: &ConfigStore) -> Result<Box<dyn ApiClient>> {
        let config = TransportConfig::from_store(store)?;
        let client = DsapiClient::new(&config)?;
        tracing::debug!(endpoint = client.endpoint(), "Registrar client ready");
        Ok(Box::new(client))
    }
}
