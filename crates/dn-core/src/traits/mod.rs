//! Core traits for the dn CLI
//!
//! - [`ApiClient`]: send typed requests to the registrar
//! - [`ApiClientFactory`]: build a client from stored credentials
//! - [`Terminal`]: prompt the operator and render output

pub mod api_client;
pub mod terminal;

pub use api_client::{
    API_KEY_HEADER, API_USER_HEADER, ApiClient, ApiClientFactory, TransportConfig, ensure_https,
};
pub use terminal::Terminal;
