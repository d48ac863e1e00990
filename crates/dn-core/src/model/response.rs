//! Registrar responses
//!
//! The registrar wraps every answer in the same envelope. The `data` member
//! is decoded into a [`Payload`] variant chosen by the request that produced
//! it, so commands never poke at raw JSON.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

use super::entity::{DnsRecords, DomainContact, null_as_default};
use super::request::Request;
use crate::error::{Error, Result};

/// Date format used by the registrar
pub const REGISTRAR_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Raw response envelope as sent on the wire
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub status_description: String,
    #[serde(default)]
    pub client_txn_id: Option<String>,
    #[serde(default)]
    pub server_txn_id: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

/// A decoded registrar response
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub success: bool,
    pub status: u16,
    pub status_description: String,
    pub client_txn_id: Option<String>,
    pub server_txn_id: Option<String>,
    pub payload: Payload,
}

impl Response {
    /// Successful response carrying `payload`
    pub fn ok(payload: Payload) -> Self {
        Self {
            success: true,
            status: 1000,
            status_description: "Command completed successfully".to_string(),
            client_txn_id: None,
            server_txn_id: None,
            payload,
        }
    }

    /// Failed response with the registrar's description
    pub fn failure(status: u16, description: impl Into<String>) -> Self {
        Self {
            success: false,
            status,
            status_description: description.into(),
            client_txn_id: None,
            server_txn_id: None,
            payload: Payload::Empty,
        }
    }

    /// Decode an envelope produced by `request`
    ///
    /// Failed responses are never decoded further; their payload is
    /// [`Payload::Empty`].
    pub fn from_envelope(request: &Request, envelope: Envelope) -> Result<Self> {
        let payload = if envelope.success {
            Payload::decode(request, envelope.data)?
        } else {
            Payload::Empty
        };

        Ok(Self {
            success: envelope.success,
            status: envelope.status,
            status_description: envelope.status_description,
            client_txn_id: envelope.client_txn_id,
            server_txn_id: envelope.server_txn_id,
            payload,
        })
    }

    /// Turn a failed response into an [`Error::Api`] with `context`
    pub fn check(self, context: &str) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(Error::api(context, self.status_description))
        }
    }
}

/// Operation-specific response data
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// No data (mutations, and every failed response)
    Empty,
    Check(CheckResult),
    Suggestions(SuggestResult),
    Info(Box<InfoResult>),
    DnsGet(DnsGetResult),
}

impl Payload {
    /// Decode `data` according to the kind of `request`
    pub fn decode(request: &Request, data: Option<Value>) -> Result<Self> {
        match request {
            Request::DomainCheck(_) => Ok(Payload::Check(decode_data(data)?)),
            Request::DomainSuggestions(_) => Ok(Payload::Suggestions(decode_data(data)?)),
            Request::DomainInfo(_) => Ok(Payload::Info(Box::new(decode_data(data)?))),
            Request::DnsGet(_) => Ok(Payload::DnsGet(decode_data(data)?)),
            _ => Ok(Payload::Empty),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Payload::Empty => "empty",
            Payload::Check(_) => "check",
            Payload::Suggestions(_) => "suggestions",
            Payload::Info(_) => "info",
            Payload::DnsGet(_) => "dns",
        }
    }

    pub fn into_check(self) -> Result<CheckResult> {
        match self {
            Payload::Check(result) => Ok(result),
            other => Err(unexpected(&other)),
        }
    }

    pub fn into_suggestions(self) -> Result<SuggestResult> {
        match self {
            Payload::Suggestions(result) => Ok(result),
            other => Err(unexpected(&other)),
        }
    }

    pub fn into_info(self) -> Result<InfoResult> {
        match self {
            Payload::Info(result) => Ok(*result),
            other => Err(unexpected(&other)),
        }
    }

    pub fn into_dns(self) -> Result<DnsGetResult> {
        match self {
            Payload::DnsGet(result) => Ok(result),
            other => Err(unexpected(&other)),
        }
    }
}

fn unexpected(payload: &Payload) -> Error {
    Error::transport(format!("Unexpected response payload: {}", payload.kind()))
}

fn decode_data<T: serde::de::DeserializeOwned>(data: Option<Value>) -> Result<T> {
    let data = data.ok_or_else(|| Error::transport("Malformed response: missing data"))?;
    Ok(serde_json::from_value(data)?)
}

/// `Domain_Check` data
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CheckResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub domains: BTreeMap<String, DomainAvailability>,
}

/// Availability of one domain
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DomainAvailability {
    #[serde(default, deserialize_with = "null_as_default")]
    pub available: bool,
    #[serde(default)]
    pub fee_class: Option<String>,
    /// Price in dollars
    #[serde(default)]
    pub fee_amount: Option<f64>,
    #[serde(default)]
    pub zone_is_active: Option<bool>,
    #[serde(default)]
    pub tld_in_maintenance: Option<bool>,
}

/// `Domain_Suggestions` data
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SuggestResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Suggestion {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_available: bool,
    /// Cents
    #[serde(deserialize_with = "null_as_default")]
    pub reseller_register_fee: u64,
    /// Cents
    #[serde(deserialize_with = "null_as_default")]
    pub reseller_renewal_fee: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub is_premium: bool,
    pub zone_is_active: Option<bool>,
}

/// `Domain_Info` data
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InfoResult {
    pub auth_code: Option<String>,
    #[serde(deserialize_with = "contact_map")]
    pub contacts: BTreeMap<String, DomainContact>,
    #[serde(deserialize_with = "registrar_date")]
    pub created_date: Option<NaiveDateTime>,
    #[serde(deserialize_with = "registrar_date")]
    pub expiration_date: Option<NaiveDateTime>,
    #[serde(deserialize_with = "registrar_date")]
    pub updated_date: Option<NaiveDateTime>,
    #[serde(deserialize_with = "registrar_date")]
    pub paid_until: Option<NaiveDateTime>,
    pub dnssec: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub domain_status: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub name_servers: Vec<String>,
    pub privacy_setting: Option<String>,
    pub renewal_mode: Option<String>,
    pub rgp_status: Option<String>,
    pub transferlock: Option<bool>,
    pub transfer_mode: Option<String>,
}

/// `Dns_Get` data
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DnsGetResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub dns_records: DnsRecords,
}

/// Contacts by role; a `null` map or a `null` entry reads as empty
fn contact_map<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<String, DomainContact>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Option<DomainContact>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(role, contact)| (role, contact.unwrap_or_default()))
        .collect())
}

/// Parse a registrar date, tolerating RFC 3339 and dropping unparseable values
fn registrar_date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return Ok(None);
    };

    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw.trim(), REGISTRAR_DATE_FORMAT) {
        return Ok(Some(parsed));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw.trim()) {
        return Ok(Some(parsed.naive_utc()));
    }

    tracing::warn!(value = %raw, "Ignoring unparseable registrar date");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::request::{DomainCheck, DomainRef};
    use serde_json::json;

    fn check_request() -> Request {
        Request::DomainCheck(DomainCheck {
            domain_names: vec!["example.com".to_string()],
        })
    }

    #[test]
    fn decodes_check_payload() {
        let envelope: Envelope = serde_json::from_value(json!({
            "success": true,
            "status": 1000,
            "status_description": "Command completed successfully",
            "data": {
                "domains": {
                    "example.com": { "available": true, "fee_class": "standard", "fee_amount": 12.0 }
                }
            }
        }))
        .unwrap();

        let response = Response::from_envelope(&check_request(), envelope).unwrap();
        let check = response.payload.into_check().unwrap();
        let entry = &check.domains["example.com"];
        assert!(entry.available);
        assert_eq!(entry.fee_class.as_deref(), Some("standard"));
        assert_eq!(entry.zone_is_active, None);
    }

    #[test]
    fn failed_response_skips_payload() {
        let envelope: Envelope = serde_json::from_value(json!({
            "success": false,
            "status": 2400,
            "status_description": "Server error",
            "data": "garbage"
        }))
        .unwrap();

        let response = Response::from_envelope(&check_request(), envelope).unwrap();
        assert_eq!(response.payload, Payload::Empty);

        let err = response.check("API error").unwrap_err();
        assert_eq!(err.to_string(), "API error: Server error");
    }

    #[test]
    fn missing_data_is_a_transport_error() {
        let envelope: Envelope = serde_json::from_value(json!({ "success": true })).unwrap();
        let err = Response::from_envelope(&check_request(), envelope).unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }

    #[test]
    fn info_dates_are_parsed() {
        let request = Request::DomainInfo(DomainRef::new("example.com"));
        let envelope: Envelope = serde_json::from_value(json!({
            "success": true,
            "data": {
                "created_date": "2020-01-02 03:04:05",
                "expiration_date": "2031-01-02T03:04:05Z",
                "updated_date": "not a date",
                "transferlock": true,
                "name_servers": ["ns1.example.net"]
            }
        }))
        .unwrap();

        let info = Response::from_envelope(&request, envelope)
            .unwrap()
            .payload
            .into_info()
            .unwrap();

        assert_eq!(
            info.created_date.unwrap().format(REGISTRAR_DATE_FORMAT).to_string(),
            "2020-01-02 03:04:05"
        );
        assert!(info.expiration_date.is_some());
        assert!(info.updated_date.is_none());
        assert!(info.paid_until.is_none());
        assert_eq!(info.transferlock, Some(true));
    }

    #[test]
    fn null_lists_and_contacts_read_as_absent() {
        let request = Request::DomainInfo(DomainRef::new("example.com"));
        let envelope: Envelope = serde_json::from_value(json!({
            "success": true,
            "data": {
                "auth_code": "ABC123",
                "name_servers": null,
                "domain_status": null,
                "contacts": {
                    "owner": { "contact_information": { "first_name": "Jane", "state": null } },
                    "admin": null
                }
            }
        }))
        .unwrap();

        let info = Response::from_envelope(&request, envelope)
            .unwrap()
            .payload
            .into_info()
            .unwrap();

        assert_eq!(info.auth_code.as_deref(), Some("ABC123"));
        assert!(info.name_servers.is_empty());
        assert!(info.domain_status.is_empty());
        assert_eq!(info.contacts["admin"], DomainContact::default());

        let envelope: Envelope =
            serde_json::from_value(json!({ "success": true, "data": { "contacts": null } })).unwrap();
        let info = Response::from_envelope(&request, envelope).unwrap().payload.into_info().unwrap();
        assert!(info.contacts.is_empty());
    }

    #[test]
    fn null_collections_in_other_payloads_read_as_empty() {
        let envelope: Envelope = serde_json::from_value(json!({
            "success": true,
            "data": { "domains": null }
        }))
        .unwrap();
        let check = Response::from_envelope(&check_request(), envelope)
            .unwrap()
            .payload
            .into_check()
            .unwrap();
        assert!(check.domains.is_empty());

        let request = Request::DnsGet(DomainRef::new("example.com"));
        let envelope: Envelope =
            serde_json::from_value(json!({ "success": true, "data": { "dns_records": null } })).unwrap();
        let dns = Response::from_envelope(&request, envelope).unwrap().payload.into_dns().unwrap();
        assert!(dns.dns_records.record_sets.is_empty());
    }

    #[test]
    fn mutations_carry_no_payload() {
        let request = Request::DomainDelete(DomainRef::new("example.com"));
        let payload = Payload::decode(&request, Some(json!({"anything": 1}))).unwrap();
        assert_eq!(payload, Payload::Empty);
        assert!(payload.into_check().is_err());
    }
}
