//! Typed registrar requests
//!
//! One variant per registrar operation. On the wire a request is
//! `{"command": "<name>", "params": {...}}`.

use serde::Serialize;

use super::entity::{DnsRecords, DomainContacts, PrivacySetting};

/// A registrar request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", content = "params")]
pub enum Request {
    #[serde(rename = "Domain_Check")]
    DomainCheck(DomainCheck),
    #[serde(rename = "Domain_Suggestions")]
    DomainSuggestions(DomainSuggestions),
    #[serde(rename = "Domain_Info")]
    DomainInfo(DomainRef),
    #[serde(rename = "Domain_Register")]
    DomainRegister(DomainRegister),
    #[serde(rename = "Domain_Renew")]
    DomainRenew(DomainRenew),
    #[serde(rename = "Domain_Delete")]
    DomainDelete(DomainRef),
    #[serde(rename = "Domain_Restore")]
    DomainRestore(DomainRef),
    #[serde(rename = "Domain_Transfer")]
    DomainTransfer(DomainTransfer),
    #[serde(rename = "Dns_Get")]
    DnsGet(DomainRef),
    #[serde(rename = "Dns_Set")]
    DnsSet(DnsSet),
    #[serde(rename = "Domain_Set_Contacts")]
    SetContacts(SetContacts),
    #[serde(rename = "Domain_Set_Privacy")]
    SetPrivacy(SetPrivacy),
    #[serde(rename = "Domain_Set_Transferlock")]
    SetTransferlock(SetTransferlock),
}

impl Request {
    /// Wire name of the command
    pub fn command_name(&self) -> &'static str {
        match self {
            Request::DomainCheck(_) => "Domain_Check",
            Request::DomainSuggestions(_) => "Domain_Suggestions",
            Request::DomainInfo(_) => "Domain_Info",
            Request::DomainRegister(_) => "Domain_Register",
            Request::DomainRenew(_) => "Domain_Renew",
            Request::DomainDelete(_) => "Domain_Delete",
            Request::DomainRestore(_) => "Domain_Restore",
            Request::DomainTransfer(_) => "Domain_Transfer",
            Request::DnsGet(_) => "Dns_Get",
            Request::DnsSet(_) => "Dns_Set",
            Request::SetContacts(_) => "Domain_Set_Contacts",
            Request::SetPrivacy(_) => "Domain_Set_Privacy",
            Request::SetTransferlock(_) => "Domain_Set_Transferlock",
        }
    }
}

/// Request targeting a single domain and nothing else
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainRef {
    pub domain_name: String,
}

impl DomainRef {
    pub fn new(domain_name: impl Into<String>) -> Self {
        Self {
            domain_name: domain_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainCheck {
    pub domain_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainSuggestions {
    pub query: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tlds: Option<Vec<String>>,
    pub exact_match: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainRegister {
    pub domain_name: String,
    pub contacts: DomainContacts,
    pub period: u32,
    pub privacy_setting: PrivacySetting,
    /// Price in cents, required by the registrar for premium domains
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainRenew {
    pub domain_name: String,
    pub current_expiration_year: i32,
    pub period: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainTransfer {
    pub domain_name: String,
    pub auth_code: String,
    pub contacts: DomainContacts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsSet {
    pub domain_name: String,
    pub dns_records: DnsRecords,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetContacts {
    pub domain_name: String,
    pub contacts: DomainContacts,
    pub transferlock_opt_out: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetPrivacy {
    pub domain_name: String,
    pub privacy_setting: PrivacySetting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetTransferlock {
    pub domain_name: String,
    pub transferlock: bool,
}
