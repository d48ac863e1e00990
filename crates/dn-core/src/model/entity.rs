//! Registrar entities shared by requests and responses

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// WHOIS privacy setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrivacySetting {
    /// Contact details masked by a privacy service (`on`)
    EnablePrivacyService,
    /// Contact details published (`off`)
    DiscloseContactInfo,
    /// Contact details redacted (`redact`)
    RedactContactInfo,
}

impl PrivacySetting {
    /// The word used on the command line
    pub fn as_cli_word(&self) -> &'static str {
        match self {
            PrivacySetting::EnablePrivacyService => "on",
            PrivacySetting::DiscloseContactInfo => "off",
            PrivacySetting::RedactContactInfo => "redact",
        }
    }
}

impl FromStr for PrivacySetting {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "on" => Ok(PrivacySetting::EnablePrivacyService),
            "off" => Ok(PrivacySetting::DiscloseContactInfo),
            "redact" => Ok(PrivacySetting::RedactContactInfo),
            _ => Err(Error::invalid_input(
                "Invalid privacy setting. Use: on, off, or redact",
            )),
        }
    }
}

/// Transfer lock state as typed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    /// Lock enabled
    On,
    /// Lock disabled
    Off,
}

impl LockState {
    /// Whether the registrar flag should be set
    pub fn is_locked(&self) -> bool {
        matches!(self, LockState::On)
    }
}

impl fmt::Display for LockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LockState::On => "on",
            LockState::Off => "off",
        })
    }
}

impl FromStr for LockState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "on" => Ok(LockState::On),
            "off" => Ok(LockState::Off),
            _ => Err(Error::invalid_input("Invalid state. Use: on or off")),
        }
    }
}

/// Role a contact plays for a domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    /// Registrant
    Owner,
    /// Administrative contact
    Admin,
    /// Technical contact
    Tech,
    /// Billing contact
    Billing,
}

impl ContactType {
    /// All contact types, in display order
    pub const ALL: [ContactType; 4] = [
        ContactType::Owner,
        ContactType::Admin,
        ContactType::Tech,
        ContactType::Billing,
    ];

    /// Lowercase name used on the command line and on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactType::Owner => "owner",
            ContactType::Admin => "admin",
            ContactType::Tech => "tech",
            ContactType::Billing => "billing",
        }
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ContactType::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| {
                Error::invalid_input("Invalid contact type. Use: owner, admin, tech, or billing")
            })
    }
}

/// Postal and electronic contact details
///
/// The registrar may send `null` for any field; it reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInformation {
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub address_1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_2: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub postal_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
}

impl ContactInformation {
    /// "First Last", trimmed when either half is missing
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// A contact attached to a domain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainContact {
    #[serde(default)]
    pub contact_information: Option<ContactInformation>,
}

impl DomainContact {
    pub fn new(info: ContactInformation) -> Self {
        Self {
            contact_information: Some(info),
        }
    }
}

/// Contacts keyed by role
pub type DomainContacts = BTreeMap<ContactType, DomainContact>;

/// One DNS record set (all values for a name/type pair)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecordSet {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub record_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ttl: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<String>,
}

/// DNS records of a domain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecords {
    #[serde(default, deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub record_sets: Vec<DnsRecordSet>,
}

/// Read `null` the same way as a missing key
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
