//! Typed registrar protocol
//!
//! - [`Request`]: one variant per registrar operation
//! - [`Response`]: decoded envelope with an operation-specific [`Payload`]
//! - [`entity`]: contacts, DNS records and enumerated settings

pub mod entity;
pub mod request;
pub mod response;

pub use entity::{
    ContactInformation, ContactType, DnsRecordSet, DnsRecords, DomainContact, DomainContacts,
    LockState, PrivacySetting,
};
pub use request::{
    DnsSet, DomainCheck, DomainRef, DomainRegister, DomainRenew, DomainSuggestions,
    DomainTransfer, Request, SetContacts, SetPrivacy, SetTransferlock,
};
pub use response::{
    CheckResult, DnsGetResult, DomainAvailability, Envelope, InfoResult, Payload, Response,
    SuggestResult, Suggestion, REGISTRAR_DATE_FORMAT,
};
