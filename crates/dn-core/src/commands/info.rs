//! `dn info`: domain details

use async_trait::async_trait;
use chrono::NaiveDateTime;
use clap::Args;

use super::render::{ABSENT, or_absent};
use super::{Outcome, Subcommand};
use crate::context::CommandContext;
use crate::error::Result;
use crate::model::{ContactType, DomainRef, InfoResult, REGISTRAR_DATE_FORMAT, Request};

/// Get detailed information about a domain
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct InfoCommand {
    /// Domain name to query
    pub domain: String,
}

fn date(value: Option<NaiveDateTime>) -> String {
    value
        .map(|d| d.format(REGISTRAR_DATE_FORMAT).to_string())
        .unwrap_or_else(|| ABSENT.to_string())
}

fn property_rows(info: &InfoResult) -> Vec<Vec<String>> {
    let lock = match info.transferlock {
        Some(true) => "On".to_string(),
        Some(false) => "Off".to_string(),
        None => ABSENT.to_string(),
    };

    [
        ("Created", date(info.created_date)),
        ("Expires", date(info.expiration_date)),
        ("Updated", date(info.updated_date)),
        ("Paid Until", date(info.paid_until)),
        ("Auth Code", or_absent(info.auth_code.as_deref())),
        ("Renewal Mode", or_absent(info.renewal_mode.as_deref())),
        ("Transfer Mode", or_absent(info.transfer_mode.as_deref())),
        ("RGP Status", or_absent(info.rgp_status.as_deref())),
        ("Transfer Lock", lock),
        ("Privacy", or_absent(info.privacy_setting.as_deref())),
        ("DNSSEC", or_absent(info.dnssec.as_deref())),
    ]
    .into_iter()
    .map(|(property, value)| vec![property.to_string(), value])
    .collect()
}

/// `owner: Jane Doe <jane@example.com>` lines in role order
fn contact_lines(info: &InfoResult) -> Vec<String> {
    ContactType::ALL
        .iter()
        .filter_map(|role| {
            let details = info.contacts.get(role.as_str())?.contact_information.as_ref()?;
            Some(format!("{}: {} <{}>", role, details.full_name(), details.email))
        })
        .collect()
}

#[async_trait]
impl Subcommand for InfoCommand {
    fn name(&self) -> &'static str {
        "info"
    }

    async fn handle(&self, ctx: &CommandContext) -> Result<Outcome> {
        let request = Request::DomainInfo(DomainRef::new(&self.domain));
        let response = ctx.api()?.post(&request).await?.check("API error")?;
        let info = response.payload.into_info()?;

        let terminal = ctx.terminal();
        terminal.title(&format!("Domain: {}", self.domain));
        terminal.table(&["Property", "Value"], property_rows(&info));

        if !info.name_servers.is_empty() {
            terminal.section("Nameservers");
            terminal.listing(&info.name_servers);
        }

        if !info.domain_status.is_empty() {
            terminal.section("EPP Status Codes");
            terminal.listing(&info.domain_status);
        }

        let contacts = contact_lines(&info);
        if !contacts.is_empty() {
            terminal.section("Contacts");
            for line in &contacts {
                terminal.text(line);
            }
        }

        Ok(Outcome::Completed)
    }
}
