//! `dn register`: register a new domain

use async_trait::async_trait;
use clap::Args;

use super::contact::ContactArgs;
use super::{Outcome, Subcommand};
use crate::context::CommandContext;
use crate::error::{Error, Result};
use crate::model::{ContactType, DomainContact, DomainContacts, DomainRegister, PrivacySetting, Request};

/// Register a new domain
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct RegisterCommand {
    /// Domain name to register
    pub domain: String,

    /// Registration period in years
    #[arg(short, long, default_value_t = 1)]
    pub period: u32,

    /// Privacy setting: on, off, redact
    #[arg(long, default_value = "on")]
    pub privacy: String,

    /// Price for premium domains (in cents)
    #[arg(long)]
    pub price: Option<u64>,

    #[command(flatten)]
    pub contact: ContactArgs,
}

#[async_trait]
impl Subcommand for RegisterCommand {
    fn name(&self) -> &'static str {
        "register"
    }

    async fn handle(&self, ctx: &CommandContext) -> Result<Outcome> {
        if self.period == 0 {
            return Err(Error::invalid_input("Registration period must be at least 1 year."));
        }
        let privacy_setting: PrivacySetting = self.privacy.parse()?;

        let terminal = ctx.terminal();
        let owner = self.contact.resolve(terminal)?;
        let contacts = DomainContacts::from([(ContactType::Owner, DomainContact::new(owner))]);

        terminal.text(&format!(
            "Registering {} for {} year(s)...",
            self.domain, self.period
        ));
        if !terminal.confirm("Proceed with registration?", true)? {
            return Ok(Outcome::Cancelled);
        }

        let request = Request::DomainRegister(DomainRegister {
            domain_name: self.domain.clone(),
            contacts,
            period: self.period,
            privacy_setting,
            price: self.price,
        });

        ctx.api()?
            .post(&request)
            .await?
            .check("Registration failed")?;

        terminal.success(&format!(
            "Registration request for {} has been submitted. Check events for completion status.",
            self.domain
        ));
        Ok(Outcome::Completed)
    }
}
