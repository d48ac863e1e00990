//! `dn contacts:set`

use async_trait::async_trait;
use clap::Args;

use super::contact::ContactArgs;
use super::{Outcome, Subcommand};
use crate::context::CommandContext;
use crate::error::Result;
use crate::model::{ContactType, DomainContact, DomainContacts, Request, SetContacts};

/// Update domain contact information
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ContactsSetCommand {
    /// Domain name
    pub domain: String,

    /// Contact type: owner, admin, tech, billing
    #[arg(long = "type", default_value = "owner")]
    pub contact_type: String,

    /// Opt out of automatic transfer lock after contact change
    #[arg(long)]
    pub transferlock_opt_out: bool,

    #[command(flatten)]
    pub contact: ContactArgs,
}

#[async_trait]
impl Subcommand for ContactsSetCommand {
    fn name(&self) -> &'static str {
        "contacts:set"
    }

    async fn handle(&self, ctx: &CommandContext) -> Result<Outcome> {
        let contact_type: ContactType = self.contact_type.parse()?;

        let terminal = ctx.terminal();
        let details = self.contact.resolve(terminal)?;

        let request = Request::SetContacts(SetContacts {
            domain_name: self.domain.clone(),
            contacts: DomainContacts::from([(contact_type, DomainContact::new(details))]),
            transferlock_opt_out: self.transferlock_opt_out,
        });

        ctx.api()?
            .post(&request)
            .await?
            .check("Failed to update contacts")?;

        terminal.success(&format!(
            "Contact ({}) updated for {}.",
            contact_type, self.domain
        ));
        Ok(Outcome::Completed)
    }
}
