//! `dn transfer`: inbound transfer

use async_trait::async_trait;
use clap::Args;

use super::contact::ContactArgs;
use super::input::{Prompt, flag_or_prompt};
use super::{Outcome, Subcommand};
use crate::context::CommandContext;
use crate::error::{Error, Result};
use crate::model::{ContactType, DomainContact, DomainContacts, DomainTransfer, Request};

/// Transfer a domain in
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct TransferCommand {
    /// Domain name to transfer
    pub domain: String,

    /// EPP authorization code (prompted without echo when omitted)
    #[arg(long)]
    pub auth_code: Option<String>,

    #[command(flatten)]
    pub contact: ContactArgs,
}

#[async_trait]
impl Subcommand for TransferCommand {
    fn name(&self) -> &'static str {
        "transfer"
    }

    async fn handle(&self, ctx: &CommandContext) -> Result<Outcome> {
        let terminal = ctx.terminal();

        let auth_code = flag_or_prompt(
            terminal,
            self.auth_code.as_deref(),
            Prompt::hidden("EPP Authorization Code"),
        )?;
        if auth_code.trim().is_empty() {
            return Err(Error::invalid_input("Authorization code is required for transfers."));
        }

        let owner = self.contact.resolve(terminal)?;
        let contacts = DomainContacts::from([(ContactType::Owner, DomainContact::new(owner))]);

        terminal.text(&format!("Transferring {}...", self.domain));

        let request = Request::DomainTransfer(DomainTransfer {
            domain_name: self.domain.clone(),
            auth_code: auth_code.trim().to_string(),
            contacts,
        });

        ctx.api()?.post(&request).await?.check("Transfer failed")?;

        terminal.success(&format!(
            "Transfer request for {} has been submitted. Check events for completion status.",
            self.domain
        ));
        Ok(Outcome::Completed)
    }
}
