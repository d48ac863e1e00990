//! `dn delete`

use async_trait::async_trait;
use clap::Args;

use super::{Outcome, Subcommand};
use crate::context::CommandContext;
use crate::error::Result;
use crate::model::{DomainRef, Request};

/// Delete a domain registration
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    /// Domain name to delete
    pub domain: String,
}

#[async_trait]
impl Subcommand for DeleteCommand {
    fn name(&self) -> &'static str {
        "delete"
    }

    async fn handle(&self, ctx: &CommandContext) -> Result<Outcome> {
        let terminal = ctx.terminal();
        terminal.caution(&format!("You are about to delete the domain: {}", self.domain));

        if !terminal.confirm("Are you sure you want to proceed?", false)? {
            return Ok(Outcome::Cancelled);
        }

        let request = Request::DomainDelete(DomainRef::new(&self.domain));
        ctx.api()?.post(&request).await?.check("Delete failed")?;

        terminal.success(&format!("Delete request for {} has been submitted.", self.domain));
        Ok(Outcome::Completed)
    }
}
