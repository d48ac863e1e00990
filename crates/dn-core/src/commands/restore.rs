//! `dn restore`

use async_trait::async_trait;
use clap::Args;

use super::{Outcome, Subcommand};
use crate::context::CommandContext;
use crate::error::Result;
use crate::model::{DomainRef, Request};

/// Restore a deleted domain still in its redemption period
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct RestoreCommand {
    /// Domain name to restore
    pub domain: String,
}

#[async_trait]
impl Subcommand for RestoreCommand {
    fn name(&self) -> &'static str {
        "restore"
    }

    async fn handle(&self, ctx: &CommandContext) -> Result<Outcome> {
        let request = Request::DomainRestore(DomainRef::new(&self.domain));
        ctx.api()?.post(&request).await?.check("Restore failed")?;

        ctx.terminal()
            .success(&format!("Restore request for {} has been submitted.", self.domain));
        Ok(Outcome::Completed)
    }
}
