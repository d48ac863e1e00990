//! `dn transferlock`

use async_trait::async_trait;
use clap::Args;

use super::{Outcome, Subcommand};
use crate::context::CommandContext;
use crate::error::Result;
use crate::model::{LockState, Request, SetTransferlock};

/// Enable or disable the transfer lock on a domain
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct TransferlockCommand {
    /// Domain name
    pub domain: String,

    /// Lock state: on or off
    pub state: String,
}

#[async_trait]
impl Subcommand for TransferlockCommand {
    fn name(&self) -> &'static str {
        "transferlock"
    }

    async fn handle(&self, ctx: &CommandContext) -> Result<Outcome> {
        let state: LockState = self.state.parse()?;

        let request = Request::SetTransferlock(SetTransferlock {
            domain_name: self.domain.clone(),
            transferlock: state.is_locked(),
        });

        ctx.api()?
            .post(&request)
            .await?
            .check("Failed to update transfer lock")?;

        ctx.terminal().success(&format!(
            "Transfer lock set to '{}' for {}.",
            state, self.domain
        ));
        Ok(Outcome::Completed)
    }
}
