//! `dn privacy`: WHOIS privacy

use async_trait::async_trait;
use clap::Args;

use super::{Outcome, Subcommand};
use crate::context::CommandContext;
use crate::error::Result;
use crate::model::{PrivacySetting, Request, SetPrivacy};

/// Set WHOIS privacy for a domain
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PrivacyCommand {
    /// Domain name
    pub domain: String,

    /// Privacy setting: on, off, or redact
    pub setting: String,
}

#[async_trait]
impl Subcommand for PrivacyCommand {
    fn name(&self) -> &'static str {
        "privacy"
    }

    async fn handle(&self, ctx: &CommandContext) -> Result<Outcome> {
        let privacy_setting: PrivacySetting = self.setting.parse()?;

        let request = Request::SetPrivacy(SetPrivacy {
            domain_name: self.domain.clone(),
            privacy_setting,
        });

        ctx.api()?
            .post(&request)
            .await?
            .check("Failed to update privacy")?;

        ctx.terminal().success(&format!(
            "Privacy set to '{}' for {}.",
            privacy_setting.as_cli_word(),
            self.domain
        ));
        Ok(Outcome::Completed)
    }
}
