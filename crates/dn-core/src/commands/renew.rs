//! `dn renew`: extend a registration

use async_trait::async_trait;
use clap::Args;

use super::input::{Prompt, flag_or_prompt};
use super::{Outcome, Subcommand};
use crate::context::CommandContext;
use crate::error::{Error, Result};
use crate::model::{DomainRenew, Request};

/// Renew a domain registration
#[derive(Args, Debug, Clone, PartialEq)]
pub struct RenewCommand {
    /// Domain name to renew
    pub domain: String,

    /// Renewal period in years
    #[arg(short, long, default_value_t = 1)]
    pub period: u32,

    /// Current expiration year (prompted when omitted)
    #[arg(long)]
    pub expiration_year: Option<String>,

    /// Fee amount for premium domains
    #[arg(long)]
    pub fee: Option<f64>,
}

#[async_trait]
impl Subcommand for RenewCommand {
    fn name(&self) -> &'static str {
        "renew"
    }

    async fn handle(&self, ctx: &CommandContext) -> Result<Outcome> {
        if self.period == 0 {
            return Err(Error::invalid_input("Renewal period must be at least 1 year."));
        }

        let terminal = ctx.terminal();
        let year = flag_or_prompt(
            terminal,
            self.expiration_year.as_deref(),
            Prompt::visible("Current expiration year"),
        )?;
        let current_expiration_year: i32 = year
            .trim()
            .parse()
            .map_err(|_| Error::invalid_input("Expiration year must be a number."))?;

        terminal.text(&format!(
            "Renewing {} for {} year(s)...",
            self.domain, self.period
        ));

        let request = Request::DomainRenew(DomainRenew {
            domain_name: self.domain.clone(),
            current_expiration_year,
            period: self.period,
            fee_amount: self.fee,
        });

        ctx.api()?.post(&request).await?.check("Renewal failed")?;

        terminal.success(&format!(
            "Renewal request for {} has been submitted.",
            self.domain
        ));
        Ok(Outcome::Completed)
    }
}
