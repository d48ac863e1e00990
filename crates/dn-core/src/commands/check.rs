//! `dn check`: domain availability

use async_trait::async_trait;
use clap::Args;

use super::render::{ABSENT, dollars, optional_yes_no, or_absent, yes_no};
use super::{Outcome, Subcommand};
use crate::context::CommandContext;
use crate::error::Result;
use crate::model::{DomainCheck, Request};

/// Check availability of one or more domains
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CheckCommand {
    /// Domain names to check
    #[arg(required = true, num_args = 1..)]
    pub domains: Vec<String>,
}

#[async_trait]
impl Subcommand for CheckCommand {
    fn name(&self) -> &'static str {
        "check"
    }

    async fn handle(&self, ctx: &CommandContext) -> Result<Outcome> {
        let request = Request::DomainCheck(DomainCheck {
            domain_names: self.domains.clone(),
        });

        let response = ctx.api()?.post(&request).await?.check("API error")?;
        let result = response.payload.into_check()?;

        let rows = result
            .domains
            .iter()
            .map(|(domain, entry)| {
                vec![
                    domain.clone(),
                    yes_no(entry.available),
                    or_absent(entry.fee_class.as_deref()),
                    entry
                        .fee_amount
                        .map(dollars)
                        .unwrap_or_else(|| ABSENT.to_string()),
                    optional_yes_no(entry.zone_is_active),
                    optional_yes_no(entry.tld_in_maintenance),
                ]
            })
            .collect();

        ctx.terminal().table(
            &[
                "Domain",
                "Available",
                "Fee Class",
                "Price",
                "Zone Active",
                "TLD Maintenance",
            ],
            rows,
        );

        Ok(Outcome::Completed)
    }
}
