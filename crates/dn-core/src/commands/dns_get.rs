//! `dn dns:get`

use async_trait::async_trait;
use clap::Args;

use super::{Outcome, Subcommand};
use crate::context::CommandContext;
use crate::error::Result;
use crate::model::{DomainRef, Request};

/// Get DNS records for a domain
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DnsGetCommand {
    /// Domain name to query
    pub domain: String,
}

#[async_trait]
impl Subcommand for DnsGetCommand {
    fn name(&self) -> &'static str {
        "dns:get"
    }

    async fn handle(&self, ctx: &CommandContext) -> Result<Outcome> {
        let request = Request::DnsGet(DomainRef::new(&self.domain));
        let response = ctx.api()?.post(&request).await?.check("API error")?;
        let records = response.payload.into_dns()?.dns_records;

        if records.record_sets.is_empty() {
            ctx.terminal().text("No DNS records found.");
            return Ok(Outcome::Completed);
        }

        let rows = records
            .record_sets
            .iter()
            .map(|set| {
                vec![
                    set.record_type.clone(),
                    set.name.clone(),
                    set.data.join(", "),
                    set.ttl.to_string(),
                ]
            })
            .collect();

        ctx.terminal().table(&["Type", "Name", "Value", "TTL"], rows);
        Ok(Outcome::Completed)
    }
}
