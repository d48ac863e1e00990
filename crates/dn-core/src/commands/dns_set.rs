//! `dn dns:set`

use async_trait::async_trait;
use clap::Args;

use super::input::{Prompt, flag_or_prompt};
use super::{Outcome, Subcommand};
use crate::context::CommandContext;
use crate::error::Result;
use crate::model::{DnsRecordSet, DnsRecords, DnsSet, Request};

/// Set a DNS record for a domain
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DnsSetCommand {
    /// Domain name
    pub domain: String,

    /// Record type (A, AAAA, CNAME, MX, TXT, etc.)
    #[arg(long = "type")]
    pub record_type: Option<String>,

    /// Record name (e.g. @ or subdomain)
    #[arg(long)]
    pub name: Option<String>,

    /// Record value; repeat for multiple values
    #[arg(long = "value")]
    pub values: Vec<String>,

    /// TTL in seconds
    #[arg(long, default_value_t = 3600)]
    pub ttl: u32,
}

#[async_trait]
impl Subcommand for DnsSetCommand {
    fn name(&self) -> &'static str {
        "dns:set"
    }

    async fn handle(&self, ctx: &CommandContext) -> Result<Outcome> {
        let terminal = ctx.terminal();

        let record_type = flag_or_prompt(
            terminal,
            self.record_type.as_deref(),
            Prompt::visible("Record type (A, AAAA, CNAME, MX, TXT, etc.)"),
        )?
        .trim()
        .to_uppercase();
        let name = flag_or_prompt(
            terminal,
            self.name.as_deref(),
            Prompt::visible("Record name (e.g. @ or subdomain)"),
        )?;
        let values = if self.values.is_empty() {
            vec![terminal.ask("Record value", None)?]
        } else {
            self.values.clone()
        };

        let summary = format!(
            "DNS record set for {}: {} {} -> {}",
            self.domain,
            record_type,
            name,
            values.join(", ")
        );

        let request = Request::DnsSet(DnsSet {
            domain_name: self.domain.clone(),
            dns_records: DnsRecords {
                domain: self.domain.clone(),
                record_sets: vec![DnsRecordSet {
                    name,
                    record_type,
                    ttl: self.ttl,
                    data: values,
                }],
            },
        });

        ctx.api()?
            .post(&request)
            .await?
            .check("Failed to set DNS record")?;

        terminal.success(&summary);
        Ok(Outcome::Completed)
    }
}
