//! `dn suggest`: domain name suggestions

use async_trait::async_trait;
use clap::Args;

use super::render::{cents, yes_no};
use super::{Outcome, Subcommand};
use crate::context::CommandContext;
use crate::error::Result;
use crate::model::{DomainSuggestions, Request};

/// Get domain name suggestions
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SuggestCommand {
    /// Search term for suggestions
    pub query: String,

    /// Number of suggestions
    #[arg(short, long, default_value_t = 10)]
    pub count: u32,

    /// Comma-separated TLDs to filter (e.g. com,net,org)
    #[arg(short, long)]
    pub tlds: Option<String>,

    /// Exact match only
    #[arg(long)]
    pub exact: bool,
}

impl SuggestCommand {
    fn tld_filter(&self) -> Option<Vec<String>> {
        self.tlds.as_ref().map(|tlds| {
            tlds.split(',')
                .map(str::trim)
                .filter(|tld| !tld.is_empty())
                .map(str::to_string)
                .collect()
        })
    }
}

#[async_trait]
impl Subcommand for SuggestCommand {
    fn name(&self) -> &'static str {
        "suggest"
    }

    async fn handle(&self, ctx: &CommandContext) -> Result<Outcome> {
        let request = Request::DomainSuggestions(DomainSuggestions {
            query: self.query.clone(),
            quantity: self.count,
            tlds: self.tld_filter(),
            exact_match: self.exact,
        });

        let response = ctx.api()?.post(&request).await?.check("API error")?;
        let result = response.payload.into_suggestions()?;

        let rows = result
            .suggestions
            .iter()
            .map(|suggestion| {
                vec![
                    suggestion.name.clone(),
                    yes_no(suggestion.is_available),
                    cents(suggestion.reseller_register_fee),
                    cents(suggestion.reseller_renewal_fee),
                    yes_no(suggestion.is_premium),
                ]
            })
            .collect();

        ctx.terminal().table(
            &["Domain", "Available", "Register Fee", "Renewal Fee", "Premium"],
            rows,
        );

        Ok(Outcome::Completed)
    }
}
