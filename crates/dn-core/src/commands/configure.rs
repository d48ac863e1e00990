//! `dn configure`: store API credentials
//!
//! Three ways in: flags, piped stdin (`--stdin`, key then user, one per
//! line), or interactive hidden prompts. The config file location is never
//! printed.

use async_trait::async_trait;
use clap::Args;

use super::input::{Field, Prompt, resolve};
use super::{Outcome, Subcommand};
use crate::context::CommandContext;
use crate::error::{Error, Result};
use crate::traits::ensure_https;

/// Set up API credentials for the registrar API
#[derive(Args, Clone, Default, PartialEq, Eq)]
pub struct ConfigureCommand {
    /// Read API key and user from stdin (one per line)
    #[arg(long, conflicts_with_all = ["api_key", "api_user"])]
    pub stdin: bool,

    /// API key (X-DSAPI-KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// API user (X-DSAPI-USER)
    #[arg(long)]
    pub api_user: Option<String>,

    /// API base URL (optional override, HTTPS only)
    #[arg(long)]
    pub api_url: Option<String>,
}

impl std::fmt::Debug for ConfigureCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigureCommand")
            .field("stdin", &self.stdin)
            .field("api_key", &self.api_key.as_ref().map(|_| "<REDACTED>"))
            .field("api_user", &self.api_user.as_ref().map(|_| "<REDACTED>"))
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl ConfigureCommand {
    /// Key, user and URL as given by the operator, untrimmed
    fn gather(&self, ctx: &CommandContext) -> Result<(String, String, Option<String>)> {
        let terminal = ctx.terminal();

        if self.stdin {
            let key = terminal.read_line()?.unwrap_or_default();
            let user = terminal.read_line()?.unwrap_or_default();
            return Ok((key, user, self.api_url.clone()));
        }

        let interactive = self.api_key.is_none() || self.api_user.is_none();
        let key = resolve(
            terminal,
            Field::or_prompt(self.api_key.as_deref(), Prompt::hidden("API Key (X-DSAPI-KEY)")),
        )?;
        let user = resolve(
            terminal,
            Field::or_prompt(self.api_user.as_deref(), Prompt::hidden("API User (X-DSAPI-USER)")),
        )?;

        let url = match &self.api_url {
            Some(url) => Some(url.clone()),
            None if interactive => Some(
                terminal.ask("API URL (leave blank for default)", Some(""))?,
            ),
            None => None,
        };

        Ok((key, user, url))
    }
}

#[async_trait]
impl Subcommand for ConfigureCommand {
    fn name(&self) -> &'static str {
        "configure"
    }

    fn requires_config(&self) -> bool {
        false
    }

    async fn handle(&self, ctx: &CommandContext) -> Result<Outcome> {
        let (key, user, url) = self.gather(ctx)?;

        let key = key.trim();
        let user = user.trim();
        if key.is_empty() || user.is_empty() {
            return Err(Error::invalid_input("API key and user are required."));
        }

        let url = url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        if let Some(url) = &url {
            ensure_https(url)?;
        }

        ctx.store().save(key, user, url.as_deref())?;
        tracing::info!(custom_url = url.is_some(), "API credentials configured");

        ctx.terminal().success("Configuration saved.");
        Ok(Outcome::Completed)
    }
}
