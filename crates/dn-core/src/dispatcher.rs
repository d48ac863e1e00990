//! Command-line surface and dispatch
//!
//! [`Cli`] is the clap definition of `dn`. [`Dispatcher`] runs one parsed
//! command against a [`CommandContext`]:
//!
//! 1. AuthCheck: commands that need credentials fail fast without them
//! 2. The command resolves input, builds and sends its request, renders
//! 3. Errors are redacted and rendered as a single line
//!
//! Exactly two exit statuses come out: 0 and 1.

use clap::Parser;
use tracing::Instrument;

use crate::commands::{
    CheckCommand, ConfigureCommand, ContactsSetCommand, DeleteCommand, DnsGetCommand,
    DnsSetCommand, InfoCommand, Outcome, PrivacyCommand, RegisterCommand, RenewCommand,
    RestoreCommand, Subcommand, SuggestCommand, TransferCommand, TransferlockCommand,
};
use crate::context::CommandContext;
use crate::error::Error;

/// Manage domains through the registrar API
#[derive(Parser, Debug)]
#[command(name = "dn", version, about, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Every `dn` command
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Set up API credentials
    Configure(ConfigureCommand),
    /// Check domain availability
    Check(CheckCommand),
    /// Get domain name suggestions
    Suggest(SuggestCommand),
    /// Get detailed information about a domain
    Info(InfoCommand),
    /// Register a new domain
    Register(RegisterCommand),
    /// Renew a domain registration
    Renew(RenewCommand),
    /// Delete a domain registration
    Delete(DeleteCommand),
    /// Restore a deleted domain
    Restore(RestoreCommand),
    /// Transfer a domain in
    Transfer(TransferCommand),
    /// Get DNS records for a domain
    #[command(name = "dns:get")]
    DnsGet(DnsGetCommand),
    /// Set a DNS record for a domain
    #[command(name = "dns:set")]
    DnsSet(DnsSetCommand),
    /// Update domain contact information
    #[command(name = "contacts:set")]
    ContactsSet(ContactsSetCommand),
    /// Set WHOIS privacy (on, off, redact)
    Privacy(PrivacyCommand),
    /// Enable or disable the transfer lock
    Transferlock(TransferlockCommand),
}

impl Command {
    /// The parsed command as a [`Subcommand`]
    pub fn as_subcommand(&self) -> &dyn Subcommand {
        match self {
            Command::Configure(c) => c,
            Command::Check(c) => c,
            Command::Suggest(c) => c,
            Command::Info(c) => c,
            Command::Register(c) => c,
            Command::Renew(c) => c,
            Command::Delete(c) => c,
            Command::Restore(c) => c,
            Command::Transfer(c) => c,
            Command::DnsGet(c) => c,
            Command::DnsSet(c) => c,
            Command::ContactsSet(c) => c,
            Command::Privacy(c) => c,
            Command::Transferlock(c) => c,
        }
    }
}

/// Process exit status of one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Completed, or cancelled by the operator
    Success = 0,
    /// Any failure
    Failure = 1,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        std::process::ExitCode::from(status.code())
    }
}

/// Runs commands and maps their results to exit statuses
#[derive(Debug, Default, Clone, Copy)]
pub struct Dispatcher;

impl Dispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Parse `args` (including the program name) and run the command
    ///
    /// Parse failures (and `--help`/`--version`) are returned to the caller
    /// untouched so clap can print them.
    pub async fn run_args<I, T>(
        &self,
        ctx: &CommandContext,
        args: I,
    ) -> std::result::Result<ExitStatus, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;
        Ok(self.dispatch(ctx, cli.command.as_subcommand()).await)
    }

    /// Run one command to completion
    pub async fn dispatch(&self, ctx: &CommandContext, command: &dyn Subcommand) -> ExitStatus {
        let span = tracing::info_span!("command", name = command.name());

        async {
            if command.requires_config() && !ctx.store().is_configured() {
                tracing::debug!("No credentials resolved");
                render_error(ctx, &Error::Unconfigured);
                return ExitStatus::Failure;
            }

            match command.handle(ctx).await {
                Ok(Outcome::Completed) => {
                    tracing::debug!("Command completed");
                    ExitStatus::Success
                }
                Ok(Outcome::Cancelled) => {
                    ctx.terminal().text("Cancelled.");
                    ExitStatus::Success
                }
                Err(err) => {
                    render_error(ctx, &err);
                    ExitStatus::Failure
                }
            }
        }
        .instrument(span)
        .await
    }
}

fn render_error(ctx: &CommandContext, err: &Error) {
    let message = ctx.redact(&err.to_string());
    if err.is_warning() {
        ctx.terminal().warning(&message);
    } else {
        tracing::debug!(error = %message, "Command failed");
        ctx.terminal().error(&message);
    }
}
