//! Subcommands
//!
//! Every command follows the same contract: resolve its inputs (flags first,
//! prompts second), build one typed [`Request`](crate::model::Request), send
//! it through the context's API client, and render the answer. Failures are
//! returned as [`Error`](crate::Error); the dispatcher renders them.

use async_trait::async_trait;

use crate::context::CommandContext;
use crate::error::Result;

pub mod contact;
pub mod input;
pub mod render;

pub mod check;
pub mod configure;
pub mod contacts_set;
pub mod delete;
pub mod dns_get;
pub mod dns_set;
pub mod info;
pub mod privacy;
pub mod register;
pub mod renew;
pub mod restore;
pub mod suggest;
pub mod transfer;
pub mod transferlock;

pub use check::CheckCommand;
pub use configure::ConfigureCommand;
pub use contacts_set::ContactsSetCommand;
pub use delete::DeleteCommand;
pub use dns_get::DnsGetCommand;
pub use dns_set::DnsSetCommand;
pub use info::InfoCommand;
pub use privacy::PrivacyCommand;
pub use register::RegisterCommand;
pub use renew::RenewCommand;
pub use restore::RestoreCommand;
pub use suggest::SuggestCommand;
pub use transfer::TransferCommand;
pub use transferlock::TransferlockCommand;

/// How a command that did not fail ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran to completion
    Completed,
    /// The operator declined a confirmation; nothing was sent
    Cancelled,
}

/// Contract implemented by every `dn` command
#[async_trait]
pub trait Subcommand: Send + Sync {
    /// Name as typed on the command line
    fn name(&self) -> &'static str;

    /// Whether credentials must resolve before [`handle`](Self::handle) runs
    fn requires_config(&self) -> bool {
        true
    }

    /// Run the command
    async fn handle(&self, ctx: &CommandContext) -> Result<Outcome>;
}
