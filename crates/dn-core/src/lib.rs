// # dn-core
//
// Core library for the `dn` domain registrar CLI.
//
// ## Architecture Overview
//
// This library owns everything between the command line and the registrar wire:
// - **ConfigStore**: Credential resolution (environment first, then a per-user file)
// - **ApiClient**: Trait for the registrar transport (one request per command)
// - **ApiClientFactory**: Builds a transport from stored credentials, HTTPS only
// - **Terminal**: Trait for prompts and rendering, so commands never touch stdio
// - **CommandContext**: Per-invocation bundle of the above, plus secret redaction
// - **Subcommand**: The per-command contract (input, request, dispatch, render)
// - **Dispatcher**: Runs the per-invocation state machine and yields an exit status
//
// ## Design Principles
//
// 1. **Library-First**: The binary only parses arguments and wires collaborators
// 2. **Injectable Collaborators**: Environment, transport and terminal are traits
// 3. **Typed Protocol**: Requests and responses are closed enums, not maps
// 4. **Secrets Stay Secret**: Every rendered error passes through the redactor

pub mod commands;
pub mod config;
pub mod context;
pub mod dispatcher;
pub mod env;
pub mod error;
pub mod model;
pub mod traits;

// Re-export core types for convenience
pub use commands::{Outcome, Subcommand};
pub use config::{ConfigFile, ConfigStore};
pub use context::{CommandContext, Redactor};
pub use dispatcher::{Cli, Command, Dispatcher, ExitStatus};
pub use env::{EnvLookup, ProcessEnv};
pub use error::{Error, Result};
pub use model::{Payload, Request, Response};
pub use traits::{ApiClient, ApiClientFactory, Terminal, TransportConfig};
