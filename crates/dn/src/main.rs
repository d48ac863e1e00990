// # dn - Domain Registrar CLI
//
// This binary is a THIN integration layer:
// - All command logic lives in dn-core
// - The registrar transport lives in dn-provider-dsapi
// - Nothing here talks to the registrar directly
//
// The binary is responsible for:
// 1. Installing the tracing subscriber
// 2. Parsing the command line
// 3. Building the runtime, terminal and client factory
// 4. Mapping the command result to a process exit code (0 or 1)
//
// ## Configuration
//
// - `DN_API_KEY`, `DN_API_USER`, `DN_API_URL`: override the config file
// - `DN_LOG`: tracing filter directive (default `warn`), written to stderr
//
// ## Example
//
// ```bash
// dn configure
// dn check example.com example.net
// DN_LOG=debug dn info example.com
// ```

mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use dn_core::{Cli, CommandContext, ConfigStore, Dispatcher, ExitStatus};
use dn_provider_dsapi::DsapiFactory;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::terminal::ConsoleTerminal;

/// Environment variable holding the tracing filter
const LOG_ENV_VAR: &str = "DN_LOG";

/// Filter used when `DN_LOG` is unset or invalid
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return parse_error_status(&err).into();
        }
    };

    match run(cli) {
        Ok(status) => status.into(),
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitStatus::Failure.into()
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(e) = result {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Build the runtime and run one command to completion
fn run(cli: Cli) -> Result<ExitStatus> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    let ctx = CommandContext::new(
        ConfigStore::from_process_env(),
        Arc::new(ConsoleTerminal::new()),
        Arc::new(DsapiFactory),
    );

    log_startup(ctx.store());

    Ok(runtime.block_on(Dispatcher::new().dispatch(&ctx, cli.command.as_subcommand())))
}

/// The config file location stays out of every log line
fn log_startup(store: &ConfigStore) {
    tracing::debug!(configured = store.is_configured(), "Starting dn");
}

/// Help and version requests succeed; every other parse error is a failure
fn parse_error_status(err: &clap::Error) -> ExitStatus {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitStatus::Success,
        _ => ExitStatus::Failure,
    }
}
