#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod command;
mod config;

use std::process;

use anyhow::Context;
use estate_client::EstateClients;
use estate_reqwest::ReqwestTransport;

use crate::config::Cli;

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "estate_cli::startup";
pub const TRACING_TARGET_COMMAND: &str = "estate_cli::command";
pub const TRACING_TARGET_CONFIG: &str = "estate_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_COMMAND,
            error = %error,
            "command failed"
        );
    }
    eprintln!("Error: {error:#}");

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    Cli::init_tracing();
    cli.log();

    let transport =
        ReqwestTransport::new(cli.http.clone()).context("failed to create HTTP transport")?;
    let clients = EstateClients::new(transport.into_service(), &cli.client);

    let output = cli.command.execute(&clients).await?;
    let json = serde_json::to_string_pretty(&output).context("failed to render output")?;
    println!("{json}");

    Ok(())
}
