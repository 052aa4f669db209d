//! Shopmate CLI - Command-line interface
//!
//! Runs the API server or exercises search and chat from a terminal.

mod commands;

use clap::Parser;
use shopmate_core::ShopmateConfig;
use shopmate_core::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "shopmate")]
#[command(about = "Shopping search and AI buying consultant API")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,

    /// Console log level (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value_t = CliLogLevel::Info, global = true)]
    log_level: CliLogLevel,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_level.as_tracing_level(), None)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let config = ShopmateConfig::from_env();
    commands::handle_command(cli.command, config).await?;

    Ok(())
}
