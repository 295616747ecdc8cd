//! Greeter Daemon
//!
//! A gRPC greeting service with declarative request validation.
//!
//! # Usage
//!
//! ```bash
//! greeterd start [--foreground] [--port PORT] [--host HOST]
//! greeterd stop
//! greeterd status
//! greeterd greet Ada Grace --endpoint http://localhost:50051
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/greeterd/config.toml)
//! 3. Environment variables (GREETER_*)
//! 4. CLI flags

use anyhow::Result;
use clap::Parser;

use greeter_daemon::{handle_greet, show_status, start_daemon, stop_daemon, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Start {
            foreground,
            port,
            host,
        } => {
            start_daemon(
                cli.config.as_deref(),
                foreground,
                port,
                host.as_deref(),
                cli.log_level.as_deref(),
            )
            .await?;
        }
        Commands::Stop => {
            stop_daemon()?;
        }
        Commands::Status => {
            show_status()?;
        }
        Commands::Greet {
            endpoint,
            locale,
            formality,
            names,
        } => {
            handle_greet(&endpoint, locale.as_deref(), formality, names).await?;
        }
    }

    Ok(())
}
