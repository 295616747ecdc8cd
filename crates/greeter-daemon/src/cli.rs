//! CLI argument parsing for the greeter daemon.

use clap::{Parser, Subcommand};

/// Greeter Daemon
///
/// A gRPC greeting service with declarative request validation.
#[derive(Parser, Debug)]
#[command(name = "greeterd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default ~/.config/greeterd/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Daemon commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the greeter daemon
    Start {
        /// Run in foreground (don't daemonize)
        #[arg(short, long)]
        foreground: bool,

        /// Override gRPC port
        #[arg(short, long)]
        port: Option<u16>,

        /// Override gRPC host
        #[arg(long)]
        host: Option<String>,
    },

    /// Stop the running daemon
    Stop,

    /// Show daemon status
    Status,

    /// Send a greeting request to a running daemon
    Greet {
        /// gRPC endpoint (default: http://[::1]:50051)
        #[arg(short, long, default_value = "http://[::1]:50051")]
        endpoint: String,

        /// Language tag for the greeting, e.g. "es" or "fr-CA"
        #[arg(long)]
        locale: Option<String>,

        /// Formality: 0 = casual, 1 = neutral, 2 = formal
        #[arg(long)]
        formality: Option<i32>,

        /// One or more names to greet
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start() {
        let cli = Cli::parse_from(["greeterd", "start", "--foreground", "--port", "6000"]);
        match cli.command {
            Commands::Start {
                foreground, port, ..
            } => {
                assert!(foreground);
                assert_eq!(port, Some(6000));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_greet_requires_name() {
        assert!(Cli::try_parse_from(["greeterd", "greet"]).is_err());
    }

    #[test]
    fn test_parse_greet_many_names() {
        let cli = Cli::parse_from(["greeterd", "greet", "Ada", "Grace", "--locale", "es"]);
        match cli.command {
            Commands::Greet { names, locale, .. } => {
                assert_eq!(names, vec!["Ada", "Grace"]);
                assert_eq!(locale.as_deref(), Some("es"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
