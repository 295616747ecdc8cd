//! Greeter daemon: CLI parsing and command implementations.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands};
pub use commands::{handle_greet, show_status, start_daemon, stop_daemon};
