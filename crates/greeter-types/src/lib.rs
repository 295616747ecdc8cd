//! # greeter-types
//!
//! Shared domain types for the greeter service:
//! - `ErrorKind` / `GreeterError`: the typed failure surface every layer
//!   speaks (invalid-argument, not-found, internal)
//! - `Settings`: layered daemon configuration

pub mod config;
pub mod error;

pub use config::Settings;
pub use error::{ErrorKind, GreeterError};
