//! Client library for the greeter daemon.
//!
//! # Example
//!
//! ```rust,no_run
//! use greeter_client::GreeterClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = GreeterClient::connect("http://[::1]:50051").await?;
//!     let message = client.say_hello("World", None).await?;
//!     println!("{}", message);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;

pub use client::{GreeterClient, DEFAULT_ENDPOINT};
pub use error::ClientError;
