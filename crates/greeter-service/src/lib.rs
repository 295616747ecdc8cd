//! gRPC service implementation for the greeter.
//!
//! Provides:
//! - Request validation against declared field constraints, collecting all
//!   violations before anything runs
//! - Operation dispatch: validated requests routed by operation name to
//!   registered handlers, failures surfaced as typed outcomes
//! - SayHello / SayHelloBatch RPCs
//! - Health check endpoint via tonic-health
//! - Reflection endpoint via tonic-reflection

pub mod dispatch;
pub mod greeter;
pub mod handlers;
pub mod rules;
pub mod server;

pub mod pb {
    tonic::include_proto!("helloworld.v1");

    pub const FILE_DESCRIPTOR_SET: &[u8] =
        tonic::include_file_descriptor_set!("helloworld_descriptor");
}

pub use dispatch::{DispatchError, Dispatcher, GreeterRequest, GreeterResponse, Handler};
pub use greeter::GreeterServiceImpl;
pub use server::{run_server, run_server_with_shutdown};
