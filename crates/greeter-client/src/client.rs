//! Greeter client for connecting to the daemon.

use tonic::transport::Channel;
use tracing::{debug, info};

use greeter_service::pb::{
    greeter_client::GreeterClient as PbGreeterClient, Profile, SayHelloBatchRequest,
    SayHelloRequest,
};

use crate::error::ClientError;

/// Default endpoint for the greeter daemon.
pub const DEFAULT_ENDPOINT: &str = "http://[::1]:50051";

/// Client for communicating with the greeter daemon.
pub struct GreeterClient {
    inner: PbGreeterClient<Channel>,
}

impl GreeterClient {
    /// Connect to the greeter daemon.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The gRPC endpoint (e.g., `http://localhost:50051`)
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Connection` if connection fails.
    pub async fn connect(endpoint: &str) -> Result<Self, ClientError> {
        info!("Connecting to greeter daemon at {}", endpoint);
        let inner = PbGreeterClient::connect(endpoint.to_string())
            .await
            .map_err(ClientError::Connection)?;
        Ok(Self { inner })
    }

    /// Connect to the default endpoint.
    pub async fn connect_default() -> Result<Self, ClientError> {
        Self::connect(DEFAULT_ENDPOINT).await
    }

    /// Greet a single person.
    ///
    /// A validation failure on the server comes back as
    /// `ClientError::Rpc` with code `InvalidArgument` listing every
    /// offending field.
    pub async fn say_hello(
        &mut self,
        name: &str,
        profile: Option<Profile>,
    ) -> Result<String, ClientError> {
        debug!("SayHello request: {:?}", name);
        let request = tonic::Request::new(SayHelloRequest {
            name: name.to_string(),
            profile,
        });

        let response = self.inner.say_hello(request).await?;
        Ok(response.into_inner().message)
    }

    /// Greet several people; greetings come back in input order.
    pub async fn say_hello_batch(
        &mut self,
        names: &[String],
        profile: Option<Profile>,
    ) -> Result<Vec<String>, ClientError> {
        debug!("SayHelloBatch request: {} names", names.len());
        let request = tonic::Request::new(SayHelloBatchRequest {
            names: names.to_vec(),
            profile,
        });

        let response = self.inner.say_hello_batch(request).await?;
        Ok(response.into_inner().messages)
    }
}
