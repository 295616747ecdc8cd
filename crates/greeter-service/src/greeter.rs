//! Greeter RPC implementation.
//!
//! Thin tonic seam over the dispatcher: decode, dispatch, map the typed
//! outcome onto a gRPC status. Validation failures come back as
//! INVALID_ARGUMENT carrying every violation; internal detail never
//! crosses the wire.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::{debug, error};

use greeter_types::ErrorKind;

use crate::dispatch::{
    DispatchError, Dispatcher, GreeterRequest, GreeterResponse, OP_SAY_HELLO, OP_SAY_HELLO_BATCH,
};
use crate::handlers::HelloHandler;
use crate::pb::greeter_server::Greeter;
use crate::pb::{SayHelloBatchRequest, SayHelloBatchResponse, SayHelloRequest, SayHelloResponse};

/// Implementation of the Greeter gRPC service.
pub struct GreeterServiceImpl {
    dispatcher: Arc<Dispatcher>,
}

impl GreeterServiceImpl {
    /// Create the service with the default greeting handlers registered.
    pub fn new() -> Self {
        let mut dispatcher = Dispatcher::new();
        let handler = Arc::new(HelloHandler);
        dispatcher.register(OP_SAY_HELLO, handler.clone());
        dispatcher.register(OP_SAY_HELLO_BATCH, handler);
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Create the service over an externally assembled dispatcher.
    pub fn with_dispatcher(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Map a typed dispatch failure onto a gRPC status.
    fn status_from(err: DispatchError) -> Status {
        match err.kind {
            ErrorKind::InvalidArgument => Status::invalid_argument(err.message),
            ErrorKind::NotFound => Status::not_found(err.message),
            ErrorKind::Internal => {
                error!("Internal dispatch failure: {}", err.message);
                Status::internal("internal error")
            }
        }
    }
}

impl Default for GreeterServiceImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[tonic::async_trait]
impl Greeter for GreeterServiceImpl {
    /// Greet a single person.
    async fn say_hello(
        &self,
        request: Request<SayHelloRequest>,
    ) -> Result<Response<SayHelloResponse>, Status> {
        let req = request.into_inner();
        debug!("SayHello request for {:?}", req.name);

        match self
            .dispatcher
            .dispatch(OP_SAY_HELLO, GreeterRequest::SayHello(req))
            .await
        {
            Ok(GreeterResponse::SayHello(resp)) => Ok(Response::new(resp)),
            Ok(other) => {
                error!("SayHello produced mismatched response: {:?}", other);
                Err(Status::internal("internal error"))
            }
            Err(e) => Err(Self::status_from(e)),
        }
    }

    /// Greet several people, responses in input order.
    async fn say_hello_batch(
        &self,
        request: Request<SayHelloBatchRequest>,
    ) -> Result<Response<SayHelloBatchResponse>, Status> {
        let req = request.into_inner();
        debug!("SayHelloBatch request for {} names", req.names.len());

        match self
            .dispatcher
            .dispatch(OP_SAY_HELLO_BATCH, GreeterRequest::SayHelloBatch(req))
            .await
        {
            Ok(GreeterResponse::SayHelloBatch(resp)) => Ok(Response::new(resp)),
            Ok(other) => {
                error!("SayHelloBatch produced mismatched response: {:?}", other);
                Err(Status::internal("internal error"))
            }
            Err(e) => Err(Self::status_from(e)),
        }
    }
}
