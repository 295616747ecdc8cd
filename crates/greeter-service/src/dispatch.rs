//! Operation dispatch over validated requests.
//!
//! The dispatcher owns a registry of operation name -> handler. A request
//! is validated first; a handler is never invoked for an invalid request.
//! Every failure leaves as a typed `DispatchError`, never as an unwind:
//! validation failures as `invalid-argument` with the full violation list,
//! unknown operations as `not-found`, handler errors as `internal`.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, error, warn};

use greeter_types::{ErrorKind, GreeterError};
use greeter_validate::{Validate, ValidationReport, Violation};

use crate::pb::{SayHelloBatchRequest, SayHelloBatchResponse, SayHelloRequest, SayHelloResponse};

/// Operation name for the single-greeting RPC.
pub const OP_SAY_HELLO: &str = "SayHello";
/// Operation name for the batch-greeting RPC.
pub const OP_SAY_HELLO_BATCH: &str = "SayHelloBatch";

/// A decoded request addressed to one logical operation.
#[derive(Debug, Clone, PartialEq)]
pub enum GreeterRequest {
    SayHello(SayHelloRequest),
    SayHelloBatch(SayHelloBatchRequest),
}

impl GreeterRequest {
    /// Validate the inner message against its declared constraints.
    pub fn validate(&self) -> ValidationReport {
        match self {
            GreeterRequest::SayHello(req) => req.validate(),
            GreeterRequest::SayHelloBatch(req) => req.validate(),
        }
    }
}

/// A successful handler response payload.
#[derive(Debug, Clone, PartialEq)]
pub enum GreeterResponse {
    SayHello(SayHelloResponse),
    SayHelloBatch(SayHelloBatchResponse),
}

/// Typed failure outcome of a dispatch.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct DispatchError {
    /// Machine-readable kind (invalid-argument, not-found, internal)
    pub kind: ErrorKind,
    /// Human-readable summary
    pub message: String,
    /// Field violations; non-empty only for invalid-argument
    pub violations: Vec<Violation>,
}

impl DispatchError {
    /// Validation failed; carries the full ordered violation list.
    pub fn invalid(report: ValidationReport) -> Self {
        Self {
            kind: ErrorKind::InvalidArgument,
            message: report.summary(),
            violations: report.into_violations(),
        }
    }

    /// No handler registered for the operation name.
    pub fn not_found(operation: &str) -> Self {
        Self {
            kind: ErrorKind::NotFound,
            message: format!("unknown operation: {}", operation),
            violations: vec![],
        }
    }

    /// Handler failed; detail belongs in the server log, not the wire.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Internal,
            message: message.into(),
            violations: vec![],
        }
    }
}

/// A registered operation handler.
///
/// Handlers are stateless and shared: one invocation per incoming request,
/// no mutable state across invocations, safe under concurrent calls.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Handle a request that has already passed validation.
    async fn handle(&self, request: GreeterRequest) -> Result<GreeterResponse, GreeterError>;
}

/// Routes validated requests to registered handlers by operation name.
#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<&'static str, Arc<dyn Handler>>,
}

impl Dispatcher {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under an operation name.
    pub fn register(&mut self, operation: &'static str, handler: Arc<dyn Handler>) {
        self.handlers.insert(operation, handler);
    }

    /// Validate and route a request.
    ///
    /// The handler is never invoked when validation fails; given the same
    /// valid input this resolves to the same handler and outcome shape.
    pub async fn dispatch(
        &self,
        operation: &str,
        request: GreeterRequest,
    ) -> Result<GreeterResponse, DispatchError> {
        let report = request.validate();
        if !report.is_valid() {
            warn!(operation, violations = %report, "Rejecting invalid request");
            return Err(DispatchError::invalid(report));
        }

        let handler = self
            .handlers
            .get(operation)
            .ok_or_else(|| DispatchError::not_found(operation))?;

        debug!(operation, "Dispatching request");

        handler.handle(request).await.map_err(|e| {
            error!(operation, error = %e, "Handler failed");
            DispatchError::internal(format!("handler for {} failed", operation))
        })
    }
}
