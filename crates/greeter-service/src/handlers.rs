//! Greeting handlers.
//!
//! Handlers only ever see validated requests; they hold no mutable state
//! and are shared across concurrent invocations behind an `Arc`.

use async_trait::async_trait;

use greeter_types::GreeterError;

use crate::dispatch::{GreeterRequest, GreeterResponse, Handler};
use crate::pb::{Profile, SayHelloBatchResponse, SayHelloResponse};

/// Handler for SayHello and SayHelloBatch.
pub struct HelloHandler;

/// Greeting word for a language tag's primary subtag.
fn greet_word(locale: &str) -> &'static str {
    match locale.split('-').next().unwrap_or_default() {
        "es" => "Hola",
        "fr" => "Bonjour",
        "de" => "Hallo",
        _ => "Hello",
    }
}

/// Compose one greeting. Formality 0 is exclamatory, 2 ends with a period,
/// 1 (the default) is the bare greeting.
fn greeting(name: &str, profile: Option<&Profile>) -> String {
    let (word, formality) = profile
        .map(|p| (greet_word(&p.locale), p.formality))
        .unwrap_or(("Hello", 1));

    match formality {
        0 => format!("{} {}!", word, name),
        2 => format!("{} {}.", word, name),
        _ => format!("{} {}", word, name),
    }
}

#[async_trait]
impl Handler for HelloHandler {
    async fn handle(&self, request: GreeterRequest) -> Result<GreeterResponse, GreeterError> {
        match request {
            GreeterRequest::SayHello(req) => Ok(GreeterResponse::SayHello(SayHelloResponse {
                message: greeting(&req.name, req.profile.as_ref()),
            })),
            GreeterRequest::SayHelloBatch(req) => {
                let profile = req.profile.as_ref();
                let messages = req
                    .names
                    .iter()
                    .map(|name| greeting(name, profile))
                    .collect();
                Ok(GreeterResponse::SayHelloBatch(SayHelloBatchResponse {
                    messages,
                }))
            }
        }
    }
}
