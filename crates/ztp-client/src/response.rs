//! Response status checks and error mapping.
//!
//! A 500 with a JSON body carries a message string from the service; any
//! other non-2xx status is reported by its reason phrase.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, StatusCode};
use serde_json::Value;

use ztp_core::prelude::*;

pub(crate) fn transport(err: reqwest::Error) -> Error {
    Error::transport(err.to_string())
}

/// Pass successful responses through, turn the rest into errors
pub(crate) async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::INTERNAL_SERVER_ERROR && is_json(&response) {
        let body = response.bytes().await.map_err(transport)?;
        let message = match serde_json::from_slice::<Value>(&body)? {
            Value::String(s) => s,
            other => other.to_string(),
        };
        warn!("Server error: {}", message);
        return Err(Error::server(message));
    }

    let reason = status.canonical_reason().unwrap_or("Unknown status");
    warn!("Request failed with status {}", status);
    Err(Error::status(status.as_u16(), reason))
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}
