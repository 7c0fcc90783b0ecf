//! Client Errors

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Failure of a call against the task collection
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted)
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },

    /// The response body was not what we expected
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// The `error` field the server sent back, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message: Some(m), .. } if !m.trim().is_empty() => Some(m),
            _ => None,
        }
    }

    /// Message suitable for a banner, preferring what the server said
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    pub(crate) fn from_js(value: JsValue) -> Self {
        let msg = value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        ApiError::Network(msg)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
