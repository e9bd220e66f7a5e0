//! Transport trait and request/response types

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

/// Failure to build a client or to obtain any response from the remote side
#[derive(Debug, Error)]
pub enum TransportError {
    /// Error raised by the HTTP client (connect, DNS, TLS, timeout, body read)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Outgoing settings that cannot configure a client
    #[error("invalid setting: {0}")]
    InvalidSetting(String),

    /// Connection failure reported by a non-reqwest transport
    #[error("connection failed: {0}")]
    Connect(String),
}

/// An outgoing POST request
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// URL to request
    pub url: String,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Raw request body
    pub body: Vec<u8>,
}

impl TransportRequest {
    /// Create a POST request with an empty body
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set an already encoded JSON body (sets content-type)
    pub fn json_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self.header("Content-Type", "application/json")
    }
}

/// A fully read HTTP response
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HashMap<String, String>,
    /// Response body
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns one fully read response
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_body_sets_content_type() {
        let request = TransportRequest::post("https://example.com").json_body(b"{}".to_vec());
        assert_eq!(request.body, b"{}");
        assert_eq!(
            request.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn test_is_success() {
        assert!(TransportResponse::new(200, "").is_success());
        assert!(TransportResponse::new(204, "").is_success());
        assert!(!TransportResponse::new(401, "").is_success());
        assert!(!TransportResponse::new(500, "").is_success());
    }
}
