//! Error types for Tavily search calls

use crate::network::TransportError;
use thiserror::Error;

/// Errors returned by [`WebSearchClient::search`](crate::WebSearchClient::search).
#[derive(Debug, Error)]
pub enum SearchError {
    /// A required setting is missing or empty. No request was sent.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("network error: {0}")]
    Network(#[from] TransportError),

    /// The request body could not be encoded.
    #[error("failed to serialize search request: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The response body did not match the expected shape.
    #[error("failed to decode search response (HTTP {status}): {source}")]
    Decode {
        /// HTTP status of the undecodable response
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

impl SearchError {
    pub fn missing_credential(name: &str) -> Self {
        Self::Configuration(format!("missing credential: {} is not set", name))
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_message() {
        let err = SearchError::missing_credential("TAVILY_API_KEY");
        assert!(err.is_configuration());
        assert_eq!(
            err.to_string(),
            "configuration error: missing credential: TAVILY_API_KEY is not set"
        );
    }

    #[test]
    fn test_decode_carries_status() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SearchError::Decode { status: 502, source };
        assert!(err.is_decode());
        assert!(err.to_string().contains("HTTP 502"));
    }

    #[test]
    fn test_transport_error_converts() {
        let err: SearchError = TransportError::Connect("refused".to_string()).into();
        assert!(err.is_network());
        assert!(err.to_string().contains("refused"));
    }
}
