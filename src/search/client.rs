//! Tavily search client

use super::models::{SearchRequest, SearchResponse};
use crate::config::{Settings, TavilySettings};
use crate::error::SearchError;
use crate::network::{HttpClient, Transport, TransportRequest};
use std::sync::Arc;
use tracing::debug;

/// Sends a query to Tavily and joins the returned snippets
#[derive(Clone)]
pub struct WebSearchClient {
    settings: TavilySettings,
    transport: Arc<dyn Transport>,
}

impl WebSearchClient {
    /// Create a client over an arbitrary transport
    pub fn new(settings: TavilySettings, transport: Arc<dyn Transport>) -> Self {
        Self {
            settings,
            transport,
        }
    }

    /// Create a client backed by [`HttpClient`] built from `settings`
    pub fn with_settings(settings: &Settings) -> Result<Self, SearchError> {
        let transport = HttpClient::with_settings(&settings.outgoing).map_err(|e| {
            SearchError::Configuration(format!("invalid outgoing settings: {}", e))
        })?;
        Ok(Self::new(settings.tavily.clone(), Arc::new(transport)))
    }

    /// Create a client from default settings and the process environment
    pub fn from_env() -> Result<Self, SearchError> {
        let mut settings = Settings::default();
        settings.merge_env();
        Self::with_settings(&settings)
    }

    pub fn endpoint(&self) -> &str {
        &self.settings.endpoint
    }

    /// Search for `query` and return every result's content followed by a newline.
    ///
    /// The HTTP status is not checked: any body is decoded, and one that does
    /// not have the expected shape yields [`SearchError::Decode`].
    pub async fn search(&self, query: &str) -> Result<String, SearchError> {
        let api_key = self.settings.credential()?;

        let body = serde_json::to_vec(&SearchRequest { api_key, query })
            .map_err(SearchError::Serialization)?;
        let request = TransportRequest::post(&self.settings.endpoint).json_body(body);

        debug!(
            endpoint = %self.settings.endpoint,
            query_len = query.len(),
            "sending search request"
        );
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            debug!(status = response.status, "search endpoint returned non-success status");
        }

        let decoded: SearchResponse =
            serde_json::from_slice(&response.body).map_err(|source| SearchError::Decode {
                status: response.status,
                source,
            })?;

        debug!(
            status = response.status,
            results = decoded.results.len(),
            "decoded search response"
        );

        Ok(decoded.concatenate())
    }
}
