//! reqwest-backed HTTP transport

use super::transport::{Transport, TransportError, TransportRequest, TransportResponse};
use crate::config::OutgoingSettings;
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::collections::HashMap;
use std::time::Duration;
use tracing::trace;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper configured from [`OutgoingSettings`]
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, TransportError> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self, TransportError> {
        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .pool_max_idle_per_host(settings.pool_maxsize)
            .gzip(true)
            .brotli(true);

        if let Some(secs) = settings.request_timeout {
            let timeout = Duration::try_from_secs_f64(secs).map_err(|e| {
                TransportError::InvalidSetting(format!("request_timeout {}: {}", secs, e))
            })?;
            builder = builder.timeout(timeout);
        }

        // SSL verification
        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Proxy settings
        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Read status, headers and the whole body, consuming the response
    async fn read_response(response: Response) -> Result<TransportResponse, TransportError> {
        let status = response.status().as_u16();

        let mut headers = HashMap::new();
        for (key, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(key.to_string(), v.to_string());
            }
        }

        let body = response.bytes().await?.to_vec();

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let mut req_builder = self.client.post(&request.url);

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key.as_str(), value.as_str());
        }

        trace!(url = %request.url, bytes = request.body.len(), "sending request");
        let response = req_builder.body(request.body).send().await?;

        Self::read_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProxySettings;

    #[tokio::test]
    async fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_timeout_and_proxy() {
        let settings = OutgoingSettings {
            request_timeout: Some(1.5),
            proxies: ProxySettings {
                all: Some("http://127.0.0.1:3128".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(HttpClient::with_settings(&settings).is_ok());
    }

    #[test]
    fn test_invalid_proxy_is_rejected() {
        let settings = OutgoingSettings {
            proxies: ProxySettings {
                https: Some("not a url".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(HttpClient::with_settings(&settings).is_err());
    }

    #[test]
    fn test_unusable_timeout_is_rejected() {
        for secs in [-1.0, f64::NAN, f64::INFINITY, 1e30] {
            let settings = OutgoingSettings {
                request_timeout: Some(secs),
                ..Default::default()
            };
            let err = HttpClient::with_settings(&settings).err();
            assert!(
                matches!(err, Some(TransportError::InvalidSetting(_))),
                "timeout {} accepted",
                secs
            );
        }
    }

    #[test]
    fn test_user_agent() {
        assert!(USER_AGENT.starts_with("tavily-search/"));
    }
}
