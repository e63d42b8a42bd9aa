//! Reqwest-based HTTP transport.

use std::sync::Arc;

use estate_core::{HttpRequest, HttpResponse, HttpService, HttpTransport};
use reqwest::Client;

use crate::{Error, ReqwestConfig, Result, TRACING_TARGET};

/// Inner transport that holds the HTTP client and configuration.
struct ReqwestTransportInner {
    http: Client,
    config: ReqwestConfig,
}

/// Reqwest-based transport for the estate API clients.
///
/// Each [`HttpTransport::get`] call performs exactly one request attempt.
///
/// # Examples
///
/// ```rust,ignore
/// use estate_reqwest::{ReqwestConfig, ReqwestTransport};
///
/// let transport = ReqwestTransport::new(ReqwestConfig::default())?;
/// let service = transport.into_service();
/// ```
#[derive(Clone)]
pub struct ReqwestTransport {
    inner: Arc<ReqwestTransportInner>,
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl ReqwestTransport {
    /// Creates a new transport with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built
    /// (for example when no TLS backend is available).
    pub fn new(config: ReqwestConfig) -> Result<Self> {
        let timeout = config.request_timeout();
        let user_agent = config.user_agent_header();

        tracing::debug!(
            target: TRACING_TARGET,
            timeout_ms = timeout.as_millis(),
            user_agent = %user_agent,
            "Creating reqwest transport"
        );

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(&user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ReqwestTransportInner { http, config }),
        })
    }

    /// Creates a new transport with default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ReqwestConfig::default())
    }

    /// Gets the transport configuration.
    pub fn config(&self) -> &ReqwestConfig {
        &self.inner.config
    }

    /// Converts this transport into an [`HttpService`] for use with dependency injection.
    pub fn into_service(self) -> HttpService {
        HttpService::new(self)
    }

    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let mut http_request = self.inner.http.get(request.url.clone());
        for (name, value) in &request.headers {
            http_request = http_request.header(name, value);
        }

        let http_response = http_request.send().await?;
        let status = http_response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_owned();
        let body = http_response.bytes().await?;

        Ok(HttpResponse::new(status.as_u16(), status_text, body))
    }
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, request: &HttpRequest) -> estate_core::Result<HttpResponse> {
        self.send(request).await.map_err(|e: Error| e.into())
    }
}
