//! HTTP service wrapper with observability.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use super::{HttpRequest, HttpResponse, HttpTransport};
use crate::{Result, TRACING_TARGET_HTTP};

/// HTTP service wrapper with observability.
///
/// This wrapper adds structured logging to any transport implementation.
/// The inner transport is wrapped in `Arc` for cheap cloning.
#[derive(Clone)]
pub struct HttpService {
    inner: Arc<dyn HttpTransport>,
}

impl fmt::Debug for HttpService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpService").finish_non_exhaustive()
    }
}

impl HttpService {
    /// Create a new HTTP service wrapper.
    pub fn new<T>(transport: T) -> Self
    where
        T: HttpTransport + 'static,
    {
        Self {
            inner: Arc::new(transport),
        }
    }

    /// Create a service from an already shared transport.
    pub fn from_arc(transport: Arc<dyn HttpTransport>) -> Self {
        Self { inner: transport }
    }

    /// Sends a GET request through the underlying transport.
    pub async fn get(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let started_at = Instant::now();

        tracing::debug!(
            target: TRACING_TARGET_HTTP,
            endpoint = %request.endpoint(),
            headers = request.headers.len(),
            "Sending request"
        );

        let result = self.inner.get(request).await;
        let elapsed = started_at.elapsed();

        match &result {
            Ok(response) if response.is_success() => {
                tracing::debug!(
                    target: TRACING_TARGET_HTTP,
                    endpoint = %request.endpoint(),
                    status = response.status,
                    body_len = response.body.len(),
                    elapsed_ms = elapsed.as_millis(),
                    "Request completed"
                );
            }
            Ok(response) => {
                tracing::warn!(
                    target: TRACING_TARGET_HTTP,
                    endpoint = %request.endpoint(),
                    status = response.status,
                    status_text = %response.status_text,
                    elapsed_ms = elapsed.as_millis(),
                    "Request returned non-success status"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET_HTTP,
                    endpoint = %request.endpoint(),
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Request failed"
                );
            }
        }

        result
    }
}
