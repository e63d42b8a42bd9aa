//! HTTP transport seam between API clients and the network.
//!
//! Clients build an [`HttpRequest`], hand it to an [`HttpService`] and get back
//! an [`HttpResponse`] holding the status line and the raw body. Whether the
//! request hits the network (`estate-reqwest`) or a recorded fixture
//! (`estate-test`) is decided by the [`HttpTransport`] behind the service.

mod request;
mod response;
mod service;

pub use request::HttpRequest;
pub use response::HttpResponse;
pub use service::HttpService;

use crate::Result;

/// Core trait for issuing a single HTTP GET.
///
/// Implementations perform exactly one attempt and report network-level
/// failures as [`ErrorKind::Transport`](crate::ErrorKind::Transport). A non-2xx
/// status is not an error at this layer.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends the request and returns the response status and body.
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse>;
}
