//! Transaction search client.

use std::sync::Arc;

use estate_core::{ApiKey, Error, HttpRequest, HttpService, Result};
use url::Url;

use super::{RealEstateQuery, RealEstateRecord, RealEstateResponse};
use crate::config::REINFOLIB_API_KEY_ENV;
use crate::{ClientConfig, TRACING_TARGET_REINFOLIB};

/// Header carrying the subscription key. The key is never sent as a query
/// parameter.
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

struct RealEstateClientInner {
    http: HttpService,
    endpoint: Url,
    api_key: Option<ApiKey>,
}

/// Client for the Real Estate Information Library `XIT001` endpoint.
#[derive(Clone)]
pub struct RealEstateClient {
    inner: Arc<RealEstateClientInner>,
}

impl RealEstateClient {
    /// Creates a client from the shared configuration.
    pub fn new(http: HttpService, config: &ClientConfig) -> Self {
        let inner = RealEstateClientInner {
            http,
            endpoint: config.reinfolib_url.clone(),
            api_key: config.reinfolib_key(),
        };

        Self {
            inner: Arc::new(inner),
        }
    }

    /// Returns the transaction records matching `query`.
    pub async fn get_transactions(&self, query: &RealEstateQuery) -> Result<Vec<RealEstateRecord>> {
        let response = self.fetch_transactions(query).await?;
        Ok(response.data)
    }

    /// Returns the full `{status, data}` envelope for `query`.
    ///
    /// The query is validated before the key is checked, and both happen
    /// before any request is sent.
    ///
    /// # Errors
    ///
    /// - `InvalidQuery` when a field is malformed or no location is given
    /// - `Configuration` when no subscription key is configured
    /// - `UpstreamHttp` on a non-success status
    /// - `SchemaValidation` when the body is not the expected envelope
    /// - `Transport` when the request cannot be completed
    pub async fn fetch_transactions(&self, query: &RealEstateQuery) -> Result<RealEstateResponse> {
        query.check()?;

        let url = query.to_url(&self.inner.endpoint);

        let api_key = self.inner.api_key.as_ref().ok_or_else(|| {
            Error::configuration()
                .with_message(format!("{REINFOLIB_API_KEY_ENV} is not configured"))
        })?;

        tracing::debug!(
            target: TRACING_TARGET_REINFOLIB,
            year = %query.year,
            quarter = %query.quarter,
            area = ?query.area,
            city = ?query.city,
            station = ?query.station,
            "Searching real estate transactions"
        );

        let request = HttpRequest::get(url).with_header(SUBSCRIPTION_KEY_HEADER, api_key.expose());
        let response = self
            .inner
            .http
            .get(&request)
            .await?
            .error_for_status("real estate data")?;

        tracing::debug!(
            target: TRACING_TARGET_REINFOLIB,
            body = %response.text(),
            "Response data"
        );

        let result: RealEstateResponse = response.json()?;

        tracing::info!(
            target: TRACING_TARGET_REINFOLIB,
            status = %result.status,
            records = result.data.len(),
            "Transaction search completed"
        );

        Ok(result)
    }
}

impl std::fmt::Debug for RealEstateClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RealEstateClient")
            .field("endpoint", &self.inner.endpoint.as_str())
            .field("has_api_key", &self.inner.api_key.is_some())
            .finish_non_exhaustive()
    }
}
