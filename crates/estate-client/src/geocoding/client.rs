//! Geocoding client implementation.

use std::sync::Arc;

use estate_core::{ApiKey, Error, HttpRequest, HttpService, Result};
use url::Url;

use super::GeocodeResult;
use crate::config::GOOGLE_MAPS_API_KEY_ENV;
use crate::{ClientConfig, TRACING_TARGET_GEOCODING};

struct GeocodingClientInner {
    http: HttpService,
    endpoint: Url,
    api_key: Option<ApiKey>,
}

/// Client for the Google Geocoding API.
///
/// Cheap to clone; clones share the same HTTP service.
#[derive(Clone)]
pub struct GeocodingClient {
    inner: Arc<GeocodingClientInner>,
}

impl GeocodingClient {
    /// Creates a client from the shared configuration.
    ///
    /// A missing key is not an error here; it is reported by
    /// [`search_address`](Self::search_address).
    pub fn new(http: HttpService, config: &ClientConfig) -> Self {
        let inner = GeocodingClientInner {
            http,
            endpoint: config.geocoding_url.clone(),
            api_key: config.google_maps_key(),
        };

        Self {
            inner: Arc::new(inner),
        }
    }

    /// Looks up candidate locations for a free-form address.
    ///
    /// An empty `results` list is returned as-is.
    ///
    /// # Errors
    ///
    /// - `Configuration` when no API key is configured (no request is sent)
    /// - `UpstreamHttp` when the API answers with a non-success status
    /// - `SchemaValidation` when the body does not match [`GeocodeResult`]
    /// - `Transport` when the request cannot be completed
    pub async fn search_address(&self, address: &str) -> Result<GeocodeResult> {
        let api_key = self.inner.api_key.as_ref().ok_or_else(|| {
            Error::configuration()
                .with_message(format!("{GOOGLE_MAPS_API_KEY_ENV} is not configured"))
        })?;

        let mut url = self.inner.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("address", address)
            .append_pair("key", api_key.expose());

        tracing::debug!(
            target: TRACING_TARGET_GEOCODING,
            address = %address,
            "Searching address"
        );

        let response = self
            .inner
            .http
            .get(&HttpRequest::get(url))
            .await?
            .error_for_status("geocoding data")?;

        let result: GeocodeResult = response.json()?;

        tracing::info!(
            target: TRACING_TARGET_GEOCODING,
            status = %result.status,
            candidates = result.results.len(),
            "Address search completed"
        );

        Ok(result)
    }
}

impl std::fmt::Debug for GeocodingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingClient")
            .field("endpoint", &self.inner.endpoint.as_str())
            .field("has_api_key", &self.inner.api_key.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use estate_core::ErrorKind;
    use estate_test::MockTransport;
    use serde_json::json;

    use super::*;

    fn tsukiji_response() -> serde_json::Value {
        let bounds = json!({
            "northeast": {"lat": 35.6663695, "lng": 139.7763248},
            "southwest": {"lat": 35.6613467, "lng": 139.7705683}
        });

        json!({
            "results": [{
                "address_components": [
                    {
                        "long_name": "築地6丁目",
                        "short_name": "築地6丁目",
                        "types": ["political", "sublocality", "sublocality_level_3"]
                    },
                    {
                        "long_name": "中央区",
                        "short_name": "中央区",
                        "types": ["locality", "political"]
                    }
                ],
                "formatted_address": "日本、〒104-0045 東京都中央区築地６丁目",
                "geometry": {
                    "bounds": bounds.clone(),
                    "location": {"lat": 35.664281, "lng": 139.7735148},
                    "location_type": "APPROXIMATE",
                    "viewport": bounds
                },
                "place_id": "ChIJj7pQfGKJGGARicC5hAJklr4",
                "types": ["political", "sublocality", "sublocality_level_3"]
            }],
            "status": "OK"
        })
    }

    fn client(mock: &MockTransport) -> GeocodingClient {
        let config = ClientConfig::new().with_google_maps_api_key("dummy-api-key");
        GeocodingClient::new(mock.service(), &config)
    }

    #[tokio::test]
    async fn test_search_address() {
        let mock = MockTransport::new().with_json(&tsukiji_response());

        let result = client(&mock).search_address("築地6丁目").await.unwrap();
        assert_eq!(result.status, "OK");
        assert_eq!(
            result.results[0].formatted_address,
            "日本、〒104-0045 東京都中央区築地６丁目"
        );
        assert_eq!(result.results[0].place_id, "ChIJj7pQfGKJGGARicC5hAJklr4");
        assert_eq!(result.first_location().unwrap().lng, 139.7735148);

        let request = mock.last_request().unwrap();
        assert!(request.url.as_str().starts_with(
            "https://maps.googleapis.com/maps/api/geocode/json?address=%E7%AF%89%E5%9C%B06%E4%B8%81%E7%9B%AE"
        ));
        assert_eq!(request.query_param("key").as_deref(), Some("dummy-api-key"));
        assert_eq!(request.query_param("address").as_deref(), Some("築地6丁目"));
    }

    #[tokio::test]
    async fn test_zero_results_is_success() {
        let mock = MockTransport::new().with_json(&json!({
            "results": [],
            "status": "ZERO_RESULTS"
        }));

        let result = client(&mock).search_address("nowhere").await.unwrap();
        assert_eq!(result.status, "ZERO_RESULTS");
        assert!(result.results.is_empty());
    }

    #[tokio::test]
    async fn test_upstream_error_carries_status_text() {
        let mock = MockTransport::new().with_status(404, "Not Found");

        let error = client(&mock).search_address("invalid-address").await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UpstreamHttp);
        assert!(
            error
                .to_string()
                .contains("Failed to fetch geocoding data: Not Found")
        );
    }

    #[tokio::test]
    async fn test_transport_error_is_propagated() {
        let mock = MockTransport::new().with_transport_failure("Network error");

        let error = client(&mock).search_address("test-address").await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Transport);
        assert!(error.to_string().contains("Network error"));
    }

    #[tokio::test]
    async fn test_invalid_geometry_is_schema_error() {
        let mock = MockTransport::new().with_json(&json!({
            "results": [{
                "formatted_address": "Test Address",
                "geometry": {"location": {"lat": 35.664281}}
            }],
            "status": "OK"
        }));

        let error = client(&mock).search_address("test-address").await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::SchemaValidation);
    }

    #[tokio::test]
    async fn test_missing_key_sends_nothing() {
        let mock = MockTransport::new().with_json(&tsukiji_response());
        let client = GeocodingClient::new(mock.service(), &ClientConfig::new());

        let error = client.search_address("築地6丁目").await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Configuration);
        assert!(error.to_string().contains("GOOGLE_MAPS_API_KEY"));
        assert_eq!(mock.call_count(), 0);
    }

    #[test]
    fn test_debug_hides_key() {
        let mock = MockTransport::new();
        let debug = format!("{:?}", client(&mock));
        assert!(!debug.contains("dummy-api-key"));
        assert!(debug.contains("has_api_key: true"));
    }
}
