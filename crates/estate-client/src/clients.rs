use estate_core::HttpService;

use crate::{ClientConfig, GeocodingClient, NewsClient, RealEstateClient};

/// All API clients, sharing one HTTP service.
#[derive(Debug, Clone)]
pub struct EstateClients {
    pub geocoding: GeocodingClient,
    pub real_estate: RealEstateClient,
    pub news: NewsClient,
}

impl EstateClients {
    /// Builds every client from a single configuration.
    pub fn new(http: HttpService, config: &ClientConfig) -> Self {
        Self {
            geocoding: GeocodingClient::new(http.clone(), config),
            real_estate: RealEstateClient::new(http.clone(), config),
            news: NewsClient::new(http, config),
        }
    }
}
