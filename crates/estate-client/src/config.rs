//! Client configuration.

#[cfg(feature = "config")]
use clap::Args;
use estate_core::ApiKey;
use serde::{Deserialize, Serialize};
use url::Url;

/// Default Google Geocoding API endpoint.
pub const DEFAULT_GEOCODING_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Default Real Estate Information Library transaction endpoint.
pub const DEFAULT_REINFOLIB_URL: &str = "https://www.reinfolib.mlit.go.jp/ex-api/external/XIT001";

/// Default Google News RSS search endpoint.
pub const DEFAULT_NEWS_URL: &str = "https://news.google.com/rss/search";

/// Environment variable holding the Google Maps API key.
pub const GOOGLE_MAPS_API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

/// Environment variable holding the Real Estate Information Library API key.
pub const REINFOLIB_API_KEY_ENV: &str = "REINFOLIB_API_KEY";

/// Credentials and endpoints shared by the API clients.
///
/// Keys are optional at construction time. A client whose key is missing
/// still builds, and reports a configuration error on first use.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct ClientConfig {
    /// Google Maps API key used for geocoding
    #[cfg_attr(
        feature = "config",
        arg(long = "google-maps-api-key", env = "GOOGLE_MAPS_API_KEY")
    )]
    #[serde(default, skip_serializing)]
    pub google_maps_api_key: Option<String>,

    /// Real Estate Information Library API key
    #[cfg_attr(
        feature = "config",
        arg(long = "reinfolib-api-key", env = "REINFOLIB_API_KEY")
    )]
    #[serde(default, skip_serializing)]
    pub reinfolib_api_key: Option<String>,

    /// Geocoding API endpoint
    #[cfg_attr(
        feature = "config",
        arg(long = "geocoding-url", env = "GEOCODING_URL", default_value = DEFAULT_GEOCODING_URL)
    )]
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: Url,

    /// Real estate transaction API endpoint
    #[cfg_attr(
        feature = "config",
        arg(long = "reinfolib-url", env = "REINFOLIB_URL", default_value = DEFAULT_REINFOLIB_URL)
    )]
    #[serde(default = "default_reinfolib_url")]
    pub reinfolib_url: Url,

    /// News RSS search endpoint
    #[cfg_attr(
        feature = "config",
        arg(long = "news-url", env = "NEWS_URL", default_value = DEFAULT_NEWS_URL)
    )]
    #[serde(default = "default_news_url")]
    pub news_url: Url,
}

fn parse_default(url: &str) -> Url {
    Url::parse(url).expect("default endpoint is a valid URL")
}

fn default_geocoding_url() -> Url {
    parse_default(DEFAULT_GEOCODING_URL)
}

fn default_reinfolib_url() -> Url {
    parse_default(DEFAULT_REINFOLIB_URL)
}

fn default_news_url() -> Url {
    parse_default(DEFAULT_NEWS_URL)
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            google_maps_api_key: None,
            reinfolib_api_key: None,
            geocoding_url: default_geocoding_url(),
            reinfolib_url: default_reinfolib_url(),
            news_url: default_news_url(),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration with default endpoints and no keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with default endpoints and keys read from
    /// the process environment.
    pub fn from_env() -> Self {
        Self {
            google_maps_api_key: std::env::var(GOOGLE_MAPS_API_KEY_ENV).ok(),
            reinfolib_api_key: std::env::var(REINFOLIB_API_KEY_ENV).ok(),
            ..Self::default()
        }
    }

    /// Set the Google Maps API key.
    #[must_use]
    pub fn with_google_maps_api_key(mut self, key: impl Into<String>) -> Self {
        self.google_maps_api_key = Some(key.into());
        self
    }

    /// Set the Real Estate Information Library API key.
    #[must_use]
    pub fn with_reinfolib_api_key(mut self, key: impl Into<String>) -> Self {
        self.reinfolib_api_key = Some(key.into());
        self
    }

    /// Set the geocoding endpoint.
    #[must_use]
    pub fn with_geocoding_url(mut self, url: Url) -> Self {
        self.geocoding_url = url;
        self
    }

    /// Set the real estate transaction endpoint.
    #[must_use]
    pub fn with_reinfolib_url(mut self, url: Url) -> Self {
        self.reinfolib_url = url;
        self
    }

    /// Set the news search endpoint.
    #[must_use]
    pub fn with_news_url(mut self, url: Url) -> Self {
        self.news_url = url;
        self
    }

    /// Returns the Google Maps key, treating blank values as missing.
    pub fn google_maps_key(&self) -> Option<ApiKey> {
        ApiKey::from_optional(self.google_maps_api_key.clone())
    }

    /// Returns the reinfolib key, treating blank values as missing.
    pub fn reinfolib_key(&self) -> Option<ApiKey> {
        ApiKey::from_optional(self.reinfolib_api_key.clone())
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("google_maps_api_key", &self.google_maps_key())
            .field("reinfolib_api_key", &self.reinfolib_key())
            .field("geocoding_url", &self.geocoding_url.as_str())
            .field("reinfolib_url", &self.reinfolib_url.as_str())
            .field("news_url", &self.news_url.as_str())
            .finish()
    }
}
