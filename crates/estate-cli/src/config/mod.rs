//! CLI configuration management.
//!
//! ```text
//! Cli
//! ├── http: ReqwestConfig     # Timeout, user agent
//! ├── client: ClientConfig    # API keys, endpoints
//! └── command: Command        # What to run
//! ```
//!
//! Every option can be given as a CLI argument or an environment variable.

use std::process;

use clap::Parser;
use estate_client::ClientConfig;
use estate_reqwest::ReqwestConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::command::Command;
use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_STARTUP};

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "estate")]
#[command(about = "Geocoding, news and real estate transaction lookups")]
#[command(version)]
pub struct Cli {
    /// HTTP transport configuration.
    #[clap(flatten)]
    pub http: ReqwestConfig,

    /// API credentials and endpoints.
    #[clap(flatten)]
    pub client: ClientConfig,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    ///
    /// The .env file is loaded first so that clap's `env` fallbacks can see it.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Initializes tracing with environment-based filtering.
    ///
    /// Logs are written to stderr so stdout carries only the JSON result.
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    fn log_build_info() {
        tracing::debug!(
            target: TRACING_TARGET_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            features = ?Self::enabled_features(),
            "Build information"
        );
    }

    /// Logs configuration (no sensitive information).
    pub fn log(&self) {
        Self::log_build_info();

        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            http_timeout_secs = self.http.request_timeout().as_secs(),
            user_agent = %self.http.user_agent_header(),
            google_maps_key = self.client.google_maps_key().is_some(),
            reinfolib_key = self.client.reinfolib_key().is_some(),
            "Client configuration"
        );
    }

    fn enabled_features() -> Vec<&'static str> {
        [cfg!(feature = "dotenv").then_some("dotenv")]
            .into_iter()
            .flatten()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_geocode() {
        let cli = Cli::try_parse_from([
            "estate",
            "--google-maps-api-key",
            "key",
            "geocode",
            "東京都中央区築地6丁目",
        ])
        .unwrap();
        assert_eq!(cli.client.google_maps_key().unwrap().expose(), "key");
        assert!(matches!(cli.command, Command::Geocode { .. }));
    }

    #[test]
    fn test_parse_transactions() {
        let cli = Cli::try_parse_from([
            "estate",
            "transactions",
            "--price-classification",
            "01",
            "--year",
            "2024",
            "--quarter",
            "1",
            "--language",
            "ja",
            "--city",
            "13101",
        ])
        .unwrap();
        let Command::Transactions(query) = cli.command else {
            panic!("expected transactions command");
        };
        assert_eq!(query.city.as_deref(), Some("13101"));
        assert!(query.area.is_none());
    }

    #[test]
    fn test_parse_news_default_max() {
        let cli = Cli::try_parse_from(["estate", "news", "不動産"]).unwrap();
        let Command::News(query) = cli.command else {
            panic!("expected news command");
        };
        assert_eq!(query.query, "不動産");
        assert_eq!(query.max, 5);
    }

    #[test]
    fn test_tile_rejects_unsupported_zoom() {
        let result = Cli::try_parse_from([
            "estate", "tile", "--lat", "35.0", "--lon", "139.0", "--zoom", "14",
        ]);
        assert!(result.is_err());
    }
}
