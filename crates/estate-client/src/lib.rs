#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for the main library.
pub const TRACING_TARGET: &str = "estate_client";

/// Tracing target for geocoding operations.
pub const TRACING_TARGET_GEOCODING: &str = "estate_client::geocoding";

/// Tracing target for real estate transaction operations.
pub const TRACING_TARGET_REINFOLIB: &str = "estate_client::reinfolib";

/// Tracing target for news feed operations.
pub const TRACING_TARGET_NEWS: &str = "estate_client::news";

mod clients;
mod config;
mod validation;

pub mod geocoding;
pub mod news;
pub mod prelude;
pub mod reinfolib;

pub use clients::EstateClients;
pub use config::ClientConfig;
pub use estate_core::{Error, ErrorKind, Result};
pub use geocoding::{GeocodeResult, GeocodingClient};
pub use news::{NewsArticle, NewsClient, NewsQuery, NewsResponse};
pub use reinfolib::{Language, RealEstateClient, RealEstateQuery, RealEstateRecord, RealEstateResponse};
