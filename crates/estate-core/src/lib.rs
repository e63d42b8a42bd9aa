#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for HTTP transport operations.
pub const TRACING_TARGET_HTTP: &str = "estate_core::http";

mod credentials;
mod error;

pub mod http;
pub mod tile;

pub use credentials::ApiKey;
pub use error::{BoxedError, Error, ErrorKind, Result};
pub use http::{HttpRequest, HttpResponse, HttpService, HttpTransport};
pub use tile::{TileCoordinate, TileZoom, to_tile_xy};
