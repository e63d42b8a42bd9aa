#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod error;
pub mod tools;

pub use error::{Error, Result};
pub use tools::{EstateTools, GeocodingTool, GoogleNewsTool, ReinfolibTool};

/// Tracing target for the main library.
pub const TRACING_TARGET: &str = "estate_rig";

/// Tracing target for tool invocations.
pub const TRACING_TARGET_TOOLS: &str = "estate_rig::tools";
