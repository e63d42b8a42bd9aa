//! Address geocoding.
//!
//! Wraps the Google Geocoding API: one address in, a list of candidate
//! locations out. An empty candidate list is a successful answer.

mod client;
mod types;

pub use client::GeocodingClient;
pub use types::{AddressComponent, Bounds, GeocodeCandidate, GeocodeResult, Geometry, LatLng};
