//! Geocoding response schema.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

/// A rectangular area given by its corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// North-east corner.
    pub northeast: LatLng,
    /// South-west corner.
    pub southwest: LatLng,
}

/// One named part of a formatted address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressComponent {
    /// Full name, e.g. "中央区".
    pub long_name: String,
    /// Abbreviated name, when the API has one.
    pub short_name: String,
    /// Component categories such as "locality".
    pub types: Vec<String>,
}

/// Location details for a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Area fully containing the result.
    pub bounds: Bounds,
    /// Geocoded point.
    pub location: LatLng,
    /// Precision of `location`, e.g. "ROOFTOP" or "APPROXIMATE".
    pub location_type: String,
    /// Recommended display area.
    pub viewport: Bounds,
}

/// One geocoding match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeCandidate {
    /// Address parts from most to least specific.
    pub address_components: Vec<AddressComponent>,
    /// Human-readable address.
    pub formatted_address: String,
    /// Position and extent.
    pub geometry: Geometry,
    /// Stable Google place identifier.
    pub place_id: String,
    /// Feature categories of the match.
    pub types: Vec<String>,
}

/// Decoded geocoding answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    /// Candidates, best match first.
    pub results: Vec<GeocodeCandidate>,
    /// API status such as "OK" or "ZERO_RESULTS".
    pub status: String,
}

impl GeocodeResult {
    /// Returns the first candidate, if any.
    pub fn first(&self) -> Option<&GeocodeCandidate> {
        self.results.first()
    }

    /// Returns the location of the first candidate, if any.
    pub fn first_location(&self) -> Option<LatLng> {
        self.first().map(|candidate| candidate.geometry.location)
    }
}
