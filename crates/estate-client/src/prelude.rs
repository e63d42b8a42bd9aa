//! Convenient re-exports for common use.

pub use crate::geocoding::{GeocodeCandidate, GeocodeResult, GeocodingClient, LatLng};
pub use crate::news::{NewsArticle, NewsClient, NewsQuery, NewsResponse};
pub use crate::reinfolib::{
    Language, RealEstateClient, RealEstateQuery, RealEstateRecord, RealEstateResponse,
};
pub use crate::{ClientConfig, EstateClients, Error, ErrorKind, Result};
