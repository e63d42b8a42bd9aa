//! Real Estate Information Library transaction search.

mod client;
mod query;
mod types;

pub use client::{RealEstateClient, SUBSCRIPTION_KEY_HEADER};
pub use query::{Language, RealEstateQuery};
pub use types::{RealEstateRecord, RealEstateResponse};
