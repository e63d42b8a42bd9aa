//! Transaction search parameters.

use std::sync::LazyLock;

#[cfg(feature = "config")]
use clap::Args;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use url::Url;
use validator::{Validate, ValidationError};

use crate::validation;

static TWO_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}$").expect("valid regex"));
static FOUR_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("valid regex"));
static FIVE_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}$").expect("valid regex"));
static SIX_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("valid regex"));
static QUARTER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[1-4]$").expect("valid regex"));

/// Response language.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    /// Japanese
    Ja,
    /// English
    En,
}

/// Real estate transaction search parameters.
///
/// Field formats are checked by [`Validate`]; at least one of `area`, `city`
/// or `station` must be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "config", derive(Args))]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_location", skip_on_field_errors = false))]
pub struct RealEstateQuery {
    /// Price classification code, exactly 2 digits (e.g. "01")
    #[cfg_attr(feature = "config", arg(long))]
    #[validate(regex(path = *TWO_DIGITS, message = "priceClassification must be exactly 2 digits"))]
    pub price_classification: String,

    /// Transaction year, exactly 4 digits
    #[cfg_attr(feature = "config", arg(long))]
    #[validate(regex(path = *FOUR_DIGITS, message = "year must be exactly 4 digits"))]
    pub year: String,

    /// Quarter of the year, 1 to 4
    #[cfg_attr(feature = "config", arg(long))]
    #[validate(regex(path = *QUARTER, message = "quarter must be a single digit from 1 to 4"))]
    pub quarter: String,

    /// Response language (ja or en)
    #[cfg_attr(feature = "config", arg(long))]
    pub language: Language,

    /// Prefecture code, exactly 2 digits
    #[cfg_attr(feature = "config", arg(long))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *TWO_DIGITS, message = "area must be exactly 2 digits"))]
    pub area: Option<String>,

    /// Municipality code, exactly 5 digits
    #[cfg_attr(feature = "config", arg(long))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *FIVE_DIGITS, message = "city must be exactly 5 digits"))]
    pub city: Option<String>,

    /// Station code, exactly 6 digits
    #[cfg_attr(feature = "config", arg(long))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *SIX_DIGITS, message = "station must be exactly 6 digits"))]
    pub station: Option<String>,
}

fn validate_location(query: &RealEstateQuery) -> Result<(), ValidationError> {
    if query.area.is_none() && query.city.is_none() && query.station.is_none() {
        let error = ValidationError::new("location_required")
            .with_message("At least one of area, city, or station must be specified".into());
        return Err(error);
    }

    Ok(())
}

impl RealEstateQuery {
    /// Creates a query with the required fields and no location filter.
    pub fn new(
        price_classification: impl Into<String>,
        year: impl Into<String>,
        quarter: impl Into<String>,
        language: Language,
    ) -> Self {
        Self {
            price_classification: price_classification.into(),
            year: year.into(),
            quarter: quarter.into(),
            language,
            area: None,
            city: None,
            station: None,
        }
    }

    /// Set the prefecture code.
    #[must_use]
    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    /// Set the municipality code.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Set the station code.
    #[must_use]
    pub fn with_station(mut self, station: impl Into<String>) -> Self {
        self.station = Some(station.into());
        self
    }

    /// Validates field formats and the location requirement.
    pub fn check(&self) -> estate_core::Result<()> {
        self.validate().map_err(validation::invalid_query)
    }

    /// Appends the query parameters to `endpoint`, skipping absent filters.
    pub(crate) fn to_url(&self, endpoint: &Url) -> Url {
        let mut url = endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("priceClassification", &self.price_classification)
                .append_pair("year", &self.year)
                .append_pair("quarter", &self.quarter)
                .append_pair("language", self.language.as_ref());

            let filters = [
                ("area", &self.area),
                ("city", &self.city),
                ("station", &self.station),
            ];
            for (name, value) in filters {
                if let Some(value) = value {
                    pairs.append_pair(name, value);
                }
            }
        }
        url
    }
}
