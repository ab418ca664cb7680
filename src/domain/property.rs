// src/domain/property.rs

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

/// One rental listing as returned by the listings API.
///
/// Records are loaded once at startup and never mutated afterwards; the store
/// only ever hands out shared references to them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "propertyImage", default)]
    pub image_url: String,
    #[serde(rename = "propertyName")]
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub property_type: String,
    pub location: Location,

    #[serde(default)]
    pub bedrooms: f64,
    #[serde(default)]
    pub bathrooms: f64,
    #[serde(default)]
    pub square_feet: f64,

    // The API has shipped this under both names.
    #[serde(
        rename = "dateAvailableFrom",
        alias = "availableFrom",
        default,
        deserialize_with = "lenient_date"
    )]
    pub available_from: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
}

impl PropertyRecord {
    /// "city , state , country", skipping empty parts.
    pub fn location_line(&self) -> String {
        [
            self.location.city.as_str(),
            self.location.state.as_str(),
            self.location.country.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" , ")
    }
}

/// Parses an RFC 3339 timestamp or a bare `YYYY-MM-DD` date into a calendar date.
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}

/// Unknown or malformed availability dates become `None` instead of failing the
/// whole payload.
fn lenient_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_record_date))
}
