// src/domain/criteria.rs

use chrono::{DateTime, NaiveDate};

/// Query-string keys the filter bar binds its inputs to.
pub const CITY_KEY: &str = "city";
pub const AVAILABLE_FROM_KEY: &str = "availableFrom";
pub const PRICE_KEY: &str = "price";
pub const PROPERTY_TYPE_KEY: &str = "propertyType";

/// Present when the form carries the criteria of an earlier Apply.
pub const APPLIED_KEY: &str = "applied";

/// The user's current, possibly partial, filter input.
///
/// Fields hold exactly what was typed. An empty (or whitespace-only) field
/// means "no constraint"; the typed accessors below also treat unparseable
/// input that way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub city: String,
    pub available_from: String,
    pub price: String,
    pub property_type: String,
}

/// One editable field of [`FilterCriteria`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriteriaField {
    City,
    AvailableFrom,
    Price,
    PropertyType,
}

impl CriteriaField {
    pub const ALL: [CriteriaField; 4] = [
        CriteriaField::City,
        CriteriaField::AvailableFrom,
        CriteriaField::Price,
        CriteriaField::PropertyType,
    ];

    pub fn key(self) -> &'static str {
        match self {
            CriteriaField::City => CITY_KEY,
            CriteriaField::AvailableFrom => AVAILABLE_FROM_KEY,
            CriteriaField::Price => PRICE_KEY,
            CriteriaField::PropertyType => PROPERTY_TYPE_KEY,
        }
    }

    /// Hidden-input key holding this field's applied value.
    pub fn applied_key(self) -> &'static str {
        match self {
            CriteriaField::City => "applied.city",
            CriteriaField::AvailableFrom => "applied.availableFrom",
            CriteriaField::Price => "applied.price",
            CriteriaField::PropertyType => "applied.propertyType",
        }
    }
}

impl FilterCriteria {
    /// Returns a copy with one field replaced.
    pub fn with(mut self, field: CriteriaField, value: impl Into<String>) -> Self {
        *self.slot_mut(field) = value.into();
        self
    }

    pub fn get(&self, field: CriteriaField) -> &str {
        match field {
            CriteriaField::City => &self.city,
            CriteriaField::AvailableFrom => &self.available_from,
            CriteriaField::Price => &self.price,
            CriteriaField::PropertyType => &self.property_type,
        }
    }

    fn slot_mut(&mut self, field: CriteriaField) -> &mut String {
        match field {
            CriteriaField::City => &mut self.city,
            CriteriaField::AvailableFrom => &mut self.available_from,
            CriteriaField::Price => &mut self.price,
            CriteriaField::PropertyType => &mut self.property_type,
        }
    }

    /// True when no field carries any input.
    pub fn is_empty(&self) -> bool {
        CriteriaField::ALL
            .iter()
            .all(|field| self.get(*field).trim().is_empty())
    }

    pub fn city(&self) -> Option<&str> {
        non_empty(&self.city)
    }

    pub fn property_type(&self) -> Option<&str> {
        non_empty(&self.property_type)
    }

    /// Maximum monthly price, if the input is a finite number.
    pub fn max_price(&self) -> Option<f64> {
        non_empty(&self.price)
            .and_then(|raw| raw.parse::<f64>().ok())
            .filter(|price| price.is_finite())
    }

    /// Requested move-in date, if the input parses as a calendar date.
    pub fn move_in_date(&self) -> Option<NaiveDate> {
        non_empty(&self.available_from).and_then(parse_filter_date)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Accepts `YYYY-MM-DD`, `MM/DD/YYYY` and RFC 3339 timestamps.
pub fn parse_filter_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}
