// src/domain/filter.rs

use crate::domain::criteria::FilterCriteria;
use crate::domain::property::PropertyRecord;
use chrono::NaiveDate;

/// Returns the records matching every active criterion, in their original order.
///
/// Inactive criteria (empty, or not parseable as a price/date) place no
/// constraint. Zero matches is an empty vector, not an error.
pub fn apply(records: &[PropertyRecord], criteria: &FilterCriteria) -> Vec<PropertyRecord> {
    let active = ActiveFilters::from(criteria);
    records
        .iter()
        .filter(|record| active.matches(record))
        .cloned()
        .collect()
}

/// Criteria parsed once per run: lowercased text, numeric price, calendar date.
struct ActiveFilters {
    city: Option<String>,
    move_in: Option<NaiveDate>,
    max_price: Option<f64>,
    property_type: Option<String>,
}

impl From<&FilterCriteria> for ActiveFilters {
    fn from(criteria: &FilterCriteria) -> Self {
        ActiveFilters {
            city: criteria.city().map(str::to_lowercase),
            move_in: criteria.move_in_date(),
            max_price: criteria.max_price(),
            property_type: criteria.property_type().map(str::to_lowercase),
        }
    }
}

impl ActiveFilters {
    fn matches(&self, record: &PropertyRecord) -> bool {
        if let Some(city) = &self.city {
            if record.location.city.to_lowercase() != *city {
                return false;
            }
        }

        // Available on or before the requested move-in date. Unknown availability
        // does not exclude the record.
        if let (Some(move_in), Some(available)) = (self.move_in, record.available_from) {
            if available > move_in {
                return false;
            }
        }

        if let Some(max_price) = self.max_price {
            if record.price > max_price {
                return false;
            }
        }

        if let Some(property_type) = &self.property_type {
            if record.property_type.to_lowercase() != *property_type {
                return false;
            }
        }

        true
    }
}
