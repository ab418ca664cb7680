use crate::domain::PropertyRecord;
use serde::Deserialize;

// listings payload
//  └── properties[]
//       ├── _id
//       ├── propertyImage / propertyName / propertyType
//       ├── price
//       ├── location
//       │    ├── city
//       │    ├── state
//       │    └── country
//       ├── bedrooms / bathrooms / squareFeet
//       └── dateAvailableFrom (or availableFrom)

#[derive(Debug, Deserialize)]
pub struct ListingsPayload {
    pub properties: Vec<PropertyRecord>,
}
