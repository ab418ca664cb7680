use crate::domain::PropertyRecord;
use crate::listings::FetchError;
use log::{error, info};
use std::sync::Arc;

/// Anything that can produce the initial listing set.
pub trait PropertySource {
    fn fetch_properties(&self) -> Result<Vec<PropertyRecord>, FetchError>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

/// The full, unfiltered listing set, loaded once and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
    records: Arc<Vec<PropertyRecord>>,
}

impl PropertyStore {
    pub fn from_records(records: Vec<PropertyRecord>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    /// Loads from `source` once. A failure is logged and leaves the store empty;
    /// there is no retry.
    pub fn load(source: &dyn PropertySource) -> Self {
        match source.fetch_properties() {
            Ok(records) => {
                info!("Loaded {} properties from {}", records.len(), source.describe());
                Self::from_records(records)
            }
            Err(e) => {
                error!("Failed to load properties from {}: {e}", source.describe());
                Self::default()
            }
        }
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
