use crate::domain::PropertyRecord;
use crate::listings::models::ListingsPayload;
use crate::listings::store::PropertySource;
use crate::listings::FetchError;
use std::fs;
use std::path::PathBuf;

/// Loads listings from a JSON file shaped like the API response.
pub struct FixtureSource {
    path: PathBuf,
}

impl FixtureSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PropertySource for FixtureSource {
    fn fetch_properties(&self) -> Result<Vec<PropertyRecord>, FetchError> {
        let text = fs::read_to_string(&self.path)
            .map_err(|e| FetchError::Io(format!("{}: {e}", self.path.display())))?;

        let payload: ListingsPayload =
            serde_json::from_str(&text).map_err(|e| FetchError::JsonParse(e.to_string()))?;

        Ok(payload.properties)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
