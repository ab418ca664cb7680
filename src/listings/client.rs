// client.rs
use crate::domain::PropertyRecord;
use crate::listings::models::ListingsPayload;
use crate::listings::store::PropertySource;
use crate::listings::FetchError;
use log::info;
use reqwest::blocking::Client;

const USER_AGENT: &str = concat!("housing_search/", env!("CARGO_PKG_VERSION"));

/// Reads the full listing set from the listings API with a single GET.
pub struct ApiClient {
    client: Client,
    url: String,
}

impl ApiClient {
    pub fn new(url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl PropertySource for ApiClient {
    fn fetch_properties(&self) -> Result<Vec<PropertyRecord>, FetchError> {
        info!("Fetching listings from {}", self.url);

        let resp = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let payload: ListingsPayload = resp
            .json()
            .map_err(|e| FetchError::JsonParse(e.to_string()))?;

        Ok(payload.properties)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
