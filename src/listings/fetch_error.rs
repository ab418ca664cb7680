use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Listings API returned status {0}")]
    Status(u16),
    #[error("JSON parse error: {0}")]
    JsonParse(String),
    #[error("IO error: {0}")]
    Io(String),
}
