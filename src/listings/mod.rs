mod client;
mod fetch_error;
mod fixture;
mod models;
mod store;

pub use client::ApiClient;
pub use fetch_error::FetchError;
pub use fixture::FixtureSource;
pub use store::{PropertySource, PropertyStore};
