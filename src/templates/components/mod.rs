pub mod error;
pub mod filter_bar;
pub mod property_card;

pub use error::error_page;
pub use filter_bar::filter_bar;
pub use property_card::property_card;
