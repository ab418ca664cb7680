pub mod criteria;
pub mod filter;
pub mod property;
pub mod view_state;

pub use criteria::{CriteriaField, FilterCriteria};
pub use property::{Location, PropertyRecord};
pub use view_state::{FilterAction, FilterPhase, Listing, ListingState};
