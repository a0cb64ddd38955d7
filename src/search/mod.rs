pub mod country;
pub mod evaluate;
pub mod filters;
pub mod form;
pub mod persist;

pub use country::CountrySearch;
pub use evaluate::filter_hotels;
pub use filters::{Filters, NO_REVIEW_MINIMUM, PRICE_CEILING};
pub use form::{ChangeError, FieldChange, RawFieldChange, SearchForm, SetEdit};
pub use persist::{FilterStore, MemoryStore, FILTER_STORE_KEY};
