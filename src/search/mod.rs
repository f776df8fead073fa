pub mod executor;
pub mod query;
pub mod results;

pub use executor::search;
pub use query::SearchQuery;
pub use results::{Hits, SearchResults};
