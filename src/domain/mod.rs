pub mod movie;
pub mod query;

pub use movie::{Movie, NewMovie, NOT_AVAILABLE};
pub use query::ScrapeQuery;
