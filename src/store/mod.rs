pub mod sqlite;

use crate::app::Result;
use crate::domain::{Movie, NewMovie};

pub use sqlite::SqliteStore;

/// Durable movie storage with create-only write semantics.
///
/// The pipeline never reads back or deduplicates before writing; a record is
/// created exactly once per successful assembly and never mutated after.
pub trait MovieStore: Send + Sync {
    /// Persist a fully assembled record, returning its row id.
    fn add_movie(&self, movie: &NewMovie) -> Result<i64>;

    fn get_movie(&self, id: i64) -> Result<Option<Movie>>;

    /// All movies, optionally filtered by the genre tag they were scraped under.
    fn list_movies(&self, genre: Option<&str>) -> Result<Vec<Movie>>;

    fn count_movies(&self) -> Result<i64>;
}
