use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder stored when an optional string field cannot be extracted.
pub const NOT_AVAILABLE: &str = "N/A";

/// A movie record as persisted in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub release_year: i32,
    pub imdb_rating: Option<String>,
    pub directors: String,
    pub cast: String,
    pub plot_summary: Option<String>,
    pub genre: Option<String>,
    pub imdb_url: String,
    pub created_at: DateTime<Utc>,
}

/// A fully assembled record, ready to be handed to the store.
///
/// Assembly happens entirely in memory; a `NewMovie` only exists once every
/// required field validated (non-empty title, numeric release year). Optional
/// fields that could not be extracted carry their sentinel instead.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub release_year: i32,
    pub imdb_rating: Option<String>,
    pub directors: String,
    pub cast: String,
    pub plot_summary: Option<String>,
    pub genre: Option<String>,
    pub imdb_url: String,
}

impl Movie {
    pub fn display_rating(&self) -> &str {
        self.imdb_rating.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}
