use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use rusqlite_migration::{Migrations, M};

use crate::app::{CinedexError, Result};
use crate::domain::{Movie, NewMovie};
use crate::store::MovieStore;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    fn run_migrations(&self) -> Result<()> {
        let migrations = Migrations::new(vec![M::up(include_str!(
            "../../migrations/001-initial/up.sql"
        ))]);

        let mut conn = self.conn()?;
        migrations
            .to_latest(&mut conn)
            .map_err(|e| CinedexError::Other(format!("migration failed: {}", e)))?;

        Ok(())
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| CinedexError::Other(format!("store lock poisoned: {}", e)))
    }

    fn map_movie(row: &Row<'_>) -> rusqlite::Result<Movie> {
        Ok(Movie {
            id: row.get(0)?,
            title: row.get(1)?,
            release_year: row.get(2)?,
            imdb_rating: row.get(3)?,
            directors: row.get(4)?,
            cast: row.get(5)?,
            plot_summary: row.get(6)?,
            genre: row.get(7)?,
            imdb_url: row.get(8)?,
            created_at: row
                .get::<_, String>(9)
                .ok()
                .and_then(|s| Self::parse_datetime(&s))
                .unwrap_or_else(Utc::now),
        })
    }

    fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| s.parse::<DateTime<Utc>>().ok())
    }
}

const SELECT_COLUMNS: &str =
    "id, title, release_year, imdb_rating, directors, \"cast\", plot_summary, genre, imdb_url, created_at";

impl MovieStore for SqliteStore {
    fn add_movie(&self, movie: &NewMovie) -> Result<i64> {
        let conn = self.conn()?;

        conn.execute(
            "INSERT INTO movies (title, release_year, imdb_rating, directors, \"cast\", plot_summary, genre, imdb_url, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                movie.title,
                movie.release_year,
                movie.imdb_rating,
                movie.directors,
                movie.cast,
                movie.plot_summary,
                movie.genre,
                movie.imdb_url,
                Utc::now().to_rfc3339(),
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn get_movie(&self, id: i64) -> Result<Option<Movie>> {
        let conn = self.conn()?;

        let result = conn
            .query_row(
                &format!("SELECT {} FROM movies WHERE id = ?1", SELECT_COLUMNS),
                params![id],
                Self::map_movie,
            )
            .optional()?;

        Ok(result)
    }

    fn list_movies(&self, genre: Option<&str>) -> Result<Vec<Movie>> {
        let conn = self.conn()?;

        let movies = match genre {
            Some(genre) => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {} FROM movies WHERE genre = ?1 ORDER BY id",
                    SELECT_COLUMNS
                ))?;
                let rows = stmt.query_map(params![genre], Self::map_movie)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
            None => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {} FROM movies ORDER BY id",
                    SELECT_COLUMNS
                ))?;
                let rows = stmt.query_map([], Self::map_movie)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
        };

        Ok(movies)
    }

    fn count_movies(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count = conn.query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))?;
        Ok(count)
    }
}
