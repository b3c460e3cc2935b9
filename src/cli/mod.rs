pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cinedex")]
#[command(about = "Scrape a movie catalog into a local database", long_about = None)]
pub struct Cli {
    /// Path to the SQLite database (default: platform data dir)
    #[arg(long, global = true)]
    pub db: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one scrape for a genre and/or keyword
    Scrape {
        /// Genre to search for
        #[arg(long)]
        genre: Option<String>,

        /// Keyword to search for
        #[arg(long)]
        keyword: Option<String>,

        /// How many times to click "load more" on the listing page
        #[arg(long)]
        pages: Option<usize>,
    },
    /// List stored movies
    List {
        /// Only movies scraped under this genre
        #[arg(long)]
        genre: Option<String>,
    },
    /// Show one stored movie by id
    Show {
        /// Row id of the movie
        id: i64,
    },
}
