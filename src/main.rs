use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cinedex::app::AppContext;
use cinedex::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new(cli.db)?;

    match cli.command {
        Commands::Scrape {
            genre,
            keyword,
            pages,
        } => {
            commands::scrape(&ctx, genre, keyword, pages).await?;
        }
        Commands::List { genre } => {
            commands::list_movies(&ctx, genre.as_deref())?;
        }
        Commands::Show { id } => {
            commands::show_movie(&ctx, id)?;
        }
    }

    Ok(())
}
