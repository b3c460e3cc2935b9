use crate::app::{AppContext, CinedexError, Result};
use crate::domain::ScrapeQuery;
use crate::ingest::Runner;
use crate::store::MovieStore;

pub async fn scrape(
    ctx: &AppContext,
    genre: Option<String>,
    keyword: Option<String>,
    pages: Option<usize>,
) -> Result<()> {
    let query = ScrapeQuery::new(genre, keyword)?;

    let mut config = ctx.config.clone();
    if let Some(pages) = pages {
        config.pagination_limit = pages;
    }

    let runner = Runner::new(config, ctx.fetcher.clone(), ctx.store.clone());
    let summary = runner.run(&query).await?;

    println!(
        "Scrape complete: {} entries found, {} persisted, {} skipped",
        summary.found, summary.persisted, summary.skipped
    );
    Ok(())
}

pub fn list_movies(ctx: &AppContext, genre: Option<&str>) -> Result<()> {
    let movies = ctx.store.list_movies(genre)?;

    if movies.is_empty() {
        println!("No movies");
        return Ok(());
    }

    for movie in movies {
        println!(
            "[{}] {} ({}) — rating {}, directed by {}",
            movie.id,
            movie.title,
            movie.release_year,
            movie.display_rating(),
            movie.directors,
        );
    }

    Ok(())
}

pub fn show_movie(ctx: &AppContext, id: i64) -> Result<()> {
    let movie = ctx
        .store
        .get_movie(id)?
        .ok_or(CinedexError::MovieNotFound(id))?;

    println!("{} ({})", movie.title, movie.release_year);
    println!("  Rating:    {}", movie.display_rating());
    println!("  Directors: {}", movie.directors);
    println!("  Cast:      {}", movie.cast);
    if let Some(ref plot) = movie.plot_summary {
        println!("  Plot:      {}", plot);
    }
    if let Some(ref genre) = movie.genre {
        println!("  Genre:     {}", genre);
    }
    println!("  URL:       {}", movie.imdb_url);
    println!("  Added:     {}", movie.created_at.to_rfc3339());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewMovie;

    #[test]
    fn test_show_movie_not_found() {
        let ctx = AppContext::in_memory().unwrap();
        let err = show_movie(&ctx, 42).unwrap_err();
        assert!(matches!(err, CinedexError::MovieNotFound(42)));
    }

    #[test]
    fn test_list_movies_runs_with_and_without_filter() {
        let ctx = AppContext::in_memory().unwrap();
        ctx.store
            .add_movie(&NewMovie {
                title: "Test Movie".into(),
                release_year: 2023,
                imdb_rating: None,
                directors: "N/A".into(),
                cast: "N/A".into(),
                plot_summary: None,
                genre: Some("action".into()),
                imdb_url: "https://www.imdb.com/title/tt0000001/".into(),
            })
            .unwrap();

        assert!(list_movies(&ctx, None).is_ok());
        assert!(list_movies(&ctx, Some("action")).is_ok());
        assert!(list_movies(&ctx, Some("comedy")).is_ok());
    }
}
