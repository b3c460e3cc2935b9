use crate::app::{CinedexError, Result};

/// The genre/keyword pair one scrape run is executed for.
///
/// At least one of the two must be present; the trigger layer rejects empty
/// queries before a run is started.
#[derive(Debug, Clone)]
pub struct ScrapeQuery {
    pub genre: Option<String>,
    pub keyword: Option<String>,
}

impl ScrapeQuery {
    pub fn new(genre: Option<String>, keyword: Option<String>) -> Result<Self> {
        if genre.is_none() && keyword.is_none() {
            return Err(CinedexError::Config(
                "at least one of genre or keyword must be provided".into(),
            ));
        }
        Ok(Self { genre, keyword })
    }

    /// Build the search URL: fixed feature-film base, then `&genres=`, then
    /// `&keywords=`, each only when present.
    pub fn search_url(&self, search_base: &str) -> String {
        let mut url = search_base.to_string();
        if let Some(ref genre) = self.genre {
            url.push_str(&format!("&genres={}", genre));
        }
        if let Some(ref keyword) = self.keyword {
            url.push_str(&format!("&keywords={}", keyword));
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.imdb.com/search/title/?title_type=feature";

    #[test]
    fn test_query_requires_genre_or_keyword() {
        assert!(ScrapeQuery::new(None, None).is_err());
        assert!(ScrapeQuery::new(Some("comedy".into()), None).is_ok());
        assert!(ScrapeQuery::new(None, Some("space".into())).is_ok());
    }

    #[test]
    fn test_search_url_genre_only() {
        let query = ScrapeQuery::new(Some("comedy".into()), None).unwrap();
        assert_eq!(
            query.search_url(BASE),
            "https://www.imdb.com/search/title/?title_type=feature&genres=comedy"
        );
    }

    #[test]
    fn test_search_url_keyword_only() {
        let query = ScrapeQuery::new(None, Some("space".into())).unwrap();
        assert_eq!(
            query.search_url(BASE),
            "https://www.imdb.com/search/title/?title_type=feature&keywords=space"
        );
    }

    #[test]
    fn test_search_url_genre_before_keyword() {
        let query = ScrapeQuery::new(Some("comedy".into()), Some("space".into())).unwrap();
        assert_eq!(
            query.search_url(BASE),
            "https://www.imdb.com/search/title/?title_type=feature&genres=comedy&keywords=space"
        );
    }
}
