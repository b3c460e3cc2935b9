use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::domain::NOT_AVAILABLE;

/// Required-field extraction failures; anything else degrades to a sentinel.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractError {
    #[error("listing entry has no title node")]
    MissingTitle,

    #[error("release year is missing or not numeric: {0:?}")]
    InvalidYear(Option<String>),

    #[error("listing entry has no detail link")]
    MissingDetailUrl,

    #[error("detail link does not follow the /title/{{id}}/ pattern: {0}")]
    MalformedUrl(String),
}

/// Raw listing-level fields for one search-result entry.
///
/// Captured synchronously so the parsed document (which is not `Send`) can be
/// dropped before the per-entry detail fetches start.
#[derive(Debug, Clone, Default)]
pub struct ListingEntry {
    pub title: Option<String>,
    pub year: Option<String>,
    pub rating: Option<String>,
    pub detail_href: Option<String>,
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Select all movie entries from a rendered listing document.
pub fn listing_entries(doc: &Html) -> Vec<ListingEntry> {
    let container = selector("li.ipc-metadata-list-summary-item");
    doc.select(&container).map(listing_entry).collect()
}

fn listing_entry(el: ElementRef<'_>) -> ListingEntry {
    ListingEntry {
        title: entry_title(el),
        year: entry_year(el),
        rating: entry_rating(el),
        detail_href: entry_detail_href(el),
    }
}

fn entry_title(el: ElementRef<'_>) -> Option<String> {
    let sel = selector("h3.ipc-title__text");
    el.select(&sel)
        .next()
        .map(|node| strip_ordinal(&text_of(node)).to_string())
}

fn entry_year(el: ElementRef<'_>) -> Option<String> {
    let sel = selector("span.dli-title-metadata-item");
    el.select(&sel).next().map(text_of)
}

fn entry_rating(el: ElementRef<'_>) -> Option<String> {
    let sel = selector("span.ipc-rating-star--imdb");
    el.select(&sel)
        .next()
        .and_then(|node| text_of(node).split_whitespace().next().map(String::from))
}

fn entry_detail_href(el: ElementRef<'_>) -> Option<String> {
    let sel = selector("a.ipc-title-link-wrapper");
    el.select(&sel)
        .next()
        .and_then(|node| node.value().attr("href").map(String::from))
}

/// Strip a leading ranking prefix ("12. The Matrix" -> "The Matrix").
pub fn strip_ordinal(title: &str) -> &str {
    match title.split_once(". ") {
        Some((ordinal, rest)) if !ordinal.is_empty() && ordinal.chars().all(|c| c.is_ascii_digit()) => rest,
        _ => title,
    }
}

/// First credited director on a detail page, or "N/A".
pub fn director(doc: &Html) -> String {
    let sel = selector("a.ipc-metadata-list-item__list-content-item");
    doc.select(&sel)
        .next()
        .map(text_of)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// All credited actors on a detail page, comma-joined, or "N/A".
pub fn cast(doc: &Html) -> String {
    let container = selector("div[data-testid=\"shoveler-items-container\"]");
    let actor = selector("a[data-testid=\"title-cast-item__actor\"]");

    let names: Vec<String> = doc
        .select(&container)
        .flat_map(|section| section.select(&actor))
        .map(text_of)
        .collect();

    if names.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        names.join(", ")
    }
}

/// First summary item on a plot-summary page.
pub fn plot_summary(doc: &Html) -> Option<String> {
    let sel = selector("li.ipc-metadata-list__item");
    doc.select(&sel).next().map(text_of)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
        <ul>
          <li class="ipc-metadata-list-summary-item">
            <a class="ipc-title-link-wrapper" href="/title/tt0133093/?ref_=sr_t_1">
              <h3 class="ipc-title__text">1. The Matrix</h3>
            </a>
            <span class="dli-title-metadata-item">1999</span>
            <span class="ipc-rating-star--imdb">8.7 (2.1M)</span>
          </li>
          <li class="ipc-metadata-list-summary-item">
            <a class="ipc-title-link-wrapper" href="/title/tt0234215/">
              <h3 class="ipc-title__text">2. The Matrix Reloaded</h3>
            </a>
          </li>
        </ul>
    "#;

    #[test]
    fn test_listing_entries_all_fields() {
        let doc = Html::parse_document(LISTING);
        let entries = listing_entries(&doc);
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].title.as_deref(), Some("The Matrix"));
        assert_eq!(entries[0].year.as_deref(), Some("1999"));
        assert_eq!(entries[0].rating.as_deref(), Some("8.7"));
        assert_eq!(
            entries[0].detail_href.as_deref(),
            Some("/title/tt0133093/?ref_=sr_t_1")
        );
    }

    #[test]
    fn test_listing_entry_missing_optional_fields() {
        let doc = Html::parse_document(LISTING);
        let entries = listing_entries(&doc);

        // Second entry has no year or rating node
        assert_eq!(entries[1].title.as_deref(), Some("The Matrix Reloaded"));
        assert_eq!(entries[1].year, None);
        assert_eq!(entries[1].rating, None);
    }

    #[test]
    fn test_listing_entry_missing_title() {
        let html = r#"<li class="ipc-metadata-list-summary-item"><span class="dli-title-metadata-item">2001</span></li>"#;
        let doc = Html::parse_document(html);
        let entries = listing_entries(&doc);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, None);
        assert_eq!(entries[0].year.as_deref(), Some("2001"));
    }

    #[test]
    fn test_strip_ordinal() {
        assert_eq!(strip_ordinal("12. The Matrix"), "The Matrix");
        assert_eq!(strip_ordinal("1. Sample Film"), "Sample Film");
        assert_eq!(strip_ordinal("The Matrix"), "The Matrix");
        // Only a numeric prefix counts as an ordinal
        assert_eq!(strip_ordinal("Dr. Strangelove"), "Dr. Strangelove");
    }

    #[test]
    fn test_rating_takes_first_token() {
        let html = r#"<li class="ipc-metadata-list-summary-item"><span class="ipc-rating-star--imdb">8.1 (10k)</span></li>"#;
        let doc = Html::parse_document(html);
        let entries = listing_entries(&doc);
        assert_eq!(entries[0].rating.as_deref(), Some("8.1"));
    }

    #[test]
    fn test_director_present() {
        let html = r#"<a class="ipc-metadata-list-item__list-content-item">Jane Doe</a>"#;
        let doc = Html::parse_document(html);
        assert_eq!(director(&doc), "Jane Doe");
    }

    #[test]
    fn test_director_missing_yields_sentinel() {
        let doc = Html::parse_document("<html><body></body></html>");
        assert_eq!(director(&doc), "N/A");
    }

    #[test]
    fn test_cast_joined_across_sections() {
        let html = r#"
            <div data-testid="shoveler-items-container">
              <a data-testid="title-cast-item__actor">Actor1</a>
              <a data-testid="title-cast-item__actor">Actor2</a>
            </div>
            <div data-testid="shoveler-items-container">
              <a data-testid="title-cast-item__actor">Actor3</a>
            </div>
        "#;
        let doc = Html::parse_document(html);
        assert_eq!(cast(&doc), "Actor1, Actor2, Actor3");
    }

    #[test]
    fn test_cast_missing_yields_sentinel() {
        let doc = Html::parse_document("<html><body></body></html>");
        assert_eq!(cast(&doc), "N/A");
    }

    #[test]
    fn test_plot_summary() {
        let html = r#"<li class="ipc-metadata-list__item">  A great story.  </li>"#;
        let doc = Html::parse_document(html);
        assert_eq!(plot_summary(&doc).as_deref(), Some("A great story."));
    }

    #[test]
    fn test_plot_summary_missing() {
        let doc = Html::parse_document("<html><body></body></html>");
        assert_eq!(plot_summary(&doc), None);
    }
}
