//! Question link discovery
//!
//! Runs a site-restricted web search and pulls question URLs out of the
//! result page.

use crate::config::Config;
use crate::error::Result;
use crate::fetch::PageFetcher;
use regex::Regex;
use std::collections::HashSet;
use tracing::{info, warn};
use url::Url;

/// Question URLs as they appear in search results
const QUESTION_LINK_PATTERN: &str = r"https://stackoverflow\.com/questions/\d+/[a-z0-9-]+";

/// Build the search URL for `query`, restricted to the configured site
pub fn search_url(config: &Config, query: &str) -> Result<Url> {
    let q = format!("site:{} {}", config.site, query);
    let url = Url::parse_with_params(
        &config.search_url,
        &[("q", q.as_str()), ("hl", config.language.as_str())],
    )?;
    Ok(url)
}

/// Extract question links from a search result page
///
/// Links are returned in document order with repeats dropped.
pub fn extract_question_links(text: &str) -> Result<Vec<String>> {
    let pattern = Regex::new(QUESTION_LINK_PATTERN)?;
    let mut seen = HashSet::new();

    Ok(pattern
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|link| seen.insert(*link))
        .map(str::to_string)
        .collect())
}

/// Search for `query` and return the question links found
///
/// An error status from the search engine means no links; transport
/// failures are returned to the caller.
pub async fn question_links<F: PageFetcher>(
    fetcher: &F,
    config: &Config,
    query: &str,
) -> Result<Vec<String>> {
    let url = search_url(config, query)?;

    let text = match fetcher.fetch(url.as_str()).await {
        Ok(text) => text,
        Err(e) if e.is_status() => {
            warn!("Search returned an error status: {}", e);
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    let links = extract_question_links(&text)?;
    info!("Found {} question links for \"{}\"", links.len(), query);

    Ok(links)
}
