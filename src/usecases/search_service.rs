//! Search fallback. Fetch a results page and return the first snippet.
//!
//! Best effort: depends on the search engine's current markup. Never fails past this boundary.

use crate::adapters::search::extract_top_snippet;
use crate::domain::DomainError;
use crate::ports::PageFetcherPort;
use std::sync::Arc;
use tracing::{error, info};

/// Reply when the page has no snippet region.
pub const NO_RESULTS: &str = "No results found.";

/// Reply when the fetch or the parse fails.
pub const SEARCH_ERROR: &str = "Error fetching search results. Please try again later.";

/// Build `<base>?q=<query>` with spaces as `+` and the rest percent-encoded.
pub fn build_search_url(base_url: &str, query: &str) -> String {
    let encoded = query
        .split(' ')
        .map(|word| urlencoding::encode(word).into_owned())
        .collect::<Vec<_>>()
        .join("+");
    format!("{}?q={}", base_url, encoded)
}

pub struct SearchService {
    fetcher: Arc<dyn PageFetcherPort>,
    base_url: String,
}

impl SearchService {
    pub fn new(fetcher: Arc<dyn PageFetcherPort>, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
        }
    }

    /// Top snippet as `"Top result: ..."`, or one of the fixed fallback strings.
    pub async fn search_top_result(&self, query: &str) -> String {
        match self.fetch_top_snippet(query).await {
            Ok(Some(snippet)) => format!("Top result: {}", snippet),
            Ok(None) => NO_RESULTS.to_string(),
            Err(e) => {
                error!(error = %e, "error performing search");
                SEARCH_ERROR.to_string()
            }
        }
    }

    async fn fetch_top_snippet(&self, query: &str) -> Result<Option<String>, DomainError> {
        let url = build_search_url(&self.base_url, query);
        info!(url = %url, "fetching search results");
        let html = self.fetcher.fetch(&url).await?;
        extract_top_snippet(&html)
    }
}
