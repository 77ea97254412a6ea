//! Search adapters. Page fetchers (curl, HTTP) and snippet extraction.

pub mod curl_fetcher;
pub mod http_fetcher;
pub mod snippet;

pub use curl_fetcher::CurlFetcher;
pub use http_fetcher::HttpFetcher;
pub use snippet::extract_top_snippet;
