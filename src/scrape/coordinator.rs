//! Scrape coordinator - fetch/parse orchestration
//!
//! This module drives the two-phase pipeline:
//! 1. Spawn one fetch task per page index, all concurrent on one shared client
//! 2. Await the join handles in submission order
//! 3. Parse each fetched page sequentially, ascending page index
//!
//! Parsing strictly in page order is what keeps quote ids deterministic even though
//! fetch completion order depends on network timing.

use crate::config::Config;
use crate::scrape::fetcher::{build_http_client, fetch_page};
use crate::scrape::parser::{parse_quotes, Quote};
use crate::url::normalize_base_url;
use crate::Result;
use reqwest::Client;
use url::Url;

/// Main scraper structure: the run configuration plus one shared HTTP client
pub struct Scraper {
    config: Config,
    client: Client,
    base: Url,
}

impl Scraper {
    /// Creates a new scraper instance
    ///
    /// Normalizes the configured base URL and builds the HTTP client reused by
    /// every fetch in the run.
    ///
    /// # Arguments
    ///
    /// * `config` - The scrape configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Scraper)` - Successfully created scraper
    /// * `Err(HarvestError)` - Invalid base URL or client build failure
    pub fn new(config: Config) -> Result<Self> {
        let base = normalize_base_url(&config.scrape.base_url)?;
        let client = build_http_client(&config.user_agent)?;

        Ok(Self {
            config,
            client,
            base,
        })
    }

    /// Runs the full fetch-then-parse pipeline and returns the ordered quote list
    ///
    /// All page fetches are spawned up front and run concurrently. The join handles
    /// are awaited in submission order, so each result stays associated with its
    /// page index no matter which request finishes first. The first fetch error
    /// aborts the run: sibling fetches still in flight are abandoned and no partial
    /// result is returned.
    pub async fn run(&self) -> Result<Vec<Quote>> {
        let max_pages = self.config.scrape.max_pages;
        let start_time = std::time::Instant::now();
        tracing::info!("Fetching {} pages from {}", max_pages, self.base);

        let mut handles = Vec::with_capacity(max_pages);
        for page_index in 1..=max_pages {
            let client = self.client.clone();
            let base = self.base.clone();
            handles.push(tokio::spawn(async move {
                fetch_page(&client, &base, page_index).await
            }));
        }

        // Await in submission order: pages[i] is always page i + 1.
        let mut pages = Vec::with_capacity(handles.len());
        for handle in handles {
            pages.push(handle.await??);
        }
        tracing::info!("Fetched {} pages in {:?}", pages.len(), start_time.elapsed());

        let mut quotes = Vec::new();
        let mut next_id = 1u64;
        for (index, html) in pages.iter().enumerate() {
            let page_number = index + 1;
            let page_quotes = parse_quotes(html, page_number, &mut next_id)?;
            tracing::debug!("Page {}: {} quotes", page_number, page_quotes.len());
            quotes.extend(page_quotes);
        }

        tracing::info!(
            "Extracted {} quotes from {} pages in {:?}",
            quotes.len(),
            pages.len(),
            start_time.elapsed()
        );

        Ok(quotes)
    }
}

/// Runs a complete scrape with the given configuration
///
/// This is the main library entry point. It builds a scraper (one HTTP client for
/// the whole run) and returns the ordered quote list.
///
/// # Arguments
///
/// * `config` - The scrape configuration
///
/// # Returns
///
/// * `Ok(Vec<Quote>)` - Quotes ordered by page number, then document order
/// * `Err(HarvestError)` - Any fetch or parse failure; no partial result
pub async fn scrape_site(config: Config) -> Result<Vec<Quote>> {
    Scraper::new(config)?.run().await
}
