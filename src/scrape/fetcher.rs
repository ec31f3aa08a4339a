//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper, including:
//! - Building the HTTP client with a proper user agent string
//! - GET requests to fetch listing-page content
//! - Mapping non-success statuses to fetch errors

use crate::config::UserAgentConfig;
use crate::url::page_url;
use crate::{HarvestError, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds the HTTP client shared by all page fetches in a run
///
/// # Arguments
///
/// * `config` - The user agent configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(HarvestError)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use quote_harvest::config::UserAgentConfig;
/// use quote_harvest::scrape::build_http_client;
///
/// let config = UserAgentConfig {
///     scraper_name: "QuoteHarvest".to_string(),
///     scraper_version: "1.0".to_string(),
/// };
///
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client> {
    // Format: ScraperName/Version
    let user_agent = format!("{}/{}", config.scraper_name, config.scraper_version);

    let client = Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()?;

    Ok(client)
}

/// Fetches a single listing page and returns its raw HTML
///
/// The page URL is `{base}page/{page_index}/`; `base` must already carry exactly one
/// trailing slash (see [`crate::url::normalize_base_url`]). Any non-2xx status fails
/// the fetch. There is no retry: one failed page fails the whole batch at the
/// coordinator.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `base` - Normalized base URL of the site
/// * `page_index` - 1-based index of the listing page
///
/// # Returns
///
/// * `Ok(String)` - Raw HTML body of the page
/// * `Err(HarvestError)` - Non-success status or transport failure
pub async fn fetch_page(client: &Client, base: &Url, page_index: usize) -> Result<String> {
    let url = page_url(base, page_index)?;

    tracing::debug!("Fetching page {}: {}", page_index, url);
    let response = client.get(url.as_str()).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(HarvestError::FetchStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response.text().await?)
}
