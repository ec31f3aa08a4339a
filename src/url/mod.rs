//! URL handling module for Quote-Harvest
//!
//! This module provides base-URL normalization and listing-page URL construction.
//! Every page request targets `{base}page/{index}/`, so the base must carry exactly
//! one trailing slash for the join to land under the site root.

use crate::{UrlError, UrlResult};
use url::Url;

/// Normalizes a base URL for page-URL construction
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed
/// 2. Reject schemes other than HTTP and HTTPS
/// 3. Trim every trailing slash from the path, then append exactly one
///
/// # Arguments
///
/// * `raw` - The base URL string from the configuration
///
/// # Returns
///
/// * `Ok(Url)` - Normalized base URL, path ending in exactly one `/`
/// * `Err(UrlError)` - Failed to parse the URL, or unsupported scheme
///
/// # Examples
///
/// ```
/// use quote_harvest::url::normalize_base_url;
///
/// let url = normalize_base_url("https://quotes.toscrape.com").unwrap();
/// assert_eq!(url.as_str(), "https://quotes.toscrape.com/");
/// ```
pub fn normalize_base_url(raw: &str) -> UrlResult<Url> {
    let mut url = Url::parse(raw).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    let trimmed = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{}/", trimmed));

    Ok(url)
}

/// Builds the URL for a single listing page: `{base}page/{index}/`
///
/// `base` must already be normalized with [`normalize_base_url`] so the page path
/// resolves under the site root rather than replacing its last segment.
pub fn page_url(base: &Url, page_index: usize) -> UrlResult<Url> {
    base.join(&format!("page/{}/", page_index))
        .map_err(|e| UrlError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_trailing_slash() {
        let url = normalize_base_url("https://quotes.toscrape.com").unwrap();
        assert_eq!(url.as_str(), "https://quotes.toscrape.com/");
    }

    #[test]
    fn test_normalize_keeps_single_trailing_slash() {
        let url = normalize_base_url("https://quotes.toscrape.com/").unwrap();
        assert_eq!(url.as_str(), "https://quotes.toscrape.com/");
    }

    #[test]
    fn test_normalize_collapses_repeated_trailing_slashes() {
        let url = normalize_base_url("https://quotes.toscrape.com///").unwrap();
        assert_eq!(url.as_str(), "https://quotes.toscrape.com/");
    }

    #[test]
    fn test_normalize_preserves_subpath() {
        let url = normalize_base_url("https://example.com/mirror/quotes").unwrap();
        assert_eq!(url.as_str(), "https://example.com/mirror/quotes/");
    }

    #[test]
    fn test_normalize_allows_http() {
        let url = normalize_base_url("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn test_normalize_rejects_other_schemes() {
        let result = normalize_base_url("ftp://quotes.toscrape.com/");
        assert!(matches!(result, Err(UrlError::InvalidScheme(_))));
    }

    #[test]
    fn test_normalize_rejects_malformed_url() {
        let result = normalize_base_url("not a url");
        assert!(matches!(result, Err(UrlError::Parse(_))));
    }

    #[test]
    fn test_page_url_from_site_root() {
        let base = normalize_base_url("https://quotes.toscrape.com/").unwrap();
        let url = page_url(&base, 3).unwrap();
        assert_eq!(url.as_str(), "https://quotes.toscrape.com/page/3/");
    }

    #[test]
    fn test_page_url_under_subpath() {
        let base = normalize_base_url("https://example.com/mirror/quotes").unwrap();
        let url = page_url(&base, 12).unwrap();
        assert_eq!(url.as_str(), "https://example.com/mirror/quotes/page/12/");
    }
}
