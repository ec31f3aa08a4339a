use serde::Deserialize;

/// Main configuration structure for Quote-Harvest
///
/// Every field has a default, so a partial configuration file (or none at all)
/// yields a working configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scrape: ScrapeConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// Scrape behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Root of the site holding the paginated listings
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Number of listing pages to fetch, starting from page 1
    #[serde(rename = "max-pages")]
    pub max_pages: usize,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://quotes.toscrape.com/".to_string(),
            max_pages: 10,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name sent in the User-Agent header
    #[serde(rename = "scraper-name")]
    pub scraper_name: String,

    /// Version sent in the User-Agent header
    #[serde(rename = "scraper-version")]
    pub scraper_version: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            scraper_name: "QuoteHarvest".to_string(),
            scraper_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the JSON file the scrape result is written to
    #[serde(rename = "json-path")]
    pub json_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json_path: "quotes.json".to_string(),
        }
    }
}
