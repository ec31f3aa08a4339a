//! Output module for exporting scrape results
//!
//! This module handles serializing the final quote list to a JSON file.

mod json;

pub use json::{quotes_to_json, write_quotes};
