//! JSON export for scrape results
//!
//! Writes the quote list as a single pretty-printed JSON array. The bytes land in a
//! temporary sibling file first and are renamed into place, so a failed write never
//! leaves a truncated output file behind.

use crate::scrape::Quote;
use crate::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;

/// Serializes quotes as a pretty-printed JSON array
///
/// Uses 4-space indentation. Non-ASCII characters are written as raw UTF-8, not
/// `\u` escapes.
pub fn quotes_to_json(quotes: &[Quote]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    quotes.serialize(&mut serializer)?;
    Ok(buf)
}

/// Writes the quote list to `path` as a JSON array
///
/// Overwrites any existing file at `path`. The content is written to a `.tmp`
/// sibling and renamed over the target, so either the previous file survives intact
/// or the new one replaces it whole.
///
/// # Arguments
///
/// * `quotes` - The ordered quote list to export
/// * `path` - Target path of the JSON file
///
/// # Returns
///
/// * `Ok(())` - File written and renamed into place
/// * `Err(HarvestError)` - Serialization or IO failure
pub fn write_quotes(quotes: &[Quote], path: &Path) -> Result<()> {
    let json = quotes_to_json(quotes)?;

    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    let tmp_path = std::path::PathBuf::from(tmp_path);

    fs::write(&tmp_path, &json)?;
    fs::rename(&tmp_path, path)?;

    tracing::info!("Wrote {} quotes to {}", quotes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quotes() -> Vec<Quote> {
        vec![
            Quote {
                id: 1,
                text: "Be yourself.".to_string(),
                author: "Anon".to_string(),
                tags: vec!["life".to_string()],
                page_number: 1,
            },
            Quote {
                id: 2,
                text: "Carpe diem.".to_string(),
                author: "Horace".to_string(),
                tags: vec!["latin".to_string(), "time".to_string()],
                page_number: 1,
            },
        ]
    }

    #[test]
    fn test_empty_list_serializes_to_empty_array() {
        let json = quotes_to_json(&[]).unwrap();
        assert_eq!(json, b"[]");
    }

    #[test]
    fn test_json_uses_four_space_indent() {
        let json = quotes_to_json(&sample_quotes()).unwrap();
        let text = String::from_utf8(json).unwrap();

        assert!(text.starts_with("[\n    {\n        \"id\": 1,"));
    }

    #[test]
    fn test_non_ascii_written_unescaped() {
        let quotes = vec![Quote {
            id: 1,
            text: "“Sei du selbst.”".to_string(),
            author: "Müller".to_string(),
            tags: vec![],
            page_number: 1,
        }];

        let json = quotes_to_json(&quotes).unwrap();
        let text = String::from_utf8(json).unwrap();

        assert!(text.contains("“Sei du selbst.”"));
        assert!(text.contains("Müller"));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.json");

        let quotes = sample_quotes();
        write_quotes(&quotes, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: Vec<Quote> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, quotes);
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.json");

        write_quotes(&sample_quotes(), &path).unwrap();
        write_quotes(&[], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[]");
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.json");

        write_quotes(&sample_quotes(), &path).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["quotes.json"]);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let result = write_quotes(
            &sample_quotes(),
            Path::new("/nonexistent/dir/quotes.json"),
        );
        assert!(result.is_err());
    }
}
