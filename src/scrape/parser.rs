//! HTML parser for extracting quote records
//!
//! Each listing page repeats a `div.quote` container holding one `span.text`, one
//! `small.author`, and zero or more `a.tag` elements. Blocks are extracted in
//! document order; a block missing a required element fails the whole parse call.

use crate::{HarvestError, Result};
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

/// One extracted quote record
///
/// `id` is global across a run: 1-based, assigned in parse order, ascending page
/// number first and document order within the page second.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: u64,
    pub text: String,
    pub author: String,
    pub tags: Vec<String>,
    pub page_number: usize,
}

/// Parses one listing page and extracts its quotes in document order
///
/// `next_id` is the run-wide id counter, advanced once per extracted quote. Callers
/// must invoke this in ascending page order so ids stay aligned with page order.
///
/// # Arguments
///
/// * `html` - Raw HTML of the listing page
/// * `page_number` - 1-based index of the page being parsed
/// * `next_id` - Run-wide id counter
///
/// # Returns
///
/// * `Ok(Vec<Quote>)` - All quotes on the page, possibly empty
/// * `Err(HarvestError)` - A quote block was missing a required element
pub fn parse_quotes(html: &str, page_number: usize, next_id: &mut u64) -> Result<Vec<Quote>> {
    let document = Html::parse_document(html);

    let quote_selector = create_selector("div.quote")?;
    let text_selector = create_selector("span.text")?;
    let author_selector = create_selector("small.author")?;
    let tag_selector = create_selector("a.tag")?;

    let mut quotes = Vec::new();
    for block in document.select(&quote_selector) {
        let text = required_text(block, &text_selector, "span.text", page_number)?;
        let author = required_text(block, &author_selector, "small.author", page_number)?;

        // Tags in document order, duplicates preserved, possibly empty
        let tags = block
            .select(&tag_selector)
            .map(|tag| tag.text().collect::<String>())
            .collect();

        quotes.push(Quote {
            id: *next_id,
            text,
            author,
            tags,
            page_number,
        });
        *next_id += 1;
    }

    Ok(quotes)
}

/// Extracts the full inner text of the first `selector` match inside `block`
fn required_text(
    block: ElementRef,
    selector: &Selector,
    field: &'static str,
    page: usize,
) -> Result<String> {
    block
        .select(selector)
        .next()
        .map(|element| element.text().collect::<String>())
        .ok_or(HarvestError::MissingField { field, page })
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| HarvestError::Selector(sel_str.into()))
}
