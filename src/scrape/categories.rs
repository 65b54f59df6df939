// src/scrape/categories.rs
//
// Category listing pages. One GET per category; the page's first table is
// the listing: # | Family | MCID | Name | MIFTS.

use std::error::Error;

use reqwest::blocking::Client;

use crate::categories::{CategorySelection, CategoryUrls};
use crate::core::{html, net};
use crate::data::{CategoryData, CategoryTables, DiseaseEntry};

const LISTING_COLS: usize = 5;

/// Shape one listing table into entries. First row is the header; rows that
/// do not carry the expected five cells are dropped rather than erroring,
/// so a malformed page degrades to an empty category.
pub fn entries_from_table(rows: Vec<Vec<String>>) -> Vec<DiseaseEntry> {
    rows.into_iter()
        .skip(1)
        .filter(|row| row.len() >= LISTING_COLS)
        .map(|mut row| {
            row.truncate(LISTING_COLS);
            let mut it = row.into_iter();
            DiseaseEntry {
                ordinal: it.next().unwrap_or_default(),
                family: it.next().unwrap_or_default(),
                mcid: it.next().unwrap_or_default(),
                name: it.next().unwrap_or_default(),
                mifts: it.next().unwrap_or_default(),
            }
        })
        .collect()
}

/// Fetch the selected categories. Network and HTTP failures propagate;
/// unknown category names are simply absent from the result.
pub fn fetch_lists(
    client: &Client,
    selection: &CategorySelection,
    urls: &CategoryUrls,
) -> Result<CategoryTables, Box<dyn Error>> {
    let mut out = CategoryTables::new();
    for (category, url) in selection.resolve(urls) {
        let doc = net::http_get(client, &url)?;
        let entries = entries_from_table(html::first_table(&doc));
        logf!("Category '{}': {} diseases", category, entries.len());
        out.insert(category, CategoryData { entries });
    }
    Ok(out)
}
