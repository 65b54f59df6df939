// src/scrape/mod.rs
//! Page-specific scraping for MalaCards. Each submodule owns one page type:
//! where the data lives in the HTML and how to shape it into typed rows.
//! Fetch timing, filtering and output live in higher layers (`runner`, `cli`).

pub mod categories;
pub mod search;

pub use categories::fetch_lists;
pub use search::check_gene;
