// src/params.rs
use std::path::PathBuf;

use crate::csv::Delim;
use crate::filter::{Exclude, Include};

/// All MalaCards endpoints hang off this.
pub const BASE_URL: &str = "https://www.malacards.org";

/// MalaCards 403s default client user agents; send a browser-like one.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

/// Pause between search requests, to stay under the site's rate limit (HTTP 429).
pub const REQUEST_DELAY_MS: u64 = 500;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryKind {
    /// One gene, result printed to stdout.
    Gene(String),
    /// CSV file of genes, result written next to it.
    List(PathBuf),
}

#[derive(Clone)]
pub struct Params {
    pub query: QueryKind,            // single gene or input file
    pub elite_only: bool,            // curated associations only ([EL] vs [GE])
    pub include: Include,            // disease categories to keep
    pub exclude: Exclude,            // disease categories to reject
    pub gene_column: Option<String>, // column holding gene names (None = first)
    pub out: Option<PathBuf>,        // override derived output path
    pub format: Delim,
}

impl Params {
    pub fn new(query: QueryKind) -> Self {
        Self {
            query,
            elite_only: false,
            include: Include::All,
            exclude: Exclude::None,
            gene_column: None,
            out: None,
            format: Delim::Csv,
        }
    }
}
