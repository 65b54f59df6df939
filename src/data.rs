// src/data.rs
//
// Typed rows for the two MalaCards tables we read, plus the per-gene report.
// All fields are carried as opaque strings; Name is the only join key.

use std::collections::BTreeMap;

/// One row of a category listing page (5 columns).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiseaseEntry {
    pub ordinal: String,
    pub family: String,
    pub mcid: String,
    pub name: String,
    pub mifts: String,
}

/// One data row of a search results page (6 columns; the page's blank
/// spacer cell is already dropped).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchHit {
    pub ordinal: String,
    pub family: String,
    pub mcid: String,
    pub name: String,
    pub mifts: String,
    pub score: String,
}

/// Everything scraped for one category: the structured table and the flat
/// disease-name list derived from its Name column.
#[derive(Clone, Debug, Default)]
pub struct CategoryData {
    pub entries: Vec<DiseaseEntry>,
}

impl CategoryData {
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }
}

/// Category name -> scraped data. Built once per run, read-only afterward.
pub type CategoryTables = BTreeMap<String, CategoryData>;

/// Category name -> flat disease-name list. What the filter consumes.
pub type CategoryLists = BTreeMap<String, Vec<String>>;

/// Project the name lists out of fully scraped category data.
pub fn name_lists(tables: &CategoryTables) -> CategoryLists {
    tables
        .iter()
        .map(|(category, data)| (category.clone(), data.names()))
        .collect()
}

/// Outcome of checking one gene. A single shape; callers project the
/// view they need instead of picking a return type up front.
#[derive(Clone, Debug, Default)]
pub struct GeneReport {
    pub gene: String,
    pub hits: Vec<SearchHit>,
}

impl GeneReport {
    pub fn empty(gene: &str) -> Self {
        Self { gene: s!(gene), hits: Vec::new() }
    }

    pub fn count(&self) -> usize {
        self.hits.len()
    }

    pub fn names(&self) -> Vec<&str> {
        self.hits.iter().map(|h| h.name.as_str()).collect()
    }

    /// `"; "`-joined disease names, the delimited projection.
    pub fn names_joined(&self) -> String {
        self.names().join("; ")
    }
}
