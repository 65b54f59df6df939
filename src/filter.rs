// src/filter.rs
//
// Category filtering over search hits. Pure: category lists come in as a
// parameter, never fetched from here.

use std::collections::HashSet;

use crate::data::{CategoryLists, SearchHit};

/// Categories whose diseases survive the filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Include {
    All,
    /// An empty list behaves like `All`.
    Categories(Vec<String>),
}

/// Categories whose diseases are rejected, even when also included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Exclude {
    None,
    Categories(Vec<String>),
}

impl Include {
    pub fn is_all(&self) -> bool {
        match self {
            Include::All => true,
            Include::Categories(names) => names.is_empty(),
        }
    }

    pub fn names(&self) -> &[String] {
        match self {
            Include::All => &[],
            Include::Categories(names) => names,
        }
    }
}

impl Exclude {
    pub fn is_none(&self) -> bool {
        match self {
            Exclude::None => true,
            Exclude::Categories(names) => names.is_empty(),
        }
    }

    pub fn names(&self) -> &[String] {
        match self {
            Exclude::None => &[],
            Exclude::Categories(names) => names,
        }
    }
}

fn union_of<'a>(lists: &'a CategoryLists, categories: &[String]) -> HashSet<&'a str> {
    let mut set = HashSet::new();
    for category in categories {
        // Unknown category names contribute nothing.
        if let Some(names) = lists.get(category) {
            set.extend(names.iter().map(String::as_str));
        }
    }
    set
}

/// Keep hits whose disease name is in the union of the included categories'
/// lists and not in the union of the excluded ones. Exclusion wins.
/// Relative order of survivors is preserved.
pub fn filter_hits(
    hits: Vec<SearchHit>,
    lists: &CategoryLists,
    include: &Include,
    exclude: &Exclude,
) -> Vec<SearchHit> {
    // Both at default: nothing to do.
    if include.is_all() && exclude.is_none() {
        return hits;
    }

    let included: HashSet<&str> = if include.is_all() {
        lists.values().flatten().map(String::as_str).collect()
    } else {
        union_of(lists, include.names())
    };
    let excluded = union_of(lists, exclude.names());

    hits.into_iter()
        .filter(|hit| {
            let name = hit.name.as_str();
            included.contains(name) && !excluded.contains(name)
        })
        .collect()
}
