// src/scrape/search.rs
//
// Gene search pages. The first table on a results page is site chrome; the
// second holds the associations. Within it the site interleaves blank spacer
// rows at even indices, so only odd-indexed rows carry data:
// # | (spacer) | Family | MCID | Name | MIFTS | Score.

use std::error::Error;

use reqwest::blocking::Client;

use crate::core::{html, net};
use crate::data::{CategoryLists, GeneReport, SearchHit};
use crate::filter::{filter_hits, Exclude, Include};
use crate::params::BASE_URL;

const SEARCH_COLS: usize = 7;

/// `[EL]` restricts to elite (manually curated causal) associations,
/// `[GE]` matches any associated gene. `pageSize=-1` disables paging.
pub fn search_url(gene: &str, elite_only: bool) -> String {
    let flag = if elite_only { "EL" } else { "GE" };
    format!(
        "{BASE_URL}/search/results?query=%5B{flag}%5D+%28{}%29&pageSize=-1",
        urlencoding::encode(gene)
    )
}

/// Extract the association hits from a results document.
/// `None` means "no data found" (fewer than two tables), which is not
/// an error: the caller reports a zero count.
pub fn parse_search_doc(doc: &str) -> Option<Vec<SearchHit>> {
    let tables = html::extract_tables(doc);
    if tables.len() < 2 {
        return None;
    }

    let rows = tables.into_iter().nth(1).unwrap_or_default();
    let hits = rows
        .into_iter()
        .enumerate()
        .filter(|(i, _)| i % 2 != 0) // even rows are blank spacers
        .filter_map(|(_, mut row)| {
            if row.len() < SEARCH_COLS {
                return None;
            }
            row.truncate(SEARCH_COLS);
            let mut it = row.into_iter();
            let ordinal = it.next()?;
            let _spacer = it.next()?;
            Some(SearchHit {
                ordinal,
                family: it.next()?,
                mcid: it.next()?,
                name: it.next()?,
                mifts: it.next()?,
                score: it.next()?,
            })
        })
        .collect();
    Some(hits)
}

/// Check one gene: fetch the search page, shape the hits, apply the
/// category filter. Category lists must already be fetched; `runner`
/// handles the fetch-on-demand contract.
pub fn check_gene(
    client: &Client,
    gene: &str,
    elite_only: bool,
    include: &Include,
    exclude: &Exclude,
    lists: &CategoryLists,
) -> Result<GeneReport, Box<dyn Error>> {
    let url = search_url(gene, elite_only);
    let doc = net::http_get(client, &url)?;

    let Some(hits) = parse_search_doc(&doc) else {
        logf!("Gene '{}': no data found", gene);
        return Ok(GeneReport::empty(gene));
    };

    let kept = filter_hits(hits, lists, include, exclude);
    logf!("Gene '{}': {} matching diseases", gene, kept.len());
    Ok(GeneReport { gene: s!(gene), hits: kept })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_encodes_gene_and_flag() {
        assert_eq!(
            search_url("GJB2", false),
            "https://www.malacards.org/search/results?query=%5BGE%5D+%28GJB2%29&pageSize=-1"
        );
        assert!(search_url("GJB2", true).contains("%5BEL%5D"));
        // Gene names with reserved characters must not break the query.
        assert!(search_url("HLA-DRB1/x", false).contains("HLA-DRB1%2Fx"));
    }

    #[test]
    fn fewer_than_two_tables_is_no_data() {
        assert!(parse_search_doc("<html><body></body></html>").is_none());
        assert!(parse_search_doc("<table><tr><td>only one</td></tr></table>").is_none());
    }
}
