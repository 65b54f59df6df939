// src/runner.rs
//
// Orchestration: resolve category lists once, then drive the per-gene
// checks sequentially with the fixed inter-request pause. No retries and
// no checkpointing; a mid-batch failure aborts the whole run.

use std::error::Error;
use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::categories::{CategorySelection, CategoryUrls};
use crate::data::{name_lists, CategoryLists, GeneReport};
use crate::filter::{Exclude, Include};
use crate::params::REQUEST_DELAY_MS;
use crate::progress::Progress;
use crate::scrape;

/// Fetch the name lists the given selections need.
/// With explicit include/exclude names, only their union is fetched;
/// otherwise every known category is.
pub fn fetch_relevant_lists(
    client: &Client,
    urls: &CategoryUrls,
    include: &Include,
    exclude: &Exclude,
    progress: &mut dyn Progress,
) -> Result<CategoryLists, Box<dyn Error>> {
    let mut relevant: Vec<String> = Vec::new();
    relevant.extend_from_slice(include.names());
    relevant.extend_from_slice(exclude.names());
    relevant.sort();
    relevant.dedup();

    let selection = if relevant.is_empty() {
        CategorySelection::All
    } else {
        CategorySelection::Named(relevant)
    };

    progress.log("No lists of diseases were given; pulling them from MalaCards...");
    let tables = scrape::fetch_lists(client, &selection, urls)?;
    progress.log("\tDone!");
    Ok(name_lists(&tables))
}

/// Check one gene, fetching the full default category set first when no
/// lists are supplied.
pub fn check_single(
    client: &Client,
    gene: &str,
    elite_only: bool,
    include: &Include,
    exclude: &Exclude,
    urls: &CategoryUrls,
    lists: Option<&CategoryLists>,
    progress: &mut dyn Progress,
) -> Result<GeneReport, Box<dyn Error>> {
    let fetched;
    let lists = match lists {
        Some(l) => l,
        None => {
            progress.log("No lists of diseases were given; pulling them from MalaCards...");
            let tables = scrape::fetch_lists(client, &CategorySelection::All, urls)?;
            progress.log("\tDone!");
            fetched = name_lists(&tables);
            &fetched
        }
    };
    scrape::check_gene(client, gene, elite_only, include, exclude, lists)
}

/// Check every gene in order. One report per gene; a fixed pause between
/// consecutive requests keeps the site's rate limiter quiet.
pub fn check_gene_list(
    client: &Client,
    genes: &[String],
    elite_only: bool,
    include: &Include,
    exclude: &Exclude,
    urls: &CategoryUrls,
    lists: Option<&CategoryLists>,
    progress: &mut dyn Progress,
) -> Result<Vec<GeneReport>, Box<dyn Error>> {
    let fetched;
    let lists = match lists {
        Some(l) => l,
        None => {
            fetched = fetch_relevant_lists(client, urls, include, exclude, progress)?;
            &fetched
        }
    };

    progress.begin(genes.len());
    let mut reports = Vec::with_capacity(genes.len());
    for (i, gene) in genes.iter().enumerate() {
        if i > 0 {
            thread::sleep(Duration::from_millis(REQUEST_DELAY_MS));
        }
        let report = scrape::check_gene(client, gene, elite_only, include, exclude, lists)?;
        progress.item_done(gene, report.count());
        reports.push(report);
    }
    progress.finish();
    Ok(reports)
}
