// src/core/html.rs

// Table extraction. The site's pages are read as "every <table>, every <tr>,
// the trimmed text of every <td>"; anything more specific lives in scrape/*.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

fn cell_text(td: ElementRef) -> String {
    normalize_ws(&td.text().collect::<String>())
}

/// Every table in the document, as rows of trimmed `<td>` text.
/// A header row made of `<th>` cells comes out as an empty row; callers
/// skip the first row when building typed tables.
pub fn extract_tables(doc: &str) -> Vec<Vec<Vec<String>>> {
    let html = Html::parse_document(doc);
    let table_sel = Selector::parse("table").unwrap();
    let tr_sel = Selector::parse("tr").unwrap();
    let td_sel = Selector::parse("td").unwrap();

    html.select(&table_sel)
        .map(|table| {
            table
                .select(&tr_sel)
                .map(|tr| tr.select(&td_sel).map(cell_text).collect())
                .collect()
        })
        .collect()
}

/// First table only. No table in the document -> no rows, not an error.
pub fn first_table(doc: &str) -> Vec<Vec<String>> {
    extract_tables(doc).into_iter().next().unwrap_or_default()
}
