// tests/extract.rs
//
// Fixture-HTML extraction: no live network. The search fixture mirrors the
// site layout: first table is chrome, second interleaves blank spacer rows
// (even indices) with 7-cell data rows (odd indices).

use mala_scrape::core::html;
use mala_scrape::scrape::categories::entries_from_table;
use mala_scrape::scrape::search::parse_search_doc;

fn data_row(ordinal: &str, family: &str, mcid: &str, name: &str, mifts: &str, score: &str) -> String {
    format!(
        "<tr><td>{ordinal}</td><td></td><td>{family}</td><td>{mcid}</td>\
         <td>{name}</td><td>{mifts}</td><td>{score}</td></tr>"
    )
}

fn search_page(data: &[(&str, &str, &str, &str, &str, &str)]) -> String {
    let mut body = String::from("<html><body><table><tr><td>site chrome</td></tr></table><table>");
    for (ordinal, family, mcid, name, mifts, score) in data {
        body.push_str("<tr><td></td></tr>"); // spacer at the even index
        body.push_str(&data_row(ordinal, family, mcid, name, mifts, score));
    }
    body.push_str("</table></body></html>");
    body
}

#[test]
fn odd_rows_are_the_data_set() {
    let page = search_page(&[
        ("1", "Deafness", "DFN001", "Deafness, Autosomal Recessive 1A", "51", "12.3"),
        ("2", "Keratitis", "KRT002", "Keratitis-Ichthyosis-Deafness Syndrome", "47", "9.1"),
        ("3", "Vohwinkel", "VHW003", "Vohwinkel Syndrome", "40", "5.5"),
    ]);

    let hits = parse_search_doc(&page).expect("two tables present");
    assert_eq!(hits.len(), 3);
    assert_eq!(hits[0].name, "Deafness, Autosomal Recessive 1A");
    assert_eq!(hits[0].ordinal, "1");
    assert_eq!(hits[1].mcid, "KRT002");
    assert_eq!(hits[2].score, "5.5");
    // The spacer cell between ordinal and family never shows up.
    assert_eq!(hits[0].family, "Deafness");
}

#[test]
fn single_table_page_is_no_data() {
    let page = "<html><body><table><tr><td>chrome only</td></tr></table></body></html>";
    assert!(parse_search_doc(page).is_none());
}

#[test]
fn tableless_page_is_no_data() {
    assert!(parse_search_doc("<html><body><h1>No results</h1></body></html>").is_none());
}

#[test]
fn second_table_with_no_data_rows_yields_zero_hits() {
    let page = search_page(&[]);
    let hits = parse_search_doc(&page).expect("two tables present");
    assert!(hits.is_empty());
}

#[test]
fn short_rows_in_the_results_table_are_skipped() {
    // A data-position row with too few cells degrades to "not a hit".
    let page = "<html><body>\
        <table><tr><td>chrome</td></tr></table>\
        <table>\
          <tr><td></td></tr>\
          <tr><td>1</td><td>truncated</td></tr>\
        </table></body></html>";
    let hits = parse_search_doc(page).expect("two tables present");
    assert!(hits.is_empty());
}

#[test]
fn category_listing_end_to_end() {
    let page = "<html><body><table>\
        <tr><th>#</th><th>Family</th><th>MCID</th><th>Name</th><th>MIFTS</th></tr>\
        <tr><td>1</td><td>Deafness</td><td>DFN001</td><td>Deafness</td><td>51</td></tr>\
        <tr><td>2</td><td>Otosclerosis</td><td>OTS002</td><td>Otosclerosis</td><td>44</td></tr>\
        </table></body></html>";
    let entries = entries_from_table(html::first_table(page));
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "Deafness");
    assert_eq!(entries[1].ordinal, "2");
}
