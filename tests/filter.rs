// tests/filter.rs
//
// Category filter semantics: fast path, inclusion, exclusion precedence,
// order preservation.

use std::collections::BTreeMap;

use mala_scrape::data::{CategoryLists, SearchHit};
use mala_scrape::filter::{filter_hits, Exclude, Include};

fn hit(name: &str) -> SearchHit {
    SearchHit {
        ordinal: String::from("1"),
        family: String::new(),
        mcid: String::new(),
        name: String::from(name),
        mifts: String::new(),
        score: String::new(),
    }
}

fn lists(pairs: &[(&str, &[&str])]) -> CategoryLists {
    let mut m = BTreeMap::new();
    for (category, names) in pairs {
        m.insert(
            String::from(*category),
            names.iter().map(|n| String::from(*n)).collect(),
        );
    }
    m
}

#[test]
fn defaults_return_input_unchanged() {
    let hits = vec![hit("A"), hit("B"), hit("C")];
    let lists = lists(&[("X", &["A"])]);
    let out = filter_hits(hits.clone(), &lists, &Include::All, &Exclude::None);
    assert_eq!(out, hits);
}

#[test]
fn empty_include_list_behaves_like_all() {
    let hits = vec![hit("A"), hit("B")];
    let lists = lists(&[("X", &["A", "B"])]);
    let out = filter_hits(
        hits.clone(),
        &lists,
        &Include::Categories(Vec::new()),
        &Exclude::None,
    );
    assert_eq!(out, hits);
}

#[test]
fn include_one_category_drops_the_rest() {
    // filter(rows=[A,B,C], categories={X:[A,C], Y:[B]}, included=[X]) -> A, C
    let hits = vec![hit("A"), hit("B"), hit("C")];
    let lists = lists(&[("X", &["A", "C"]), ("Y", &["B"])]);
    let out = filter_hits(
        hits,
        &lists,
        &Include::Categories(vec![String::from("X")]),
        &Exclude::None,
    );
    assert_eq!(out, vec![hit("A"), hit("C")]);
}

#[test]
fn exclusion_beats_inclusion() {
    // included=[X,Y], excluded=[Y] -> B rejected despite Y being included
    let hits = vec![hit("A"), hit("B"), hit("C")];
    let lists = lists(&[("X", &["A", "C"]), ("Y", &["B"])]);
    let out = filter_hits(
        hits,
        &lists,
        &Include::Categories(vec![String::from("X"), String::from("Y")]),
        &Exclude::Categories(vec![String::from("Y")]),
    );
    assert_eq!(out, vec![hit("A"), hit("C")]);
}

#[test]
fn name_outside_every_included_list_is_dropped() {
    let hits = vec![hit("Unlisted")];
    let lists = lists(&[("X", &["A"])]);
    let out = filter_hits(
        hits,
        &lists,
        &Include::Categories(vec![String::from("X")]),
        &Exclude::None,
    );
    assert!(out.is_empty());
}

#[test]
fn exclusion_applies_even_with_include_all() {
    let hits = vec![hit("A"), hit("B")];
    let lists = lists(&[("X", &["A", "B"]), ("Y", &["B"])]);
    let out = filter_hits(
        hits,
        &lists,
        &Include::All,
        &Exclude::Categories(vec![String::from("Y")]),
    );
    assert_eq!(out, vec![hit("A")]);
}

#[test]
fn survivors_keep_relative_order() {
    let hits = vec![hit("C"), hit("A"), hit("D"), hit("B")];
    let lists = lists(&[("X", &["A", "B", "C", "D"]), ("Y", &["A"])]);
    let out = filter_hits(
        hits,
        &lists,
        &Include::Categories(vec![String::from("X")]),
        &Exclude::Categories(vec![String::from("Y")]),
    );
    let names: Vec<&str> = out.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["C", "D", "B"]);
}

#[test]
fn unknown_category_names_contribute_nothing() {
    let hits = vec![hit("A")];
    let lists = lists(&[("X", &["A"])]);
    // Unknown include -> empty included set -> everything dropped.
    let out = filter_hits(
        hits.clone(),
        &lists,
        &Include::Categories(vec![String::from("Nope")]),
        &Exclude::None,
    );
    assert!(out.is_empty());

    // Unknown exclude -> empty excluded set -> nothing extra dropped.
    let out = filter_hits(
        hits.clone(),
        &lists,
        &Include::Categories(vec![String::from("X")]),
        &Exclude::Categories(vec![String::from("Nope")]),
    );
    assert_eq!(out, hits);
}
