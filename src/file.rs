// src/file.rs

use std::{
    error::Error,
    fs,
    io,
    path::{Path, PathBuf},
};

use crate::core::sanitize::sanitize_component;
use crate::csv::{self, Delim};
use crate::data::GeneReport;
use crate::filter::{Exclude, Include};

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/* ---------------- Input: gene lists ---------------- */

/// Pull the gene names out of parsed input rows. The first row is the
/// header; `column` picks one by name, `None` means the first column.
pub fn gene_column(rows: &[Vec<String>], column: Option<&str>) -> Result<Vec<String>, Box<dyn Error>> {
    let Some((header, data)) = rows.split_first() else {
        return Err("Input file is empty".into());
    };

    let ix = match column {
        None => 0,
        Some(name) => header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| format!("Column '{}' not found in input header", name))?,
    };

    Ok(data
        .iter()
        .filter_map(|row| row.get(ix))
        .filter(|cell| !cell.is_empty())
        .cloned()
        .collect())
}

/// Read a delimited gene-list file and extract the gene column.
pub fn read_gene_list(
    path: &Path,
    column: Option<&str>,
    delim: Delim,
) -> Result<Vec<String>, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
    gene_column(&csv::parse_rows(&text, delim), column)
}

/* ---------------- Output: batch results ---------------- */

/// Derive the output path from the input path plus a suffix naming the
/// category selections, e.g. `genes_results_including-Ear_excluding-Rare.csv`.
/// Category names are sanitized so "Smell/Taste" cannot split the path.
pub fn results_path(input: &Path, include: &Include, exclude: &Exclude, delim: Delim) -> PathBuf {
    let mut inc = s!("including");
    for name in include.names() {
        inc = join!(inc, "-", &sanitize_component(name));
    }
    let mut exc = s!("excluding");
    for name in exclude.names() {
        exc = join!(exc, "-", &sanitize_component(name));
    }

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| s!("genes"));
    let file = format!("{}_results_{}_{}.{}", stem, inc, exc, delim.ext());
    input.with_file_name(file)
}

/// Write one row per gene: Gene, Results_Count, Results_List.
pub fn write_results(path: &Path, reports: &[GeneReport], delim: Delim) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let headers = Some(vec![s!("Gene"), s!("Results_Count"), s!("Results_List")]);
    let rows: Vec<Vec<String>> = reports
        .iter()
        .map(|r| vec![r.gene.clone(), r.count().to_string(), r.names_joined()])
        .collect();

    fs::write(path, csv::rows_to_string(&rows, &headers, delim))?;
    Ok(())
}
