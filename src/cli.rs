// src/cli.rs

use std::{
    env,
    error::Error,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use crate::categories;
use crate::core::net;
use crate::csv::Delim;
use crate::file;
use crate::filter::{Exclude, Include};
use crate::params::{Params, QueryKind};
use crate::progress::Progress;
use crate::runner;

pub enum Mode {
    /// Arguments given: run straight from flags.
    Flags(Params),
    /// Bare invocation: prompt for everything, like the original session.
    Interactive,
}

// Decide flags vs interactive
pub fn detect_mode() -> Result<Mode, Box<dyn Error>> {
    if env::args().len() == 1 {
        // only program name
        return Ok(Mode::Interactive);
    }
    Ok(Mode::Flags(parse_cli()?))
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = match detect_mode()? {
        Mode::Flags(p) => p,
        Mode::Interactive => prompt_params()?,
    };
    execute(&params)
}

/* ---------------- Flag parsing ---------------- */

fn parse_cli() -> Result<Params, Box<dyn Error>> {
    let mut query: Option<QueryKind> = None;
    let mut params = Params::new(QueryKind::Gene(s!()));

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--gene" => {
                let v = args.next().ok_or("Missing value for --gene")?;
                query = Some(QueryKind::Gene(v)); }
            "--list" => {
                let v = args.next().ok_or("Missing value for --list")?;
                query = Some(QueryKind::List(PathBuf::from(v))); }
            "--column" => params.gene_column = Some(args.next().ok_or("Missing value for --column")?),
            "--elite" => params.elite_only = true,
            "--include" => {
                let v = args.next().ok_or("Missing value for --include")?;
                params.include = Include::Categories(parse_name_list(&v)); }
            "--exclude" => {
                let v = args.next().ok_or("Missing value for --exclude")?;
                params.exclude = Exclude::Categories(parse_name_list(&v)); }
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    params.query = query.ok_or("Specify --gene <name> or --list <file>")?;
    Ok(params)
}

fn parse_name_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

/* ---------------- Interactive session ---------------- */

fn prompt(msg: &str) -> Result<String, Box<dyn Error>> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut line = s!();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Read category names one per line; a blank line ends the list.
fn prompt_category_list(label: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let mut names = Vec::new();
    loop {
        let name = prompt(&format!("\tEnter {} disease category:  ", label))?;
        if name.is_empty() {
            return Ok(names);
        }
        names.push(name);
    }
}

fn prompt_params() -> Result<Params, Box<dyn Error>> {
    let kind = loop {
        let kind = prompt("Do you want to check a single gene or a whole list? Please enter \"gene\" or \"list\":  ")?;
        match kind.as_str() {
            "gene" | "list" => break kind,
            _ => println!("Unsupported input. Please try again."),
        }
    };

    let mut params = Params::new(QueryKind::Gene(s!()));

    println!("Please input the list of disease categories to INCLUDE in the search, or hit enter to use the default set.");
    let included = prompt_category_list("included")?;
    if !included.is_empty() {
        params.include = Include::Categories(included);
    }

    println!("Please input the list of disease categories to EXCLUDE from the search (matching entries are always rejected), or hit enter to specify none.");
    let excluded = prompt_category_list("excluded")?;
    if !excluded.is_empty() {
        params.exclude = Exclude::Categories(excluded);
    }

    params.elite_only = prompt("Query elite genes (causal, manually curated associations) only? (Y/N)  ")?
        .eq_ignore_ascii_case("y");

    params.query = if kind == "list" {
        let path = prompt("Enter the path to a CSV file containing the list of genes:  ")?;
        let column = prompt("Enter the column name containing the gene list, or hit enter to use the first column:  ")?;
        if !column.is_empty() {
            params.gene_column = Some(column);
        }
        QueryKind::List(PathBuf::from(path))
    } else {
        QueryKind::Gene(prompt("Enter the gene name to search:  ")?)
    };

    Ok(params)
}

/* ---------------- Execution ---------------- */

/// Console progress sink: status lines to stdout.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        println!("Checking {} genes...", total);
    }
    fn log(&mut self, msg: &str) {
        println!("{}", msg);
    }
    fn item_done(&mut self, gene: &str, count: usize) {
        println!("\t{}: {} matching diseases", gene, count);
    }
}

fn input_delim(path: &Path) -> Delim {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => Delim::Tsv,
        _ => Delim::Csv,
    }
}

pub fn execute(params: &Params) -> Result<(), Box<dyn Error>> {
    let client = net::client()?;
    let urls = categories::default_urls();
    let mut progress = ConsoleProgress;

    match &params.query {
        QueryKind::Gene(gene) => {
            let report = runner::check_single(
                &client, gene, params.elite_only,
                &params.include, &params.exclude,
                &urls, None, &mut progress,
            )?;
            println!("{}: {} matching diseases", report.gene, report.count());
            if report.count() > 0 {
                println!("{}", report.names_joined());
            }
        }
        QueryKind::List(path) => {
            let genes = file::read_gene_list(path, params.gene_column.as_deref(), input_delim(path))?;
            if genes.is_empty() {
                return Err(format!("No genes found in {}", path.display()).into());
            }

            let reports = runner::check_gene_list(
                &client, &genes, params.elite_only,
                &params.include, &params.exclude,
                &urls, None, &mut progress,
            )?;

            let out = params.out.clone().unwrap_or_else(|| {
                file::results_path(path, &params.include, &params.exclude, params.format)
            });
            file::write_results(&out, &reports, params.format)?;
            println!("Wrote {}", out.display());
        }
    }
    Ok(())
}
