// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod categories;
pub mod cli;
pub mod core;
pub mod csv;
pub mod data;
pub mod file;
pub mod filter;
pub mod params;
pub mod progress;
pub mod runner;
pub mod scrape;
