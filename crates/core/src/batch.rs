//! Parallel parsing of independent pages.

use crate::page::Page;
use crate::parse::{ParseOptions, parse_page};
use crate::source::SourceBlock;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Options for batch parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchOptions {
    /// Maximum number of threads to use. Defaults to rayon's global pool.
    pub max_threads: Option<usize>,
}

/// Parses every page in parallel. Output order matches input order.
pub fn parse_pages(
    sources: &[&SourceBlock],
    options: &ParseOptions,
    batch: &BatchOptions,
) -> Vec<Page> {
    // Configure thread pool if max_threads is specified
    let pool = batch.max_threads.and_then(|max_threads| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(max_threads)
            .build()
            .map_err(|err| log::warn!("falling back to global rayon pool: {err}"))
            .ok()
    });

    let parse_all = || {
        sources
            .par_iter()
            .map(|source| parse_page(source, options))
            .collect::<Vec<Page>>()
    };

    let pages = match pool {
        Some(pool) => pool.install(parse_all),
        None => parse_all(),
    };
    log::debug!("batch parsed {} pages", pages.len());
    pages
}
