// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The talpa binary: read corpus files, rank them against a query document,
//! print the relations.
//!
//! All file reading and formatting lives here. The library core only ever
//! receives raw strings and returns scored matches.

use clap::Parser;
use serde::Serialize;
use std::fs;

use talpa::{Concordance, VectorSearch};

mod cli;
use cli::{display, Cli};

/// One row of `--json` output: the score plus the (already truncated) text.
#[derive(Serialize)]
struct JsonMatch {
    score: f64,
    text: String,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let mut engine = VectorSearch::new();
    for path in &cli.corpus {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read corpus file '{}': {}", path, e))?;
        engine.index(Concordance::new(&text));
    }

    let query = read_query(cli)?;

    if !cli.json {
        display::print_searching(engine.len());
    }

    let mut results = engine.search(&query, !cli.dont_sort);
    if let Some(limit) = cli.limit {
        results.truncate(limit);
    }

    if cli.json {
        let rows: Vec<JsonMatch> = results
            .iter()
            .map(|m| JsonMatch {
                score: m.score,
                text: display::truncate_text(m.concordance.original(), cli.text_length),
            })
            .collect();
        let json = serde_json::to_string_pretty(&rows)
            .map_err(|e| format!("Failed to serialize results: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    display::print_summary(results.len());
    for (position, result) in results.iter().enumerate() {
        display::print_match(position + 1, result, cli.text_length);
    }
    Ok(())
}

/// Resolve the query document: `--file` wins, otherwise the positional words
/// joined with single spaces. Neither present is a usage error.
fn read_query(cli: &Cli) -> Result<String, String> {
    if let Some(path) = &cli.file {
        return fs::read_to_string(path)
            .map_err(|e| format!("Failed to read query file '{}': {}", path, e));
    }
    if cli.words.is_empty() {
        return Err(
            "A search document must be provided (inline words or --file <FILE>)".to_string(),
        );
    }
    Ok(cli.words.join(" "))
}
