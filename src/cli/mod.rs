// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the talpa command-line interface.
//!
//! One flat command: index some corpus files, give a query document (inline
//! words or a file), get a ranked list of relations back. The core never
//! sees a file path - this layer reads everything into strings first and
//! formats the results afterwards.

pub mod display;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "talpa",
    about = "Rank documents against a query by term-frequency cosine similarity",
    version
)]
pub struct Cli {
    /// Index a corpus file (repeatable, one document per file)
    #[arg(short = 'c', long = "corpus", value_name = "FILE")]
    pub corpus: Vec<String>,

    /// Read the query document from a file instead of the command line
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<String>,

    /// Keep results in indexing order instead of ranking by score
    #[arg(long = "dont-sort")]
    pub dont_sort: bool,

    /// Characters of source text to show per result
    #[arg(long, value_name = "N", default_value = "100")]
    pub text_length: usize,

    /// Maximum number of results to display
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Emit results as JSON instead of the human-readable display
    #[arg(long)]
    pub json: bool,

    /// Query document given inline as words
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,
}
