//! Shared test utilities and fixtures.

#![allow(dead_code)]

use talpa::{Concordance, VectorSearch};

/// A small corpus with known term overlaps, used across the scenario tests.
pub const FRUIT_CORPUS: [&str; 4] = [
    "apple pie and apple cider",
    "banana bread recipe",
    "cider press maintenance guide",
    "pie crust secrets, apple or otherwise",
];

/// Build an engine indexing each text as one document.
pub fn engine_of(texts: &[&str]) -> VectorSearch {
    let mut engine = VectorSearch::new();
    for text in texts {
        engine.index(Concordance::new(text));
    }
    engine
}

/// Scores from a result list, in result order.
pub fn scores(results: &[talpa::Match<'_>]) -> Vec<f64> {
    results.iter().map(|m| m.score).collect()
}

/// Original texts from a result list, in result order.
pub fn originals<'a>(results: &[talpa::Match<'a>]) -> Vec<&'a str> {
    results.iter().map(|m| m.concordance.original()).collect()
}
