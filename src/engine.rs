// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The cosine-similarity scoring pass.
//!
//! Each indexed document is a vector in term space: one dimension per
//! distinct word, the coordinate its frequency. A query is projected into
//! the same space and scored against every indexed vector by
//! `dot / (|query| * |doc|)`. Raw term counts only, no IDF weighting - two
//! documents score high when they use the same words in the same
//! proportions, however common those words are elsewhere.
//!
//! Magnitudes are computed once at indexing time. The dot product iterates
//! the indexed document's terms and looks each up in the query, so words the
//! query mentions but the document never uses cost nothing.

use crate::concordance::{Concordance, TokenFilter};

/// Euclidean norm of a concordance's frequency vector: `sqrt(sum count^2)`.
///
/// Exactly 0.0 iff the concordance has no surviving terms.
pub fn magnitude(concordance: &Concordance) -> f64 {
    let sum: f64 = concordance
        .terms()
        .map(|(count, _)| {
            let count = f64::from(count);
            count * count
        })
        .sum();
    sum.sqrt()
}

/// One indexed document: its concordance plus the precomputed magnitude.
#[derive(Debug, Clone)]
struct Indexed {
    concordance: Concordance,
    magnitude: f64,
}

/// A scored search result borrowing its source document from the index.
///
/// The borrow ties the result list's lifetime to the engine, so the index
/// cannot be mutated while results are alive.
#[derive(Debug, Clone, Copy)]
pub struct Match<'a> {
    /// Cosine similarity in `(0, 1]`. Exact zeros never make it into results.
    pub score: f64,
    /// The indexed document this score belongs to.
    pub concordance: &'a Concordance,
}

/// The similarity engine: an append-only list of indexed concordances.
///
/// Single-threaded by design. `index` takes `&mut self` and `search` borrows
/// `&self` for as long as its results live, which is exactly the
/// multi-reader/single-writer discipline the scoring pass requires.
#[derive(Debug, Default)]
pub struct VectorSearch {
    entries: Vec<Indexed>,
}

impl VectorSearch {
    /// Create an engine with an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document to the index, precomputing its magnitude.
    ///
    /// No de-duplication: indexing the same text twice yields two entries.
    pub fn index(&mut self, concordance: Concordance) {
        let magnitude = magnitude(&concordance);
        self.entries.push(Indexed {
            concordance,
            magnitude,
        });
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Score `query_text` against every indexed document.
    ///
    /// The query is tokenized with the default [`TokenFilter`]. Entries where
    /// either vector is empty are skipped (zero denominator), and entries
    /// scoring exactly 0 are dropped rather than reported - no shared terms
    /// means no relation, not a zero-score result.
    ///
    /// With `ordered`, results sort by descending score; equal scores keep
    /// index-insertion order (the sort is stable). Without it, results stay
    /// in index-insertion order.
    pub fn search(&self, query_text: &str, ordered: bool) -> Vec<Match<'_>> {
        self.search_with_filter(query_text, ordered, &TokenFilter::default())
    }

    /// [`search`](Self::search) with an explicit token filter for the query.
    ///
    /// Use this when the index was built under a non-default filter, so the
    /// query lands in the same term space.
    pub fn search_with_filter(
        &self,
        query_text: &str,
        ordered: bool,
        filter: &TokenFilter,
    ) -> Vec<Match<'_>> {
        let query = Concordance::with_filter(query_text, filter);
        let query_magnitude = magnitude(&query);

        let mut results: Vec<Match<'_>> = Vec::new();
        for entry in &self.entries {
            let denominator = query_magnitude * entry.magnitude;
            if denominator == 0.0 {
                continue;
            }

            // Dot product over the indexed document's terms only; query-only
            // words contribute nothing and are never visited.
            let dot: f64 = entry
                .concordance
                .terms()
                .map(|(count, word)| f64::from(count) * f64::from(query.frequency(word)))
                .sum();

            let score = dot / denominator;
            if score == 0.0 {
                continue;
            }
            results.push(Match {
                score,
                concordance: &entry.concordance,
            });
        }

        if ordered {
            // Stable sort: ties between equal scores keep insertion order.
            // Counts are finite and the denominator is nonzero here, so no
            // NaN can reach total_cmp.
            results.sort_by(|a, b| b.score.total_cmp(&a.score));
        }
        results
    }
}
