// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Building a document's concordance: its word → frequency profile.
//!
//! Tokenization here is deliberately dumb. Split on single spaces, trim each
//! token, strip a small punctuation set, drop stopwords. No stemming, no
//! case folding of stored keys, no Unicode decomposition. `"Cat"` and
//! `"cat"` are different dimensions of the vector space, and that's the
//! point: the engine compares documents exactly as written.
//!
//! The filter sets live in [`TokenFilter`] rather than being baked into the
//! builder, so tests can swap them without touching this module.

use std::collections::{HashMap, HashSet};

/// Words excluded from the vector space entirely. Matched case-insensitively.
pub const STOPWORDS: [&str; 6] = ["the", "for", "an", "a", "with", "without"];

/// Characters removed from every token, wherever they appear.
pub const STRIP_CHARS: [char; 6] = [',', '.', '(', ')', '[', ']'];

/// Token filtering configuration: which words to drop, which characters to strip.
///
/// Immutable once built. [`TokenFilter::default`] carries the fixed
/// [`STOPWORDS`] and [`STRIP_CHARS`] sets; construct one by hand to override
/// either set in tests.
#[derive(Debug, Clone)]
pub struct TokenFilter {
    /// Lowercased stopwords. Tokens whose lowercased form appears here are
    /// discarded entirely.
    pub stopwords: HashSet<String>,
    /// Characters removed from tokens before the stopword test.
    pub strip_chars: HashSet<char>,
}

impl Default for TokenFilter {
    fn default() -> Self {
        Self {
            stopwords: STOPWORDS.iter().map(|w| (*w).to_string()).collect(),
            strip_chars: STRIP_CHARS.iter().copied().collect(),
        }
    }
}

impl TokenFilter {
    /// Normalize a single raw token. Returns `None` if the token is filtered
    /// out (empty after stripping, or a stopword).
    ///
    /// Order matters: trim, then strip punctuation, then test the lowercased
    /// form against the stopword set. `"The,"` strips to `"The"` and is
    /// dropped; `"(cats)"` strips to `"cats"` and survives.
    fn normalize(&self, token: &str) -> Option<String> {
        let stripped: String = token
            .trim()
            .chars()
            .filter(|c| !self.strip_chars.contains(c))
            .collect();
        if stripped.is_empty() {
            return None;
        }
        if self.stopwords.contains(&stripped.to_lowercase()) {
            return None;
        }
        Some(stripped)
    }
}

/// A document's term-frequency profile.
///
/// Keys are normalized tokens exactly as they appeared (case preserved),
/// values are occurrence counts. Iteration via [`Concordance::terms`] visits
/// entries in first-occurrence order; that order is stable but carries no
/// weight in scoring.
#[derive(Debug, Clone)]
pub struct Concordance {
    original: String,
    counts: HashMap<String, u32>,
    // First-occurrence order of surviving tokens. Vocabulary kept as a plain
    // Vec<String>, same as the index vocabulary table.
    order: Vec<String>,
}

impl Concordance {
    /// Build a concordance from raw text using the default [`TokenFilter`].
    pub fn new(text: &str) -> Self {
        Self::with_filter(text, &TokenFilter::default())
    }

    /// Build a concordance from raw text with an explicit filter.
    ///
    /// Pure: same text and filter always produce the same frequency map.
    /// The empty string is legal and yields an empty concordance.
    pub fn with_filter(text: &str, filter: &TokenFilter) -> Self {
        let mut counts: HashMap<String, u32> = HashMap::new();
        let mut order: Vec<String> = Vec::new();

        // Split on single spaces only. Tabs, newlines and runs of spaces are
        // not separators; whatever they leave behind is handled per-token by
        // the trim step in normalize().
        for token in text.split(' ') {
            let Some(word) = filter.normalize(token) else {
                continue;
            };
            match counts.get_mut(&word) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(word.clone(), 1);
                    order.push(word);
                }
            }
        }

        Self {
            original: text.to_string(),
            counts,
            order,
        }
    }

    /// The raw source text this concordance was built from.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Occurrence count for `word`, or 0 if the word is not present.
    pub fn frequency(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Whether `word` survived into the frequency map.
    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if no tokens survived filtering.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate `(count, word)` pairs in first-occurrence order.
    ///
    /// The iterator borrows the map; it holds no cursor state on the
    /// concordance itself, so nested iteration (as the scoring pass does
    /// over query and indexed entries at once) is safe.
    pub fn terms(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        self.order
            .iter()
            .map(|word| (self.frequency(word), word.as_str()))
    }
}

impl PartialEq for Concordance {
    /// Two concordances are equal when their frequency maps are equal.
    /// The original text is display metadata, not part of the vector.
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}
