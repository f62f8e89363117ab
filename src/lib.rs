// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Vector-space document similarity search over term frequencies.
//!
//! Every document becomes a vector in term space via its concordance (word →
//! frequency map), and a query is ranked against the corpus by cosine
//! similarity over raw counts. No IDF, no stemming, no fuzzy matching - just
//! the geometry of who uses which words how often.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐      ┌───────────────────────┐
//! │  concordance.rs  │─────▶│       engine.rs       │
//! │  (TokenFilter,   │      │ (VectorSearch::index, │
//! │   Concordance)   │      │  search, magnitude)   │
//! └──────────────────┘      └───────────────────────┘
//! ```
//!
//! The concordance builder owns tokenization and filtering; the engine owns
//! magnitudes and the scoring pass. The CLI (file reading, argument parsing,
//! display) lives in the binary and only ever hands raw strings in and reads
//! ranked [`Match`] lists out.
//!
//! # Usage
//!
//! ```
//! use talpa::{Concordance, VectorSearch};
//!
//! let mut engine = VectorSearch::new();
//! engine.index(Concordance::new("the cat sat on the mat"));
//! engine.index(Concordance::new("dogs chase cats"));
//!
//! let results = engine.search("cat on a mat", true);
//! assert_eq!(results[0].concordance.original(), "the cat sat on the mat");
//! ```

// Module declarations
mod concordance;
mod engine;

// Re-exports for public API
pub use concordance::{Concordance, TokenFilter, STOPWORDS, STRIP_CHARS};
pub use engine::{magnitude, Match, VectorSearch};
