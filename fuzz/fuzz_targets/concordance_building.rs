// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for concordance building invariants.
//!
//! Whatever the input text, the builder must not panic, must be
//! deterministic, and must never store an empty key, a stopword, or a
//! stripped punctuation character.

#![no_main]

use libfuzzer_sys::fuzz_target;
use talpa::{magnitude, Concordance, STOPWORDS, STRIP_CHARS};

fuzz_target!(|text: &str| {
    let first = Concordance::new(text);
    let second = Concordance::new(text);

    // INVARIANT 1: Building is deterministic
    assert_eq!(first, second, "Same text produced different concordances");

    let mut distinct = 0;
    for (count, word) in first.terms() {
        distinct += 1;

        // INVARIANT 2: Every key is non-empty and positive-count
        assert!(count >= 1, "Stored count below 1");
        assert!(!word.is_empty(), "Empty key survived filtering");

        // INVARIANT 3: No stopword, in any casing, survives
        assert!(
            !STOPWORDS.contains(&word.to_lowercase().as_str()),
            "Stopword {:?} survived filtering",
            word
        );

        // INVARIANT 4: Stripped characters never appear in keys
        assert!(
            !word.contains(&STRIP_CHARS[..]),
            "Strip character survived in key {:?}",
            word
        );

        // INVARIANT 5: Lookups agree with iteration
        assert_eq!(first.frequency(word), count);
        assert!(first.contains(word));
    }

    assert_eq!(first.len(), distinct);
    assert_eq!(first.is_empty(), distinct == 0);

    // INVARIANT 6: Magnitude is zero exactly for the empty concordance
    let m = magnitude(&first);
    assert!(m.is_finite() && m >= 0.0);
    assert_eq!(m == 0.0, first.is_empty());
});
