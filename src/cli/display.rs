// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the talpa CLI.
//!
//! Score-colored result lines with truncated source excerpts. Colors only
//! when stdout is a real terminal, and `NO_COLOR` wins over everything for
//! the purists and the pipelines.

use talpa::Match;

// ═══════════════════════════════════════════════════════════════════════════
// ANSI STYLES
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply multiple styles if TTY, otherwise return plain text
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Color for a similarity score: strong matches green, middling yellow,
/// weak ones dimmed.
fn score_style(score: f64) -> &'static str {
    if score >= 0.75 {
        GREEN
    } else if score >= 0.4 {
        YELLOW
    } else {
        DIM
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// RENDERING
// ═══════════════════════════════════════════════════════════════════════════

/// Truncate text to at most `max_chars` characters for display.
///
/// Counts chars, not bytes, so multi-byte text never splits mid-codepoint.
/// When truncation happens the trailing ellipsis counts against the budget,
/// so the output never exceeds `max_chars` characters. Newlines become
/// spaces so a result always fits one excerpt block.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    let flattened: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flattened.chars().count() <= max_chars {
        return flattened;
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut out: String = flattened.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}

/// Print the search banner before results.
pub fn print_searching(indexed: usize) {
    println!(
        "{} Searching {} indexed document{}...",
        styled(&[CYAN], "[*]"),
        indexed,
        if indexed == 1 { "" } else { "s" }
    );
}

/// Print the result count line.
pub fn print_summary(found: usize) {
    println!(
        "{} Found {} relation{}",
        styled(&[GREEN, BOLD], "[+]"),
        found,
        if found == 1 { "" } else { "s" }
    );
}

/// Print one ranked result: its score and a truncated excerpt of the source.
pub fn print_match(rank: usize, result: &Match<'_>, text_length: usize) {
    let score = format!("{:.6}", result.score);
    println!(
        "\n{} {}  {}",
        styled(&[DIM], &format!("{:>3}.", rank)),
        styled(&[score_style(result.score), BOLD], &score),
        truncate_text(result.concordance.original(), text_length)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_chars_not_bytes() {
        // 4 multi-byte chars; byte-slicing at 3 would panic.
        let text = "éééé";
        assert_eq!(truncate_text(text, 3), "éé…");
        assert_eq!(truncate_text(text, 4), "éééé");
    }

    #[test]
    fn truncate_never_exceeds_the_budget() {
        for max_chars in 0..6 {
            let out = truncate_text("abcdefgh", max_chars);
            assert!(out.chars().count() <= max_chars);
        }
        assert_eq!(truncate_text("abcdefgh", 0), "");
        assert_eq!(truncate_text("abcdefgh", 1), "…");
    }

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate_text("short", 100), "short");
        assert_eq!(truncate_text("", 100), "");
    }

    #[test]
    fn truncate_flattens_newlines() {
        assert_eq!(truncate_text("one\ntwo\rthree", 100), "one two three");
    }
}
