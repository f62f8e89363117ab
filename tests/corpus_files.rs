//! File-driven indexing tests: the read-files-then-index flow the CLI uses.

mod common;

use std::fs;
use std::io::Write;
use talpa::{Concordance, VectorSearch};
use tempfile::TempDir;

fn write_doc(dir: &TempDir, name: &str, text: &str) -> String {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).expect("create corpus file");
    file.write_all(text.as_bytes()).expect("write corpus file");
    path.to_string_lossy().into_owned()
}

#[test]
fn corpus_read_from_files_ranks_like_in_memory_corpus() {
    let dir = TempDir::new().expect("tempdir");
    let paths = vec![
        write_doc(&dir, "pie.txt", "apple pie and apple cider"),
        write_doc(&dir, "banana.txt", "banana bread recipe"),
    ];

    let mut engine = VectorSearch::new();
    for path in &paths {
        let text = fs::read_to_string(path).expect("read corpus file");
        engine.index(Concordance::new(&text));
    }

    let results = engine.search("apple cider", true);
    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].concordance.original(),
        "apple pie and apple cider"
    );
}

#[test]
fn multiline_files_index_as_a_single_document() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_doc(&dir, "multi.txt", "first line\nsecond line\nthird");

    let text = fs::read_to_string(&path).expect("read corpus file");
    let concordance = Concordance::new(&text);

    // Newlines are not separators; "line\nsecond" is a single trimmed-free
    // token only where spaces delimit it. The exact split: ["first",
    // "line\nsecond", "line\nthird"], each trimmed at the ends only.
    assert!(concordance.contains("first"));
    assert_eq!(concordance.frequency("line\nsecond"), 1);
    assert_eq!(concordance.frequency("line\nthird"), 1);
}

#[test]
fn query_file_and_inline_words_build_equal_concordances() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_doc(&dir, "query.txt", "apple cider press");

    let from_file = Concordance::new(&fs::read_to_string(&path).expect("read query file"));
    let joined = ["apple", "cider", "press"].join(" ");
    let from_words = Concordance::new(&joined);
    assert_eq!(from_file, from_words);
}

#[test]
fn missing_file_surfaces_an_io_error() {
    let dir = TempDir::new().expect("tempdir");
    let missing = dir.path().join("nope.txt");
    assert!(fs::read_to_string(&missing).is_err());
}
