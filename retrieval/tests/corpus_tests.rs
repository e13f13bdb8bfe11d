use retrieval::corpus::{load_corpus_dir, load_corpus_file, parse_corpus};
use retrieval::{Error, RetrievalIndex};
use std::fs;
use tempfile::tempdir;

const SAMPLE: &str = "--- Doc 1 ---\n\
SIP stands for Systematic Investment Plan, used for rupee cost averaging.\n\
--- Doc 2 ---\n\
SEBI regulates the securities market in India.\n\
--- Doc 3 ---\n\
Equity funds invest in company shares; debt funds invest in bonds.\n";

#[test]
fn parses_marker_delimited_blocks() {
    let docs = parse_corpus(SAMPLE).unwrap();
    assert_eq!(docs.len(), 3);
    assert!(docs[0].starts_with("SIP stands"));
    assert!(docs[1].starts_with("SEBI regulates"));
    assert!(docs[2].ends_with("bonds."));
    // Bodies are trimmed, markers stripped.
    assert!(docs.iter().all(|d| !d.contains("--- Doc")));
    assert!(docs.iter().all(|d| d == d.trim()));
}

#[test]
fn text_before_the_first_marker_is_ignored() {
    let docs = parse_corpus("preamble to skip\n--- Doc 1 ---\nonly document\n").unwrap();
    assert_eq!(docs, vec!["only document"]);
}

#[test]
fn empty_input_yields_empty_corpus() {
    assert!(parse_corpus("").unwrap().is_empty());
}

#[test]
fn block_without_closing_marker_is_malformed() {
    let err = parse_corpus("--- Doc 1 without the closing dashes\nbody\n").unwrap_err();
    assert!(matches!(err, Error::MalformedCorpus { block: 0 }));
}

#[test]
fn missing_file_is_corpus_unavailable() {
    let err = load_corpus_file("/definitely/not/here/sample_docs.txt").unwrap_err();
    assert!(matches!(err, Error::CorpusUnavailable(_)));
}

#[test]
fn loads_documents_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample_docs.txt");
    fs::write(&path, SAMPLE).unwrap();
    let docs = load_corpus_file(&path).unwrap();
    assert_eq!(docs.len(), 3);
}

#[test]
fn missing_corpus_degrades_to_empty_index() {
    let idx = RetrievalIndex::from_corpus_file("/definitely/not/here/sample_docs.txt");
    assert!(idx.is_empty());
    assert!(idx.retrieve("SIP", 2, 0.1).unwrap().is_empty());
}

#[test]
fn malformed_corpus_degrades_to_empty_index() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.txt");
    fs::write(&path, "--- Doc 1 truncated marker\nbody\n").unwrap();
    let idx = RetrievalIndex::from_corpus_file(&path);
    assert!(idx.is_empty());
    assert!(idx.retrieve("body", 2, 0.1).unwrap().is_empty());
}

#[test]
fn directory_source_orders_documents_by_path() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.txt"), "bravo document\n").unwrap();
    fs::write(dir.path().join("a.txt"), "alpha document\n").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/c.txt"), "charlie document\n").unwrap();
    fs::write(dir.path().join("notes.md"), "ignored\n").unwrap();

    let docs = load_corpus_dir(dir.path()).unwrap();
    assert_eq!(docs, vec!["alpha document", "bravo document", "charlie document"]);
}

#[test]
fn directory_index_is_queryable() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("gold.txt"), "gold price rises today\n").unwrap();
    fs::write(dir.path().join("bond.txt"), "bond yields fall\n").unwrap();
    let idx = RetrievalIndex::from_corpus_dir(dir.path());
    assert_eq!(idx.num_docs(), 2);
    let hits = idx.retrieve("gold price", 2, 0.1).unwrap();
    assert_eq!(hits, vec!["gold price rises today"]);
}
