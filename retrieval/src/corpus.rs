//! Corpus sources.
//!
//! The flat-file convention: each document opens with a marker line of the
//! form `--- Doc <n> ---`, and everything until the next marker is the
//! document body, whitespace-trimmed. Text before the first marker is
//! ignored. A directory source treats every `*.txt` file as one document.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::Error;

/// Marker prefix that opens each document block in a flat corpus file.
pub const DOC_MARKER: &str = "--- Doc";

/// Parse a marker-delimited corpus file into ordered document texts.
pub fn load_corpus_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Error> {
    let content = fs::read_to_string(path.as_ref())?;
    let documents = parse_corpus(&content)?;
    tracing::info!(
        path = %path.as_ref().display(),
        num_docs = documents.len(),
        "loaded corpus file"
    );
    Ok(documents)
}

/// Split raw corpus text on document markers.
pub fn parse_corpus(content: &str) -> Result<Vec<String>, Error> {
    let mut documents = Vec::new();
    for (block, raw) in content.split(DOC_MARKER).skip(1).enumerate() {
        // Drop the rest of the marker line (" <n> ---") before the body.
        let (_, body) = raw
            .split_once("---")
            .ok_or(Error::MalformedCorpus { block })?;
        documents.push(body.trim().to_string());
    }
    Ok(documents)
}

/// Load every `*.txt` file under `dir` as one document each, ordered by
/// path so that document ids are stable across loads.
pub fn load_corpus_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<String>, Error> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir.as_ref()) {
        let entry = entry.map_err(io::Error::from)?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("txt") {
            paths.push(path.to_path_buf());
        }
    }
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in &paths {
        documents.push(fs::read_to_string(path)?.trim().to_string());
    }
    tracing::info!(
        dir = %dir.as_ref().display(),
        num_docs = documents.len(),
        "loaded corpus directory"
    );
    Ok(documents)
}
