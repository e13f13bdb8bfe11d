//! Retrieval index: per-document sparse TF-IDF vectors and cosine ranking.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;

use crate::corpus;
use crate::tokenizer::tokenize;
use crate::vocab::{TermId, Vocabulary};
use crate::Error;

pub type DocId = u32;

/// TF-IDF weights over the vocabulary, sorted by term id, with the L2 norm
/// cached at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector {
    entries: Vec<(TermId, f32)>,
    norm: f32,
}

impl SparseVector {
    fn new(mut entries: Vec<(TermId, f32)>) -> Self {
        entries.sort_unstable_by_key(|&(tid, _)| tid);
        let norm = entries.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
        Self { entries, norm }
    }

    /// True when no in-vocabulary term contributed any weight.
    pub fn is_zero(&self) -> bool {
        self.norm == 0.0
    }

    fn dot(&self, other: &SparseVector) -> f32 {
        let mut sum = 0.0;
        let (mut i, mut j) = (0, 0);
        while i < self.entries.len() && j < other.entries.len() {
            let (a, wa) = self.entries[i];
            let (b, wb) = other.entries[j];
            match a.cmp(&b) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Cosine similarity; exactly 0.0 when either vector has zero magnitude,
    /// never NaN.
    pub fn cosine(&self, other: &SparseVector) -> f32 {
        if self.is_zero() || other.is_zero() {
            return 0.0;
        }
        self.dot(other) / (self.norm * other.norm)
    }
}

/// Immutable corpus index.
///
/// Built once before the first query; afterwards the vocabulary, the IDF
/// table, and every document vector are read-only, so a shared reference
/// (or an `Arc`) serves any number of concurrent callers without locking.
#[derive(Debug, Default)]
pub struct RetrievalIndex {
    vocabulary: Vocabulary,
    documents: Vec<String>,
    vectors: Vec<SparseVector>,
}

impl RetrievalIndex {
    /// Index an ordered corpus. Document ids are the input positions.
    pub fn build(documents: Vec<String>) -> Self {
        let vocabulary = Vocabulary::build(&documents);
        let vectors = documents
            .iter()
            .map(|text| vectorize(&vocabulary, text))
            .collect();
        tracing::info!(
            num_docs = documents.len(),
            num_terms = vocabulary.len(),
            "retrieval index built"
        );
        Self { vocabulary, documents, vectors }
    }

    /// Index a marker-delimited corpus file.
    ///
    /// A missing, unreadable, or malformed file degrades to an empty index
    /// instead of failing: the caller keeps a queryable index either way and
    /// simply gets no passages back.
    pub fn from_corpus_file<P: AsRef<Path>>(path: P) -> Self {
        match corpus::load_corpus_file(&path) {
            Ok(documents) => Self::build(documents),
            Err(err) => {
                tracing::error!(
                    path = %path.as_ref().display(),
                    %err,
                    "corpus unavailable, starting with empty index"
                );
                Self::default()
            }
        }
    }

    /// Index a directory of `*.txt` documents, with the same degraded
    /// behavior as [`RetrievalIndex::from_corpus_file`].
    pub fn from_corpus_dir<P: AsRef<Path>>(dir: P) -> Self {
        match corpus::load_corpus_dir(&dir) {
            Ok(documents) => Self::build(documents),
            Err(err) => {
                tracing::error!(
                    dir = %dir.as_ref().display(),
                    %err,
                    "corpus unavailable, starting with empty index"
                );
                Self::default()
            }
        }
    }

    pub fn num_docs(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Raw text of a document by its ordinal position.
    pub fn document(&self, id: DocId) -> Option<&str> {
        self.documents.get(id as usize).map(String::as_str)
    }

    /// Vectorize text with the frozen vocabulary. Out-of-vocabulary terms
    /// contribute nothing; text with no in-vocabulary terms yields a zero
    /// vector.
    pub fn vectorize(&self, text: &str) -> SparseVector {
        vectorize(&self.vocabulary, text)
    }

    /// Ranked, thresholded retrieval: the texts of at most `k` documents
    /// scoring strictly above `threshold`, best first.
    pub fn retrieve(&self, query: &str, k: usize, threshold: f32) -> Result<Vec<&str>, Error> {
        Ok(self
            .retrieve_scored(query, k, threshold)?
            .into_iter()
            .map(|(doc_id, _)| self.documents[doc_id as usize].as_str())
            .collect())
    }

    /// As [`RetrievalIndex::retrieve`], but returning `(doc id, cosine
    /// score)` pairs instead of document texts.
    ///
    /// Rejects `k == 0` and thresholds outside `[0, 1)` rather than
    /// clamping them; both indicate a caller bug. An empty index returns an
    /// empty result for any valid parameters.
    pub fn retrieve_scored(
        &self,
        query: &str,
        k: usize,
        threshold: f32,
    ) -> Result<Vec<(DocId, f32)>, Error> {
        if k == 0 {
            return Err(Error::InvalidTopK);
        }
        if !(0.0..1.0).contains(&threshold) {
            return Err(Error::InvalidThreshold(threshold));
        }
        if self.documents.is_empty() {
            return Ok(Vec::new());
        }

        let query_vec = vectorize(&self.vocabulary, query);
        if query_vec.is_zero() {
            return Ok(Vec::new());
        }

        let mut scored: Vec<(DocId, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(doc_id, vector)| (doc_id as DocId, query_vec.cosine(vector)))
            .collect();
        // Score descending, equal scores by ascending position.
        scored.sort_unstable_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        scored.truncate(k);
        scored.retain(|&(_, score)| score > threshold);
        Ok(scored)
    }
}

fn vectorize(vocabulary: &Vocabulary, text: &str) -> SparseVector {
    let mut counts: HashMap<TermId, u32> = HashMap::new();
    for term in tokenize(text) {
        if let Some(tid) = vocabulary.term_id(&term) {
            *counts.entry(tid).or_insert(0) += 1;
        }
    }
    let entries = counts
        .into_iter()
        .map(|(tid, tf)| (tid, tf as f32 * vocabulary.idf(tid)))
        .collect();
    SparseVector::new(entries)
}
