//! In-memory lexical retrieval over a static corpus.
//!
//! The corpus is loaded once, turned into a TF-IDF vector space, and then
//! queried read-only for the life of the process:
//! - [`Vocabulary`] derives the frozen term dictionary and IDF table.
//! - [`RetrievalIndex`] owns one sparse weighted vector per document and
//!   answers free-text queries with a ranked, thresholded set of passages.
//!
//! Scope:
//! - In-memory only; there is no persistence and no update path.
//! - Deterministic ranking (cosine score, tie-break by document position).
//! - A corpus that cannot be read degrades to an empty, queryable index.

pub mod corpus;
pub mod index;
pub mod tokenizer;
pub mod vocab;

pub use error::Error;
pub use index::{DocId, RetrievalIndex, SparseVector};
pub use vocab::{TermId, Vocabulary};

/// Default number of passages returned per query.
pub const DEFAULT_TOP_K: usize = 2;

/// Default minimum cosine similarity a passage must exceed to be returned.
pub const DEFAULT_RELEVANCE_THRESHOLD: f32 = 0.1;

mod error {
    /// Errors for corpus loading and query validation.
    #[derive(thiserror::Error, Debug)]
    pub enum Error {
        /// `k` was zero; callers must ask for at least one passage.
        #[error("top-k must be at least 1")]
        InvalidTopK,
        /// Relevance threshold outside `[0, 1)`, or NaN.
        #[error("relevance threshold {0} is outside [0, 1)")]
        InvalidThreshold(f32),
        /// The corpus source could not be read.
        #[error("corpus unavailable: {0}")]
        CorpusUnavailable(#[from] std::io::Error),
        /// A document block was missing the closing `---` of its marker line.
        #[error("malformed corpus block at document {block}")]
        MalformedCorpus { block: usize },
    }
}
