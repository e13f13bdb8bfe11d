use retrieval::{DocId, RetrievalIndex};
use serde::Serialize;

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<SearchHit>,
}

#[derive(Serialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub score: f32,
    pub text: String,
}

/// Run one query against a built index and package the hits for display.
pub fn run_query(
    index: &RetrievalIndex,
    query: &str,
    k: usize,
    threshold: f32,
) -> Result<SearchResponse, retrieval::Error> {
    let start = std::time::Instant::now();
    let scored = index.retrieve_scored(query, k, threshold)?;
    let results: Vec<SearchHit> = scored
        .into_iter()
        .map(|(doc_id, score)| SearchHit {
            doc_id,
            score,
            text: index.document(doc_id).unwrap_or_default().to_string(),
        })
        .collect();
    tracing::debug!(query, hits = results.len(), "query answered");
    Ok(SearchResponse {
        query: query.to_string(),
        took_s: start.elapsed().as_secs_f64(),
        total_hits: results.len(),
        results,
    })
}
