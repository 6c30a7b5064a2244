//! Request pipeline: materialize the corpus, build corpus-wide artifacts,
//! score candidates, assemble and sort results.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::embedder::{cosine_similarity, similarity_score, EmbeddingProvider};
use crate::errors::MatchError;
use crate::matching::contacts::ContactExtractor;
use crate::matching::keywords::rank_keywords;
use crate::models::{Corpus, MatchReport, MatchResult};

/// Runs one matching request over an already-validated corpus.
///
/// Candidates are processed in upload order. The keyword model is built
/// exactly once, before any per-candidate work, because it needs the entire
/// corpus; embeddings are per-candidate and independent.
///
/// Embedding policy is fail-soft for candidates: a candidate whose embedding
/// fails (after the provider's own retry) keeps its slot with score 0.0 and
/// the request continues. The reference is the one exception; without its
/// vector no candidate can be scored, so that failure aborts the request.
pub async fn run_match(
    corpus: &Corpus,
    provider: &dyn EmbeddingProvider,
) -> Result<MatchReport, MatchError> {
    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        candidates = corpus.candidates().len(),
        "matching request started"
    );

    let mut keyword_sets = rank_keywords(&corpus.normalized_texts());

    let reference_vec = provider.embed(corpus.reference().normalized()).await?;

    let extractor = ContactExtractor::new();
    let mut results = Vec::with_capacity(corpus.candidates().len());

    for (idx, candidate) in corpus.candidates().iter().enumerate() {
        let contact = extractor.extract(candidate.normalized());

        let score = match provider.embed(candidate.normalized()).await {
            Ok(vector) => similarity_score(cosine_similarity(&reference_vec, &vector)),
            Err(e) => {
                warn!(
                    %request_id,
                    candidate = candidate.name(),
                    "embedding failed, assigning score 0.0: {e}"
                );
                0.0
            }
        };
        debug!(%request_id, candidate = candidate.name(), score, "candidate scored");

        results.push(MatchResult {
            name: candidate.name().to_string(),
            contact,
            score,
            // index 0 of the keyword sets belongs to the reference
            keywords: std::mem::take(&mut keyword_sets[idx + 1]),
        });
    }

    // Vec::sort_by is stable, so equal scores keep upload order.
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    info!(%request_id, results = results.len(), "matching request finished");
    Ok(MatchReport {
        request_id,
        results,
    })
}
