//! Corpus-relative keyword ranking via TF-IDF.
//!
//! The vocabulary is capped at the strongest terms across the whole request
//! corpus, so a document's keyword set depends on every other document in
//! the request, not just its own text. The model is built once per request,
//! after all documents are normalized.

use std::collections::{HashMap, HashSet};

use crate::matching::stopwords::is_stop_word;

/// Vocabulary cap: the top terms by corpus-wide TF-IDF weight.
pub const VOCAB_CAP: usize = 10;
/// Keywords surfaced per document.
pub const KEYWORDS_PER_DOC: usize = 5;

const MIN_TOKEN_LEN: usize = 2;

/// Ranks keywords for every document in the corpus (reference first).
///
/// Returns one keyword set per input document, aligned by index, each
/// holding up to [`KEYWORDS_PER_DOC`] terms in descending weight order with
/// ties broken by capped-vocabulary order.
///
/// Degenerate corpora (fewer than two documents with any usable tokens, or
/// nothing left after stop-word removal) yield empty sets, never an error.
pub fn rank_keywords(texts: &[&str]) -> Vec<Vec<String>> {
    let tokenized: Vec<Vec<String>> = texts.iter().map(|t| tokenize(t)).collect();

    let non_empty = tokenized.iter().filter(|t| !t.is_empty()).count();
    if texts.len() < 2 || non_empty < 2 {
        return vec![Vec::new(); texts.len()];
    }

    // First-occurrence order across the corpus, used for deterministic
    // tie-breaking.
    let mut vocab_order: Vec<&str> = Vec::new();
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    for tokens in &tokenized {
        for token in tokens {
            if !first_seen.contains_key(token.as_str()) {
                first_seen.insert(token, vocab_order.len());
                vocab_order.push(token);
            }
        }
    }

    // Document frequency per term.
    let mut df: HashMap<&str, usize> = HashMap::new();
    for tokens in &tokenized {
        let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for term in unique {
            *df.entry(term).or_insert(0) += 1;
        }
    }

    // Per-document TF-IDF weights. The +1 smoothing keeps terms present in
    // every document rankable, which matters on the small corpora a single
    // request produces.
    let n_docs = texts.len() as f64;
    let idf = |term: &str| -> f64 { (n_docs / df[term] as f64).ln() + 1.0 };
    let weights: Vec<HashMap<&str, f64>> = tokenized
        .iter()
        .map(|tokens| {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for token in tokens {
                *counts.entry(token).or_insert(0) += 1;
            }
            let len = tokens.len() as f64;
            counts
                .into_iter()
                .map(|(term, count)| (term, count as f64 / len * idf(term)))
                .collect()
        })
        .collect();

    // Cap the vocabulary at the terms with the highest summed weight across
    // the corpus, ties broken by first occurrence.
    let mut corpus_weight: HashMap<&str, f64> = HashMap::new();
    for doc_weights in &weights {
        for (term, w) in doc_weights {
            *corpus_weight.entry(term).or_insert(0.0) += w;
        }
    }
    let mut capped = vocab_order;
    capped.sort_by(|a, b| {
        corpus_weight[b]
            .partial_cmp(&corpus_weight[a])
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| first_seen[a].cmp(&first_seen[b]))
    });
    capped.truncate(VOCAB_CAP);

    // Per document: top terms within the capped vocabulary by that
    // document's own weight, ties by capped-vocabulary position.
    weights
        .iter()
        .map(|doc_weights| {
            let mut scored: Vec<(usize, &str, f64)> = capped
                .iter()
                .enumerate()
                .filter_map(|(rank, term)| {
                    let w = doc_weights.get(term).copied().unwrap_or(0.0);
                    (w > 0.0).then_some((rank, *term, w))
                })
                .collect();
            scored.sort_by(|a, b| {
                b.2.partial_cmp(&a.2)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.0.cmp(&b.0))
            });
            scored
                .into_iter()
                .take(KEYWORDS_PER_DOC)
                .map(|(_, term, _)| term.to_string())
                .collect()
        })
        .collect()
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .map(str::to_lowercase)
        .filter(|t| t.len() >= MIN_TOKEN_LEN && !is_stop_word(t))
        .collect()
}
