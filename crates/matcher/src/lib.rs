//! Resume match core: ranks candidate resumes against a job description by
//! embedding similarity, extracts contact fields, and surfaces per-resume
//! salient terms via corpus-relative TF-IDF.
//!
//! The crate owns only the scoring pipeline. Document parsing, upload
//! handling, and presentation are external collaborators; the embedding
//! provider is injected through the [`EmbeddingProvider`] trait so callers
//! (and tests) can swap backends without touching the pipeline.

pub mod config;
pub mod embedder;
pub mod errors;
pub mod matching;
pub mod models;

pub use config::MatcherConfig;
pub use embedder::{EmbedError, EmbeddingProvider, HashEmbedder, HttpEmbedder};
pub use errors::MatchError;
pub use matching::contacts::ContactExtractor;
pub use matching::pipeline::run_match;
pub use models::{ContactInfo, Corpus, Document, MatchReport, MatchResult};
