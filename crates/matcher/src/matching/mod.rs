// Matching pipeline: normalization, contact extraction, corpus-relative
// keyword ranking, per-candidate scoring, and result assembly.
// All embedding calls go through the embedder trait; nothing here talks to
// a model backend directly.

pub mod contacts;
pub mod keywords;
pub mod normalize;
pub mod pipeline;
pub mod stopwords;
