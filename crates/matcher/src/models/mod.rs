pub mod document;
pub mod report;

pub use document::{Corpus, Document};
pub use report::{ContactInfo, MatchReport, MatchResult, NOT_FOUND};
