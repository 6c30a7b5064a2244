use std::sync::OnceLock;

use crate::errors::MatchError;
use crate::matching::normalize::normalize_text;

/// A single uploaded document: the job description or one resume.
///
/// Raw text arrives already decoded by the upstream reader collaborators.
/// An upstream extraction failure shows up here as an empty `raw_text`, which
/// is valid input everywhere in the pipeline.
#[derive(Debug, Clone)]
pub struct Document {
    name: String,
    raw_text: String,
    normalized: OnceLock<String>,
}

impl Document {
    pub fn new(name: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_text: raw_text.into(),
            normalized: OnceLock::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Normalized text, computed at most once per document.
    pub fn normalized(&self) -> &str {
        self.normalized
            .get_or_init(|| normalize_text(&self.raw_text))
    }
}

/// The ordered set of documents for one matching request.
///
/// Index 0 is always the reference (job description); everything after it is
/// a candidate resume in upload order. Construction validates the request
/// shape so the pipeline never sees a degenerate corpus.
#[derive(Debug)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn new(reference: Document, candidates: Vec<Document>) -> Result<Self, MatchError> {
        if reference.normalized().is_empty() {
            return Err(MatchError::MalformedRequest(
                "Please provide a job description.".to_string(),
            ));
        }
        if candidates.is_empty() {
            return Err(MatchError::MalformedRequest(
                "Please upload at least one resume.".to_string(),
            ));
        }

        let mut documents = Vec::with_capacity(candidates.len() + 1);
        documents.push(reference);
        documents.extend(candidates);
        Ok(Self { documents })
    }

    pub fn reference(&self) -> &Document {
        &self.documents[0]
    }

    pub fn candidates(&self) -> &[Document] {
        &self.documents[1..]
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Normalized text of every document, reference first.
    pub fn normalized_texts(&self) -> Vec<&str> {
        self.documents.iter().map(|d| d.normalized()).collect()
    }
}
