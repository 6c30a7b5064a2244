use serde::{Serialize, Serializer};
use uuid::Uuid;

/// Sentinel rendered for contact fields with no pattern match. Kept as a
/// string for parity with the exported spreadsheet columns.
pub const NOT_FOUND: &str = "Not Found";

/// Email and phone extracted from a single resume. Absence of a match is an
/// expected outcome, not an error; missing fields serialize as "Not Found".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    #[serde(rename = "Email", serialize_with = "ser_contact_field")]
    pub email: Option<String>,
    #[serde(rename = "Phone", serialize_with = "ser_contact_field")]
    pub phone: Option<String>,
}

impl ContactInfo {
    pub fn email_display(&self) -> &str {
        self.email.as_deref().unwrap_or(NOT_FOUND)
    }

    pub fn phone_display(&self) -> &str {
        self.phone.as_deref().unwrap_or(NOT_FOUND)
    }
}

fn ser_contact_field<S: Serializer>(field: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(field.as_deref().unwrap_or(NOT_FOUND))
}

/// Per-candidate aggregate. Constructed once by the pipeline, immutable
/// afterwards; the final sort reorders results, never mutates them.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub name: String,
    #[serde(flatten)]
    pub contact: ContactInfo,
    /// 0 to 100, two decimals.
    pub score: f64,
    /// Up to 5 terms, descending TF-IDF weight.
    pub keywords: Vec<String>,
}

/// Output of one matching request: candidates sorted descending by score.
#[derive(Debug, Serialize)]
pub struct MatchReport {
    pub request_id: Uuid,
    pub results: Vec<MatchResult>,
}
