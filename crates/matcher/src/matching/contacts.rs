//! Contact extraction: best-effort pattern matching for an email address
//! and a phone number in normalized resume text.
//!
//! These are heuristics, not validated contracts. The patterns accept some
//! invalid addresses and miss some exotic ones; the extractor is isolated
//! behind this struct so the strategy can be replaced without touching the
//! pipeline.

use regex::Regex;

use crate::models::ContactInfo;

/// Holds the compiled patterns. Construct once per request (or longer) and
/// reuse; extraction itself is a pure function of the input text.
pub struct ContactExtractor {
    email: Regex,
    phone: Regex,
}

impl ContactExtractor {
    pub fn new() -> Self {
        Self {
            // local part: alphanumerics and ._%+- ; domain: alphanumerics
            // and .- ; TLD: 2+ letters.
            email: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
                .expect("email pattern is valid"),
            // a bare 10-digit run, or 3-3-4 groups separated by -, . or
            // whitespace.
            phone: Regex::new(r"\b\d{10}\b|\b\d{3}[-.\s]?\d{3}[-.\s]?\d{4}\b")
                .expect("phone pattern is valid"),
        }
    }

    /// Returns the first match for each pattern. No match is `None`, never
    /// an error.
    pub fn extract(&self, text: &str) -> ContactInfo {
        ContactInfo {
            email: self.email.find(text).map(|m| m.as_str().to_string()),
            phone: self.phone.find(text).map(|m| m.as_str().to_string()),
        }
    }
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> ContactInfo {
        ContactExtractor::new().extract(text)
    }

    #[test]
    fn test_extracts_email() {
        let contact = extract("Reach me at jane.doe+jobs@example-mail.co.uk anytime.");
        assert_eq!(contact.email.as_deref(), Some("jane.doe+jobs@example-mail.co.uk"));
    }

    #[test]
    fn test_first_email_wins() {
        let contact = extract("primary: a@one.com backup: b@two.com");
        assert_eq!(contact.email.as_deref(), Some("a@one.com"));
    }

    #[test]
    fn test_extracts_bare_ten_digit_phone() {
        let contact = extract("Phone: 5551234567");
        assert_eq!(contact.phone.as_deref(), Some("5551234567"));
    }

    #[test]
    fn test_extracts_grouped_phone_variants() {
        for raw in ["555-123-4567", "555.123.4567", "555 123 4567"] {
            let contact = extract(&format!("call {raw} today"));
            assert_eq!(contact.phone.as_deref(), Some(raw), "input was {raw}");
        }
    }

    #[test]
    fn test_eleven_digit_run_is_not_a_phone() {
        let contact = extract("id 15551234567 on file");
        assert_eq!(contact.phone, None);
    }

    #[test]
    fn test_missing_fields_are_none() {
        let contact = extract("No contact details in this resume at all.");
        assert_eq!(contact.email, None);
        assert_eq!(contact.phone, None);
    }

    #[test]
    fn test_empty_text_is_fine() {
        let contact = extract("");
        assert_eq!(contact.email, None);
        assert_eq!(contact.phone, None);
    }

    #[test]
    fn test_idempotent() {
        let extractor = ContactExtractor::new();
        let text = "jane@example.com / 555-123-4567";
        assert_eq!(extractor.extract(text), extractor.extract(text));
    }

    #[test]
    fn test_single_letter_tld_rejected() {
        let contact = extract("bad address: someone@host.x");
        assert_eq!(contact.email, None);
    }
}
