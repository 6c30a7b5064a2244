//! Text normalization: turns raw extracted text into a clean single-line
//! string suitable for both embedding and frequency analysis.

/// Strips non-whitespace control characters and collapses whitespace runs
/// to single spaces. Empty input stays empty; this never fails.
///
/// PDF extraction in particular produces hard line breaks mid-sentence and
/// stray form feeds; both would otherwise leak into tokenization.
pub fn normalize_text(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
