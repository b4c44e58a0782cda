//! Client name detection.

use super::patterns::{CLIENT_DISALLOWED, CLIENT_LABELED, CLIENT_LOOSE};
use super::LineClassifier;

/// `Cliente: Maria Silva` or `cliente - Maria`.
pub struct LabeledClientClassifier;

impl LineClassifier for LabeledClientClassifier {
    type Output = String;

    fn classify(&self, line: &str) -> Option<String> {
        let caps = CLIENT_LABELED.captures(line)?;
        non_empty(&caps[1])
    }
}

/// A line starting with `cliente` followed directly by a name.
pub struct LooseClientClassifier;

impl LineClassifier for LooseClientClassifier {
    type Output = String;

    fn classify(&self, line: &str) -> Option<String> {
        let caps = CLIENT_LOOSE.captures(line)?;
        non_empty(&caps[1])
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Find the client name; labeled lines take priority over loose ones.
pub fn detect_client(lines: &[&str]) -> Option<String> {
    LabeledClientClassifier
        .first_match(lines)
        .or_else(|| LooseClientClassifier.first_match(lines))
}

/// Keep only letters (plain or accented Latin), digits and whitespace, trimmed.
///
/// A name made only of symbols sanitizes to an empty string.
pub fn sanitize_client(name: &str) -> String {
    CLIENT_DISALLOWED.replace_all(name, "").trim().to_string()
}
