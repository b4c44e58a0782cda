//! Rule-based line classifiers for pasted order text.

pub mod amounts;
pub mod client;
pub mod dates;
pub mod items;
pub mod patterns;
pub mod payment;
pub mod totals;

pub use amounts::{format_currency, parse_currency, round_currency};
pub use client::{detect_client, sanitize_client, LabeledClientClassifier, LooseClientClassifier};
pub use dates::{parse_date_token, DateClassifier};
pub use items::{extract_items, BulletItemClassifier, PrimaryItemClassifier};
pub use payment::detect_payment_method;
pub use totals::{detect_total, extract_fees, last_currency_amount, total_from_items, TotalClassifier};

/// A classifier that recognizes one kind of field on a single line.
///
/// Classifiers are independent of each other; the pipeline decides which
/// lines to feed them and in what order.
pub trait LineClassifier {
    /// The value this classifier produces.
    type Output;

    /// Classify a single trimmed line.
    fn classify(&self, line: &str) -> Option<Self::Output>;

    /// First match scanning top to bottom.
    fn first_match(&self, lines: &[&str]) -> Option<Self::Output> {
        lines.iter().find_map(|line| self.classify(line))
    }

    /// First match scanning bottom to top.
    fn last_match(&self, lines: &[&str]) -> Option<Self::Output> {
        lines.iter().rev().find_map(|line| self.classify(line))
    }

    /// Every match in line order.
    fn all_matches(&self, lines: &[&str]) -> Vec<Self::Output> {
        lines.iter().filter_map(|line| self.classify(line)).collect()
    }
}

/// Split text on CR, LF or CRLF into trimmed, non-empty lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_lines_handles_all_line_endings() {
        let text = "  Cliente: Ana \r\n\r\n2x Pastel - 5,00\rTotal: 10,00\n\n   \n";
        assert_eq!(
            split_lines(text),
            vec!["Cliente: Ana", "2x Pastel - 5,00", "Total: 10,00"]
        );
    }

    #[test]
    fn test_split_lines_empty() {
        assert!(split_lines("").is_empty());
        assert!(split_lines("\n \r\n\t").is_empty());
    }
}
