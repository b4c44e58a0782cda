//! Date detection.

use chrono::NaiveDate;

use super::patterns::{DATE_PARTS, DATE_TOKEN};
use super::LineClassifier;

/// Finds a `DD/MM/YYYY`-shaped token and returns it verbatim.
///
/// No calendar validation happens here; see [`parse_date_token`].
pub struct DateClassifier;

impl LineClassifier for DateClassifier {
    type Output = String;

    fn classify(&self, line: &str) -> Option<String> {
        DATE_TOKEN.find(line).map(|m| m.as_str().to_string())
    }
}

/// Interpret a raw date token (`DD/MM/YYYY`, `DD-MM-YY`) as a calendar date.
pub fn parse_date_token(token: &str) -> Option<NaiveDate> {
    let caps = DATE_PARTS.captures(token.trim())?;

    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year = parse_year(&caps[3])?;

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_year(s: &str) -> Option<i32> {
    let year: i32 = s.parse().ok()?;
    if s.len() == 2 {
        // Two-digit year: assume 2000s for 00-50, 1900s for 51-99
        if year <= 50 {
            Some(2000 + year)
        } else {
            Some(1900 + year)
        }
    } else {
        Some(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_date_verbatim() {
        assert_eq!(
            DateClassifier.classify("Pedido de 15/01/2024 às 19h"),
            Some("15/01/2024".to_string())
        );
        assert_eq!(DateClassifier.classify("15-01-24"), Some("15-01-24".to_string()));
        // Shape only, no calendar check.
        assert_eq!(DateClassifier.classify("99/99/9999"), Some("99/99/9999".to_string()));
        assert_eq!(DateClassifier.classify("15.01.2024"), None);
        assert_eq!(DateClassifier.classify("5/1/2024"), None);
        assert_eq!(DateClassifier.classify("Pedido ١٢/٠٥/٢٠٢٤"), None);
        assert_eq!(DateClassifier.classify("１２/０５/２０２４"), None);
    }

    #[test]
    fn test_first_date_wins() {
        let lines = ["Cliente: Ana", "Entrega 02/03/2024", "Pago 05/03/2024"];
        assert_eq!(DateClassifier.first_match(&lines), Some("02/03/2024".to_string()));
    }

    #[test]
    fn test_parse_date_token() {
        assert_eq!(parse_date_token("15/01/2024"), NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(parse_date_token("15-01-24"), NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(parse_date_token("15/01/99"), NaiveDate::from_ymd_opt(1999, 1, 15));
        assert_eq!(parse_date_token("31/04/2024"), None);
        assert_eq!(parse_date_token("ontem"), None);
    }
}
