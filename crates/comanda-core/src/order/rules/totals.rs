//! Total detection and fallbacks.

use rust_decimal::Decimal;

use crate::models::order::OrderItem;

use super::amounts::{parse_currency, round_currency};
use super::patterns::{CURRENCY_TOKEN, FEE, TOTAL_BARE, TOTAL_LABELED};
use super::LineClassifier;

/// `Total: R$ 50,00`, or a line holding nothing but an amount.
pub struct TotalClassifier;

impl LineClassifier for TotalClassifier {
    type Output = Decimal;

    fn classify(&self, line: &str) -> Option<Decimal> {
        let caps = TOTAL_LABELED
            .captures(line)
            .or_else(|| TOTAL_BARE.captures(line))?;
        parse_currency(&caps[1])
    }
}

/// Explicit total, scanning from the bottom of the text.
pub fn detect_total(lines: &[&str]) -> Option<Decimal> {
    TotalClassifier.last_match(lines)
}

/// Every `taxa ... R$ amount` fee, in order of appearance.
pub fn extract_fees(lines: &[&str]) -> Vec<Decimal> {
    lines
        .iter()
        .flat_map(|line| FEE.captures_iter(*line))
        .filter_map(|caps| parse_currency(&caps[1]))
        .collect()
}

/// `Σ price × qty` plus fees, rounded to cents.
pub fn total_from_items(items: &[OrderItem], fees: &[Decimal]) -> Decimal {
    // Saturates instead of overflowing on absurd amounts
    let total = items
        .iter()
        .map(OrderItem::line_total)
        .chain(fees.iter().copied())
        .fold(Decimal::ZERO, Decimal::saturating_add);
    round_currency(total)
}

/// The last `R$ amount` anywhere in the text.
pub fn last_currency_amount(lines: &[&str]) -> Option<Decimal> {
    lines
        .iter()
        .flat_map(|line| CURRENCY_TOKEN.captures_iter(*line))
        .filter_map(|caps| parse_currency(&caps[1]))
        .last()
}
