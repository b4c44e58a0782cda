//! Brazilian currency parsing and formatting.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Parse a currency token such as `"R$ 1.234,56"`, `"15,00"` or `"1234.56"`.
///
/// Everything except digits, commas and dots is dropped. When both a comma
/// and a dot are present the text is read as Brazilian formatting (dot for
/// thousands, comma for decimals); otherwise commas are decimal points. The
/// leading numeric part is parsed, so `"1.2.3"` reads as `1.2`. Returns
/// `None` when no digits remain.
pub fn parse_currency(token: &str) -> Option<Decimal> {
    let cleaned: String = token
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();

    let normalized = if cleaned.contains(',') && cleaned.contains('.') {
        cleaned.replace('.', "").replace(',', ".")
    } else {
        cleaned.replace(',', ".")
    };

    leading_number(&normalized).and_then(|n| Decimal::from_str(&n).ok())
}

/// Longest `digits[.digits]` prefix of an ASCII string.
fn leading_number(s: &str) -> Option<String> {
    let int_len = s.bytes().take_while(u8::is_ascii_digit).count();
    let frac = s[int_len..]
        .strip_prefix('.')
        .map(|rest| &rest[..rest.bytes().take_while(u8::is_ascii_digit).count()])
        .unwrap_or("");

    if int_len == 0 && frac.is_empty() {
        return None;
    }

    let int = if int_len == 0 { "0" } else { &s[..int_len] };
    if frac.is_empty() {
        Some(int.to_string())
    } else {
        Some(format!("{}.{}", int, frac))
    }
}

/// Round to cents, halves away from zero.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount in pt-BR style (`R$ 1.234,56`).
///
/// A missing amount renders as `R$ 0,00`.
pub fn format_currency(amount: Option<Decimal>) -> String {
    let Some(amount) = amount else {
        return "R$ 0,00".to_string();
    };

    let rounded = round_currency(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let s = format!("{:.2}", rounded.abs());
    let (integer_part, decimal_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));

    // Add thousand separators
    let chars: Vec<char> = integer_part.chars().collect();
    let mut formatted = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(*c);
    }

    format!("{}R$ {},{}", sign, formatted, decimal_part)
}
