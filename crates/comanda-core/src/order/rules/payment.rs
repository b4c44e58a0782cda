//! Payment method detection.

use crate::models::order::PaymentMethod;

use super::patterns::PAYMENT_METHODS;

/// Test the whole text against each keyword group in priority order
/// (pix, cartão, dinheiro, transferência, vale).
pub fn detect_payment_method(text: &str) -> Option<PaymentMethod> {
    PAYMENT_METHODS
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(method, _)| *method)
}
