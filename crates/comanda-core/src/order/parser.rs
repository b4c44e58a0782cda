//! Ordered extraction pipeline for pasted order text.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::models::config::ExtractionConfig;
use crate::models::order::{ExtractedOrder, OrderItem};

use super::rules::{
    detect_client, detect_payment_method, detect_total, extract_fees, extract_items,
    last_currency_amount, sanitize_client, split_lines, total_from_items, DateClassifier,
    LineClassifier,
};

/// Where the order total came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TotalSource {
    /// A `Total:` line or a bare amount line.
    Explicit,
    /// Sum of the items plus fees.
    Items,
    /// The last `R$` amount in the text.
    LastAmount,
}

/// Result of order extraction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Extracted order.
    pub order: ExtractedOrder,
    /// How the total was obtained, if there is one.
    pub total_source: Option<TotalSource>,
    /// Fields that could not be detected.
    pub warnings: Vec<String>,
}

/// Trait for order parsing.
pub trait OrderParser {
    /// Parse an order from text. Never fails.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Rule-based parser over the lines of pasted order text.
#[derive(Debug, Clone, Default)]
pub struct TextOrderParser {
    config: ExtractionConfig,
}

impl TextOrderParser {
    /// Create a parser with the standard pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser from extraction configuration.
    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Set client name sanitization.
    pub fn with_client_sanitization(mut self, sanitize: bool) -> Self {
        self.config.sanitize_client = sanitize;
        self
    }

    /// Set whether fees are added to a total computed from items.
    pub fn with_fees(mut self, include: bool) -> Self {
        self.config.include_fees = include;
        self
    }

    /// Set the last-`R$`-amount fallback.
    pub fn with_last_amount_fallback(mut self, enabled: bool) -> Self {
        self.config.last_amount_fallback = enabled;
        self
    }

    /// Extract an order, discarding diagnostics.
    pub fn extract(&self, text: &str) -> ExtractedOrder {
        self.parse(text).order
    }

    fn resolve_total(
        &self,
        lines: &[&str],
        items: &[OrderItem],
    ) -> Option<(Decimal, TotalSource)> {
        if let Some(total) = detect_total(lines) {
            return Some((total, TotalSource::Explicit));
        }

        if !items.is_empty() {
            let fees = if self.config.include_fees {
                extract_fees(lines)
            } else {
                Vec::new()
            };
            debug!("Computing total from {} items and {} fees", items.len(), fees.len());
            return Some((total_from_items(items, &fees), TotalSource::Items));
        }

        if self.config.last_amount_fallback {
            return last_currency_amount(lines).map(|t| (t, TotalSource::LastAmount));
        }

        None
    }
}

impl OrderParser for TextOrderParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        debug!("Parsing order from {} characters of text", text.len());

        let lines = split_lines(text);

        let date = DateClassifier.first_match(&lines);
        let client = detect_client(&lines);
        let items = extract_items(&lines);
        let resolved = self.resolve_total(&lines, &items);

        let client = if self.config.sanitize_client {
            client.map(|c| sanitize_client(&c))
        } else {
            client
        };

        let payment_method = detect_payment_method(text);

        let mut warnings = Vec::new();
        if client.is_none() {
            warnings.push("Could not extract client".to_string());
        }
        if date.is_none() {
            warnings.push("Could not extract date".to_string());
        }
        if items.is_empty() {
            warnings.push("Could not extract line items".to_string());
        }
        if resolved.is_none() {
            warnings.push("Could not extract total".to_string());
        }
        if payment_method.is_none() {
            warnings.push("Could not detect payment method".to_string());
        }

        let order = ExtractedOrder {
            client,
            date,
            total: resolved.map(|(total, _)| total),
            payment_method,
            items,
            raw: text.to_string(),
        };

        debug!(
            "Extracted order with {} items, total {:?} from {:?}",
            order.items.len(),
            order.total,
            resolved.map(|(_, source)| source)
        );

        ExtractionResult {
            order,
            total_source: resolved.map(|(_, source)| source),
            warnings,
        }
    }
}

/// Extract a structured order from pasted text with the standard pipeline.
pub fn extract_from_text(text: &str) -> ExtractedOrder {
    TextOrderParser::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::PaymentMethod;
    use pretty_assertions::assert_eq;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_whatsapp_order() {
        let text = "Pedido 12/05/2024\r\n\
                    Cliente: Maria Silva!\r\n\
                    2x Hambúrguer artesanal - R$ 22,00\r\n\
                    1x Coca lata | R$ 6,50\r\n\
                    Taxa de entrega: R$ 5,00\r\n\
                    Pagamento: pix";

        let result = TextOrderParser::new().parse(text);
        let order = result.order;

        assert_eq!(order.client.as_deref(), Some("Maria Silva"));
        assert_eq!(order.date.as_deref(), Some("12/05/2024"));
        assert_eq!(order.payment_method, Some(PaymentMethod::Pix));
        assert_eq!(order.raw, text);
        assert_eq!(
            order.items,
            vec![
                OrderItem::new(2, "Hambúrguer artesanal", Some(dec("22"))),
                OrderItem::new(1, "Coca lata", Some(dec("6.50"))),
            ]
        );
        // 2 × 22 + 6,50 + 5,00 fee
        assert_eq!(order.total, Some(dec("55.50")));
        assert_eq!(result.total_source, Some(TotalSource::Items));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_explicit_total_wins() {
        let text = "2x Pastel - 8,00\nTotal: R$ 50,00";
        let result = TextOrderParser::new().parse(text);
        assert_eq!(result.order.total, Some(dec("50")));
        assert_eq!(result.total_source, Some(TotalSource::Explicit));
    }

    #[test]
    fn test_fees_can_be_disabled() {
        let text = "Pastel - 8,00\nTaxa de entrega R$ 4,00";
        assert_eq!(extract_from_text(text).total, Some(dec("12.00")));

        let order = TextOrderParser::new().with_fees(false).extract(text);
        assert_eq!(order.total, Some(dec("8.00")));
    }

    #[test]
    fn test_last_amount_fallback() {
        let text = "Oi! Quero o combo de R$ 30,00\nmais a entrega de R$ 7,00";
        let result = TextOrderParser::new().parse(text);
        assert!(result.order.items.is_empty());
        assert_eq!(result.order.total, Some(dec("7")));
        assert_eq!(result.total_source, Some(TotalSource::LastAmount));

        let order = TextOrderParser::new()
            .with_last_amount_fallback(false)
            .extract(text);
        assert_eq!(order.total, None);
    }

    #[test]
    fn test_client_sanitization_toggle() {
        let text = "Cliente: Ana (mesa 3)";
        assert_eq!(extract_from_text(text).client.as_deref(), Some("Ana mesa 3"));

        let order = TextOrderParser::new()
            .with_client_sanitization(false)
            .extract(text);
        assert_eq!(order.client.as_deref(), Some("Ana (mesa 3)"));
    }

    #[test]
    fn test_symbol_only_client_stays_detected() {
        let result = TextOrderParser::new().parse("Cliente: !!!\nPastel - 8,00");

        assert_eq!(result.order.client.as_deref(), Some(""));
        assert!(!result.warnings.iter().any(|w| w.contains("client")));
        assert!(result.order.validate().contains(&"Missing client name".to_string()));
    }

    #[test]
    fn test_non_ascii_digits_do_not_shadow_bullet_items() {
        let text = "Pedido ١٢/٠٥/٢٠٢٤\nPastel - R$ ８,００\n• Coxinha R$ 5,00";
        let order = extract_from_text(text);

        assert_eq!(order.date, None);
        assert_eq!(order.items, vec![OrderItem::new(1, "Coxinha", Some(dec("5")))]);
        assert_eq!(order.total, Some(dec("5")));
    }

    #[test]
    fn test_warnings_for_empty_input() {
        let result = TextOrderParser::new().parse("");
        assert_eq!(result.order, ExtractedOrder::empty(""));
        assert_eq!(result.total_source, None);
        assert_eq!(result.warnings.len(), 5);
    }
}
