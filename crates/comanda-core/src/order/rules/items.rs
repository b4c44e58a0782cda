//! Line item detection.

use tracing::trace;

use crate::models::order::OrderItem;

use super::amounts::parse_currency;
use super::patterns::{ITEM_BULLET, ITEM_PRIMARY};
use super::LineClassifier;

/// `[qty][x] name <sep> [R$] price`, where `<sep>` is `-`, `—`, `–` or `|`.
pub struct PrimaryItemClassifier;

impl LineClassifier for PrimaryItemClassifier {
    type Output = OrderItem;

    fn classify(&self, line: &str) -> Option<OrderItem> {
        let caps = ITEM_PRIMARY.captures(line)?;

        let name = caps[2].trim();
        if name.is_empty() {
            return None;
        }

        let qty = caps
            .get(1)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .filter(|&q| q > 0)
            .unwrap_or(1);

        Some(OrderItem::new(qty, name, parse_currency(&caps[3])))
    }
}

/// `• name [R$] price` or `- name price`; quantity is always 1.
pub struct BulletItemClassifier;

impl LineClassifier for BulletItemClassifier {
    type Output = OrderItem;

    fn classify(&self, line: &str) -> Option<OrderItem> {
        let caps = ITEM_BULLET.captures(line)?;

        let name = caps[1].trim();
        if name.is_empty() {
            return None;
        }

        Some(OrderItem::new(1, name, parse_currency(&caps[2])))
    }
}

/// Detect line items; bulleted lines are only tried when no line matches
/// the primary pattern.
pub fn extract_items(lines: &[&str]) -> Vec<OrderItem> {
    let items = PrimaryItemClassifier.all_matches(lines);
    if !items.is_empty() {
        trace!("{} items from primary pattern", items.len());
        return items;
    }

    let items = BulletItemClassifier.all_matches(lines);
    trace!("{} items from bullet pattern", items.len());
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_primary_item() {
        assert_eq!(
            PrimaryItemClassifier.classify("2x Hambúrguer - R$ 15,00"),
            Some(OrderItem::new(2, "Hambúrguer", Some(dec("15"))))
        );
        assert_eq!(
            PrimaryItemClassifier.classify("3 Coxinha — 4.50"),
            Some(OrderItem::new(3, "Coxinha", Some(dec("4.50"))))
        );
        assert_eq!(
            PrimaryItemClassifier.classify("Suco de laranja | R$7"),
            Some(OrderItem::new(1, "Suco de laranja", Some(dec("7"))))
        );
        assert_eq!(
            PrimaryItemClassifier.classify("10X Pão de queijo – 1.234,50"),
            Some(OrderItem::new(10, "Pão de queijo", Some(dec("1234.50"))))
        );
    }

    #[test]
    fn test_primary_item_rejects_lines_without_price() {
        assert_eq!(PrimaryItemClassifier.classify("Cliente - Maria"), None);
        assert_eq!(PrimaryItemClassifier.classify("2x Hambúrguer"), None);
        assert_eq!(PrimaryItemClassifier.classify("- Coxinha 5,00"), None);
    }

    #[test]
    fn test_primary_item_unparseable_price() {
        assert_eq!(
            PrimaryItemClassifier.classify("Brinde - ,"),
            Some(OrderItem::new(1, "Brinde", None))
        );
    }

    #[test]
    fn test_zero_quantity_defaults_to_one() {
        assert_eq!(
            PrimaryItemClassifier.classify("0x Água - 3,00"),
            Some(OrderItem::new(1, "Água", Some(dec("3"))))
        );
    }

    #[test]
    fn test_bullet_item() {
        assert_eq!(
            BulletItemClassifier.classify("• Coxinha R$ 5,00"),
            Some(OrderItem::new(1, "Coxinha", Some(dec("5"))))
        );
        assert_eq!(
            BulletItemClassifier.classify("- Suco de uva 7"),
            Some(OrderItem::new(1, "Suco de uva", Some(dec("7"))))
        );
        assert_eq!(BulletItemClassifier.classify("Coxinha R$ 5,00"), None);
        assert_eq!(BulletItemClassifier.classify("• Coxinha"), None);
    }

    #[test]
    fn test_bullets_only_when_primary_finds_nothing() {
        let lines = ["• Coxinha R$ 5,00", "Pastel - 8,00"];
        assert_eq!(
            extract_items(&lines),
            vec![OrderItem::new(1, "Pastel", Some(dec("8")))]
        );

        let lines = ["• Coxinha R$ 5,00", "• Pastel R$ 8,00"];
        assert_eq!(
            extract_items(&lines),
            vec![
                OrderItem::new(1, "Coxinha", Some(dec("5"))),
                OrderItem::new(1, "Pastel", Some(dec("8"))),
            ]
        );
    }

    #[test]
    fn test_non_ascii_digits_are_not_prices() {
        assert_eq!(PrimaryItemClassifier.classify("Pastel - R$ ８,００"), None);
        // Not a quantity, so it stays part of the name.
        assert_eq!(
            PrimaryItemClassifier.classify("٢x Pastel - 8,00"),
            Some(OrderItem::new(1, "٢x Pastel", Some(dec("8"))))
        );

        let lines = ["Pastel - R$ ８,００", "• Coxinha R$ 5,00"];
        assert_eq!(
            extract_items(&lines),
            vec![OrderItem::new(1, "Coxinha", Some(dec("5")))]
        );
    }
}
