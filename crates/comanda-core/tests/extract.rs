use std::str::FromStr;

use comanda_core::{
    extract_from_text, format_currency, parse_currency, ExtractedOrder, OrderItem, PaymentMethod,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn empty_input_yields_empty_order() {
    assert_eq!(
        extract_from_text(""),
        ExtractedOrder {
            client: None,
            date: None,
            total: None,
            payment_method: None,
            items: vec![],
            raw: String::new(),
        }
    );
}

#[test]
fn empty_input_serializes_with_nulls() {
    let json = serde_json::to_value(extract_from_text("")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "client": null,
            "date": null,
            "total": null,
            "paymentMethod": null,
            "items": [],
            "raw": ""
        })
    );
}

#[test]
fn currency_examples() {
    assert_eq!(parse_currency("1.234,56"), Some(dec("1234.56")));
    assert_eq!(parse_currency("1234.56"), Some(dec("1234.56")));
    assert_eq!(parse_currency("abc"), None);
    assert_eq!(format_currency(None), "R$ 0,00");
    assert_eq!(format_currency(parse_currency("1.234,56")), "R$ 1.234,56");
}

#[test]
fn labeled_client() {
    let order = extract_from_text("Oi, boa noite\nCliente: Maria Silva\n1x Açaí - 18,00");
    assert_eq!(order.client.as_deref(), Some("Maria Silva"));
}

#[test]
fn total_computed_from_items() {
    let order = extract_from_text("2x Hambúrguer - R$ 15,00\n1x Refrigerante - R$ 6,00");

    assert_eq!(
        order.items,
        vec![
            OrderItem::new(2, "Hambúrguer", Some(dec("15"))),
            OrderItem::new(1, "Refrigerante", Some(dec("6"))),
        ]
    );
    assert_eq!(order.total, Some(dec("36.00")));
}

#[test]
fn explicit_total_beats_items() {
    let order = extract_from_text(
        "2x Hambúrguer - R$ 15,00\n1x Refrigerante - R$ 6,00\nTotal: R$ 50,00",
    );
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.total, Some(dec("50")));
}

#[test]
fn payment_priority() {
    let order = extract_from_text("Pago no pix\nse não der, cartão");
    assert_eq!(order.payment_method, Some(PaymentMethod::Pix));

    let order = extract_from_text("Pagamento no cartão");
    assert_eq!(order.payment_method, Some(PaymentMethod::Card));
}

#[test]
fn passes_share_lines() {
    // One line feeds the client, date and item passes independently.
    let order = extract_from_text("Cliente: Bia 10/10/2024 | 25,00");

    assert_eq!(order.date.as_deref(), Some("10/10/2024"));
    assert_eq!(order.client.as_deref(), Some("Bia 10102024  2500"));
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].price, Some(dec("25")));
}

#[test]
fn arbitrary_input_never_panics() {
    let inputs = [
        "\r\r\n\n",
        "R$",
        "R$ ,,,...",
        "Total: R$",
        "- \n• \n|\n—",
        "99999999999999999999999999999999999 - R$ 999999999999999999999999999999999,99",
        "4000000000x Pizza - 9999999999999999999999999999\n2x Pizza - 9999999999999999999999999999",
        "cliente\ncliente:\ncliente -",
        "🍕🍕🍕 x - R$ 🍕",
    ];

    for input in inputs {
        let order = extract_from_text(input);
        assert_eq!(order.raw, input);
    }
}
