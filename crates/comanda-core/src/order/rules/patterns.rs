//! Common regex patterns for order text extraction.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::order::PaymentMethod;

// Digits are ASCII only; `\d` would also match Arabic-Indic or fullwidth digits.
lazy_static! {
    // Dates: DD/MM/YYYY, DD-MM-YY, ...
    pub static ref DATE_TOKEN: Regex = Regex::new(
        r"[0-9]{2}[/\-][0-9]{2}[/\-](?:[0-9]{4}|[0-9]{2})"
    ).unwrap();

    pub static ref DATE_PARTS: Regex = Regex::new(
        r"^([0-9]{2})[/\-]([0-9]{2})[/\-]([0-9]{4}|[0-9]{2})$"
    ).unwrap();

    // Client: "Cliente: Maria" / "cliente - Maria"
    pub static ref CLIENT_LABELED: Regex = Regex::new(
        r"(?i)cliente\s*[:\-]\s*(.+)"
    ).unwrap();

    // Client without separator: "cliente Maria"
    pub static ref CLIENT_LOOSE: Regex = Regex::new(
        r"(?i)^cliente\s+(.+)"
    ).unwrap();

    // Anything outside Latin-1 letters, digits and whitespace
    pub static ref CLIENT_DISALLOWED: Regex = Regex::new(
        r"[^a-zA-Z\u{00C0}-\u{00FF}0-9\s]"
    ).unwrap();

    // Items: "2x Hambúrguer - R$ 15,00", "Suco | 7,00"
    pub static ref ITEM_PRIMARY: Regex = Regex::new(
        r"(?i)^(?:([0-9]+)\s*x?\s*)?([^\-|—–]+?)\s*[\-—–|]\s*(?:R\$)?\s*([0-9.,]+)"
    ).unwrap();

    // Bulleted items: "• Coxinha R$ 5,00", "- Pastel 8"
    pub static ref ITEM_BULLET: Regex = Regex::new(
        r"(?i)^[•\-]\s*(.+?)\s+(?:R\$\s*)?([0-9.,]+)\s*$"
    ).unwrap();

    // Totals
    pub static ref TOTAL_LABELED: Regex = Regex::new(
        r"(?i)total\s*[:\-]?\s*(?:R\$)?\s*([0-9.,]+)"
    ).unwrap();

    pub static ref TOTAL_BARE: Regex = Regex::new(
        r"(?i)^(?:R\$)?\s*([0-9.,]+)$"
    ).unwrap();

    // Fees: "Taxa de entrega: R$ 5,00"
    pub static ref FEE: Regex = Regex::new(
        r"(?i)taxa.*?R\$\s*([0-9.,]+)"
    ).unwrap();

    // Any R$ amount
    pub static ref CURRENCY_TOKEN: Regex = Regex::new(
        r"(?i)R\$\s*([0-9.,]+)"
    ).unwrap();

    // Payment methods, in detection priority order
    pub static ref PAYMENT_METHODS: Vec<(PaymentMethod, Regex)> = vec![
        (PaymentMethod::Pix, Regex::new(r"(?i)\bpix\b").unwrap()),
        (
            PaymentMethod::Card,
            Regex::new(r"(?i)cart[aã]o|cr[eé]dito|d[eé]bito|\bcard\b|maquininha").unwrap(),
        ),
        (
            PaymentMethod::Cash,
            Regex::new(r"(?i)dinheiro|esp[eé]cie|\bcash\b|\btroco\b").unwrap(),
        ),
        (
            PaymentMethod::Transfer,
            Regex::new(r"(?i)transfer[eê]ncia|\bted\b|\bdoc\b").unwrap(),
        ),
        (
            PaymentMethod::Voucher,
            Regex::new(r"(?i)\bvale\b|\bticket\b|voucher|\bvr\b").unwrap(),
        ),
    ];
}
