//! Order data models shared with the web application.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::order::rules::{format_currency, parse_date_token};

/// An order extracted from free text.
///
/// Transient view-model: the UI may edit every field before it is turned
/// into an [`OrderRecord`] and persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedOrder {
    /// Customer name.
    pub client: Option<String>,

    /// Raw date token as it appeared in the text (not validated).
    pub date: Option<String>,

    /// Amount due.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total: Option<Decimal>,

    /// Detected payment method.
    pub payment_method: Option<PaymentMethod>,

    /// Line items in order of appearance.
    #[serde(default)]
    pub items: Vec<OrderItem>,

    /// Original input text.
    #[serde(default)]
    pub raw: String,
}

/// A single line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Quantity (at least 1).
    pub qty: u32,

    /// Item name, trimmed.
    pub name: String,

    /// Unit price.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
}

impl OrderItem {
    pub fn new(qty: u32, name: impl Into<String>, price: Option<Decimal>) -> Self {
        Self {
            qty,
            name: name.into(),
            price,
        }
    }

    /// Unit price times quantity; a missing price counts as zero.
    pub fn line_total(&self) -> Decimal {
        self.price
            .unwrap_or_default()
            .saturating_mul(Decimal::from(self.qty))
    }
}

/// Payment methods recognized in order text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Instant transfer (Pix).
    #[serde(rename = "pix")]
    Pix,
    /// Debit or credit card.
    #[serde(rename = "cartão")]
    Card,
    /// Cash.
    #[serde(rename = "dinheiro")]
    Cash,
    /// Bank transfer (TED/DOC).
    #[serde(rename = "transferência")]
    Transfer,
    /// Meal voucher / ticket.
    #[serde(rename = "vale")]
    Voucher,
}

impl PaymentMethod {
    /// Canonical lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Pix => "pix",
            PaymentMethod::Card => "cartão",
            PaymentMethod::Cash => "dinheiro",
            PaymentMethod::Transfer => "transferência",
            PaymentMethod::Voucher => "vale",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl ExtractedOrder {
    /// An order with nothing detected.
    pub fn empty(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            ..Default::default()
        }
    }

    /// Sum of `price * qty` over all items, unrounded.
    pub fn items_subtotal(&self) -> Decimal {
        self.items
            .iter()
            .map(OrderItem::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Calendar date for the raw `date` token, if it is a real date.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_date_token)
    }

    /// Check the order and return any issues found.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.client.as_deref().is_none_or(str::is_empty) {
            issues.push("Missing client name".to_string());
        }

        if let (Some(date), None) = (&self.date, self.parsed_date()) {
            issues.push(format!("Date \"{}\" is not a valid calendar date", date));
        }

        if self.items.is_empty() {
            issues.push("No line items".to_string());
        }

        for item in self.items.iter().filter(|i| i.price.is_none()) {
            issues.push(format!("Item \"{}\" has no price", item.name));
        }

        match self.total {
            None => issues.push("Missing total".to_string()),
            Some(total) if !self.items.is_empty() => {
                // Fees can push the total above the subtotal, never below.
                let subtotal = self.items_subtotal();
                if subtotal.saturating_sub(total) > Decimal::new(1, 2) {
                    issues.push(format!(
                        "Total ({}) is lower than the items subtotal ({})",
                        format_currency(Some(total)),
                        format_currency(Some(subtotal))
                    ));
                }
            }
            Some(_) => {}
        }

        issues
    }
}

/// The order shape the back office persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Customer name (empty when unknown).
    pub client_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    pub items: Vec<OrderItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,

    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,

    /// Free-text notes typed by the operator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
}

impl OrderRecord {
    /// Build a record from an extracted (and possibly edited) order.
    pub fn from_extracted(order: ExtractedOrder, observations: Option<String>) -> Self {
        Self {
            client_name: order.client.unwrap_or_default(),
            date: order.date,
            items: order.items,
            payment_method: order.payment_method,
            total: order.total.unwrap_or_default(),
            observations: observations.filter(|o| !o.trim().is_empty()),
        }
    }
}

impl From<ExtractedOrder> for OrderRecord {
    fn from(order: ExtractedOrder) -> Self {
        Self::from_extracted(order, None)
    }
}
