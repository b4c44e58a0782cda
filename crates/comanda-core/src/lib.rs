//! Core library for restaurant order ("comanda") text extraction.
//!
//! This crate provides:
//! - Line classifiers for client, date, items, totals, fees and payment method
//! - Brazilian currency parsing and formatting (`R$ 1.234,56`)
//! - The ordered extraction pipeline turning pasted order text into an
//!   [`ExtractedOrder`]
//! - Order data models and configuration

pub mod error;
pub mod models;
pub mod order;

pub use error::{ComandaError, Result};
pub use models::order::{ExtractedOrder, OrderItem, OrderRecord, PaymentMethod};
pub use order::rules::{format_currency, parse_currency};
pub use order::{extract_from_text, ExtractionResult, OrderParser, TextOrderParser, TotalSource};
