//! WASM bindings for restaurant order text extraction.
//!
//! This crate exposes the extractor to the back-office web application.
//! Values cross the boundary as plain JSON-compatible objects: missing
//! fields are `null` and amounts are numbers.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use comanda_core::models::config::ExtractionConfig;
use comanda_core::{ExtractedOrder, OrderParser, OrderRecord, TextOrderParser};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract a structured order from pasted text.
#[wasm_bindgen(js_name = extractFromText)]
pub fn extract_from_text(text: &str) -> Result<JsValue, JsValue> {
    to_js(&comanda_core::extract_from_text(text))
}

/// Parse a currency token (e.g., "R$ 1.234,56"); `null` when there is no number.
#[wasm_bindgen(js_name = parseCurrency)]
pub fn parse_currency(token: &str) -> JsValue {
    comanda_core::parse_currency(token)
        .and_then(|d| d.to_f64())
        .map(JsValue::from_f64)
        .unwrap_or(JsValue::NULL)
}

/// Format an amount as "R$ 1.234,56"; `null` formats as "R$ 0,00".
#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency(amount: Option<f64>) -> String {
    comanda_core::format_currency(amount.and_then(Decimal::from_f64))
}

/// Check an (edited) order and return the issues found.
#[wasm_bindgen(js_name = validateOrder)]
pub fn validate_order(order: JsValue) -> Result<js_sys::Array, JsValue> {
    let order: ExtractedOrder = from_js(order)?;
    Ok(order
        .validate()
        .into_iter()
        .map(|issue| JsValue::from_str(&issue))
        .collect())
}

/// Calendar date of the order's raw date token as `YYYY-MM-DD`, or `undefined`.
#[wasm_bindgen(js_name = parsedDate)]
pub fn parsed_date(order: JsValue) -> Result<Option<String>, JsValue> {
    let order: ExtractedOrder = from_js(order)?;
    Ok(order.parsed_date().map(|d| d.to_string()))
}

/// Convert an (edited) order into the record shape that gets persisted.
#[wasm_bindgen(js_name = toOrderRecord)]
pub fn to_order_record(order: JsValue, observations: Option<String>) -> Result<JsValue, JsValue> {
    let order: ExtractedOrder = from_js(order)?;
    to_js(&OrderRecord::from_extracted(order, observations))
}

/// Order extractor class with configurable passes.
#[wasm_bindgen]
pub struct OrderExtractor {
    config: ExtractionConfig,
}

#[wasm_bindgen]
impl OrderExtractor {
    /// Create an extractor with the standard pipeline.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            config: ExtractionConfig::default(),
        }
    }

    #[wasm_bindgen(js_name = setSanitizeClient)]
    pub fn set_sanitize_client(&mut self, sanitize: bool) {
        self.config.sanitize_client = sanitize;
    }

    #[wasm_bindgen(js_name = setIncludeFees)]
    pub fn set_include_fees(&mut self, include: bool) {
        self.config.include_fees = include;
    }

    #[wasm_bindgen(js_name = setLastAmountFallback)]
    pub fn set_last_amount_fallback(&mut self, enabled: bool) {
        self.config.last_amount_fallback = enabled;
    }

    /// Extract an order from text.
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser().extract(text))
    }

    /// Extract an order together with the total source and warnings.
    #[wasm_bindgen(js_name = extractWithWarnings)]
    pub fn extract_with_warnings(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser().parse(text))
    }
}

impl OrderExtractor {
    fn parser(&self) -> TextOrderParser {
        TextOrderParser::with_config(self.config.clone())
    }
}

impl Default for OrderExtractor {
    fn default() -> Self {
        Self::new()
    }
}
