//! Order extraction from pasted text.

mod parser;
pub mod rules;

pub use parser::{extract_from_text, ExtractionResult, OrderParser, TextOrderParser, TotalSource};
