//! Data models for extracted orders and configuration.

pub mod config;
pub mod order;
