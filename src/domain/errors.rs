//! Domain errors. Used by ports, aggregates and the status engine.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A category string fell outside its closed set (e.g. `priority = "URGENT"`).
    #[error("Invalid category for {field}: {value:?}")]
    InvalidCategory { field: &'static str, value: String },

    /// `usage_fraction` called with a zero total.
    #[error("Division by zero: resource quantity is 0")]
    DivisionByZero,

    /// Status regression rejected. The record keeps `from`.
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Record source error: {0}")]
    Source(String),

    #[error("UI error: {0}")]
    Ui(String),
}

impl DomainError {
    pub fn invalid_category(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidCategory {
            field,
            value: value.into(),
        }
    }
}
