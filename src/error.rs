//! # Error Types
//!
//! This module defines error types used throughout the pizzeria library.
//!
//! Lifecycle refusals have their own type, [`Rejection`](crate::order::Rejection),
//! since a refused action is an expected outcome rather than a failure.

use thiserror::Error;

/// Main error type for pizzeria operations
#[derive(Debug, Error)]
pub enum PizzeriaError {
    /// Preset pizza name not found
    #[error("Unknown pizza '{0}'. Run `pizzeria menu` to see available pizzas.")]
    UnknownPreset(String),

    /// Add-on name not recognised in a pizza spec
    #[error("Unknown add-on '{0}' (expected extra-cheese or stuffed-crust)")]
    UnknownAddOn(String),

    /// Discount strategy name not found
    #[error("Unknown discount '{0}'. Run `pizzeria discounts` to see available discounts.")]
    UnknownDiscount(String),

    /// Malformed pizza spec
    #[error("Invalid pizza spec: {0}")]
    InvalidSpec(String),

    /// An order refused a lifecycle action
    #[error("Order action refused: {0}")]
    Rejected(#[from] crate::order::Rejection),

    /// Configuration file could not be parsed
    #[error("Config error in {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
