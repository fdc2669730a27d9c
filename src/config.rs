//! # Shop Configuration
//!
//! Presentation settings for a pizzeria: shop name, currency symbol and
//! receipt width. Topping prices are deliberately absent; they live in the
//! constant catalog in [`crate::ingredient`].
//!
//! ## Usage
//!
//! ```
//! use pizzeria::config::ShopConfig;
//!
//! let config = ShopConfig::default();
//! assert_eq!(config.name, "Romeo's Pizza");
//! assert_eq!(config.money(45.0), "R45.00");
//! ```
//!
//! A JSON file may override any subset of fields:
//!
//! ```json
//! { "name": "Luigi's", "receipt_width": 48 }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::PizzeriaError;

/// Currency symbol used when no configuration is supplied.
pub const CURRENCY_SYMBOL: &str = "R";

/// Default receipt width in characters.
pub const RECEIPT_WIDTH: usize = 41;

/// Presentation settings for a shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Shop name printed on menus and receipts
    pub name: String,

    /// Currency symbol prefixed to every amount
    pub currency: String,

    /// Receipt width in characters
    pub receipt_width: usize,

    /// Number given to the first order created by the CLI
    pub first_order_number: u32,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: "Romeo's Pizza".to_string(),
            currency: CURRENCY_SYMBOL.to_string(),
            receipt_width: RECEIPT_WIDTH,
            first_order_number: 1,
        }
    }
}

impl ShopConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Missing fields fall back to [`ShopConfig::default`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PizzeriaError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        Self::from_json(&data).map_err(|source| PizzeriaError::Config {
            path: path.display().to_string(),
            source,
        })
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Format an amount with this shop's currency symbol.
    #[inline]
    pub fn money(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency, amount)
    }
}
