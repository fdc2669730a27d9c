//! # Text Components
//!
//! Components for displaying text lines and prices.

use super::{Component, display_width};
use crate::config::{CURRENCY_SYMBOL, RECEIPT_WIDTH};

/// Horizontal alignment within the receipt width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A single line of text.
///
/// ## Example
///
/// ```
/// use pizzeria::components::*;
///
/// assert_eq!(Text::new("hi").render(), "hi");
/// assert_eq!(Text::new("hi").center().width(6).render(), "  hi");
/// assert_eq!(Text::new("hi").right().width(6).render(), "    hi");
/// ```
pub struct Text {
    content: String,
    alignment: Alignment,
    width: usize,
}

impl Text {
    /// Create a new text component.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            alignment: Alignment::Left,
            width: RECEIPT_WIDTH,
        }
    }

    /// Center the text.
    pub fn center(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    /// Right-align the text.
    pub fn right(mut self) -> Self {
        self.alignment = Alignment::Right;
        self
    }

    /// Left-align the text (explicit).
    pub fn left(mut self) -> Self {
        self.alignment = Alignment::Left;
        self
    }

    /// Set the width used for alignment.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

impl Component for Text {
    fn emit(&self, lines: &mut Vec<String>) {
        let free = self.width.saturating_sub(display_width(&self.content));
        // Left and centered lines carry no trailing spaces
        let indent = match self.alignment {
            Alignment::Left => 0,
            Alignment::Center => free / 2,
            Alignment::Right => free,
        };
        lines.push(format!("{}{}", " ".repeat(indent), self.content));
    }
}

/// A header: a centered title between two rules.
///
/// ## Example
///
/// ```
/// use pizzeria::components::{ComponentExt, Header};
///
/// let header = Header::new("MENU").width(8);
/// assert_eq!(header.lines(), vec!["========", "  MENU", "========"]);
/// ```
pub struct Header {
    title: Vec<String>,
    width: usize,
}

impl Header {
    /// Create a new header.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            title: vec![content.into()],
            width: RECEIPT_WIDTH,
        }
    }

    /// Add another centered line under the title.
    pub fn subtitle(mut self, content: impl Into<String>) -> Self {
        self.title.push(content.into());
        self
    }

    /// Set the character width.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

impl Component for Header {
    fn emit(&self, lines: &mut Vec<String>) {
        let rule = "=".repeat(self.width);
        lines.push(rule.clone());
        for line in &self.title {
            Text::new(line.as_str()).center().width(self.width).emit(lines);
        }
        lines.push(rule);
    }
}

/// A line item component (name on left, price on right).
///
/// ## Example
///
/// ```
/// use pizzeria::components::{ComponentExt, LineItem};
///
/// let item = LineItem::new("Olives", 15.0).width(16);
/// assert_eq!(item.render(), "Olives    R15.00");
/// ```
pub struct LineItem {
    name: String,
    price: f64,
    currency: String,
    width: usize,
}

impl LineItem {
    /// Create a new line item.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            currency: CURRENCY_SYMBOL.to_string(),
            width: RECEIPT_WIDTH,
        }
    }

    /// Set the currency symbol.
    pub fn currency(mut self, symbol: impl Into<String>) -> Self {
        self.currency = symbol.into();
        self
    }

    /// Set the character width for formatting.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

impl Component for LineItem {
    fn emit(&self, lines: &mut Vec<String>) {
        let price_str = format!("{}{:.2}", self.currency, self.price);
        let price_width = display_width(&price_str);
        let name_max_width = self.width.saturating_sub(price_width + 1);
        let name: String = self.name.chars().take(name_max_width).collect();
        let padding = self
            .width
            .saturating_sub(display_width(&name) + price_width)
            .max(1);
        lines.push(format!("{}{}{}", name, " ".repeat(padding), price_str));
    }
}

/// A total component (label and amount, right-aligned).
///
/// ## Example
///
/// ```
/// use pizzeria::components::{ComponentExt, Total};
///
/// let total = Total::new(19.99).width(16);
/// assert_eq!(total.render(), "  TOTAL:  R19.99");
/// ```
pub struct Total {
    label: String,
    amount: f64,
    currency: String,
    width: usize,
}

impl Total {
    /// Create a new total with default "TOTAL:" label.
    pub fn new(amount: f64) -> Self {
        Self::labeled("TOTAL:", amount)
    }

    /// Create a total with a custom label.
    pub fn labeled(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
            currency: CURRENCY_SYMBOL.to_string(),
            width: RECEIPT_WIDTH,
        }
    }

    /// Set the currency symbol.
    pub fn currency(mut self, symbol: impl Into<String>) -> Self {
        self.currency = symbol.into();
        self
    }

    /// Set the character width.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

impl Component for Total {
    fn emit(&self, lines: &mut Vec<String>) {
        // Format: "LABEL:  VALUE" with two spaces between
        let line = format!("{}  {}{:.2}", self.label, self.currency, self.amount);
        Text::new(line).right().width(self.width).emit(lines);
    }
}
