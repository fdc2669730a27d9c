//! # Layout Components
//!
//! Components for controlling layout and spacing.

use super::{Component, display_width};
use crate::config::RECEIPT_WIDTH;

/// Divider style options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DividerStyle {
    /// Dashed line (default): ------------
    #[default]
    Dashed,
    /// Equals line: ============
    Equals,
}

/// A horizontal divider line.
///
/// ## Example
///
/// ```
/// use pizzeria::components::{ComponentExt, Divider, DividerStyle};
///
/// assert_eq!(Divider::equals().width(4).render(), "====");
/// assert_eq!(Divider::new(DividerStyle::Dashed).width(3).render(), "---");
/// ```
pub struct Divider {
    style: DividerStyle,
    width: usize,
}

impl Divider {
    /// Create a divider with a specific style.
    pub fn new(style: DividerStyle) -> Self {
        Self {
            style,
            width: RECEIPT_WIDTH,
        }
    }

    /// Create a dashed divider.
    pub fn dashed() -> Self {
        Self::new(DividerStyle::Dashed)
    }

    /// Create an equals-sign divider.
    pub fn equals() -> Self {
        Self::new(DividerStyle::Equals)
    }

    /// Set the character width.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

impl Default for Divider {
    fn default() -> Self {
        Self::dashed()
    }
}

impl Component for Divider {
    fn emit(&self, lines: &mut Vec<String>) {
        let line = match self.style {
            DividerStyle::Dashed => "-".repeat(self.width),
            DividerStyle::Equals => "=".repeat(self.width),
        };
        lines.push(line);
    }
}

/// Blank lines.
///
/// ## Example
///
/// ```
/// use pizzeria::components::{ComponentExt, Spacer};
///
/// assert_eq!(Spacer::lines(2).lines(), vec!["", ""]);
/// ```
pub struct Spacer {
    lines: usize,
}

impl Spacer {
    /// Create a spacer of `n` blank lines.
    pub fn lines(n: usize) -> Self {
        Self { lines: n }
    }
}

impl Default for Spacer {
    fn default() -> Self {
        Self::lines(1)
    }
}

impl Component for Spacer {
    fn emit(&self, lines: &mut Vec<String>) {
        lines.extend(std::iter::repeat_n(String::new(), self.lines));
    }
}

/// A two-column layout (left and right aligned text on same line).
///
/// ## Example
///
/// ```
/// use pizzeria::components::{Columns, ComponentExt};
///
/// let row = Columns::new("Left", "Right").width(12);
/// assert_eq!(row.render(), "Left   Right");
/// ```
pub struct Columns {
    left: String,
    right: String,
    width: usize,
}

impl Columns {
    /// Create a two-column row.
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            width: RECEIPT_WIDTH,
        }
    }

    /// Set the character width.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

impl Component for Columns {
    fn emit(&self, lines: &mut Vec<String>) {
        // Always at least one space between the columns
        let padding = self
            .width
            .saturating_sub(display_width(&self.left) + display_width(&self.right))
            .max(1);
        lines.push(format!("{}{}{}", self.left, " ".repeat(padding), self.right));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentExt;

    #[test]
    fn test_dashed_divider() {
        let div = Divider::dashed().width(10);
        assert_eq!(div.render(), "----------");
    }

    #[test]
    fn test_default_width() {
        let div = Divider::default();
        assert_eq!(div.render().len(), RECEIPT_WIDTH);
    }

    #[test]
    fn test_spacer() {
        assert_eq!(Spacer::lines(3).lines().len(), 3);
        assert!(Spacer::lines(0).lines().is_empty());
    }

    #[test]
    fn test_columns() {
        let cols = Columns::new("Left", "Right").width(20);
        let line = cols.render();
        assert!(line.starts_with("Left"));
        assert!(line.ends_with("Right"));
        assert_eq!(line.len(), 20);
    }

    #[test]
    fn test_columns_overflow_keeps_gap() {
        let cols = Columns::new("A long label", "value").width(5);
        assert_eq!(cols.render(), "A long label value");
    }
}
