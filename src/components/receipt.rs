//! # Receipt Component
//!
//! The root container for building text panels.

use super::Component;

/// Receipt is the root container component.
///
/// ## Example
///
/// ```
/// use pizzeria::components::*;
///
/// let receipt = Receipt::new()
///     .child(Text::new("Hello"))
///     .child(Text::new("World"));
///
/// assert_eq!(receipt.render(), "Hello\nWorld");
/// ```
#[derive(Default)]
pub struct Receipt {
    children: Vec<Box<dyn Component>>,
}

impl Receipt {
    /// Create a new empty receipt.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Add a child component.
    pub fn child<C: Component + 'static>(mut self, component: C) -> Self {
        self.children.push(Box::new(component));
        self
    }

    /// Add multiple child components.
    pub fn children<I, C>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Component + 'static,
    {
        for c in components {
            self.children.push(Box::new(c));
        }
        self
    }

    /// Add a child in place.
    pub fn push<C: Component + 'static>(&mut self, component: C) {
        self.children.push(Box::new(component));
    }
}

impl Component for Receipt {
    fn emit(&self, lines: &mut Vec<String>) {
        for child in &self.children {
            child.emit(lines);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ComponentExt, Divider, Text};

    #[test]
    fn test_empty_receipt() {
        let receipt = Receipt::new();
        assert!(receipt.lines().is_empty());
        assert_eq!(receipt.render(), "");
    }

    #[test]
    fn test_receipt_with_children() {
        let receipt = Receipt::new()
            .child(Text::new("Hello"))
            .child(Divider::dashed().width(3))
            .child(Text::new("World"));
        assert_eq!(receipt.lines(), vec!["Hello", "---", "World"]);
    }

    #[test]
    fn test_nested_receipts() {
        let inner = Receipt::new().children(["a", "b"].map(Text::new));
        let mut outer = Receipt::new().child(inner);
        outer.push(Text::new("c"));
        assert_eq!(outer.render(), "a\nb\nc");
    }
}
