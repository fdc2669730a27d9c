//! # Text Components
//!
//! Small declarative components for laying out plain-text receipts, menus
//! and status panels.
//!
//! ```
//! use pizzeria::components::*;
//!
//! let receipt = Receipt::new()
//!     .child(Header::new("ROMEO'S PIZZA").width(20))
//!     .child(Divider::dashed().width(20))
//!     .child(LineItem::new("Pepperoni", 50.0).width(20))
//!     .child(Total::labeled("TOTAL:", 50.0).width(20));
//!
//! let text = receipt.render();
//! assert!(text.contains("R50.00"));
//! ```
//!
//! ## Component Trait
//!
//! All components implement the `Component` trait, which emits finished
//! lines. Containers hold children and emit them in order.

mod layout;
mod receipt;
mod text;

pub use layout::*;
pub use receipt::*;
pub use text::*;

/// Trait for declarative components.
pub trait Component {
    /// Emit the lines for this component.
    fn emit(&self, lines: &mut Vec<String>);
}

/// Extension trait for rendering components.
pub trait ComponentExt: Component {
    /// Collect the emitted lines.
    fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.emit(&mut lines);
        lines
    }

    /// Render to a single string, one line per row, no trailing newline.
    fn render(&self) -> String {
        self.lines().join("\n")
    }
}

// Blanket implementation for all components
impl<T: Component + ?Sized> ComponentExt for T {}

// Allow boxed components
impl Component for Box<dyn Component> {
    fn emit(&self, lines: &mut Vec<String>) {
        self.as_ref().emit(lines);
    }
}

// Allow references to components
impl<T: Component + ?Sized> Component for &T {
    fn emit(&self, lines: &mut Vec<String>) {
        (*self).emit(lines);
    }
}

/// Number of characters in `s` (not bytes).
pub(crate) fn display_width(s: &str) -> usize {
    s.chars().count()
}
