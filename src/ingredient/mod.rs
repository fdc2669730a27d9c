//! # Ingredient Tree
//!
//! Priced ingredients form a tree: [`Topping`] leaves and [`ToppingGroup`]
//! containers that may nest other groups.
//!
//! ```
//! use pizzeria::ingredient::*;
//!
//! let pizza = ToppingGroup::new("Pepperoni")
//!     .child(ToppingGroup::base())
//!     .child(Topping::new("Pepperoni"));
//!
//! assert_eq!(pizza.price(), 50.0);
//! assert_eq!(pizza.name(), "Pepperoni (Base (Dough, Tomato Sauce, Cheese), Pepperoni)");
//! ```
//!
//! ## Ingredient Trait
//!
//! Every node can deep-copy itself through [`Ingredient::clone_box`], so
//! containers copy their children without knowing their concrete types.
//! Each node also carries an [`IngredientId`]; copies always get a new one.

mod group;
mod topping;

pub use group::*;
pub use topping::*;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of a single ingredient node.
///
/// Two nodes with equal names and prices still have different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IngredientId(u64);

impl IngredientId {
    /// Allocate a fresh, process-unique id.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for IngredientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A priced node in the ingredient tree.
pub trait Ingredient: fmt::Debug {
    /// Identity of this node.
    fn id(&self) -> IngredientId;

    /// Display name. Containers include their children.
    fn name(&self) -> String;

    /// Price of this node, including everything below it.
    fn price(&self) -> f64;

    /// Deep copy into a new, independent node.
    fn clone_box(&self) -> Box<dyn Ingredient>;

    /// View this node as a group, if it is one.
    fn as_group(&self) -> Option<&ToppingGroup> {
        None
    }

    /// Mutable view of this node as a group, if it is one.
    fn as_group_mut(&mut self) -> Option<&mut ToppingGroup> {
        None
    }
}

impl Clone for Box<dyn Ingredient> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
