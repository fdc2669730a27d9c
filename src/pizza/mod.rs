//! # Pizzas
//!
//! A sellable pizza is a [`BasePizza`] wrapping an ingredient tree, optionally
//! wrapped in any number of add-on decorators.
//!
//! ```
//! use pizzeria::ingredient::ToppingGroup;
//! use pizzeria::pizza::*;
//!
//! let pizza = BasePizza::new(ToppingGroup::pepperoni())
//!     .extra_cheese()
//!     .stuffed_crust();
//!
//! assert_eq!(pizza.price(), 50.0 + 12.0 + 20.0);
//! assert!(pizza.name().ends_with(" + Extra Cheese + Stuffed Crust"));
//! ```
//!
//! ## Pizza Trait
//!
//! Every layer reports its price and name and can deep-copy itself through
//! [`Pizza::clone_box`]. Decorators own the pizza they wrap, so dropping the
//! outermost layer releases the whole chain.

mod base;
mod decorator;

pub use base::*;
pub use decorator::*;

use std::fmt;

/// A sellable pizza: a base or a decorated pizza.
pub trait Pizza: fmt::Debug {
    /// Price including every layer below this one.
    fn price(&self) -> f64;

    /// Display name including every layer below this one.
    fn name(&self) -> String;

    /// Deep copy into a new, independent pizza.
    fn clone_box(&self) -> Box<dyn Pizza>;

    /// Heading used when the pizza is printed on its own.
    fn heading(&self) -> &'static str {
        "Pizza"
    }
}

impl Clone for Box<dyn Pizza> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl From<BasePizza> for Box<dyn Pizza> {
    fn from(pizza: BasePizza) -> Self {
        Box::new(pizza)
    }
}

impl From<ExtraCheese> for Box<dyn Pizza> {
    fn from(pizza: ExtraCheese) -> Self {
        Box::new(pizza)
    }
}

impl From<StuffedCrust> for Box<dyn Pizza> {
    fn from(pizza: StuffedCrust) -> Self {
        Box::new(pizza)
    }
}

/// Extension trait for decorating pizzas fluently.
pub trait PizzaExt: Into<Box<dyn Pizza>> {
    /// Wrap in an [`ExtraCheese`] layer.
    fn extra_cheese(self) -> ExtraCheese {
        ExtraCheese::new(self)
    }

    /// Wrap in a [`StuffedCrust`] layer.
    fn stuffed_crust(self) -> StuffedCrust {
        StuffedCrust::new(self)
    }

    /// Erase the concrete type.
    fn boxed(self) -> Box<dyn Pizza> {
        self.into()
    }
}

// Blanket implementation for everything that can become a boxed pizza
impl<T: Into<Box<dyn Pizza>>> PizzaExt for T {}
