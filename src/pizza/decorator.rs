//! # Add-on Decorators
//!
//! Layers that wrap another pizza, adding a fixed surcharge and a name suffix.
//! Layers stack in any order, and the same add-on may appear more than once.

use super::Pizza;

/// Common view of an add-on layer.
pub trait Decorator: Pizza {
    /// The pizza this layer wraps.
    fn wrapped(&self) -> &dyn Pizza;

    /// Amount this layer adds to the wrapped price.
    fn surcharge(&self) -> f64;
}

/// Extra cheese on top of another pizza (+12.00).
///
/// ## Example
///
/// ```
/// use pizzeria::ingredient::ToppingGroup;
/// use pizzeria::pizza::{BasePizza, ExtraCheese, Pizza};
///
/// let pizza = ExtraCheese::new(BasePizza::new(ToppingGroup::pepperoni()));
/// assert_eq!(pizza.price(), 62.0);
/// ```
#[derive(Debug, Clone)]
pub struct ExtraCheese {
    pizza: Box<dyn Pizza>,
}

impl ExtraCheese {
    pub const PRICE: f64 = 12.00;
    pub const LABEL: &'static str = "Extra Cheese";

    pub fn new(pizza: impl Into<Box<dyn Pizza>>) -> Self {
        Self {
            pizza: pizza.into(),
        }
    }

    /// Remove this layer, returning the wrapped pizza.
    pub fn into_inner(self) -> Box<dyn Pizza> {
        self.pizza
    }
}

impl Pizza for ExtraCheese {
    fn price(&self) -> f64 {
        self.pizza.price() + Self::PRICE
    }

    fn name(&self) -> String {
        format!("{} + {}", self.pizza.name(), Self::LABEL)
    }

    fn clone_box(&self) -> Box<dyn Pizza> {
        Box::new(ExtraCheese::new(self.pizza.clone_box()))
    }

    fn heading(&self) -> &'static str {
        "Pizza with Extra Cheese"
    }
}

impl Decorator for ExtraCheese {
    fn wrapped(&self) -> &dyn Pizza {
        self.pizza.as_ref()
    }

    fn surcharge(&self) -> f64 {
        Self::PRICE
    }
}

/// A cheese-stuffed crust around another pizza (+20.00).
#[derive(Debug, Clone)]
pub struct StuffedCrust {
    pizza: Box<dyn Pizza>,
}

impl StuffedCrust {
    pub const PRICE: f64 = 20.00;
    pub const LABEL: &'static str = "Stuffed Crust";

    pub fn new(pizza: impl Into<Box<dyn Pizza>>) -> Self {
        Self {
            pizza: pizza.into(),
        }
    }

    /// Remove this layer, returning the wrapped pizza.
    pub fn into_inner(self) -> Box<dyn Pizza> {
        self.pizza
    }
}

impl Pizza for StuffedCrust {
    fn price(&self) -> f64 {
        self.pizza.price() + Self::PRICE
    }

    fn name(&self) -> String {
        format!("{} + {}", self.pizza.name(), Self::LABEL)
    }

    fn clone_box(&self) -> Box<dyn Pizza> {
        Box::new(StuffedCrust::new(self.pizza.clone_box()))
    }

    fn heading(&self) -> &'static str {
        "Pizza with Stuffed Crust"
    }
}

impl Decorator for StuffedCrust {
    fn wrapped(&self) -> &dyn Pizza {
        self.pizza.as_ref()
    }

    fn surcharge(&self) -> f64 {
        Self::PRICE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredient::{Topping, ToppingGroup};
    use crate::pizza::{BasePizza, PizzaExt};

    #[test]
    fn test_extra_cheese() {
        let pizza = BasePizza::new(ToppingGroup::pepperoni()).extra_cheese();
        assert_eq!(pizza.price(), 62.0);
        assert_eq!(
            pizza.name(),
            "Pepperoni (Base (Dough, Tomato Sauce, Cheese), Pepperoni) + Extra Cheese"
        );
        assert_eq!(pizza.heading(), "Pizza with Extra Cheese");
    }

    #[test]
    fn test_stuffed_crust() {
        let pizza = BasePizza::new(ToppingGroup::vegetarian()).stuffed_crust();
        assert_eq!(pizza.price(), 80.0);
        assert!(pizza.name().ends_with(" + Stuffed Crust"));
        assert_eq!(pizza.surcharge(), 20.0);
    }

    #[test]
    fn test_same_decorator_twice() {
        let pizza = BasePizza::new(Topping::new("Dough"))
            .extra_cheese()
            .extra_cheese();
        assert_eq!(pizza.price(), 10.0 + 24.0);
        assert_eq!(pizza.name(), "Dough + Extra Cheese + Extra Cheese");
    }

    #[test]
    fn test_decorating_empty_pizza() {
        let pizza = BasePizza::empty().stuffed_crust();
        assert_eq!(pizza.name(), "Empty Pizza + Stuffed Crust");
        assert_eq!(pizza.price(), 20.0);
    }

    #[test]
    fn test_chain_inspection() {
        let pizza = BasePizza::new(ToppingGroup::pepperoni())
            .extra_cheese()
            .stuffed_crust();
        assert_eq!(pizza.wrapped().price(), 62.0);
        assert_eq!(pizza.into_inner().price(), 62.0);
    }

    #[test]
    fn test_clone_chain_is_equal() {
        let pizza = BasePizza::new(ToppingGroup::meat_lovers())
            .stuffed_crust()
            .extra_cheese();
        let copy = pizza.clone_box();
        assert_eq!(copy.price(), pizza.price());
        assert_eq!(copy.name(), pizza.name());
        assert_eq!(copy.heading(), "Pizza with Extra Cheese");
    }
}
