//! # Base Pizza
//!
//! The innermost layer of every pizza: an optional ingredient tree.

use super::Pizza;
use crate::ingredient::Ingredient;

/// A pizza made directly from an ingredient tree.
///
/// ## Example
///
/// ```
/// use pizzeria::ingredient::{Topping, ToppingGroup};
/// use pizzeria::pizza::{BasePizza, Pizza};
///
/// let pizza = BasePizza::new(ToppingGroup::vegetarian());
/// assert_eq!(pizza.price(), 60.0);
///
/// // A single topping works as a root too.
/// let plain = BasePizza::new(Topping::new("Cheese"));
/// assert_eq!(plain.name(), "Cheese");
///
/// let empty = BasePizza::empty();
/// assert_eq!(empty.name(), "Empty Pizza");
/// assert_eq!(empty.price(), 0.0);
/// ```
#[derive(Debug, Default)]
pub struct BasePizza {
    toppings: Option<Box<dyn Ingredient>>,
}

impl BasePizza {
    /// Create a pizza from an ingredient tree.
    pub fn new<I: Ingredient + 'static>(toppings: I) -> Self {
        Self {
            toppings: Some(Box::new(toppings)),
        }
    }

    /// Create a pizza from an optional, already boxed ingredient tree.
    pub fn from_boxed(toppings: Option<Box<dyn Ingredient>>) -> Self {
        Self { toppings }
    }

    /// Create a pizza with no ingredients.
    pub fn empty() -> Self {
        Self { toppings: None }
    }

    /// The ingredient tree, if any.
    pub fn toppings(&self) -> Option<&dyn Ingredient> {
        self.toppings.as_deref()
    }

    /// Mutable access to the ingredient tree, if any.
    pub fn toppings_mut(&mut self) -> Option<&mut (dyn Ingredient + 'static)> {
        self.toppings.as_deref_mut()
    }
}

impl Clone for BasePizza {
    fn clone(&self) -> Self {
        Self {
            toppings: self.toppings.as_ref().map(|t| t.clone_box()),
        }
    }
}

impl Pizza for BasePizza {
    fn price(&self) -> f64 {
        self.toppings.as_ref().map_or(0.0, |t| t.price())
    }

    fn name(&self) -> String {
        self.toppings
            .as_ref()
            .map_or_else(|| "Empty Pizza".to_string(), |t| t.name())
    }

    fn clone_box(&self) -> Box<dyn Pizza> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredient::{Topping, ToppingGroup};

    #[test]
    fn test_delegates_to_root() {
        let pizza = BasePizza::new(ToppingGroup::meat_lovers());
        assert_eq!(pizza.price(), 97.0);
        assert!(pizza.name().starts_with("Meat Lovers ("));
    }

    #[test]
    fn test_empty_defaults() {
        let pizza = BasePizza::default();
        assert_eq!(pizza.name(), "Empty Pizza");
        assert_eq!(pizza.price(), 0.0);
        assert!(pizza.toppings().is_none());
    }

    #[test]
    fn test_clone_leaf_root() {
        let pizza = BasePizza::new(Topping::new("Salami"));
        let copy = pizza.clone_box();
        assert_eq!(copy.name(), "Salami");
        assert_eq!(copy.price(), 22.0);
    }

    #[test]
    fn test_clone_empty() {
        let copy = BasePizza::empty().clone_box();
        assert_eq!(copy.name(), "Empty Pizza");
    }

    #[test]
    fn test_clone_is_independent() {
        let original = BasePizza::new(ToppingGroup::pepperoni());
        let mut copy = original.clone();

        let group = copy.toppings_mut().and_then(|t| t.as_group_mut()).unwrap();
        group.add(Topping::new("Olives"));

        assert_eq!(copy.price(), 65.0);
        assert_eq!(original.price(), 50.0);
        assert_ne!(
            copy.toppings().unwrap().id(),
            original.toppings().unwrap().id()
        );
    }
}
