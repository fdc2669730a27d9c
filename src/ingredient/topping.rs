//! # Toppings
//!
//! Leaf ingredients and the fixed price catalog they are looked up in.

use std::collections::BTreeMap;

use super::{Ingredient, IngredientId};

/// Every known topping and its price.
///
/// | Topping | Price |
/// |---------|-------|
/// | Dough | 10.00 |
/// | Tomato Sauce | 5.00 |
/// | Cheese | 15.00 |
/// | Pepperoni | 20.00 |
/// | Mushrooms | 12.00 |
/// | Green Peppers | 10.00 |
/// | Onions | 8.00 |
/// | Beef Sausage | 25.00 |
/// | Salami | 22.00 |
/// | Feta Cheese | 18.00 |
/// | Olives | 15.00 |
pub const CATALOG: &[(&str, f64)] = &[
    // Base ingredients
    ("Dough", 10.00),
    ("Tomato Sauce", 5.00),
    ("Cheese", 15.00),
    // Toppings
    ("Pepperoni", 20.00),
    ("Mushrooms", 12.00),
    ("Green Peppers", 10.00),
    ("Onions", 8.00),
    ("Beef Sausage", 25.00),
    ("Salami", 22.00),
    ("Feta Cheese", 18.00),
    ("Olives", 15.00),
];

/// Look up the catalog price of a topping. Names are case-sensitive.
pub fn price_of(name: &str) -> Option<f64> {
    CATALOG
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, price)| *price)
}

/// Check whether a topping name is in the catalog.
pub fn is_valid_topping(name: &str) -> bool {
    price_of(name).is_some()
}

/// All toppings keyed by name, in alphabetical order.
pub fn all_toppings() -> BTreeMap<&'static str, f64> {
    CATALOG.iter().copied().collect()
}

/// A single catalog ingredient.
///
/// ## Example
///
/// ```
/// use pizzeria::ingredient::{Ingredient, Topping};
///
/// assert_eq!(Topping::new("Pepperoni").price(), 20.0);
///
/// // Unknown names are kept but cost nothing.
/// let odd = Topping::new("Pineapple");
/// assert_eq!(odd.name(), "Pineapple");
/// assert_eq!(odd.price(), 0.0);
/// ```
#[derive(Debug)]
pub struct Topping {
    id: IngredientId,
    name: String,
    price: f64,
}

impl Topping {
    /// Create a topping, resolving its price from the catalog.
    ///
    /// Unknown names get a price of 0.0 and a warning in the log.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let price = match price_of(&name) {
            Some(price) => price,
            None => {
                log::warn!("Unknown topping '{}', using price 0.00", name);
                0.0
            }
        };
        Self {
            id: IngredientId::next(),
            name,
            price,
        }
    }

    /// Whether this topping was found in the catalog.
    pub fn is_known(&self) -> bool {
        is_valid_topping(&self.name)
    }
}

impl Clone for Topping {
    fn clone(&self) -> Self {
        Self {
            id: IngredientId::next(),
            name: self.name.clone(),
            price: self.price,
        }
    }
}

impl Ingredient for Topping {
    fn id(&self) -> IngredientId {
        self.id
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn clone_box(&self) -> Box<dyn Ingredient> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_prices() {
        assert_eq!(Topping::new("Dough").price(), 10.0);
        assert_eq!(Topping::new("Tomato Sauce").price(), 5.0);
        assert_eq!(Topping::new("Pepperoni").price(), 20.0);
        assert_eq!(Topping::new("Beef Sausage").price(), 25.0);
        assert_eq!(Topping::new("Olives").price(), 15.0);
    }

    #[test]
    fn test_unknown_topping_is_free() {
        let topping = Topping::new("NotARealTopping");
        assert_eq!(topping.price(), 0.0);
        assert_eq!(topping.name(), "NotARealTopping");
        assert!(!topping.is_known());
    }

    #[test]
    fn test_name_is_not_normalized() {
        let topping = Topping::new("pepperoni");
        assert_eq!(topping.name(), "pepperoni");
        assert_eq!(topping.price(), 0.0);
    }

    #[test]
    fn test_is_valid_topping() {
        assert!(is_valid_topping("Feta Cheese"));
        assert!(!is_valid_topping("feta cheese"));
        assert!(!is_valid_topping(""));
    }

    #[test]
    fn test_all_toppings_sorted() {
        let toppings = all_toppings();
        assert_eq!(toppings.len(), 11);
        let names: Vec<_> = toppings.keys().copied().collect();
        assert_eq!(names.first(), Some(&"Beef Sausage"));
        assert_eq!(names.last(), Some(&"Tomato Sauce"));
        assert_eq!(toppings["Salami"], 22.0);
    }

    #[test]
    fn test_clone_keeps_price_without_lookup() {
        let original = Topping::new("Mystery");
        let copy = original.clone();
        assert_eq!(copy.name(), "Mystery");
        assert_eq!(copy.price(), 0.0);
        assert_ne!(copy.id(), original.id());
    }
}
