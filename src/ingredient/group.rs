//! # Topping Groups
//!
//! The container node of the ingredient tree, plus the preset recipes.

use super::{Ingredient, IngredientId, Topping};

/// A labelled, ordered collection of ingredients.
///
/// The group owns its children. Its price is always computed from the
/// current children, never cached.
///
/// ## Example
///
/// ```
/// use pizzeria::ingredient::*;
///
/// let mut group = ToppingGroup::new("Extras");
/// assert_eq!(group.name(), "Extras");
///
/// let olives = group.add(Topping::new("Olives"));
/// group.add(Topping::new("Onions"));
/// assert_eq!(group.name(), "Extras (Olives, Onions)");
/// assert_eq!(group.price(), 23.0);
///
/// assert!(group.remove_component(olives).is_some());
/// assert_eq!(group.price(), 8.0);
/// ```
#[derive(Debug)]
pub struct ToppingGroup {
    id: IngredientId,
    label: String,
    children: Vec<Box<dyn Ingredient>>,
}

impl ToppingGroup {
    /// Create an empty group.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: IngredientId::next(),
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Add a child (builder style).
    pub fn child<I: Ingredient + 'static>(mut self, ingredient: I) -> Self {
        self.children.push(Box::new(ingredient));
        self
    }

    /// Add several catalog toppings by name (builder style).
    pub fn toppings<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.children.push(Box::new(Topping::new(name)));
        }
        self
    }

    /// Append a child and return its identity.
    pub fn add<I: Ingredient + 'static>(&mut self, ingredient: I) -> IngredientId {
        self.add_component(Box::new(ingredient))
    }

    /// Append an already boxed child and return its identity.
    pub fn add_component(&mut self, component: Box<dyn Ingredient>) -> IngredientId {
        let id = component.id();
        self.children.push(component);
        id
    }

    /// Remove the direct child with the given identity.
    ///
    /// Returns the detached child, or `None` if no child has that identity.
    /// Matching is by identity only: a different node with the same name
    /// and price is not removed.
    pub fn remove_component(&mut self, id: IngredientId) -> Option<Box<dyn Ingredient>> {
        let position = self.children.iter().position(|c| c.id() == id)?;
        Some(self.children.remove(position))
    }

    /// The group label without children.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Direct children, in order.
    pub fn components(&self) -> &[Box<dyn Ingredient>] {
        &self.children
    }

    /// Mutable access to the direct children.
    pub fn components_mut(&mut self) -> &mut [Box<dyn Ingredient>] {
        &mut self.children
    }

    /// Drop every child.
    pub fn clear_components(&mut self) {
        self.children.clear();
    }

    /// Whether the group has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children.
    pub fn component_count(&self) -> usize {
        self.children.len()
    }

    // ------------------------------------------------------------------
    // Presets
    // ------------------------------------------------------------------

    /// Dough, Tomato Sauce and Cheese.
    pub fn base() -> Self {
        Self::new("Base").toppings(["Dough", "Tomato Sauce", "Cheese"])
    }

    /// Base + Pepperoni.
    pub fn pepperoni() -> Self {
        Self::new("Pepperoni")
            .child(Self::base())
            .child(Topping::new("Pepperoni"))
    }

    /// Base + Mushrooms, Green Peppers, Onions.
    pub fn vegetarian() -> Self {
        Self::new("Vegetarian")
            .child(Self::base())
            .toppings(["Mushrooms", "Green Peppers", "Onions"])
    }

    /// A whole Pepperoni group + Beef Sausage, Salami.
    pub fn meat_lovers() -> Self {
        Self::new("Meat Lovers")
            .child(Self::pepperoni())
            .toppings(["Beef Sausage", "Salami"])
    }

    /// A whole Vegetarian group + Feta Cheese, Olives.
    pub fn vegetarian_deluxe() -> Self {
        Self::new("Vegetarian Deluxe")
            .child(Self::vegetarian())
            .toppings(["Feta Cheese", "Olives"])
    }
}

impl Clone for ToppingGroup {
    fn clone(&self) -> Self {
        Self {
            id: IngredientId::next(),
            label: self.label.clone(),
            children: self.children.iter().map(|c| c.clone_box()).collect(),
        }
    }
}

impl Ingredient for ToppingGroup {
    fn id(&self) -> IngredientId {
        self.id
    }

    fn name(&self) -> String {
        if self.children.is_empty() {
            return self.label.clone();
        }
        let names: Vec<String> = self.children.iter().map(|c| c.name()).collect();
        format!("{} ({})", self.label, names.join(", "))
    }

    fn price(&self) -> f64 {
        // Folding from +0.0 keeps an empty group from pricing at -0.0
        self.children.iter().fold(0.0, |acc, c| acc + c.price())
    }

    fn clone_box(&self) -> Box<dyn Ingredient> {
        Box::new(self.clone())
    }

    fn as_group(&self) -> Option<&ToppingGroup> {
        Some(self)
    }

    fn as_group_mut(&mut self) -> Option<&mut ToppingGroup> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sum of children computed independently of `ToppingGroup::price`.
    fn expected_price(node: &dyn Ingredient) -> f64 {
        match node.as_group() {
            Some(group) => group
                .components()
                .iter()
                .fold(0.0, |acc, c| acc + expected_price(c.as_ref())),
            None => node.price(),
        }
    }

    #[test]
    fn test_empty_group() {
        let group = ToppingGroup::new("Nothing");
        assert_eq!(group.name(), "Nothing");
        assert_eq!(group.price(), 0.0);
        assert!(!group.price().is_sign_negative());
        assert!(group.is_empty());
    }

    #[test]
    fn test_preset_prices() {
        assert_eq!(ToppingGroup::base().price(), 30.0);
        assert_eq!(ToppingGroup::pepperoni().price(), 50.0);
        assert_eq!(ToppingGroup::vegetarian().price(), 60.0);
        assert_eq!(ToppingGroup::meat_lovers().price(), 97.0);
        assert_eq!(ToppingGroup::vegetarian_deluxe().price(), 93.0);
    }

    #[test]
    fn test_price_is_sum_of_children_at_every_depth() {
        for group in [
            ToppingGroup::meat_lovers(),
            ToppingGroup::vegetarian_deluxe(),
            ToppingGroup::new("Odd").child(Topping::new("Nope")).child(ToppingGroup::new("Empty")),
        ] {
            assert_eq!(group.price(), expected_price(&group));
        }
    }

    #[test]
    fn test_nested_name() {
        assert_eq!(
            ToppingGroup::meat_lovers().name(),
            "Meat Lovers (Pepperoni (Base (Dough, Tomato Sauce, Cheese), Pepperoni), Beef Sausage, Salami)"
        );
    }

    #[test]
    fn test_presets_do_not_share_nodes() {
        let a = ToppingGroup::pepperoni();
        let b = ToppingGroup::pepperoni();
        assert_ne!(a.id(), b.id());
        assert_ne!(a.components()[0].id(), b.components()[0].id());
    }

    #[test]
    fn test_remove_by_identity() {
        let mut group = ToppingGroup::new("Extras");
        let kept = group.add(Topping::new("Olives"));
        let lookalike = Topping::new("Olives");

        assert!(group.remove_component(lookalike.id()).is_none());
        assert_eq!(group.component_count(), 1);

        let removed = group.remove_component(kept).unwrap();
        assert_eq!(removed.name(), "Olives");
        assert!(group.is_empty());
        assert!(group.remove_component(kept).is_none());
    }

    #[test]
    fn test_remove_only_direct_children() {
        let mut group = ToppingGroup::pepperoni();
        let nested = group.components()[0].as_group().unwrap().components()[0].id();
        assert!(group.remove_component(nested).is_none());
        assert_eq!(group.price(), 50.0);
    }

    #[test]
    fn test_price_tracks_mutation() {
        let mut group = ToppingGroup::vegetarian();
        group.add(Topping::new("Olives"));
        assert_eq!(group.price(), 75.0);
        group.clear_components();
        assert_eq!(group.price(), 0.0);
        assert_eq!(group.name(), "Vegetarian");
    }

    #[test]
    fn test_deep_copy_is_independent() {
        let original = ToppingGroup::meat_lovers();
        let mut copy = original.clone();
        assert_eq!(copy.name(), original.name());
        assert_eq!(copy.price(), original.price());

        // Mutate the innermost Base group of the copy.
        let pepperoni = copy.components_mut()[0].as_group_mut().unwrap();
        let base = pepperoni.components_mut()[0].as_group_mut().unwrap();
        base.add(Topping::new("Cheese"));

        assert_eq!(copy.price(), 112.0);
        assert_eq!(original.price(), 97.0);
        assert!(!original.name().contains("Cheese, Cheese"));
    }

    #[test]
    fn test_copy_assigns_new_identities() {
        let original = ToppingGroup::pepperoni();
        let copy = original.clone();
        for (a, b) in original.components().iter().zip(copy.components()) {
            assert_ne!(a.id(), b.id());
        }
    }
}
