use super::{MenuEvent, Observers, SharedObserver, Subject};
use crate::components::{ComponentExt, Divider, Receipt, Text};
use crate::config::{CURRENCY_SYMBOL, ShopConfig};
use crate::pizza::Pizza;

/// The regular menu.
#[derive(Debug)]
pub struct PizzaMenu {
    name: String,
    pizzas: Vec<Box<dyn Pizza>>,
    observers: Observers,
    currency: String,
}

impl PizzaMenu {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pizzas: Vec::new(),
            observers: Observers::new(),
            currency: CURRENCY_SYMBOL.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Symbol used for prices in announcements.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn set_currency(&mut self, currency: impl Into<String>) {
        self.currency = currency.into();
    }

    /// Add a pizza and announce it.
    pub fn add_pizza(&mut self, pizza: impl Into<Box<dyn Pizza>>) {
        let pizza = pizza.into();
        let event = MenuEvent::PizzaAdded {
            name: pizza.name(),
            price: pizza.price(),
            currency: self.currency.clone(),
        };
        self.pizzas.push(pizza);
        self.notify_observers(&event);
    }

    /// Take the pizza at `index` off the menu and announce it.
    ///
    /// Out-of-range indices change nothing and notify nobody.
    pub fn remove_pizza(&mut self, index: usize) -> Option<Box<dyn Pizza>> {
        if index >= self.pizzas.len() {
            return None;
        }
        let pizza = self.pizzas.remove(index);
        self.notify_observers(&MenuEvent::PizzaRemoved { name: pizza.name() });
        Some(pizza)
    }

    pub fn pizzas(&self) -> &[Box<dyn Pizza>] {
        &self.pizzas
    }

    pub fn pizza_count(&self) -> usize {
        self.pizzas.len()
    }

    /// Drop every pizza without notifying anyone.
    pub fn clear_pizzas(&mut self) {
        self.pizzas.clear();
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn display_menu(&self) -> String {
        self.display_menu_with(&ShopConfig::default())
    }

    /// Numbered list of pizzas with prices.
    pub fn display_menu_with(&self, config: &ShopConfig) -> String {
        let mut receipt = Receipt::new().child(Text::new(format!("=== {} ===", self.name)));
        if self.pizzas.is_empty() {
            receipt.push(Text::new("No pizzas currently available."));
        }
        for (i, pizza) in self.pizzas.iter().enumerate() {
            receipt.push(Text::new(format!(
                "{}. {} - {}",
                i + 1,
                pizza.name(),
                config.money(pizza.price())
            )));
        }
        receipt.push(Divider::equals().width(config.receipt_width));
        receipt.render()
    }
}

impl Subject for PizzaMenu {
    fn add_observer(&mut self, observer: SharedObserver) {
        self.observers.add(observer);
    }

    fn remove_observer(&mut self, observer: &SharedObserver) {
        self.observers.remove(observer);
    }

    fn notify_observers(&self, event: &MenuEvent) -> usize {
        self.observers.notify(&self.name, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredient::{Topping, ToppingGroup};
    use crate::menu::Customer;
    use crate::pizza::BasePizza;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_add_and_remove_notify() {
        let bob = Rc::new(RefCell::new(Customer::new("Bob", "")));
        let mut menu = PizzaMenu::new("Main Menu");
        menu.add_observer(bob.clone());

        menu.add_pizza(BasePizza::new(ToppingGroup::pepperoni()));
        menu.add_pizza(BasePizza::new(Topping::new("Olives")));
        assert_eq!(menu.pizza_count(), 2);

        let removed = menu.remove_pizza(0).unwrap();
        assert_eq!(removed.price(), 50.0);
        assert!(menu.remove_pizza(5).is_none());

        let bob = bob.borrow();
        assert_eq!(bob.notifications().len(), 3);
        assert_eq!(
            bob.notifications()[1],
            "New pizza flavour added: Olives is now available on our menu. Price: R15.00"
        );
        assert!(bob.notifications()[2].starts_with("Pizza flavour removed: Pepperoni"));
    }

    #[test]
    fn test_unsubscribed_observer_hears_nothing() {
        let bob = Rc::new(RefCell::new(Customer::new("Bob", "")));
        let handle: SharedObserver = bob.clone();
        let mut menu = PizzaMenu::new("Main Menu");
        menu.add_observer(handle.clone());
        menu.add_observer(handle.clone());
        assert_eq!(menu.observer_count(), 1);

        menu.remove_observer(&handle);
        menu.add_pizza(BasePizza::empty());
        assert!(bob.borrow().notifications().is_empty());
    }

    #[test]
    fn test_display_menu() {
        let mut menu = PizzaMenu::new("Main Menu");
        assert!(menu.display_menu().contains("No pizzas currently available."));

        menu.add_pizza(BasePizza::new(Topping::new("Olives")));
        let text = menu.display_menu();
        assert!(text.starts_with("=== Main Menu ==="));
        assert!(text.contains("1. Olives - R15.00"));

        menu.clear_pizzas();
        assert_eq!(menu.pizza_count(), 0);
    }

    #[test]
    fn test_announcements_use_menu_currency() {
        let bob = Rc::new(RefCell::new(Customer::new("Bob", "")));
        let mut menu = PizzaMenu::new("Main Menu");
        menu.set_currency("$");
        menu.add_observer(bob.clone());

        menu.add_pizza(BasePizza::new(Topping::new("Olives")));
        assert_eq!(
            bob.borrow().notifications()[0],
            "New pizza flavour added: Olives is now available on our menu. Price: $15.00"
        );
    }
}
