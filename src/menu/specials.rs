use super::{MenuEvent, Observers, SharedObserver, Subject};
use crate::components::{ComponentExt, Divider, Receipt, Text};
use crate::config::{CURRENCY_SYMBOL, ShopConfig};
use crate::pizza::Pizza;

/// Description shown for a pizza that carries no offer.
pub const NO_SPECIAL_OFFER: &str = "No special offer";

/// A pizza on the specials menu and its offer, if any.
#[derive(Debug, Clone)]
pub struct SpecialEntry {
    pub pizza: Box<dyn Pizza>,
    pub offer: Option<String>,
}

impl SpecialEntry {
    pub fn offer(&self) -> &str {
        self.offer.as_deref().unwrap_or(NO_SPECIAL_OFFER)
    }
}

/// Menu of time-limited offers.
#[derive(Debug)]
pub struct SpecialsMenu {
    name: String,
    entries: Vec<SpecialEntry>,
    observers: Observers,
    currency: String,
}

impl SpecialsMenu {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
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

    /// Put a pizza on the menu with an offer and announce it.
    pub fn add_special_offer(&mut self, pizza: impl Into<Box<dyn Pizza>>, description: impl Into<String>) {
        let pizza = pizza.into();
        let description = description.into();
        let event = MenuEvent::SpecialAdded {
            name: pizza.name(),
            description: description.clone(),
            price: pizza.price(),
            currency: self.currency.clone(),
        };
        self.entries.push(SpecialEntry {
            pizza,
            offer: Some(description),
        });
        self.notify_observers(&event);
    }

    /// End the offer at `index`, taking its pizza off the menu.
    pub fn remove_special_offer(&mut self, index: usize) -> Option<Box<dyn Pizza>> {
        if index >= self.entries.len() {
            return None;
        }
        let entry = self.entries.remove(index);
        let event = MenuEvent::SpecialEnded {
            name: entry.pizza.name(),
            description: entry.offer().to_string(),
        };
        self.notify_observers(&event);
        Some(entry.pizza)
    }

    /// Offer text for the pizza at `index`.
    pub fn special_offer(&self, index: usize) -> &str {
        self.entries.get(index).map_or(NO_SPECIAL_OFFER, SpecialEntry::offer)
    }

    /// Put a pizza on the menu quietly, without an offer.
    pub fn add_pizza(&mut self, pizza: impl Into<Box<dyn Pizza>>) {
        self.entries.push(SpecialEntry {
            pizza: pizza.into(),
            offer: None,
        });
    }

    /// Take a pizza off the menu quietly.
    pub fn remove_pizza(&mut self, index: usize) -> Option<Box<dyn Pizza>> {
        (index < self.entries.len()).then(|| self.entries.remove(index).pizza)
    }

    pub fn entries(&self) -> &[SpecialEntry] {
        &self.entries
    }

    pub fn pizzas(&self) -> impl Iterator<Item = &dyn Pizza> + '_ {
        self.entries.iter().map(|e| e.pizza.as_ref())
    }

    pub fn pizza_count(&self) -> usize {
        self.entries.len()
    }

    pub fn clear_pizzas(&mut self) {
        self.entries.clear();
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn display_specials_menu(&self) -> String {
        self.display_specials_menu_with(&ShopConfig::default())
    }

    pub fn display_specials_menu_with(&self, config: &ShopConfig) -> String {
        let mut receipt = Receipt::new().child(Text::new(format!("=== {} ===", self.name)));
        if self.entries.is_empty() {
            receipt.push(Text::new("No special offers currently available."));
        }
        for (i, entry) in self.entries.iter().enumerate() {
            receipt.push(Text::new(format!(
                "{}. {} - {} [{}]",
                i + 1,
                entry.pizza.name(),
                config.money(entry.pizza.price()),
                entry.offer()
            )));
        }
        receipt.push(Divider::equals().width(config.receipt_width));
        receipt.render()
    }
}

impl Subject for SpecialsMenu {
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
    use crate::menu::Website;
    use crate::pizza::{BasePizza, PizzaExt};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_special_offer_lifecycle() {
        let site = Rc::new(RefCell::new(Website::new("Romeo's", "https://romeos.example")));
        let mut specials = SpecialsMenu::new("Weekend Specials");
        specials.add_observer(site.clone());

        specials.add_special_offer(BasePizza::new(ToppingGroup::vegetarian()).stuffed_crust(), "Half price");
        assert_eq!(specials.special_offer(0), "Half price");
        assert_eq!(specials.observer_count(), 1);

        let pizza = specials.remove_special_offer(0).unwrap();
        assert_eq!(pizza.price(), 80.0);
        assert_eq!(specials.pizza_count(), 0);

        let site = site.borrow();
        assert_eq!(site.updates().len(), 2);
        assert!(site.updates()[0].ends_with("- Half price (R80.00)"));
        assert!(site.updates()[1].ends_with("special offer (Half price) has ended."));
    }

    #[test]
    fn test_quiet_add_has_no_offer() {
        let site = Rc::new(RefCell::new(Website::new("Romeo's", "")));
        let mut specials = SpecialsMenu::new("Specials");
        specials.add_observer(site.clone());

        specials.add_pizza(BasePizza::new(Topping::new("Olives")));
        assert_eq!(specials.special_offer(0), NO_SPECIAL_OFFER);
        assert_eq!(specials.special_offer(9), NO_SPECIAL_OFFER);
        assert!(site.borrow().updates().is_empty());

        specials.remove_special_offer(0);
        assert_eq!(
            site.borrow().updates()[0],
            "Special has ended: Olives special offer (No special offer) has ended."
        );
    }

    #[test]
    fn test_display_specials_menu() {
        let mut specials = SpecialsMenu::new("Specials");
        assert!(specials.display_specials_menu().contains("No special offers currently available."));

        specials.add_special_offer(BasePizza::new(Topping::new("Salami")), "Free drink");
        assert!(specials.display_specials_menu().contains("1. Salami - R22.00 [Free drink]"));

        assert!(specials.remove_pizza(0).is_some());
        assert!(specials.remove_pizza(0).is_none());
    }

    #[test]
    fn test_announcements_use_menu_currency() {
        let site = Rc::new(RefCell::new(Website::new("Romeo's", "")));
        let mut specials = SpecialsMenu::new("Specials");
        specials.set_currency("EUR ");
        specials.add_observer(site.clone());

        specials.add_special_offer(BasePizza::new(Topping::new("Salami")), "Free drink");
        assert_eq!(specials.currency(), "EUR ");
        assert_eq!(
            site.borrow().updates()[0],
            "New special offer: Salami - Free drink (EUR 22.00)"
        );
    }
}
