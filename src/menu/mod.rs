//! # Menus and Subscribers
//!
//! Menus broadcast [`MenuEvent`]s to their registered observers whenever
//! their line-up changes.
//!
//! | Type | Role |
//! |------|------|
//! | [`PizzaMenu`] | Regular menu; announces additions and removals |
//! | [`SpecialsMenu`] | Special offers; announces offers starting and ending |
//! | [`Customer`] | Observer that collects notifications and reacts |
//! | [`Website`] | Observer that records updates and publishes them |
//!
//! Observers are shared handles so the same subscriber can follow several
//! menus and still be inspected by its owner afterwards.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use pizzeria::ingredient::ToppingGroup;
//! use pizzeria::menu::{Customer, PizzaMenu, Subject};
//! use pizzeria::pizza::BasePizza;
//!
//! let alice = Rc::new(RefCell::new(Customer::new("Alice", "555-0101")));
//! let mut menu = PizzaMenu::new("Main Menu");
//! menu.add_observer(alice.clone());
//!
//! menu.add_pizza(BasePizza::new(ToppingGroup::pepperoni()));
//! assert_eq!(alice.borrow().notifications().len(), 1);
//! ```

mod pizza_menu;
mod specials;
mod subscribers;

pub use pizza_menu::*;
pub use specials::*;
pub use subscribers::*;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Something a menu announces.
///
/// The `Display` text is the message every observer receives.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEvent {
    PizzaAdded { name: String, price: f64, currency: String },
    PizzaRemoved { name: String },
    SpecialAdded {
        name: String,
        description: String,
        price: f64,
        currency: String,
    },
    SpecialEnded { name: String, description: String },
}

impl fmt::Display for MenuEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PizzaAdded { name, price, currency } => write!(
                f,
                "New pizza flavour added: {name} is now available on our menu. Price: {currency}{price:.2}"
            ),
            Self::PizzaRemoved { name } => write!(
                f,
                "Pizza flavour removed: {name} is no longer available on our menu."
            ),
            Self::SpecialAdded {
                name,
                description,
                price,
                currency,
            } => write!(
                f,
                "New special offer: {name} - {description} ({currency}{price:.2})"
            ),
            Self::SpecialEnded { name, description } => write!(
                f,
                "Special has ended: {name} special offer ({description}) has ended."
            ),
        }
    }
}

/// A subscriber to menu changes.
pub trait Observer {
    fn update(&mut self, event: &MenuEvent);
}

/// Shared handle to an observer.
pub type SharedObserver = Rc<RefCell<dyn Observer>>;

/// Anything observers can subscribe to.
pub trait Subject {
    /// Register an observer. Registering the same handle twice has no effect.
    fn add_observer(&mut self, observer: SharedObserver);

    /// Unregister an observer; unknown handles are ignored.
    fn remove_observer(&mut self, observer: &SharedObserver);

    /// Deliver `event` to every observer, in registration order.
    ///
    /// Returns the number of observers that received it.
    fn notify_observers(&self, event: &MenuEvent) -> usize;
}

/// Registered observers, unique by identity.
#[derive(Default)]
pub struct Observers {
    list: Vec<SharedObserver>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, observer: &SharedObserver) -> Option<usize> {
        self.list.iter().position(|o| Rc::ptr_eq(o, observer))
    }

    pub fn add(&mut self, observer: SharedObserver) {
        if self.position(&observer).is_none() {
            self.list.push(observer);
        }
    }

    pub fn remove(&mut self, observer: &SharedObserver) {
        if let Some(index) = self.position(observer) {
            self.list.remove(index);
        }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Deliver `event` to each observer.
    ///
    /// An observer that is already borrowed (because it triggered this
    /// broadcast from inside its own `update`) is skipped and not counted.
    pub fn notify(&self, source: &str, event: &MenuEvent) -> usize {
        log::info!("Broadcasting from {}: {}", source, event);
        let mut delivered = 0;
        for observer in &self.list {
            match observer.try_borrow_mut() {
                Ok(mut observer) => {
                    observer.update(event);
                    delivered += 1;
                }
                Err(_) => log::warn!("Observer busy, skipped notification from {}", source),
            }
        }
        log::debug!("Notification sent to {} of {} observers.", delivered, self.list.len());
        delivered
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers").field("count", &self.list.len()).finish()
    }
}
