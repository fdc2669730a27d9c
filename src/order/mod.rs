//! # Orders
//!
//! An [`Order`] owns its pizzas, an optional discount strategy and its current
//! [`OrderState`]. Lifecycle actions are routed through the state machine in
//! [`state`]; the unconditional editing methods (`add_pizza`, `remove_pizza`)
//! bypass it.
//!
//! ```
//! use pizzeria::ingredient::ToppingGroup;
//! use pizzeria::order::{Order, OrderState};
//! use pizzeria::pizza::{BasePizza, PizzaExt};
//!
//! let mut order = Order::new(7, "Alice");
//! order.perform_add_pizza(BasePizza::new(ToppingGroup::pepperoni()).extra_cheese())?;
//! order.confirm_order()?;
//! order.pay_order()?;
//! assert_eq!(order.state(), OrderState::Paid);
//!
//! // Locked once confirmed.
//! assert!(order.perform_remove_pizza(0).is_err());
//! # Ok::<(), pizzeria::order::Rejection>(())
//! ```

mod display;
pub mod state;

pub use display::*;
pub use state::{ActionContext, OrderAction, OrderState, Outcome, Rejection, transition};

use serde::Serialize;

use crate::config::CURRENCY_SYMBOL;
use crate::discount::DiscountStrategy;
use crate::pizza::Pizza;

/// A customer's order.
///
/// Cloning deep-copies every pizza and keeps the currency, but leaves the
/// discount strategy unset and the state at `Ordering`.
#[derive(Debug)]
pub struct Order {
    number: u32,
    customer: String,
    pizzas: Vec<Box<dyn Pizza>>,
    strategy: Option<Box<dyn DiscountStrategy>>,
    state: OrderState,
    currency: String,
}

impl Default for Order {
    fn default() -> Self {
        Self::new(0, "Guest")
    }
}

impl Clone for Order {
    fn clone(&self) -> Self {
        Self {
            number: self.number,
            customer: self.customer.clone(),
            pizzas: self.pizzas.iter().map(|p| p.clone_box()).collect(),
            strategy: None,
            state: OrderState::default(),
            currency: self.currency.clone(),
        }
    }
}

impl Order {
    /// Create an empty order in the `Ordering` state.
    pub fn new(number: u32, customer: impl Into<String>) -> Self {
        Self {
            number,
            customer: customer.into(),
            pizzas: Vec::new(),
            strategy: None,
            state: OrderState::Ordering,
            currency: CURRENCY_SYMBOL.to_string(),
        }
    }

    // ------------------------------------------------------------------
    // Pizzas (unconditional)
    // ------------------------------------------------------------------

    /// Append a pizza regardless of state.
    pub fn add_pizza(&mut self, pizza: impl Into<Box<dyn Pizza>>) {
        self.pizzas.push(pizza.into());
    }

    /// Remove and drop the pizza at `index`, regardless of state.
    ///
    /// Returns `false` without changing anything if `index` is out of range.
    pub fn remove_pizza(&mut self, index: usize) -> bool {
        if index < self.pizzas.len() {
            self.pizzas.remove(index);
            true
        } else {
            false
        }
    }

    /// Drop every pizza.
    pub fn clear_order(&mut self) {
        self.pizzas.clear();
    }

    pub fn pizzas(&self) -> &[Box<dyn Pizza>] {
        &self.pizzas
    }

    pub fn pizza_count(&self) -> usize {
        self.pizzas.len()
    }

    /// Sum of all pizza prices, before discount.
    pub fn subtotal(&self) -> f64 {
        self.pizzas.iter().fold(0.0, |acc, p| acc + p.price())
    }

    // ------------------------------------------------------------------
    // Identity
    // ------------------------------------------------------------------

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn set_number(&mut self, number: u32) {
        self.number = number;
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn set_customer(&mut self, customer: impl Into<String>) {
        self.customer = customer.into();
    }

    /// Symbol used for amounts in lifecycle messages.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn set_currency(&mut self, currency: impl Into<String>) {
        self.currency = currency.into();
    }

    // ------------------------------------------------------------------
    // Discounts
    // ------------------------------------------------------------------

    /// Replace the discount strategy; the previous one is dropped.
    pub fn set_discount_strategy<S: DiscountStrategy + 'static>(&mut self, strategy: S) {
        self.strategy = Some(Box::new(strategy));
    }

    /// Replace the discount strategy with an already boxed one.
    pub fn set_boxed_discount_strategy(&mut self, strategy: Box<dyn DiscountStrategy>) {
        self.strategy = Some(strategy);
    }

    pub fn clear_discount_strategy(&mut self) {
        self.strategy = None;
    }

    pub fn discount_strategy(&self) -> Option<&dyn DiscountStrategy> {
        self.strategy.as_deref()
    }

    /// Discount from the active strategy, or 0 without one.
    pub fn discount_amount(&self) -> f64 {
        self.strategy
            .as_ref()
            .map_or(0.0, |s| s.apply_discount(self))
    }

    /// Subtotal minus discount.
    pub fn discounted_total(&self) -> f64 {
        self.subtotal() - self.discount_amount()
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    pub fn state(&self) -> OrderState {
        self.state
    }

    pub fn can_modify_order(&self) -> bool {
        self.state.can_modify_order()
    }

    pub fn available_actions(&self) -> &'static str {
        self.state.available_actions()
    }

    fn context(&self) -> ActionContext<'_> {
        ActionContext {
            pizza_count: self.pizza_count(),
            total: self.discounted_total(),
            currency: &self.currency,
        }
    }

    /// Ask the current state to handle `action`, moving to the next state
    /// when the action calls for it.
    ///
    /// `AddPizza` and `RemovePizza` only check permission here; use
    /// [`Order::perform_add_pizza`] and [`Order::perform_remove_pizza`] to
    /// actually edit the order.
    pub fn perform(&mut self, action: OrderAction) -> Result<Outcome, Rejection> {
        let result = transition(self.state, action, &self.context());
        match &result {
            Ok(Outcome::Moved { from, to, .. }) => {
                log::info!("Order #{}: {} -> {}", self.number, from, to);
                self.state = *to;
            }
            Ok(_) => {}
            Err(rejection) => {
                log::debug!("Order #{}: {}", self.number, rejection);
            }
        }
        result
    }

    /// Add a pizza if the current state allows it.
    ///
    /// A refused pizza is dropped.
    pub fn perform_add_pizza(&mut self, pizza: impl Into<Box<dyn Pizza>>) -> Result<Outcome, Rejection> {
        self.perform(OrderAction::AddPizza)?;
        self.add_pizza(pizza);
        Ok(Outcome::Permitted {
            message: format!("Pizza added to order in {} state", self.state),
        })
    }

    /// Remove the pizza at `index` if the current state allows it.
    pub fn perform_remove_pizza(&mut self, index: usize) -> Result<Outcome, Rejection> {
        self.perform(OrderAction::RemovePizza)?;
        let count = self.pizza_count();
        if self.remove_pizza(index) {
            Ok(Outcome::Permitted {
                message: format!("Pizza removed from order in {} state", self.state),
            })
        } else {
            let rejection = Rejection::InvalidIndex { index, count };
            log::debug!("Order #{}: {}", self.number, rejection);
            Err(rejection)
        }
    }

    pub fn confirm_order(&mut self) -> Result<Outcome, Rejection> {
        self.perform(OrderAction::Confirm)
    }

    pub fn cancel_order(&mut self) -> Result<Outcome, Rejection> {
        self.perform(OrderAction::Cancel)
    }

    pub fn pay_order(&mut self) -> Result<Outcome, Rejection> {
        self.perform(OrderAction::Pay)
    }

    pub fn prepare_order(&mut self) -> Result<Outcome, Rejection> {
        self.perform(OrderAction::Prepare)
    }

    pub fn deliver_order(&mut self) -> Result<Outcome, Rejection> {
        self.perform(OrderAction::Deliver)
    }

    pub fn complete_order(&mut self) -> Result<Outcome, Rejection> {
        self.perform(OrderAction::Complete)
    }

    // ------------------------------------------------------------------
    // Snapshot
    // ------------------------------------------------------------------

    /// Plain-data view of the order, for JSON output.
    pub fn snapshot(&self) -> OrderSnapshot {
        OrderSnapshot {
            number: self.number,
            customer: self.customer.clone(),
            state: self.state,
            pizzas: self
                .pizzas
                .iter()
                .map(|p| PizzaLine {
                    name: p.name(),
                    price: p.price(),
                })
                .collect(),
            subtotal: self.subtotal(),
            discount: self.strategy.as_ref().map(|s| s.name()),
            discount_amount: self.discount_amount(),
            total: self.discounted_total(),
        }
    }
}

/// A pizza as it appears in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PizzaLine {
    pub name: String,
    pub price: f64,
}

/// Serializable summary of an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSnapshot {
    pub number: u32,
    pub customer: String,
    pub state: OrderState,
    pub pizzas: Vec<PizzaLine>,
    pub subtotal: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
    pub discount_amount: f64,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::{FamilyDiscount, StudentDiscount};
    use crate::ingredient::{Topping, ToppingGroup};
    use crate::pizza::{BasePizza, PizzaExt};

    fn pepperoni() -> BasePizza {
        BasePizza::new(ToppingGroup::pepperoni())
    }

    #[test]
    fn test_new_order() {
        let order = Order::new(3, "Carol");
        assert_eq!(order.number(), 3);
        assert_eq!(order.customer(), "Carol");
        assert_eq!(order.state(), OrderState::Ordering);
        assert_eq!(order.pizza_count(), 0);
        assert_eq!(order.subtotal(), 0.0);
        assert_eq!(order.discount_amount(), 0.0);
        assert!(!order.subtotal().is_sign_negative());
        assert!(!order.discounted_total().is_sign_negative());
    }

    #[test]
    fn test_empty_pizzas_do_not_go_negative() {
        let mut order = Order::new(2, "Nia");
        order.add_pizza(BasePizza::new(ToppingGroup::new("Nothing")));
        order.set_discount_strategy(StudentDiscount);
        assert!(!order.subtotal().is_sign_negative());
        assert!(!order.discounted_total().is_sign_negative());
    }

    #[test]
    fn test_lifecycle_messages_use_order_currency() {
        let mut order = Order::new(5, "Oli");
        order.set_currency("$");
        order.add_pizza(pepperoni());
        order.confirm_order().unwrap();
        let outcome = order.pay_order().unwrap();
        assert_eq!(
            outcome.message(),
            "Payment processed! Order total: $50.00. Moving to Paid state."
        );
        assert_eq!(order.clone().currency(), "$");
    }

    #[test]
    fn test_perform_edits_report_what_happened() {
        let mut order = Order::new(6, "Pat");
        let added = order.perform_add_pizza(pepperoni()).unwrap();
        assert_eq!(added.message(), "Pizza added to order in Ordering state");

        let removed = order.perform_remove_pizza(0).unwrap();
        assert_eq!(removed.message(), "Pizza removed from order in Ordering state");

        let asked = order.perform(OrderAction::AddPizza).unwrap();
        assert_eq!(asked.message(), "Pizzas may be added in Ordering state");
        assert_eq!(order.pizza_count(), 0);
    }

    #[test]
    fn test_default_order_is_guest() {
        let order = Order::default();
        assert_eq!(order.number(), 0);
        assert_eq!(order.customer(), "Guest");
    }

    #[test]
    fn test_remove_pizza_bounds() {
        let mut order = Order::new(1, "Dan");
        order.add_pizza(pepperoni());
        order.add_pizza(pepperoni().extra_cheese());

        assert!(!order.remove_pizza(2));
        assert!(!order.remove_pizza(usize::MAX));
        assert_eq!(order.pizza_count(), 2);

        assert!(order.remove_pizza(0));
        assert_eq!(order.pizza_count(), 1);
        assert_eq!(order.subtotal(), 62.0);
    }

    #[test]
    fn test_strategy_replacement() {
        let mut order = Order::new(1, "Eve");
        order.add_pizza(pepperoni());
        order.add_pizza(pepperoni());

        order.set_discount_strategy(FamilyDiscount);
        assert!((order.discount_amount() - 10.0).abs() < 1e-9);

        order.set_discount_strategy(StudentDiscount);
        assert!((order.discount_amount() - 12.0).abs() < 1e-9);
        assert_eq!(order.discount_strategy().unwrap().name(), "Student Discount");
        assert!((order.discounted_total() - 88.0).abs() < 1e-9);

        order.clear_discount_strategy();
        assert_eq!(order.discounted_total(), 100.0);
    }

    #[test]
    fn test_confirm_needs_pizzas() {
        let mut order = Order::new(1, "Fay");
        assert_eq!(order.confirm_order(), Err(Rejection::EmptyOrder));
        assert_eq!(order.state(), OrderState::Ordering);

        order.perform_add_pizza(pepperoni()).unwrap();
        let outcome = order.confirm_order().unwrap();
        assert_eq!(outcome.new_state(), Some(OrderState::Confirmed));
        assert_eq!(order.state(), OrderState::Confirmed);
    }

    #[test]
    fn test_locked_after_confirm() {
        let mut order = Order::new(1, "Gus");
        order.perform_add_pizza(pepperoni()).unwrap();
        order.confirm_order().unwrap();

        assert!(order.perform_add_pizza(pepperoni()).is_err());
        assert!(order.perform_remove_pizza(0).is_err());
        assert_eq!(order.pizza_count(), 1);
        assert!(!order.can_modify_order());
    }

    #[test]
    fn test_perform_remove_invalid_index() {
        let mut order = Order::new(1, "Hal");
        order.perform_add_pizza(pepperoni()).unwrap();
        assert_eq!(
            order.perform_remove_pizza(1),
            Err(Rejection::InvalidIndex { index: 1, count: 1 })
        );
        assert!(order.perform_remove_pizza(0).is_ok());
        assert_eq!(order.pizza_count(), 0);
    }

    #[test]
    fn test_terminal_states_ignore_everything() {
        let mut order = Order::new(1, "Ivy");
        order.add_pizza(pepperoni());
        order.cancel_order().unwrap();
        assert_eq!(order.state(), OrderState::Cancelled);

        assert!(order.confirm_order().is_err());
        assert!(order.pay_order().is_err());
        assert!(order.cancel_order().is_ok());
        assert_eq!(order.state(), OrderState::Cancelled);
        assert_eq!(order.pizza_count(), 1);
    }

    #[test]
    fn test_clone_deep_copies_pizzas_only() {
        let mut original = Order::new(9, "Jo");
        original.add_pizza(pepperoni().stuffed_crust());
        original.set_discount_strategy(StudentDiscount);
        original.confirm_order().unwrap();

        let mut copy = original.clone();
        assert_eq!(copy.number(), 9);
        assert_eq!(copy.customer(), "Jo");
        assert_eq!(copy.pizza_count(), 1);
        assert_eq!(copy.pizzas()[0].name(), original.pizzas()[0].name());
        assert!(copy.discount_strategy().is_none());
        assert_eq!(copy.state(), OrderState::Ordering);

        copy.add_pizza(BasePizza::new(Topping::new("Olives")));
        copy.remove_pizza(0);
        assert_eq!(original.pizza_count(), 1);
        assert_eq!(original.subtotal(), 70.0);
        assert_eq!(copy.subtotal(), 15.0);
    }

    #[test]
    fn test_snapshot() {
        let mut order = Order::new(4, "Kim");
        order.add_pizza(pepperoni());
        order.set_discount_strategy(StudentDiscount);
        let snapshot = order.snapshot();
        assert_eq!(snapshot.pizzas.len(), 1);
        assert_eq!(snapshot.pizzas[0].price, 50.0);
        assert_eq!(snapshot.discount.as_deref(), Some("Student Discount"));

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["state"], "Ordering");
        assert_eq!(json["customer"], "Kim");
    }

    #[test]
    fn test_empty_snapshot_json_has_positive_zero() {
        let json = serde_json::to_string(&Order::new(8, "Quinn").snapshot()).unwrap();
        assert!(json.contains(r#""subtotal":0.0"#));
        assert!(json.contains(r#""total":0.0"#));
        assert!(!json.contains("-0.0"));
    }
}
