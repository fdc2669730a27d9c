//! Text views of an order.
//!
//! Every view is a pure function of the order; nothing is printed here.
//! The plain variants use [`ShopConfig::default`], the `_with` variants take
//! the shop's currency and width.

use super::Order;
use crate::components::{Component, ComponentExt, Divider, Header, Receipt, Spacer, Text};
use crate::config::ShopConfig;
use crate::pizza::Pizza;

/// The two-line description of a single pizza: heading with name, then price.
pub fn pizza_block(pizza: &dyn Pizza, config: &ShopConfig) -> Receipt {
    Receipt::new()
        .child(Text::new(format!("{}: {}", pizza.heading(), pizza.name())))
        .child(Text::new(format!("Price: {}", config.money(pizza.price()))))
}

impl Order {
    /// Full receipt: header, every pizza, totals and discount.
    pub fn display_order(&self) -> String {
        self.display_order_with(&ShopConfig::default())
    }

    pub fn display_order_with(&self, config: &ShopConfig) -> String {
        let width = config.receipt_width;
        let mut receipt = Receipt::new().child(
            Header::new(format!("ORDER #{}", self.number()))
                .subtitle(format!("Customer: {}", self.customer()))
                .width(width),
        );

        if self.pizzas().is_empty() {
            receipt.push(Text::new("No pizzas in order."));
        } else {
            for (i, pizza) in self.pizzas().iter().enumerate() {
                receipt.push(Text::new(format!("Pizza {}:", i + 1)));
                receipt.push(pizza_block(pizza.as_ref(), config));
                receipt.push(Spacer::lines(1));
            }
        }

        receipt.push(Text::new(format!("Total Pizzas: {}", self.pizza_count())));
        receipt.push(Text::new(format!("Subtotal: {}", config.money(self.subtotal()))));

        match self.discount_strategy() {
            Some(strategy) => {
                let discount = self.discount_amount();
                if discount > 0.0 {
                    receipt.push(Text::new(format!(
                        "Discount ({}): -{}",
                        strategy.name(),
                        config.money(discount)
                    )));
                    receipt.push(Text::new(format!(
                        "Final Total: {}",
                        config.money(self.discounted_total())
                    )));
                } else {
                    receipt.push(Text::new(format!(
                        "Final Total: {} (no discount qualified)",
                        config.money(self.subtotal())
                    )));
                }
            }
            None => {
                receipt.push(Text::new(format!("Final Total: {}", config.money(self.subtotal()))));
            }
        }

        receipt.push(Divider::equals().width(width));
        receipt.render()
    }

    /// One-glance summary: number, customer, count and payable total.
    pub fn display_order_summary(&self) -> String {
        self.display_order_summary_with(&ShopConfig::default())
    }

    pub fn display_order_summary_with(&self, config: &ShopConfig) -> String {
        Receipt::new()
            .child(Text::new("--- Order Summary ---"))
            .child(Text::new(format!("Order #{} - {}", self.number(), self.customer())))
            .child(Text::new(format!("Pizzas: {}", self.pizza_count())))
            .child(Text::new(format!("Total: {}", config.money(self.discounted_total()))))
            .render()
    }

    /// Pricing breakdown with the saving, if any.
    pub fn display_discount_info(&self) -> String {
        self.display_discount_info_with(&ShopConfig::default())
    }

    pub fn display_discount_info_with(&self, config: &ShopConfig) -> String {
        let discount = self.discount_amount();
        let mut receipt = Receipt::new()
            .child(Text::new("--- Pricing Breakdown ---"))
            .child(Text::new(format!("Subtotal: {}", config.money(self.subtotal()))));

        match self.discount_strategy() {
            Some(strategy) if discount > 0.0 => {
                receipt.push(Text::new(format!(
                    "Discount ({}): -{}",
                    strategy.name(),
                    config.money(discount)
                )));
                receipt.push(final_total(self, config));
                receipt.push(Text::new(format!("You saved: {}!", config.money(discount))));
            }
            _ => {
                receipt.push(Text::new("No discount applied"));
                receipt.push(final_total(self, config));
            }
        }

        receipt.render()
    }

    /// Current state, what it allows and whether pizzas can still change.
    pub fn display_state_info(&self) -> String {
        self.display_state_info_with(&ShopConfig::default())
    }

    pub fn display_state_info_with(&self, config: &ShopConfig) -> String {
        let modify = if self.can_modify_order() { "Yes" } else { "No" };
        Receipt::new()
            .child(Text::new("--- Order State Information ---"))
            .child(Text::new(format!("Current State: {}", self.state())))
            .child(Text::new(format!("Available Actions: {}", self.available_actions())))
            .child(Text::new(format!("Can Modify Order: {modify}")))
            .child(Divider::dashed().width(config.receipt_width.min(30)))
            .render()
    }
}

fn final_total(order: &Order, config: &ShopConfig) -> impl Component + 'static {
    Text::new(format!("Final Total: {}", config.money(order.discounted_total())))
}
