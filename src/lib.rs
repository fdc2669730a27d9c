//! # Pizzeria - Pizza Ordering Library
//!
//! Pizzeria models a pizza shop's ordering system. It provides:
//!
//! - **Ingredients**: toppings from a fixed price catalog, grouped into trees
//! - **Pizzas**: a base pizza wrapped in any number of add-ons
//! - **Discounts**: interchangeable pricing strategies
//! - **Orders**: an order lifecycle driven by a state machine
//! - **Menus**: menus that notify subscribed customers and websites
//!
//! ## Quick Start
//!
//! ```
//! use pizzeria::{
//!     discount::FamilyDiscount,
//!     order::{Order, OrderState},
//!     pizza::PizzaExt,
//!     presets::Preset,
//! };
//!
//! let mut order = Order::new(1, "Alice");
//! order.perform_add_pizza(Preset::Pepperoni.pizza().extra_cheese())?;
//! order.perform_add_pizza(Preset::Vegetarian.pizza())?;
//! order.set_discount_strategy(FamilyDiscount);
//!
//! order.confirm_order()?;
//! order.pay_order()?;
//! assert_eq!(order.state(), OrderState::Paid);
//!
//! println!("{}", order.display_order());
//! # Ok::<(), pizzeria::order::Rejection>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`ingredient`] | Topping catalog and topping groups |
//! | [`pizza`] | Base pizza and add-on layers |
//! | [`discount`] | Discount strategies |
//! | [`order`] | Orders and their lifecycle |
//! | [`menu`] | Menus and their subscribers |
//! | [`presets`] | House pizzas and the pizza spec syntax |
//! | [`components`] | Text layout used by every display |
//! | [`config`] | Shop configuration |
//! | [`error`] | Error types |

pub mod components;
pub mod config;
pub mod discount;
pub mod error;
pub mod ingredient;
pub mod menu;
pub mod order;
pub mod pizza;
pub mod presets;

// Re-exports for convenience
pub use config::ShopConfig;
pub use error::PizzeriaError;
pub use order::Order;
