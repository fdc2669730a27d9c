//! # Discount Strategies
//!
//! Interchangeable pricing policies. An [`Order`] holds at most one and asks
//! it for a discount amount based on the order's subtotal and pizza count.
//!
//! | Strategy | Rule |
//! |----------|------|
//! | [`RegularPrice`] | no discount |
//! | [`FamilyDiscount`] | 10% for 2 pizzas, 15% for 3+ |
//! | [`BulkDiscount`] | 10% from 150, 15% from 300, 20% from 500 |
//! | [`StudentDiscount`] | 12% |
//! | [`SeniorDiscount`] | 15%, plus 5% for 2+ pizzas |
//! | [`LoyaltyDiscount`] | 4% + 4% per tier (tiers 1-5) |
//!
//! ## Usage
//!
//! ```
//! use pizzeria::discount::*;
//! use pizzeria::ingredient::ToppingGroup;
//! use pizzeria::order::Order;
//! use pizzeria::pizza::BasePizza;
//!
//! let mut order = Order::new(1, "Alice");
//! order.add_pizza(BasePizza::new(ToppingGroup::pepperoni()));
//! order.set_discount_strategy(StudentDiscount);
//!
//! assert!((order.discount_amount() - 6.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PizzeriaError;
use crate::order::Order;

/// A pricing policy applied to a whole order.
pub trait DiscountStrategy: fmt::Debug {
    /// Amount to subtract from the order subtotal.
    fn apply_discount(&self, order: &Order) -> f64;

    /// Short display name.
    fn name(&self) -> String;

    /// One-line description of the rule.
    fn description(&self) -> String;
}

/// Pay full price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegularPrice;

impl DiscountStrategy for RegularPrice {
    fn apply_discount(&self, _order: &Order) -> f64 {
        0.0
    }

    fn name(&self) -> String {
        "Regular Price".to_string()
    }

    fn description(&self) -> String {
        "No discount applied - pay full price".to_string()
    }
}

/// Discount by number of pizzas. Tiers are not cumulative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FamilyDiscount;

impl DiscountStrategy for FamilyDiscount {
    fn apply_discount(&self, order: &Order) -> f64 {
        let total = order.subtotal();
        match order.pizza_count() {
            n if n >= 3 => total * 0.15,
            2 => total * 0.10,
            _ => 0.0,
        }
    }

    fn name(&self) -> String {
        "Family Discount".to_string()
    }

    fn description(&self) -> String {
        "10% off for 2+ pizzas, 15% off for 3+ pizzas".to_string()
    }
}

/// Discount by subtotal. Only the highest reached tier applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkDiscount;

impl DiscountStrategy for BulkDiscount {
    fn apply_discount(&self, order: &Order) -> f64 {
        let total = order.subtotal();
        if total >= 500.0 {
            total * 0.20
        } else if total >= 300.0 {
            total * 0.15
        } else if total >= 150.0 {
            total * 0.10
        } else {
            0.0
        }
    }

    fn name(&self) -> String {
        "Bulk Discount".to_string()
    }

    fn description(&self) -> String {
        "10% off R150+, 15% off R300+, 20% off R500+".to_string()
    }
}

/// Flat 12% off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StudentDiscount;

impl DiscountStrategy for StudentDiscount {
    fn apply_discount(&self, order: &Order) -> f64 {
        order.subtotal() * 0.12
    }

    fn name(&self) -> String {
        "Student Discount".to_string()
    }

    fn description(&self) -> String {
        "12% off entire order with valid student ID".to_string()
    }
}

/// 15% off, plus another 5% when ordering two or more pizzas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeniorDiscount;

impl DiscountStrategy for SeniorDiscount {
    fn apply_discount(&self, order: &Order) -> f64 {
        let total = order.subtotal();
        let mut discount = total * 0.15;
        if order.pizza_count() >= 2 {
            discount += total * 0.05;
        }
        discount
    }

    fn name(&self) -> String {
        "Senior Discount".to_string()
    }

    fn description(&self) -> String {
        "15% off entire order, +5% extra for 2+ pizzas (ages 65+)".to_string()
    }
}

/// Tiered loyalty discount.
///
/// The tier is clamped to `1..=5`; the rate is `4% + 4% * tier`.
///
/// ```
/// use pizzeria::discount::LoyaltyDiscount;
///
/// assert_eq!(LoyaltyDiscount::new(10).tier(), 5);
/// assert_eq!(LoyaltyDiscount::new(-5).tier(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoyaltyDiscount {
    tier: i32,
}

impl LoyaltyDiscount {
    pub const MIN_TIER: i32 = 1;
    pub const MAX_TIER: i32 = 5;

    pub fn new(tier: i32) -> Self {
        Self {
            tier: tier.clamp(Self::MIN_TIER, Self::MAX_TIER),
        }
    }

    pub fn tier(&self) -> i32 {
        self.tier
    }

    /// Change the tier, clamping to `1..=5`.
    pub fn set_tier(&mut self, tier: i32) {
        self.tier = tier.clamp(Self::MIN_TIER, Self::MAX_TIER);
    }

    /// Discount rate as a fraction.
    pub fn rate(&self) -> f64 {
        0.04 + f64::from(self.tier) * 0.04
    }

    /// Discount rate as a whole percentage.
    pub fn percent(&self) -> i32 {
        4 + 4 * self.tier
    }
}

impl Default for LoyaltyDiscount {
    fn default() -> Self {
        Self::new(Self::MIN_TIER)
    }
}

impl DiscountStrategy for LoyaltyDiscount {
    fn apply_discount(&self, order: &Order) -> f64 {
        order.subtotal() * self.rate()
    }

    fn name(&self) -> String {
        format!("Loyalty Discount (Tier {})", self.tier)
    }

    fn description(&self) -> String {
        format!(
            "{}% off for loyal customers (Tier {})",
            self.percent(),
            self.tier
        )
    }
}

/// Names of the available strategies, for configuration and the CLI.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DiscountKind {
    Regular,
    Family,
    Bulk,
    Student,
    Senior,
    Loyalty,
}

impl DiscountKind {
    /// Build the strategy. `tier` is only used by [`DiscountKind::Loyalty`].
    pub fn strategy(self, tier: i32) -> Box<dyn DiscountStrategy> {
        match self {
            DiscountKind::Regular => Box::new(RegularPrice),
            DiscountKind::Family => Box::new(FamilyDiscount),
            DiscountKind::Bulk => Box::new(BulkDiscount),
            DiscountKind::Student => Box::new(StudentDiscount),
            DiscountKind::Senior => Box::new(SeniorDiscount),
            DiscountKind::Loyalty => Box::new(LoyaltyDiscount::new(tier)),
        }
    }
}

impl FromStr for DiscountKind {
    type Err = PizzeriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "regular" | "none" => Ok(DiscountKind::Regular),
            "family" => Ok(DiscountKind::Family),
            "bulk" => Ok(DiscountKind::Bulk),
            "student" => Ok(DiscountKind::Student),
            "senior" => Ok(DiscountKind::Senior),
            "loyalty" => Ok(DiscountKind::Loyalty),
            _ => Err(PizzeriaError::UnknownDiscount(s.to_string())),
        }
    }
}
