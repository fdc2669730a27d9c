//! # Order Lifecycle
//!
//! The lifecycle is a tagged enum plus a pure transition function:
//!
//! ```text
//! Ordering ──confirm──▶ Confirmed ──pay──▶ Paid ──prepare──▶ Preparing
//!     │                     │                │                   │
//!     │                     │                │                 deliver
//!     │                     │                │                   ▼
//!     └──────cancel─────────┴──────cancel────┴───cancel───── Delivering ──complete──▶ Completed
//!                                                                 │
//!                                          Cancelled ◀──cancel────┘
//! ```
//!
//! Refused actions return a [`Rejection`] and leave everything untouched.
//! Repeating a step that already happened is an [`Outcome::Unchanged`].

use serde::Serialize;
use thiserror::Error;

use crate::config::CURRENCY_SYMBOL;

/// Lifecycle phase of an order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum OrderState {
    #[default]
    Ordering,
    Confirmed,
    Paid,
    Preparing,
    Delivering,
    Completed,
    Cancelled,
}

impl OrderState {
    /// Only an order still being put together may change its pizzas.
    pub fn can_modify_order(self) -> bool {
        self == OrderState::Ordering
    }

    /// Whether no further state change is possible.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderState::Completed | OrderState::Cancelled)
    }

    /// Human-readable list of useful actions in this state.
    pub fn available_actions(self) -> &'static str {
        match self {
            OrderState::Ordering => "Add Pizza, Remove Pizza, Confirm Order, Cancel Order",
            OrderState::Confirmed => "Pay Order, Cancel Order",
            OrderState::Paid => "Prepare Order, Cancel Order (with refund)",
            OrderState::Preparing => "Deliver Order",
            OrderState::Delivering => "Complete Order",
            OrderState::Completed => "Order is complete - no actions available",
            OrderState::Cancelled => "Order is cancelled - no actions available",
        }
    }

    /// The action that moves this state one step along the happy path.
    pub fn next_action(self) -> Option<OrderAction> {
        match self {
            OrderState::Ordering => Some(OrderAction::Confirm),
            OrderState::Confirmed => Some(OrderAction::Pay),
            OrderState::Paid => Some(OrderAction::Prepare),
            OrderState::Preparing => Some(OrderAction::Deliver),
            OrderState::Delivering => Some(OrderAction::Complete),
            OrderState::Completed | OrderState::Cancelled => None,
        }
    }
}

/// Something a caller asks an order to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum OrderAction {
    #[strum(to_string = "add pizza")]
    AddPizza,
    #[strum(to_string = "remove pizza")]
    RemovePizza,
    #[strum(to_string = "confirm order")]
    Confirm,
    #[strum(to_string = "cancel order")]
    Cancel,
    #[strum(to_string = "pay order")]
    Pay,
    #[strum(to_string = "prepare order")]
    Prepare,
    #[strum(to_string = "deliver order")]
    Deliver,
    #[strum(to_string = "complete order")]
    Complete,
}

/// Order facts a transition may depend on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionContext<'a> {
    pub pizza_count: usize,
    /// Amount payable after discount
    pub total: f64,
    /// Symbol prefixed to `total` in messages
    pub currency: &'a str,
}

impl Default for ActionContext<'_> {
    fn default() -> Self {
        Self {
            pizza_count: 0,
            total: 0.0,
            currency: CURRENCY_SYMBOL,
        }
    }
}

/// Result of an accepted action.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The order moved to a new state.
    Moved {
        from: OrderState,
        to: OrderState,
        message: String,
    },
    /// The action may go ahead in the current state.
    Permitted { message: String },
    /// Nothing to do: the step already happened.
    Unchanged { message: String },
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Moved { message, .. }
            | Outcome::Permitted { message }
            | Outcome::Unchanged { message } => message,
        }
    }

    /// The new state, if the action changed it.
    pub fn new_state(&self) -> Option<OrderState> {
        match self {
            Outcome::Moved { to, .. } => Some(*to),
            _ => None,
        }
    }
}

/// Why an action was refused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    #[error("Cannot {action} - {state} - {reason}")]
    NotAllowed {
        action: OrderAction,
        state: OrderState,
        reason: &'static str,
    },

    #[error("Cannot confirm empty order. Please add pizzas first.")]
    EmptyOrder,

    #[error("Invalid pizza index {index} - order has {count} pizza(s)")]
    InvalidIndex { index: usize, count: usize },
}

fn moved(from: OrderState, to: OrderState, message: impl Into<String>) -> Result<Outcome, Rejection> {
    Ok(Outcome::Moved {
        from,
        to,
        message: message.into(),
    })
}

fn unchanged(message: &str) -> Result<Outcome, Rejection> {
    Ok(Outcome::Unchanged {
        message: message.to_string(),
    })
}

fn permitted(message: &str) -> Result<Outcome, Rejection> {
    Ok(Outcome::Permitted {
        message: message.to_string(),
    })
}

fn refuse(action: OrderAction, state: OrderState, reason: &'static str) -> Result<Outcome, Rejection> {
    Err(Rejection::NotAllowed {
        action,
        state,
        reason,
    })
}

/// Decide what `action` does in `state`.
///
/// Pure: the caller applies [`Outcome::Moved`] by replacing its state.
pub fn transition(
    state: OrderState,
    action: OrderAction,
    ctx: &ActionContext<'_>,
) -> Result<Outcome, Rejection> {
    use OrderAction::*;
    use OrderState::*;

    let total = format!("{}{:.2}", ctx.currency, ctx.total);

    match (state, action) {
        // Ordering
        (Ordering, AddPizza) => permitted("Pizzas may be added in Ordering state"),
        (Ordering, RemovePizza) => permitted("Pizzas may be removed in Ordering state"),
        (Ordering, Confirm) if ctx.pizza_count == 0 => Err(Rejection::EmptyOrder),
        (Ordering, Confirm) => moved(state, Confirmed, "Order confirmed! Moving to Confirmed state."),
        (Ordering, Cancel) => moved(state, Cancelled, "Order cancelled from Ordering state."),
        (Ordering, Pay) => refuse(action, state, "please confirm order first"),
        (Ordering, Prepare) => refuse(action, state, "please confirm and pay first"),
        (Ordering, Deliver) => refuse(action, state, "order not ready for delivery"),
        (Ordering, Complete) => refuse(action, state, "order not ready for completion"),

        // Confirmed
        (Confirmed, AddPizza | RemovePizza) => {
            refuse(action, state, "order is locked for modifications")
        }
        (Confirmed, Confirm) => unchanged("Order is already confirmed."),
        (Confirmed, Cancel) => moved(state, Cancelled, "Order cancelled from Confirmed state."),
        (Confirmed, Pay) => moved(
            state,
            Paid,
            format!("Payment processed! Order total: {}. Moving to Paid state.", total),
        ),
        (Confirmed, Prepare) => refuse(action, state, "payment required first"),
        (Confirmed, Deliver | Complete) => {
            refuse(action, state, "payment and preparation required first")
        }

        // Paid
        (Paid, AddPizza | RemovePizza) => refuse(action, state, "order is locked for modifications"),
        (Paid, Confirm) => unchanged("Order is already confirmed and paid."),
        (Paid, Cancel) => moved(
            state,
            Cancelled,
            format!("Order cancelled from Paid state. Refund processed: {}", total),
        ),
        (Paid, Pay) => unchanged("Order is already paid for."),
        (Paid, Prepare) => moved(
            state,
            Preparing,
            "Starting pizza preparation... Moving to Preparing state.",
        ),
        (Paid, Deliver) => refuse(action, state, "preparation required first"),
        (Paid, Complete) => refuse(action, state, "preparation and delivery required first"),

        // Preparing
        (Preparing, AddPizza | RemovePizza) => refuse(action, state, "order is being prepared"),
        (Preparing, Confirm) => unchanged("Order is confirmed and being prepared."),
        (Preparing, Cancel) => moved(
            state,
            Cancelled,
            "Order cancelled during preparation. Partial refund processed.",
        ),
        (Preparing, Pay) => unchanged("Order is already paid for and being prepared."),
        (Preparing, Prepare) => unchanged("Order is already being prepared."),
        (Preparing, Deliver) => moved(
            state,
            Delivering,
            "Pizzas ready! Starting delivery... Moving to Delivering state.",
        ),
        (Preparing, Complete) => refuse(action, state, "delivery required first"),

        // Delivering
        (Delivering, AddPizza | RemovePizza) => {
            refuse(action, state, "order is out for delivery")
        }
        (Delivering, Confirm) => unchanged("Order is confirmed and out for delivery."),
        (Delivering, Cancel) => moved(
            state,
            Cancelled,
            "Order cancelled during delivery. Driver returning to store.",
        ),
        (Delivering, Pay) => unchanged("Order is already paid for and being delivered."),
        (Delivering, Prepare) => unchanged("Order is already prepared and being delivered."),
        (Delivering, Deliver) => unchanged("Order is already out for delivery."),
        (Delivering, Complete) => moved(
            state,
            Completed,
            "Order delivered successfully! Moving to Completed state.",
        ),

        // Completed
        (Completed, AddPizza | RemovePizza) => refuse(action, state, "order is finished"),
        (Completed, Cancel) => refuse(action, state, "order is already finished"),
        (Completed, Confirm | Complete) => unchanged("Order is already completed."),
        (Completed, Pay) => unchanged("Order was already paid for and completed."),
        (Completed, Prepare) => unchanged("Order was already prepared and completed."),
        (Completed, Deliver) => unchanged("Order was already delivered and completed."),

        // Cancelled
        (Cancelled, Cancel) => unchanged("Order is already cancelled."),
        (Cancelled, _) => refuse(action, state, "order was cancelled"),
    }
}
