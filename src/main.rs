//! # Pizzeria CLI
//!
//! Command-line interface for browsing the menu and walking orders through
//! their lifecycle.
//!
//! ## Usage
//!
//! ```bash
//! # Show the topping catalog, the house pizzas and the discounts
//! pizzeria toppings
//! pizzeria menu
//! pizzeria discounts
//!
//! # Build an order and take it all the way to delivery
//! pizzeria order --customer Alice \
//!     --pizza pepperoni+extra-cheese \
//!     --pizza custom:Mushrooms,Olives+stuffed-crust \
//!     --discount family --through delivering
//!
//! # Same order as JSON
//! pizzeria order --pizza meat-lovers --json
//!
//! # Scripted walkthrough of menus, subscribers and an order
//! RUST_LOG=debug pizzeria demo
//! ```

use clap::{Parser, Subcommand};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use strum::IntoEnumIterator;

use pizzeria::{
    Order, PizzeriaError, ShopConfig,
    components::{Columns, ComponentExt, Header, LineItem, Receipt, Text, Total},
    discount::{DiscountKind, LoyaltyDiscount},
    ingredient::{CATALOG, Ingredient},
    menu::{Customer, PizzaMenu, SpecialsMenu, Subject, Website},
    order::{OrderState, Outcome},
    pizza::{ExtraCheese, PizzaExt, StuffedCrust},
    presets::{self, PizzaSpec, Preset},
};

/// Pizzeria - Pizza shop ordering utility
#[derive(Parser, Debug)]
#[command(name = "pizzeria")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Shop configuration file (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the topping catalog with prices
    Toppings,

    /// List the house pizzas and add-ons
    Menu,

    /// List the available discounts
    Discounts {
        /// Loyalty tier used for the loyalty discount (1-5)
        #[arg(long, default_value = "1")]
        tier: i32,
    },

    /// Build an order and move it through its lifecycle
    Order {
        /// Customer name
        #[arg(long, default_value = "Guest")]
        customer: String,

        /// Order number (defaults to the configured first order number)
        #[arg(long)]
        number: Option<u32>,

        /// Pizza spec, e.g. pepperoni+extra-cheese or custom:Olives,Salami (repeatable)
        #[arg(long = "pizza", value_name = "SPEC")]
        pizzas: Vec<PizzaSpec>,

        /// Discount strategy (regular, family, bulk, student, senior, loyalty)
        #[arg(long)]
        discount: Option<DiscountKind>,

        /// Loyalty tier (1-5)
        #[arg(long, default_value = "1")]
        tier: i32,

        /// Advance the order until it reaches this state
        #[arg(long, default_value = "ordering")]
        through: OrderState,

        /// Print the order as JSON instead of a receipt
        #[arg(long)]
        json: bool,
    },

    /// Run a scripted walkthrough
    Demo,
}

fn main() {
    pretty_env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PizzeriaError> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ShopConfig::load(path)?,
        None => ShopConfig::default(),
    };
    log::debug!("Using config: {:?}", config);

    match cli.command {
        Commands::Toppings => println!("{}", toppings_list(&config)),
        Commands::Menu => println!("{}", house_menu(&config)),
        Commands::Discounts { tier } => println!("{}", discount_list(&config, tier)),
        Commands::Order {
            customer,
            number,
            pizzas,
            discount,
            tier,
            through,
            json,
        } => {
            let mut order = Order::new(number.unwrap_or(config.first_order_number), customer);
            order.set_currency(config.currency.as_str());
            for spec in &pizzas {
                order.perform_add_pizza(spec.build())?;
            }
            if let Some(kind) = discount {
                order.set_boxed_discount_strategy(kind.strategy(tier));
            }

            let messages = advance(&mut order, through)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&order.snapshot())?);
            } else {
                for message in messages {
                    println!("{}", message);
                }
                println!("{}", order.display_order_with(&config));
                println!("{}", order.display_discount_info_with(&config));
                println!("{}", order.display_state_info_with(&config));
                let due = Total::labeled("AMOUNT DUE:", order.discounted_total())
                    .currency(config.currency.as_str())
                    .width(config.receipt_width);
                println!("{}", due.render());
            }
        }
        Commands::Demo => demo(&config)?,
    }

    Ok(())
}

/// Move `order` along until it reaches `target`, collecting each message.
///
/// `Cancelled` is reached by cancelling; every other state by following the
/// happy path.
fn advance(order: &mut Order, target: OrderState) -> Result<Vec<String>, PizzeriaError> {
    let mut messages = Vec::new();

    if target == OrderState::Cancelled {
        let outcome = order.cancel_order()?;
        messages.push(outcome.message().to_string());
        return Ok(messages);
    }

    while order.state() != target {
        let Some(action) = order.state().next_action() else {
            break;
        };
        let outcome = order.perform(action)?;
        messages.push(outcome.message().to_string());
    }

    Ok(messages)
}

fn toppings_list(config: &ShopConfig) -> String {
    let width = config.receipt_width;
    Receipt::new()
        .child(Header::new(config.name.as_str()).subtitle("Toppings").width(width))
        .children(CATALOG.iter().map(|(name, price)| {
            LineItem::new(*name, *price)
                .currency(config.currency.as_str())
                .width(width)
        }))
        .render()
}

fn discount_list(config: &ShopConfig, tier: i32) -> String {
    let width = config.receipt_width;
    let mut receipt = Receipt::new().child(Header::new("Discounts").width(width));
    for kind in DiscountKind::iter() {
        let strategy = kind.strategy(tier);
        receipt.push(Columns::new(kind.to_string(), strategy.name()).width(width));
        receipt.push(Text::new(format!("  {}", strategy.description())));
    }
    receipt.render()
}

fn house_menu(config: &ShopConfig) -> String {
    let width = config.receipt_width;
    let mut receipt = Receipt::new()
        .child(Header::new(config.name.as_str()).subtitle("Menu").width(width))
        .children(presets::list_presets().into_iter().map(|preset| {
            LineItem::new(preset.to_string(), preset.toppings().price())
                .currency(config.currency.as_str())
                .width(width)
        }));

    receipt.push(Text::new(""));
    receipt.push(Text::new("Add-ons"));
    for (label, price) in [
        (ExtraCheese::LABEL, ExtraCheese::PRICE),
        (StuffedCrust::LABEL, StuffedCrust::PRICE),
    ] {
        receipt.push(
            LineItem::new(format!("+ {label}"), price)
                .currency(config.currency.as_str())
                .width(width),
        );
    }
    receipt.render()
}

fn print_outcome(result: Result<Outcome, pizzeria::order::Rejection>) {
    match result {
        Ok(outcome) => println!("  {}", outcome.message()),
        Err(rejection) => println!("  {}", rejection),
    }
}

fn demo(config: &ShopConfig) -> Result<(), PizzeriaError> {
    // Menus and subscribers
    let alice = Rc::new(RefCell::new(Customer::new("Alice", "082 555 0101")));
    let bob = Rc::new(RefCell::new(Customer::new("Bob", "")));
    let site = Rc::new(RefCell::new(Website::new(config.name.as_str(), "https://pizzeria.example")));

    let mut menu = PizzaMenu::new(format!("{} Menu", config.name));
    let mut specials = SpecialsMenu::new("Weekend Specials");
    menu.set_currency(config.currency.as_str());
    specials.set_currency(config.currency.as_str());
    menu.add_observer(alice.clone());
    menu.add_observer(site.clone());
    specials.add_observer(alice.clone());
    specials.add_observer(bob.clone());
    specials.add_observer(site.clone());

    for preset in Preset::iter() {
        menu.add_pizza(preset.pizza());
    }
    specials.add_special_offer(Preset::MeatLovers.pizza().stuffed_crust(), "Free garlic bread");
    specials.add_pizza(Preset::Vegetarian.pizza().extra_cheese());

    println!("{}\n", menu.display_menu_with(config));
    println!("{}\n", specials.display_specials_menu_with(config));

    menu.remove_pizza(0);
    specials.remove_special_offer(0);

    for customer in [&alice, &bob] {
        let customer = customer.borrow();
        println!("{}", customer.display_notifications());
        for reaction in customer.reactions() {
            println!("  {}", reaction);
        }
        println!();
    }
    println!("{}\n", site.borrow().display_updates());

    // An order from start to finish
    let mut order = Order::new(config.first_order_number, "Alice");
    order.set_currency(config.currency.as_str());
    println!("Building order #{}", order.number());
    print_outcome(order.perform_add_pizza(Preset::Pepperoni.pizza().extra_cheese()));
    print_outcome(order.perform_add_pizza("custom:Mushrooms,Olives".parse::<PizzaSpec>()?.build()));
    print_outcome(order.perform_add_pizza(Preset::MeatLovers.pizza()));
    order.set_discount_strategy(LoyaltyDiscount::new(3));

    println!("{}", order.display_order_with(config));
    println!("{}", order.display_discount_info_with(config));

    print_outcome(order.pay_order());
    while let Some(action) = order.state().next_action() {
        let result = order.perform(action);
        let refused = result.is_err();
        print_outcome(result);
        if refused {
            break;
        }
    }
    print_outcome(order.perform_add_pizza(Preset::Vegetarian.pizza()));

    println!("{}", order.display_state_info_with(config));
    println!("{}", order.display_order_summary_with(config));
    Ok(())
}
