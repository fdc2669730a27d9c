//! # Presets
//!
//! Named pizzas from the house menu, custom topping selections, and a small
//! text syntax for describing a pizza with its add-ons.
//!
//! ## Pizza specs
//!
//! | Spec | Pizza |
//! |------|-------|
//! | `pepperoni` | Pepperoni preset |
//! | `meat-lovers+extra-cheese` | Meat Lovers with Extra Cheese |
//! | `custom:Mushrooms,Olives+stuffed-crust` | Base + Mushrooms + Olives, Stuffed Crust |
//!
//! ```
//! use pizzeria::presets::PizzaSpec;
//!
//! let pizza = "vegetarian+extra-cheese".parse::<PizzaSpec>()?.build();
//! assert_eq!(pizza.price(), 72.0);
//! # Ok::<(), pizzeria::PizzeriaError>(())
//! ```

use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::error::PizzeriaError;
use crate::ingredient::{Topping, ToppingGroup, is_valid_topping};
use crate::pizza::{BasePizza, Pizza, PizzaExt};

/// Label of a group built by [`custom_toppings`].
pub const CUSTOM_LABEL: &str = "Custom Pizza";

/// Lowercase, with spaces and underscores turned into dashes.
fn normalize(name: &str) -> String {
    name.trim().to_lowercase().replace([' ', '_'], "-")
}

/// The house pizzas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Preset {
    Pepperoni,
    Vegetarian,
    #[strum(to_string = "Meat Lovers")]
    MeatLovers,
    #[strum(to_string = "Vegetarian Deluxe")]
    VegetarianDeluxe,
}

impl Preset {
    /// Build a fresh topping tree for this preset.
    pub fn toppings(self) -> ToppingGroup {
        match self {
            Preset::Pepperoni => ToppingGroup::pepperoni(),
            Preset::Vegetarian => ToppingGroup::vegetarian(),
            Preset::MeatLovers => ToppingGroup::meat_lovers(),
            Preset::VegetarianDeluxe => ToppingGroup::vegetarian_deluxe(),
        }
    }

    /// An undecorated pizza with this preset's toppings.
    pub fn pizza(self) -> BasePizza {
        BasePizza::new(self.toppings())
    }
}

impl FromStr for Preset {
    type Err = PizzeriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "pepperoni" => Ok(Preset::Pepperoni),
            "vegetarian" | "veg" => Ok(Preset::Vegetarian),
            "meat-lovers" => Ok(Preset::MeatLovers),
            "vegetarian-deluxe" | "veg-deluxe" => Ok(Preset::VegetarianDeluxe),
            _ => Err(PizzeriaError::UnknownPreset(s.to_string())),
        }
    }
}

/// Every preset, in menu order.
pub fn list_presets() -> Vec<Preset> {
    Preset::iter().collect()
}

/// Topping tree for a preset name, if there is one.
pub fn by_name(name: &str) -> Option<ToppingGroup> {
    name.parse::<Preset>().ok().map(Preset::toppings)
}

/// A "Custom Pizza" group: the base plus each named topping.
///
/// Names missing from the catalog are skipped with a warning.
pub fn custom_toppings<I, S>(names: I) -> ToppingGroup
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut group = ToppingGroup::new(CUSTOM_LABEL).child(ToppingGroup::base());
    for name in names {
        let name = name.as_ref().trim();
        if is_valid_topping(name) {
            group.add(Topping::new(name));
        } else {
            log::warn!("Skipping unknown topping '{}' in custom pizza", name);
        }
    }
    group
}

/// Optional layer on top of a pizza.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum AddOn {
    ExtraCheese,
    StuffedCrust,
}

impl AddOn {
    /// Wrap `pizza` in this layer.
    pub fn apply(self, pizza: Box<dyn Pizza>) -> Box<dyn Pizza> {
        match self {
            AddOn::ExtraCheese => pizza.extra_cheese().boxed(),
            AddOn::StuffedCrust => pizza.stuffed_crust().boxed(),
        }
    }
}

impl FromStr for AddOn {
    type Err = PizzeriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "extra-cheese" | "cheese" => Ok(AddOn::ExtraCheese),
            "stuffed-crust" | "crust" => Ok(AddOn::StuffedCrust),
            _ => Err(PizzeriaError::UnknownAddOn(s.to_string())),
        }
    }
}

/// What goes under the add-ons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PizzaBase {
    Preset(Preset),
    Custom(Vec<String>),
}

/// A parsed pizza description: a base and its add-ons, innermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PizzaSpec {
    pub base: PizzaBase,
    pub add_ons: Vec<AddOn>,
}

impl PizzaSpec {
    /// Build the described pizza.
    pub fn build(&self) -> Box<dyn Pizza> {
        let toppings = match &self.base {
            PizzaBase::Preset(preset) => preset.toppings(),
            PizzaBase::Custom(names) => custom_toppings(names),
        };
        self.add_ons
            .iter()
            .fold(BasePizza::new(toppings).boxed(), |pizza, add_on| add_on.apply(pizza))
    }
}

impl FromStr for PizzaSpec {
    type Err = PizzeriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('+');
        let base = parts.next().map(str::trim).unwrap_or_default();
        if base.is_empty() {
            return Err(PizzeriaError::InvalidSpec(s.to_string()));
        }

        let base = match base.split_once(':') {
            Some((kind, list)) if kind.trim().eq_ignore_ascii_case("custom") => PizzaBase::Custom(
                list.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(String::from)
                    .collect(),
            ),
            Some(_) => return Err(PizzeriaError::InvalidSpec(s.to_string())),
            None => PizzaBase::Preset(base.parse()?),
        };

        let add_ons = parts.map(str::parse).collect::<Result<Vec<AddOn>, _>>()?;
        Ok(Self { base, add_ons })
    }
}
