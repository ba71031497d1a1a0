//! Pantry - Recipe quantities and prices
//!
//! One entry point for the value types of recipe ingredient text:
//! - `Fractional`: "1 1/2", "1½", "3/4"
//! - `Measure`: "2 cups", "1,5 л", "100g"
//! - `Money`: "3 руб 15 коп", "₺42.000"
//! - `Ingredient`: a measure and the name that follows it
//!
//! ```
//! use pantry::prelude::*;
//!
//! let flour = Measure::parse("1 1/2 cups", None).unwrap();
//! assert_eq!(flour.to_string(), "1 1/2 cups");
//!
//! let price: Money = "3 руб 15 коп".parse().unwrap();
//! assert_eq!(price.currency().map(|c| c.code()), Some("RUB"));
//! ```

mod ingredient;

pub use ingredient::Ingredient;
pub use pantry_core::{codes, numfmt, scan, Fractional, Locale, Notation, NumericFormat, PantryError};
pub use pantry_money::{Currency, CurrencyRegistry, Money, SymbolPlacement, CURRENCIES};
pub use pantry_units::{Conversion, Measure, MeasureUnit, MeasurementType, UnitRegistry, UNITS};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Currency, Fractional, Ingredient, Locale, Measure, MeasureUnit, Money, PantryError, CURRENCIES, UNITS};
}
