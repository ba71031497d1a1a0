//! Pantry Money - Currencies and prices
//!
//! Reads prices the way they are typed next to recipes, in any of the
//! catalog's currencies:
//! - "3 руб 15 коп" and "3 руб 15" add up to 3.15 rubles
//! - "₺42.000" follows Turkish digit grouping
//! - "5٫50 ج.م." accepts the Arabic decimal separator
//!
//! and writes them back with the currency's symbol, placement and locale.
//! Sums are `rust_decimal::Decimal`, so cents never drift.

mod currencies;
mod currency;
mod money;
mod notation;
mod sum;

pub use currencies::{CurrencyRegistry, CURRENCIES};
pub use currency::{Currency, SymbolPlacement};
pub use money::Money;
pub use notation::{Category, Note, Notes};
pub use sum::{parse_decimal, write_decimal};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Currency, Money, CURRENCIES};
}
