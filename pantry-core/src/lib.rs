//! Pantry Core - Fundamental types
//!
//! This crate provides the core types used throughout Pantry:
//! - `Fractional`: exact fractions as written in recipes ("1 1/2", "1¹⁄₂", "1½")
//! - `Locale`: numeric conventions of a culture
//! - `PantryError`: errors shared by every value type
//! - `scan`: span scanning and character classification helpers

mod error;
mod fractional;
mod locale;
pub mod numfmt;
pub mod scan;

pub use error::{codes, PantryError};
pub use fractional::{Fractional, Notation};
pub use locale::Locale;
pub use numfmt::NumericFormat;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Fractional, Locale, PantryError};
    pub use crate::error::codes;
}
