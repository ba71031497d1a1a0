//! Pantry Units - Ingredient measures
//!
//! Reads and writes amounts as they appear in recipes, each tagged with a
//! unit from a fixed catalog:
//! - Metric volume and weight, spelled in English or Russian (ml/L, g/kg)
//! - US customary volume (drops to gallons, stored in fluid ounces)
//! - US customary weight (ounces and pounds)
//! - Percent
//! - Bare count of pieces
//!
//! Values stay exact: "1 1/2 cups" is 12 fluid ounces, not 11.999.

mod customary;
mod kind;
mod measure;
mod parse;
mod unit;
mod units;

pub use customary::Conversion;
pub use kind::MeasurementType;
pub use measure::Measure;
pub use unit::MeasureUnit;
pub use units::{UnitRegistry, UNITS};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Measure, MeasureUnit, MeasurementType, UNITS};
}
