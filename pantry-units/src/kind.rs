//! What a unit measures

use std::fmt;
use serde::{Serialize, Deserialize};

/// The physical (or countable) nature of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementType {
    Count,
    Weight,
    Volume,
    Length,
    Duration,
    Percentage,
}

impl MeasurementType {
    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            MeasurementType::Count => "count",
            MeasurementType::Weight => "weight",
            MeasurementType::Volume => "volume",
            MeasurementType::Length => "length",
            MeasurementType::Duration => "duration",
            MeasurementType::Percentage => "percentage",
        }
    }

    /// Three-letter abbreviation used in ingredient tables
    pub fn code(&self) -> &'static str {
        match self {
            MeasurementType::Count => "CNT",
            MeasurementType::Weight => "WGT",
            MeasurementType::Volume => "VOL",
            MeasurementType::Length => "LEN",
            MeasurementType::Duration => "DUR",
            MeasurementType::Percentage => "PCT",
        }
    }
}

impl fmt::Display for MeasurementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
