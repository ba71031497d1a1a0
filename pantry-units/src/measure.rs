//! Measure - an exact amount tagged with a unit

use std::cmp::Ordering;
use std::fmt::{self, Write};
use std::str::FromStr;

use pantry_core::{numfmt, Fractional, Locale, PantryError, codes};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{MeasureUnit, UNITS};

/// An amount of an ingredient: "2 cups", "100 gr", "3-"
///
/// The value is stored in the unit's base scale (fluid ounces, ounces,
/// millilitres, grams). The empty measure has no unit and formats as "".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Measure {
    value: Fractional,
    unit: Option<&'static MeasureUnit>,
}

impl Measure {
    pub fn new(value: Fractional, unit: &'static MeasureUnit) -> Self {
        Measure { value, unit: Some(unit) }
    }

    /// A measure with no amount and no unit
    pub fn empty() -> Self {
        Measure { value: Fractional::NAN, unit: None }
    }

    /// A number of pieces
    pub fn from_count(count: i64) -> Result<Self, PantryError> {
        if count < 0 {
            return Err(PantryError::Overflow(format!("negative count {}", count)));
        }
        let count = i32::try_from(count).map_err(|_| PantryError::Overflow(format!("count {} is too large", count)))?;
        Ok(Measure::new(Fractional::from(count), UNITS.count()))
    }

    pub fn value(&self) -> Fractional {
        self.value
    }

    pub fn unit(&self) -> Option<&'static MeasureUnit> {
        self.unit
    }

    pub fn is_empty(&self) -> bool {
        self.unit.is_none()
    }

    // ========== Parsing ==========

    pub fn parse(text: &str, locale: Option<&Locale>) -> Result<Self, PantryError> {
        Self::try_parse(text, locale).ok_or_else(|| PantryError::format("measure", text))
    }

    pub fn try_parse(text: &str, locale: Option<&Locale>) -> Option<Self> {
        Self::try_parse_prefix(text, locale).map(|(measure, _)| measure)
    }

    /// Parse a measure at the start of `text`, reporting the bytes consumed
    ///
    /// Unrecognized unit text is left unconsumed and the value is taken as a
    /// count, so "1 large pkg" reads as one piece.
    pub fn try_parse_prefix(text: &str, locale: Option<&Locale>) -> Option<(Self, usize)> {
        if text.trim().is_empty() {
            return None;
        }
        let Some((value, length)) = Fractional::try_parse_prefix(text, locale) else {
            return UNITS.count().try_parse_words(text, locale);
        };
        let (measure, unit_length) = UNITS.get_measure(value, &text[length..], locale);
        Some((measure, length + unit_length))
    }

    // ========== Formatting ==========

    /// Render with the unit's preferred spelling
    ///
    /// `format` applies to the value (see `Fractional::format`). Without a
    /// locale a count is written with a trailing dash ("3-").
    pub fn format(&self, format: Option<&str>, locale: Option<&Locale>) -> String {
        numfmt::render(|f| self.write_to(f, format, locale)).to_string()
    }

    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W, format: Option<&str>, locale: Option<&Locale>) -> fmt::Result {
        match self.unit {
            Some(unit) => unit.write_measure(w, self.value, format, locale),
            None => Ok(()),
        }
    }

    /// Write into `dest`; `None` for the empty measure or when it does not fit
    pub fn try_format(&self, dest: &mut [u8], format: Option<&str>, locale: Option<&Locale>) -> Option<usize> {
        let unit = self.unit?;
        if self.value.is_nan() {
            return None;
        }
        numfmt::write_exact(dest, |w| unit.write_measure(w, self.value, format, locale))
    }

    // ========== Arithmetic ==========

    /// Sum of two measures of the same unit; the empty measure adds nothing
    pub fn add(&self, other: &Measure) -> Result<Measure, PantryError> {
        if other.is_empty() {
            return Ok(*self);
        }
        if self.is_empty() {
            return Ok(*other);
        }
        self.check_unit(other)?;
        Ok(Measure { value: self.value + other.value, unit: self.unit })
    }

    /// Take `other` away; more than is available cannot be taken
    pub fn subtract(&self, other: &Measure) -> Result<Measure, PantryError> {
        if other.is_empty() {
            return Ok(*self);
        }
        self.check_unit(other)?;
        if self.value < other.value {
            return Err(PantryError::invalid_operation(
                codes::INSUFFICIENT,
                format!("cannot take {} from {}", other, self),
            ));
        }
        Ok(Measure { value: self.value - other.value, unit: self.unit })
    }

    /// Scale by a rate, keeping the unit
    pub fn multiply(&self, rate: Fractional) -> Measure {
        Measure { value: self.value * rate, unit: self.unit }
    }

    /// Split into `count` equal portions
    pub fn divide(&self, count: i32) -> Result<Measure, PantryError> {
        if count == 0 {
            return Err(PantryError::NotFinite);
        }
        Ok(Measure { value: self.value / count, unit: self.unit })
    }

    /// How many times `other` fits into this measure
    pub fn ratio(&self, other: &Measure) -> Result<Fractional, PantryError> {
        self.check_unit(other)?;
        Ok(self.value / other.value)
    }

    /// Order two measures of the same unit; the empty measure sorts first
    pub fn compare(&self, other: &Measure) -> Result<Ordering, PantryError> {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Ok(Ordering::Equal),
            (true, false) => Ok(Ordering::Less),
            (false, true) => Ok(Ordering::Greater),
            (false, false) => {
                self.check_unit(other)?;
                Ok(self.value.cmp(&other.value))
            }
        }
    }

    /// Total of measures sharing a single unit
    pub fn sum<'a, I>(measures: I) -> Result<Measure, PantryError>
    where
        I: IntoIterator<Item = &'a Measure>,
    {
        let total = measures
            .into_iter()
            .try_fold(Measure::empty(), |total, measure| total.add(measure))?;
        if total.is_empty() {
            return Err(PantryError::invalid_operation(codes::INVALID_OPERATION, "no measures to sum"));
        }
        Ok(total)
    }

    /// Mean of measures sharing a single unit
    pub fn average<'a, I>(measures: I) -> Result<Measure, PantryError>
    where
        I: IntoIterator<Item = &'a Measure>,
    {
        let mut count = 0i32;
        let mut total = Measure::empty();
        for measure in measures {
            total = total.add(measure)?;
            count = count.checked_add(1).ok_or_else(|| PantryError::Overflow("too many measures".into()))?;
        }
        if total.is_empty() {
            return Err(PantryError::invalid_operation(codes::INVALID_OPERATION, "no measures to average"));
        }
        total.divide(count)
    }

    fn check_unit(&self, other: &Measure) -> Result<(), PantryError> {
        if self.unit == other.unit {
            Ok(())
        } else {
            Err(PantryError::unit_mismatch(unit_label(self.unit), unit_label(other.unit)))
        }
    }
}

fn unit_label(unit: Option<&MeasureUnit>) -> String {
    unit.map_or_else(|| "none".to_string(), |unit| unit.to_string())
}

impl Default for Measure {
    fn default() -> Self {
        Measure::empty()
    }
}

impl PartialOrd for Measure {
    /// `None` when the units differ
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

/// Compare with the measure a text reads as; blank or unreadable text is never equal
impl PartialEq<&str> for Measure {
    fn eq(&self, other: &&str) -> bool {
        Measure::try_parse(other, None).is_some_and(|measure| *self == measure)
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, None, None)
    }
}

impl FromStr for Measure {
    type Err = PantryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Measure::parse(s, None)
    }
}

impl Serialize for Measure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Measure {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s.trim().is_empty() {
            return Ok(Measure::empty());
        }
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}
