//! Ingredient lines - a measure followed by what is measured
//!
//! "2 cups flour" splits into the measure `2 cups` and the name `flour`.
//! Lines without a leading amount ("salt to taste") keep an empty measure.

use std::fmt;

use pantry_core::Locale;
use pantry_units::Measure;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// List markers skipped before the amount
const BULLETS: &[char] = &['-', '*', '•', '·'];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub measure: Measure,
    pub name: String,
}

impl Ingredient {
    pub fn new(measure: Measure, name: impl Into<String>) -> Self {
        Ingredient { measure, name: name.into() }
    }

    /// Split one line; `None` for blank lines
    pub fn parse_line(line: &str, locale: Option<&Locale>) -> Option<Ingredient> {
        let line = line.trim().trim_start_matches(BULLETS).trim_start();
        if line.is_empty() {
            return None;
        }
        match Measure::try_parse_prefix(line, locale) {
            Some((measure, consumed)) => Some(Ingredient::new(measure, line[consumed..].trim())),
            None => {
                trace!(line, "no leading amount");
                Some(Ingredient::new(Measure::empty(), line))
            }
        }
    }

    /// Split every non-blank line of a recipe's ingredient list
    pub fn parse_list(text: &str, locale: Option<&Locale>) -> Vec<Ingredient> {
        text.lines().filter_map(|line| Ingredient::parse_line(line, locale)).collect()
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.measure.is_empty() {
            write!(f, "{}", self.name)
        } else if self.name.is_empty() {
            write!(f, "{}", self.measure)
        } else {
            write!(f, "{} {}", self.measure, self.name)
        }
    }
}
