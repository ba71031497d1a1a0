//! Currency definitions - how each currency is written and read

use std::fmt::{self, Write};
use std::hash::{Hash, Hasher};

use pantry_core::{numfmt, scan, Locale, PantryError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::notation::{Category, Notes};
use crate::sum::{parse_decimal, write_decimal};
use crate::{Money, CURRENCIES};

/// Where the writing symbol goes relative to the sum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPlacement {
    Before,
    After,
}

/// A currency of the static catalog
#[derive(Debug)]
pub struct Currency {
    pub(crate) index: usize,
    name: &'static str,
    code: &'static str,
    locale: &'static Locale,
    placement: SymbolPlacement,
    symbol: Option<&'static str>,
    writing_symbol: Option<&'static str>,
    fractional_symbol: Option<&'static str>,
    main_units: &'static [&'static str],
    sub_units: &'static [&'static str],
}

impl Currency {
    pub(crate) fn new(name: &'static str, code: &'static str, locale: &'static Locale, placement: SymbolPlacement) -> Self {
        Currency {
            index: 0,
            name,
            code,
            locale,
            placement,
            symbol: None,
            writing_symbol: None,
            fractional_symbol: None,
            main_units: &[],
            sub_units: &[],
        }
    }

    pub(crate) fn with_symbol(mut self, symbol: &'static str) -> Self {
        self.symbol = Some(symbol);
        self
    }

    pub(crate) fn with_writing(mut self, writing_symbol: &'static str) -> Self {
        self.writing_symbol = Some(writing_symbol);
        self
    }

    pub(crate) fn with_fractional(mut self, fractional_symbol: &'static str) -> Self {
        self.fractional_symbol = Some(fractional_symbol);
        self
    }

    pub(crate) fn with_units(mut self, main_units: &'static [&'static str], sub_units: &'static [&'static str]) -> Self {
        self.main_units = main_units;
        self.sub_units = sub_units;
        self
    }

    // ========== Accessors ==========

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Canonical symbol; the locale's currency symbol unless overridden
    pub fn symbol(&self) -> &'static str {
        self.symbol.unwrap_or(self.locale.currency_symbol)
    }

    /// Symbol used when writing a sum, " руб." for the ruble
    pub fn writing_symbol(&self) -> &'static str {
        self.writing_symbol.unwrap_or_else(|| self.symbol())
    }

    pub fn placement(&self) -> SymbolPlacement {
        self.placement
    }

    pub fn locale(&self) -> &'static Locale {
        self.locale
    }

    /// Spellings of the main unit, matched ignoring case
    pub fn main_units(&self) -> &'static [&'static str] {
        self.main_units
    }

    /// Spellings of the 1/100 unit, matched ignoring case
    pub fn sub_units(&self) -> &'static [&'static str] {
        self.sub_units
    }

    /// Symbol of the 1/100 unit ("¢"), when the currency has one
    pub fn fractional_symbol(&self) -> Option<&'static str> {
        self.fractional_symbol
    }

    // ========== Unit names ==========

    pub(crate) fn is_main_unit(&self, unit: &str) -> bool {
        self.main_units.iter().any(|form| scan::str_eq_ignore_case(form, unit))
    }

    pub(crate) fn is_sub_unit(&self, unit: &str) -> bool {
        self.sub_units.iter().any(|form| scan::str_eq_ignore_case(form, unit))
    }

    /// Sum in main units; a sub unit is worth 1/100
    pub(crate) fn convert(&self, sum: Decimal, unit: &str) -> Decimal {
        if !unit.is_empty() && self.is_sub_unit(unit) {
            sum / Decimal::ONE_HUNDRED
        } else {
            sum
        }
    }

    /// Whether `c` can be part of a sum written in this currency's locale
    pub(crate) fn is_numeric(&self, c: char) -> bool {
        let locale = self.locale;
        c == ' '
            || scan::SPACE_VARIANTS.contains(&c)
            || c == locale.positive_sign
            || c == locale.negative_sign
            || c == locale.decimal_separator
            || c == locale.group_separator
            || locale.digit_value(c).is_some()
    }

    // ========== Parsing ==========

    /// Parse a sum written with this currency's locale
    ///
    /// Unusual spaces used as digit group separators are read as plain spaces
    /// when the first attempt fails.
    pub fn try_parse_sum(&self, text: &str) -> Option<Decimal> {
        if let Some(sum) = parse_decimal(text, self.locale) {
            return Some(sum);
        }
        if !text.contains(scan::SPACE_VARIANTS) {
            return None;
        }
        let normalized: String = text
            .chars()
            .map(|c| if scan::SPACE_VARIANTS.contains(&c) { ' ' } else { c })
            .collect();
        parse_decimal(&normalized, self.locale)
    }

    pub fn parse_money(&'static self, text: &str) -> Result<Money, PantryError> {
        self.try_parse_money(text).ok_or_else(|| PantryError::format("money", text))
    }

    /// Read a money notation, expecting amounts in this currency
    ///
    /// Compound amounts add up ("3 руб 15 коп") as long as every part is in
    /// the same currency. A bare number after an amount counts sub units
    /// ("3 руб 15" is 3.15). Any part that is not a number in this locale
    /// rejects the whole text.
    pub fn try_parse_money(&'static self, text: &str) -> Option<Money> {
        let mut money = Money::nothing();
        let mut sum: Option<&str> = None;
        let mut unit: Option<&str> = None;

        for note in Notes::new(self, text) {
            if let (Some(pending_sum), Some(pending_unit)) = (sum, unit) {
                let Some(value) = self.try_parse_sum(pending_sum) else {
                    trace!(text, sum = pending_sum, currency = self.code, "sum not recognized");
                    return None;
                };
                let share = CURRENCIES.get_money(value, pending_unit);
                let expected = money.currency().unwrap_or(self);
                if share.currency() != Some(expected) {
                    debug!(text, unit = pending_unit, expected = expected.code, "mixed currencies");
                    return None;
                }
                money = money.add(&share).ok()?;
                sum = None;
                unit = None;
            }
            match note.category {
                Category::Sum => sum = Some(note.text),
                Category::Unit => unit = Some(note.text),
            }
        }

        let remainder = self.try_parse_sum(sum?)?;
        let currency = money.currency().unwrap_or(self);
        let tail = match unit {
            Some(unit) => {
                let tail = CURRENCIES.get_money(remainder, unit);
                if tail.currency() != Some(currency) {
                    debug!(text, unit, expected = currency.code, "mixed currencies");
                    return None;
                }
                tail
            }
            None if !money.is_nothing() => {
                let remainder = currency.sub_units.first().map_or(remainder, |sub| currency.convert(remainder, sub));
                Money::new(remainder, currency)
            }
            None => Money::new(remainder, currency),
        };
        money.add(&tail).ok()
    }

    // ========== Formatting ==========

    /// "₺42.000", "1 000 руб."
    pub fn format_sum(&self, sum: Decimal) -> String {
        numfmt::render(|f| self.write_sum(f, sum)).to_string()
    }

    pub fn write_sum<W: Write + ?Sized>(&self, w: &mut W, sum: Decimal) -> fmt::Result {
        match self.placement {
            SymbolPlacement::Before => {
                w.write_str(self.writing_symbol())?;
                write_decimal(w, sum, self.locale)
            }
            SymbolPlacement::After => {
                write_decimal(w, sum, self.locale)?;
                w.write_str(self.writing_symbol())
            }
        }
    }

    /// Write into `dest`; `None` as soon as a part does not fit
    pub fn try_format_sum(&self, sum: Decimal, dest: &mut [u8]) -> Option<usize> {
        let mut writer = numfmt::SliceWriter::new(dest);
        if self.placement == SymbolPlacement::Before {
            writer.write_str(self.writing_symbol()).ok()?;
        }
        let mut counter = numfmt::CountingWriter::default();
        write_decimal(&mut counter, sum, self.locale).ok()?;
        if counter.len > writer.remaining() {
            return None;
        }
        write_decimal(&mut writer, sum, self.locale).ok()?;
        if self.placement == SymbolPlacement::After {
            writer.write_str(self.writing_symbol()).ok()?;
        }
        Some(writer.written())
    }
}

/// A currency is identified by its name, code and symbol
impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.name == other.name && self.symbol() == other.symbol()
    }
}

impl Eq for Currency {}

// Equal currencies share a code, so hashing the code alone is consistent
impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
