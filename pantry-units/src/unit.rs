//! Measurement units - how a value is recognized in text and written back

use std::fmt::{self, Write};
use std::hash::{Hash, Hasher};

use pantry_core::{Fractional, Locale};
use tracing::trace;

use crate::customary::{self, Conversion};
use crate::parse::{match_any, match_symbol, sort_symbols};
use crate::{Measure, MeasurementType};

/// How a unit spells and scales its values
#[derive(Debug)]
pub(crate) enum Scale {
    /// Base spellings, and kilo spellings worth 1000 base units
    Metric {
        symbols: Vec<&'static str>,
        kilo: Vec<&'static str>,
    },
    /// Spelling groups converted to a base unit, in ascending size
    Customary(Vec<Conversion>),
    Percent,
    /// Bare number of items
    Count,
}

/// A unit of the static catalog
#[derive(Debug)]
pub struct MeasureUnit {
    name: &'static str,
    symbol: &'static str,
    kind: MeasurementType,
    locale: &'static Locale,
    scale: Scale,
}

impl MeasureUnit {
    pub(crate) fn metric(
        name: &'static str,
        symbol: &'static str,
        kind: MeasurementType,
        locale: &'static Locale,
        symbols: &[&'static str],
        kilo: &[&'static str],
    ) -> Self {
        MeasureUnit {
            name,
            symbol,
            kind,
            locale,
            scale: Scale::Metric { symbols: sort_symbols(symbols), kilo: sort_symbols(kilo) },
        }
    }

    pub(crate) fn customary(
        name: &'static str,
        symbol: &'static str,
        kind: MeasurementType,
        locale: &'static Locale,
        conversions: Vec<Conversion>,
    ) -> Self {
        MeasureUnit { name, symbol, kind, locale, scale: Scale::Customary(conversions) }
    }

    pub(crate) fn percent() -> Self {
        MeasureUnit {
            name: "",
            symbol: "%",
            kind: MeasurementType::Percentage,
            locale: Locale::invariant(),
            scale: Scale::Percent,
        }
    }

    pub(crate) fn count() -> Self {
        MeasureUnit {
            name: "",
            symbol: "-",
            kind: MeasurementType::Count,
            locale: Locale::invariant(),
            scale: Scale::Count,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn measurement_type(&self) -> MeasurementType {
        self.kind
    }

    /// Culture the unit's spellings belong to
    pub fn locale(&self) -> &'static Locale {
        self.locale
    }

    pub fn is_count(&self) -> bool {
        matches!(self.scale, Scale::Count)
    }

    /// Every spelling recognized by this unit, longest first within a group
    pub fn symbols(&self) -> Vec<&'static str> {
        match &self.scale {
            Scale::Metric { symbols, kilo } => symbols.iter().chain(kilo).copied().collect(),
            Scale::Customary(conversions) => conversions.iter().flat_map(|c| c.symbols.iter().copied()).collect(),
            Scale::Percent | Scale::Count => vec![self.symbol],
        }
    }

    /// Match one of this unit's spellings at the start of `text`
    ///
    /// Returns the measure in this unit's base scale and the bytes consumed,
    /// including the boundary character after the spelling.
    pub fn try_get_measure(&'static self, value: Fractional, text: &str) -> Option<(Measure, usize)> {
        let (value, consumed) = match &self.scale {
            Scale::Metric { symbols, kilo } => match_any(text, symbols)
                .map(|consumed| (value, consumed))
                .or_else(|| match_any(text, kilo).map(|consumed| (value * 1000, consumed)))?,
            Scale::Customary(conversions) => conversions.iter().find_map(|conversion| {
                match_any(text, &conversion.symbols).map(|consumed| (value * conversion.factor, consumed))
            })?,
            Scale::Percent | Scale::Count => (value, match_symbol(text, self.symbol)?),
        };
        Some((Measure::new(value, self), consumed))
    }

    /// Parse "value [spelling]" as a measure of this unit only
    ///
    /// A bare value is taken as already being in this unit's base scale.
    pub fn try_parse_measure(&'static self, text: &str) -> Option<Measure> {
        if text.trim().is_empty() {
            return None;
        }
        let (value, length) = Fractional::try_parse_prefix(text, Some(self.locale))?;
        let rest = text[length..].trim_start();
        if rest.is_empty() {
            return Some(Measure::new(value, self));
        }
        self.try_get_measure(value, rest).map(|(measure, _)| measure)
    }

    /// Count written in words ("two eggs", "a hundred cans")
    ///
    /// Number words are not recognized yet; this always returns `None`.
    pub fn try_parse_words(&'static self, text: &str, locale: Option<&Locale>) -> Option<(Measure, usize)> {
        trace!(text, locale = ?locale.map(|l| l.tag()), unit = %self, "number words are not recognized");
        None
    }

    /// Write `value` (in base scale) with this unit's preferred spelling
    pub(crate) fn write_measure<W: Write + ?Sized>(
        &self,
        w: &mut W,
        value: Fractional,
        format: Option<&str>,
        locale: Option<&Locale>,
    ) -> fmt::Result {
        match &self.scale {
            Scale::Metric { kilo, .. } => {
                let whole_kilos = value.is_integer() && value.numerator() > 1000 && value.numerator() % 1000 == 0;
                match kilo.last() {
                    Some(kilo_symbol) if whole_kilos => {
                        (value / 1000).write_to(w, format, locale)?;
                        w.write_char(' ')?;
                        w.write_str(kilo_symbol)
                    }
                    _ => self.write_plain(w, value, format, locale),
                }
            }
            Scale::Customary(conversions) => match customary::choose(conversions, value) {
                Some((conversion, converted)) => {
                    converted.write_to(w, format, locale)?;
                    w.write_char(' ')?;
                    w.write_str(conversion.symbol_for(converted))
                }
                None => self.write_plain(w, value, format, locale),
            },
            Scale::Percent => {
                value.write_to(w, format, locale)?;
                w.write_str(self.symbol)
            }
            Scale::Count => match locale {
                None => {
                    value.write_to(w, format, None)?;
                    w.write_str(self.symbol)
                }
                Some(locale) => {
                    value.write_to(w, format, Some(locale))?;
                    match locale.language() {
                        "en" => w.write_str(" pcs"),
                        "ru" => w.write_str(" шт"),
                        _ => Ok(()),
                    }
                }
            },
        }
    }

    fn write_plain<W: Write + ?Sized>(
        &self,
        w: &mut W,
        value: Fractional,
        format: Option<&str>,
        locale: Option<&Locale>,
    ) -> fmt::Result {
        value.write_to(w, format, locale)?;
        w.write_char(' ')?;
        w.write_str(self.symbol)
    }
}

impl PartialEq for MeasureUnit {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.symbol == other.symbol && self.locale.tag() == other.locale.tag()
    }
}

impl Eq for MeasureUnit {}

impl Hash for MeasureUnit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.symbol.hash(state);
        self.locale.tag().hash(state);
    }
}

impl fmt::Display for MeasureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scale {
            Scale::Count => write!(f, "#"),
            Scale::Percent => write!(f, "{}", self.symbol),
            _ => write!(f, "{} ({})", self.name, self.symbol),
        }
    }
}
