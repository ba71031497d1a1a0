//! Unit catalog - the fixed set of units a measure can carry

use std::sync::LazyLock;

use pantry_core::{Fractional, Locale};
use tracing::trace;

use crate::customary::{volume_conversions, weight_conversions};
use crate::{Measure, MeasureUnit, MeasurementType};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

// Positions in the catalog; resolution walks it in this order
const METRIC_VOLUME_ENG: usize = 0;
const METRIC_VOLUME_RUS: usize = 1;
const METRIC_WEIGHT_ENG: usize = 2;
const METRIC_WEIGHT_RUS: usize = 3;
const CUSTOMARY_VOLUME: usize = 4;
const CUSTOMARY_WEIGHT: usize = 5;
const PERCENT: usize = 6;
const COUNT: usize = 7;

/// Ordered catalog of every known unit
pub struct UnitRegistry {
    units: Vec<MeasureUnit>,
}

impl UnitRegistry {
    fn new() -> Self {
        let mut registry = UnitRegistry { units: Vec::with_capacity(COUNT + 1) };
        registry.register_metric_units();
        registry.register_customary_units();
        registry.register_special_units();
        registry
    }

    fn register_metric_units(&mut self) {
        let en = locale("en-US");
        let ru = locale("ru-RU");

        self.units.push(MeasureUnit::metric(
            "Volume", "ml", MeasurementType::Volume, en,
            &["mL", "milliliter", "milliliters", "millilitre", "millilitres"],
            &["L", "liter", "liters", "litre", "litres"],
        ));
        self.units.push(MeasureUnit::metric(
            "Объём", "мл", MeasurementType::Volume, ru,
            &["мл", "миллилитр", "миллилитра", "миллилитров"],
            &["л", "литр", "литра", "литров"],
        ));
        self.units.push(MeasureUnit::metric(
            "Weight", "gr", MeasurementType::Weight, en,
            &["gr", "g", "gram", "grams", "gramme", "grammes"],
            &["kg", "kilogram", "kilograms", "kilogramme", "kilogrammes"],
        ));
        self.units.push(MeasureUnit::metric(
            "Вес", "гр", MeasurementType::Weight, ru,
            &["гр", "г", "грам", "грамм", "граммов"],
            &["кг", "килограм", "килограмм", "килограммов"],
        ));
    }

    fn register_customary_units(&mut self) {
        let en = locale("en-US");
        self.units.push(MeasureUnit::customary(
            "US Customary Volume", "fl.oz.", MeasurementType::Volume, en, volume_conversions(),
        ));
        self.units.push(MeasureUnit::customary(
            "US Customary Weight", "oz", MeasurementType::Weight, en, weight_conversions(),
        ));
    }

    fn register_special_units(&mut self) {
        self.units.push(MeasureUnit::percent());
        self.units.push(MeasureUnit::count());
    }

    /// All units in resolution order
    pub fn all(&self) -> &[MeasureUnit] {
        &self.units
    }

    /// Bare number of items
    pub fn count(&self) -> &MeasureUnit {
        &self.units[COUNT]
    }

    pub fn percent(&self) -> &MeasureUnit {
        &self.units[PERCENT]
    }

    /// US volume, stored in fluid ounces
    pub fn customary_volume(&self) -> &MeasureUnit {
        &self.units[CUSTOMARY_VOLUME]
    }

    /// US weight, stored in ounces
    pub fn customary_weight(&self) -> &MeasureUnit {
        &self.units[CUSTOMARY_WEIGHT]
    }

    /// Millilitres spelled in the given language ("en" or "ru")
    pub fn metric_volume(&self, language: &str) -> Option<&MeasureUnit> {
        match language {
            "en" => Some(&self.units[METRIC_VOLUME_ENG]),
            "ru" => Some(&self.units[METRIC_VOLUME_RUS]),
            _ => None,
        }
    }

    /// Grams spelled in the given language ("en" or "ru")
    pub fn metric_weight(&self, language: &str) -> Option<&MeasureUnit> {
        match language {
            "en" => Some(&self.units[METRIC_WEIGHT_ENG]),
            "ru" => Some(&self.units[METRIC_WEIGHT_RUS]),
            _ => None,
        }
    }

    /// First unit that recognizes `symbol` as a whole word
    pub fn by_symbol(&'static self, symbol: &str) -> Option<&'static MeasureUnit> {
        let symbol = symbol.trim();
        self.units
            .iter()
            .find(|unit| matches!(unit.try_get_measure(Fractional::ONE, symbol), Some((_, n)) if n == symbol.len()))
    }

    /// Resolve the unit text following a value
    ///
    /// Units of the requested locale (and culture-neutral ones) are tried first,
    /// then every unit. Without a match the value becomes a bare count and no
    /// unit text is consumed. The consumed length includes leading whitespace.
    pub fn get_measure(&'static self, value: Fractional, text: &str, locale: Option<&Locale>) -> (Measure, usize) {
        let unit_text = text.trim_start();
        let trimmed = text.len() - unit_text.len();

        if !unit_text.is_empty() {
            let any_locale = locale.map_or(true, Locale::is_invariant);
            if !any_locale {
                if let Some((measure, consumed)) = self.resolve(value, unit_text, locale) {
                    return (measure, trimmed + consumed);
                }
                trace!(unit_text, locale = ?locale.map(Locale::tag), "no native unit, trying every locale");
            }
            if let Some((measure, consumed)) = self.resolve(value, unit_text, None) {
                return (measure, trimmed + consumed);
            }
            trace!(unit_text, "unit not recognized, taking a bare count");
        }

        (Measure::new(value, self.count()), 0)
    }

    /// Single pass over the catalog; `None` admits every unit
    fn resolve(&'static self, value: Fractional, text: &str, locale: Option<&Locale>) -> Option<(Measure, usize)> {
        self.units
            .iter()
            .filter(|unit| locale.map_or(true, |locale| speaks(unit.locale(), locale)))
            .find_map(|unit| unit.try_get_measure(value, text))
    }
}

/// Whether units of `unit_locale` are native for text in `locale`
fn speaks(unit_locale: &Locale, locale: &Locale) -> bool {
    unit_locale.is_invariant() || unit_locale.tag() == locale.tag() || unit_locale.language() == locale.language()
}

fn locale(tag: &str) -> &'static Locale {
    Locale::from_tag(tag).unwrap_or(Locale::invariant())
}
