//! US customary conversion tables
//!
//! Volumes are stored in fluid ounces, weights in ounces. Each conversion maps
//! a group of spellings to a factor relative to that base. Conversions with a
//! display range are the ones chosen when formatting; the rest are parse-only.

use pantry_core::Fractional;
use crate::parse::sort_symbols;

/// Spellings of one customary unit and its size in base units
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Longest first
    pub symbols: Vec<&'static str>,
    pub factor: Fractional,
    /// Display range over the base value, `[min, max)`
    pub min: f32,
    pub max: f32,
    pub single: &'static str,
    pub many: &'static str,
}

impl Conversion {
    /// The last two spellings double as singular and plural display forms
    fn new(symbols: &[&'static str], numerator: i32, denominator: i32) -> Self {
        let single = symbols.len().checked_sub(2).map_or("", |i| symbols[i]);
        let many = symbols.last().copied().unwrap_or(single);
        Conversion {
            symbols: sort_symbols(symbols),
            factor: Fractional::new(numerator, denominator),
            min: 0.0,
            max: 0.0,
            single,
            many,
        }
    }

    fn range(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    fn display(mut self, single: &'static str, many: &'static str) -> Self {
        self.single = single;
        self.many = many;
        self
    }

    pub fn applies(&self, base_value: f32) -> bool {
        base_value >= self.min && base_value < self.max
    }

    /// Display form for a value already expressed in this unit
    pub fn symbol_for(&self, converted: Fractional) -> &'static str {
        if converted > 1.0f32 {
            self.many
        } else {
            self.single
        }
    }
}

/// Pick the display conversion for a base value
///
/// The first applicable conversion giving a whole number wins; otherwise the
/// first applicable one is used with a fractional value.
pub fn choose(conversions: &[Conversion], value: Fractional) -> Option<(&Conversion, Fractional)> {
    let base_value = value.value().ok()?;
    let mut chosen = None;
    for conversion in conversions.iter().filter(|c| c.applies(base_value)) {
        let converted = value / conversion.factor;
        if converted.is_integer() {
            return Some((conversion, converted));
        }
        chosen.get_or_insert((conversion, converted));
    }
    chosen
}

pub fn volume_conversions() -> Vec<Conversion> {
    vec![
        Conversion::new(&["dr", "gt", "gtt", "drop", "drops"], 1, 576),
        Conversion::new(&["smi", "smdg", "smidgen", "smidgens"], 1, 256),
        Conversion::new(&["pn", "pinch", "pinches"], 1, 128),
        Conversion::new(&["ds", "dash", "dashes"], 1, 64),
        Conversion::new(&["ssp", "saltspoon", "saltspoons", "scruple", "scruples"], 1, 32),
        Conversion::new(&["csp", "coffeespoon", "coffeespoons"], 1, 16),
        Conversion::new(&["fl dr", "fluid dram", "fluid drams"], 1, 8),
        Conversion::new(
            &["t", "tsp", "tsps", "teasp", "teasps", "teaspn", "teaspns", "teaspoon", "teaspoons"],
            1, 6,
        )
        .range(0.0, 0.333334)
        .display("tsp", "tsps"),
        Conversion::new(&["dsp", "dssp", "dstspn", "dessertspoon", "dessertspoons"], 1, 3),
        Conversion::new(&["T", "tbsp", "tbsps", "tblsp", "tblsps", "tablespoon", "tablespoons"], 1, 2)
            .range(0.333334, 4.0)
            .display("tbsp", "tbsps"),
        Conversion::new(&["fl oz", "fl ozs", "fluid ounce", "fluid ounces"], 1, 1),
        Conversion::new(&["wgf", "glass", "glasses", "wineglass", "wineglasses"], 2, 1),
        Conversion::new(&["tcf", "gill", "teacup", "teacups"], 4, 1),
        Conversion::new(&["c", "C", "cup", "cups"], 8, 1)
            .range(4.0, 64.0),
        Conversion::new(&["pt", "pts", "pint", "pints"], 16, 1),
        Conversion::new(&["qt", "qts", "quart", "quarts"], 32, 1),
        Conversion::new(&["pot", "pottle", "pottles"], 64, 1),
        Conversion::new(&["gal", "gallon", "gallons"], 128, 1)
            .range(64.0, 12800.0)
            .display("gal", "gal"),
    ]
}

pub fn weight_conversions() -> Vec<Conversion> {
    vec![
        Conversion::new(&["oz", "ozs", "ounce", "ounces"], 1, 1)
            .range(0.0, 8.0)
            .display("oz", "ozs"),
        Conversion::new(&["lb", "lbs", "pound", "pounds"], 16, 1)
            .range(8.0, 1600.0)
            .display("lb", "lbs"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volume(value: Fractional) -> Option<(&'static str, Fractional)> {
        let conversions = volume_conversions();
        choose(&conversions, value).map(|(c, converted)| (c.symbol_for(converted), converted))
    }

    #[test]
    fn test_defaults() {
        let conversions = volume_conversions();
        assert_eq!(conversions[13].single, "cup");
        assert_eq!(conversions[13].many, "cups");
        assert_eq!(conversions[13].symbols, vec!["cups", "cup", "c", "C"]);
        assert_eq!(conversions[6].single, "fluid dram");
    }

    #[test]
    fn test_choose_integer_bucket() {
        assert_eq!(volume(Fractional::from(8)), Some(("cup", Fractional::from(1))));
        assert_eq!(volume(Fractional::from(1)), Some(("tbsps", Fractional::from(2))));
        assert_eq!(volume(Fractional::new(1, 3)), Some(("tsps", Fractional::from(2))));
    }

    #[test]
    fn test_choose_fractional_bucket() {
        assert_eq!(volume(Fractional::from(12)), Some(("cups", Fractional::new(3, 2))));
        assert_eq!(volume(Fractional::new(1, 12)), Some(("tsp", Fractional::new(1, 2))));
    }

    #[test]
    fn test_threshold_edges() {
        // [4, 64) belongs to cups, 64 starts gallons
        assert_eq!(volume(Fractional::from(4)), Some(("cup", Fractional::new(1, 2))));
        assert_eq!(volume(Fractional::new(7, 2)), Some(("tbsps", Fractional::from(7))));
        assert_eq!(volume(Fractional::from(64)), Some(("gal", Fractional::new(1, 2))));
        assert_eq!(volume(Fractional::from(63)), Some(("cups", Fractional::new(63, 8))));
        assert_eq!(volume(Fractional::from(12800)), None);
        assert_eq!(volume(Fractional::from(-1)), None);
    }

    #[test]
    fn test_weight() {
        let conversions = weight_conversions();
        let (c, converted) = choose(&conversions, Fractional::from(32)).unwrap();
        assert_eq!((c.symbol_for(converted), converted), ("lbs", Fractional::from(2)));
        let (c, converted) = choose(&conversions, Fractional::from(1)).unwrap();
        assert_eq!((c.symbol_for(converted), converted), ("oz", Fractional::from(1)));
    }
}
