//! Currency catalog - every currency Pantry reads and writes
//!
//! Order matters: unit names shared by several currencies ("$", "kr",
//! "CENTS") resolve to the first one listed, and exact parsing tries the
//! currencies in this order.

use std::sync::LazyLock;

use pantry_core::{Locale, PantryError};
use rust_decimal::Decimal;
use tracing::trace;

use crate::currency::SymbolPlacement::{After, Before};
use crate::{Currency, Money, SymbolPlacement};

/// Global currency registry
pub static CURRENCIES: LazyLock<CurrencyRegistry> = LazyLock::new(CurrencyRegistry::new);

const CENTS: &[&str] = &["CENT", "CENTS"];

/// Ordered catalog of every known currency; the first one is the default
pub struct CurrencyRegistry {
    currencies: Vec<Currency>,
}

impl CurrencyRegistry {
    fn new() -> Self {
        let mut registry = CurrencyRegistry { currencies: Vec::with_capacity(46) };
        registry.register_primary();
        registry.register_others();
        registry
    }

    fn register(&mut self, mut currency: Currency) {
        currency.index = self.currencies.len();
        self.currencies.push(currency);
    }

    fn define(name: &'static str, code: &'static str, tag: &str, placement: SymbolPlacement) -> Currency {
        let locale = Locale::from_tag(tag).unwrap_or(Locale::invariant());
        Currency::new(name, code, locale, placement)
    }

    /// The currencies recipes are most often priced in
    fn register_primary(&mut self) {
        self.register(
            Self::define("Russian ruble", "RUB", "ru-RU", After)
                .with_symbol("₽")
                .with_writing(" руб.")
                .with_units(&["РУБ", "Р", "₽", "РР", "RUB"], &["КОП", "К"]),
        );
        self.register(
            Self::define("United States dollar", "USD", "en-US", Before)
                .with_symbol("$")
                .with_fractional("¢")
                .with_units(
                    &["$", "D", "DO", "USD", "DOL", "DOLLAR", "DOLLARS"],
                    &["¢", "C", "CC", "CT", "CENT", "CENTS"],
                ),
        );
        self.register(
            Self::define("Euro", "EUR", "fr-FR", Before)
                .with_symbol("€")
                .with_fractional("¢")
                .with_units(&["€", "E", "EUR", "EURO", "EUROS"], &["¢", "C", "CC", "CT", "CENT", "CENTS"]),
        );
        self.register(
            Self::define("Turkish lira", "TRY", "tr-TR", Before)
                .with_units(&["₺", "TL", "L", "TRY"], &["KR", "K", "KURUŞ"]),
        );
    }

    fn register_others(&mut self) {
        self.register(
            Self::define("United Arab Emirates dirham", "AED", "ar-AE", After).with_units(
                &["د.إ.\u{200F}", "د.إ.", "د.إ", "DH", "DHS", "AED"],
                &["FILS", "fulūs", "fulus", "فلس"],
            ),
        );
        self.register(
            Self::define("Armenian dram", "AMD", "hy-AM", Before)
                .with_symbol("֏")
                .with_units(&["֏", "AMD"], &["LUMA", "լումա"]),
        );
        self.register(
            Self::define("Australian dollar", "AUD", "en-AU", Before)
                .with_symbol("$")
                .with_units(&["$", "A$", "AU$", "AUD", "DOLLAR", "DOLLARS"], CENTS),
        );
        self.register(
            Self::define("Azerbaijani manat", "AZN", "az-AZ", Before)
                .with_symbol("₼")
                .with_units(&["₼", "AZN"], &["gapik", "gapiks", "QƏPİK", "QEPIC"]),
        );
        self.register(
            Self::define("Bulgarian lev", "BGN", "bg-BG", After)
                .with_symbol("лв")
                .with_units(&["лв", "BGN", "lev", "leva"], &["СТОТИНКА", "STOTINKA", "stotinki"]),
        );
        self.register(
            Self::define("Brazilian real", "BRL", "pt-BR", Before)
                .with_symbol("R$")
                .with_units(&["R$", "BRL"], &["CENTAVO", "CENTAVOS"]),
        );
        self.register(
            Self::define("Belarusian ruble", "BYN", "be-BY", After)
                .with_symbol("Br")
                .with_units(&["Br", "BYN"], &["KAPEIKA", "KAPEYKA"]),
        );
        self.register(
            Self::define("Canadian dollar", "CAD", "en-CA", Before)
                .with_symbol("$")
                .with_units(&["$", "CA$", "CAD", "DOLLAR", "DOLLARS"], CENTS),
        );
        self.register(
            Self::define("Swiss franc", "CHF", "de-CH", Before)
                .with_symbol("CHF")
                .with_units(&["CHF", "Fr.", "SFr."], &["RAP", "CENTIME", "CENTIMES", "RP."]),
        );
        self.register(
            Self::define("Chinese yuan", "CNY", "zh-CN", Before)
                .with_symbol("¥")
                .with_units(&["¥", "RMB", "CNY"], &["JIAO", "FEN"]),
        );
        self.register(
            Self::define("Czech koruna", "CZK", "cs-CZ", After)
                .with_symbol("Kč")
                .with_units(&["Kč", "CZK"], &["HALÉŘ", "HALER"]),
        );
        self.register(
            Self::define("Danish krone", "DKK", "da-DK", After)
                .with_symbol("kr")
                .with_units(&["kr", "DKK"], &["ØRE", "ORE"]),
        );
        self.register(
            Self::define("Egyptian pound", "EGP", "ar-EG", Before).with_units(
                &["ج.م.\u{200F}", "ج.م.", "ج.م", "LE", "E£", "£E", "EGP"],
                &["PT", "PIASTRE", "PIASTRES", "piaster"],
            ),
        );
        self.register(
            Self::define("British pound", "GBP", "en-GB", Before)
                .with_symbol("£")
                .with_units(&["£", "GBP", "POUND", "POUNDS"], &["PENCE", "PENNY"]),
        );
        self.register(
            Self::define("Georgian lari", "GEL", "ka-GE", After)
                .with_symbol("₾")
                .with_units(&["₾", "GEL"], &["TETRI"]),
        );
        self.register(
            Self::define("Hong Kong dollar", "HKD", "zh-HK", Before)
                .with_symbol("HK$")
                .with_units(&["HK$", "HKD", "DOLLAR", "DOLLARS"], CENTS),
        );
        self.register(
            Self::define("Hungarian forint", "HUF", "hu-HU", After)
                .with_symbol("Ft")
                .with_units(&["Ft", "HUF"], &["FILLER"]),
        );
        self.register(
            Self::define("Indonesian rupiah", "IDR", "id-ID", Before)
                .with_symbol("Rp")
                .with_units(&["Rp", "IDR"], &["SEN"]),
        );
        self.register(
            Self::define("Israeli new shekel", "ILS", "he-IL", Before)
                .with_symbol("₪")
                .with_units(&["₪", "ILS", "NIS"], &["AGOROT", "AGORA"]),
        );
        self.register(
            Self::define("Indian rupee", "INR", "en-IN", Before)
                .with_symbol("₹")
                .with_units(&["₹", "INR", "Re", "Rs"], &["PAISE", "PAISA"]),
        );
        self.register(
            Self::define("Japanese yen", "JPY", "ja-JP", Before)
                .with_symbol("￥")
                .with_units(&["￥", "JPY"], &["SEN"]),
        );
        self.register(
            Self::define("Kyrgyzstani som", "KGS", "ky-KG", After)
                .with_symbol("сом")
                .with_units(&["сом", "KGS"], &["TYIYN", "TYIN"]),
        );
        self.register(
            Self::define("South Korean won", "KRW", "ko-KR", Before)
                .with_symbol("₩")
                .with_units(&["₩", "KRW"], &["JEON"]),
        );
        self.register(
            Self::define("Kazakhstani tenge", "KZT", "kk-KZ", After)
                .with_symbol("₸")
                .with_units(&["₸", "KZT"], &["TIYN"]),
        );
        self.register(
            Self::define("Moldovan leu", "MDL", "ro-MD", After)
                .with_symbol("L")
                .with_units(&["L", "MDL"], &["BAN", "BANI"]),
        );
        self.register(
            Self::define("Mexican peso", "MXN", "es-MX", Before)
                .with_symbol("$")
                .with_units(&["$", "MXN", "MX$"], &["CENTAVO", "CENTAVOS"]),
        );
        self.register(
            Self::define("Norwegian krone", "NOK", "nb-NO", After)
                .with_symbol("kr")
                .with_units(&["kr", "NOK", "kroner", "krone"], &["ØRE", "ORE"]),
        );
        self.register(
            Self::define("New Zealand dollar", "NZD", "en-NZ", Before)
                .with_symbol("$")
                .with_units(&["$", "NZ$", "NZD", "DOLLAR", "DOLLARS"], CENTS),
        );
        self.register(
            Self::define("Polish złoty", "PLN", "pl-PL", After)
                .with_symbol("zł")
                .with_units(&["zł", "PLN"], &["GROSZ", "GR"]),
        );
        self.register(
            Self::define("Qatari riyal", "QAR", "ar-QA", Before)
                .with_units(&["\u{FDFC}", "ر.ق\u{200E}", "ر.ق", "QAR", "QR"], &["DIRHAM", "DERHAM"]),
        );
        self.register(
            Self::define("Romanian leu", "RON", "ro-RO", After)
                .with_symbol("lei")
                .with_units(&["lei", "RON", "leu"], &["BAN", "BANI"]),
        );
        self.register(
            Self::define("Serbian dinar", "RSD", "sr-RS", After)
                .with_symbol("дин")
                .with_units(&["дин", "RSD"], &["PARA"]),
        );
        self.register(
            Self::define("Swedish krona", "SEK", "sv-SE", After)
                .with_symbol("kr")
                .with_units(&["kr", "SEK"], &["ÖRE", "ORE"]),
        );
        self.register(
            Self::define("Singapore dollar", "SGD", "en-SG", Before)
                .with_symbol("$")
                .with_units(&["$", "S$", "SGD", "DOLLAR", "DOLLARS"], CENTS),
        );
        self.register(
            Self::define("Thai baht", "THB", "th-TH", Before)
                .with_symbol("฿")
                .with_units(&["฿", "THB", "BAHT"], &["SATANG"]),
        );
        self.register(
            Self::define("Tajikistani somoni", "TJS", "tg-TJ", After)
                .with_symbol("сом")
                .with_units(&["сом", "TJS", "SM", "ЅМ"], &["DIRAM", "DIRAMS"]),
        );
        self.register(
            Self::define("Turkmenistan manat", "TMT", "tk-TM", After)
                .with_symbol("m")
                .with_units(&["m", "TMT"], &["TENNESI", "TENNE"]),
        );
        self.register(
            Self::define("Ukrainian hryvnia", "UAH", "uk-UA", Before)
                .with_symbol("₴")
                .with_units(&["₴", "UAH", "ГРН"], &["КОП", "КОПІЙКА", "KOPIIKA"]),
        );
        self.register(
            Self::define("Uzbekistan som", "UZS", "uz-UZ", After)
                .with_symbol("soʻm")
                .with_units(&["soʻm", "UZS", "сўм"], &["TIYIN", "TIYINS"]),
        );
        self.register(
            Self::define("Vietnamese dong", "VND", "vi-VN", After)
                .with_symbol("₫")
                .with_units(&["₫", "VND"], &["XU"]),
        );
        self.register(Self::define("Special drawing rights", "XDR", "", Before).with_units(&["SDR", "XDR"], &[]));
        self.register(
            Self::define("South African rand", "ZAR", "en-ZA", Before)
                .with_symbol("R")
                .with_units(&["R", "ZAR", "RAND"], CENTS),
        );
    }

    /// All currencies in resolution order
    pub fn all(&self) -> &[Currency] {
        &self.currencies
    }

    /// The ruble
    pub fn default_currency(&self) -> &Currency {
        &self.currencies[0]
    }

    /// Currency with the given ISO code, ignoring case
    pub fn find_code(&self, code: &str) -> Option<&Currency> {
        let code = code.trim();
        self.currencies.iter().find(|c| c.code().eq_ignore_ascii_case(code))
    }

    /// Currency with the given ISO code; the default for unknown codes
    pub fn from_code(&self, code: &str) -> &Currency {
        self.find_code(code).unwrap_or_else(|| self.default_currency())
    }

    /// Currency of a locale: same tag first, then same language, else the default
    pub fn from_locale(&self, locale: &Locale) -> &Currency {
        if locale.is_invariant() {
            return self.default_currency();
        }
        self.currencies
            .iter()
            .find(|c| c.locale().tag() == locale.tag())
            .or_else(|| self.currencies.iter().find(|c| c.locale().language() == locale.language()))
            .unwrap_or_else(|| self.default_currency())
    }

    /// Money for a sum followed by a unit name
    ///
    /// Trailing periods are ignored ("руб."). The first currency naming the
    /// unit wins; a sub unit divides the sum by 100. An unknown or missing
    /// unit leaves the sum in the default currency.
    pub fn get_money(&'static self, sum: Decimal, unit: &str) -> Money {
        let unit = unit.trim_matches('.');
        if !unit.is_empty() {
            let found = self
                .currencies
                .iter()
                .find(|c| c.is_main_unit(unit) || c.is_sub_unit(unit));
            if let Some(currency) = found {
                return Money::new(currency.convert(sum, unit), currency);
            }
            trace!(unit, "unit names no currency, using the default");
        }
        Money::new(sum, self.default_currency())
    }

    /// Try every currency in order and take the first that reads the text
    pub fn try_parse_money_exact(&'static self, text: &str) -> Option<Money> {
        self.currencies.iter().find_map(|currency| currency.try_parse_money(text))
    }

    pub fn parse_money_exact(&'static self, text: &str) -> Result<Money, PantryError> {
        self.try_parse_money_exact(text).ok_or_else(|| PantryError::format("money", text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_catalog() {
        let codes: Vec<_> = CURRENCIES.all().iter().map(Currency::code).collect();
        assert_eq!(codes.len(), 46);
        assert_eq!(&codes[..4], &["RUB", "USD", "EUR", "TRY"]);
        assert_eq!(codes.last(), Some(&"ZAR"));
        assert!(CURRENCIES.all().iter().enumerate().all(|(i, c)| c.index == i));
        assert!(CURRENCIES.all().iter().filter(|c| c.code() != "XDR").all(|c| !c.locale().is_invariant()));
    }

    #[test]
    fn test_from_code() {
        assert_eq!(CURRENCIES.from_code("usd").code(), "USD");
        assert_eq!(CURRENCIES.from_code("").code(), "RUB");
        assert_eq!(CURRENCIES.from_code("XYZ").code(), "RUB");
        assert!(CURRENCIES.find_code("XYZ").is_none());
    }

    #[test]
    fn test_from_locale() {
        let locale = |tag| Locale::from_tag(tag).unwrap();
        assert_eq!(CURRENCIES.from_locale(locale("tr-TR")).code(), "TRY");
        assert_eq!(CURRENCIES.from_locale(locale("en-GB")).code(), "GBP");
        assert_eq!(CURRENCIES.from_locale(locale("de")).code(), "CHF");
        assert_eq!(CURRENCIES.from_locale(Locale::invariant()).code(), "RUB");
    }

    #[rstest]
    #[case("руб.", "RUB", dec!(10))]
    #[case("коп", "RUB", dec!(0.10))]
    #[case("cents", "USD", dec!(0.10))]
    #[case("$", "USD", dec!(10))]
    #[case("TL", "TRY", dec!(10))]
    #[case("kr", "TRY", dec!(0.10))]
    #[case("m", "TMT", dec!(10))]
    #[case("R", "ZAR", dec!(10))]
    #[case("ج.م.", "EGP", dec!(10))]
    #[case("bananas", "RUB", dec!(10))]
    #[case("", "RUB", dec!(10))]
    fn test_get_money(#[case] unit: &str, #[case] code: &str, #[case] sum: Decimal) {
        let money = CURRENCIES.get_money(dec!(10), unit);
        assert_eq!(money.currency().map(Currency::code), Some(code), "{unit:?}");
        assert_eq!(money.sum(), sum, "{unit:?}");
    }

    #[rstest]
    #[case("3 руб 15 коп", "RUB", dec!(3.15))]
    #[case("3 руб 15", "RUB", dec!(3.15))]
    #[case("3\u{2009}744\u{2009}₽", "RUB", dec!(3744))]
    #[case("32 360", "RUB", dec!(32360))]
    #[case("₺1", "TRY", dec!(1))]
    #[case("42000 tl", "TRY", dec!(42000))]
    #[case("₺42.000", "TRY", dec!(42000))]
    #[case("5,50 ₽", "RUB", dec!(5.50))]
    #[case("5.50 A$", "AUD", dec!(5.50))]
    #[case("5٫50 ج.م.", "EGP", dec!(5.50))]
    #[case("1000 m", "TMT", dec!(1000))]
    #[case("1000 R", "ZAR", dec!(1000))]
    #[case("5,50 R", "ZAR", dec!(5.50))]
    #[case("10 USD", "USD", dec!(10))]
    fn test_parse_money_exact(#[case] text: &str, #[case] code: &str, #[case] sum: Decimal) {
        let money = CURRENCIES.parse_money_exact(text).unwrap();
        assert_eq!(money.currency().map(Currency::code), Some(code), "{text:?}");
        assert_eq!(money.sum(), sum, "{text:?}");
    }

    #[rstest]
    #[case("Abracadabra")]
    #[case("")]
    #[case("3 руб 15 cents")]
    fn test_parse_money_exact_rejects(#[case] text: &str) {
        assert!(CURRENCIES.try_parse_money_exact(text).is_none(), "{text:?}");
    }
}
