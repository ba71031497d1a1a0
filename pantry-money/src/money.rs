//! Money - a decimal sum tagged with its currency

use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use pantry_core::{Locale, PantryError};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Currency, CURRENCIES};

/// A sum of money
///
/// The default value is "nothing": no currency at all. Nothing is the
/// identity of addition, so prices can be folded starting from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Money {
    sum: Decimal,
    currency: Option<&'static Currency>,
}

impl Money {
    pub fn new(sum: Decimal, currency: &'static Currency) -> Self {
        Money { sum, currency: Some(currency) }
    }

    pub fn nothing() -> Self {
        Money::default()
    }

    /// A sum in the default currency
    pub fn from_sum(sum: Decimal) -> Self {
        Money::new(sum, CURRENCIES.default_currency())
    }

    pub fn sum(&self) -> Decimal {
        self.sum
    }

    pub fn currency(&self) -> Option<&'static Currency> {
        self.currency
    }

    pub fn is_nothing(&self) -> bool {
        self.currency.is_none()
    }

    // ========== Parsing ==========

    /// Parse a money notation
    ///
    /// With a locale the text is read as that locale's currency. Without
    /// one every currency is tried in catalog order.
    pub fn parse(text: &str, locale: Option<&Locale>) -> Result<Self, PantryError> {
        match locale {
            Some(locale) => CURRENCIES.from_locale(locale).parse_money(text),
            None => CURRENCIES.parse_money_exact(text),
        }
    }

    pub fn try_parse(text: &str, locale: Option<&Locale>) -> Option<Self> {
        match locale {
            Some(locale) => CURRENCIES.from_locale(locale).try_parse_money(text),
            None => CURRENCIES.try_parse_money_exact(text),
        }
    }

    // ========== Formatting ==========

    /// The sum written the way its currency writes it; empty for nothing
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// Write into `dest`, returning the bytes written
    ///
    /// Nothing writes zero bytes and always succeeds.
    pub fn try_format(&self, dest: &mut [u8]) -> Option<usize> {
        match self.currency {
            Some(currency) => currency.try_format_sum(self.sum, dest),
            None => Some(0),
        }
    }

    // ========== Arithmetic ==========

    pub fn add(&self, other: &Money) -> Result<Money, PantryError> {
        match (self.currency, other.currency) {
            (None, _) => Ok(*other),
            (_, None) => Ok(*self),
            (Some(left), Some(right)) if left == right => Ok(Money::new(self.sum + other.sum, left)),
            (Some(left), Some(right)) => Err(PantryError::currency_mismatch(left, right)),
        }
    }

    pub fn subtract(&self, other: &Money) -> Result<Money, PantryError> {
        match (self.currency, other.currency) {
            (_, None) => Ok(*self),
            (None, Some(right)) => Ok(Money::new(-other.sum, right)),
            (Some(left), Some(right)) if left == right => Ok(Money::new(self.sum - other.sum, left)),
            (Some(left), Some(right)) => Err(PantryError::currency_mismatch(left, right)),
        }
    }

    pub fn negate(&self) -> Money {
        Money { sum: -self.sum, currency: self.currency }
    }

    /// Total of several sums in a single currency
    ///
    /// Nothing is skipped. An input with no sums at all totals to nothing.
    pub fn total<'a, I>(items: I) -> Result<Money, PantryError>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        items.into_iter().try_fold(Money::nothing(), |acc, item| acc.add(item))
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        self.negate()
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.currency, other.currency) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(left), Some(right)) => left.index.cmp(&right.index).then_with(|| self.sum.cmp(&other.sum)),
        }
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.currency {
            Some(currency) => currency.write_sum(f, self.sum),
            None => Ok(()),
        }
    }
}

impl FromStr for Money {
    type Err = PantryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CURRENCIES.parse_money_exact(s)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        if text.trim().is_empty() {
            return Ok(Money::nothing());
        }
        Money::from_str(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_core::codes;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn money(sum: Decimal, code: &str) -> Money {
        Money::new(sum, CURRENCIES.from_code(code))
    }

    fn code(money: &Money) -> Option<&'static str> {
        money.currency().map(Currency::code)
    }

    #[test]
    fn test_nothing() {
        let nothing = Money::nothing();
        assert!(nothing.is_nothing());
        assert_eq!(nothing, Money::default());
        assert_eq!(nothing.to_string(), "");
        assert_eq!(nothing.try_format(&mut []), Some(0));
        assert!(!Money::from_sum(dec!(1)).is_nothing());
        assert_eq!(code(&Money::from_sum(dec!(1))), Some("RUB"));
    }

    #[test]
    fn test_display() {
        assert_eq!(money(dec!(1), "TRY").to_string(), "₺1");
        assert_eq!(money(dec!(42000), "TRY").to_string(), "₺42.000");
        assert_eq!(money(dec!(1000), "RUB").to_string(), "1\u{00A0}000 руб.");
        assert_eq!(money(dec!(1000), "RUB").format(), "1\u{00A0}000 руб.");
    }

    #[test]
    fn test_try_format() {
        let lira = money(dec!(42000), "TRY");
        let mut buf = [0u8; 16];
        let n = lira.try_format(&mut buf).unwrap();
        assert_eq!(std::str::from_utf8(&buf[..n]).unwrap(), "₺42.000");
        assert_eq!(lira.try_format(&mut buf[..n - 1]), None);
    }

    #[rstest]
    #[case("1000 руб.    ")]
    #[case("    1000 руб.")]
    #[case("    1000 руб.    ")]
    fn test_parse_padded(#[case] text: &str) {
        let rub = Money::parse(text, None).unwrap();
        assert_eq!(rub, money(dec!(1000), "RUB"));
        assert_eq!(rub.to_string(), "1\u{00A0}000 руб.");
    }

    #[rstest]
    #[case("₺1", dec!(1), "TRY")]
    #[case("42000 tl", dec!(42000), "TRY")]
    #[case("₺42.000", dec!(42000), "TRY")]
    #[case("3\u{2009}744\u{2009}₽", dec!(3744), "RUB")]
    #[case("10 AED", dec!(10), "AED")]
    #[case("1000 د.إ", dec!(1000), "AED")]
    #[case("5.50 د.إ", dec!(5.50), "AED")]
    #[case("10 AMD", dec!(10), "AMD")]
    #[case("1000 ֏", dec!(1000), "AMD")]
    #[case("5,50 ֏", dec!(5.50), "AMD")]
    #[case("10 AUD", dec!(10), "AUD")]
    #[case("1000 AU$", dec!(1000), "AUD")]
    #[case("5.50 A$", dec!(5.50), "AUD")]
    #[case("10 AZN", dec!(10), "AZN")]
    #[case("₼1000", dec!(1000), "AZN")]
    #[case("₼5,50", dec!(5.50), "AZN")]
    #[case("10 BGN", dec!(10), "BGN")]
    #[case("1000 лв", dec!(1000), "BGN")]
    #[case("5,50 лв", dec!(5.50), "BGN")]
    #[case("10 BRL", dec!(10), "BRL")]
    #[case("1000 R$", dec!(1000), "BRL")]
    #[case("5,50 R$", dec!(5.50), "BRL")]
    #[case("10 BYN", dec!(10), "BYN")]
    #[case("1000 Br", dec!(1000), "BYN")]
    #[case("5,50 Br", dec!(5.50), "BYN")]
    #[case("10 CAD", dec!(10), "CAD")]
    #[case("1000 CA$", dec!(1000), "CAD")]
    #[case("5.50 CA$", dec!(5.50), "CAD")]
    #[case("10 CHF", dec!(10), "CHF")]
    #[case("1000 CHF", dec!(1000), "CHF")]
    #[case("5.50 CHF", dec!(5.50), "CHF")]
    #[case("10 CNY", dec!(10), "CNY")]
    #[case("1000 ¥", dec!(1000), "CNY")]
    #[case("5.50 ¥", dec!(5.50), "CNY")]
    #[case("10 CZK", dec!(10), "CZK")]
    #[case("1000 Kč", dec!(1000), "CZK")]
    #[case("5,50 Kč", dec!(5.50), "CZK")]
    #[case("10 DKK", dec!(10), "DKK")]
    #[case("10 EGP", dec!(10), "EGP")]
    #[case("1000 ج.م.", dec!(1000), "EGP")]
    #[case("5٫50 ج.م.", dec!(5.50), "EGP")]
    #[case("10 EUR", dec!(10), "EUR")]
    #[case("1000 €", dec!(1000), "EUR")]
    #[case("5,50 €", dec!(5.50), "EUR")]
    #[case("10 GBP", dec!(10), "GBP")]
    #[case("£1000", dec!(1000), "GBP")]
    #[case("£5.50", dec!(5.50), "GBP")]
    #[case("10 GEL", dec!(10), "GEL")]
    #[case("1000 ₾", dec!(1000), "GEL")]
    #[case("5,50 ₾", dec!(5.50), "GEL")]
    #[case("10 HKD", dec!(10), "HKD")]
    #[case("1000 HK$", dec!(1000), "HKD")]
    #[case("5.50 HK$", dec!(5.50), "HKD")]
    #[case("10 HUF", dec!(10), "HUF")]
    #[case("1000 Ft", dec!(1000), "HUF")]
    #[case("5,50 Ft", dec!(5.50), "HUF")]
    #[case("10 IDR", dec!(10), "IDR")]
    #[case("1000 Rp", dec!(1000), "IDR")]
    #[case("5,50 Rp", dec!(5.50), "IDR")]
    #[case("10 ILS", dec!(10), "ILS")]
    #[case("1000 ₪", dec!(1000), "ILS")]
    #[case("5.50 ₪", dec!(5.50), "ILS")]
    #[case("10 INR", dec!(10), "INR")]
    #[case("1000 ₹", dec!(1000), "INR")]
    #[case("5.50 ₹", dec!(5.50), "INR")]
    #[case("10 JPY", dec!(10), "JPY")]
    #[case("￥1000", dec!(1000), "JPY")]
    #[case("￥5.50", dec!(5.50), "JPY")]
    #[case("10 KGS", dec!(10), "KGS")]
    #[case("1000 сом", dec!(1000), "KGS")]
    #[case("5,50 сом", dec!(5.50), "KGS")]
    #[case("10 KRW", dec!(10), "KRW")]
    #[case("1000 ₩", dec!(1000), "KRW")]
    #[case("5.50 ₩", dec!(5.50), "KRW")]
    #[case("10 KZT", dec!(10), "KZT")]
    #[case("1000 ₸", dec!(1000), "KZT")]
    #[case("5,50 ₸", dec!(5.50), "KZT")]
    #[case("10 MDL", dec!(10), "MDL")]
    #[case("10 MXN", dec!(10), "MXN")]
    #[case("1000 MX$", dec!(1000), "MXN")]
    #[case("5.50 MX$", dec!(5.50), "MXN")]
    #[case("10 NOK", dec!(10), "NOK")]
    #[case("10 NZD", dec!(10), "NZD")]
    #[case("1000 NZ$", dec!(1000), "NZD")]
    #[case("5.50 NZ$", dec!(5.50), "NZD")]
    #[case("10 PLN", dec!(10), "PLN")]
    #[case("1000 zł", dec!(1000), "PLN")]
    #[case("5,50 zł", dec!(5.50), "PLN")]
    #[case("10 QAR", dec!(10), "QAR")]
    #[case("1000 ر.ق", dec!(1000), "QAR")]
    #[case("5٫50 ر.ق", dec!(5.50), "QAR")]
    #[case("10 RUB", dec!(10), "RUB")]
    #[case("1000 ₽", dec!(1000), "RUB")]
    #[case("5,50 ₽", dec!(5.50), "RUB")]
    #[case("10 RON", dec!(10), "RON")]
    #[case("1000 lei", dec!(1000), "RON")]
    #[case("5,50 lei", dec!(5.50), "RON")]
    #[case("10 RSD", dec!(10), "RSD")]
    #[case("1000 дин", dec!(1000), "RSD")]
    #[case("5,50 дин", dec!(5.50), "RSD")]
    #[case("10 SEK", dec!(10), "SEK")]
    #[case("10 SGD", dec!(10), "SGD")]
    #[case("1000 S$", dec!(1000), "SGD")]
    #[case("5.50 S$", dec!(5.50), "SGD")]
    #[case("10 THB", dec!(10), "THB")]
    #[case("1000 ฿", dec!(1000), "THB")]
    #[case("5.50 ฿", dec!(5.50), "THB")]
    #[case("10 TJS", dec!(10), "TJS")]
    #[case("1000 ЅМ", dec!(1000), "TJS")]
    #[case("10 TMT", dec!(10), "TMT")]
    #[case("1000 m", dec!(1000), "TMT")]
    #[case("5,50 m", dec!(5.50), "TMT")]
    #[case("10 TRY", dec!(10), "TRY")]
    #[case("1000 ₺", dec!(1000), "TRY")]
    #[case("5,50 ₺", dec!(5.50), "TRY")]
    #[case("10 UAH", dec!(10), "UAH")]
    #[case("1000 ₴", dec!(1000), "UAH")]
    #[case("5,50 ₴", dec!(5.50), "UAH")]
    #[case("10 USD", dec!(10), "USD")]
    #[case("1000 $", dec!(1000), "USD")]
    #[case("5.50 $", dec!(5.50), "USD")]
    #[case("10 UZS", dec!(10), "UZS")]
    #[case("1000 сўм", dec!(1000), "UZS")]
    #[case("5,50 сўм", dec!(5.50), "UZS")]
    #[case("10 VND", dec!(10), "VND")]
    #[case("1000 ₫", dec!(1000), "VND")]
    #[case("5,50 ₫", dec!(5.50), "VND")]
    #[case("10 XDR", dec!(10), "XDR")]
    #[case("1000 SDR", dec!(1000), "XDR")]
    #[case("5.50 SDR", dec!(5.50), "XDR")]
    #[case("10 ZAR", dec!(10), "ZAR")]
    #[case("1000 R", dec!(1000), "ZAR")]
    #[case("5,50 R", dec!(5.50), "ZAR")]
    fn test_parse_exact(#[case] text: &str, #[case] sum: Decimal, #[case] expected: &str) {
        let parsed: Money = text.parse().unwrap();
        assert_eq!(parsed.sum(), sum, "{text:?}");
        assert_eq!(code(&parsed), Some(expected), "{text:?}");
    }

    // Shared names go to the first currency listed: "kr" is the kuruş,
    // "L" the lira and "сом" the Kyrgyz som. DKK, NOK, SEK, MDL and TJS
    // need their codes.
    #[rstest]
    #[case("1000 kr", dec!(10), "TRY")]
    #[case("5,50 kr", dec!(0.055), "TRY")]
    #[case("1000 L", dec!(1000), "TRY")]
    #[case("5,50 L", dec!(5.50), "TRY")]
    #[case("5,50 сом.", dec!(5.50), "KGS")]
    fn test_parse_exact_shared_units(#[case] text: &str, #[case] sum: Decimal, #[case] expected: &str) {
        let parsed: Money = text.parse().unwrap();
        assert_eq!(parsed.sum(), sum, "{text:?}");
        assert_eq!(code(&parsed), Some(expected), "{text:?}");
    }

    #[rstest]
    fn test_round_trip(
        #[values("RUB", "USD", "EUR", "TRY", "GBP", "UAH")] currency: &str,
        #[values(dec!(1), dec!(1000), dec!(5.5), dec!(1234567.89), dec!(-3))] sum: Decimal,
    ) {
        let price = money(sum, currency);
        let text = price.to_string();
        assert_eq!(text.parse::<Money>().unwrap(), price, "{text:?}");
        assert_eq!(Money::parse(&text, Some(price.currency().unwrap().locale())).unwrap(), price, "{text:?}");
    }

    #[test]
    fn test_parse_with_locale() {
        let tr = Locale::from_tag("tr-TR").unwrap();
        assert_eq!(Money::parse("42.000", Some(tr)).unwrap(), money(dec!(42000), "TRY"));
        let ru = Locale::from_tag("ru-RU").unwrap();
        assert_eq!(Money::try_parse("3 руб 15", Some(ru)), Some(money(dec!(3.15), "RUB")));
        assert_eq!(Money::try_parse("10 USD", Some(ru)), None);
    }

    #[test]
    fn test_parse_rejects() {
        let err = Money::parse("Abracadabra", None).unwrap_err();
        assert_eq!(err.code(), codes::FORMAT_ERROR);
        assert!(Money::try_parse("", None).is_none());
    }

    #[test]
    fn test_add_subtract() {
        let rub = money(dec!(3), "RUB");
        let kop = money(dec!(0.15), "RUB");
        assert_eq!(rub.add(&kop).unwrap(), money(dec!(3.15), "RUB"));
        assert_eq!(rub.subtract(&kop).unwrap(), money(dec!(2.85), "RUB"));
        assert_eq!(Money::nothing().add(&rub).unwrap(), rub);
        assert_eq!(rub.add(&Money::nothing()).unwrap(), rub);
        assert_eq!(rub.subtract(&Money::nothing()).unwrap(), rub);
        assert_eq!(Money::nothing().subtract(&rub).unwrap(), money(dec!(-3), "RUB"));

        let err = rub.add(&money(dec!(1), "USD")).unwrap_err();
        assert_eq!(err.code(), codes::CURRENCY_MISMATCH);
        assert!(rub.subtract(&money(dec!(1), "USD")).is_err());
    }

    #[test]
    fn test_negate() {
        assert_eq!(-money(dec!(5), "EUR"), money(dec!(-5), "EUR"));
        assert_eq!(money(dec!(-5), "EUR").negate(), money(dec!(5), "EUR"));
        assert!((-Money::nothing()).is_nothing());
    }

    #[test]
    fn test_ordering() {
        let mut prices = vec![
            money(dec!(5), "USD"),
            money(dec!(10), "RUB"),
            Money::nothing(),
            money(dec!(1), "RUB"),
        ];
        prices.sort();
        assert_eq!(
            prices,
            vec![Money::nothing(), money(dec!(1), "RUB"), money(dec!(10), "RUB"), money(dec!(5), "USD")]
        );
        assert_eq!(money(dec!(5.50), "USD"), money(dec!(5.5), "USD"));
    }

    #[test]
    fn test_total() {
        let prices = [money(dec!(1.25), "EUR"), Money::nothing(), money(dec!(2), "EUR")];
        assert_eq!(Money::total(&prices).unwrap(), money(dec!(3.25), "EUR"));
        assert!(Money::total(&[] as &[Money]).unwrap().is_nothing());
        assert!(Money::total(&[money(dec!(1), "EUR"), money(dec!(1), "USD")]).is_err());
    }

    #[test]
    fn test_serde() {
        let rub = money(dec!(1000), "RUB");
        let json = serde_json::to_string(&rub).unwrap();
        assert_eq!(json, "\"1\u{00A0}000 руб.\"");
        assert_eq!(serde_json::from_str::<Money>(&json).unwrap(), rub);
        assert_eq!(serde_json::to_string(&Money::nothing()).unwrap(), "\"\"");
        assert!(serde_json::from_str::<Money>("\"\"").unwrap().is_nothing());
        assert!(serde_json::from_str::<Money>("\"Abracadabra\"").is_err());
    }
}
