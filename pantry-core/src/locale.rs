//! Locale capability - the numeric conventions of a culture
//!
//! Only what parsing and formatting need is modelled: separators, grouping,
//! sign characters, native digit glyphs and the local currency symbol.
//! Locales are static records, looked up by BCP 47 style tags.

use std::fmt;

use tracing::debug;

const ASCII_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];
const THAI_DIGITS: [char; 10] = ['๐', '๑', '๒', '๓', '๔', '๕', '๖', '๗', '๘', '๙'];

const NBSP: char = '\u{00A0}';
const NNBSP: char = '\u{202F}';

/// Numeric conventions of a culture
#[derive(Debug, PartialEq, Eq)]
pub struct Locale {
    tag: &'static str,
    /// Separator between integer and fraction digits
    pub decimal_separator: char,
    /// Separator between digit groups
    pub group_separator: char,
    /// Group sizes from the right; the last one repeats
    pub group_sizes: &'static [u8],
    pub positive_sign: char,
    pub negative_sign: char,
    pub native_digits: [char; 10],
    /// Local currency symbol
    pub currency_symbol: &'static str,
}

impl Locale {
    const fn new(tag: &'static str, decimal: char, group: char, currency_symbol: &'static str) -> Self {
        Locale {
            tag,
            decimal_separator: decimal,
            group_separator: group,
            group_sizes: &[3],
            positive_sign: '+',
            negative_sign: '-',
            native_digits: ASCII_DIGITS,
            currency_symbol,
        }
    }

    const fn digits(self, native_digits: [char; 10]) -> Self {
        Locale { native_digits, ..self }
    }

    const fn groups(self, group_sizes: &'static [u8]) -> Self {
        Locale { group_sizes, ..self }
    }

    const fn minus(self, negative_sign: char) -> Self {
        Locale { negative_sign, ..self }
    }

    /// The culture-neutral locale
    pub fn invariant() -> &'static Locale {
        &INVARIANT
    }

    /// Look up a locale by tag ("ru-RU", "en_us", "ru")
    ///
    /// An unknown region falls back to the first locale of the same language.
    pub fn from_tag(tag: &str) -> Option<&'static Locale> {
        let tag = tag.trim();
        if tag.is_empty() || tag.eq_ignore_ascii_case("iv") || tag.eq_ignore_ascii_case("invariant") {
            return Some(&INVARIANT);
        }
        let normalized: String = tag.chars().map(|c| if c == '_' { '-' } else { c }).collect();
        if let Some(locale) = LOCALES.iter().find(|l| l.tag.eq_ignore_ascii_case(&normalized)) {
            return Some(locale);
        }
        let language = normalized.split('-').next().unwrap_or_default();
        LOCALES.iter().find(|l| l.language().eq_ignore_ascii_case(language))
    }

    /// Locale configured for the process through `LC_ALL`, `LC_NUMERIC` or `LANG`
    pub fn from_env() -> &'static Locale {
        let configured = ["LC_ALL", "LC_NUMERIC", "LANG"]
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|value| !value.is_empty());
        let locale = configured.as_deref().map(Self::from_posix).unwrap_or(&INVARIANT);
        debug!(configured = ?configured, locale = %locale, "locale from environment");
        locale
    }

    /// Parse a POSIX locale name such as `ru_RU.UTF-8` or `sr_RS@latin`
    pub fn from_posix(name: &str) -> &'static Locale {
        let base = name.split(['.', '@']).next().unwrap_or_default();
        if base == "C" || base == "POSIX" {
            return &INVARIANT;
        }
        Self::from_tag(base).unwrap_or_else(|| {
            debug!(name, "unknown locale, using invariant");
            &INVARIANT
        })
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Two-letter language part of the tag; empty for the invariant locale
    pub fn language(&self) -> &'static str {
        match self.tag.split_once('-') {
            Some((language, _)) => language,
            None => self.tag,
        }
    }

    pub fn is_invariant(&self) -> bool {
        self.tag.is_empty()
    }

    /// Value of a digit character, accepting ASCII and native glyphs
    pub fn digit_value(&self, c: char) -> Option<u32> {
        if let Some(value) = c.to_digit(10) {
            return Some(value);
        }
        self.native_digits.iter().position(|&d| d == c).map(|i| i as u32)
    }

    /// All known locales, invariant excluded
    pub fn all() -> &'static [Locale] {
        LOCALES
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_invariant() {
            write!(f, "invariant")
        } else {
            write!(f, "{}", self.tag)
        }
    }
}

static INVARIANT: Locale = Locale::new("", '.', ',', "¤");

static LOCALES: &[Locale] = &[
    Locale::new("ru-RU", ',', NBSP, "₽"),
    Locale::new("en-US", '.', ',', "$"),
    Locale::new("fr-FR", ',', NNBSP, "€"),
    Locale::new("tr-TR", ',', '.', "₺"),
    Locale::new("ar-AE", '.', ',', "د.إ.\u{200F}").digits(ARABIC_INDIC_DIGITS),
    Locale::new("hy-AM", ',', NBSP, "֏"),
    Locale::new("en-AU", '.', ',', "$"),
    Locale::new("az-AZ", ',', '.', "₼"),
    Locale::new("bg-BG", ',', NBSP, "лв."),
    Locale::new("pt-BR", ',', '.', "R$"),
    Locale::new("be-BY", ',', NBSP, "Br"),
    Locale::new("en-CA", '.', ',', "$"),
    Locale::new("de-CH", '.', '\u{2019}', "CHF"),
    Locale::new("zh-CN", '.', ',', "¥"),
    Locale::new("cs-CZ", ',', NBSP, "Kč"),
    Locale::new("da-DK", ',', '.', "kr."),
    Locale::new("ar-EG", '\u{066B}', '\u{066C}', "ج.م.\u{200F}").digits(ARABIC_INDIC_DIGITS),
    Locale::new("en-GB", '.', ',', "£"),
    Locale::new("ka-GE", ',', NBSP, "₾"),
    Locale::new("zh-HK", '.', ',', "HK$"),
    Locale::new("hu-HU", ',', NBSP, "Ft"),
    Locale::new("id-ID", ',', '.', "Rp"),
    Locale::new("he-IL", '.', ',', "₪"),
    Locale::new("en-IN", '.', ',', "₹").groups(&[3, 2]),
    Locale::new("ja-JP", '.', ',', "￥"),
    Locale::new("ky-KG", ',', NBSP, "сом"),
    Locale::new("ko-KR", '.', ',', "₩"),
    Locale::new("kk-KZ", ',', NBSP, "₸"),
    Locale::new("ro-MD", ',', '.', "L"),
    Locale::new("es-MX", '.', ',', "$"),
    Locale::new("nb-NO", ',', NBSP, "kr").minus('\u{2212}'),
    Locale::new("en-NZ", '.', ',', "$"),
    Locale::new("pl-PL", ',', NBSP, "zł"),
    Locale::new("ar-QA", '\u{066B}', '\u{066C}', "ر.ق.\u{200F}").digits(ARABIC_INDIC_DIGITS),
    Locale::new("ro-RO", ',', '.', "RON"),
    Locale::new("sr-RS", ',', '.', "RSD"),
    Locale::new("sv-SE", ',', NBSP, "kr").minus('\u{2212}'),
    Locale::new("en-SG", '.', ',', "$"),
    Locale::new("th-TH", '.', ',', "฿").digits(THAI_DIGITS),
    Locale::new("tg-TJ", ',', NBSP, "сом"),
    Locale::new("tk-TM", ',', NBSP, "TMT"),
    Locale::new("uk-UA", ',', NBSP, "₴"),
    Locale::new("uz-UZ", ',', NBSP, "soʻm"),
    Locale::new("vi-VN", ',', '.', "₫"),
    Locale::new("en-ZA", ',', NBSP, "R"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        let ru = Locale::from_tag("ru-RU").unwrap();
        assert_eq!(ru.decimal_separator, ',');
        assert_eq!(ru.group_separator, '\u{00A0}');
        assert_eq!(Locale::from_tag("RU_ru").unwrap(), ru);
        assert_eq!(Locale::from_tag("ru").unwrap(), ru);
        assert_eq!(Locale::from_tag("en-XX").unwrap().tag(), "en-US");
        assert!(Locale::from_tag("xx-YY").is_none());
        assert!(Locale::from_tag("").unwrap().is_invariant());
    }

    #[test]
    fn test_language() {
        assert_eq!(Locale::from_tag("tr-TR").unwrap().language(), "tr");
        assert_eq!(Locale::invariant().language(), "");
        assert_eq!(Locale::invariant().to_string(), "invariant");
    }

    #[test]
    fn test_from_posix() {
        assert_eq!(Locale::from_posix("ru_RU.UTF-8").tag(), "ru-RU");
        assert_eq!(Locale::from_posix("sr_RS@latin").tag(), "sr-RS");
        assert!(Locale::from_posix("C").is_invariant());
        assert!(Locale::from_posix("POSIX").is_invariant());
    }

    #[test]
    fn test_digit_value() {
        let eg = Locale::from_tag("ar-EG").unwrap();
        assert_eq!(eg.digit_value('٧'), Some(7));
        assert_eq!(eg.digit_value('7'), Some(7));
        assert_eq!(eg.digit_value('x'), None);
    }

    #[test]
    fn test_unique_tags() {
        for (i, a) in LOCALES.iter().enumerate() {
            assert!(LOCALES[i + 1..].iter().all(|b| b.tag != a.tag), "duplicate {}", a.tag);
        }
    }
}
