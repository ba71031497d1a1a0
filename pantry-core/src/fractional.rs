//! Fractional - exact fractions as written in recipes
//!
//! A `Fractional` is an `i32` numerator over a positive `i32` denominator,
//! always stored in lowest terms. The non-finite sentinel (`Fractional::NAN`)
//! has a zero denominator; it is what division by zero, overflow and failed
//! conversions produce.
//!
//! Accepted notations: "3", "-2", "1 1/2", "1/2", "1¹⁄₂", "¹⁄₂", "1½", "⅓",
//! and decimal numbers using the locale's decimal separator ("1.5", "1,5").

use std::cmp::Ordering;
use std::fmt::{self, Write};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::numfmt::{self, NumericFormat};
use crate::{scan, Locale, PantryError};

const VIRGULE: char = '/';
const SOLIDUS: char = '⁄';
const BACKSLASH: char = '\\';

#[cfg(feature = "food-writing")]
const SIGNS: &[char] = &['+', '-', '&', '_'];
#[cfg(not(feature = "food-writing"))]
const SIGNS: &[char] = &['+', '-', '⁺', '⁻', '₊', '₋'];

/// Skip lone punctuation inside a fraction ("5 3/4-inch", "1 & 1/2")
const FOOD_WRITING: bool = cfg!(feature = "food-writing");

const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
const SUP_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
const SUB_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

const VULGARS: [(char, i32, i32); 19] = [
    ('¼', 1, 4), ('½', 1, 2), ('¾', 3, 4),
    ('⅐', 1, 7), ('⅑', 1, 9), ('⅒', 1, 10),
    ('⅓', 1, 3), ('⅔', 2, 3),
    ('⅕', 1, 5), ('⅖', 2, 5), ('⅗', 3, 5), ('⅘', 4, 5),
    ('⅙', 1, 6), ('⅚', 5, 6),
    ('⅛', 1, 8), ('⅜', 3, 8), ('⅝', 5, 8), ('⅞', 7, 8),
    ('↉', 0, 3),
];

/// Tolerance of the float to fraction approximation
const ACCURACY: f32 = 0.01;
const MAX_EXPANSION: usize = 32;

/// An exact fraction in lowest terms
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fractional {
    numerator: i32,
    denominator: i32,
}

impl Fractional {
    pub const NAN: Fractional = Fractional { numerator: 0, denominator: 0 };
    pub const ZERO: Fractional = Fractional { numerator: 0, denominator: 1 };
    pub const ONE: Fractional = Fractional { numerator: 1, denominator: 1 };

    /// Build a fraction; a zero denominator yields `NAN`
    pub fn new(numerator: i32, denominator: i32) -> Self {
        Self::reduce(numerator as i64, denominator as i64)
    }

    /// Reduce to lowest terms with a positive denominator
    fn reduce(numerator: i64, denominator: i64) -> Self {
        if denominator == 0 {
            return Self::NAN;
        }
        let (mut n, mut d) = if denominator < 0 {
            (numerator.wrapping_neg(), denominator.wrapping_neg())
        } else {
            (numerator, denominator)
        };
        if d < 0 {
            return Self::NAN;
        }
        let divisor = gcd(n.unsigned_abs(), d as u64) as i64;
        if divisor > 1 {
            n /= divisor;
            d /= divisor;
        }
        match (i32::try_from(n), i32::try_from(d)) {
            (Ok(numerator), Ok(denominator)) => Fractional { numerator, denominator },
            _ => Self::NAN,
        }
    }

    /// Approximate a float by continued fraction expansion
    ///
    /// Stops once the approximation is within 0.01 of `value`.
    pub fn from_f32(value: f32) -> Self {
        if !value.is_finite() {
            return Self::NAN;
        }
        let sign: i64 = if value >= 0.0 { 1 } else { -1 };
        let number = value.abs();

        if number.fract() == 0.0 {
            return if number <= i32::MAX as f32 {
                Self::reduce(number as i64 * sign, 1)
            } else {
                Self::NAN
            };
        }

        let mut numerator = 0.0f32;
        let mut denominator = 1.0f32;
        let mut previous = 0.0f32;
        let mut z = number;
        for _ in 0..MAX_EXPANSION {
            z = 1.0 / (z - z.round_ties_even());
            let scratch = denominator;
            denominator = denominator * z.round_ties_even() + previous;
            previous = scratch;
            numerator = (number * denominator + 0.5 - ACCURACY).round_ties_even();

            if (number - numerator / denominator).abs() <= ACCURACY || z.fract() == 0.0 {
                break;
            }
        }

        let limit = i32::MAX as f32;
        if !denominator.is_finite() || denominator.abs() > limit || numerator.abs() > limit {
            return Self::NAN;
        }
        Self::reduce(numerator as i64 * sign, denominator as i64)
    }

    pub fn numerator(&self) -> i32 {
        self.numerator
    }

    pub fn denominator(&self) -> i32 {
        self.denominator
    }

    pub fn is_nan(&self) -> bool {
        self.denominator == 0
    }

    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// Floating approximation; the sentinel has none
    pub fn value(&self) -> Result<f32, PantryError> {
        if self.is_nan() {
            return Err(PantryError::NotFinite);
        }
        Ok((self.numerator as f64 / self.denominator as f64) as f32)
    }

    fn as_f64(&self) -> Option<f64> {
        (!self.is_nan()).then(|| self.numerator as f64 / self.denominator as f64)
    }

    pub fn abs(&self) -> Self {
        Self::reduce((self.numerator as i64).abs(), self.denominator as i64)
    }

    pub fn signum(&self) -> i32 {
        self.numerator.signum()
    }

    // ========== Parsing ==========

    /// Parse the leading fraction of `text`
    ///
    /// Trailing text after the fraction is ignored; see `try_parse_prefix`.
    pub fn parse(text: &str, locale: Option<&Locale>) -> Result<Self, PantryError> {
        Self::try_parse(text, locale).ok_or_else(|| PantryError::format("fraction", text))
    }

    pub fn try_parse(text: &str, locale: Option<&Locale>) -> Option<Self> {
        Self::try_parse_prefix(text, locale).map(|(value, _)| value)
    }

    /// Parse the leading fraction of `text` and report how many bytes it took
    pub fn try_parse_prefix(text: &str, locale: Option<&Locale>) -> Option<(Self, usize)> {
        let locale = locale.unwrap_or(Locale::invariant());
        parse_parts(text, locale.decimal_separator)
    }

    // ========== Formatting ==========

    /// Render with a format specifier (`G`, `N`, `V` or a numeric format for whole values)
    pub fn format(&self, format: Option<&str>, locale: Option<&Locale>) -> String {
        numfmt::render(|f| self.write_to(f, format, locale)).to_string()
    }

    /// Render into any `fmt::Write`
    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W, format: Option<&str>, locale: Option<&Locale>) -> fmt::Result {
        if self.is_nan() {
            return w.write_str("NaN");
        }
        self.write_notation(w, Notation::parse(format), locale.unwrap_or(Locale::invariant()))
    }

    /// Write into `dest`; `None` when it does not fit or the value is not finite
    pub fn try_format(&self, dest: &mut [u8], format: Option<&str>, locale: Option<&Locale>) -> Option<usize> {
        let length = self.format_len(format, locale)?;
        if length > dest.len() {
            return None;
        }
        let mut writer = numfmt::SliceWriter::new(dest);
        self.write_notation(&mut writer, Notation::parse(format), locale.unwrap_or(Locale::invariant()))
            .ok()?;
        Some(writer.written())
    }

    /// Exact byte length `try_format` needs
    pub fn format_len(&self, format: Option<&str>, locale: Option<&Locale>) -> Option<usize> {
        if self.is_nan() {
            return None;
        }
        let notation = Notation::parse(format);
        if self.is_integer() {
            let mut counter = numfmt::CountingWriter::default();
            self.write_notation(&mut counter, notation, locale.unwrap_or(Locale::invariant())).ok()?;
            return Some(counter.len);
        }

        let (negative, integer, rest, denominator) = self.mixed_parts();
        let style = FractionStyle::of(notation, rest, denominator);
        let mut length = negative as usize;
        if integer != 0 {
            length += numfmt::count_digits(integer);
            if style == FractionStyle::General {
                length += 1;
            }
        }
        length += match style {
            FractionStyle::Vulgar(glyph) => glyph.len_utf8(),
            FractionStyle::General => numfmt::count_digits(rest) + VIRGULE.len_utf8() + numfmt::count_digits(denominator),
            FractionStyle::Script => {
                glyphs_len(rest, &SUP_DIGITS) + SOLIDUS.len_utf8() + glyphs_len(denominator, &SUB_DIGITS)
            }
        };
        Some(length)
    }

    /// Sign, whole part, remainder and denominator of a proper fraction
    fn mixed_parts(&self) -> (bool, u64, u64, u64) {
        let numerator = (self.numerator as i64).unsigned_abs();
        let denominator = self.denominator as u64;
        (self.numerator < 0, numerator / denominator, numerator % denominator, denominator)
    }

    fn write_notation<W: Write + ?Sized>(&self, w: &mut W, notation: Notation, locale: &Locale) -> fmt::Result {
        if self.is_integer() {
            let value = self.numerator as i64;
            return match notation {
                Notation::Numeric(format) => numfmt::write_integer(w, value, format, locale),
                _ => numfmt::write_integer(w, value, NumericFormat::General, Locale::invariant()),
            };
        }

        let (negative, integer, rest, denominator) = self.mixed_parts();
        let style = FractionStyle::of(notation, rest, denominator);
        if negative {
            w.write_char('-')?;
        }
        if integer != 0 {
            write_glyphs(w, integer, &DIGITS)?;
            if style == FractionStyle::General {
                w.write_char(' ')?;
            }
        }
        match style {
            FractionStyle::Vulgar(glyph) => w.write_char(glyph),
            FractionStyle::General => {
                write_glyphs(w, rest, &DIGITS)?;
                w.write_char(VIRGULE)?;
                write_glyphs(w, denominator, &DIGITS)
            }
            FractionStyle::Script => {
                write_glyphs(w, rest, &SUP_DIGITS)?;
                w.write_char(SOLIDUS)?;
                write_glyphs(w, denominator, &SUB_DIGITS)
            }
        }
    }
}

// ========== Notation ==========

/// How a fraction is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// "1 1/2"
    General,
    /// "1¹⁄₂"
    Script,
    /// "1½", or `General` when no glyph exists
    Vulgar,
    /// Standard numeric format, applied to whole values
    Numeric(NumericFormat),
}

impl Notation {
    pub fn parse(format: Option<&str>) -> Notation {
        match format.unwrap_or_default() {
            "" | "G" | "g" => Notation::General,
            "N" | "n" => Notation::Script,
            "V" | "v" => Notation::Vulgar,
            pattern => NumericFormat::parse(pattern).map(Notation::Numeric).unwrap_or(Notation::General),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FractionStyle {
    General,
    Script,
    Vulgar(char),
}

impl FractionStyle {
    fn of(notation: Notation, rest: u64, denominator: u64) -> Self {
        match notation {
            Notation::General => FractionStyle::General,
            Notation::Vulgar => match vulgar_glyph(rest, denominator) {
                Some(glyph) => FractionStyle::Vulgar(glyph),
                None => FractionStyle::General,
            },
            // Numeric formats only make sense for whole values
            Notation::Script | Notation::Numeric(_) => FractionStyle::Script,
        }
    }
}

fn vulgar_glyph(numerator: u64, denominator: u64) -> Option<char> {
    VULGARS
        .iter()
        .find(|&&(_, n, d)| n as u64 == numerator && d as u64 == denominator)
        .map(|&(glyph, _, _)| glyph)
}

fn write_glyphs<W: Write + ?Sized>(w: &mut W, n: u64, glyphs: &[char; 10]) -> fmt::Result {
    let mut divisor = 10u64.pow(numfmt::count_digits(n) as u32 - 1);
    while divisor > 0 {
        w.write_char(glyphs[((n / divisor) % 10) as usize])?;
        divisor /= 10;
    }
    Ok(())
}

fn glyphs_len(mut n: u64, glyphs: &[char; 10]) -> usize {
    let mut length = 0;
    loop {
        length += glyphs[(n % 10) as usize].len_utf8();
        n /= 10;
        if n == 0 {
            return length;
        }
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

// ========== Notation parts ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Sign,
    Bar,
    Number,
    RealNumber,
    OverNumber,
    UnderNumber,
    Vulgar,
}

#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    part: Part,
    text: &'a str,
    /// Byte offset just past the token
    end: usize,
}

/// Cursor splitting fraction notation into parts, skipping whitespace between them
struct Parts<'a> {
    text: &'a str,
    pos: usize,
    decimal: char,
}

impl<'a> Parts<'a> {
    fn new(text: &'a str, decimal: char) -> Self {
        Parts { text, pos: 0, decimal }
    }

    fn classify(&self, c: char) -> Option<Part> {
        if SIGNS.contains(&c) {
            Some(Part::Sign)
        } else if c == VIRGULE || c == SOLIDUS || c == BACKSLASH {
            Some(Part::Bar)
        } else if c.is_ascii_digit() {
            Some(Part::Number)
        } else if c == self.decimal {
            Some(Part::RealNumber)
        } else if SUP_DIGITS.contains(&c) {
            Some(Part::OverNumber)
        } else if SUB_DIGITS.contains(&c) {
            Some(Part::UnderNumber)
        } else if VULGARS.iter().any(|&(glyph, _, _)| glyph == c) {
            Some(Part::Vulgar)
        } else {
            None
        }
    }
}

impl<'a> Iterator for Parts<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let text = self.text;
        let start = scan::trim_start_pos(text, self.pos);
        let first = text[start..].chars().next()?;
        let mut part = self.classify(first)?;
        let mut end = start + first.len_utf8();

        match part {
            Part::Number => {
                end = scan::clamp_start(text, end, &DIGITS);
                if text[end..].starts_with(self.decimal) {
                    let after = end + self.decimal.len_utf8();
                    if after < text.len() {
                        part = Part::RealNumber;
                        end = scan::clamp_start(text, after, &DIGITS);
                    }
                }
            }
            Part::RealNumber => end = scan::clamp_start(text, end, &DIGITS),
            Part::OverNumber => end = scan::clamp_start(text, end, &SUP_DIGITS),
            Part::UnderNumber => end = scan::clamp_start(text, end, &SUB_DIGITS),
            _ => {}
        }

        self.pos = end;
        Some(Token { part, text: &text[start..end], end })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Step {
    Sign,
    Integer,
    Numerator,
    Bar,
    Denominator,
    Vulgar,
    Done,
}

impl Step {
    fn next(self) -> Step {
        match self {
            Step::Sign => Step::Integer,
            Step::Integer => Step::Numerator,
            Step::Numerator => Step::Bar,
            Step::Bar => Step::Denominator,
            Step::Denominator => Step::Vulgar,
            Step::Vulgar | Step::Done => Step::Done,
        }
    }
}

fn parse_parts(text: &str, decimal: char) -> Option<(Fractional, usize)> {
    let mut sign: i64 = 1;
    let mut integer: i64 = 0;
    let mut numerator: i64 = 0;
    let mut denominator: i64 = 1;
    let mut step = Step::Sign;
    let mut consumed = 0;

    for token in Parts::new(text, decimal) {
        if step == Step::Done {
            return None;
        }
        consumed = token.end;

        if token.part == Part::RealNumber {
            let real = parse_real(token.text, decimal)?;
            let value = Fractional::from_f32(if sign < 0 { -real } else { real });
            return (!value.is_nan()).then_some((value, consumed));
        }

        let mut advance = true;
        loop {
            match step {
                Step::Sign => {
                    if token.part != Part::Sign {
                        step = Step::Integer;
                        continue;
                    }
                    sign = sign_of(token.text)?;
                }
                Step::Integer => match token.part {
                    Part::Number => integer = parse_digits(token.text, &DIGITS)?,
                    Part::OverNumber | Part::Vulgar => {
                        step = Step::Numerator;
                        continue;
                    }
                    _ => return None,
                },
                Step::Numerator => match token.part {
                    Part::Number => numerator = parse_digits(token.text, &DIGITS)?,
                    Part::OverNumber => numerator = parse_digits(token.text, &SUP_DIGITS)?,
                    Part::Bar => {
                        // "1/2": the integer was the numerator all along
                        step = Step::Bar;
                        numerator = integer;
                        integer = 0;
                    }
                    Part::Vulgar => {
                        step = Step::Vulgar;
                        continue;
                    }
                    _ if FOOD_WRITING && is_lone_punctuation(token.text) => advance = false,
                    _ => return None,
                },
                Step::Bar => {
                    if token.part != Part::Bar {
                        return None;
                    }
                }
                Step::Denominator => match token.part {
                    Part::Number => denominator = parse_digits(token.text, &DIGITS)?,
                    Part::UnderNumber => denominator = parse_digits(token.text, &SUB_DIGITS)?,
                    Part::Vulgar => {}
                    _ => return None,
                },
                Step::Vulgar => match token.part {
                    Part::Vulgar => {
                        let glyph = token.text.chars().next()?;
                        let &(_, n, d) = VULGARS.iter().find(|&&(g, _, _)| g == glyph)?;
                        numerator = n as i64;
                        denominator = d as i64;
                    }
                    _ if FOOD_WRITING && is_lone_punctuation(token.text) => advance = false,
                    _ => return None,
                },
                Step::Done => return None,
            }
            break;
        }
        if advance {
            step = step.next();
        }
    }

    if consumed == 0 {
        return None;
    }
    let value = integer
        .abs()
        .checked_mul(denominator)
        .and_then(|whole| whole.checked_add(numerator))
        .and_then(|total| total.checked_mul(sign))?;
    let result = Fractional::reduce(value, denominator);
    (!result.is_nan()).then_some((result, consumed))
}

fn sign_of(text: &str) -> Option<i64> {
    match text.chars().next()? {
        '-' | '⁻' | '₋' => Some(-1),
        '+' | '⁺' | '₊' => Some(1),
        _ => None,
    }
}

fn is_lone_punctuation(text: &str) -> bool {
    let mut chars = text.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if scan::is_punctuation(c))
}

/// Digit run in the given glyph set, limited to the `i32` range
fn parse_digits(text: &str, glyphs: &[char; 10]) -> Option<i64> {
    let mut value: i64 = 0;
    for c in text.chars() {
        let digit = glyphs.iter().position(|&g| g == c)? as i64;
        value = value * 10 + digit;
        if value > i32::MAX as i64 {
            return None;
        }
    }
    Some(value)
}

/// "1.5" or ".5" with the given decimal separator
fn parse_real(text: &str, decimal: char) -> Option<f32> {
    let (whole, fraction) = text.split_once(decimal).unwrap_or((text, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    let mut value = 0f64;
    for c in whole.chars() {
        value = value * 10.0 + c.to_digit(10)? as f64;
    }
    let mut scale = 0.1f64;
    for c in fraction.chars() {
        value += c.to_digit(10)? as f64 * scale;
        scale /= 10.0;
    }
    Some(value as f32)
}

// ========== Arithmetic ==========

impl Add for Fractional {
    type Output = Fractional;

    fn add(self, rhs: Fractional) -> Fractional {
        let left = self.numerator as i64 * rhs.denominator as i64;
        let right = rhs.numerator as i64 * self.denominator as i64;
        match left.checked_add(right) {
            Some(sum) => Fractional::reduce(sum, self.denominator as i64 * rhs.denominator as i64),
            None => Fractional::NAN,
        }
    }
}

impl Sub for Fractional {
    type Output = Fractional;

    fn sub(self, rhs: Fractional) -> Fractional {
        let left = self.numerator as i64 * rhs.denominator as i64;
        let right = rhs.numerator as i64 * self.denominator as i64;
        match left.checked_sub(right) {
            Some(difference) => Fractional::reduce(difference, self.denominator as i64 * rhs.denominator as i64),
            None => Fractional::NAN,
        }
    }
}

impl Mul for Fractional {
    type Output = Fractional;

    fn mul(self, rhs: Fractional) -> Fractional {
        Fractional::reduce(
            self.numerator as i64 * rhs.numerator as i64,
            self.denominator as i64 * rhs.denominator as i64,
        )
    }
}

impl Div for Fractional {
    type Output = Fractional;

    fn div(self, rhs: Fractional) -> Fractional {
        Fractional::reduce(
            self.numerator as i64 * rhs.denominator as i64,
            self.denominator as i64 * rhs.numerator as i64,
        )
    }
}

impl Neg for Fractional {
    type Output = Fractional;

    fn neg(self) -> Fractional {
        Fractional::reduce(-(self.numerator as i64), self.denominator as i64)
    }
}

macro_rules! int_operand {
    ($($trait:ident :: $method:ident),*) => {$(
        impl $trait<i32> for Fractional {
            type Output = Fractional;

            fn $method(self, rhs: i32) -> Fractional {
                $trait::$method(self, Fractional::from(rhs))
            }
        }
    )*};
}

int_operand!(Add::add, Sub::sub, Mul::mul, Div::div);

impl From<i32> for Fractional {
    fn from(value: i32) -> Self {
        Fractional { numerator: value, denominator: 1 }
    }
}

// ========== Comparison ==========

impl Ord for Fractional {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_nan(), other.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => {
                let left = self.numerator as i64 * other.denominator as i64;
                let right = other.numerator as i64 * self.denominator as i64;
                left.cmp(&right)
            }
        }
    }
}

impl PartialOrd for Fractional {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<f32> for Fractional {
    fn eq(&self, other: &f32) -> bool {
        self.as_f64() == Some(*other as f64)
    }
}

impl PartialOrd<f32> for Fractional {
    fn partial_cmp(&self, other: &f32) -> Option<Ordering> {
        self.as_f64()?.partial_cmp(&(*other as f64))
    }
}

// ========== Text ==========

impl fmt::Display for Fractional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            return f.write_str("NaN");
        }
        self.write_notation(f, Notation::General, Locale::invariant())
    }
}

impl fmt::Debug for Fractional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fractional({}/{})", self.numerator, self.denominator)
    }
}

impl FromStr for Fractional {
    type Err = PantryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fractional::parse(s, None)
    }
}

impl Serialize for Fractional {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Fractional {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn parse(text: &str) -> Fractional {
        Fractional::parse(text, None).unwrap()
    }

    #[test]
    fn test_reduction() {
        let f = Fractional::new(6, 8);
        assert_eq!((f.numerator(), f.denominator()), (3, 4));
        let f = Fractional::new(3, -6);
        assert_eq!((f.numerator(), f.denominator()), (-1, 2));
        assert_eq!(Fractional::new(0, 5), Fractional::ZERO);
        assert!(Fractional::new(5, 0).is_nan());
        assert_eq!(Fractional::new(5, 0), Fractional::NAN);
    }

    #[rstest]
    #[case("1 1/2", 3, 2)]
    #[case("1/2", 1, 2)]
    #[case("⅑", 1, 9)]
    #[case("5 3/4", 23, 4)]
    #[case("5³⁄₄", 23, 4)]
    #[case("¹⁄₂", 1, 2)]
    #[case("1½", 3, 2)]
    #[case("2 ½", 5, 2)]
    #[case("-1 1/2", -3, 2)]
    #[case("+7", 7, 1)]
    #[case("1\\3", 1, 3)]
    #[case("1 1", 2, 1)]
    #[case("1/", 1, 1)]
    #[case("4/8", 1, 2)]
    #[case("↉", 0, 1)]
    #[case("  12  ", 12, 1)]
    fn test_parse(#[case] text: &str, #[case] numerator: i32, #[case] denominator: i32) {
        let value = parse(text);
        assert_eq!((value.numerator(), value.denominator()), (numerator, denominator), "{text}");
    }

    #[rstest]
    #[case("")]
    #[case("Abracadabra")]
    #[case("1/0")]
    #[case("1/2/3")]
    #[case("1 2 3")]
    #[case("99999999999")]
    #[case("--1")]
    #[case("1.")]
    fn test_parse_rejects(#[case] text: &str) {
        assert!(Fractional::try_parse(text, None).is_none(), "{text}");
        assert!(Fractional::parse(text, None).is_err());
    }

    #[test]
    fn test_parse_prefix() {
        assert_eq!(Fractional::try_parse_prefix("2 cups", None), Some((Fractional::from(2), 1)));
        assert_eq!(Fractional::try_parse_prefix("1 1/2 tsp", None), Some((Fractional::new(3, 2), 5)));
        assert_eq!(Fractional::try_parse_prefix("2%", None), Some((Fractional::from(2), 1)));
        assert_eq!(Fractional::try_parse_prefix("½ cup", None), Some((Fractional::new(1, 2), "½".len())));
        assert_eq!(Fractional::try_parse_prefix("cup", None), None);
    }

    #[test]
    fn test_parse_real() {
        assert_eq!(parse("1.5"), Fractional::new(3, 2));
        assert_eq!(parse(".25"), Fractional::new(1, 4));
        assert_eq!(parse("-0.5"), Fractional::new(-1, 2));
        assert_eq!(Fractional::try_parse_prefix("1.5 cups", None), Some((Fractional::new(3, 2), 3)));

        let ru = Locale::from_tag("ru-RU");
        assert_eq!(Fractional::parse("1,5", ru).unwrap(), Fractional::new(3, 2));
        assert_eq!(Fractional::try_parse_prefix("1,5", None), Some((Fractional::from(1), 1)));
        assert!(Fractional::try_parse(".", None).is_none());
    }

    #[cfg(feature = "food-writing")]
    #[test]
    fn test_parse_food_writing() {
        assert_eq!(Fractional::try_parse_prefix("5 3/4-inch", None), Some((Fractional::new(23, 4), 6)));
        assert_eq!(parse("1 & 1/2"), Fractional::new(3, 2));
        assert_eq!(Fractional::try_parse_prefix("7-", None), Some((Fractional::from(7), 2)));
        assert!(Fractional::try_parse("&1", None).is_none());
    }

    #[cfg(not(feature = "food-writing"))]
    #[test]
    fn test_parse_strict() {
        assert!(Fractional::try_parse("5 3/4-inch", None).is_none());
        assert_eq!(Fractional::try_parse_prefix("1 & 1/2", None), Some((Fractional::from(1), 1)));
        assert_eq!(parse("⁻3"), Fractional::from(-3));
    }

    #[rstest]
    #[case(3, 2, "1 1/2", "1¹⁄₂", "1½")]
    #[case(1, 2, "1/2", "¹⁄₂", "½")]
    #[case(23, 4, "5 3/4", "5³⁄₄", "5¾")]
    #[case(1, 7, "1/7", "¹⁄₇", "⅐")]
    #[case(2, 11, "2/11", "²⁄₁₁", "2/11")]
    #[case(-3, 2, "-1 1/2", "-1¹⁄₂", "-1½")]
    #[case(5, 1, "5", "5", "5")]
    #[case(0, 1, "0", "0", "0")]
    fn test_format(
        #[case] numerator: i32,
        #[case] denominator: i32,
        #[case] general: &str,
        #[case] script: &str,
        #[case] vulgar: &str,
    ) {
        let value = Fractional::new(numerator, denominator);
        assert_eq!(value.to_string(), general);
        assert_eq!(value.format(Some("G"), None), general);
        assert_eq!(value.format(Some("N"), None), script);
        assert_eq!(value.format(Some("v"), None), vulgar);
    }

    #[test]
    fn test_format_numeric_passthrough() {
        let value = Fractional::from(1234);
        assert_eq!(value.format(Some("N0"), Locale::from_tag("en-US")), "1,234");
        assert_eq!(value.format(Some("D6"), None), "001234");
        assert_eq!(Fractional::new(3, 2).format(Some("F2"), None), "1¹⁄₂");
        assert_eq!(Fractional::NAN.format(None, None), "NaN");
    }

    #[test]
    fn test_try_format() {
        let value = Fractional::new(23, 4);
        let mut buf = [0u8; 16];
        let written = value.try_format(&mut buf, Some("N"), None).unwrap();
        assert_eq!(std::str::from_utf8(&buf[..written]).unwrap(), "5³⁄₄");

        let mut small = [0u8; 4];
        assert_eq!(value.try_format(&mut small, Some("N"), None), None);
        assert_eq!(small, [0u8; 4]);
        assert_eq!(Fractional::NAN.try_format(&mut buf, None, None), None);
    }

    #[test]
    fn test_from_f32() {
        assert_eq!(Fractional::from_f32(0.5), Fractional::new(1, 2));
        assert_eq!(Fractional::from_f32(1.5), Fractional::new(3, 2));
        assert_eq!(Fractional::from_f32(0.333), Fractional::new(1, 3));
        assert_eq!(Fractional::from_f32(-0.75), Fractional::new(-3, 4));
        assert_eq!(Fractional::from_f32(4.0), Fractional::from(4));
        assert!(Fractional::from_f32(f32::NAN).is_nan());
        assert!(Fractional::from_f32(f32::INFINITY).is_nan());
        assert!(Fractional::from_f32(1e12).is_nan());
    }

    #[test]
    fn test_arithmetic() {
        let half = Fractional::new(1, 2);
        let third = Fractional::new(1, 3);
        assert_eq!(half + third, Fractional::new(5, 6));
        assert_eq!(half - third, Fractional::new(1, 6));
        assert_eq!(half * third, Fractional::new(1, 6));
        assert_eq!(half / third, Fractional::new(3, 2));
        assert_eq!(half * 4, Fractional::from(2));
        assert_eq!(-half, Fractional::new(-1, 2));
        assert!((half / Fractional::ZERO).is_nan());
        assert!((Fractional::NAN + half).is_nan());
        assert!((Fractional::from(i32::MAX) + 1).is_nan());
    }

    #[test]
    fn test_ordering() {
        let mut values = vec![Fractional::new(3, 2), Fractional::NAN, Fractional::new(-1, 3), Fractional::ZERO];
        values.sort();
        assert_eq!(values, vec![Fractional::NAN, Fractional::new(-1, 3), Fractional::ZERO, Fractional::new(3, 2)]);
        assert!(Fractional::new(1, 2) == 0.5f32);
        assert!(Fractional::new(1, 2) < 0.75f32);
        assert!(Fractional::NAN.partial_cmp(&0.0f32).is_none());
    }

    #[test]
    fn test_value() {
        assert_eq!(Fractional::new(1, 4).value().unwrap(), 0.25);
        assert_eq!(Fractional::NAN.value(), Err(PantryError::NotFinite));
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Fractional::new(3, 2)).unwrap();
        assert_eq!(json, "\"1 1/2\"");
        let back: Fractional = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Fractional::new(3, 2));
        assert!(serde_json::from_str::<Fractional>("\"pinch\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_lowest_terms(n in -100_000i32..100_000, d in 1i32..10_000) {
            let value = Fractional::new(n, d);
            prop_assert!(value.denominator() > 0);
            prop_assert_eq!(gcd(value.numerator().unsigned_abs() as u64, value.denominator() as u64), 1);
        }

        #[test]
        fn prop_roundtrip(n in -100_000i32..100_000, d in 1i32..10_000) {
            let value = Fractional::new(n, d);
            for format in ["G", "N", "V"] {
                let text = value.format(Some(format), None);
                prop_assert_eq!(Fractional::parse(&text, None).unwrap(), value, "{}", text);
            }
        }

        #[test]
        fn prop_format_len(n in -100_000i32..100_000, d in 1i32..10_000) {
            let value = Fractional::new(n, d);
            for format in ["G", "N", "V", "N2"] {
                let text = value.format(Some(format), None);
                prop_assert_eq!(value.format_len(Some(format), None), Some(text.len()));
            }
        }
    }
}
