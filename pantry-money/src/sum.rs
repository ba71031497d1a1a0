//! Locale-aware decimal sums
//!
//! Parsing accepts what people type into price fields: a sign on either
//! side, digit group separators, native digits and surrounding spaces.
//! Formatting writes grouped digits with two fraction digits only when the
//! sum is not whole.

use std::fmt::{self, Write};
use std::str::FromStr;

use pantry_core::{numfmt, scan, Locale};
use rust_decimal::{Decimal, RoundingStrategy};

const NBSP: char = '\u{00A0}';
const NNBSP: char = '\u{202F}';

/// Parse a decimal sum with the conventions of `locale`
pub fn parse_decimal(text: &str, locale: &Locale) -> Option<Decimal> {
    let text = text.trim_matches(|c: char| c.is_whitespace() || scan::SPACE_VARIANTS.contains(&c));
    let mut ascii = String::with_capacity(text.len() + 1);
    let mut negative = None;
    let mut integer_digits = 0usize;
    let mut fraction_digits = 0usize;
    let mut in_fraction = false;
    let mut finished = false;

    for c in text.chars() {
        if finished {
            return None;
        }
        if let Some(digit) = locale.digit_value(c) {
            ascii.push(char::from_digit(digit, 10)?);
            if in_fraction {
                fraction_digits += 1;
            } else {
                integer_digits += 1;
            }
        } else if let Some(sign) = sign_of(c, locale) {
            match (negative, integer_digits + fraction_digits) {
                // leading sign
                (None, 0) if !in_fraction => negative = Some(sign),
                // trailing sign ends the number
                (None, _) => {
                    negative = Some(sign);
                    finished = true;
                }
                _ => return None,
            }
        } else if c == locale.decimal_separator && !in_fraction {
            in_fraction = true;
            ascii.push('.');
        } else if is_group_separator(c, locale) && !in_fraction && integer_digits > 0 {
            continue;
        } else {
            return None;
        }
    }

    if integer_digits + fraction_digits == 0 {
        return None;
    }
    if ascii.starts_with('.') {
        ascii.insert(0, '0');
    }
    let value = Decimal::from_str(ascii.trim_end_matches('.')).ok()?;
    Some(if negative == Some(true) { -value } else { value })
}

/// `Some(true)` for a minus sign, `Some(false)` for a plus sign
fn sign_of(c: char, locale: &Locale) -> Option<bool> {
    if c == locale.negative_sign || c == '-' {
        Some(true)
    } else if c == locale.positive_sign || c == '+' {
        Some(false)
    } else {
        None
    }
}

/// A non-breaking group separator also accepts a plain space
fn is_group_separator(c: char, locale: &Locale) -> bool {
    c == locale.group_separator || (c == ' ' && matches!(locale.group_separator, NBSP | NNBSP))
}

/// Write `sum` grouped, with two fraction digits when it is not whole
///
/// Rounds half away from zero.
pub fn write_decimal<W: Write + ?Sized>(w: &mut W, sum: Decimal, locale: &Locale) -> fmt::Result {
    let scale = if sum.fract().is_zero() { 0 } else { 2 };
    let rounded = sum.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let digits = format!("{:.*}", scale as usize, rounded.abs());
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
    numfmt::write_number(w, negative, integer, fraction, locale)
}
