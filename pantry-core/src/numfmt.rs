//! Standard numeric formats and fixed-capacity output
//!
//! Supports the subset of standard format strings that makes sense for whole
//! numbers: `G`, `D<n>`, `F<n>` and `N<n>`, rendered with a locale's
//! separators and grouping.

use std::fmt::{self, Write};
use crate::Locale;

/// A parsed standard numeric format string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericFormat {
    /// Plain digits
    General,
    /// Digits padded with zeros to the given width
    Decimal(usize),
    /// Digits followed by the given number of fraction digits
    Fixed(usize),
    /// Grouped digits followed by the given number of fraction digits
    Number(usize),
}

impl NumericFormat {
    /// Parse a specifier such as "D3" or "n0"; `None` when not recognized
    pub fn parse(pattern: &str) -> Option<NumericFormat> {
        let mut chars = pattern.chars();
        let kind = chars.next()?;
        let rest = chars.as_str();
        let precision = if rest.is_empty() {
            None
        } else if rest.len() <= 2 && rest.bytes().all(|b| b.is_ascii_digit()) {
            rest.parse::<usize>().ok()
        } else {
            return None;
        };

        match kind {
            'G' | 'g' => Some(NumericFormat::General),
            'D' | 'd' => Some(NumericFormat::Decimal(precision.unwrap_or(0))),
            'F' | 'f' => Some(NumericFormat::Fixed(precision.unwrap_or(2))),
            'N' | 'n' => Some(NumericFormat::Number(precision.unwrap_or(2))),
            _ => None,
        }
    }
}

/// Write a whole number in the given format
pub fn write_integer<W: Write + ?Sized>(w: &mut W, value: i64, format: NumericFormat, locale: &Locale) -> fmt::Result {
    let mut buffer = itoa_buffer();
    let digits = unsigned_digits(value.unsigned_abs(), &mut buffer);
    if value < 0 {
        w.write_char(locale.negative_sign)?;
    }
    match format {
        NumericFormat::General => w.write_str(digits),
        NumericFormat::Decimal(width) => {
            for _ in digits.len()..width {
                w.write_char('0')?;
            }
            w.write_str(digits)
        }
        NumericFormat::Fixed(scale) => {
            w.write_str(digits)?;
            write_zero_fraction(w, scale, locale)
        }
        NumericFormat::Number(scale) => {
            write_grouped(w, digits, locale)?;
            write_zero_fraction(w, scale, locale)
        }
    }
}

fn write_zero_fraction<W: Write + ?Sized>(w: &mut W, scale: usize, locale: &Locale) -> fmt::Result {
    if scale > 0 {
        w.write_char(locale.decimal_separator)?;
        for _ in 0..scale {
            w.write_char('0')?;
        }
    }
    Ok(())
}

/// Write ASCII `digits` with the locale's group separators inserted
pub fn write_grouped<W: Write + ?Sized>(w: &mut W, digits: &str, locale: &Locale) -> fmt::Result {
    // Group boundaries, counted from the right
    let mut cuts = [0usize; 40];
    let mut count = 0;
    let mut remaining = digits.len();
    let mut index = 0;
    while let Some(&size) = locale.group_sizes.get(index).or(locale.group_sizes.last()) {
        let size = size as usize;
        if size == 0 || remaining <= size || count == cuts.len() {
            break;
        }
        remaining -= size;
        cuts[count] = remaining;
        count += 1;
        index += 1;
    }

    let mut start = 0;
    for &cut in cuts[..count].iter().rev() {
        w.write_str(&digits[start..cut])?;
        w.write_char(locale.group_separator)?;
        start = cut;
    }
    w.write_str(&digits[start..])
}

/// Write a decimal number given as separate digit strings, grouping the integer part
pub fn write_number<W: Write + ?Sized>(
    w: &mut W,
    negative: bool,
    integer_digits: &str,
    fraction_digits: &str,
    locale: &Locale,
) -> fmt::Result {
    if negative {
        w.write_char(locale.negative_sign)?;
    }
    write_grouped(w, integer_digits, locale)?;
    if !fraction_digits.is_empty() {
        w.write_char(locale.decimal_separator)?;
        w.write_str(fraction_digits)?;
    }
    Ok(())
}

/// Number of decimal digits in `n`
pub fn count_digits(n: u64) -> usize {
    match n.checked_ilog10() {
        Some(log) => log as usize + 1,
        None => 1,
    }
}

fn itoa_buffer() -> [u8; 20] {
    [0u8; 20]
}

fn unsigned_digits(mut n: u64, buffer: &mut [u8; 20]) -> &str {
    let mut pos = buffer.len();
    loop {
        pos -= 1;
        buffer[pos] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    // Only ASCII digits were written
    std::str::from_utf8(&buffer[pos..]).unwrap_or_default()
}

// ========== Fixed-capacity output ==========

/// `fmt::Write` over a byte buffer that refuses writes it cannot hold whole
pub struct SliceWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        SliceWriter { buf, pos: 0 }
    }

    pub fn written(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }
}

impl Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.pos + s.len();
        if end > self.buf.len() {
            return Err(fmt::Error);
        }
        self.buf[self.pos..end].copy_from_slice(s.as_bytes());
        self.pos = end;
        Ok(())
    }
}

/// `fmt::Write` that only measures
#[derive(Debug, Default)]
pub struct CountingWriter {
    pub len: usize,
}

impl Write for CountingWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.len += s.len();
        Ok(())
    }
}

/// `Display` over a write callback, for building a `String` with `to_string`
pub struct Render<F>(F);

/// Wrap a callback that writes to a `Formatter`
pub fn render<F>(write: F) -> Render<F>
where
    F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result,
{
    Render(write)
}

impl<F> fmt::Display for Render<F>
where
    F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.0)(f)
    }
}

/// Render into `dest` only if the whole output fits; returns bytes written
pub fn write_exact<F>(dest: &mut [u8], render: F) -> Option<usize>
where
    F: Fn(&mut dyn Write) -> fmt::Result,
{
    let mut counter = CountingWriter::default();
    render(&mut counter).ok()?;
    if counter.len > dest.len() {
        return None;
    }
    let mut writer = SliceWriter::new(dest);
    render(&mut writer).ok()?;
    Some(writer.written())
}
