//! Splitting a money notation into sum and unit runs
//!
//! "3 руб 15 коп" reads as `3 ` `руб` ` 15 ` `коп`. What counts as part of
//! a sum depends on the currency: its locale's digits, signs and separators,
//! ASCII digits and every kind of space. A separator that is not a space
//! starts a sum only in front of a digit, so "د.إ" stays one unit even where
//! '.' is the decimal point.

use pantry_core::scan;

use crate::Currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Sum,
    Unit,
}

/// One run of the notation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note<'a> {
    pub text: &'a str,
    pub category: Category,
}

/// Cursor over the notes of a trimmed notation
pub struct Notes<'a> {
    currency: &'a Currency,
    rest: &'a str,
}

impl<'a> Notes<'a> {
    pub fn new(currency: &'a Currency, text: &'a str) -> Self {
        Notes { currency, rest: text.trim() }
    }
}

impl<'a> Iterator for Notes<'a> {
    type Item = Note<'a>;

    fn next(&mut self) -> Option<Note<'a>> {
        if self.rest.is_empty() {
            return None;
        }
        let currency = self.currency;
        let (category, end) = if starts_sum(currency, self.rest) {
            (Category::Sum, scan::clamp_start_by(self.rest, 0, |c| currency.is_numeric(c)))
        } else {
            let end = self
                .rest
                .char_indices()
                .skip(1)
                .map(|(i, _)| i)
                .find(|&i| starts_sum(currency, &self.rest[i..]))
                .unwrap_or(self.rest.len());
            (Category::Unit, end)
        };
        let (text, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Note { text, category })
    }
}

fn starts_sum(currency: &Currency, text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !currency.is_numeric(first) {
        return false;
    }
    let locale = currency.locale();
    let separator = (first == locale.decimal_separator || first == locale.group_separator)
        && first != ' '
        && !scan::SPACE_VARIANTS.contains(&first);
    !separator || chars.next().is_some_and(|next| locale.digit_value(next).is_some())
}
