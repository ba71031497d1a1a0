//! Unit symbol matching
//!
//! A symbol matches at the start of the unit text when:
//! - single-character symbols match exactly ("T" is not "t")
//! - multi-word symbols match with any run of spacing or punctuation
//!   standing in for the space ("fl oz" matches "fl. oz." and "fl_oz")
//! - every other symbol matches ignoring case
//!
//! and the character after it ends the word. That character is consumed too.

use pantry_core::scan;

/// Bytes of `text` taken by `symbol` plus its trailing boundary character
pub fn match_symbol(text: &str, symbol: &str) -> Option<usize> {
    let mut chars = symbol.chars();
    let single = matches!((chars.next(), chars.next()), (Some(_), None));

    let scanned = if symbol.trim_start().contains(' ') {
        scan_relaxed(text, symbol)?
    } else if single {
        text.starts_with(symbol).then_some(symbol.len())?
    } else {
        scan::strip_prefix_ignore_case(text, symbol)?
    };
    if scanned == 0 {
        return None;
    }

    match text[scanned..].chars().next() {
        None => Some(scanned),
        Some(c) if scan::is_boundary(c) => Some(scanned + c.len_utf8()),
        Some(_) => None,
    }
}

/// First symbol of `symbols` that matches
pub fn match_any(text: &str, symbols: &[&str]) -> Option<usize> {
    symbols.iter().find_map(|symbol| match_symbol(text, symbol))
}

/// Compare ignoring case, letting each space in `symbol` skip spacing and punctuation
fn scan_relaxed(text: &str, symbol: &str) -> Option<usize> {
    let mut pos = 0;
    for expected in symbol.chars() {
        if expected.is_whitespace() {
            pos = scan::clamp_start_by(text, pos, |c| {
                c.is_whitespace() || scan::is_punctuation(c) || scan::is_separator(c)
            });
            continue;
        }
        let c = text[pos..].chars().next()?;
        if !scan::eq_ignore_case(c, expected) {
            return None;
        }
        pos += c.len_utf8();
    }
    Some(pos)
}

/// Sort symbols longest first so that greedy matching prefers "ozs" over "oz"
pub fn sort_symbols(symbols: &[&'static str]) -> Vec<&'static str> {
    let mut sorted = symbols.to_vec();
    sorted.sort_by_key(|symbol| std::cmp::Reverse(symbol.chars().count()));
    sorted
}
