//! Span scanning helpers
//!
//! All positions are byte offsets into a `&str`. Functions never allocate and
//! clamp to the end of the text instead of failing.

/// Characters recognized as spacing, including the ones used as group separators
pub const SPACE_VARIANTS: &[char] = &[
    '\t', ' ', '\u{00A0}', '\u{1680}',
    '\u{2000}', '\u{2001}', '\u{2002}', '\u{2003}', '\u{2004}', '\u{2005}',
    '\u{2006}', '\u{2007}', '\u{2008}', '\u{2009}', '\u{200A}',
    '\u{202F}', '\u{205F}', '\u{3000}',
];

/// Advance `start` past every character contained in `trim`
pub fn clamp_start(text: &str, start: usize, trim: &[char]) -> usize {
    clamp_start_by(text, start, |c| trim.contains(&c))
}

/// Advance `start` past every character matching `skip`
pub fn clamp_start_by(text: &str, start: usize, skip: impl Fn(char) -> bool) -> usize {
    let Some(rest) = text.get(start..) else {
        return text.len();
    };
    match rest.find(|c: char| !skip(c)) {
        Some(offset) => start + offset,
        None => text.len(),
    }
}

/// Advance `start` until a character contained in `stop` (or the end)
pub fn clamp_start_until(text: &str, start: usize, stop: &[char]) -> usize {
    clamp_start_until_by(text, start, |c| stop.contains(&c))
}

/// Advance `start` until a character matching `stop` (or the end)
pub fn clamp_start_until_by(text: &str, start: usize, stop: impl Fn(char) -> bool) -> usize {
    let Some(rest) = text.get(start..) else {
        return text.len();
    };
    match rest.find(stop) {
        Some(offset) => start + offset,
        None => text.len(),
    }
}

/// Skip leading whitespace
pub fn trim_start_pos(text: &str, start: usize) -> usize {
    clamp_start_by(text, start, char::is_whitespace)
}

// ========== Character classes ==========

/// Space, line and paragraph separators
pub fn is_separator(c: char) -> bool {
    matches!(c,
        ' ' | '\u{00A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}'
        | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}')
}

/// Connector, dash, open/close, quote and other punctuation
pub fn is_punctuation(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_punctuation() && !is_ascii_symbol(c);
    }
    matches!(c,
        '\u{00A1}' | '\u{00A7}' | '\u{00AB}' | '\u{00B6}' | '\u{00B7}' | '\u{00BB}' | '\u{00BF}'
        | '\u{037E}' | '\u{0387}'
        | '\u{055A}'..='\u{055F}' | '\u{0589}' | '\u{058A}'
        | '\u{05BE}' | '\u{05C0}' | '\u{05C3}' | '\u{05C6}' | '\u{05F3}' | '\u{05F4}'
        | '\u{060C}' | '\u{060D}' | '\u{061B}' | '\u{061F}' | '\u{066A}'..='\u{066D}' | '\u{06D4}'
        | '\u{0964}' | '\u{0965}' | '\u{0970}'
        | '\u{0E4F}' | '\u{0E5A}' | '\u{0E5B}'
        | '\u{2010}'..='\u{2027}' | '\u{2030}'..='\u{2043}' | '\u{2045}'..='\u{2051}'
        | '\u{2053}'..='\u{205E}' | '\u{207D}' | '\u{207E}' | '\u{208D}' | '\u{208E}'
        | '\u{2E00}'..='\u{2E2E}' | '\u{2E30}'..='\u{2E4F}'
        | '\u{3001}'..='\u{3003}' | '\u{3008}'..='\u{3011}' | '\u{3014}'..='\u{301F}'
        | '\u{3030}' | '\u{303D}' | '\u{30A0}' | '\u{30FB}'
        | '\u{FE10}'..='\u{FE19}' | '\u{FE30}'..='\u{FE52}' | '\u{FE54}'..='\u{FE61}'
        | '\u{FE63}' | '\u{FE68}' | '\u{FE6A}' | '\u{FE6B}'
        | '\u{FF01}'..='\u{FF03}' | '\u{FF05}'..='\u{FF0A}' | '\u{FF0C}'..='\u{FF0F}'
        | '\u{FF1A}' | '\u{FF1B}' | '\u{FF1F}' | '\u{FF20}' | '\u{FF3B}'..='\u{FF3D}'
        | '\u{FF3F}' | '\u{FF5B}' | '\u{FF5D}' | '\u{FF5F}'..='\u{FF65}')
}

/// Math, currency, modifier and other symbols
pub fn is_symbol(c: char) -> bool {
    if c.is_ascii() {
        return is_ascii_symbol(c);
    }
    matches!(c,
        '\u{00A2}'..='\u{00A6}' | '\u{00A8}' | '\u{00A9}' | '\u{00AC}' | '\u{00AE}'..='\u{00B1}'
        | '\u{00B4}' | '\u{00B8}' | '\u{00D7}' | '\u{00F7}'
        | '\u{02C2}'..='\u{02C5}' | '\u{02D2}'..='\u{02DF}' | '\u{0384}' | '\u{0385}' | '\u{03F6}'
        | '\u{0482}' | '\u{058D}'..='\u{058F}' | '\u{0606}'..='\u{0608}' | '\u{060B}'
        | '\u{060E}' | '\u{060F}' | '\u{0E3F}'
        | '\u{2044}' | '\u{2052}' | '\u{207A}'..='\u{207C}' | '\u{208A}'..='\u{208C}'
        | '\u{20A0}'..='\u{20C0}'
        | '\u{2100}' | '\u{2101}' | '\u{2103}'..='\u{2106}' | '\u{2108}' | '\u{2109}' | '\u{2114}'
        | '\u{2116}'..='\u{2118}' | '\u{211E}'..='\u{2123}' | '\u{2125}' | '\u{2127}' | '\u{2129}'
        | '\u{212E}' | '\u{213A}' | '\u{213B}' | '\u{2140}'..='\u{2144}' | '\u{214A}'..='\u{214D}'
        | '\u{214F}'
        | '\u{2190}'..='\u{2307}' | '\u{230C}'..='\u{2328}' | '\u{232B}'..='\u{2426}'
        | '\u{2440}'..='\u{244A}' | '\u{249C}'..='\u{24E9}' | '\u{2500}'..='\u{2767}'
        | '\u{2794}'..='\u{27C4}' | '\u{27C7}'..='\u{27E5}' | '\u{27F0}'..='\u{2982}'
        | '\u{2999}'..='\u{29D7}' | '\u{29DC}'..='\u{29FB}' | '\u{29FE}'..='\u{2B73}'
        | '\u{2B76}'..='\u{2BFF}'
        | '\u{3004}' | '\u{3012}' | '\u{3013}' | '\u{3020}' | '\u{309B}' | '\u{309C}'
        | '\u{FDFC}' | '\u{FE62}' | '\u{FE64}'..='\u{FE66}' | '\u{FE69}'
        | '\u{FF04}' | '\u{FF0B}' | '\u{FF1C}'..='\u{FF1E}' | '\u{FF3E}' | '\u{FF40}'
        | '\u{FF5C}' | '\u{FF5E}' | '\u{FFE0}'..='\u{FFE6}' | '\u{FFE8}'..='\u{FFEE}'
        | '\u{1F300}'..='\u{1FAFF}')
}

fn is_ascii_symbol(c: char) -> bool {
    matches!(c, '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~')
}

/// A character that may legally follow a unit or currency word
pub fn is_boundary(c: char) -> bool {
    c.is_whitespace() || is_punctuation(c) || is_separator(c) || is_symbol(c)
}

// ========== Case-insensitive matching ==========

pub fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

pub fn str_eq_ignore_case(a: &str, b: &str) -> bool {
    let mut left = a.chars();
    let mut right = b.chars();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if eq_ignore_case(x, y) => continue,
            _ => return false,
        }
    }
}

/// Byte length of the prefix of `text` that matches `prefix`, ignoring case
pub fn strip_prefix_ignore_case(text: &str, prefix: &str) -> Option<usize> {
    let mut matched = 0;
    let mut chars = text.chars();
    for expected in prefix.chars() {
        let c = chars.next()?;
        if !eq_ignore_case(c, expected) {
            return None;
        }
        matched += c.len_utf8();
    }
    Some(matched)
}
