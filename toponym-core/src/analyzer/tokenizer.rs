//! Name tokenizer.
//!
//! Splits raw (not yet canonicalized) names into tokens on a caller-chosen
//! [`Delimiters`] set, and trims the trailing, possibly incomplete token off
//! an in-progress query.
//!
//! ## What It Does
//!
//! Given `"St.-Petersburg"` and the street delimiter set, it emits each
//! non-empty run between delimiters with its position:
//!
//! ```ignore
//! ("St", 0)
//! ("Petersburg", 1)
//! ```
//!
//! Tokens are slices of the input; empty runs between consecutive delimiters
//! are dropped and do not consume a position.

use smallvec::SmallVec;
use toponym_types::Delimiters;

/// Punctuation that separates query tokens in addition to whitespace.
const QUERY_PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', '\'', '"', '(', ')', '[', ']', '{', '}', '<', '>', '/', '\\',
    '|', '-', '_', '+', '=', '*', '&', '^', '%', '$', '#', '@', '~', '`', '«', '»', '‹', '›',
    '„', '“', '”', '‘', '’', '‚', '№', '§',
];

/// The fixed delimiter predicate for search queries.
///
/// Unicode whitespace plus ASCII and common typographic punctuation.
#[inline]
pub fn is_query_delimiter(c: char) -> bool {
    c.is_whitespace() || QUERY_PUNCTUATION.contains(&c)
}

/// Emits `(token, position)` for every non-empty run of `name` between
/// characters accepted by `is_delim`.
pub fn for_each_token_by<'n, P, F>(name: &'n str, is_delim: P, mut emit: F)
where
    P: Fn(char) -> bool,
    F: FnMut(&'n str, u32),
{
    let mut start = 0usize;
    let mut pos = 0u32;

    for (i, c) in name.char_indices() {
        if !is_delim(c) {
            continue;
        }
        if start < i {
            emit(&name[start..i], pos);
            pos = pos.saturating_add(1);
        }
        start = i + c.len_utf8();
    }

    if start < name.len() {
        emit(&name[start..], pos);
    }
}

/// Emits `(token, position)` for every token of `name` split on `delimiters`.
///
/// An empty delimiter set emits the whole (non-empty) name as one token.
#[inline]
pub fn for_each_token<'n, F>(name: &'n str, delimiters: &Delimiters, emit: F)
where
    F: FnMut(&'n str, u32),
{
    if delimiters.is_ascii() {
        // ASCII delimiters never occur inside a multi-byte sequence, so a
        // byte scan yields the same boundaries as a char scan.
        for_each_ascii_token(name, delimiters, emit);
    } else {
        for_each_token_by(name, |c| delimiters.is_delimiter(c), emit);
    }
}

fn for_each_ascii_token<'n, F>(name: &'n str, delimiters: &Delimiters, mut emit: F)
where
    F: FnMut(&'n str, u32),
{
    let bytes = name.as_bytes();
    let mut start = 0usize;
    let mut pos = 0u32;

    for (i, &b) in bytes.iter().enumerate() {
        if !(b.is_ascii() && delimiters.is_delimiter(b as char)) {
            continue;
        }
        if start < i {
            emit(&name[start..i], pos);
            pos = pos.saturating_add(1);
        }
        start = i + 1;
    }

    if start < bytes.len() {
        emit(&name[start..], pos);
    }
}

/// Splits `name` on `delimiters`, dropping empty runs.
///
/// # Examples
///
/// ```
/// use toponym_core::analyzer::tokenizer::split;
/// use toponym_types::Delimiters;
///
/// let tokens = split("St.-Petersburg", &Delimiters::street());
/// assert_eq!(tokens.as_slice(), &["St", "Petersburg"]);
/// ```
pub fn split<'n>(name: &'n str, delimiters: &Delimiters) -> SmallVec<[&'n str; 8]> {
    let mut out = SmallVec::new();
    for_each_token(name, delimiters, |token, _| out.push(token));
    out
}

/// Returns `name` without its trailing token.
///
/// Walks back from the end over non-delimiter code points and cuts just
/// before the first of them; the delimiter itself stays. A name that ends on
/// a delimiter is returned unchanged, and a name with no delimiter at all
/// trims to the empty string.
///
/// # Examples
///
/// ```
/// use toponym_core::analyzer::tokenizer::trim_last_token;
///
/// assert_eq!(trim_last_token("new york"), "new ");
/// assert_eq!(trim_last_token(""), "");
/// ```
pub fn trim_last_token(name: &str) -> &str {
    let cut = name
        .char_indices()
        .rev()
        .find(|&(_, c)| is_query_delimiter(c))
        .map_or(0, |(i, c)| i + c.len_utf8());
    &name[..cut]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<'n>(input: &'n str, delimiters: &Delimiters) -> Vec<(&'n str, u32)> {
        let mut out = Vec::new();
        for_each_token(input, delimiters, |text, pos| out.push((text, pos)));
        out
    }

    #[test]
    fn single_word() {
        let out = collect("Broadway", &Delimiters::street());
        assert_eq!(out, vec![("Broadway", 0)]);
    }

    #[test]
    fn street_delimiters() {
        let tokens = split("Main St.,\tApt-5", &Delimiters::street());
        assert_eq!(tokens.as_slice(), &["Main", "St", "Apt", "5"]);
    }

    #[test]
    fn positions_skip_empty_runs() {
        let out = collect("a  - b", &Delimiters::street());
        assert_eq!(out, vec![("a", 0), ("b", 1)]);
    }

    #[test]
    fn empty_emits_nothing() {
        assert!(split("", &Delimiters::street()).is_empty());
        assert!(split(" -.,", &Delimiters::street()).is_empty());
    }

    #[test]
    fn empty_delimiter_set_yields_whole_string() {
        let none = Delimiters::new(core::iter::empty());
        assert_eq!(split("Main Street", &none).as_slice(), &["Main Street"]);
    }

    #[test]
    fn non_ascii_tokens_are_intact() {
        let tokens = split("Đại lộ-Lê Lợi", &Delimiters::street());
        assert_eq!(tokens.as_slice(), &["Đại", "lộ", "Lê", "Lợi"]);
    }

    #[test]
    fn non_ascii_delimiters() {
        let d = Delimiters::new(['·', ' ']);
        assert_eq!(split("a·b c", &d).as_slice(), &["a", "b", "c"]);
    }

    #[test]
    fn tokens_are_slices_of_input() {
        let input = String::from("rue de la Paix");
        let base = input.as_ptr() as usize;
        let end = base + input.len();
        for token in split(&input, &Delimiters::street()) {
            let ptr = token.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        }
    }

    #[test]
    fn query_delimiters() {
        assert!(is_query_delimiter(' '));
        assert!(is_query_delimiter('\u{3000}'));
        assert!(is_query_delimiter('«'));
        assert!(is_query_delimiter('№'));
        assert!(!is_query_delimiter('a'));
        assert!(!is_query_delimiter('ß'));
    }

    #[test]
    fn for_each_token_by_predicate() {
        let mut out = Vec::new();
        for_each_token_by("rue d'Alsace", is_query_delimiter, |t, _| out.push(t));
        assert_eq!(out, vec!["rue", "d", "Alsace"]);
    }

    #[test]
    fn trim_last_token_basic() {
        assert_eq!(trim_last_token("new york"), "new ");
        assert_eq!(trim_last_token("york"), "");
        assert_eq!(trim_last_token(""), "");
    }

    #[test]
    fn trim_last_token_on_trailing_delimiter() {
        assert_eq!(trim_last_token("new york "), "new york ");
        assert_eq!(trim_last_token("main st."), "main st.");
    }

    #[test]
    fn trim_last_token_multibyte() {
        assert_eq!(trim_last_token("улица Лен"), "улица ");
        assert_eq!(trim_last_token("Đại lộ"), "Đại ");
    }

    #[test]
    fn trim_last_token_never_grows() {
        for s in ["new york", "a b c", "abc", "x, y", ""] {
            let once = trim_last_token(s);
            assert!(once.len() <= s.len());
            assert!(trim_last_token(once).len() <= once.len());
        }
    }
}
