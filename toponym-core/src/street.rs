//! Whole-name matching helpers.
//!
//! - [`build_key`]: a delimiter-insensitive key for a street or place name
//! - [`contains_normalized`]: canonical substring containment
//! - [`feature_type_token`]: reserved pseudo-token for a classification code

use memchr::memmem;
use toponym_types::{CanonicalForm, Delimiters};

use crate::analyzer::canonicalizer::{canonicalize, canonicalize_into};
use crate::analyzer::tokenizer::for_each_token;

/// Builds the street key of `name`: the canonical forms of its street tokens
/// concatenated with no separator.
///
/// Falls back to canonicalizing the whole name when the tokens contribute
/// nothing (the name is empty or consists of delimiters only).
///
/// # Examples
///
/// ```
/// use toponym_core::street::build_key;
///
/// assert_eq!(build_key("St.-Petersburg"), build_key("St Petersburg"));
/// assert_eq!(build_key("Main Street").to_string(), "mainstreet");
/// ```
pub fn build_key(name: &str) -> CanonicalForm {
    let mut key = CanonicalForm::with_capacity(name.len());
    if name.is_empty() {
        return key;
    }

    let mut buf = CanonicalForm::new();
    for_each_token(name, &Delimiters::street(), |token, _| {
        canonicalize_into(token, &mut buf);
        key.extend_from(&buf);
    });

    if key.is_empty() {
        canonicalize(name)
    } else {
        key
    }
}

/// True if the canonical form of `needle` occurs in the canonical form of
/// `haystack`. Exact sub-sequence match, nothing fuzzy.
///
/// # Examples
///
/// ```
/// use toponym_core::street::contains_normalized;
///
/// assert!(contains_normalized("Café del Mar", "CAFE"));
/// assert!(!contains_normalized("Café del Mar", "caffe"));
/// ```
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    let hay = canonicalize(haystack).to_string_lossless();
    let needle = canonicalize(needle).to_string_lossless();
    // UTF-8 is self-synchronizing: a byte match of whole encoded sequences is
    // a code-point match.
    memmem::find(hay.as_bytes(), needle.as_bytes()).is_some()
}

/// The reserved token under which a feature's classification code is indexed.
///
/// Rendered as `!type:<code>`. Names never produce `!` inside a token because
/// it is a query delimiter, so these tokens cannot collide with name tokens.
pub fn feature_type_token(type_code: u32) -> CanonicalForm {
    let mut token = CanonicalForm::with_capacity(16);
    token.extend("!type:".chars());
    token.extend(type_code.to_string().chars());
    token
}
