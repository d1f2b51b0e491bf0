//! Core types for the Toponym street-name matching engine.
//!
//! This crate holds the value types shared by the analyzers, the synonym
//! dictionary and the street index. Keeping them separate ensures:
//!
//! - **Single representation**: every comparison in the engine happens on a
//!   [`CanonicalForm`], never on raw strings
//! - **Cross-crate compatibility**: indexers and query handlers agree on ids
//!   and error types
//! - **Clean boundaries**: no behaviour here beyond construction and inspection

#![warn(missing_docs)]

use core::fmt;

use smallvec::SmallVec;

/// Identifier of a name stored in a street index.
pub type NameId = u32;

/// Characters that separate tokens of a street or place name.
pub const STREET_DELIMITERS: &str = "\t -,.";

/// A canonicalized sequence of Unicode code points.
///
/// Canonical forms are produced only by the canonicalizer in `toponym-core`;
/// there is no `From<&str>`. They are case-folded,
/// compatibility-decomposed and stripped of grave/acute accents, and they
/// are the only representation ever compared or used as a lookup key.
///
/// Most street tokens are short, so the first 16 code points live inline.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalForm(SmallVec<[char; 16]>);

impl CanonicalForm {
    /// Creates an empty canonical form.
    #[inline]
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Creates an empty canonical form able to hold `cap` code points inline or on the heap.
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self(SmallVec::with_capacity(cap))
    }

    /// Returns the code points.
    #[inline(always)]
    pub fn as_chars(&self) -> &[char] {
        &self.0
    }

    /// Returns mutable access to the code points.
    ///
    /// Intended for the canonicalizer, which edits the sequence in place.
    #[inline(always)]
    pub fn as_mut_vec(&mut self) -> &mut SmallVec<[char; 16]> {
        &mut self.0
    }

    /// Returns the number of code points.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no code points.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Removes all code points, keeping capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Appends one code point.
    #[inline]
    pub fn push(&mut self, c: char) {
        self.0.push(c);
    }

    /// Appends the code points of another canonical form.
    #[inline]
    pub fn extend_from(&mut self, other: &CanonicalForm) {
        self.0.extend_from_slice(&other.0);
    }

    /// Returns true if `prefix` is an initial run of this form (code-point order).
    #[inline]
    pub fn starts_with(&self, prefix: &CanonicalForm) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Exact sub-sequence search. An empty needle is contained in everything.
    pub fn contains_seq(&self, needle: &CanonicalForm) -> bool {
        if needle.is_empty() {
            return true;
        }
        if needle.len() > self.len() {
            return false;
        }
        self.0.windows(needle.len()).any(|w| w == needle.as_chars())
    }

    /// Renders the code points as an owned string.
    pub fn to_string_lossless(&self) -> String {
        self.0.iter().collect()
    }
}

impl Extend<char> for CanonicalForm {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl fmt::Display for CanonicalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            fmt::Write::write_char(f, *c)?;
        }
        Ok(())
    }
}

impl fmt::Debug for CanonicalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CanonicalForm({:?})", self.to_string_lossless())
    }
}

/// A set of delimiter characters used to split names into tokens.
///
/// An empty set is legal: the whole input is then a single token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    chars: SmallVec<[char; 8]>,
}

impl Delimiters {
    /// Creates a delimiter set from arbitrary characters.
    pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mut chars: SmallVec<[char; 8]> = chars.into_iter().collect();
        chars.sort_unstable();
        chars.dedup();
        Self { chars }
    }

    /// The fixed set used for street and place names: tab, space, hyphen, comma, period.
    pub fn street() -> Self {
        Self::new(STREET_DELIMITERS.chars())
    }

    /// Returns true if `c` separates tokens.
    #[inline(always)]
    pub fn is_delimiter(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Returns true if the set contains no characters.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns true if every delimiter is a single ASCII byte.
    #[inline]
    pub fn is_ascii(&self) -> bool {
        self.chars.iter().all(char::is_ascii)
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::street()
    }
}

/// Errors raised while building a synonym dictionary from custom input.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// An entry canonicalizes to an empty form and would match every prefix query.
    #[error("dictionary entry {index} ({raw:?}) is empty after canonicalization")]
    EmptyEntry {
        /// Zero-based position of the entry in the input.
        index: usize,
        /// The entry as supplied.
        raw: String,
    },
    /// Reading a word list failed.
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when adding a name to a street index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    /// The name exceeds the configured maximum length.
    #[error("name too long: {size} bytes (max: {max_size} bytes)")]
    TooLong {
        /// The actual size of the name in bytes.
        size: usize,
        /// The maximum allowed size in bytes.
        max_size: usize,
    },
    /// The name produced no tokens (empty or delimiters only).
    #[error("name has no tokens")]
    Empty,
    /// The index already holds `u32::MAX` names.
    #[error("street index is full")]
    CapacityExhausted,
}

/// Street index configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexConfig {
    /// Maximum accepted name length in bytes.
    /// Default: 1024
    pub max_name_length: usize,
    /// Whether a lone street synonym in a name is kept out of the index.
    /// Default: true
    pub suppress_single_synonym: bool,
    /// Maximum number of ids returned by a search.
    /// Default: 100
    pub max_results: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_name_length: 1024,
            suppress_single_synonym: true,
            max_results: 100,
        }
    }
}

impl IndexConfig {
    /// Indexes every token, synonyms included.
    pub const fn verbatim() -> Self {
        Self {
            max_name_length: 1024,
            suppress_single_synonym: false,
            max_results: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(s: &str) -> CanonicalForm {
        let mut f = CanonicalForm::new();
        f.extend(s.chars());
        f
    }

    #[test]
    fn canonical_form_display() {
        assert_eq!(form("rue").to_string(), "rue");
        assert_eq!(form("улица").to_string(), "улица");
        assert_eq!(format!("{:?}", form("st")), "CanonicalForm(\"st\")");
    }

    #[test]
    fn contains_seq_exact() {
        let hay = form("cafe del mar");
        assert!(hay.contains_seq(&form("cafe")));
        assert!(hay.contains_seq(&form("l m")));
        assert!(hay.contains_seq(&CanonicalForm::new()));
        assert!(!hay.contains_seq(&form("cafes")));
        assert!(!form("ab").contains_seq(&form("abc")));
    }

    #[test]
    fn starts_with_is_code_point_prefix() {
        assert!(form("street").starts_with(&form("str")));
        assert!(!form("str").starts_with(&form("street")));
    }

    #[test]
    fn ordering_is_code_point_order() {
        let mut v = vec![form("b"), form("ab"), form("a")];
        v.sort();
        assert_eq!(v, vec![form("a"), form("ab"), form("b")]);
    }

    #[test]
    fn street_delimiters() {
        let d = Delimiters::street();
        for c in ['\t', ' ', '-', ',', '.'] {
            assert!(d.is_delimiter(c));
        }
        assert!(!d.is_delimiter('#'));
        assert!(d.is_ascii());
    }

    #[test]
    fn empty_delimiters() {
        let d = Delimiters::new(core::iter::empty());
        assert!(d.is_empty());
        assert!(!d.is_delimiter(' '));
    }

    #[test]
    fn delimiters_dedup() {
        assert_eq!(Delimiters::new("  --".chars()), Delimiters::new("- ".chars()));
    }

    #[test]
    fn error_messages() {
        let e = NameError::TooLong {
            size: 2000,
            max_size: 1024,
        };
        assert_eq!(e.to_string(), "name too long: 2000 bytes (max: 1024 bytes)");

        let e = DictionaryError::EmptyEntry {
            index: 3,
            raw: "--".into(),
        };
        assert!(e.to_string().contains("entry 3"));
    }

    #[test]
    fn config_defaults() {
        let c = IndexConfig::default();
        assert!(c.suppress_single_synonym);
        assert!(!IndexConfig::verbatim().suppress_single_synonym);
        assert_eq!(c.max_results, 100);
    }
}
