//! Street synonym dictionary.
//!
//! An immutable set of canonical forms of generic address-component words,
//! queryable by exact match and by prefix. Build it once at startup and share
//! it as `Arc<SynonymDictionary>`; nothing mutates it afterwards, so any
//! number of threads may query it concurrently.
//!
//! ```
//! use toponym_core::analyzer::canonicalize;
//! use toponym_core::synonyms::SynonymDictionary;
//!
//! let dict = SynonymDictionary::builtin();
//! assert!(dict.is_street_synonym(&canonicalize("Street")));
//! assert!(dict.is_street_synonym_prefix(&canonicalize("str")));
//! assert!(!dict.is_street_synonym(&canonicalize("streetx")));
//! ```

pub mod trie;
pub mod words;

use std::io::BufRead;

use log::debug;
use toponym_types::{CanonicalForm, DictionaryError};

use crate::analyzer::canonicalizer::canonicalize_into;
use trie::CharTrie;
pub use words::STREET_SYNONYMS;

/// Prefix-queryable set of street-type words.
#[derive(Debug, Clone)]
pub struct SynonymDictionary {
    trie: CharTrie,
}

impl SynonymDictionary {
    /// Builds the dictionary from the compiled-in multi-language word list.
    pub fn builtin() -> Self {
        let mut trie = CharTrie::new();
        let mut buf = CanonicalForm::new();
        for word in STREET_SYNONYMS {
            canonicalize_into(word, &mut buf);
            trie.insert(buf.as_chars());
        }
        debug!(
            "built street synonym dictionary: {} entries, {} nodes",
            trie.len(),
            trie.node_count()
        );
        Self { trie }
    }

    /// Builds a dictionary from a custom word list.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::EmptyEntry` for a word that canonicalizes to
    /// nothing; such an entry would make every prefix query succeed.
    pub fn from_words<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = CharTrie::new();
        let mut buf = CanonicalForm::new();
        for (index, word) in words.into_iter().enumerate() {
            let raw = word.as_ref();
            canonicalize_into(raw, &mut buf);
            if buf.is_empty() {
                return Err(DictionaryError::EmptyEntry {
                    index,
                    raw: raw.to_owned(),
                });
            }
            trie.insert(buf.as_chars());
        }
        debug!(
            "built custom synonym dictionary: {} entries, {} nodes",
            trie.len(),
            trie.node_count()
        );
        Ok(Self { trie })
    }

    /// Reads one entry per line. Blank lines and lines starting with `#` are skipped.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures and the errors of [`SynonymDictionary::from_words`].
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            words.push(trimmed.to_owned());
        }
        Self::from_words(words)
    }

    /// Exact membership of a canonical form.
    #[inline]
    pub fn contains(&self, word: &CanonicalForm) -> bool {
        self.trie.contains(word.as_chars())
    }

    /// True if `word` is a code-point prefix of at least one entry.
    #[inline]
    pub fn is_prefix_of_entry(&self, word: &CanonicalForm) -> bool {
        self.trie.has_prefix(word.as_chars())
    }

    /// True if `token` is a complete street-type word.
    #[inline]
    pub fn is_street_synonym(&self, token: &CanonicalForm) -> bool {
        self.contains(token)
    }

    /// True if `token` could still become a street-type word as the user types.
    #[inline]
    pub fn is_street_synonym_prefix(&self, token: &CanonicalForm) -> bool {
        self.is_prefix_of_entry(token)
    }

    /// Classifies a token the way the emission filter does: prefix tokens by
    /// prefix match, complete tokens by exact match.
    #[inline]
    pub fn matches(&self, token: &CanonicalForm, is_prefix: bool) -> bool {
        if is_prefix {
            self.is_street_synonym_prefix(token)
        } else {
            self.is_street_synonym(token)
        }
    }

    /// Number of distinct entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Returns true if the dictionary has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Number of trie nodes, root included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.trie.node_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::canonicalize;
    use std::io::Cursor;
    use std::sync::Arc;

    fn is_syn(dict: &SynonymDictionary, s: &str) -> bool {
        dict.is_street_synonym(&canonicalize(s))
    }

    fn is_syn_prefix(dict: &SynonymDictionary, s: &str) -> bool {
        dict.is_street_synonym_prefix(&canonicalize(s))
    }

    #[test]
    fn builtin_membership() {
        let dict = SynonymDictionary::builtin();
        assert!(is_syn(&dict, "street"));
        assert!(is_syn(&dict, "STREET"));
        assert!(is_syn(&dict, "Straße"));
        assert!(is_syn(&dict, "улица"));
        assert!(is_syn(&dict, "Caddesi"));
        assert!(!is_syn(&dict, "streetx"));
        assert!(!is_syn(&dict, "main"));
    }

    #[test]
    fn accents_do_not_matter() {
        let dict = SynonymDictionary::builtin();
        assert!(is_syn(&dict, "CÔTE"));
        assert!(is_syn(&dict, "callejon"));
        assert!(is_syn(&dict, "CARRE"));
    }

    #[test]
    fn vietnamese_d_with_stroke() {
        let dict = SynonymDictionary::builtin();
        assert!(is_syn(&dict, "đường"));
        assert!(is_syn(&dict, "ĐƯỜNG"));
    }

    #[test]
    fn builtin_prefixes() {
        let dict = SynonymDictionary::builtin();
        assert!(is_syn_prefix(&dict, "str"));
        assert!(is_syn_prefix(&dict, "stree"));
        assert!(is_syn_prefix(&dict, "street"));
        assert!(is_syn_prefix(&dict, "бульв"));
        assert!(!is_syn_prefix(&dict, "streetx"));
        assert!(!is_syn_prefix(&dict, "xyz"));
    }

    #[test]
    fn builtin_size() {
        let dict = SynonymDictionary::builtin();
        assert!(dict.len() > 200);
        assert!(dict.len() <= STREET_SYNONYMS.len());
        assert!(dict.node_count() > dict.len());
    }

    #[test]
    fn every_builtin_word_is_a_member() {
        let dict = SynonymDictionary::builtin();
        for word in STREET_SYNONYMS {
            assert!(is_syn(&dict, word), "{word} missing");
            assert!(is_syn_prefix(&dict, word), "{word} missing as prefix");
        }
    }

    #[test]
    fn matches_dispatches_on_prefix_flag() {
        let dict = SynonymDictionary::builtin();
        let stre = canonicalize("stre");
        assert!(dict.matches(&stre, true));
        assert!(!dict.matches(&stre, false));
    }

    #[test]
    fn custom_words() {
        let dict = SynonymDictionary::from_words(["Gasse", "Weg"]).expect("valid list");
        assert_eq!(dict.len(), 2);
        assert!(is_syn(&dict, "gasse"));
        assert!(!is_syn(&dict, "street"));
    }

    #[test]
    fn custom_words_reject_empty_entries() {
        let err = SynonymDictionary::from_words(["rue", "\u{0301}"]).unwrap_err();
        assert!(matches!(err, DictionaryError::EmptyEntry { index: 1, .. }));
    }

    #[test]
    fn from_reader_skips_comments() {
        let text = "# French\nrue\n\n  avenue  \n# done\n";
        let dict = SynonymDictionary::from_reader(Cursor::new(text)).expect("valid list");
        assert_eq!(dict.len(), 2);
        assert!(is_syn(&dict, "avenue"));
    }

    #[test]
    fn shared_across_threads() {
        let dict = Arc::new(SynonymDictionary::builtin());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let dict = Arc::clone(&dict);
                std::thread::spawn(move || is_syn(&dict, "avenue") && !is_syn(&dict, "garden"))
            })
            .collect();
        for h in handles {
            assert!(h.join().unwrap());
        }
    }
}
