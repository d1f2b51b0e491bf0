//! Index types and constants.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use toponym_types::{CanonicalForm, IndexConfig, NameId};

use crate::synonyms::SynonymDictionary;

/// Range of one token's posting list inside `StreetIndex::postings`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PostingBlock {
    pub offset: u32,
    pub len: u32,
}

/// A token occurrence waiting for the next commit.
#[derive(Clone, Debug)]
pub struct StagedPosting {
    pub token: CanonicalForm,
    pub name_id: NameId,
}

/// In-memory street-name index.
///
/// Names go through the full pipeline on insertion: query-delimiter
/// tokenization, canonicalization, then the street-synonym filter, whose
/// output is staged here. Staged postings are committed into the sorted
/// token table on the next search.
///
/// Threading: queries take `&mut self` because they may commit; share the
/// [`SynonymDictionary`], not the index.
pub struct StreetIndex {
    pub(crate) dictionary: Arc<SynonymDictionary>,
    pub(crate) config: IndexConfig,
    pub(crate) names: Vec<Box<str>>,
    pub(crate) keys: FxHashMap<CanonicalForm, SmallVec<[NameId; 2]>>,
    /// Sorted, unique; `blocks[i]` holds the postings of `tokens[i]`.
    pub(crate) tokens: Vec<CanonicalForm>,
    pub(crate) blocks: Vec<PostingBlock>,
    pub(crate) postings: Vec<NameId>,
    pub(crate) staged: Vec<StagedPosting>,
    pub(crate) needs_commit: bool,
    pub(crate) suppressed_synonyms: u64,
    pub(crate) query_count: u64,
}

impl StreetIndex {
    /// Creates an empty index with the default configuration.
    pub fn new(dictionary: Arc<SynonymDictionary>) -> Self {
        Self::with_config(dictionary, IndexConfig::default())
    }

    /// Creates an empty index with a custom configuration.
    pub fn with_config(dictionary: Arc<SynonymDictionary>, config: IndexConfig) -> Self {
        Self {
            dictionary,
            config,
            names: Vec::new(),
            keys: FxHashMap::default(),
            tokens: Vec::new(),
            blocks: Vec::new(),
            postings: Vec::new(),
            staged: Vec::new(),
            needs_commit: false,
            suppressed_synonyms: 0,
            query_count: 0,
        }
    }

    /// Returns the number of names in the index.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the index contains no names.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// The dictionary this index filters with.
    #[inline]
    pub fn dictionary(&self) -> &Arc<SynonymDictionary> {
        &self.dictionary
    }

    /// Removes all names and resets the index and its counters.
    pub fn clear(&mut self) {
        self.names.clear();
        self.keys.clear();
        self.tokens.clear();
        self.blocks.clear();
        self.postings.clear();
        self.staged.clear();
        self.needs_commit = false;
        self.suppressed_synonyms = 0;
        self.query_count = 0;
    }
}
