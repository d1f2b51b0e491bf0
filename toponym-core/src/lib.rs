//! Address and place-name normalization and matching.
//!
//! The pipeline, bottom-up:
//!
//! - [`analyzer`]: canonical folding of raw text, delimiter tokenization,
//!   query splitting
//! - [`synonyms`]: the prefix-queryable set of street-type words
//! - [`filter`]: the per-name state machine that keeps a lone street word
//!   out of the index
//! - [`street`]: street keys and canonical containment
//! - [`index`]: an in-memory index driving all of the above
//!
//! ```
//! use std::sync::Arc;
//! use toponym_core::{StreetIndex, SynonymDictionary};
//!
//! let mut index = StreetIndex::new(Arc::new(SynonymDictionary::builtin()));
//! index.add("Baker Street").unwrap();
//! index.add("Bakery Lane").unwrap();
//!
//! assert_eq!(index.search("bake"), vec![0, 1]);
//! assert_eq!(index.search("baker str"), vec![0]);
//! ```

pub mod analyzer;
pub mod filter;
pub mod index;
pub mod street;
pub mod synonyms;

pub use analyzer::{canonicalize, canonicalize_into, split, split_query, trim_last_token};
pub use filter::{Emission, FilterState, StreetTokensFilter};
pub use index::{IndexStats, StreetIndex};
pub use street::{build_key, contains_normalized, feature_type_token};
pub use synonyms::SynonymDictionary;
pub use toponym_types::{
    CanonicalForm, Delimiters, DictionaryError, IndexConfig, NameError, NameId, STREET_DELIMITERS,
};
