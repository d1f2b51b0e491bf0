//! In-memory street-name index.
//!
//! The reference sink of the analysis pipeline. Each added name is
//! tokenized, canonicalized and passed through the street-synonym filter;
//! the forwarded tokens become postings.
//!
//! Memory Layout:
//! - Distinct tokens are kept in one sorted vector, searched by binary search
//!   for exact tokens and by a contiguous range for prefixes
//! - Posting lists are stored in a single contiguous array; each token's
//!   block is an (offset, len) pair into it
//! - New postings are staged and merged into the table on the next query
//!
//! Threading:
//! - [`StreetIndex`] is not meant to be shared for writes. The
//!   [`SynonymDictionary`](crate::synonyms::SynonymDictionary) it filters
//!   with is shared through an `Arc`.

mod api;
mod builder;
mod search;
mod stats;
mod types;

pub use stats::IndexStats;
pub use types::StreetIndex;
