//! Statistics and IndexStats.

use crate::index::types::StreetIndex;

/// A snapshot of index statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of names in the index.
    pub num_names: usize,
    /// Number of distinct committed tokens.
    pub num_tokens: usize,
    /// Total number of committed postings.
    pub total_postings: usize,
    /// Postings waiting for the next commit.
    pub staged_postings: usize,
    /// Names whose only street synonym was kept out of the index.
    pub suppressed_synonyms: u64,
    /// Total number of searches executed.
    pub queries_executed: u64,
}

impl StreetIndex {
    /// Returns index statistics.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            num_names: self.names.len(),
            num_tokens: self.tokens.len(),
            total_postings: self.postings.len(),
            staged_postings: self.staged.len(),
            suppressed_synonyms: self.suppressed_synonyms,
            queries_executed: self.query_count,
        }
    }
}

impl core::fmt::Display for IndexStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} names, {} tokens, {} postings",
            self.num_names, self.num_tokens, self.total_postings
        )?;

        if self.staged_postings > 0 {
            write!(f, " ({} staged)", self.staged_postings)?;
        }

        write!(f, ", {} lone synonyms suppressed", self.suppressed_synonyms)
    }
}
