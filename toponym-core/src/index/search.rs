//! Query execution.

use smallvec::SmallVec;
use toponym_types::{CanonicalForm, NameId};

use crate::analyzer::query::split_query;
use crate::index::types::StreetIndex;
use crate::street::{build_key, feature_type_token};

impl StreetIndex {
    /// Searches for names matching an in-progress query.
    ///
    /// Complete query tokens match index tokens exactly; the trailing token
    /// matches by prefix. Street synonyms in the query are ignored unless the
    /// query has nothing else. Returns ids in ascending order, at most
    /// `max_results` of them.
    pub fn search(&mut self, query: &str) -> Vec<NameId> {
        if self.needs_commit {
            self.commit();
        }
        self.query_count += 1;

        let query = split_query(query);
        let terms: SmallVec<[(&CanonicalForm, bool); 8]> = query.iter().collect();
        let significant: SmallVec<[(&CanonicalForm, bool); 8]> = terms
            .iter()
            .copied()
            .filter(|&(token, is_prefix)| !self.dictionary.matches(token, is_prefix))
            .collect();
        let terms = if significant.is_empty() {
            terms
        } else {
            significant
        };

        let mut result: Option<Vec<NameId>> = None;
        for (token, is_prefix) in terms {
            let list = if is_prefix {
                self.prefix_postings(token)
            } else {
                self.exact_postings(token).to_vec()
            };
            let merged = match result {
                None => list,
                Some(acc) => intersect_sorted(&acc, &list),
            };
            let done = merged.is_empty();
            result = Some(merged);
            if done {
                break;
            }
        }

        let mut out = result.unwrap_or_default();
        out.truncate(self.config.max_results);
        out
    }

    /// Ids of names classified with `type_code`.
    pub fn names_with_type(&mut self, type_code: u32) -> Vec<NameId> {
        if self.needs_commit {
            self.commit();
        }
        self.exact_postings(&feature_type_token(type_code)).to_vec()
    }

    /// Ids of names whose street key equals that of `name`.
    ///
    /// Delimiter-insensitive: "St.-Petersburg" finds "St Petersburg".
    pub fn find_by_key(&self, name: &str) -> &[NameId] {
        self.keys
            .get(&build_key(name))
            .map(|ids| ids.as_slice())
            .unwrap_or(&[])
    }

    /// Posting list of an exact token in the committed table.
    pub fn exact_postings(&self, token: &CanonicalForm) -> &[NameId] {
        match self.tokens.binary_search(token) {
            Ok(i) => Self::block_postings(&self.blocks[i], &self.postings),
            Err(_) => &[],
        }
    }

    /// Union of the posting lists of every committed token starting with `prefix`.
    pub fn prefix_postings(&self, prefix: &CanonicalForm) -> Vec<NameId> {
        let (start, end) = self.prefix_range(prefix);
        let mut out: Vec<NameId> = self.blocks[start..end]
            .iter()
            .flat_map(|block| Self::block_postings(block, &self.postings))
            .copied()
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Range of `tokens` that start with `prefix`; contiguous because the table is sorted.
    pub(crate) fn prefix_range(&self, prefix: &CanonicalForm) -> (usize, usize) {
        let start = self.tokens.partition_point(|t| t < prefix);
        let len = self.tokens[start..].partition_point(|t| t.starts_with(prefix));
        (start, start + len)
    }
}

/// Intersection of two ascending id lists.
pub(crate) fn intersect_sorted(a: &[NameId], b: &[NameId]) -> Vec<NameId> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let mut ai = 0usize;
    let mut bi = 0usize;

    while ai < a.len() && bi < b.len() {
        match a[ai].cmp(&b[bi]) {
            std::cmp::Ordering::Less => ai += 1,
            std::cmp::Ordering::Greater => bi += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[ai]);
                ai += 1;
                bi += 1;
            }
        }
    }
    out
}
