//! Incremental query splitting.
//!
//! A query typed into a search box is usually still being typed: its last
//! token may be incomplete. [`split_query`] separates the complete tokens from
//! that trailing prefix so the former can be matched exactly and the latter
//! by prefix.

use smallvec::SmallVec;
use toponym_types::CanonicalForm;

use crate::analyzer::canonicalizer::canonicalize;
use crate::analyzer::tokenizer::{for_each_token_by, is_query_delimiter, trim_last_token};

/// Canonicalized tokens of an in-progress query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryTokens {
    /// Tokens the user has finished typing, in order.
    pub complete: SmallVec<[CanonicalForm; 4]>,
    /// The trailing token, when the query does not end on a delimiter.
    pub prefix: Option<CanonicalForm>,
}

impl QueryTokens {
    /// Returns true if the query carries no tokens at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.complete.is_empty() && self.prefix.is_none()
    }

    /// Iterates `(token, is_prefix)` in query order.
    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalForm, bool)> + '_ {
        self.complete
            .iter()
            .map(|t| (t, false))
            .chain(self.prefix.iter().map(|t| (t, true)))
    }
}

/// Splits `query` into complete tokens and a trailing prefix token.
///
/// Tokens whose canonical form is empty (a lone combining accent, say) are
/// dropped.
///
/// # Examples
///
/// ```
/// use toponym_core::analyzer::query::split_query;
///
/// let q = split_query("Rue de la Pa");
/// assert_eq!(q.complete.len(), 3);
/// assert_eq!(q.prefix.unwrap().to_string(), "pa");
/// ```
pub fn split_query(query: &str) -> QueryTokens {
    let head = trim_last_token(query);
    let tail = &query[head.len()..];

    let mut out = QueryTokens::default();
    for_each_token_by(head, is_query_delimiter, |token, _| {
        let form = canonicalize(token);
        if !form.is_empty() {
            out.complete.push(form);
        }
    });

    if !tail.is_empty() {
        let form = canonicalize(tail);
        if !form.is_empty() {
            out.prefix = Some(form);
        }
    }
    out
}
