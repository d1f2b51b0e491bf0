//! Public API for adding and retrieving names.

use log::trace;
use smallvec::SmallVec;
use toponym_types::{CanonicalForm, NameError, NameId};

use crate::analyzer::canonicalizer::canonicalize;
use crate::analyzer::tokenizer::{for_each_token_by, is_query_delimiter};
use crate::filter::StreetTokensFilter;
use crate::index::types::{StagedPosting, StreetIndex};
use crate::street::{build_key, feature_type_token};

impl StreetIndex {
    /// Adds a name to the index.
    ///
    /// # Errors
    ///
    /// Returns `NameError::TooLong` if the name exceeds the configured length,
    /// `NameError::Empty` if it has no tokens, and
    /// `NameError::CapacityExhausted` once `u32::MAX` names are stored.
    pub fn add(&mut self, name: &str) -> Result<NameId, NameError> {
        self.add_inner(name, None)
    }

    /// Adds a name and indexes its classification code as well.
    ///
    /// # Errors
    ///
    /// Same as [`StreetIndex::add`].
    pub fn add_with_type(&mut self, name: &str, type_code: u32) -> Result<NameId, NameError> {
        self.add_inner(name, Some(type_code))
    }

    fn add_inner(&mut self, name: &str, type_code: Option<u32>) -> Result<NameId, NameError> {
        if name.len() > self.config.max_name_length {
            return Err(NameError::TooLong {
                size: name.len(),
                max_size: self.config.max_name_length,
            });
        }

        let name_id = NameId::try_from(self.names.len())
            .ok()
            .filter(|&id| id < NameId::MAX)
            .ok_or(NameError::CapacityExhausted)?;

        let mut tokens: SmallVec<[CanonicalForm; 8]> = SmallVec::new();
        for_each_token_by(name, is_query_delimiter, |token, _| {
            let form = canonicalize(token);
            if !form.is_empty() {
                tokens.push(form);
            }
        });
        if tokens.is_empty() {
            return Err(NameError::Empty);
        }

        let staged = &mut self.staged;
        if self.config.suppress_single_synonym {
            let mut filter = StreetTokensFilter::new(&self.dictionary, |token, id: NameId| {
                staged.push(StagedPosting { token, name_id: id });
            });
            for token in tokens {
                filter.put(token, false, name_id);
            }
            if let Some((held, _)) = filter.into_pending() {
                trace!("name {name_id}: lone synonym {held} not indexed");
                self.suppressed_synonyms += 1;
            }
        } else {
            staged.extend(tokens.into_iter().map(|token| StagedPosting { token, name_id }));
        }

        if let Some(code) = type_code {
            self.staged.push(StagedPosting {
                token: feature_type_token(code),
                name_id,
            });
        }

        self.keys.entry(build_key(name)).or_default().push(name_id);
        self.names.push(name.into());
        self.needs_commit = true;
        Ok(name_id)
    }

    /// Adds multiple names.
    ///
    /// Returns a tuple of (success_count, error_count) and the last error encountered.
    pub fn add_batch(&mut self, names: &[&str]) -> (usize, usize, Option<NameError>) {
        let mut added = 0;
        let mut failed = 0;
        let mut last_error = None;

        for name in names {
            match self.add(name) {
                Ok(_) => added += 1,
                Err(e) => {
                    failed += 1;
                    last_error = Some(e);
                }
            }
        }
        (added, failed, last_error)
    }

    /// Retrieves a name by its id, as it was added.
    #[inline]
    pub fn get(&self, name_id: NameId) -> Option<&str> {
        self.names.get(name_id as usize).map(|name| &**name)
    }
}
