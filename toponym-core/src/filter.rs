//! Street-synonym token filter.
//!
//! Decides, token by token, which canonical tokens of one name reach the
//! index. A single generic street word ("Main *Street*") is redundant and is
//! held back; once a second synonym shows up in the same name, the held word
//! is released together with every later token, because a name with two such
//! words ("Square Garden Square") is unusual enough that all of them matter.
//!
//! ## States
//!
//! ```text
//!            synonym                 synonym
//!   Idle ─────────────▶ Holding ─────────────▶ Passthrough
//!    ▲ │ other             │ other                 │ any
//!    └─┘ (forward)         └─ (forward, keep held) └─ (forward)
//! ```
//!
//! A token still held when the name ends is never forwarded. Use one filter
//! per name: state is not reset between names.

use toponym_types::CanonicalForm;

use crate::synonyms::SynonymDictionary;

/// Filter state for one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterState<T> {
    /// No synonym seen yet.
    Idle,
    /// Exactly one synonym seen; it is held here instead of being forwarded.
    Holding {
        /// The held token.
        token: CanonicalForm,
        /// Its caller-supplied tag.
        tag: T,
    },
    /// Two or more synonyms seen; everything is forwarded.
    Passthrough,
}

impl<T> Default for FilterState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

/// Tokens a single transition forwards, in forwarding order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission<T> {
    /// Nothing is forwarded.
    Nothing,
    /// One token is forwarded.
    One(CanonicalForm, T),
    /// The previously held token, then the current one.
    Two((CanonicalForm, T), (CanonicalForm, T)),
}

impl<T> Emission<T> {
    /// Hands every forwarded `(token, tag)` to `sink`, in order.
    #[inline]
    pub fn for_each<F: FnMut(CanonicalForm, T)>(self, mut sink: F) {
        match self {
            Emission::Nothing => {}
            Emission::One(token, tag) => sink(token, tag),
            Emission::Two((held, held_tag), (token, tag)) => {
                sink(held, held_tag);
                sink(token, tag);
            }
        }
    }

    /// Number of forwarded tokens.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Emission::Nothing => 0,
            Emission::One(..) => 1,
            Emission::Two(..) => 2,
        }
    }

    /// Returns true if nothing is forwarded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Emission::Nothing)
    }
}

impl<T> FilterState<T> {
    /// The transition function: consumes the state and one classified token.
    ///
    /// Non-synonym tokens never change the state and are always forwarded.
    pub fn step(self, token: CanonicalForm, tag: T, is_synonym: bool) -> (Self, Emission<T>) {
        if !is_synonym {
            return (self, Emission::One(token, tag));
        }
        match self {
            FilterState::Idle => (FilterState::Holding { token, tag }, Emission::Nothing),
            FilterState::Holding {
                token: held,
                tag: held_tag,
            } => (
                FilterState::Passthrough,
                Emission::Two((held, held_tag), (token, tag)),
            ),
            FilterState::Passthrough => (FilterState::Passthrough, Emission::One(token, tag)),
        }
    }
}

/// Forwards the significant tokens of one name to a sink.
///
/// # Example
///
/// ```
/// use toponym_core::analyzer::canonicalize;
/// use toponym_core::filter::StreetTokensFilter;
/// use toponym_core::synonyms::SynonymDictionary;
///
/// let dict = SynonymDictionary::builtin();
/// let mut kept = Vec::new();
/// let mut filter = StreetTokensFilter::new(&dict, |token, pos: u32| kept.push((token.to_string(), pos)));
///
/// for (pos, word) in ["Main", "Street"].into_iter().enumerate() {
///     filter.put(canonicalize(word), false, pos as u32);
/// }
/// drop(filter);
///
/// assert_eq!(kept, vec![("main".to_string(), 0)]);
/// ```
pub struct StreetTokensFilter<'d, T, F>
where
    F: FnMut(CanonicalForm, T),
{
    dictionary: &'d SynonymDictionary,
    state: FilterState<T>,
    sink: F,
}

impl<'d, T, F> StreetTokensFilter<'d, T, F>
where
    F: FnMut(CanonicalForm, T),
{
    /// Creates a filter in the `Idle` state.
    pub fn new(dictionary: &'d SynonymDictionary, sink: F) -> Self {
        Self {
            dictionary,
            state: FilterState::Idle,
            sink,
        }
    }

    /// Feeds one token.
    ///
    /// `is_prefix` marks the last, possibly incomplete token of a query; it is
    /// classified by prefix match instead of exact match.
    pub fn put(&mut self, token: CanonicalForm, is_prefix: bool, tag: T) {
        let is_synonym = self.dictionary.matches(&token, is_prefix);
        let state = std::mem::take(&mut self.state);
        let (next, emission) = state.step(token, tag, is_synonym);
        self.state = next;
        emission.for_each(&mut self.sink);
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> &FilterState<T> {
        &self.state
    }

    /// Ends the name and returns the held token that was never forwarded, if any.
    pub fn into_pending(self) -> Option<(CanonicalForm, T)> {
        match self.state {
            FilterState::Holding { token, tag } => Some((token, tag)),
            _ => None,
        }
    }
}
