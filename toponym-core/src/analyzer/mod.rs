//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Canonicalizer**: Folds raw text into canonical code points
//! - **Tokenizer**: Splits names on delimiter sets and trims partial tokens
//! - **Query**: Separates an in-progress query into complete and prefix tokens

pub mod canonicalizer;
pub mod query;
pub mod tokenizer;

pub use canonicalizer::{canonicalize, canonicalize_into};
pub use query::{split_query, QueryTokens};
pub use tokenizer::{for_each_token, is_query_delimiter, split, trim_last_token};
