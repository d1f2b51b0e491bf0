//! Index building logic.

use log::debug;
use toponym_types::{CanonicalForm, NameId};

use crate::index::types::{PostingBlock, StagedPosting, StreetIndex};

/// Sorted token table: `tokens[i]` owns `postings[blocks[i]]`.
pub(crate) type TokenTable = (Vec<CanonicalForm>, Vec<PostingBlock>, Vec<NameId>);

impl StreetIndex {
    /// Commits staged postings into the token table.
    ///
    /// ## Cold-start fast path
    ///
    /// When nothing is committed yet, the staged entries are sorted and
    /// grouped directly into the table.
    ///
    /// ## Incremental path
    ///
    /// Otherwise the staged entries are grouped into a delta table that is
    /// merge-joined with the committed one in O(N + Δ).
    pub fn commit(&mut self) {
        if self.staged.is_empty() {
            self.needs_commit = false;
            return;
        }

        let mut staged = std::mem::take(&mut self.staged);
        Self::sort_staged(&mut staged);
        let staged_len = staged.len();

        let (tokens, blocks, postings) = if self.tokens.is_empty() {
            Self::build_table_from_sorted(staged)
        } else {
            let delta = Self::build_table_from_sorted(staged);
            let committed = (
                std::mem::take(&mut self.tokens),
                std::mem::take(&mut self.blocks),
                std::mem::take(&mut self.postings),
            );
            Self::merge_tables(committed, delta)
        };

        self.tokens = tokens;
        self.blocks = blocks;
        self.postings = postings;
        self.needs_commit = false;

        debug!(
            "committed {} staged postings: {} tokens, {} postings",
            staged_len,
            self.tokens.len(),
            self.postings.len()
        );
    }

    pub(crate) fn sort_staged(entries: &mut [StagedPosting]) {
        entries.sort_unstable_by(|a, b| {
            a.token
                .cmp(&b.token)
                .then_with(|| a.name_id.cmp(&b.name_id))
        });
    }

    /// Groups `(token, id)` entries sorted by token then id, dropping repeated ids.
    pub(crate) fn build_table_from_sorted(entries: Vec<StagedPosting>) -> TokenTable {
        let mut tokens: Vec<CanonicalForm> = Vec::new();
        let mut blocks: Vec<PostingBlock> = Vec::new();
        let mut postings: Vec<NameId> = Vec::with_capacity(entries.len());

        for entry in entries {
            if tokens.last() != Some(&entry.token) {
                blocks.push(PostingBlock {
                    offset: postings.len() as u32,
                    len: 0,
                });
                tokens.push(entry.token);
            }

            let Some(block) = blocks.last_mut() else {
                continue;
            };
            let start = block.offset as usize;
            if postings[start..].last() != Some(&entry.name_id) {
                postings.push(entry.name_id);
                block.len += 1;
            }
        }

        (tokens, blocks, postings)
    }

    pub(crate) fn merge_tables(a: TokenTable, b: TokenTable) -> TokenTable {
        let (a_tokens, a_blocks, a_postings) = a;
        let (b_tokens, b_blocks, b_postings) = b;

        let mut out_tokens = Vec::with_capacity(a_tokens.len() + b_tokens.len());
        let mut out_blocks = Vec::with_capacity(a_blocks.len() + b_blocks.len());
        let mut out_postings = Vec::with_capacity(a_postings.len() + b_postings.len());

        let mut a_iter = a_tokens.into_iter().zip(a_blocks).peekable();
        let mut b_iter = b_tokens.into_iter().zip(b_blocks).peekable();

        loop {
            let order = match (a_iter.peek(), b_iter.peek()) {
                (Some((at, _)), Some((bt, _))) => at.cmp(bt),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => break,
            };

            let offset = out_postings.len() as u32;
            let token = match order {
                std::cmp::Ordering::Less => {
                    let Some((token, block)) = a_iter.next() else { break };
                    out_postings.extend_from_slice(Self::block_postings(&block, &a_postings));
                    token
                }
                std::cmp::Ordering::Greater => {
                    let Some((token, block)) = b_iter.next() else { break };
                    out_postings.extend_from_slice(Self::block_postings(&block, &b_postings));
                    token
                }
                std::cmp::Ordering::Equal => {
                    let (Some((token, a_block)), Some((_, b_block))) =
                        (a_iter.next(), b_iter.next())
                    else {
                        break;
                    };
                    Self::merge_sorted_dedup(
                        Self::block_postings(&a_block, &a_postings),
                        Self::block_postings(&b_block, &b_postings),
                        &mut out_postings,
                    );
                    token
                }
            };

            out_tokens.push(token);
            out_blocks.push(PostingBlock {
                offset,
                len: out_postings.len() as u32 - offset,
            });
        }

        (out_tokens, out_blocks, out_postings)
    }

    #[inline(always)]
    pub(crate) fn block_postings<'a>(block: &PostingBlock, postings: &'a [NameId]) -> &'a [NameId] {
        let start = block.offset as usize;
        &postings[start..start + block.len as usize]
    }

    pub(crate) fn merge_sorted_dedup(a: &[NameId], b: &[NameId], out: &mut Vec<NameId>) {
        let mut ai = 0usize;
        let mut bi = 0usize;

        while ai < a.len() && bi < b.len() {
            match a[ai].cmp(&b[bi]) {
                std::cmp::Ordering::Less => {
                    out.push(a[ai]);
                    ai += 1;
                }
                std::cmp::Ordering::Greater => {
                    out.push(b[bi]);
                    bi += 1;
                }
                std::cmp::Ordering::Equal => {
                    out.push(a[ai]);
                    ai += 1;
                    bi += 1;
                }
            }
        }

        out.extend_from_slice(&a[ai..]);
        out.extend_from_slice(&b[bi..]);
    }
}
