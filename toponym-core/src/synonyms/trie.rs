//! Arena-backed code-point trie.
//!
//! All nodes live in one `Vec` and refer to their children by index, so the
//! whole structure is a flat allocation with no parent/child ownership.
//!
//! ## Memory Layout
//!
//! ```text
//! nodes: [root][s][t][r]...[a][v]...
//!          |    ^
//!          +----+ children: sorted (code point, node index) pairs
//! ```
//!
//! Children are kept sorted by code point and looked up by binary search;
//! street words fan out widely only at the root.

use smallvec::SmallVec;

/// Index of a node in the arena.
pub type NodeId = u32;

const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: SmallVec<[(char, NodeId); 4]>,
    terminal: bool,
}

impl TrieNode {
    #[inline]
    fn child(&self, c: char) -> Option<NodeId> {
        self.children
            .binary_search_by_key(&c, |&(k, _)| k)
            .ok()
            .map(|i| self.children[i].1)
    }
}

/// A set of code-point sequences supporting exact and prefix queries.
#[derive(Debug, Clone)]
pub struct CharTrie {
    nodes: Vec<TrieNode>,
    entries: usize,
}

impl Default for CharTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl CharTrie {
    /// Creates a trie holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            entries: 0,
        }
    }

    /// Inserts `key`. Returns false if it was already present.
    pub fn insert(&mut self, key: &[char]) -> bool {
        let mut node = ROOT;
        for &c in key {
            let found = self.nodes[node as usize]
                .children
                .binary_search_by_key(&c, |&(k, _)| k);
            node = match found {
                Ok(i) => self.nodes[node as usize].children[i].1,
                Err(i) => {
                    let id = self.nodes.len() as NodeId;
                    self.nodes.push(TrieNode::default());
                    self.nodes[node as usize].children.insert(i, (c, id));
                    id
                }
            };
        }

        let terminal = &mut self.nodes[node as usize].terminal;
        if *terminal {
            return false;
        }
        *terminal = true;
        self.entries += 1;
        true
    }

    /// Walks `key` from the root and returns the node it ends on.
    #[inline]
    fn find(&self, key: &[char]) -> Option<NodeId> {
        key.iter()
            .try_fold(ROOT, |node, &c| self.nodes[node as usize].child(c))
    }

    /// Exact membership.
    #[inline]
    pub fn contains(&self, key: &[char]) -> bool {
        self.find(key)
            .is_some_and(|node| self.nodes[node as usize].terminal)
    }

    /// True if `key` is a prefix of at least one entry (entries are prefixes of themselves).
    ///
    /// Nodes are only ever created on the path of an inserted entry, so any
    /// reachable node leads to one.
    #[inline]
    pub fn has_prefix(&self, key: &[char]) -> bool {
        self.entries > 0 && self.find(key).is_some()
    }

    /// Number of distinct entries.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries
    }

    /// Returns true if nothing has been inserted.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Number of nodes in the arena, root included.
    #[inline(always)]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
