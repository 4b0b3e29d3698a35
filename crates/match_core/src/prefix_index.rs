//! Name-prefix index: a character trie over registered names.
//!
//! The index stores names, not ids, so two identities sharing a name occupy a
//! single entry. Children are kept in a `BTreeMap`, which makes
//! [`PrefixIndex::autocomplete`] return names in lexicographic order.
//!
//! All traversals are iterative; very long names cannot exhaust the call stack.

use std::collections::BTreeMap;
use std::fmt;

#[derive(Default)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    terminal: bool,
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

#[derive(Default)]
pub struct PrefixIndex {
    root: TrieNode,
    len: usize,
}

// A derived impl would walk the trie recursively, one frame per character.
impl fmt::Debug for PrefixIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixIndex")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct names in the index.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `name`. Returns `false` if it was already present.
    pub fn insert(&mut self, name: &str) -> bool {
        let mut node = &mut self.root;
        for c in name.chars() {
            node = node.children.entry(c).or_default();
        }
        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.len += 1;
        true
    }

    /// Exact membership: `true` only for a previously inserted full name.
    pub fn search(&self, name: &str) -> bool {
        self.find(name).is_some_and(|node| node.terminal)
    }

    /// `true` if any inserted name begins with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.find(prefix)
            .is_some_and(|node| node.terminal || !node.children.is_empty())
    }

    /// Remove `name`, pruning the branch that only served it.
    ///
    /// Returns `false` (and leaves the index untouched) if `name` was never inserted.
    pub fn delete(&mut self, name: &str) -> bool {
        let chars: Vec<char> = name.chars().collect();

        // Depth of the deepest node on the path that must survive: the root, a
        // node ending a shorter name, or a node with other branches.
        let mut keep_depth = 0;
        let mut node = &self.root;
        for (depth, c) in chars.iter().enumerate() {
            if depth > 0 && (node.terminal || node.children.len() > 1) {
                keep_depth = depth;
            }
            node = match node.children.get(c) {
                Some(next) => next,
                None => return false,
            };
        }
        if !node.terminal {
            return false;
        }
        let prune = node.children.is_empty();

        let mut node = &mut self.root;
        let walk_to = if prune { keep_depth } else { chars.len() };
        for c in &chars[..walk_to] {
            node = match node.children.get_mut(c) {
                Some(next) => next,
                None => return false,
            };
        }
        if prune && !chars.is_empty() {
            node.children.remove(&chars[keep_depth]);
        } else {
            node.terminal = false;
        }
        self.len -= 1;
        true
    }

    /// Every inserted name beginning with `prefix`, in lexicographic order.
    ///
    /// An unknown prefix yields an empty vector.
    pub fn autocomplete(&self, prefix: &str) -> Vec<String> {
        let mut results = Vec::new();
        let Some(start) = self.find(prefix) else {
            return results;
        };

        // Each frame records the byte length of `word` at its parent plus the
        // edge label leading to it.
        let mut word = prefix.to_string();
        let mut stack: Vec<(usize, Option<char>, &TrieNode)> = vec![(word.len(), None, start)];
        while let Some((parent_len, label, node)) = stack.pop() {
            word.truncate(parent_len);
            if let Some(c) = label {
                word.push(c);
            }
            if node.terminal {
                results.push(word.clone());
            }
            // Reverse push so the smallest child is popped first.
            let len = word.len();
            for (c, child) in node.children.iter().rev() {
                stack.push((len, Some(*c), child));
            }
        }
        results
    }

    fn find(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}
