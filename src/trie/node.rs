// Copyright (c) 2025 Lanai Trie Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Node implementation for the Lanai Prefix Trie.
//!
//! Nodes are the fundamental building blocks of the trie. Each node
//! represents one character along a path from the root, owns its child
//! nodes outright, and carries a terminal flag marking whether the path
//! ending at it spells a stored string.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::collections::HashSet;

/// Reserved key for the root node, distinct from any valid input character.
pub(crate) const EMPTY_KEY: char = '\0';

/// A single vertex of the trie.
///
/// Every operation takes the *remaining suffix* of the string being
/// operated on as a `&[char]` slice and consumes one character per
/// recursion level.
#[derive(Debug)]
pub(crate) struct TrieNode {
    /// The character this node represents along the path from the root
    key: char,

    /// Map of characters to exclusively owned child nodes
    children: HashMap<char, TrieNode>,

    /// Whether the path from the root to this node spells a stored string
    is_end_of_string: bool,
}

impl TrieNode {
    /// Creates an empty, non-terminal node for the given key.
    pub(crate) fn new(key: char) -> Self {
        Self {
            key,
            children: HashMap::new(),
            is_end_of_string: false,
        }
    }

    /// Creates a node for `key` and immediately consumes `suffix`,
    /// building out the missing path below it.
    ///
    /// An empty suffix means this node itself terminates the string.
    fn with_suffix(key: char, suffix: &[char]) -> Self {
        let mut node = Self::new(key);
        if suffix.is_empty() {
            node.is_end_of_string = true;
        } else {
            node.add(suffix);
        }
        node
    }

    /// Inserts the remaining `suffix` below this node.
    ///
    /// Returns `true` if the string was newly inserted, `false` if the
    /// terminal node already carried the flag.
    pub(crate) fn add(&mut self, suffix: &[char]) -> bool {
        let Some((&next, rest)) = suffix.split_first() else {
            let contained = self.is_end_of_string;
            self.is_end_of_string = true;
            return !contained;
        };

        match self.children.entry(next) {
            Entry::Occupied(entry) => entry.into_mut().add(rest),
            Entry::Vacant(entry) => {
                // A brand-new path is always a new insertion.
                entry.insert(TrieNode::with_suffix(next, rest));
                true
            }
        }
    }

    /// Lazily removes the remaining `suffix` below this node.
    ///
    /// Only the terminal flag is cleared; the node and any now-dead
    /// branch above it stay in the tree (tombstone deletion). Returns
    /// `true` if the string was present.
    pub(crate) fn remove(&mut self, suffix: &[char]) -> bool {
        let Some((&next, rest)) = suffix.split_first() else {
            let contained = self.is_end_of_string;
            self.is_end_of_string = false;
            return contained;
        };

        match self.children.get_mut(&next) {
            Some(child) => child.remove(rest),
            None => false,
        }
    }

    /// Resolves the node reached by walking `prefix` from this node.
    ///
    /// An empty prefix resolves to this node itself; `None` means the
    /// path broke at some character. This is the shared primitive for
    /// both membership tests and prefix enumeration.
    pub(crate) fn find_child_by_prefix(&self, prefix: &[char]) -> Option<&TrieNode> {
        match prefix.split_first() {
            None => Some(self),
            Some((&next, rest)) => self.children.get(&next)?.find_child_by_prefix(rest),
        }
    }

    /// Collects every stored string at or below this node into `results`.
    ///
    /// Pre-order walk with a shared path buffer: this node's key is
    /// appended on entry and popped on exit, so sibling branches never
    /// observe each other's characters. Children are visited in
    /// arbitrary order.
    pub(crate) fn collect_strings(&self, buffer: &mut String, results: &mut HashSet<String>) {
        buffer.push(self.key);
        if self.is_end_of_string {
            results.insert(buffer.clone());
        }
        for child in self.children.values() {
            child.collect_strings(buffer, results);
        }
        buffer.pop();
    }

    /// Number of stored strings at or below this node. O(n) walk.
    pub(crate) fn count_strings(&self) -> usize {
        let mut count = usize::from(self.is_end_of_string);
        for child in self.children.values() {
            count += child.count_strings();
        }
        count
    }

    /// Whether this node terminates a stored string.
    pub(crate) fn is_end_of_string(&self) -> bool {
        self.is_end_of_string
    }

    /// Whether this node has no children. Useful for future pruning
    /// extensions; the public trie surface only needs it for its
    /// emptiness check.
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
