// Copyright (c) 2025 Lanai Trie Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Lanai Prefix Trie implementation.
//!
//! This module provides a character-level trie for storing a set of
//! strings with fast exact membership queries and prefix-based
//! enumeration of stored members.
//!
//! # Features
//!
//! * Exact membership queries distinguishing stored strings from mere
//!   path prefixes
//! * Prefix enumeration returning every stored string below a prefix
//! * Lazy, tombstone-based deletion (removed branches are never pruned)
//! * Case-sensitive matching (configurable)
//!
//! # Example
//!
//! ```
//! use lanai_trie::LanaiTrie;
//!
//! let mut trie = LanaiTrie::new();
//!
//! assert!(trie.add("hello"));
//! assert!(trie.add("hover"));
//!
//! assert!(trie.find("hello"));
//! assert!(!trie.find("hell")); // path prefix, not a member
//!
//! let matches = trie.find_all("h");
//! assert_eq!(matches.len(), 2);
//!
//! assert!(trie.remove("hello"));
//! assert!(!trie.find("hello"));
//! ```
//!
//! # Deletion Strategy
//!
//! Removal only clears the terminal flag of the node ending the string;
//! the node and any now-dead branch above it stay in the tree. Memory
//! is traded for simplicity: re-inserting a removed string touches no
//! allocations, and no parent bookkeeping is needed during removal.

mod config;
mod node;

#[cfg(test)]
mod tests;

use std::borrow::Cow;
use std::collections::HashSet;

use tracing::trace;

pub use config::LanaiTrieConfig;
use node::{TrieNode, EMPTY_KEY};

/// Lanai Prefix Trie is a character-level trie storing a set of strings
/// with exact membership queries and prefix enumeration.
///
/// The empty string is the one special-cased input across all four
/// operations: it is never stored, always reported present (it is the
/// trivial prefix of everything and maps to the root), always
/// "removable", and enumerates to nothing.
#[derive(Debug)]
pub struct LanaiTrie {
    /// The root node, representing the empty prefix. Its terminal flag
    /// is never set by any public operation.
    root: TrieNode,

    /// Configuration options
    config: LanaiTrieConfig,
}

impl LanaiTrie {
    /// Creates a new empty `LanaiTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(LanaiTrieConfig::default())
    }

    /// Creates a new empty `LanaiTrie` with the specified configuration.
    pub fn with_config(config: LanaiTrieConfig) -> Self {
        Self {
            root: TrieNode::new(EMPTY_KEY),
            config,
        }
    }

    /// Inserts a string into the trie.
    ///
    /// Returns `true` if the trie did not contain the string before.
    /// Adding the empty string always returns `false`; it is never
    /// stored as a member.
    pub fn add<S: AsRef<str>>(&mut self, string: S) -> bool {
        let string = self.normalize(string.as_ref());
        if string.is_empty() {
            return false;
        }

        let chars: Vec<char> = string.chars().collect();
        let inserted = self.root.add(&chars);
        trace!(string = %string, inserted, "trie add");
        inserted
    }

    /// Removes a string from the trie.
    ///
    /// Returns `true` if the trie contained the string. Removing the
    /// empty string always returns `true` (vacuously removed, matching
    /// its treatment in [`find`](Self::find)). Removal is lazy: no
    /// nodes are deallocated.
    pub fn remove<S: AsRef<str>>(&mut self, string: S) -> bool {
        let string = self.normalize(string.as_ref());
        if string.is_empty() {
            return true;
        }

        let chars: Vec<char> = string.chars().collect();
        let removed = self.root.remove(&chars);
        trace!(string = %string, removed, "trie remove");
        removed
    }

    /// Checks whether a string is a member of the trie.
    ///
    /// The empty string is always reported present: it is the trivial
    /// prefix of everything and maps to the root, which always exists.
    pub fn find<S: AsRef<str>>(&self, string: S) -> bool {
        let string = self.normalize(string.as_ref());
        if string.is_empty() {
            return true;
        }

        let chars: Vec<char> = string.chars().collect();
        // A resolvable path is not enough: a node existing on the path
        // does not imply the string ending there was ever added. Only
        // the terminal flag does.
        let found = self
            .root
            .find_child_by_prefix(&chars)
            .is_some_and(TrieNode::is_end_of_string);
        trace!(string = %string, found, "trie find");
        found
    }

    /// Returns every stored string sharing the given prefix.
    ///
    /// The empty prefix returns an empty set rather than every stored
    /// string; so does a prefix whose path does not exist in the trie.
    pub fn find_all<P: AsRef<str>>(&self, prefix: P) -> HashSet<String> {
        let prefix = self.normalize(prefix.as_ref());
        let mut results = HashSet::new();
        if prefix.is_empty() {
            return results;
        }

        let chars: Vec<char> = prefix.chars().collect();
        if let Some(node) = self.root.find_child_by_prefix(&chars) {
            // Seed the walk with the prefix minus its last character;
            // the resolved node's own key supplies that character.
            let mut buffer: String = chars[..chars.len() - 1].iter().collect();
            node.collect_strings(&mut buffer, &mut results);
        }
        trace!(prefix = %prefix, matches = results.len(), "trie find_all");
        results
    }

    /// Returns the number of strings stored in the trie.
    ///
    /// This walks the entire trie, so it is an O(n) operation.
    pub fn len(&self) -> usize {
        self.root.count_strings()
    }

    /// Checks whether the trie stores no strings and holds no branches.
    ///
    /// Tombstoned branches count as non-empty: a trie that had members
    /// removed still occupies their nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf() && !self.root.is_end_of_string()
    }

    /// Clears all strings and branches from the trie.
    pub fn clear(&mut self) {
        self.root = TrieNode::new(EMPTY_KEY);
    }

    fn normalize<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if self.config.case_sensitive {
            Cow::Borrowed(input)
        } else {
            Cow::Owned(input.to_lowercase())
        }
    }
}

impl Default for LanaiTrie {
    fn default() -> Self {
        Self::new()
    }
}
