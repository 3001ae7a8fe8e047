// Copyright (c) 2025 Lanai Trie Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Lanai Prefix Trie Library
//!
//! This library provides a character-level prefix tree (trie) for
//! storing a set of strings, supporting insertion, lazy deletion,
//! exact membership queries, and prefix-based enumeration of stored
//! strings.
//!
//! # Architecture
//!
//! The crate is designed with the following principles in mind:
//! - Tree ownership: every node exclusively owns its children
//! - Lazy deletion: removal clears terminal flags, never prunes nodes
//! - Total operations: every public call returns a value, never fails
//! - Character-level granularity: one Unicode scalar value per level

// Re-export public modules
pub mod trie;

pub use trie::{LanaiTrie, LanaiTrieConfig};

/// Version information for the Lanai Prefix Trie library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
