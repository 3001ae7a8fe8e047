// Copyright (c) 2025 Lanai Trie Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Configuration for the Lanai Prefix Trie.

/// Configuration options for the Lanai Prefix Trie.
#[derive(Debug, Clone)]
pub struct LanaiTrieConfig {
    /// Whether stored strings are matched case-sensitively.
    ///
    /// When disabled, inputs to every operation are lowercased before
    /// processing, so `add("Hello")` and `find("hello")` refer to the
    /// same member.
    pub case_sensitive: bool,
}

impl Default for LanaiTrieConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

impl LanaiTrieConfig {
    /// Creates a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether matching should be case-sensitive.
    pub fn with_case_sensitive(mut self, value: bool) -> Self {
        self.case_sensitive = value;
        self
    }
}
