// Copyright (c) 2025 Lanai Trie Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Property-based tests for the Lanai Prefix Trie.
