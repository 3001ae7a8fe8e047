// Copyright (c) 2025 Lanai Trie Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Integration tests for the Lanai Prefix Trie.
//!
//! Exercises the public API end to end, including the empty-string
//! boundary behavior shared by all four operations.

use std::collections::HashSet;

use lanai_trie::{LanaiTrie, LanaiTrieConfig};

fn to_set(strings: &[&str]) -> HashSet<String> {
    strings.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_add() {
    let mut trie = LanaiTrie::new();

    assert!(!trie.add(""));

    assert!(trie.add("hello"));
    assert!(!trie.add("hello"));

    trie.remove("hello");
    assert!(trie.add("hello"));
}

#[test]
fn test_find() {
    let mut trie = LanaiTrie::new();

    assert!(trie.find(""));
    assert!(!trie.find("notfound"));

    trie.add("contains");
    assert!(trie.find("contains"));
}

#[test]
fn test_remove() {
    let mut trie = LanaiTrie::new();

    assert!(trie.remove(""));
    assert!(!trie.remove("hello"));

    trie.add("hello");
    assert!(trie.remove("hello"));
    assert!(!trie.remove("hello"));
}

#[test]
fn test_find_all() {
    let mut trie = LanaiTrie::new();

    assert!(trie.find_all("").is_empty());

    trie.add("hello");
    assert_eq!(trie.find_all("h"), to_set(&["hello"]));

    trie.add("hover");
    assert_eq!(trie.find_all("h"), to_set(&["hello", "hover"]));
    assert_eq!(trie.find_all("ho"), to_set(&["hover"]));
    assert_eq!(trie.find_all("hello"), to_set(&["hello"]));

    // The empty prefix stays empty regardless of contents.
    assert!(trie.find_all("").is_empty());
}

#[test]
fn test_shared_prefix_members_are_independent() {
    let mut trie = LanaiTrie::new();

    trie.add("car");
    trie.add("card");
    trie.add("cargo");

    assert!(trie.remove("card"));
    assert!(trie.find("car"));
    assert!(trie.find("cargo"));
    assert!(!trie.find("card"));
    assert_eq!(trie.find_all("car"), to_set(&["car", "cargo"]));
}

#[test]
fn test_find_distinguishes_path_from_member() {
    let mut trie = LanaiTrie::new();

    trie.add("cargo");
    assert!(!trie.find("car"));
    assert_eq!(trie.find_all("car"), to_set(&["cargo"]));

    trie.add("car");
    assert!(trie.find("car"));
    assert_eq!(trie.find_all("car"), to_set(&["car", "cargo"]));
}

#[test]
fn test_len_and_clear() {
    let mut trie = LanaiTrie::new();
    assert!(trie.is_empty());
    assert_eq!(trie.len(), 0);

    trie.add("alpha");
    trie.add("beta");
    trie.add("alpha");
    assert_eq!(trie.len(), 2);

    trie.remove("alpha");
    assert_eq!(trie.len(), 1);

    trie.clear();
    assert!(trie.is_empty());
    assert_eq!(trie.len(), 0);
}

#[test]
fn test_case_insensitive_trie() {
    let config = LanaiTrieConfig::new().with_case_sensitive(false);
    let mut trie = LanaiTrie::with_config(config);

    trie.add("Hello");
    assert!(trie.find("hELLO"));
    assert_eq!(trie.find_all("HE"), to_set(&["hello"]));
    assert!(trie.remove("HELLO"));
    assert!(!trie.find("hello"));
}

#[test]
fn test_large_member_set() {
    let mut trie = LanaiTrie::new();

    let members: Vec<String> = (0..1000).map(|i| format!("key_{i:04}")).collect();
    for member in &members {
        assert!(trie.add(member));
    }
    assert_eq!(trie.len(), members.len());

    for member in &members {
        assert!(trie.find(member));
    }

    let with_prefix = trie.find_all("key_09");
    assert_eq!(with_prefix.len(), 100);
    assert!(with_prefix.iter().all(|m| m.starts_with("key_09")));
}
