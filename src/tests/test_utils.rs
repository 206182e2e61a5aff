//! Test utilities and fixtures for Kumu.
//!
//! Strategies here draw from a deliberately small alphabet so generated keys
//! share prefixes often, which is where insertion and pruning interact.

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;

/// Maximum length of generated keys.
const MAX_KEY_LENGTH: usize = 5;

/// Maximum number of operations in a generated sequence.
const MAX_OPERATIONS: usize = 64;

/// A single mutation applied to both the trie and its model.
#[derive(Debug, Clone)]
pub enum TrieOperation {
    /// Insert a key
    Insert(String),
    /// Delete a key
    Delete(String),
}

/// Generate lowercase keys over `a`-`d`, one to five characters long.
pub fn key_strategy() -> BoxedStrategy<String> {
    proptest::collection::vec(proptest::char::range('a', 'd'), 1..=MAX_KEY_LENGTH)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .boxed()
}

/// Generate a sequence of inserts and deletes.
pub fn operation_strategy() -> BoxedStrategy<Vec<TrieOperation>> {
    let operation = prop_oneof![
        3 => key_strategy().prop_map(TrieOperation::Insert),
        2 => key_strategy().prop_map(TrieOperation::Delete),
    ];
    proptest::collection::vec(operation, 0..MAX_OPERATIONS).boxed()
}
