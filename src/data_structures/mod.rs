//! Data structures for Kumu.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Strict single ownership of every node, no reference counting

pub mod kumu_trie;

// Re-export common data structures
pub use kumu_trie::{DeleteOutcome, KumuTrie, KumuTrieError, KumuTrieResult};
