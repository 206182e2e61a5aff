//! Error types for the Kumu Trie.
//!
//! This module defines the error types that can occur during Kumu Trie operations.
//! Absent keys and keys missing on delete are outcomes, not errors, and are
//! reported through return values instead.

/// Errors that can occur in Kumu Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum KumuTrieError {
    /// Error when an empty key is inserted.
    #[error("Empty key not allowed")]
    EmptyKey,

    /// Error when a key contains a character outside `a`-`z`.
    #[error("Invalid character {character:?} at position {position} in key '{key}'")]
    InvalidCharacter {
        /// The offending key, after case folding.
        key: String,
        /// The character that has no child slot.
        character: char,
        /// Character position of the offending character within the key.
        position: usize,
    },

    /// Error when a single character has no child slot.
    #[error("Character {0:?} is not a lowercase letter a-z")]
    InvalidLetter(char),

    /// Error when a child slot outside `0..26` is addressed.
    #[error("Child index {0} is out of range (expected 0..26)")]
    IndexOutOfRange(usize),

    /// Error when a key exceeds the configured maximum length.
    #[error("Key '{key}' exceeds maximum key length of {max_length}")]
    KeyTooLong {
        /// The key that was too long.
        key: String,
        /// The maximum allowed length.
        max_length: usize,
    },
}

/// Result type for Kumu Trie operations
pub type KumuTrieResult<T> = Result<T, KumuTrieError>;
