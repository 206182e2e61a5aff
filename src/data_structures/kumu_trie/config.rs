//! Configuration for the Kumu Trie.

use serde::{Deserialize, Serialize};

/// Default maximum key length in characters.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 4096;

/// Largest `max_key_length` a trie accepts; larger values are clamped.
pub const MAX_KEY_LENGTH_LIMIT: usize = 65_536;

/// Configuration options for the Kumu Trie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KumuTrieConfig {
    /// Whether keys are used as given instead of being lowercased first.
    /// With case sensitivity on, uppercase letters are rejected.
    pub case_sensitive: bool,

    /// Maximum key length in characters; longer keys are rejected on insert.
    /// Must be within `1..=MAX_KEY_LENGTH_LIMIT`.
    pub max_key_length: usize,
}

impl KumuTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - case_sensitive: false
    /// - max_key_length: 4096
    pub fn new() -> Self {
        Self {
            case_sensitive: false,
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
        }
    }

    /// Set whether keys are case sensitive.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Set the maximum key length.
    pub fn with_max_key_length(mut self, max_key_length: usize) -> Self {
        self.max_key_length = max_key_length;
        self
    }
}

impl Default for KumuTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
