//! Kumu Trie Implementation
//!
//! This module provides a prefix tree over the lowercase letters `a`-`z`.
//! Every node owns a fixed array of 26 child slots, so lookups are a direct
//! index per character and enumeration falls out in lexicographic order.
//!
//! Deletion prunes every node that no longer lies on the path of a stored
//! key, so the shape of the tree always matches its contents exactly.
//!
//! # Example
//!
//! ```
//! use kumu_lib::data_structures::kumu_trie::{DeleteOutcome, KumuTrie};
//!
//! let mut trie = KumuTrie::new();
//! trie.insert("the").unwrap();
//! trie.insert("there").unwrap();
//!
//! assert!(trie.search("there").unwrap());
//! assert_eq!(trie.delete("the").unwrap(), DeleteOutcome::Deleted);
//! assert!(!trie.search("the").unwrap());
//! assert_eq!(trie.enumerate(), vec!["there".to_string()]);
//!
//! assert!(KumuTrie::is_formation_possible(["the", "hello"], "thehello").unwrap());
//! ```

mod alphabet;
mod config;
mod error;
mod iter;
mod key;
mod node;

use std::borrow::Cow;

use tracing::{debug, trace, warn};

pub use alphabet::{index_letter, letter_index, ALPHABET_SIZE};
pub use config::{KumuTrieConfig, DEFAULT_MAX_KEY_LENGTH, MAX_KEY_LENGTH_LIMIT};
pub use error::{KumuTrieError, KumuTrieResult};
pub use iter::Words;
pub use key::TrieKey;
pub use node::TrieNode;

use alphabet::key_indices;

/// What a call to [`KumuTrie::delete`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The key was present and has been removed.
    Deleted,
    /// The key was not stored in the trie; nothing changed.
    KeyNotFound,
    /// No key was given; nothing changed.
    AbsentKey,
}

/// Kumu Trie is a prefix tree over the 26 lowercase ASCII letters.
///
/// Key features:
/// * Case-insensitive keys (configurable)
/// * Exact-match search with early exit on the first missing edge
/// * Deletion that prunes nodes no other key depends on
/// * Lexicographically ordered enumeration, eager or lazy
#[derive(Debug)]
pub struct KumuTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Configuration options
    config: KumuTrieConfig,
}

impl KumuTrie {
    /// Creates a new empty `KumuTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(KumuTrieConfig::default())
    }

    /// Creates a new empty `KumuTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie. A `max_key_length` outside
    ///   `1..=MAX_KEY_LENGTH_LIMIT` is clamped into that range.
    pub fn with_config(mut config: KumuTrieConfig) -> Self {
        let max_key_length = config.max_key_length.clamp(1, MAX_KEY_LENGTH_LIMIT);
        if max_key_length != config.max_key_length {
            warn!(
                requested = config.max_key_length,
                max_key_length, "Clamped max_key_length into supported range"
            );
            config.max_key_length = max_key_length;
        }
        Self {
            root: TrieNode::root(),
            config,
        }
    }

    /// The root node. It never carries a character or an end-of-word flag.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// The configuration this trie was built with.
    pub fn config(&self) -> &KumuTrieConfig {
        &self.config
    }

    fn fold_case<'k>(&self, key: &'k str) -> Cow<'k, str> {
        if self.config.case_sensitive {
            Cow::Borrowed(key)
        } else {
            Cow::Owned(key.to_lowercase())
        }
    }

    /// Inserts a key into the trie.
    ///
    /// The whole key is validated before any node is allocated, so a rejected
    /// key leaves the trie untouched. Keys are capped at the configured
    /// `max_key_length` (4096 characters by default).
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert. An absent key is a no-op.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the key was newly added, `false` if it was
    ///   already present or absent.
    /// * `Err(KumuTrieError)` - If the key is empty, too long, or contains a
    ///   character outside `a`-`z`.
    pub fn insert<K: TrieKey>(&mut self, key: K) -> KumuTrieResult<bool> {
        let Some(key) = key.as_key() else {
            debug!("Ignoring insert of absent key");
            return Ok(false);
        };
        let key = self.fold_case(key);
        if key.is_empty() {
            return Err(KumuTrieError::EmptyKey);
        }
        if key.chars().count() > self.config.max_key_length {
            return Err(KumuTrieError::KeyTooLong {
                key: key.into_owned(),
                max_length: self.config.max_key_length,
            });
        }
        let indices = key_indices(&key)?;

        let mut node = &mut self.root;
        let mut allocated = 0usize;
        for index in indices {
            let (child, created) = node.child_or_insert(index)?;
            allocated += usize::from(created);
            node = child;
        }

        let is_new = !node.is_end_word();
        node.mark_as_leaf();
        trace!(key = %key, allocated, is_new, "Inserted key");

        Ok(is_new)
    }

    /// Checks whether a key is stored in the trie.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the key is present. Absent and empty keys are
    ///   never present.
    /// * `Err(KumuTrieError)` - If the key contains a character outside `a`-`z`.
    pub fn search<K: TrieKey>(&self, key: K) -> KumuTrieResult<bool> {
        let Some(key) = key.as_key() else {
            return Ok(false);
        };
        let key = self.fold_case(key);
        let indices = key_indices(&key)?;
        self.contains_indices(&indices)
    }

    fn contains_indices(&self, indices: &[usize]) -> KumuTrieResult<bool> {
        if indices.is_empty() {
            return Ok(false);
        }
        Ok(self
            .find_node(indices)?
            .is_some_and(TrieNode::is_end_word))
    }

    fn find_node(&self, indices: &[usize]) -> KumuTrieResult<Option<&TrieNode>> {
        let mut node = &self.root;
        for &index in indices {
            match node.child(index)? {
                Some(child) => node = child,
                None => return Ok(None),
            }
        }
        Ok(Some(node))
    }

    /// Removes a key from the trie, pruning nodes that no other key needs.
    ///
    /// # Returns
    ///
    /// * `Ok(DeleteOutcome)` - What happened; a missing or absent key is not
    ///   an error.
    /// * `Err(KumuTrieError)` - If the key contains a character outside `a`-`z`.
    pub fn delete<K: TrieKey>(&mut self, key: K) -> KumuTrieResult<DeleteOutcome> {
        let Some(key) = key.as_key() else {
            debug!("Ignoring delete of absent key");
            return Ok(DeleteOutcome::AbsentKey);
        };
        let key = self.fold_case(key);
        let indices = key_indices(&key)?;

        // Keys longer than the limit were never inserted.
        if indices.is_empty() || indices.len() > self.config.max_key_length {
            debug!(key = %key, "Key does not exist");
            return Ok(DeleteOutcome::KeyNotFound);
        }

        if self.delete_indices(&indices)? {
            debug!(key = %key, "Deleted key");
            Ok(DeleteOutcome::Deleted)
        } else {
            debug!(key = %key, "Key does not exist");
            Ok(DeleteOutcome::KeyNotFound)
        }
    }

    /// Removes the key spelled by `indices`, pruning bottom-up.
    ///
    /// Returns `false` when the key is not stored, in which case nothing has
    /// been mutated. The nodes that become useless form a single chain below
    /// the deepest node on the path that must stay: the root, a node ending
    /// another key, or a node with another branch.
    fn delete_indices(&mut self, indices: &[usize]) -> KumuTrieResult<bool> {
        let mut node = &self.root;
        let mut keep_level = 0;
        for (level, &index) in indices.iter().enumerate() {
            if level > 0 && (node.is_end_word() || node.children().nth(1).is_some()) {
                keep_level = level;
            }
            match node.child(index)? {
                Some(child) => node = child,
                None => return Ok(false),
            }
        }
        if !node.is_end_word() {
            return Ok(false);
        }

        if node.has_no_children() {
            if let Some(kept) = self.find_node_mut(&indices[..keep_level])? {
                kept.take_child(indices[keep_level])?;
                trace!(pruned = indices.len() - keep_level, "Pruned nodes");
            }
        } else if let Some(terminal) = self.find_node_mut(indices)? {
            terminal.unmark_as_leaf();
        }

        Ok(true)
    }

    fn find_node_mut(&mut self, indices: &[usize]) -> KumuTrieResult<Option<&mut TrieNode>> {
        let mut node = &mut self.root;
        for &index in indices {
            match node.child_mut(index)? {
                Some(child) => node = child,
                None => return Ok(None),
            }
        }
        Ok(Some(node))
    }

    /// Returns the number of keys stored in the trie.
    ///
    /// This walks every node, so it's an O(n) operation.
    pub fn count_words(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![&self.root];
        while let Some(node) = pending.pop() {
            count += usize::from(node.is_end_word());
            pending.extend(node.children().map(|(_, child)| child));
        }
        count
    }

    /// Returns `true` if no key is stored.
    pub fn is_empty(&self) -> bool {
        self.root.has_no_children()
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.root = TrieNode::root();
    }

    /// Returns every stored key in lexicographic order.
    ///
    /// Calling it again without an intervening mutation yields the same sequence.
    pub fn enumerate(&self) -> Vec<String> {
        self.iter().collect()
    }

    /// Returns a lazy iterator over the stored keys, in the same order as
    /// [`enumerate`](Self::enumerate).
    pub fn iter(&self) -> Words<'_> {
        Words::new(&self.root)
    }

    /// Checks whether `word` splits into a dictionary entry followed by another
    /// dictionary entry.
    ///
    /// The dictionary trie lives only for the duration of the call. Absent and
    /// empty dictionary entries are skipped.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If some prefix of `word` and the remaining suffix are
    ///   both dictionary entries.
    /// * `Ok(false)` - If no such split exists.
    /// * `Err(KumuTrieError)` - If a dictionary entry or the word is invalid.
    pub fn is_formation_possible<I, S, W>(dictionary: I, word: W) -> KumuTrieResult<bool>
    where
        I: IntoIterator<Item = S>,
        S: TrieKey,
        W: TrieKey,
    {
        Self::is_formation_possible_with_config(dictionary, word, KumuTrieConfig::default())
    }

    /// Same as [`is_formation_possible`](Self::is_formation_possible), with an
    /// explicit configuration for the dictionary trie.
    pub fn is_formation_possible_with_config<I, S, W>(
        dictionary: I,
        word: W,
        config: KumuTrieConfig,
    ) -> KumuTrieResult<bool>
    where
        I: IntoIterator<Item = S>,
        S: TrieKey,
        W: TrieKey,
    {
        let mut trie = Self::with_config(config);
        for entry in dictionary {
            match entry.as_key() {
                Some(key) if !key.is_empty() => {}
                _ => continue,
            }
            trie.insert(entry)?;
        }
        trie.has_two_word_split(word)
    }

    fn has_two_word_split<W: TrieKey>(&self, word: W) -> KumuTrieResult<bool> {
        let Some(word) = word.as_key() else {
            return Ok(false);
        };
        let word = self.fold_case(word);
        let indices = key_indices(&word)?;

        let mut node = &self.root;
        for (position, &index) in indices.iter().enumerate() {
            let Some(child) = node.child(index)? else {
                return Ok(false);
            };
            if child.is_end_word() && self.contains_indices(&indices[position + 1..])? {
                trace!(word = %word, split_at = position + 1, "Found two-word split");
                return Ok(true);
            }
            node = child;
        }

        Ok(false)
    }
}

impl Default for KumuTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a KumuTrie {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
