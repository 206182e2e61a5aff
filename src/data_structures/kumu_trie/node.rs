//! Node implementation for the Kumu Trie.
//!
//! This module provides the TrieNode structure used in the Kumu Trie implementation.
//! Each node owns up to 26 children, one per lowercase letter, through
//! boxed slots so that the whole tree has a single owner.

use std::fmt;

use super::alphabet::{index_letter, ALPHABET_SIZE};
use super::error::{KumuTrieError, KumuTrieResult};

/// A node in the Kumu Trie.
///
/// Each node represents one character of a key path. Nodes flagged as end of
/// word terminate a key that is currently stored in the trie.
///
/// Dropping and comparing walk the subtree with an explicit stack, so a
/// node of any depth can be released or compared on a small thread stack.
pub struct TrieNode {
    /// Character on the edge leading into this node, `None` for the root
    character: Option<char>,

    /// Whether a stored key ends at this node
    is_end_word: bool,

    /// Child slots; slot `i` holds the child for letter `'a' + i`
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
}

impl TrieNode {
    /// Creates a new node with no children.
    pub fn new(character: Option<char>) -> Self {
        Self {
            character,
            is_end_word: false,
            children: std::array::from_fn(|_| None),
        }
    }

    /// Creates a root node, which carries no character.
    pub fn root() -> Self {
        Self::new(None)
    }

    /// The character on the edge leading into this node.
    pub fn character(&self) -> Option<char> {
        self.character
    }

    /// Whether a stored key ends at this node.
    pub fn is_end_word(&self) -> bool {
        self.is_end_word
    }

    /// Flags this node as the end of a key.
    pub fn mark_as_leaf(&mut self) {
        self.is_end_word = true;
    }

    /// Clears the end-of-key flag.
    pub fn unmark_as_leaf(&mut self) {
        self.is_end_word = false;
    }

    /// Returns the child in slot `index`, if any.
    ///
    /// # Errors
    ///
    /// * `KumuTrieError::IndexOutOfRange` - if `index` is not in `0..26`.
    pub fn child(&self, index: usize) -> KumuTrieResult<Option<&TrieNode>> {
        self.children
            .get(index)
            .map(|slot| slot.as_deref())
            .ok_or(KumuTrieError::IndexOutOfRange(index))
    }

    /// Returns a mutable reference to the child in slot `index`, if any.
    ///
    /// # Errors
    ///
    /// * `KumuTrieError::IndexOutOfRange` - if `index` is not in `0..26`.
    pub fn child_mut(&mut self, index: usize) -> KumuTrieResult<Option<&mut TrieNode>> {
        self.children
            .get_mut(index)
            .map(|slot| slot.as_deref_mut())
            .ok_or(KumuTrieError::IndexOutOfRange(index))
    }

    /// Returns the child in slot `index`, creating it first if the slot is empty.
    ///
    /// The boolean is `true` when a new node was allocated.
    ///
    /// # Errors
    ///
    /// * `KumuTrieError::IndexOutOfRange` - if `index` is not in `0..26`.
    pub fn child_or_insert(&mut self, index: usize) -> KumuTrieResult<(&mut TrieNode, bool)> {
        let letter = index_letter(index)?;
        let slot = &mut self.children[index];
        let created = slot.is_none();
        let child = slot.get_or_insert_with(|| Box::new(TrieNode::new(Some(letter))));
        Ok((child, created))
    }

    /// Detaches and returns the child in slot `index`.
    ///
    /// # Errors
    ///
    /// * `KumuTrieError::IndexOutOfRange` - if `index` is not in `0..26`.
    pub fn take_child(&mut self, index: usize) -> KumuTrieResult<Option<Box<TrieNode>>> {
        self.children
            .get_mut(index)
            .map(Option::take)
            .ok_or(KumuTrieError::IndexOutOfRange(index))
    }

    /// Returns `true` if every child slot is empty.
    pub fn has_no_children(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// Iterates over occupied slots in increasing letter order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (usize, &TrieNode)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_deref().map(|child| (index, child)))
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::root()
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // Detach children before they drop so the default drop glue never recurses.
        let mut detached: Vec<Box<TrieNode>> =
            self.children.iter_mut().filter_map(Option::take).collect();
        while let Some(mut node) = detached.pop() {
            detached.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

impl PartialEq for TrieNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            if left.character != right.character || left.is_end_word != right.is_end_word {
                return false;
            }
            for (left, right) in left.children.iter().zip(right.children.iter()) {
                match (left.as_deref(), right.as_deref()) {
                    (Some(left), Some(right)) => pending.push((left, right)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for TrieNode {}

impl fmt::Debug for TrieNode {
    /// Shows this node and the letters of its direct children only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let children: String = self
            .children()
            .filter_map(|(_, child)| child.character())
            .collect();
        f.debug_struct("TrieNode")
            .field("character", &self.character)
            .field("is_end_word", &self.is_end_word)
            .field("children", &children)
            .finish()
    }
}
