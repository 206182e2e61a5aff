//! Lazy enumeration of stored words.

use super::node::TrieNode;

/// Iterator over every word stored in a [`KumuTrie`](super::KumuTrie), in
/// lexicographic order.
///
/// Produces the same sequence as [`KumuTrie::enumerate`](super::KumuTrie::enumerate)
/// without materializing it up front.
#[derive(Debug)]
pub struct Words<'a> {
    // Nodes still to visit, paired with their depth below the root.
    // Children are pushed in reverse so the smallest letter is popped first.
    stack: Vec<(&'a TrieNode, usize)>,
    // Letters from the root to the most recently visited node. Every letter
    // is ASCII, so byte length equals depth.
    path: String,
}

impl<'a> Words<'a> {
    pub(crate) fn new(root: &'a TrieNode) -> Self {
        Self {
            stack: vec![(root, 0)],
            path: String::new(),
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, depth)) = self.stack.pop() {
            // Pre-order: the parent's path is always a prefix of the buffer.
            self.path.truncate(depth.saturating_sub(1));
            self.path.extend(node.character());

            self.stack
                .extend(node.children().rev().map(|(_, child)| (child, depth + 1)));

            if node.is_end_word() {
                return Some(self.path.clone());
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Words<'_> {}
