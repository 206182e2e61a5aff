//! Key inputs accepted by the trie operations.

/// A key that may be absent.
///
/// Every trie operation accepts a `TrieKey`, so callers holding an
/// `Option<String>` can pass it straight through: `None` is the absent key
/// and is handled as a no-op (or "not found") rather than an error.
pub trait TrieKey {
    /// Returns the key text, or `None` for an absent key.
    fn as_key(&self) -> Option<&str>;
}

impl TrieKey for str {
    fn as_key(&self) -> Option<&str> {
        Some(self)
    }
}

impl TrieKey for String {
    fn as_key(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: TrieKey + ?Sized> TrieKey for &T {
    fn as_key(&self) -> Option<&str> {
        (**self).as_key()
    }
}

impl<T: TrieKey> TrieKey for Option<T> {
    fn as_key(&self) -> Option<&str> {
        self.as_ref().and_then(TrieKey::as_key)
    }
}
