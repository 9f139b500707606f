//! A [`Trie`] which may be shared between threads.
//!
//! The whole tree sits behind one reader/writer lock. Every operation is
//! O(key length), so holding a single coarse lock is short and avoids any
//! per-node locking order.
//!
//! ```
//! use trie_kit::shared::SharedTrie;
//!
//! let trie: SharedTrie<char, usize> = SharedTrie::new();
//! let writer = trie.clone();
//! std::thread::spawn(move || {
//!     writer.insert_with_value("hello".chars(), Some(5));
//! })
//! .join()
//! .unwrap();
//! assert!(trie.contains("hello".chars()));
//! assert_eq!(trie.get_cloned("hello".chars()), Some(5));
//! ```

use std::sync::Arc;

use parking_lot::RwLock;

use crate::trie::{Trie, TrieAtom, TrieValue};

/// A cloneable handle to a lock protected [`Trie`].
#[derive(Debug)]
pub struct SharedTrie<A, V> {
    inner: Arc<RwLock<Trie<A, V>>>,
}

impl<A, V> Clone for SharedTrie<A, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, V> Default for SharedTrie<A, V> {
    fn default() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Trie::default())),
        }
    }
}

impl<A: TrieAtom, V: TrieValue> From<Trie<A, V>> for SharedTrie<A, V> {
    fn from(trie: Trie<A, V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }
}

impl<A: TrieAtom, V: TrieValue> SharedTrie<A, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<K: IntoIterator<Item = A>>(&self, key: K) -> Option<V> {
        self.inner.write().insert(key)
    }

    pub fn insert_with_value<K: IntoIterator<Item = A>>(
        &self,
        key: K,
        value: Option<V>,
    ) -> Option<V> {
        self.inner.write().insert_with_value(key, value)
    }

    pub fn remove<K: IntoIterator<Item = A>>(&self, key: K) -> bool {
        self.inner.write().remove(key)
    }

    pub fn clear(&self) {
        self.inner.write().clear()
    }

    pub fn contains<K: IntoIterator<Item = A>>(&self, key: K) -> bool {
        self.inner.read().contains(key)
    }

    pub fn contains_prefix<P: IntoIterator<Item = A>>(&self, prefix: P) -> bool {
        self.inner.read().contains_prefix(prefix)
    }

    pub fn count(&self) -> usize {
        self.inner.read().count()
    }

    /// Clone a key's associated value out from under the lock.
    pub fn get_cloned<K: IntoIterator<Item = A>>(&self, key: K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.read().get(key).cloned()
    }

    /// Run `f` with shared access to the whole trie.
    pub fn read<R>(&self, f: impl FnOnce(&Trie<A, V>) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` with exclusive access to the whole trie.
    pub fn write<R>(&self, f: impl FnOnce(&mut Trie<A, V>) -> R) -> R {
        f(&mut self.inner.write())
    }
}
