//! A trie which can be searched with patterns.
//!
//! A pattern is a key in which one chosen atom, the wildcard, stands for
//! exactly one arbitrary atom.
//!
//! ```
//! use trie_kit::wildcard::WildcardTrie;
//!
//! let mut trie: WildcardTrie<char, ()> = WildcardTrie::new();
//! trie.insert("hat".chars());
//! trie.insert("cat".chars());
//!
//! assert!(trie.contains_pattern("h.t".chars(), '.'));
//! assert!(trie.contains_pattern("c.t".chars(), '.'));
//! assert!(!trie.contains_pattern("b.t".chars(), '.'));
//! assert!(!trie.contains_pattern("..".chars(), '.'));
//! ```
//!
//! # Cost
//!
//! A literal atom follows at most one edge, but a wildcard follows every
//! edge out of the current node. A pattern with `w` wildcards over an
//! alphabet of `k` atoms may visit O(k^w) nodes. This is fine for short
//! patterns, and grows quickly with patterns such as `"....."`.

use crate::trie::{Node, Trie, TrieAtom, TrieValue};

/// A [`Trie`] with pattern search.
#[derive(Clone, Debug, PartialEq)]
pub struct WildcardTrie<A, V> {
    trie: Trie<A, V>,
}

impl<A, V> Default for WildcardTrie<A, V> {
    fn default() -> Self {
        Self {
            trie: Trie::default(),
        }
    }
}

impl<A: TrieAtom, V: TrieValue> From<Trie<A, V>> for WildcardTrie<A, V> {
    fn from(trie: Trie<A, V>) -> Self {
        Self { trie }
    }
}

impl<A: TrieAtom, V: TrieValue> WildcardTrie<A, V> {
    /// Create a new WildcardTrie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Unwrap the underlying [`Trie`].
    pub fn into_inner(self) -> Trie<A, V> {
        self.trie
    }

    /// See [`Trie::insert`].
    pub fn insert<K: IntoIterator<Item = A>>(&mut self, key: K) -> Option<V> {
        self.trie.insert(key)
    }

    /// See [`Trie::insert_with_value`].
    pub fn insert_with_value<K: IntoIterator<Item = A>>(
        &mut self,
        key: K,
        value: Option<V>,
    ) -> Option<V> {
        self.trie.insert_with_value(key, value)
    }

    /// See [`Trie::contains`]. The wildcard has no special meaning here.
    pub fn contains<K: IntoIterator<Item = A>>(&self, key: K) -> bool {
        self.trie.contains(key)
    }

    /// See [`Trie::contains_prefix`].
    pub fn contains_prefix<P: IntoIterator<Item = A>>(&self, prefix: P) -> bool {
        self.trie.contains_prefix(prefix)
    }

    /// See [`Trie::remove`].
    pub fn remove<K: IntoIterator<Item = A>>(&mut self, key: K) -> bool {
        self.trie.remove(key)
    }

    /// See [`Trie::count`].
    pub fn count(&self) -> usize {
        self.trie.count()
    }

    /// See [`Trie::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Does any stored key match `pattern`? Every occurrence of `wildcard`
    /// in the pattern matches exactly one atom of any value.
    ///
    /// Stops at the first complete match. See the module docs for the cost.
    pub fn contains_pattern<P: IntoIterator<Item = A>>(&self, pattern: P, wildcard: A) -> bool {
        let pattern: Vec<A> = pattern.into_iter().collect();
        let mut stack = vec![(&self.trie.head, 0)];
        while let Some((node, depth)) = stack.pop() {
            let Some(atom) = pattern.get(depth) else {
                if node.terminated {
                    return true;
                }
                continue;
            };
            if *atom == wildcard {
                stack.extend(node.children.iter().map(|(_, child)| (child, depth + 1)));
            } else if let Some(child) = node.children.get(atom) {
                stack.push((child, depth + 1));
            }
        }
        false
    }

    /// Every stored key which matches `pattern`, in lexicographic order.
    pub fn matches<P: IntoIterator<Item = A>>(&self, pattern: P, wildcard: A) -> Vec<Vec<A>> {
        let pattern: Vec<A> = pattern.into_iter().collect();
        let mut results = vec![];
        let mut stack: Vec<(&Node<A, V>, Vec<A>)> = vec![(&self.trie.head, vec![])];
        while let Some((node, key)) = stack.pop() {
            let Some(atom) = pattern.get(key.len()) else {
                if node.terminated {
                    results.push(key);
                }
                continue;
            };
            if *atom == wildcard {
                // Reversed so the smallest child is visited next
                for (child_atom, child) in node.children.iter().rev() {
                    let mut child_key = key.clone();
                    child_key.push(*child_atom);
                    stack.push((child, child_key));
                }
            } else if let Some(child) = node.children.get(atom) {
                let mut child_key = key;
                child_key.push(*atom);
                stack.push((child, child_key));
            }
        }
        results
    }
}
