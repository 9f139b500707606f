//! Provides a simple Trie implementation for storing keys composed of
//! sequences of atoms. A key may have an associated (optional) value.
//!
//! Atoms must support the TrieAtom trait. Atom values must support the
//! TrieValue trait.
//!
//! The interface relies on iterators to insert, remove, check for existence
//! of keys. Because the trie is based on the concept of atoms, then it
//! is up to the user to decide what kind of atoms to use to make most sense
//! of the keys we are storing:
//!  - chars
//!  - grapheme clusters
//!  - &str ('words')
//!
//! Example 1
//! ```
//! use trie_kit::trie::Trie;
//!
//! let mut trie: Trie<char, ()> = Trie::new();
//! trie.insert("app".chars());
//! trie.insert("apple".chars());
//!
//! assert!(trie.contains("app".chars()));
//! assert!(!trie.contains("ap".chars())); // A prefix, not a word
//! assert!(trie.contains_prefix("ap".chars()));
//!
//! // Removing "apple" must leave "app" in place
//! assert!(trie.remove("apple".chars()));
//! assert!(trie.contains("app".chars()));
//! assert!(!trie.contains("apple".chars()));
//! assert!(!trie.remove("apple".chars()));
//! ```
//!
//! Example 2
//! ```
//! use trie_kit::trie::Trie;
//!
//! // Values make frequency counting straightforward
//! let mut trie: Trie<char, usize> = Trie::new();
//! for word in "the cat and the hat and the bat".split_whitespace() {
//!     match trie.get_mut(word.chars()) {
//!         Some(count) => *count += 1,
//!         None => {
//!             trie.insert_with_value(word.chars(), Some(1));
//!         }
//!     }
//! }
//! assert_eq!(trie.get("the".chars()), Some(&3));
//! assert_eq!(trie.take("and".chars()), Some(2));
//! ```
//!
//! Example 3
//! ```
//! use trie_kit::trie::Trie;
//!
//! let mut trie: Trie<&str, ()> = Trie::new();
//! trie.insert("the quick brown fox".split_whitespace());
//! assert!(trie.contains_prefix("the quick brown".split_whitespace()));
//! ```

use tracing::trace;

use crate::children::Children;
use crate::iterator::{KeyValueRef, TrieRefIntoIterator};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Atoms which we wish to store in a Trie must implement
/// TrieAtom.
pub trait TrieAtom: Copy + Default + PartialEq + Ord {}

// Blanket implementation which satisfies the compiler
impl<A> TrieAtom for A where A: Copy + Default + PartialEq + Ord {}

/// Values which we wish to store in a Trie must implement
/// TrieValue.
pub trait TrieValue: Default {}

// Blanket implementation which satisfies the compiler
impl<V> TrieValue for V where V: Default {}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub(crate) struct Node<A, V> {
    pub(crate) children: Children<A, Node<A, V>>,
    pub(crate) value: Option<V>,
    pub(crate) terminated: bool,
}

impl<A, V> Default for Node<A, V> {
    fn default() -> Self {
        Self {
            children: Children::default(),
            value: None,
            terminated: false,
        }
    }
}

/// Stores a key of atoms as individual nodes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Trie<A, V> {
    pub(crate) head: Node<A, V>,
    count: usize,
}

impl<A, V> Default for Trie<A, V> {
    fn default() -> Self {
        Self {
            head: Node::default(),
            count: 0,
        }
    }
}

impl<A: TrieAtom, V: TrieValue> Trie<A, V> {
    /// Create a new Trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the Trie.
    pub fn clear(&mut self) {
        self.head = Node::default();
        self.count = 0;
    }

    /// Does the Trie contain the supplied key?
    ///
    /// A key which is only the prefix of stored keys is not contained.
    pub fn contains<K: IntoIterator<Item = A>>(&self, key: K) -> bool {
        self.find_node(key).map_or(false, |n| n.terminated)
    }

    /// Does the Trie contain the supplied prefix?
    ///
    /// Every stored key is also a prefix of itself. The empty prefix is
    /// always contained.
    pub fn contains_prefix<P: IntoIterator<Item = A>>(&self, prefix: P) -> bool {
        self.find_node(prefix).is_some()
    }

    /// How many keys does the Trie contain?
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Get a reference to a key's associated value.
    pub fn get<K: IntoIterator<Item = A>>(&self, key: K) -> Option<&V> {
        self.find_node(key)
            .filter(|n| n.terminated)
            .and_then(|n| n.value.as_ref())
    }

    /// Get a mutable reference to a key's associated value.
    pub fn get_mut<K: IntoIterator<Item = A>>(&mut self, key: K) -> Option<&mut V> {
        self.find_node_mut(key)
            .filter(|n| n.terminated)
            .and_then(|n| n.value.as_mut())
    }

    /// Get the longest common prefixes of the trie.
    ///
    /// There is one prefix per distinct first atom, returned in atom order.
    /// A prefix stops at the first stored key or branch along its path.
    pub fn get_lcps<K: FromIterator<A>>(&self) -> Vec<K> {
        let mut result = vec![];
        for (atom, node) in self.head.children.iter() {
            let mut lcp: Vec<A> = vec![*atom];
            let mut current = node;
            while !current.terminated && current.children.len() == 1 {
                match current.children.iter().next() {
                    Some((next_atom, next)) => {
                        lcp.push(*next_atom);
                        current = next;
                    }
                    None => break,
                }
            }
            result.push(lcp.into_iter().collect());
        }
        result
    }

    /// Insert the key (with a value of None) into the Trie. If the key is
    /// already present the value is updated to None. Returns the previously
    /// associated value.
    pub fn insert<K: IntoIterator<Item = A>>(&mut self, key: K) -> Option<V> {
        self.insert_with_value(key, None)
    }

    /// Insert the key and value into the Trie. If the key is already present
    /// the value is updated to the new value. Returns the previously
    /// associated value.
    pub fn insert_with_value<K: IntoIterator<Item = A>>(
        &mut self,
        key: K,
        value: Option<V>,
    ) -> Option<V> {
        let mut node = &mut self.head;
        let mut depth = 0;
        let mut created = 0;

        for atom in key {
            node = match node.children.position(&atom) {
                Ok(idx) => node.children.at_mut(idx),
                Err(idx) => {
                    created += 1;
                    node.children.insert_at(idx, atom, Node::default())
                }
            };
            depth += 1;
        }
        if !node.terminated {
            node.terminated = true;
            self.count += 1;
        }
        trace!(depth, created, "inserted key");
        std::mem::replace(&mut node.value, value)
    }

    /// Is the Trie empty?
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Create an iterator over the Trie. Keys are visited in
    /// lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = KeyValueRef<'_, A, V>> {
        self.into_iter()
    }

    /// Iterate over every key which starts with `prefix`, in lexicographic
    /// order.
    pub fn iter_prefix<P: IntoIterator<Item = A>>(
        &self,
        prefix: P,
    ) -> impl Iterator<Item = KeyValueRef<'_, A, V>> {
        let prefix: Vec<A> = prefix.into_iter().collect();
        match self.find_node(prefix.iter().copied()) {
            Some(node) => TrieRefIntoIterator::new(prefix, node),
            None => TrieRefIntoIterator::empty(),
        }
    }

    /// How many nodes (including the root) does the Trie hold?
    pub fn node_count(&self) -> usize {
        let mut nodes = 0;
        let mut stack = vec![&self.head];
        while let Some(node) = stack.pop() {
            nodes += 1;
            stack.extend(node.children.iter().map(|(_, child)| child));
        }
        nodes
    }

    /// Remove the key from the Trie. Returns true if the key was present.
    ///
    /// Nodes which no longer lead to any key are pruned. Pruning never
    /// reaches past an ancestor which terminates another key or which
    /// still has other children.
    pub fn remove<K: IntoIterator<Item = A>>(&mut self, key: K) -> bool {
        self.remove_internal(key).is_some()
    }

    /// Remove the key from the Trie and return its associated value. If the
    /// key is not present or has an associated value of None, None is
    /// returned.
    pub fn take<K: IntoIterator<Item = A>>(&mut self, key: K) -> Option<V> {
        self.remove_internal(key).flatten()
    }

    // The outer Option reports whether the key was present.
    fn remove_internal<K: IntoIterator<Item = A>>(&mut self, key: K) -> Option<Option<V>> {
        let atoms: Vec<A> = key.into_iter().collect();

        // Find the deepest node on the path which must survive. The child
        // below it (along the path) is where we cut.
        let mut node = &self.head;
        let mut cut = 0;
        for (depth, atom) in atoms.iter().enumerate() {
            if node.terminated || node.children.len() > 1 {
                cut = depth;
            }
            node = node.children.get(atom)?;
        }
        if !node.terminated {
            return None;
        }
        let prune = !atoms.is_empty() && node.children.is_empty();

        let terminal = self.find_node_mut(atoms.iter().copied())?;
        terminal.terminated = false;
        let value = terminal.value.take();
        self.count -= 1;

        if prune {
            let mut node = &mut self.head;
            for atom in &atoms[..cut] {
                node = node.children.get_mut(atom)?;
            }
            node.children.remove(&atoms[cut]);
            trace!(depth = atoms.len(), cut, "pruned key");
        } else {
            trace!(depth = atoms.len(), "unmarked key");
        }
        Some(value)
    }

    fn find_node<K: IntoIterator<Item = A>>(&self, key: K) -> Option<&Node<A, V>> {
        let mut node = &self.head;
        for atom in key {
            node = node.children.get(&atom)?;
        }
        Some(node)
    }

    fn find_node_mut<K: IntoIterator<Item = A>>(&mut self, key: K) -> Option<&mut Node<A, V>> {
        let mut node = &mut self.head;
        for atom in key {
            node = node.children.get_mut(&atom)?;
        }
        Some(node)
    }
}
