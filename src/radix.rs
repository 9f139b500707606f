//! A radix (compressed) trie.
//!
//! Chains of nodes which neither branch nor terminate a key are collapsed
//! into a single edge carrying a multi-atom label. The observable behaviour
//! is identical to [`crate::trie::Trie`]; only the number of nodes differs.
//!
//! ```
//! use trie_kit::radix::RadixTrie;
//!
//! let mut trie: RadixTrie<char, ()> = RadixTrie::new();
//! trie.insert("romane".chars());
//! trie.insert("romanus".chars());
//! trie.insert("romulus".chars());
//!
//! assert!(trie.contains("romanus".chars()));
//! assert!(!trie.contains("roman".chars()));
//! assert!(trie.contains_prefix("roma".chars()));
//! // root, "rom", "an", "e", "us", "ulus"
//! assert_eq!(6, trie.node_count());
//! ```

use tracing::trace;

use crate::children::Children;
use crate::iterator::KeyValueRef;
use crate::trie::{TrieAtom, TrieValue};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub(crate) struct RadixNode<A, V> {
    /// Never empty, except on the root.
    pub(crate) label: Vec<A>,
    /// Keyed by the first atom of each child's label.
    pub(crate) children: Children<A, RadixNode<A, V>>,
    pub(crate) value: Option<V>,
    pub(crate) terminated: bool,
}

impl<A, V> RadixNode<A, V> {
    fn root() -> Self {
        Self {
            label: vec![],
            children: Children::default(),
            value: None,
            terminated: false,
        }
    }

    fn leaf(label: Vec<A>, value: Option<V>) -> Self {
        Self {
            label,
            children: Children::default(),
            value,
            terminated: true,
        }
    }
}

impl<A: TrieAtom, V> RadixNode<A, V> {
    /// Keep `label[..at]` here and push everything else down into a new
    /// child. `at` must be inside the label.
    fn split(&mut self, at: usize) {
        let suffix = self.label.split_off(at);
        let first = suffix[0];
        let tail = RadixNode {
            label: suffix,
            children: std::mem::take(&mut self.children),
            value: self.value.take(),
            terminated: std::mem::replace(&mut self.terminated, false),
        };
        self.children.insert(first, tail);
    }

    /// Absorb the only child, if there is exactly one.
    fn merge_only_child(&mut self) {
        if let Some((_, child)) = self.children.take_only() {
            let RadixNode {
                label,
                children,
                value,
                terminated,
            } = child;
            self.label.extend(label);
            self.children = children;
            self.value = value;
            self.terminated = terminated;
            trace!(len = self.label.len(), "merged radix edge");
        }
    }
}

fn common_prefix_len<A: PartialEq>(a: &[A], b: &[A]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Stores keys as edges labelled with runs of atoms.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct RadixTrie<A, V> {
    root: RadixNode<A, V>,
    count: usize,
}

impl<A, V> Default for RadixTrie<A, V> {
    fn default() -> Self {
        Self {
            root: RadixNode::root(),
            count: 0,
        }
    }
}

impl<A: TrieAtom, V: TrieValue> RadixTrie<A, V> {
    /// Create a new RadixTrie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the RadixTrie.
    pub fn clear(&mut self) {
        self.root = RadixNode::root();
        self.count = 0;
    }

    /// How many keys does the RadixTrie contain?
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Is the RadixTrie empty?
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Does the RadixTrie contain the supplied key?
    pub fn contains<K: IntoIterator<Item = A>>(&self, key: K) -> bool {
        let key: Vec<A> = key.into_iter().collect();
        self.find_node(&key).map_or(false, |n| n.terminated)
    }

    /// Does the RadixTrie contain the supplied prefix? The prefix may end
    /// part way along an edge.
    pub fn contains_prefix<P: IntoIterator<Item = A>>(&self, prefix: P) -> bool {
        let prefix: Vec<A> = prefix.into_iter().collect();
        let mut node = &self.root;
        let mut rest = prefix.as_slice();
        while let Some(first) = rest.first() {
            let child = match node.children.get(first) {
                Some(child) => child,
                None => return false,
            };
            if rest.len() <= child.label.len() {
                return child.label.starts_with(rest);
            }
            rest = match rest.strip_prefix(child.label.as_slice()) {
                Some(remainder) => remainder,
                None => return false,
            };
            node = child;
        }
        true
    }

    /// Get a reference to a key's associated value.
    pub fn get<K: IntoIterator<Item = A>>(&self, key: K) -> Option<&V> {
        let key: Vec<A> = key.into_iter().collect();
        self.find_node(&key)
            .filter(|n| n.terminated)
            .and_then(|n| n.value.as_ref())
    }

    /// Insert the key (with a value of None). Returns the previously
    /// associated value.
    pub fn insert<K: IntoIterator<Item = A>>(&mut self, key: K) -> Option<V> {
        self.insert_with_value(key, None)
    }

    /// Insert the key and value. If the key is already present the value is
    /// updated to the new value. Returns the previously associated value.
    pub fn insert_with_value<K: IntoIterator<Item = A>>(
        &mut self,
        key: K,
        value: Option<V>,
    ) -> Option<V> {
        let key: Vec<A> = key.into_iter().collect();
        let mut node = &mut self.root;
        let mut rest = key.as_slice();

        while let Some(first) = rest.first() {
            let idx = match node.children.position(first) {
                Ok(idx) => idx,
                Err(idx) => {
                    // No sibling shares a first atom: the remainder becomes
                    // one new edge.
                    node.children
                        .insert_at(idx, *first, RadixNode::leaf(rest.to_vec(), value));
                    self.count += 1;
                    trace!(len = key.len(), edge = rest.len(), "added radix leaf");
                    return None;
                }
            };
            let common = common_prefix_len(&node.children.at(idx).label, rest);
            if common < node.children.at(idx).label.len() {
                node.children.at_mut(idx).split(common);
                trace!(at = common, "split radix edge");
            }
            node = node.children.at_mut(idx);
            rest = &rest[common..];
        }

        if !node.terminated {
            node.terminated = true;
            self.count += 1;
        }
        std::mem::replace(&mut node.value, value)
    }

    /// Iterate over the RadixTrie in lexicographic key order.
    pub fn iter(&self) -> impl Iterator<Item = KeyValueRef<'_, A, V>> {
        let mut results = vec![];
        let mut stack = vec![(vec![], &self.root)];
        while let Some((key, node)) = stack.pop() {
            // Reversed so the smallest child is visited next
            for (_, child) in node.children.iter().rev() {
                let mut child_key: Vec<A> = key.clone();
                child_key.extend_from_slice(&child.label);
                stack.push((child_key, child));
            }
            if node.terminated {
                results.push(KeyValueRef {
                    key,
                    value: node.value.as_ref(),
                });
            }
        }
        results.into_iter()
    }

    /// How many nodes (including the root) does the RadixTrie hold?
    pub fn node_count(&self) -> usize {
        let mut nodes = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            nodes += 1;
            stack.extend(node.children.iter().map(|(_, child)| child));
        }
        nodes
    }

    /// Remove the key. Returns true if the key was present.
    ///
    /// Edges are re-merged so that no node is left which neither branches
    /// nor terminates a key.
    pub fn remove<K: IntoIterator<Item = A>>(&mut self, key: K) -> bool {
        self.remove_internal(key).is_some()
    }

    /// Remove the key and return its associated value.
    pub fn take<K: IntoIterator<Item = A>>(&mut self, key: K) -> Option<V> {
        self.remove_internal(key).flatten()
    }

    fn remove_internal<K: IntoIterator<Item = A>>(&mut self, key: K) -> Option<Option<V>> {
        let key: Vec<A> = key.into_iter().collect();
        if !self.find_node(&key).map_or(false, |n| n.terminated) {
            return None;
        }
        self.count -= 1;

        if key.is_empty() {
            self.root.terminated = false;
            return Some(self.root.value.take());
        }

        // Walk with `node` one edge behind, so that we hold the parent of the
        // terminal node when we reach it.
        let mut node = &mut self.root;
        let mut rest = key.as_slice();
        let mut depth = 0;
        loop {
            let first = rest[0];
            let idx = node.children.position(&first).ok()?;
            rest = &rest[node.children.at(idx).label.len()..];
            if rest.is_empty() {
                let terminal = node.children.at_mut(idx);
                terminal.terminated = false;
                let value = terminal.value.take();
                match terminal.children.len() {
                    0 => {
                        node.children.remove(&first);
                        if depth > 0 && !node.terminated {
                            node.merge_only_child();
                        }
                    }
                    1 => terminal.merge_only_child(),
                    _ => (),
                }
                trace!(len = key.len(), depth, "removed radix key");
                return Some(value);
            }
            node = node.children.at_mut(idx);
            depth += 1;
        }
    }

    fn find_node(&self, key: &[A]) -> Option<&RadixNode<A, V>> {
        let mut node = &self.root;
        let mut rest = key;
        while let Some(first) = rest.first() {
            let child = node.children.get(first)?;
            rest = rest.strip_prefix(child.label.as_slice())?;
            node = child;
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::Trie;

    fn words(trie: &RadixTrie<char, usize>) -> Vec<String> {
        trie.iter().map(|kv| kv.key.into_iter().collect()).collect()
    }

    #[test]
    fn it_adds_a_whole_word_edge() {
        let mut trie: RadixTrie<char, usize> = RadixTrie::new();
        trie.insert("abcdef".chars());
        assert!(trie.contains("abcdef".chars()));
        assert_eq!(2, trie.node_count());
        assert_eq!(1, trie.count());
    }

    #[test]
    fn it_descends_when_label_is_a_prefix() {
        let mut trie: RadixTrie<char, usize> = RadixTrie::new();
        trie.insert("test".chars());
        trie.insert("tester".chars());
        assert!(trie.contains("test".chars()));
        assert!(trie.contains("tester".chars()));
        assert!(!trie.contains("teste".chars()));
        // root, "test", "er"
        assert_eq!(3, trie.node_count());
    }

    #[test]
    fn it_splits_on_partial_overlap() {
        let mut trie: RadixTrie<char, usize> = RadixTrie::new();
        trie.insert_with_value("tester".chars(), Some(1));
        trie.insert_with_value("team".chars(), Some(2));
        assert!(!trie.contains("te".chars()));
        assert!(trie.contains_prefix("te".chars()));
        assert_eq!(trie.get("tester".chars()), Some(&1));
        assert_eq!(trie.get("team".chars()), Some(&2));
        // root, "te", "ster", "am"
        assert_eq!(4, trie.node_count());
    }

    #[test]
    fn it_terminates_at_a_split_node() {
        let mut trie: RadixTrie<char, usize> = RadixTrie::new();
        trie.insert("tester".chars());
        trie.insert("tes".chars());
        assert!(trie.contains("tes".chars()));
        assert!(trie.contains("tester".chars()));
        assert!(!trie.contains("test".chars()));
        assert_eq!(3, trie.node_count());
    }

    #[test]
    fn it_can_find_prefix_inside_an_edge() {
        let mut trie: RadixTrie<char, usize> = RadixTrie::new();
        trie.insert("abcdef".chars());
        assert!(trie.contains_prefix("abc".chars()));
        assert!(trie.contains_prefix("abcdef".chars()));
        assert!(!trie.contains_prefix("abd".chars()));
        assert!(!trie.contains_prefix("abcdefg".chars()));
        assert!(trie.contains_prefix("".chars()));
    }

    #[test]
    fn it_is_idempotent() {
        let mut trie: RadixTrie<char, usize> = RadixTrie::new();
        trie.insert("romane".chars());
        trie.insert("romanus".chars());
        let before = trie.clone();
        trie.insert("romanus".chars());
        assert_eq!(before, trie);
        assert_eq!(2, trie.count());
    }

    #[test]
    fn it_stores_the_empty_key_on_the_root() {
        let mut trie: RadixTrie<char, usize> = RadixTrie::new();
        trie.insert_with_value("".chars(), Some(0));
        assert!(trie.contains("".chars()));
        assert_eq!(1, trie.node_count());
        assert_eq!(trie.take("".chars()), Some(0));
        assert!(trie.is_empty());
    }

    #[test]
    fn it_keeps_shorter_key_when_removing_longer_key() {
        let mut trie: RadixTrie<char, usize> = RadixTrie::new();
        trie.insert("app".chars());
        trie.insert("apple".chars());
        assert!(trie.remove("apple".chars()));
        assert!(trie.contains("app".chars()));
        assert!(!trie.contains("apple".chars()));
        assert_eq!(2, trie.node_count());
    }

    #[test]
    fn it_merges_when_removing_a_split_point() {
        let mut trie: RadixTrie<char, usize> = RadixTrie::new();
        trie.insert("app".chars());
        trie.insert("apple".chars());
        assert!(trie.remove("app".chars()));
        assert!(trie.contains("apple".chars()));
        assert!(!trie.contains("app".chars()));
        assert_eq!(2, trie.node_count());
    }

    #[test]
    fn it_merges_parent_after_removing_a_leaf() {
        let mut trie: RadixTrie<char, usize> = RadixTrie::new();
        trie.insert_with_value("tester".chars(), Some(1));
        trie.insert_with_value("team".chars(), Some(2));
        assert!(trie.remove("team".chars()));
        assert_eq!(2, trie.node_count());
        assert_eq!(trie.get("tester".chars()), Some(&1));
        assert_eq!(vec!["tester"], words(&trie));
    }

    #[test]
    fn it_does_not_remove_missing_keys() {
        let mut trie: RadixTrie<char, usize> = RadixTrie::new();
        trie.insert("tester".chars());
        assert!(!trie.remove("test".chars()));
        assert!(!trie.remove("testers".chars()));
        assert!(!trie.remove("x".chars()));
        assert!(trie.contains("tester".chars()));
        assert_eq!(1, trie.count());
    }

    #[test]
    fn it_uses_fewer_nodes_than_a_plain_trie() {
        let input = ["romane", "romanus", "romulus", "rubens", "ruber", "rubicon"];
        let mut radix: RadixTrie<char, usize> = RadixTrie::new();
        let mut plain: Trie<char, usize> = Trie::new();
        for word in input {
            radix.insert(word.chars());
            plain.insert(word.chars());
        }
        for word in input {
            assert!(radix.contains(word.chars()));
        }
        assert!(radix.node_count() < plain.node_count());
        let plain_words: Vec<String> = plain
            .iter()
            .map(|kv| kv.key.into_iter().collect())
            .collect();
        assert_eq!(plain_words, words(&radix));
    }

    #[test]
    fn it_serializes_radix_trie_to_json() {
        let mut t1: RadixTrie<char, usize> = RadixTrie::new();
        t1.insert_with_value("tester".chars(), Some(1));
        t1.insert_with_value("team".chars(), Some(2));
        let t_str = serde_json::to_string(&t1).expect("serializing");
        let t2: RadixTrie<char, usize> = serde_json::from_str(&t_str).expect("deserializing");
        assert_eq!(t1, t2);
    }
}
