//! Provides Trie iterators.
//!
//! Both iterators walk the trie depth first with an explicit stack of child
//! iterators. Children are stored in atom order, so keys are produced in
//! lexicographic order and a key is always produced before its extensions.
use crate::trie::{Node, Trie, TrieAtom, TrieValue};

/// Iterator Item
#[derive(Debug)]
pub struct KeyValue<A, V> {
    pub key: Vec<A>,
    pub value: Option<V>,
}

/// Iterator Item
#[derive(Debug)]
pub struct KeyValueRef<'a, A, V> {
    pub key: Vec<A>,
    pub value: Option<&'a V>,
}

/// Iterator over a Trie.
#[derive(Debug)]
pub struct TrieIntoIterator<A, V> {
    key: Vec<A>,
    pending: Option<KeyValue<A, V>>,
    stack: Vec<std::vec::IntoIter<(A, Node<A, V>)>>,
}

impl<A: TrieAtom, V: TrieValue> IntoIterator for Trie<A, V> {
    type Item = KeyValue<A, V>;
    type IntoIter = TrieIntoIterator<A, V>;

    fn into_iter(self) -> Self::IntoIter {
        let Node {
            children,
            value,
            terminated,
        } = self.head;
        TrieIntoIterator {
            key: vec![],
            pending: terminated.then(|| KeyValue { key: vec![], value }),
            stack: vec![children.into_iter()],
        }
    }
}

impl<A: TrieAtom, V: TrieValue> Iterator for TrieIntoIterator<A, V> {
    type Item = KeyValue<A, V>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(kv) = self.pending.take() {
            return Some(kv);
        }
        loop {
            // The key always holds one atom per stack level below the top
            let depth = self.stack.len();
            match self.stack.last_mut()?.next() {
                Some((atom, node)) => {
                    self.key.truncate(depth - 1);
                    self.key.push(atom);
                    let Node {
                        children,
                        value,
                        terminated,
                    } = node;
                    self.stack.push(children.into_iter());
                    if terminated {
                        return Some(KeyValue {
                            key: self.key.clone(),
                            value,
                        });
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Iterator over a Trie.
#[derive(Debug)]
pub struct TrieRefIntoIterator<'a, A, V> {
    key: Vec<A>,
    base: usize,
    pending: Option<KeyValueRef<'a, A, V>>,
    stack: Vec<std::slice::Iter<'a, (A, Node<A, V>)>>,
}

impl<'a, A: TrieAtom, V: TrieValue> TrieRefIntoIterator<'a, A, V> {
    /// Iterate over the keys below `node`, each prefixed with `prefix`.
    pub(crate) fn new(prefix: Vec<A>, node: &'a Node<A, V>) -> Self {
        let pending = node.terminated.then(|| KeyValueRef {
            key: prefix.clone(),
            value: node.value.as_ref(),
        });
        Self {
            base: prefix.len(),
            key: prefix,
            pending,
            stack: vec![node.children.iter()],
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            key: vec![],
            base: 0,
            pending: None,
            stack: vec![],
        }
    }
}

impl<'a, A: TrieAtom, V: TrieValue> Iterator for TrieRefIntoIterator<'a, A, V> {
    type Item = KeyValueRef<'a, A, V>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(kv) = self.pending.take() {
            return Some(kv);
        }
        loop {
            let depth = self.stack.len();
            match self.stack.last_mut()?.next() {
                Some((atom, node)) => {
                    self.key.truncate(self.base + depth - 1);
                    self.key.push(*atom);
                    self.stack.push(node.children.iter());
                    if node.terminated {
                        return Some(KeyValueRef {
                            key: self.key.clone(),
                            value: node.value.as_ref(),
                        });
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

// Iterator
impl<'a, A: TrieAtom, V: TrieValue> IntoIterator for &'a Trie<A, V> {
    type Item = KeyValueRef<'a, A, V>;
    type IntoIter = TrieRefIntoIterator<'a, A, V>;

    fn into_iter(self) -> Self::IntoIter {
        TrieRefIntoIterator::new(vec![], &self.head)
    }
}
